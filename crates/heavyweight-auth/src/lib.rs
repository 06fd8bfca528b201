//! # Heavyweight Auth
//!
//! Access token issuance for the Heavyweight API.
//!
//! - [`jwt`]: Signed, time-limited access tokens built from a claim mapping
//!
//! Verifying tokens is left to whatever sits in front of protected routes;
//! this crate only issues them.
//!
//! # Example
//!
//! ```ignore
//! use heavyweight_auth::{JwtConfig, create_access_token};
//! use serde_json::{Map, json};
//!
//! let config = JwtConfig::from_settings(&settings);
//!
//! let mut claims = Map::new();
//! claims.insert("sub".to_string(), json!("user-42"));
//!
//! let token = create_access_token(&claims, &config)?;
//! ```

pub mod jwt;

pub use jwt::{
    ALGORITHM, DEFAULT_ACCESS_TOKEN_EXPIRY, JwtConfig, create_access_token,
    create_access_token_with_expiry,
};
