//! # Heavyweight Config
//!
//! Configuration types for the Heavyweight API.
//!
//! This crate provides the process-wide settings snapshot loaded from
//! environment variables:
//!
//! - [`settings`]: Application settings (secret key, database URL, server options)
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//!
//! The snapshot is built once at startup and shared by reference; there is no
//! global cache and no reload mechanism.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use heavyweight_config::Settings;
//!
//! dotenvy::dotenv().ok();
//! let settings = Arc::new(Settings::from_env()?);
//! ```

pub mod cors;
pub mod settings;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use settings::{ConfigError, Settings};
