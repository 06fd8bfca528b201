//! JWT (JSON Web Token) access token issuance.
//!
//! Tokens carry an arbitrary caller-supplied claim mapping plus an `exp`
//! claim (Unix timestamp, seconds). They are signed with HS256 using the
//! process-wide secret key.
//!
//! # Example
//!
//! ```ignore
//! let mut claims = Map::new();
//! claims.insert("sub".to_string(), json!("user-42"));
//! claims.insert("scope".to_string(), json!(["read"]));
//!
//! // Expires after the configured default (60 minutes)
//! let token = create_access_token(&claims, &jwt_config)?;
//!
//! // Expires after 5 minutes
//! let short = create_access_token_with_expiry(&claims, Duration::minutes(5), &jwt_config)?;
//! ```

use std::fmt;

use anyhow::anyhow;
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde_json::{Map, Value};

use heavyweight_config::Settings;
use heavyweight_core::AppError;

/// Signing algorithm for every issued token.
pub const ALGORITHM: Algorithm = Algorithm::HS256;

/// Expiry applied by [`create_access_token`] unless configured otherwise.
pub const DEFAULT_ACCESS_TOKEN_EXPIRY: Duration = Duration::minutes(60);

/// Claim name of the expiration timestamp.
pub const EXPIRATION_CLAIM: &str = "exp";

#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub access_token_expiry: Duration,
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("access_token_expiry", &self.access_token_expiry)
            .finish()
    }
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            access_token_expiry: DEFAULT_ACCESS_TOKEN_EXPIRY,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            secret: settings.secret_key.clone(),
            access_token_expiry: Duration::try_minutes(settings.access_token_expire_minutes)
                .unwrap_or(DEFAULT_ACCESS_TOKEN_EXPIRY),
        }
    }
}

/// Creates an access token that expires after the configured expiry.
pub fn create_access_token(
    data: &Map<String, Value>,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    create_access_token_with_expiry(data, jwt_config.access_token_expiry, jwt_config)
}

/// Creates an access token that expires `expires_in` from now.
///
/// The claim mapping is copied and an `exp` claim is injected; a caller
/// supplied `exp` is overwritten.
///
/// # Errors
///
/// Returns an internal error if the expiry is out of range or encoding fails.
pub fn create_access_token_with_expiry(
    data: &Map<String, Value>,
    expires_in: Duration,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let expire = Utc::now()
        .checked_add_signed(expires_in)
        .ok_or_else(|| AppError::internal(anyhow!("Token expiry is out of range")))?;

    let mut to_encode = data.clone();
    to_encode.insert(
        EXPIRATION_CLAIM.to_string(),
        Value::from(expire.timestamp()),
    );

    encode(
        &Header::new(ALGORITHM),
        &to_encode,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow!("Failed to create token: {}", e)))
}
