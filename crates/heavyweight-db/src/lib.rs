//! # Heavyweight DB
//!
//! Database session factory for the Heavyweight API.
//!
//! [`Database`] wraps an SQLx connection pool built over the `Any` driver, so
//! the same code runs against PostgreSQL in production and SQLite in tests.
//! The pool is created lazily: no connection is opened until the first
//! session is requested.
//!
//! A [`DbSession`] is one pooled connection checked out for the duration of a
//! request. Dropping it returns the connection to the pool, whether the
//! request succeeded, failed, or panicked.
//!
//! # Example
//!
//! ```ignore
//! use heavyweight_db::{Database, PoolSettings};
//!
//! let db = Database::connect_lazy(&settings.database_url, PoolSettings::default())?;
//!
//! let mut session = db.open().await?;
//! sqlx::query("SELECT 1").execute(&mut *session).await?;
//! // session released here
//! ```

use std::ops::{Deref, DerefMut};
use std::time::Duration;

use sqlx::AnyConnection;
use sqlx::any::{AnyPoolOptions, install_default_drivers};
use sqlx::pool::PoolConnection;
use thiserror::Error;

pub use sqlx::{Any, AnyPool};

/// URL schemes with an installed driver.
pub const SUPPORTED_SCHEMES: [&str; 3] = ["postgres", "postgresql", "sqlite"];

#[derive(Debug, Error)]
pub enum DbError {
    #[error("invalid database configuration: {0}")]
    Configuration(#[source] sqlx::Error),

    #[error("failed to open database session: {0}")]
    Acquire(#[source] sqlx::Error),
}

/// Pool sizing and timeouts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolSettings {
    pub max_connections: u32,
    /// How long [`Database::open`] waits for a free connection.
    pub acquire_timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: 10,
            acquire_timeout: Duration::from_secs(5),
        }
    }
}

/// Produces request-scoped database sessions.
#[derive(Clone, Debug)]
pub struct Database {
    pool: AnyPool,
}

impl Database {
    /// Builds the pool without connecting.
    ///
    /// Must be called from within a Tokio runtime. Fails if the URL scheme is
    /// not one of [`SUPPORTED_SCHEMES`]; the Any driver would otherwise only
    /// notice on the first connection attempt.
    pub fn connect_lazy(url: &str, settings: PoolSettings) -> Result<Self, DbError> {
        check_scheme(url)?;
        install_default_drivers();

        let pool = AnyPoolOptions::new()
            .max_connections(settings.max_connections)
            .acquire_timeout(settings.acquire_timeout)
            .connect_lazy(url)
            .map_err(DbError::Configuration)?;

        Ok(Self { pool })
    }

    pub fn from_pool(pool: AnyPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &AnyPool {
        &self.pool
    }

    /// Checks out a session. No retry beyond the pool's acquire timeout.
    pub async fn open(&self) -> Result<DbSession, DbError> {
        let conn = self.pool.acquire().await.map_err(DbError::Acquire)?;
        tracing::trace!("Database session opened");
        Ok(DbSession { conn })
    }

    /// Closes every connection; subsequent [`Database::open`] calls fail.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

fn check_scheme(url: &str) -> Result<(), DbError> {
    let scheme = url.split_once(':').map(|(scheme, _)| scheme).unwrap_or(url);

    if SUPPORTED_SCHEMES.contains(&scheme) {
        Ok(())
    } else {
        Err(DbError::Configuration(sqlx::Error::Configuration(
            format!("unsupported database URL scheme `{}`", scheme).into(),
        )))
    }
}

/// A pooled connection held for one request.
#[derive(Debug)]
pub struct DbSession {
    conn: PoolConnection<Any>,
}

impl DbSession {
    /// Releases the session explicitly. Dropping it has the same effect.
    pub fn close(self) {
        drop(self);
    }
}

impl Drop for DbSession {
    fn drop(&mut self) {
        tracing::trace!("Database session released");
    }
}

impl Deref for DbSession {
    type Target = AnyConnection;

    fn deref(&self) -> &Self::Target {
        &self.conn
    }
}

impl DerefMut for DbSession {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.conn
    }
}
