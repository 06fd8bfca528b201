//! Request extractors for cross-cutting concerns.
//!
//! - [`db`]: Request-scoped database session
//! - [`validator`]: Query string deserialization plus validation
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::{db::Db, validator::ValidatedQuery};
//!
//! async fn handler(
//!     Db(session): Db,
//!     ValidatedQuery(params): ValidatedQuery<PaginationParams>,
//! ) -> impl IntoResponse {
//!     // session is released when the handler returns
//! }
//! ```

pub mod db;
pub mod validator;
