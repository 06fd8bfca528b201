//! # Heavyweight Core
//!
//! Core types, errors, and utilities for the Heavyweight API.
//!
//! - [`errors`]: Application error type rendered as an error envelope
//! - [`pagination`]: Pagination descriptor, window computation and metadata
//! - [`response`]: Uniform success and paginated response envelopes
//! - [`password`]: Argon2 password hashing and verification
//! - [`serde`]: Serde helpers for query-string input
//!
//! # Example
//!
//! ```ignore
//! use heavyweight_core::{PaginatedResponse, PaginationParams};
//! use heavyweight_core::password::{hash_password, verify_password};
//!
//! let hash = hash_password("secure_password")?;
//! assert!(verify_password("secure_password", &hash)?);
//!
//! let params = PaginationParams::default();
//! let response = PaginatedResponse::from_slice(&names, &params);
//! ```

pub mod errors;
pub mod pagination;
pub mod password;
pub mod response;
pub mod serde;

// Re-export commonly used types at crate root
pub use errors::AppError;
pub use pagination::{PaginationMeta, PaginationParams, SortOrder, paginate};
pub use password::{hash_password, verify_password};
pub use response::{ApiResponse, PaginatedResponse, ResponseStatus};
