//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use http_rail::prelude::*;
//!
//! fn load(id: u64) -> HttpResult<String> {
//!     if id == 0 {
//!         bail_http!(BAD_REQUEST, "id must be positive");
//!     }
//!     std::fs::read_to_string(format!("/no/such/user/{id}")).or_status(StatusCode::NOT_FOUND)
//! }
//!
//! assert_eq!(load(0).unwrap_err().status_code(), StatusCode::BAD_REQUEST);
//! assert_eq!(load(7).unwrap_err().status_code(), StatusCode::NOT_FOUND);
//! ```

// Macros
pub use crate::{bail_http, http_error};

// Core types
pub use crate::http::StatusCode;
pub use crate::settings::{Settings, StackConfig, Visibility};
pub use crate::types::HttpError;

// Traits
pub use crate::traits::{HttpResultExt, StatusError};

/// Result whose error is an [`HttpError`].
pub type HttpResult<T> = Result<T, HttpError>;
