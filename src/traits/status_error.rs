//! Errors that know which HTTP status they map to.
//!
//! [`StatusError`] is the middle capability tier between a plain
//! [`Error`](core::error::Error) and a full [`HttpError`](crate::HttpError).
//! Implement it for domain errors that should reach the client with a specific
//! status but carry no reasons, headers or stack.
//!
//! # Examples
//!
//! ```
//! use http::StatusCode;
//! use http_rail::traits::StatusError;
//!
//! #[derive(Debug)]
//! struct Teapot;
//!
//! impl core::fmt::Display for Teapot {
//!     fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
//!         f.write_str("short and stout")
//!     }
//! }
//!
//! impl core::error::Error for Teapot {}
//!
//! impl StatusError for Teapot {
//!     fn status_code(&self) -> StatusCode {
//!         StatusCode::IM_A_TEAPOT
//!     }
//! }
//!
//! assert_eq!(Teapot.status_code(), StatusCode::IM_A_TEAPOT);
//! ```

use std::borrow::Cow;

use http::StatusCode;

/// An error carrying an HTTP status code.
pub trait StatusError: core::error::Error {
    /// The status the error should be reported with.
    fn status_code(&self) -> StatusCode;
}

impl<T: StatusError> StatusError for Box<T> {
    #[inline]
    fn status_code(&self) -> StatusCode {
        (**self).status_code()
    }
}

/// Standard reason phrase for `status`.
///
/// Codes without a registered phrase fall back to their numeric form so that a
/// message derived from a status is never empty.
pub fn reason_phrase(status: StatusCode) -> Cow<'static, str> {
    match status.canonical_reason() {
        Some(phrase) => Cow::Borrowed(phrase),
        None => Cow::Owned(status.as_str().to_owned()),
    }
}
