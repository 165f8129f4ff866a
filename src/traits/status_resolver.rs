//! Pluggable mapping from an arbitrary cause to an HTTP status.
//!
//! [`HttpError::wrap`](crate::HttpError::wrap) consults the resolver configured in
//! [`Settings`](crate::Settings) to decide which status a foreign error deserves.
//! A resolver that does not recognise the cause returns the fallback unchanged.
//!
//! # Examples
//!
//! ```
//! use http::StatusCode;
//! use http_rail::{HttpError, Settings};
//!
//! let settings = Settings::default().with_status_resolver(
//!     |cause: &(dyn core::error::Error + 'static), fallback: StatusCode| {
//!         match cause.downcast_ref::<std::io::Error>() {
//!             Some(err) if err.kind() == std::io::ErrorKind::NotFound => StatusCode::NOT_FOUND,
//!             _ => fallback,
//!         }
//!     },
//! );
//!
//! let missing = std::io::Error::new(std::io::ErrorKind::NotFound, "no such row");
//! let err = settings.wrap(Some(missing), StatusCode::INTERNAL_SERVER_ERROR).unwrap();
//! assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
//! assert_eq!(err.message(), "Not Found");
//! ```

use core::error::Error;

use http::StatusCode;

/// Resolves the status for a wrapped cause.
pub trait StatusResolver: Send + Sync {
    /// Returns the status for `cause`, or `fallback` when the cause is not recognised.
    fn resolve(&self, cause: &(dyn Error + 'static), fallback: StatusCode) -> StatusCode;
}

impl<F> StatusResolver for F
where
    F: Fn(&(dyn Error + 'static), StatusCode) -> StatusCode + Send + Sync,
{
    #[inline]
    fn resolve(&self, cause: &(dyn Error + 'static), fallback: StatusCode) -> StatusCode {
        self(cause, fallback)
    }
}
