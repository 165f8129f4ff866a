//! Extension trait turning foreign `Result` errors into [`HttpError`]s.
//!
//! # Examples
//!
//! ```
//! use http::StatusCode;
//! use http_rail::traits::HttpResultExt;
//! use http_rail::HttpError;
//!
//! fn load_config() -> Result<String, HttpError> {
//!     std::fs::read_to_string("/definitely/not/here.toml")
//!         .or_status(StatusCode::SERVICE_UNAVAILABLE)
//! }
//!
//! let err = load_config().unwrap_err();
//! assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
//! assert!(err.cause().is_some());
//! ```

use http::StatusCode;

use crate::settings::Settings;
use crate::types::{BoxError, HttpError};

/// Wraps the error of a `Result` into an [`HttpError`].
///
/// The status comes from the configured [`StatusResolver`](crate::traits::StatusResolver),
/// or `fallback` when none is configured. The stack is captured at the calling
/// line.
pub trait HttpResultExt<T> {
    /// Wraps the error using [`Settings::global`].
    #[track_caller]
    fn or_status(self, fallback: StatusCode) -> Result<T, HttpError>;

    /// Wraps the error using `settings`.
    #[track_caller]
    fn or_status_with(self, settings: &Settings, fallback: StatusCode) -> Result<T, HttpError>;
}

impl<T, E> HttpResultExt<T> for Result<T, E>
where
    E: Into<BoxError>,
{
    #[inline]
    #[track_caller]
    fn or_status(self, fallback: StatusCode) -> Result<T, HttpError> {
        self.or_status_with(Settings::global(), fallback)
    }

    #[track_caller]
    fn or_status_with(self, settings: &Settings, fallback: StatusCode) -> Result<T, HttpError> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => {
                let cause: BoxError = err.into();
                let status = settings.resolve_status(&*cause, fallback);
                Err(HttpError::build(settings, status, String::new(), Some(cause)))
            },
        }
    }
}
