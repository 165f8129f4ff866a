//! Formatting shortcuts for building [`HttpError`](crate::HttpError)s.
//!
//! - [`macro@crate::http_error`] - builds an error with a `format!`-style message.
//! - [`macro@crate::bail_http`] - returns such an error early as `Err(..)`.
//!
//! The status is either a `StatusCode` constant name (`NOT_FOUND`) or any
//! expression evaluating to a `StatusCode`. A bare identifier is always read as
//! a constant name; wrap a variable in braces (`{ status }`) to pass it.
//!
//! # Examples
//!
//! ```
//! use http::StatusCode;
//! use http_rail::{bail_http, http_error, HttpError};
//!
//! let err = http_error!(NOT_FOUND, "user {} not found", 42);
//! assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
//! assert_eq!(err.message(), "user 42 not found");
//!
//! fn check(age: u8) -> Result<u8, HttpError> {
//!     if age < 18 {
//!         bail_http!(StatusCode::FORBIDDEN, "too young: {}", age);
//!     }
//!     Ok(age)
//! }
//!
//! assert_eq!(check(12).unwrap_err().message(), "too young: 12");
//! ```

/// Builds an [`HttpError`](crate::HttpError) with a formatted message.
///
/// The stack is captured at the macro's expansion site. Without a format string
/// the message is the status's reason phrase.
///
/// ```
/// use http_rail::http_error;
///
/// assert_eq!(http_error!(GONE).message(), "Gone");
/// assert_eq!(http_error!(http::StatusCode::CONFLICT, "rev {}", 7).message(), "rev 7");
/// ```
#[macro_export]
macro_rules! http_error {
    ($status:ident $(,)?) => {
        $crate::HttpError::new($crate::http::StatusCode::$status, "")
    };
    ($status:ident, $($arg:tt)+) => {
        $crate::HttpError::new_fmt($crate::http::StatusCode::$status, format_args!($($arg)+))
    };
    ($status:expr $(,)?) => {
        $crate::HttpError::new($status, "")
    };
    ($status:expr, $($arg:tt)+) => {
        $crate::HttpError::new_fmt($status, format_args!($($arg)+))
    };
}

/// Returns early with `Err(http_error!(..))`, converted with `Into`.
#[macro_export]
macro_rules! bail_http {
    ($($arg:tt)+) => {
        return ::core::result::Result::Err(::core::convert::Into::into($crate::http_error!($($arg)+)))
    };
}
