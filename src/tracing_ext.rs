//! Tracing integration for http-rail.
//!
//! Nothing in the crate logs on its own. These extensions emit one structured
//! event per error when asked to, at a level derived from the status:
//! `ERROR` for 5xx, `WARN` for 4xx and `INFO` for everything else.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! http-rail = { version = "0.1", features = ["tracing"] }
//! ```

use http::StatusCode;
use tracing::Level;

use crate::types::HttpError;

/// Level an error with `status` is reported at.
pub fn level_for(status: StatusCode) -> Level {
    if status.is_server_error() {
        Level::ERROR
    } else if status.is_client_error() {
        Level::WARN
    } else {
        Level::INFO
    }
}

fn emit(error: &HttpError) {
    let status = error.status_code().as_u16();
    let cause = error.cause().map(tracing::field::display);
    let level = level_for(error.status_code());
    if level == Level::ERROR {
        tracing::error!(status, error = %error.message(), cause, "http error");
    } else if level == Level::WARN {
        tracing::warn!(status, error = %error.message(), cause, "http error");
    } else {
        tracing::info!(status, error = %error.message(), cause, "http error");
    }
}

/// Emits a tracing event describing an [`HttpError`].
///
/// # Example
///
/// ```rust,ignore
/// use http_rail::tracing_ext::ErrorTracingExt;
///
/// let err = HttpError::bad_gateway("upstream failed", Some(io_err)).trace_error();
/// ```
pub trait ErrorTracingExt: Sized {
    /// Emits the event and hands the error back.
    fn trace_error(self) -> Self;
}

impl ErrorTracingExt for HttpError {
    fn trace_error(self) -> Self {
        emit(&self);
        self
    }
}

/// Emits a tracing event when a `Result` holds an [`HttpError`].
pub trait ResultTracingExt {
    /// Emits the event on `Err` and returns the result unchanged.
    fn trace_err(self) -> Self;
}

impl<T> ResultTracingExt for Result<T, HttpError> {
    fn trace_err(self) -> Self {
        if let Err(error) = &self {
            emit(error);
        }
        self
    }
}
