//! Writing errors into HTTP responses.
//!
//! An [`ErrorWriter`] turns an error into headers, a status line and a body on a
//! [`ResponseSink`]. The default [`JsonErrorWriter`] produces:
//!
//! ```text
//! Content-Type: application/json
//! <custom headers>
//! <status line>
//!
//! {"$error": "...", "$reasons": [...], "$cause": "...", "$stack": [...]}
//! ```
//!
//! What it can say depends on how much the error exposes, see [`ErrorTier`].
//!
//! # Examples
//!
//! ```
//! use http::StatusCode;
//! use http_rail::{HttpError, Settings};
//!
//! let err = HttpError::not_found("").add_reason("no such user");
//! let response = err.to_response(&Settings::default()).unwrap();
//!
//! assert_eq!(response.status(), StatusCode::NOT_FOUND);
//! assert_eq!(response.headers()["content-type"], "application/json");
//!
//! let body: serde_json::Value = serde_json::from_slice(response.body()).unwrap();
//! assert_eq!(body, serde_json::json!({ "$error": "Not Found", "$reasons": ["no such user"] }));
//! ```

use core::error::Error;

use http::header::CONTENT_TYPE;
use http::{HeaderName, HeaderValue, StatusCode};
use serde::{Deserialize, Serialize};

use crate::settings::Settings;
use crate::traits::{reason_phrase, StatusError};
use crate::types::http_error::cause_message;
use crate::types::{BoxError, HttpError};

mod error;
mod recorder;

pub use error::WriteError;
pub use recorder::ResponseRecorder;

pub const APPLICATION_JSON: &str = "application/json";

pub const ERROR_FIELD: &str = "$error";
pub const REASONS_FIELD: &str = "$reasons";
pub const CAUSE_FIELD: &str = "$cause";
pub const STACK_FIELD: &str = "$stack";

/// Destination of a written error response.
///
/// Headers set after [`write_status`](Self::write_status) may be ignored by the
/// sink, so writers set every header first.
pub trait ResponseSink {
    fn set_header(&mut self, name: &str, value: &str) -> Result<(), WriteError>;

    fn write_status(&mut self, status: StatusCode);

    fn write_body(&mut self, body: &[u8]) -> Result<(), WriteError>;
}

pub(crate) fn header_pair(name: &str, value: &str) -> Result<(HeaderName, HeaderValue), WriteError> {
    let header = HeaderName::from_bytes(name.as_bytes())
        .map_err(|_| WriteError::InvalidHeaderName { name: name.to_owned() })?;
    let value = HeaderValue::from_str(value)
        .map_err(|_| WriteError::InvalidHeaderValue { name: name.to_owned() })?;
    Ok((header, value))
}

impl ResponseSink for http::Response<Vec<u8>> {
    fn set_header(&mut self, name: &str, value: &str) -> Result<(), WriteError> {
        let (name, value) = header_pair(name, value)?;
        self.headers_mut().insert(name, value);
        Ok(())
    }

    fn write_status(&mut self, status: StatusCode) {
        *self.status_mut() = status;
    }

    fn write_body(&mut self, body: &[u8]) -> Result<(), WriteError> {
        self.body_mut().extend_from_slice(body);
        Ok(())
    }
}

/// How much of an error a writer can see.
///
/// - `Full`: an [`HttpError`]. Status, message, reasons, headers, cause and stack.
/// - `Status`: anything implementing [`StatusError`]. Status, message and source.
/// - `Plain`: any other error. It is answered with `500 Internal Server Error`.
#[derive(Clone, Copy)]
pub enum ErrorTier<'a> {
    Full(&'a HttpError),
    Status(&'a dyn StatusError),
    Plain(&'a (dyn Error + 'static)),
}

impl<'a> ErrorTier<'a> {
    #[inline]
    pub fn full(error: &'a HttpError) -> Self {
        Self::Full(error)
    }

    #[inline]
    pub fn status(error: &'a dyn StatusError) -> Self {
        Self::Status(error)
    }

    #[inline]
    pub fn plain(error: &'a (dyn Error + 'static)) -> Self {
        Self::Plain(error)
    }

    /// Picks `Full` when `error` is an [`HttpError`], `Plain` otherwise.
    ///
    /// Types implementing only [`StatusError`] cannot be discovered behind a
    /// `dyn Error`; pass them through [`ErrorTier::status`].
    pub fn probe(error: &'a (dyn Error + 'static)) -> Self {
        match error.downcast_ref::<HttpError>() {
            Some(http) => Self::Full(http),
            None => Self::Plain(error),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Full(err) => err.status_code(),
            Self::Status(err) => err.status_code(),
            Self::Plain(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message written as `$error`.
    ///
    /// A status-tier error with an empty message falls back to its reason phrase.
    pub fn message(&self) -> String {
        match self {
            Self::Full(err) => err.message().to_owned(),
            Self::Status(err) => {
                let message = err.to_string();
                if message.is_empty() {
                    reason_phrase(err.status_code()).into_owned()
                } else {
                    message
                }
            },
            Self::Plain(err) => err.to_string(),
        }
    }

    pub fn source(&self) -> Option<&'a (dyn Error + 'static)> {
        match *self {
            Self::Full(err) => err.source(),
            Self::Status(err) => err.source(),
            Self::Plain(err) => err.source(),
        }
    }
}

impl<'a> From<&'a HttpError> for ErrorTier<'a> {
    #[inline]
    fn from(error: &'a HttpError) -> Self {
        Self::Full(error)
    }
}

impl<'a> From<&'a (dyn Error + 'static)> for ErrorTier<'a> {
    #[inline]
    fn from(error: &'a (dyn Error + 'static)) -> Self {
        Self::probe(error)
    }
}

impl<'a> From<&'a BoxError> for ErrorTier<'a> {
    #[inline]
    fn from(error: &'a BoxError) -> Self {
        Self::probe(error.as_ref())
    }
}

/// Serializes errors onto a [`ResponseSink`].
pub trait ErrorWriter: Send + Sync {
    fn write_error(
        &self,
        error: ErrorTier<'_>,
        settings: &Settings,
        sink: &mut dyn ResponseSink,
    ) -> Result<(), WriteError>;
}

/// Writes the JSON error contract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonErrorWriter;

impl ErrorWriter for JsonErrorWriter {
    fn write_error(
        &self,
        error: ErrorTier<'_>,
        settings: &Settings,
        sink: &mut dyn ResponseSink,
    ) -> Result<(), WriteError> {
        let visibility = settings.visibility;
        let body = match error {
            ErrorTier::Full(err) => err.body(visibility)?,
            _ => {
                let mut body = ErrorBody::new(error.message());
                if visibility.show_cause {
                    body.cause = error.source().map(cause_message);
                }
                body
            },
        };
        let encoded = serde_json::to_vec(&body)?;

        sink.set_header(CONTENT_TYPE.as_str(), APPLICATION_JSON)?;
        if let ErrorTier::Full(err) = error {
            err.write_headers(sink)?;
        }
        sink.write_status(error.status_code());
        sink.write_body(&encoded)
    }
}

/// The JSON body of an error response.
///
/// `$error` is always present; the other fields are omitted when empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(rename = "$error")]
    pub error: String,
    #[serde(rename = "$reasons", default, skip_serializing_if = "Vec::is_empty")]
    pub reasons: Vec<serde_json::Value>,
    #[serde(rename = "$cause", default, skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
    #[serde(rename = "$stack", default, skip_serializing_if = "Vec::is_empty")]
    pub stack: Vec<String>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into(), ..Self::default() }
    }
}
