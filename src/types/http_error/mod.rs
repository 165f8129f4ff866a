//! The structured HTTP error value.
//!
//! [`HttpError`] carries a status code, a message that is never empty, an
//! optional cause, caller-supplied reasons, extra response headers and the stack
//! captured at construction:
//! - Reasons and headers accumulate through builder methods (`add_*`) or their
//!   in-place counterparts (`push_reason`, `insert_header`).
//! - The status and the stack are fixed once the value exists.
//! - Rendering follows [`RenderMode`]; serialization follows [`ErrorBody`].

use core::error::Error;
use core::fmt;
use std::collections::BTreeMap;
use std::sync::Arc;

use http::StatusCode;
use serde::Serialize;

use crate::response::{ErrorBody, ErrorTier, ResponseSink, WriteError};
use crate::settings::{Settings, Visibility};
use crate::traits::reason_phrase;
use crate::types::error_formatter::{FrameFormatter, RenderMode, Rendered};
use crate::types::{ErrorVec, Reason, StackSnapshot};

mod constructors;
mod traits;

/// Boxed, thread-safe cause of an [`HttpError`].
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Text written as `$cause`: the message of an [`HttpError`] cause, otherwise
/// its `Display` output.
pub(crate) fn cause_message(cause: &(dyn Error + 'static)) -> String {
    match cause.downcast_ref::<HttpError>() {
        Some(err) => err.message.clone(),
        None => cause.to_string(),
    }
}

/// HTTP error with status, message, cause, reasons, headers and call-site stack.
#[must_use]
pub struct HttpError {
    pub(crate) message: String,
    pub(crate) status: StatusCode,
    pub(crate) cause: Option<BoxError>,
    pub(crate) reasons: ErrorVec<Box<dyn Reason>>,
    pub(crate) headers: BTreeMap<String, String>,
    pub(crate) stack: StackSnapshot,
    pub(crate) frame_formatter: Option<Arc<dyn FrameFormatter>>,
}

impl HttpError {
    /// Creates an error for `status` using [`Settings::global`].
    ///
    /// An empty `message` is replaced by the status's reason phrase.
    ///
    /// ```
    /// use http::StatusCode;
    /// use http_rail::HttpError;
    ///
    /// assert_eq!(HttpError::new(StatusCode::BAD_REQUEST, "").message(), "Bad Request");
    /// assert_eq!(HttpError::new(StatusCode::BAD_REQUEST, "fooey").message(), "fooey");
    /// ```
    #[track_caller]
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Settings::global().new_error(status, message)
    }

    /// Creates an error whose message is produced by `args`.
    ///
    /// Usually reached through [`http_error!`](crate::http_error).
    #[track_caller]
    pub fn new_fmt(status: StatusCode, args: fmt::Arguments<'_>) -> Self {
        Settings::global().new_error_fmt(status, args)
    }

    /// Wraps `cause`, or returns `None` when there is none.
    ///
    /// See [`Settings::wrap`].
    #[track_caller]
    pub fn wrap<E>(cause: Option<E>, fallback: StatusCode) -> Option<Self>
    where
        E: Into<BoxError>,
    {
        Settings::global().wrap(cause, fallback)
    }

    #[track_caller]
    pub(crate) fn build(
        settings: &Settings,
        status: StatusCode,
        message: String,
        cause: Option<BoxError>,
    ) -> Self {
        let message = if message.is_empty() { reason_phrase(status).into_owned() } else { message };
        Self {
            message,
            status,
            cause,
            reasons: ErrorVec::new(),
            headers: BTreeMap::new(),
            stack: StackSnapshot::capture(&settings.stack),
            frame_formatter: settings.frame_formatter.clone(),
        }
    }

    /// Replaces the cause.
    #[inline]
    pub fn with_cause(mut self, cause: impl Into<BoxError>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    /// Replaces the cause in place.
    #[inline]
    pub fn set_cause(&mut self, cause: impl Into<BoxError>) -> &mut Self {
        self.cause = Some(cause.into());
        self
    }

    /// Appends a reason; it is serialized as-is into the response body.
    #[inline]
    pub fn add_reason<R>(mut self, reason: R) -> Self
    where
        R: Serialize + Send + Sync + 'static,
    {
        self.push_reason(reason);
        self
    }

    /// Appends each reason in iteration order.
    pub fn add_reasons<I, R>(mut self, reasons: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Serialize + Send + Sync + 'static,
    {
        self.reasons.extend(reasons.into_iter().map(|reason| Box::new(reason) as Box<dyn Reason>));
        self
    }

    #[inline]
    pub fn push_reason<R>(&mut self, reason: R) -> &mut Self
    where
        R: Serialize + Send + Sync + 'static,
    {
        self.reasons.push(Box::new(reason));
        self
    }

    /// Sets a response header, replacing any earlier value for the same key.
    #[inline]
    pub fn add_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert_header(name, value);
        self
    }

    pub fn add_headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.headers.extend(headers.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    #[inline]
    pub fn insert_header(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    #[inline]
    pub fn status_code(&self) -> StatusCode {
        self.status
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Consumes the error, returning its cause.
    #[inline]
    pub fn into_cause(self) -> Option<BoxError> {
        self.cause
    }

    #[inline]
    pub fn reasons(&self) -> &[Box<dyn Reason>] {
        &self.reasons
    }

    /// Reasons converted to JSON values, in insertion order.
    pub fn reason_values(&self) -> Result<Vec<serde_json::Value>, serde_json::Error> {
        self.reasons.iter().map(|reason| reason.to_json()).collect()
    }

    #[inline]
    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    /// The stack captured at construction, innermost frame first.
    #[inline]
    pub fn stack_info(&self) -> &StackSnapshot {
        &self.stack
    }

    /// The formatter used for the verbose rendering, taken from the settings in
    /// effect at construction.
    #[inline]
    pub fn frame_formatter(&self) -> Option<&dyn FrameFormatter> {
        self.frame_formatter.as_deref()
    }

    /// A `Display` adapter for `mode`.
    #[inline]
    pub fn rendered(&self, mode: RenderMode) -> Rendered<'_> {
        Rendered { error: self, mode }
    }

    /// Renders the error in the named mode.
    ///
    /// Unknown names produce a placeholder such as `"%!d(HttpError)"`.
    ///
    /// ```
    /// use http::StatusCode;
    /// use http_rail::HttpError;
    ///
    /// let err = HttpError::new(StatusCode::BAD_REQUEST, "fooey");
    /// assert_eq!(err.render("quoted"), "\"fooey\"");
    /// assert_eq!(err.render("d"), "%!d(HttpError)");
    /// ```
    pub fn render(&self, mode: &str) -> String {
        match mode.parse::<RenderMode>() {
            Ok(mode) => self.rendered(mode).to_string(),
            Err(unknown) => unknown.placeholder(),
        }
    }

    /// Assembles the JSON body for this error.
    ///
    /// The cause and the stack appear only when `visibility` allows it; reasons
    /// are always included when present.
    pub fn body(&self, visibility: Visibility) -> Result<ErrorBody, WriteError> {
        let mut body = ErrorBody::new(self.message.clone());
        body.reasons = self.reason_values()?;
        if visibility.show_cause {
            body.cause = self.source().map(cause_message);
        }
        if visibility.show_stack {
            body.stack = self.stack.lines();
        }
        Ok(body)
    }

    /// Copies the custom headers onto `sink`.
    pub fn write_headers(&self, sink: &mut dyn ResponseSink) -> Result<(), WriteError> {
        for (name, value) in &self.headers {
            sink.set_header(name, value)?;
        }
        Ok(())
    }

    /// Writes the error with the settings' [`ErrorWriter`](crate::response::ErrorWriter).
    ///
    /// Without a configured writer only the custom headers and the bare status
    /// line are written.
    pub fn write(&self, settings: &Settings, sink: &mut dyn ResponseSink) -> Result<(), WriteError> {
        match &settings.error_writer {
            Some(writer) => writer.write_error(ErrorTier::Full(self), settings, sink),
            None => {
                self.write_headers(sink)?;
                sink.write_status(self.status);
                Ok(())
            },
        }
    }

    /// Writes the error into a fresh [`http::Response`].
    pub fn to_response(&self, settings: &Settings) -> Result<http::Response<Vec<u8>>, WriteError> {
        let mut response = http::Response::new(Vec::new());
        self.write(settings, &mut response)?;
        Ok(response)
    }
}
