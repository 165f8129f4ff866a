use http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;

use crate::response::{header_pair, ResponseSink, WriteError};

/// In-memory [`ResponseSink`] that behaves like a wire response.
///
/// Headers set after the status line are dropped, and a body written before any
/// status implies `200 OK`.
///
/// ```
/// use http::StatusCode;
/// use http_rail::{HttpError, ResponseRecorder, Settings};
///
/// let mut recorder = ResponseRecorder::new();
/// HttpError::conflict("").write(&Settings::default(), &mut recorder).unwrap();
///
/// assert_eq!(recorder.status(), Some(StatusCode::CONFLICT));
/// assert_eq!(recorder.body_str(), Some(r#"{"$error":"Conflict"}"#));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ResponseRecorder {
    headers: HeaderMap,
    status: Option<StatusCode>,
    body: Vec<u8>,
    late_headers: usize,
}

impl ResponseRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The written status, `None` while nothing has been written.
    #[inline]
    pub fn status(&self) -> Option<StatusCode> {
        self.status
    }

    #[inline]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Value of header `name` when it is present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    #[inline]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn body_str(&self) -> Option<&str> {
        core::str::from_utf8(&self.body).ok()
    }

    /// Decodes the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_slice(&self.body)
    }

    /// Number of headers dropped because they arrived after the status line.
    #[inline]
    pub fn late_headers(&self) -> usize {
        self.late_headers
    }

    /// Converts the recording into an [`http::Response`].
    pub fn into_response(self) -> http::Response<Vec<u8>> {
        let mut response = http::Response::new(self.body);
        *response.status_mut() = self.status.unwrap_or(StatusCode::OK);
        *response.headers_mut() = self.headers;
        response
    }
}

impl ResponseSink for ResponseRecorder {
    fn set_header(&mut self, name: &str, value: &str) -> Result<(), WriteError> {
        let (name, value) = header_pair(name, value)?;
        if self.status.is_some() {
            self.late_headers += 1;
        } else {
            self.headers.insert(name, value);
        }
        Ok(())
    }

    fn write_status(&mut self, status: StatusCode) {
        if self.status.is_none() {
            self.status = Some(status);
        }
    }

    fn write_body(&mut self, body: &[u8]) -> Result<(), WriteError> {
        self.status.get_or_insert(StatusCode::OK);
        self.body.extend_from_slice(body);
        Ok(())
    }
}
