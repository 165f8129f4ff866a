use core::error::Error;
use core::fmt::{self, Debug, Display};

use http::StatusCode;
use serde::ser::Error as _;
use serde::{Serialize, Serializer};

use crate::settings::Visibility;
use crate::traits::StatusError;
use crate::types::error_formatter::RenderMode;
use crate::types::HttpError;

impl Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = if f.alternate() { RenderMode::Verbose } else { RenderMode::Compact };
        Display::fmt(&self.rendered(mode), f)
    }
}

impl Debug for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpError")
            .field("status", &self.status)
            .field("message", &self.message)
            .field("cause", &self.cause)
            .field("reasons", &self.reasons.len())
            .field("headers", &self.headers)
            .field("stack", &self.stack)
            .finish()
    }
}

impl Error for HttpError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_deref().map(|cause| cause as &(dyn Error + 'static))
    }
}

impl StatusError for HttpError {
    #[inline]
    fn status_code(&self) -> StatusCode {
        self.status
    }
}

/// Serializes the public body: message and reasons, never cause or stack.
impl Serialize for HttpError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.body(Visibility::hidden())
            .map_err(S::Error::custom)?
            .serialize(serializer)
    }
}
