//! Structured HTTP errors for services.
//!
//! An [`HttpError`] carries a status code, a message, an optional cause,
//! caller-supplied reasons, extra response headers and the call stack captured
//! where it was built. Writing it produces a JSON response whose shape is
//! controlled by [`Settings`].
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! depend on `http_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Building and writing an error
//!
//! ```
//! use http::StatusCode;
//! use http_rail::{HttpError, ResponseRecorder, Settings};
//!
//! let err = HttpError::unprocessable_entity("invalid payload")
//!     .add_reason(serde_json::json!({ "field": "email", "problem": "missing" }));
//!
//! let mut recorder = ResponseRecorder::new();
//! err.write(&Settings::default(), &mut recorder).unwrap();
//!
//! assert_eq!(recorder.status(), Some(StatusCode::UNPROCESSABLE_ENTITY));
//! let body: serde_json::Value = recorder.json().unwrap();
//! assert_eq!(body["$error"], "invalid payload");
//! assert_eq!(body["$reasons"][0]["field"], "email");
//! ```
//!
//! ## Wrapping a foreign error
//!
//! ```
//! use http::StatusCode;
//! use http_rail::{HttpError, Settings};
//!
//! let io = std::io::Error::other("disk on fire");
//! let err = HttpError::wrap(Some(io), StatusCode::INTERNAL_SERVER_ERROR).unwrap();
//!
//! assert_eq!(err.to_string(), "Internal Server Error: disk on fire");
//! assert!(HttpError::wrap(None::<std::io::Error>, StatusCode::INTERNAL_SERVER_ERROR).is_none());
//! ```
//!
//! ## Exposing internals while debugging
//!
//! ```
//! use http_rail::{HttpError, Settings, StackConfig};
//!
//! let settings = Settings::diagnostic().with_stack(StackConfig::default().with_max_depth(4));
//! let err = settings.new_error(http::StatusCode::BAD_GATEWAY, "upstream failed");
//!
//! let body = err.body(settings.visibility).unwrap();
//! assert!(body.stack.len() <= 4);
//! ```

/// Formatting macros for building errors
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Writing errors into HTTP responses
pub mod response;
/// Construction, formatting and serialization settings
pub mod settings;
/// Extension points: status mapping, frame filtering, `Result` lifting
pub mod traits;
/// HttpError and its building blocks
pub mod types;

/// Tracing events for errors (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use http;

pub use response::{
    ErrorBody, ErrorTier, ErrorWriter, JsonErrorWriter, ResponseRecorder, ResponseSink, WriteError,
};
pub use settings::{Settings, StackConfig, Visibility};
pub use traits::*;
pub use types::{
    BoxError, DefaultFrameFormatter, ErrorVec, FrameFormatter, HttpError, Reason, RenderMode,
    StackFrame, StackSnapshot,
};
