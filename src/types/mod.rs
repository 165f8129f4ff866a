//! Error types and their building blocks.
//!
//! # Examples
//!
//! ```
//! use http::StatusCode;
//! use http_rail::HttpError;
//!
//! let err = HttpError::new(StatusCode::UNPROCESSABLE_ENTITY, "invalid payload")
//!     .add_reason("email is required")
//!     .add_header("x-request-id", "42");
//!
//! assert_eq!(err.to_string(), "invalid payload");
//! assert_eq!(err.reasons().len(), 1);
//! ```
use smallvec::SmallVec;

pub mod error_formatter;
pub mod http_error;
pub mod reason;
pub mod stack;

pub use error_formatter::{
    DefaultFrameFormatter, FrameFormatter, RenderMode, Rendered, UnknownRenderMode,
};
pub use http_error::{BoxError, HttpError};
pub use reason::Reason;
pub use stack::{FrameOrigin, StackFrame, StackSnapshot, PATH_SEPARATOR};

/// SmallVec-backed collection used for reasons and stack frames.
///
/// Uses inline storage for one element, the common case for reasons.
pub type ErrorVec<E> = SmallVec<[E; 1]>;
