//! Extension points of the crate.
//!
//! - [`StatusError`]: errors that know their HTTP status
//! - [`StatusResolver`]: maps wrapped causes to statuses
//! - [`FrameFilter`]: decides which stack frames are captured
//! - [`HttpResultExt`]: lifts `Result` errors into [`HttpError`](crate::HttpError)

pub mod frame_filter;
pub mod result_ext;
pub mod status_error;
pub mod status_resolver;

pub use frame_filter::{FrameFilter, ModuleFilter};
pub use result_ext::HttpResultExt;
pub use status_error::{reason_phrase, StatusError};
pub use status_resolver::StatusResolver;
