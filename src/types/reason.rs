//! Type-erased reasons attached to an [`HttpError`](crate::HttpError).
//!
//! Any `Serialize` value can be a reason. Values are kept as-is and converted to
//! JSON only when the error is serialized, so an encoding failure surfaces as a
//! [`WriteError`](crate::WriteError) at write time.

use serde::Serialize;

/// A serializable detail explaining why a request failed.
pub trait Reason: Send + Sync {
    /// Converts the reason into a JSON value.
    fn to_json(&self) -> serde_json::Result<serde_json::Value>;
}

impl<T> Reason for T
where
    T: Serialize + Send + Sync + 'static,
{
    #[inline]
    fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}
