//! Predicate filters deciding which stack frames are captured.
//!
//! The predicate receives the fully-qualified function identifier of each
//! candidate frame (for example `my_app::users::load`). It is combined with the
//! optional name filter of [`StackConfig`](crate::StackConfig) by logical AND.

use crate::types::FrameOrigin;

/// Decides whether a frame belongs in a captured snapshot.
pub trait FrameFilter: Send + Sync {
    fn include(&self, function: &str) -> bool;
}

impl<F> FrameFilter for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    #[inline]
    fn include(&self, function: &str) -> bool {
        self(function)
    }
}

/// Includes frames whose module path equals a given path.
///
/// ```
/// use http_rail::traits::{FrameFilter, ModuleFilter};
///
/// let filter = ModuleFilter::new("my_app::users");
/// assert!(filter.include("my_app::users::load"));
/// assert!(filter.include("my_app::users::load::{{closure}}"));
/// assert!(!filter.include("my_app::users::db::query"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleFilter {
    module: String,
}

impl ModuleFilter {
    pub fn new(module: impl Into<String>) -> Self {
        Self { module: module.into() }
    }

    #[inline]
    pub fn module(&self) -> &str {
        &self.module
    }
}

impl FrameFilter for ModuleFilter {
    fn include(&self, function: &str) -> bool {
        FrameOrigin::parse(function).module() == self.module
    }
}
