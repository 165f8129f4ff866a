//! Configuration threaded through construction and serialization.
//!
//! [`Settings`] bundles everything that shapes an [`HttpError`]: which stack
//! frames are captured ([`StackConfig`]), which internals reach the response body
//! ([`Visibility`]), how wrapped causes map to statuses, how stacks are laid out
//! when formatting, and which [`ErrorWriter`] produces the response.
//!
//! Pass a `Settings` explicitly where configuration differs per call site or per
//! test. The plain constructors ([`HttpError::new`] and friends) use
//! [`Settings::global`], which is initialised once and never changes afterwards.
//!
//! # Examples
//!
//! ```
//! use http::StatusCode;
//! use http_rail::{Settings, StackConfig};
//!
//! let settings = Settings::default()
//!     .with_stack(StackConfig::default().with_name("my_app::").with_max_depth(4))
//!     .show_cause(true);
//!
//! let err = settings.new_error(StatusCode::CONFLICT, "");
//! assert_eq!(err.message(), "Conflict");
//! assert!(err.stack_info().len() <= 4);
//! ```

use core::error::Error;
use core::fmt;
use std::sync::{Arc, OnceLock};

use http::StatusCode;

use crate::response::{ErrorTier, ErrorWriter, JsonErrorWriter, ResponseSink, WriteError};
use crate::traits::{FrameFilter, ModuleFilter, StatusResolver};
use crate::types::{
    BoxError, DefaultFrameFormatter, FrameFormatter, FrameOrigin, HttpError, PATH_SEPARATOR,
};

static GLOBAL: OnceLock<Settings> = OnceLock::new();

/// Which stack frames are captured when an error is constructed.
#[derive(Clone)]
pub struct StackConfig {
    /// Predicate over the full function identifier.
    pub filter: Option<Arc<dyn FrameFilter>>,
    /// Short module name, or `"segment::"` to match any frame whose module path
    /// contains `segment`.
    pub name: Option<String>,
    /// Upper bound on captured frames; `0` disables capture.
    pub max_depth: usize,
}

impl StackConfig {
    pub const DEFAULT_MAX_DEPTH: usize = 16;

    /// A configuration that never walks the stack.
    #[inline]
    pub fn disabled() -> Self {
        Self { max_depth: 0, ..Self::default() }
    }

    pub fn with_filter(mut self, filter: impl FrameFilter + 'static) -> Self {
        self.filter = Some(Arc::new(filter));
        self
    }

    /// Restricts capture to functions defined directly in `module`.
    pub fn with_module(self, module: impl Into<String>) -> Self {
        self.with_filter(ModuleFilter::new(module))
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Applies the predicate and name criteria; both must accept when both are set.
    pub fn includes(&self, origin: &FrameOrigin<'_>) -> bool {
        if let Some(filter) = &self.filter {
            if !filter.include(origin.function) {
                return false;
            }
        }

        match self.name.as_deref() {
            None | Some("") => true,
            Some(name) => match name.strip_suffix(PATH_SEPARATOR) {
                Some(segment) => origin.parts.contains(&segment),
                None => origin.short == name,
            },
        }
    }
}

impl Default for StackConfig {
    fn default() -> Self {
        Self { filter: None, name: None, max_depth: Self::DEFAULT_MAX_DEPTH }
    }
}

impl fmt::Debug for StackConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StackConfig")
            .field("filter", &self.filter.is_some())
            .field("name", &self.name)
            .field("max_depth", &self.max_depth)
            .finish()
    }
}

/// Which internal details a serialized error exposes. Both are hidden by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Visibility {
    pub show_cause: bool,
    pub show_stack: bool,
}

impl Visibility {
    #[inline]
    pub const fn hidden() -> Self {
        Self { show_cause: false, show_stack: false }
    }

    #[inline]
    pub const fn all() -> Self {
        Self { show_cause: true, show_stack: true }
    }
}

/// Configuration for constructing, formatting and writing [`HttpError`]s.
#[derive(Clone)]
pub struct Settings {
    pub stack: StackConfig,
    pub visibility: Visibility,
    /// Consulted by [`wrap`](Self::wrap); `None` keeps the fallback status.
    pub status_resolver: Option<Arc<dyn StatusResolver>>,
    /// Lays out the stack in verbose formatting; `None` omits the stack block.
    pub frame_formatter: Option<Arc<dyn FrameFormatter>>,
    /// Used by [`HttpError::write`]; `None` writes headers and status only.
    pub error_writer: Option<Arc<dyn ErrorWriter>>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            stack: StackConfig::default(),
            visibility: Visibility::hidden(),
            status_resolver: None,
            frame_formatter: Some(Arc::new(DefaultFrameFormatter)),
            error_writer: Some(Arc::new(JsonErrorWriter)),
        }
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("stack", &self.stack)
            .field("visibility", &self.visibility)
            .field("status_resolver", &self.status_resolver.is_some())
            .field("frame_formatter", &self.frame_formatter.is_some())
            .field("error_writer", &self.error_writer.is_some())
            .finish()
    }
}

impl Settings {
    /// The process-wide settings used by the plain constructors.
    ///
    /// Initialised to [`Settings::default`] on first use unless [`install`](Self::install)
    /// ran before.
    pub fn global() -> &'static Settings {
        GLOBAL.get_or_init(Settings::default)
    }

    /// Sets the process-wide settings.
    ///
    /// Succeeds only once and only before [`global`](Self::global) was first read;
    /// otherwise the rejected settings are handed back.
    pub fn install(settings: Settings) -> Result<(), Settings> {
        GLOBAL.set(settings)
    }

    /// Cause and stack both shown in serialized bodies.
    pub fn diagnostic() -> Self {
        Self { visibility: Visibility::all(), ..Self::default() }
    }

    pub fn with_stack(mut self, stack: StackConfig) -> Self {
        self.stack = stack;
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn show_cause(mut self, show: bool) -> Self {
        self.visibility.show_cause = show;
        self
    }

    pub fn show_stack(mut self, show: bool) -> Self {
        self.visibility.show_stack = show;
        self
    }

    pub fn with_status_resolver(mut self, resolver: impl StatusResolver + 'static) -> Self {
        self.status_resolver = Some(Arc::new(resolver));
        self
    }

    pub fn with_frame_formatter(mut self, formatter: impl FrameFormatter + 'static) -> Self {
        self.frame_formatter = Some(Arc::new(formatter));
        self
    }

    pub fn without_frame_formatter(mut self) -> Self {
        self.frame_formatter = None;
        self
    }

    pub fn with_error_writer(mut self, writer: impl ErrorWriter + 'static) -> Self {
        self.error_writer = Some(Arc::new(writer));
        self
    }

    pub fn without_error_writer(mut self) -> Self {
        self.error_writer = None;
        self
    }

    /// Builds an error with `message`, or the reason phrase when it is empty.
    #[track_caller]
    pub fn new_error(&self, status: StatusCode, message: impl Into<String>) -> HttpError {
        HttpError::build(self, status, message.into(), None)
    }

    /// Builds an error whose message is produced by `args`.
    #[track_caller]
    pub fn new_error_fmt(&self, status: StatusCode, args: fmt::Arguments<'_>) -> HttpError {
        HttpError::build(self, status, args.to_string(), None)
    }

    /// Wraps `cause`, resolving its status through the configured resolver.
    ///
    /// Returns `None` when there is no cause. The stack is captured here, at the
    /// wrap site, not where the cause originated.
    #[track_caller]
    pub fn wrap<E>(&self, cause: Option<E>, fallback: StatusCode) -> Option<HttpError>
    where
        E: Into<BoxError>,
    {
        let cause: BoxError = cause?.into();
        let status = self.resolve_status(&*cause, fallback);
        Some(HttpError::build(self, status, String::new(), Some(cause)))
    }

    /// Status for `cause`: the resolver's answer, or `fallback` without a resolver.
    pub fn resolve_status(&self, cause: &(dyn Error + 'static), fallback: StatusCode) -> StatusCode {
        match &self.status_resolver {
            Some(resolver) => resolver.resolve(cause, fallback),
            None => fallback,
        }
    }

    /// Serializes `error` onto `sink` with the configured writer, or the JSON
    /// writer when none is configured.
    pub fn write_error<'a>(
        &self,
        error: impl Into<ErrorTier<'a>>,
        sink: &mut dyn ResponseSink,
    ) -> Result<(), WriteError> {
        let writer: &dyn ErrorWriter = match &self.error_writer {
            Some(writer) => writer.as_ref(),
            None => &JsonErrorWriter,
        };
        writer.write_error(error.into(), self, sink)
    }
}
