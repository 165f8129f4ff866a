//! Call-stack snapshots captured when an [`HttpError`](crate::HttpError) is built.
//!
//! Capturing walks the active stack with [`Backtrace::force_capture`], drops the
//! frames that belong to the capture machinery itself, applies the configured
//! [`StackConfig`] filter and keeps at most `max_depth` frames.
//!
//! Snapshots are ordered innermost-first: frame `0` is the call site of the
//! constructor, frame `1` its caller, and so on.
//!
//! # Examples
//!
//! ```
//! use http_rail::{StackConfig, StackSnapshot};
//!
//! // A name filter that matches no module yields an empty snapshot, never an error.
//! let config = StackConfig::default().with_name("no_such_module");
//! assert!(StackSnapshot::capture(&config).is_empty());
//! ```

use core::fmt::{self, Display};
use std::backtrace::{Backtrace, BacktraceStatus};
use std::panic::Location;

use serde::{Deserialize, Serialize};

use crate::settings::StackConfig;
use crate::types::ErrorVec;

mod origin;

pub use origin::{FrameOrigin, PATH_SEPARATOR};
pub(crate) use origin::{parse_backtrace, RawFrame};

const CRATE_PREFIX: &str = concat!(env!("CARGO_CRATE_NAME"), "::");

/// One captured call site.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StackFrame {
    function: String,
    line: u32,
}

impl StackFrame {
    pub fn new(function: impl Into<String>, line: u32) -> Self {
        Self { function: function.into(), line }
    }

    /// Fully-qualified function identifier, e.g. `my_app::users::load`.
    #[inline]
    pub fn function(&self) -> &str {
        &self.function
    }

    /// Source line of the call site within [`function`](Self::function).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Splits the identifier into module path, short name and leaf.
    pub fn origin(&self) -> FrameOrigin<'_> {
        FrameOrigin::parse(&self.function)
    }
}

impl Display for StackFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.function, self.line)
    }
}

/// An immutable, bounded, innermost-first sequence of [`StackFrame`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StackSnapshot {
    frames: ErrorVec<StackFrame>,
}

impl StackSnapshot {
    /// A snapshot with no frames.
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Captures the stack above the caller's location.
    ///
    /// Returns an empty snapshot when `max_depth` is zero, when the platform
    /// cannot walk the stack, or when no frame passes the filter.
    #[track_caller]
    pub fn capture(config: &StackConfig) -> Self {
        if config.max_depth == 0 {
            return Self::empty();
        }
        Self::select(capture_frames(Location::caller()), config)
    }

    /// Applies `config`'s filter to `frames` (innermost-first) and keeps at most
    /// `max_depth` of the survivors.
    pub fn select<I>(frames: I, config: &StackConfig) -> Self
    where
        I: IntoIterator<Item = StackFrame>,
    {
        let frames = frames
            .into_iter()
            .filter(|frame| config.includes(&frame.origin()))
            .take(config.max_depth)
            .collect();
        Self { frames }
    }

    #[inline]
    pub fn frames(&self) -> &[StackFrame] {
        &self.frames
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, StackFrame> {
        self.frames.iter()
    }

    /// Renders each frame as `"<function>:<line>"`.
    pub fn lines(&self) -> Vec<String> {
        self.frames.iter().map(StackFrame::to_string).collect()
    }
}

impl<'a> IntoIterator for &'a StackSnapshot {
    type Item = &'a StackFrame;
    type IntoIter = core::slice::Iter<'a, StackFrame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

impl FromIterator<StackFrame> for StackSnapshot {
    fn from_iter<I: IntoIterator<Item = StackFrame>>(iter: I) -> Self {
        Self { frames: iter.into_iter().collect() }
    }
}

/// Walks the current stack and returns every frame from `caller` outwards.
pub(crate) fn capture_frames(caller: &Location<'_>) -> Vec<StackFrame> {
    let backtrace = Backtrace::force_capture();
    if backtrace.status() != BacktraceStatus::Captured {
        return Vec::new();
    }
    anchor_at(parse_backtrace(&backtrace.to_string()), caller)
}

/// Drops the capture and constructor frames so that `caller`'s frame comes first.
///
/// The skip is calibrated by finding the frame executing `caller`. Without debug
/// info no frame carries a source position: the leading frames are then dropped
/// by name and the first survivor takes `caller`'s line.
fn anchor_at(raw: Vec<RawFrame>, caller: &Location<'_>) -> Vec<StackFrame> {
    let matched = raw.iter().position(|frame| frame.is_at(caller));
    let start = matched
        .unwrap_or_else(|| raw.iter().take_while(|frame| is_plumbing(&frame.function)).count());

    let mut frames: Vec<StackFrame> = raw
        .into_iter()
        .skip(start)
        .map(|frame| StackFrame { function: frame.function, line: frame.line })
        .collect();
    if matched.is_none() {
        if let Some(first) = frames.first_mut() {
            first.line = caller.line();
        }
    }
    frames
}

fn is_plumbing(function: &str) -> bool {
    let function = function.trim_start_matches('<');
    function.starts_with("std::backtrace")
        || (function.starts_with(CRATE_PREFIX) && !function.contains("::tests::"))
}
