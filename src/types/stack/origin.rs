//! Symbol parsing for captured frames.
//!
//! Turns the rendered output of [`std::backtrace::Backtrace`] into raw frames and
//! splits Rust function paths into the pieces the stack filter matches against.

use std::panic::Location;
use std::path::Path;

/// Separator between Rust path segments.
pub const PATH_SEPARATOR: &str = "::";

/// A frame as rendered by the standard library, before filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawFrame {
    pub(crate) function: String,
    pub(crate) file: Option<String>,
    pub(crate) line: u32,
}

impl RawFrame {
    /// True when this frame was executing the given source location.
    pub(crate) fn is_at(&self, location: &Location<'_>) -> bool {
        self.line == location.line()
            && self.file.as_deref().is_some_and(|file| same_source(file, location.file()))
    }
}

fn same_source(rendered: &str, tracked: &str) -> bool {
    let rendered = Path::new(rendered);
    let tracked = Path::new(tracked);
    rendered.ends_with(tracked) || tracked.ends_with(rendered)
}

/// Parses the `Display` rendering of a captured backtrace.
///
/// Each symbol line (`"  3: krate::module::function"`, or an unnumbered line for
/// inlined symbols) starts a frame; the following `"at path:line:col"` line, when
/// present, supplies its source position.
pub(crate) fn parse_backtrace(rendered: &str) -> Vec<RawFrame> {
    let mut frames: Vec<RawFrame> = Vec::new();

    for line in rendered.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(location) = line.strip_prefix("at ") {
            if let Some(frame) = frames.last_mut() {
                if frame.file.is_none() {
                    let (file, line) = split_location(location);
                    frame.file = Some(file.to_owned());
                    frame.line = line;
                }
            }
            continue;
        }

        let function = match line.split_once(": ") {
            Some((index, name)) if !index.is_empty() && index.bytes().all(|b| b.is_ascii_digit()) => {
                name
            },
            _ => line,
        };
        frames.push(RawFrame { function: function.to_owned(), file: None, line: 0 });
    }

    frames
}

/// Splits `path:line[:column]`, tolerating drive letters in the path.
fn split_location(location: &str) -> (&str, u32) {
    let Some((head, last)) = location.rsplit_once(':') else {
        return (location, 0);
    };
    let Ok(last) = last.parse::<u32>() else {
        return (location, 0);
    };
    if let Some((file, middle)) = head.rsplit_once(':') {
        if let Ok(line) = middle.parse::<u32>() {
            return (file, line);
        }
    }
    (head, last)
}

/// Splits a Rust path on `::`, ignoring separators nested inside `<...>`.
///
/// ```text
/// <my_app::Repo as core::fmt::Debug>::fmt  ->  ["<my_app::Repo as core::fmt::Debug>", "fmt"]
/// ```
pub(crate) fn split_path(path: &str) -> Vec<&str> {
    let bytes = path.as_bytes();
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'<' => depth += 1,
            b'>' if i > 0 && bytes[i - 1] == b'-' => {},
            b'>' => depth = depth.saturating_sub(1),
            b':' if depth == 0 && bytes.get(i + 1) == Some(&b':') => {
                segments.push(&path[start..i]);
                i += 2;
                start = i;
                continue;
            },
            _ => {},
        }
        i += 1;
    }
    segments.push(&path[start..]);
    segments.retain(|segment| !segment.is_empty());
    segments
}

/// Where a frame's function lives, derived from its fully-qualified identifier.
///
/// Closure and hash suffixes are attributed to the enclosing function, so
/// `my_app::users::load::{{closure}}` has leaf `load`, short name `users` and
/// parts `["my_app", "users"]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameOrigin<'a> {
    /// The full function identifier as captured.
    pub function: &'a str,
    /// The function's own name.
    pub leaf: &'a str,
    /// The segment immediately preceding the leaf (empty for a bare function).
    pub short: &'a str,
    /// The module path segments, outermost first, excluding the leaf.
    pub parts: Vec<&'a str>,
}

impl<'a> FrameOrigin<'a> {
    pub fn parse(function: &'a str) -> Self {
        let mut segments = split_path(function);
        while segments.len() > 1 && segments.last().is_some_and(|s| is_synthetic(s)) {
            segments.pop();
        }

        let leaf = segments.pop().unwrap_or("");
        let short = segments.last().copied().unwrap_or("");
        Self { function, leaf, short, parts: segments }
    }

    /// The module path (`parts` joined with `::`).
    pub fn module(&self) -> String {
        self.parts.join(PATH_SEPARATOR)
    }
}

/// Compiler-generated segments: `{{closure}}` and `{closure#0}` style closures,
/// `{shim:vtable#0}` shims and symbol hashes.
fn is_synthetic(segment: &str) -> bool {
    segment.starts_with('{') || is_symbol_hash(segment)
}

fn is_symbol_hash(segment: &str) -> bool {
    segment.len() == 17
        && segment.starts_with('h')
        && segment[1..].bytes().all(|b| b.is_ascii_hexdigit())
}
