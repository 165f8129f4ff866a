//! Human-oriented rendering of [`HttpError`].
//!
//! `Display` renders the compact form (`message: cause`). The alternate flag
//! (`{:#}`) renders the verbose form: the compact line followed by the captured
//! stack, laid out by the error's [`FrameFormatter`].

use core::fmt::{self, Display};
use core::str::FromStr;

use crate::types::{HttpError, StackFrame};

/// Lays out the stack block of a verbose rendering.
pub trait FrameFormatter: Send + Sync {
    /// Marker written once before the first frame.
    fn start_line(&self) -> String;

    /// Text written for each frame, in snapshot order.
    fn frame_line(&self, frame: &StackFrame) -> String;
}

/// `"\nStack:"` followed by one `"\n\t<function>:<line>"` per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultFrameFormatter;

impl FrameFormatter for DefaultFrameFormatter {
    fn start_line(&self) -> String {
        "\nStack:".into()
    }

    fn frame_line(&self, frame: &StackFrame) -> String {
        format!("\n\t{}:{}", frame.function(), frame.line())
    }
}

/// The supported renderings of an [`HttpError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderMode {
    /// Message, then `": "` and the cause when present.
    Compact,
    /// Compact line plus the formatted stack block.
    Verbose,
    /// Message only.
    Message,
    /// Message as an escaped, double-quoted string literal.
    Quoted,
}

impl FromStr for RenderMode {
    type Err = UnknownRenderMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "compact" | "v" => Ok(Self::Compact),
            "verbose" | "+v" => Ok(Self::Verbose),
            "message" | "s" => Ok(Self::Message),
            "quoted" | "q" => Ok(Self::Quoted),
            other => Err(UnknownRenderMode(other.to_owned())),
        }
    }
}

/// A render mode name that [`RenderMode`] does not know.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown render mode `{0}`")]
pub struct UnknownRenderMode(pub String);

impl UnknownRenderMode {
    /// Placeholder written in place of the error for this mode.
    pub fn placeholder(&self) -> String {
        format!("%!{}(HttpError)", self.0)
    }
}

/// A borrowed [`HttpError`] paired with a [`RenderMode`], ready to `Display`.
pub struct Rendered<'a> {
    pub(crate) error: &'a HttpError,
    pub(crate) mode: RenderMode,
}

impl Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let error = self.error;
        match self.mode {
            RenderMode::Message => f.write_str(error.message()),
            RenderMode::Quoted => write!(f, "{:?}", error.message()),
            RenderMode::Compact => write_compact(error, f),
            RenderMode::Verbose => {
                write_compact(error, f)?;
                if let Some(formatter) = error.frame_formatter() {
                    if !error.stack_info().is_empty() {
                        f.write_str(&formatter.start_line())?;
                        for frame in error.stack_info() {
                            f.write_str(&formatter.frame_line(frame))?;
                        }
                    }
                }
                Ok(())
            },
        }
    }
}

fn write_compact(error: &HttpError, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(error.message())?;
    if let Some(cause) = error.cause() {
        write!(f, ": {}", cause)?;
    }
    Ok(())
}
