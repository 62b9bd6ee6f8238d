//! Rendering surface abstraction for platform-agnostic output.
//!
//! The `Surface` trait is the output sink of a session: it receives styled
//! lines, clear and scroll requests, and presentation snapshots. The embedded
//! widget and the full-page terminal each provide their own implementation.

use alloc::string::String;
use alloc::vec::Vec;

use crate::presentation::View;

/// Style tag attached to every output line.
///
/// Hosts typically map these to CSS classes (`terminal-info`, ...).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LineStyle {
    /// Regular informational text
    Info,

    /// Positive confirmation
    Success,

    /// In-band error report
    Error,

    /// Echo of a submitted command line
    Command,
}

impl LineStyle {
    /// Style name as used in class names and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            LineStyle::Info => "info",
            LineStyle::Success => "success",
            LineStyle::Error => "error",
            LineStyle::Command => "command",
        }
    }
}

/// One rendered line of output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    /// Line text, never wrapped or truncated
    pub text: String,

    /// Style tag
    pub style: LineStyle,
}

impl OutputLine {
    /// Create a line with the given style.
    pub fn new(text: impl Into<String>, style: LineStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// Platform-agnostic rendering surface.
///
/// Implementations append lines to a visible log. Writes must not block;
/// a DOM host appends an element, a native host prints.
pub trait Surface {
    /// Platform-specific error type
    type Error;

    /// Append one styled line.
    fn write_line(&mut self, text: &str, style: LineStyle) -> Result<(), Self::Error>;

    /// Erase every rendered line.
    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Scroll so the newest line is visible.
    ///
    /// Default implementation does nothing.
    fn scroll_to_bottom(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Render a new presentation snapshot (widget, affordance, hint).
    ///
    /// Called after every transition that changed the snapshot. Default
    /// implementation does nothing, which suits full-page surfaces.
    fn present(&mut self, view: &View) -> Result<(), Self::Error> {
        let _ = view;
        Ok(())
    }
}

/// In-memory surface that keeps every line and the last presented view.
///
/// Useful for hosts that poll the session instead of receiving callbacks,
/// and for tests.
#[derive(Debug, Default, Clone)]
pub struct MemorySurface {
    lines: Vec<OutputLine>,
    view: Option<View>,
    scrolls: usize,
}

impl MemorySurface {
    /// Create an empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines currently rendered.
    pub fn lines(&self) -> &[OutputLine] {
        &self.lines
    }

    /// Remove and return every rendered line.
    pub fn drain(&mut self) -> Vec<OutputLine> {
        core::mem::take(&mut self.lines)
    }

    /// Last presented view, if any.
    pub fn view(&self) -> Option<&View> {
        self.view.as_ref()
    }

    /// Number of scroll requests received.
    pub fn scroll_count(&self) -> usize {
        self.scrolls
    }
}

impl Surface for MemorySurface {
    type Error = core::convert::Infallible;

    fn write_line(&mut self, text: &str, style: LineStyle) -> Result<(), Self::Error> {
        self.lines.push(OutputLine::new(text, style));
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.lines.clear();
        Ok(())
    }

    fn scroll_to_bottom(&mut self) -> Result<(), Self::Error> {
        self.scrolls += 1;
        Ok(())
    }

    fn present(&mut self, view: &View) -> Result<(), Self::Error> {
        self.view = Some(*view);
        Ok(())
    }
}
