//! Response types for command execution.
//!
//! `Response` represents successful execution: the lines to render, an
//! optional effect the session applies on the handler's behalf, and an
//! optional return value surfaced to the caller of `submit()`.

use alloc::string::String;
use alloc::vec::Vec;

use crate::io::{LineStyle, OutputLine};

/// Side effect requested by a handler.
///
/// Handlers never touch the surface or collaborators directly; the session
/// applies the effect before rendering the response lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Erase the rendered output
    Clear,

    /// Dismiss the widget until the next page load
    Close,

    /// Full page navigation to the resolved destination
    Navigate(String),

    /// Flip the host page theme
    ToggleTheme,
}

/// Command execution response.
/// Command failures return `Err(TermError)`, not `Response`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Response {
    /// Lines to render, in order
    pub lines: Vec<OutputLine>,

    /// Effect applied before the lines are rendered
    pub effect: Option<Effect>,

    /// Value handed back to the caller of `submit()`, never rendered
    pub returned: Option<String>,
}

impl Response {
    /// Response with no output.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Single info-styled line.
    pub fn info(text: impl Into<String>) -> Self {
        Self::empty().line(text, LineStyle::Info)
    }

    /// Single success-styled line.
    pub fn success(text: impl Into<String>) -> Self {
        Self::empty().line(text, LineStyle::Success)
    }

    /// Builder method to append a line (chainable).
    pub fn line(mut self, text: impl Into<String>, style: LineStyle) -> Self {
        self.lines.push(OutputLine::new(text, style));
        self
    }

    /// Builder method to request an effect.
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effect = Some(effect);
        self
    }

    /// Builder method to hand a value back to the caller.
    pub fn returning(mut self, value: impl Into<String>) -> Self {
        self.returned = Some(value.into());
        self
    }
}
