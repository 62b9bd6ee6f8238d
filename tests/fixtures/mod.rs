//! Test fixtures for site-terminal testing.
//!
//! Provides:
//! - `MockSurface`: Surface that records lines, clears and presented views
//! - `MockRouter`: RouteTable-backed router that records navigations
//! - `FixedClock`, `SequenceRandom`, `MockTheme`: deterministic collaborators
//! - `HostLog`: shared handles to everything the host observed

#![allow(dead_code)]

use site_terminal::{
    Clock, LineStyle, OutputLine, RandomSource, RouteTable, Router, Surface, ThemeToggle, View,
};
use std::cell::{Cell, RefCell};
use std::convert::Infallible;
use std::rc::Rc;

// ============================================================================
// MockSurface - Test Surface Implementation
// ============================================================================

/// Mock surface for testing.
///
/// Keeps the rendered lines (as a DOM host would) plus counters for every
/// clear and scroll request, and every presented view in order.
#[derive(Debug, Default)]
pub struct MockSurface {
    lines: Vec<OutputLine>,
    views: Vec<View>,
    clears: usize,
    scrolls: usize,
}

impl MockSurface {
    /// Create an empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rendered lines.
    pub fn lines(&self) -> &[OutputLine] {
        &self.lines
    }

    /// Rendered text, one line per output line.
    pub fn output(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Forget rendered lines (test bookkeeping, not a `clear` request).
    pub fn clear_output(&mut self) {
        self.lines.clear();
    }

    /// Presented views, oldest first.
    pub fn views(&self) -> &[View] {
        &self.views
    }

    /// Number of `clear` requests.
    pub fn clear_count(&self) -> usize {
        self.clears
    }

    /// Number of scroll requests.
    pub fn scroll_count(&self) -> usize {
        self.scrolls
    }
}

impl Surface for MockSurface {
    type Error = Infallible;

    fn write_line(&mut self, text: &str, style: LineStyle) -> Result<(), Self::Error> {
        self.lines.push(OutputLine::new(text, style));
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.clears += 1;
        self.lines.clear();
        Ok(())
    }

    fn scroll_to_bottom(&mut self) -> Result<(), Self::Error> {
        self.scrolls += 1;
        Ok(())
    }

    fn present(&mut self, view: &View) -> Result<(), Self::Error> {
        self.views.push(*view);
        Ok(())
    }
}

// ============================================================================
// Host collaborators
// ============================================================================

/// What the host saw during a test.
#[derive(Debug, Clone, Default)]
pub struct HostLog {
    /// Destinations passed to `Router::navigate`
    pub navigations: Rc<RefCell<Vec<String>>>,

    /// Number of theme toggles
    pub theme_toggles: Rc<Cell<u32>>,
}

impl HostLog {
    /// Navigations so far.
    pub fn navigations(&self) -> Vec<String> {
        self.navigations.borrow().clone()
    }

    /// Theme toggles so far.
    pub fn theme_toggles(&self) -> u32 {
        self.theme_toggles.get()
    }
}

/// Router over the default route table that records navigations.
#[derive(Debug)]
pub struct MockRouter {
    table: RouteTable,
    navigations: Rc<RefCell<Vec<String>>>,
}

impl MockRouter {
    /// Router sharing `log`'s navigation record.
    pub fn new(log: &HostLog) -> Self {
        Self {
            table: RouteTable::default(),
            navigations: Rc::clone(&log.navigations),
        }
    }
}

impl Router for MockRouter {
    fn resolve(&self, page: &str) -> Option<&str> {
        self.table.resolve(page)
    }

    fn page_name(&self, pathname: &str) -> Option<&str> {
        self.table.page_name(pathname)
    }

    fn navigate(&mut self, destination: &str) {
        self.navigations.borrow_mut().push(destination.to_string());
    }
}

/// Theme toggle that counts calls.
#[derive(Debug)]
pub struct MockTheme {
    toggles: Rc<Cell<u32>>,
}

impl MockTheme {
    /// Toggle sharing `log`'s counter.
    pub fn new(log: &HostLog) -> Self {
        Self {
            toggles: Rc::clone(&log.theme_toggles),
        }
    }
}

impl ThemeToggle for MockTheme {
    fn toggle(&mut self) {
        self.toggles.set(self.toggles.get() + 1);
    }
}

/// Clock that always reports the same timestamp.
#[derive(Debug)]
pub struct FixedClock(pub &'static str);

impl Clock for FixedClock {
    fn now(&self) -> String {
        self.0.to_string()
    }
}

/// Timestamp reported by [`FixedClock`] in the default fixtures.
pub const TEST_NOW: &str = "Mon Mar 04 2024 09:30:00 GMT+0000 (UTC)";

/// Random source replaying a fixed sequence of indices (wrapped to `len`).
#[derive(Debug)]
pub struct SequenceRandom {
    picks: Vec<usize>,
    next: usize,
}

impl SequenceRandom {
    /// Replay `picks` in order, cycling when exhausted.
    pub fn new(picks: &[usize]) -> Self {
        Self {
            picks: picks.to_vec(),
            next: 0,
        }
    }
}

impl RandomSource for SequenceRandom {
    fn index(&mut self, len: usize) -> usize {
        if self.picks.is_empty() || len == 0 {
            return 0;
        }
        let pick = self.picks[self.next % self.picks.len()];
        self.next += 1;
        pick % len
    }
}
