//! Command history with up/down arrow navigation.
//!
//! Entries are kept most-recent-first and never deduplicated: every non-empty
//! submission is recorded, recognized or not. The cursor is `None` while the
//! user edits a fresh line and `Some(i)` while browsing entry `i`.

use alloc::string::String;
use alloc::vec::Vec;

/// History navigation direction.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HistoryDirection {
    /// Up arrow key (navigate to older command)
    Up = 0,

    /// Down arrow key (navigate to newer command or a fresh line)
    Down = 1,
}

/// Result of a navigation step, telling the caller what to do with the
/// input buffer.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Recall<'a> {
    /// Nothing to do, input buffer unchanged
    Unchanged,

    /// Replace the input buffer with this entry
    Entry(&'a str),

    /// Back at a fresh line: empty the input buffer
    Cleared,
}

/// Session command history.
///
/// Unbounded; lives exactly as long as the page load.
#[derive(Debug, Default, Clone)]
pub struct HistoryLog {
    /// Index 0 is the most recent entry
    entries: Vec<String>,

    /// Browsing position, always `< entries.len()`
    cursor: Option<usize>,
}

impl HistoryLog {
    /// Create empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submitted line at the front.
    ///
    /// Empty lines are not recorded. The cursor is left alone; resetting it
    /// is paired with submission by the caller.
    pub fn push(&mut self, line: &str) {
        if line.is_empty() {
            return;
        }
        self.entries.insert(0, line.into());
        // Keep the cursor on the same entry, which moved down by one
        if let Some(cursor) = self.cursor {
            self.cursor = Some(cursor + 1);
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing was submitted yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `index` (0 = most recent).
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    /// Entries, most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Browsing position, `None` while editing a fresh line.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Stop browsing (cursor back to a fresh line).
    pub fn reset_cursor(&mut self) {
        self.cursor = None;
    }

    /// Move the cursor one step. Never mutates the entries.
    pub fn navigate(&mut self, direction: HistoryDirection) -> Recall<'_> {
        match direction {
            HistoryDirection::Up => {
                let next = self.cursor.map_or(0, |c| c + 1);
                if next < self.entries.len() {
                    self.cursor = Some(next);
                    Recall::Entry(&self.entries[next])
                } else {
                    // Already at the oldest entry (or nothing to browse)
                    Recall::Unchanged
                }
            }
            HistoryDirection::Down => match self.cursor {
                None => Recall::Unchanged,
                Some(0) => {
                    self.cursor = None;
                    Recall::Cleared
                }
                Some(c) => {
                    self.cursor = Some(c - 1);
                    Recall::Entry(&self.entries[c - 1])
                }
            },
        }
    }
}
