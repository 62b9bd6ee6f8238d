//! Configuration traits and implementations for listing limits and timings.
//!
//! The `TerminalConfig` trait allows compile-time configuration of the
//! floating affordance timings and listing limits without runtime overhead.
//! Site content (prompt, welcome text, routes) lives in [`SiteProfile`](crate::profile::SiteProfile).

/// Terminal configuration trait defining listing limits and timer delays.
///
/// All values are const (zero runtime cost). Delays are in milliseconds and
/// measured against the time the host feeds through `Session::advance()`.
pub trait TerminalConfig {
    /// Maximum number of entries printed by `history` (default: 10)
    const HISTORY_LISTING: usize;

    /// Delay before the floating affordance appears at session start (default: 1000)
    const AFFORDANCE_DELAY_MS: u64;

    /// Delay between the affordance appearing and the hint bubble (default: 2000)
    const HINT_DELAY_MS: u64;

    /// How long the hint bubble stays up (default: 5000)
    const HINT_DURATION_MS: u64;

    /// Whether the hint bubble is announced at all (default: true)
    const SHOW_HINT: bool;
}

/// Default configuration for the embedded site widget.
///
/// - HISTORY_LISTING: 10 entries
/// - AFFORDANCE_DELAY_MS: 1000
/// - HINT_DELAY_MS: 2000
/// - HINT_DURATION_MS: 5000
/// - SHOW_HINT: true
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DefaultConfig;

impl TerminalConfig for DefaultConfig {
    const HISTORY_LISTING: usize = 10;
    const AFFORDANCE_DELAY_MS: u64 = 1000;
    const HINT_DELAY_MS: u64 = 2000;
    const HINT_DURATION_MS: u64 = 5000;
    const SHOW_HINT: bool = true;
}

/// Quiet configuration: affordance shown immediately, no hint bubble.
///
/// - HISTORY_LISTING: 10 entries
/// - AFFORDANCE_DELAY_MS: 0
/// - HINT_DELAY_MS: 0
/// - HINT_DURATION_MS: 0
/// - SHOW_HINT: false
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct QuietConfig;

impl TerminalConfig for QuietConfig {
    const HISTORY_LISTING: usize = 10;
    const AFFORDANCE_DELAY_MS: u64 = 0;
    const HINT_DELAY_MS: u64 = 0;
    const HINT_DURATION_MS: u64 = 0;
    const SHOW_HINT: bool = false;
}
