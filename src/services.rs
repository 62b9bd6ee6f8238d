//! Host collaborators: page routing, theme toggle, clock and randomness.
//!
//! Everything a session needs from the hosting page is behind a trait here so
//! the session itself stays platform-agnostic. `Services` bundles one of each.

use alloc::boxed::Box;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use chrono::{DateTime, Utc};

use crate::profile::{PageName, RouteAlias, SiteProfile};

/// Page routing collaborator.
///
/// `navigate` performs a full page load: the session that requested it is
/// discarded by the host, together with its history.
pub trait Router {
    /// Destination for a logical page token, `None` if unrecognized.
    fn resolve(&self, page: &str) -> Option<&str>;

    /// Display name of a pathname, `None` if unknown.
    fn page_name(&self, pathname: &str) -> Option<&str>;

    /// Leave the current page for `destination`.
    fn navigate(&mut self, destination: &str);
}

/// Alias table resolving `cd` targets and naming pages.
///
/// Resolution only; hosts implement [`Router`] by delegating to a table and
/// adding their own navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<RouteAlias>,
    pages: Vec<PageName>,
}

impl RouteTable {
    /// Build a table from a site profile.
    pub fn from_profile(profile: &SiteProfile) -> Self {
        Self {
            routes: profile.routes.clone(),
            pages: profile.pages.clone(),
        }
    }

    /// Exact-match alias lookup.
    pub fn resolve(&self, page: &str) -> Option<&str> {
        self.routes
            .iter()
            .find(|route| route.alias == page)
            .map(|route| route.destination.as_str())
    }

    /// Exact-match page name lookup.
    pub fn page_name(&self, pathname: &str) -> Option<&str> {
        self.pages
            .iter()
            .find(|page| page.path == pathname)
            .map(|page| page.name.as_str())
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::from_profile(&SiteProfile::default())
    }
}

/// Host page theme control (optional on a page).
pub trait ThemeToggle {
    /// Flip between dark and light.
    fn toggle(&mut self);
}

/// Source of the current timestamp, already formatted for display.
pub trait Clock {
    /// Current date and time.
    fn now(&self) -> String;
}

/// Uniform random index source for the fun commands.
pub trait RandomSource {
    /// Uniformly distributed index in `0..len`. `len` is never zero.
    fn index(&mut self, len: usize) -> usize;
}

/// Small deterministic xorshift generator.
///
/// Not cryptographic. Useful for tests, and for hosts without an OS entropy
/// source that seed it from a timestamp.
#[derive(Debug, Clone)]
pub struct XorShift {
    state: u64,
}

impl XorShift {
    /// Seeded generator. A zero seed is replaced by a fixed non-zero constant.
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed };
        Self { state }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}

impl RandomSource for XorShift {
    fn index(&mut self, len: usize) -> usize {
        // Modulo bias is negligible for pools of a handful of entries
        (self.next_u64() % len as u64) as usize
    }
}

/// Randomness from the operating system (requires `std` feature).
#[cfg(feature = "std")]
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandom;

#[cfg(feature = "std")]
impl RandomSource for OsRandom {
    fn index(&mut self, len: usize) -> usize {
        let mut buf = [0u8; 8];
        if let Err(err) = getrandom::fill(&mut buf) {
            log::warn!("os randomness unavailable: {}", err);
            return 0;
        }
        (u64::from_le_bytes(buf) % len as u64) as usize
    }
}

/// System clock in the host's local time zone (requires `std` feature).
///
/// Format: `Mon Oct 19 2026 14:03:11 GMT+0200`.
#[cfg(feature = "std")]
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

#[cfg(feature = "std")]
impl Clock for SystemClock {
    fn now(&self) -> String {
        chrono::Local::now()
            .format("%a %b %d %Y %H:%M:%S GMT%z")
            .to_string()
    }
}

/// Format seconds since the Unix epoch as a UTC timestamp.
///
/// Out-of-range timestamps format as an empty string.
pub fn format_utc(secs: i64) -> String {
    match DateTime::<Utc>::from_timestamp(secs, 0) {
        Some(time) => time.format("%a %b %d %Y %H:%M:%S GMT+0000 (UTC)").to_string(),
        None => String::new(),
    }
}

/// The host collaborators of one session.
pub struct Services {
    /// Page routing
    pub router: Box<dyn Router>,

    /// Theme toggle, `None` when the page has no toggle
    pub theme: Option<Box<dyn ThemeToggle>>,

    /// Timestamp source for `date`
    pub clock: Box<dyn Clock>,

    /// Randomness for `fortune`, `joke` and `easter`
    pub rng: Box<dyn RandomSource>,
}

impl core::fmt::Debug for Services {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Services")
            .field("router", &"<dyn Router>")
            .field("theme", &self.theme.as_ref().map(|_| "<dyn ThemeToggle>"))
            .field("clock", &"<dyn Clock>")
            .field("rng", &"<dyn RandomSource>")
            .finish()
    }
}
