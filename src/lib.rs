//! # site-terminal
//!
//! Interactive pseudo-terminal for a personal website.
//!
//! **Key features:**
//! - **Closed command table** - `#[derive(CommandSet)]` enum plus one handler
//! - **Host-agnostic output** - lines and presentation go through a `Surface`
//! - **Host-driven timers** - no clock inside; the host calls `advance()`
//! - **Three variants** - auto-hide widget, minimizing widget, full page
//!
//! ## Optional Features
//!
//! - `std` (default) - OS randomness and a system clock
//! - `profile` - load a `SiteProfile` from TOML
//! - `repl` - the `site-terminal-repl` binary
//!
//! Without `std` the library is `no_std` + `alloc`.

#![no_std]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

// Derive output names `::site_terminal::...`; lets the crate use it on itself.
extern crate self as site_terminal;

// Re-export derive macro (always available)
pub use site_terminal_macros::CommandSet;

// ============================================================================
// Module Declarations
// ============================================================================

pub mod command;
pub mod config;
pub mod error;
pub mod io;
pub mod presentation;
pub mod profile;
pub mod response;
pub mod services;
pub mod session;

// ============================================================================
// Re-exports - Public API
// ============================================================================

// Command table
pub use command::CommandSet;

// Output
pub use io::{LineStyle, MemorySurface, OutputLine, Surface};

// Configuration
pub use config::{DefaultConfig, QuietConfig, TerminalConfig};
pub use profile::{Location, SiteProfile};

// Error types
pub use error::TermError;

// Responses
pub use response::{Effect, Response};

// Presentation
pub use presentation::{PointerTarget, PresentationState, Variant, View};

// Host collaborators
pub use services::{Clock, RandomSource, RouteTable, Router, Services, ThemeToggle, XorShift};

#[cfg(feature = "std")]
pub use services::{OsRandom, SystemClock};

// Session types
pub use session::{
    CommandHandler, Context, HistoryDirection, InputKey, KeyOutcome, Session, SiteCommand,
    SiteHandlers, SubmitOutcome,
};

// ============================================================================
// Library Metadata
// ============================================================================

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
