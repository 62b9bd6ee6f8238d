//! Shared test helpers to reduce duplication across integration tests.

#![allow(dead_code)]

#[allow(clippy::duplicate_mod)]
#[path = "fixtures/mod.rs"]
mod fixtures;

pub use fixtures::*;

use site_terminal::config::{DefaultConfig, TerminalConfig};
use site_terminal::{
    Location, OutputLine, Services, Session, SiteHandlers, SiteProfile, SubmitOutcome, Variant,
};

/// Session type used throughout the integration tests.
pub type TestSession<C = DefaultConfig> = Session<SiteHandlers, MockSurface, C>;

// ============================================================================
// Session Creation Helpers
// ============================================================================

/// Options for building a test session.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Widget variant
    pub variant: Variant,

    /// Hosting page pathname
    pub pathname: &'static str,

    /// Whether the page offers a theme toggle
    pub theme: bool,

    /// Indices replayed by the random source
    pub picks: Vec<usize>,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            variant: Variant::Minimizing,
            pathname: "/",
            theme: true,
            picks: vec![0],
        }
    }
}

/// Build an activated session with the given options and config.
pub fn create_session_with<C: TerminalConfig>(
    options: SessionOptions,
) -> (TestSession<C>, HostLog) {
    let _ = env_logger::builder().is_test(true).try_init();

    let log = HostLog::default();
    let services = Services {
        router: Box::new(MockRouter::new(&log)),
        theme: if options.theme {
            Some(Box::new(MockTheme::new(&log)))
        } else {
            None
        },
        clock: Box::new(FixedClock(TEST_NOW)),
        rng: Box::new(SequenceRandom::new(&options.picks)),
    };

    let mut session = Session::new(
        options.variant,
        SiteHandlers,
        MockSurface::new(),
        services,
        SiteProfile::default(),
        Location::from_pathname(options.pathname),
    );
    session.activate().unwrap();
    (session, log)
}

/// Build an activated minimizing session at the site root, output cleared.
pub fn create_test_session() -> (TestSession, HostLog) {
    let (mut session, log) = create_session_with::<DefaultConfig>(SessionOptions::default());
    session.surface_mut().clear_output();
    (session, log)
}

/// Build an activated session of `variant` at the site root.
pub fn create_variant_session(variant: Variant) -> (TestSession, HostLog) {
    create_session_with::<DefaultConfig>(SessionOptions {
        variant,
        ..SessionOptions::default()
    })
}

// ============================================================================
// Command Execution Helpers
// ============================================================================

/// Submit a line and return the text it rendered.
pub fn execute_command<C: TerminalConfig>(session: &mut TestSession<C>, cmd: &str) -> String {
    session.surface_mut().clear_output();
    session.submit(cmd).unwrap();
    session.surface().output()
}

/// Submit a line and return the rendered lines after the echo.
pub fn command_lines<C: TerminalConfig>(
    session: &mut TestSession<C>,
    cmd: &str,
) -> (SubmitOutcome, Vec<OutputLine>) {
    session.surface_mut().clear_output();
    let outcome = session.submit(cmd).unwrap();
    let lines = session.surface().lines().iter().skip(1).cloned().collect();
    (outcome, lines)
}

/// Type text into the input buffer one key at a time.
pub fn type_input<C: TerminalConfig>(session: &mut TestSession<C>, input: &str) {
    for c in input.chars() {
        session
            .handle_key(site_terminal::InputKey::Char(c))
            .unwrap();
    }
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert that output contains all expected strings.
pub fn assert_contains_all(output: &str, expected: &[&str]) {
    for exp in expected {
        assert!(
            output.contains(exp),
            "Expected '{}' in output, got: {}",
            exp,
            output
        );
    }
}

/// Assert that output does NOT contain any of the strings.
pub fn assert_contains_none(output: &str, forbidden: &[&str]) {
    for forbid in forbidden {
        assert!(
            !output.contains(forbid),
            "Did not expect '{}' in output, got: {}",
            forbid,
            output
        );
    }
}
