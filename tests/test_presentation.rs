//! Presentation tests through the session.
//!
//! Tests the visibility state machine as a host drives it: pointer events,
//! header clicks, host time, and the views handed to the surface.

#[allow(clippy::duplicate_mod)]
#[path = "helpers.rs"]
mod helpers;

use site_terminal::config::TerminalConfig;
use site_terminal::{PointerTarget, PresentationState, QuietConfig, Variant};

/// Short listing and fast timers, to check config plumbing.
struct CompactConfig;

impl TerminalConfig for CompactConfig {
    const HISTORY_LISTING: usize = 3;
    const AFFORDANCE_DELAY_MS: u64 = 10;
    const HINT_DELAY_MS: u64 = 20;
    const HINT_DURATION_MS: u64 = 30;
    const SHOW_HINT: bool = true;
}

// ============================================================================
// Auto-hide variant
// ============================================================================

#[test]
fn test_auto_hide_start_up_sequence() {
    let (mut session, _log) = helpers::create_variant_session(Variant::AutoHide);

    let view = session.view();
    assert_eq!(view.state, PresentationState::Hidden);
    assert!(!view.affordance_visible);
    assert!(!view.body_visible());
    assert_eq!(session.next_timer_in(), Some(1000));

    session.advance(999).unwrap();
    assert!(!session.view().affordance_visible);

    session.advance(1).unwrap();
    assert!(session.view().affordance_visible);
    assert!(!session.view().hint_visible);
    assert_eq!(session.next_timer_in(), Some(2000));

    session.advance(2000).unwrap();
    assert!(session.view().hint_visible);

    session.advance(5000).unwrap();
    assert!(!session.view().hint_visible);
    assert!(session.view().affordance_visible);
    assert_eq!(session.next_timer_in(), None);
}

#[test]
fn test_surface_sees_only_changes() {
    let (mut session, _log) = helpers::create_variant_session(Variant::AutoHide);
    let initial = session.surface().views().len();

    session.advance(500).unwrap();
    session.pointer_down(PointerTarget::Outside).unwrap();
    assert_eq!(session.surface().views().len(), initial);

    session.advance(500).unwrap();
    assert_eq!(session.surface().views().len(), initial + 1);
    assert!(session.surface().views()[initial].affordance_visible);
}

#[test]
fn test_open_hide_reopen_cycle() {
    let (mut session, _log) = helpers::create_variant_session(Variant::AutoHide);
    session.advance(1000).unwrap();

    session.pointer_down(PointerTarget::Affordance).unwrap();
    assert_eq!(session.state(), PresentationState::Shown);
    assert!(!session.view().affordance_visible);

    session.pointer_down(PointerTarget::Widget).unwrap();
    assert_eq!(session.state(), PresentationState::Shown);

    session.pointer_down(PointerTarget::Outside).unwrap();
    assert_eq!(session.state(), PresentationState::Hidden);
    assert!(session.view().affordance_visible);

    session.open().unwrap();
    assert_eq!(session.state(), PresentationState::Shown);
}

#[test]
fn test_opening_early_suppresses_affordance_and_hint() {
    let (mut session, _log) = helpers::create_variant_session(Variant::AutoHide);

    session.advance(400).unwrap();
    session.open().unwrap();
    session.advance(60_000).unwrap();

    let view = session.view();
    assert_eq!(view.state, PresentationState::Shown);
    assert!(!view.affordance_visible);
    assert!(!view.hint_visible);

    // Hiding again brings the affordance back, but the hint stays spent
    session.pointer_down(PointerTarget::Outside).unwrap();
    session.advance(60_000).unwrap();
    assert!(session.view().affordance_visible);
    assert!(!session.view().hint_visible);
}

#[test]
fn test_history_survives_hide_and_show() {
    let (mut session, _log) = helpers::create_variant_session(Variant::AutoHide);
    session.open().unwrap();
    session.submit("whoami").unwrap();

    session.pointer_down(PointerTarget::Outside).unwrap();
    session.open().unwrap();

    assert_eq!(session.history().get(0), Some("whoami"));
    helpers::assert_contains_all(&session.surface().output(), &["Tony Benoy"]);
}

#[test]
fn test_close_is_final_for_the_page_load() {
    let (mut session, _log) = helpers::create_variant_session(Variant::AutoHide);
    session.advance(1000).unwrap();
    session.open().unwrap();

    session.close().unwrap();
    let view = session.view();
    assert_eq!(view.state, PresentationState::Dismissed);
    assert!(!view.affordance_visible);
    assert_eq!(view.maximize_title(), None);

    session.pointer_down(PointerTarget::Affordance).unwrap();
    session.open().unwrap();
    session.toggle().unwrap();
    session.advance(60_000).unwrap();
    assert_eq!(session.state(), PresentationState::Dismissed);
    assert!(!session.view().affordance_visible);
}

// ============================================================================
// Minimizing variant
// ============================================================================

#[test]
fn test_minimizing_header_toggle() {
    let (mut session, _log) = helpers::create_variant_session(Variant::Minimizing);
    assert_eq!(session.state(), PresentationState::Minimized);
    assert_eq!(session.view().maximize_title(), Some("Maximize"));
    assert_eq!(session.next_timer_in(), None);

    session.toggle().unwrap();
    assert_eq!(session.state(), PresentationState::Shown);
    assert_eq!(session.view().maximize_title(), Some("Minimize"));

    session.pointer_down(PointerTarget::Outside).unwrap();
    assert_eq!(session.state(), PresentationState::Shown);

    session.toggle().unwrap();
    assert_eq!(session.state(), PresentationState::Minimized);
    assert!(!session.view().affordance_visible);
}

// ============================================================================
// Full-page variant
// ============================================================================

#[test]
fn test_full_page_welcome_and_fixed_state() {
    let (mut session, _log) = helpers::create_variant_session(Variant::FullPage);

    helpers::assert_contains_all(
        &session.surface().output(),
        &["Welcome to Tony's Full-Page Terminal!"],
    );
    assert!(session.view().body_visible());

    session.toggle().unwrap();
    session.close().unwrap();
    session.pointer_down(PointerTarget::Outside).unwrap();
    session.advance(60_000).unwrap();

    assert_eq!(session.state(), PresentationState::FullPage);
    assert_eq!(session.surface().views().len(), 1);
}

#[test]
fn test_embedded_welcome() {
    let (session, _log) = helpers::create_variant_session(Variant::AutoHide);

    helpers::assert_contains_all(
        &session.surface().output(),
        &["Welcome to Tony's Interactive Terminal! Type \"help\" for available commands."],
    );
}

// ============================================================================
// Configurations
// ============================================================================

#[test]
fn test_quiet_config() {
    let (mut session, _log) = helpers::create_session_with::<QuietConfig>(helpers::SessionOptions {
        variant: Variant::AutoHide,
        ..Default::default()
    });

    assert!(session.view().affordance_visible);
    assert_eq!(session.next_timer_in(), None);

    session.advance(60_000).unwrap();
    assert!(!session.view().hint_visible);
}

#[test]
fn test_custom_config() {
    let (mut session, _log) =
        helpers::create_session_with::<CompactConfig>(helpers::SessionOptions {
            variant: Variant::AutoHide,
            ..Default::default()
        });

    session.advance(30).unwrap();
    assert!(session.view().hint_visible);
    session.dismiss_hint().unwrap();
    assert!(!session.view().hint_visible);
    assert_eq!(session.next_timer_in(), None);

    for line in ["a", "b", "c", "d"] {
        session.submit(line).unwrap();
    }
    let (_outcome, lines) = helpers::command_lines(&mut session, "history");
    let texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, ["Command history:", "  1. history", "  2. d", "  3. c"]);
}
