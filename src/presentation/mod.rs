//! Presentation state machine: hidden, minimized, shown, full page, dismissed.
//!
//! One state machine serves every widget variant. The variant is chosen at
//! construction and decides which transitions exist:
//!
//! - `AutoHide`: starts hidden behind a floating affordance that appears after
//!   a delay and announces itself once with a hint bubble. Opening hides the
//!   affordance, clicking outside the shown widget hides it again.
//! - `Minimizing`: starts minimized, the header toggles minimized and shown,
//!   there is no affordance and no auto-hide.
//! - `FullPage`: always shown, nothing to transition.
//!
//! Closing (the "x" control or `exit`) dismisses an embedded widget for the
//! rest of the page load. Auto-hide is recoverable; dismissal is not.

use core::marker::PhantomData;

use crate::config::TerminalConfig;

pub mod timer;

pub use timer::{TimerHandle, TimerKind, TimerQueue};

/// Widget variant, fixed for the life of a session.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Variant {
    /// Embedded widget hidden behind a floating affordance
    AutoHide,

    /// Embedded widget collapsing to its header bar
    Minimizing,

    /// Dedicated terminal page
    FullPage,
}

/// Which visibility mode is active.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PresentationState {
    /// Widget invisible, affordance available (auto-hide variant)
    Hidden,

    /// Only the header bar is visible (minimizing variant)
    Minimized,

    /// Widget open
    Shown,

    /// Full-page terminal
    FullPage,

    /// Closed until the next page load
    Dismissed,
}

/// Where a pointer-down landed, as classified by the host.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PointerTarget {
    /// Inside the widget's rendered region
    Widget,

    /// On the floating affordance or its hint bubble
    Affordance,

    /// Anywhere else on the page
    Outside,
}

/// Snapshot handed to [`Surface::present`](crate::io::Surface::present).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct View {
    /// Session variant
    pub variant: Variant,

    /// Active state
    pub state: PresentationState,

    /// Floating re-open button visible
    pub affordance_visible: bool,

    /// Hint bubble next to the affordance visible
    pub hint_visible: bool,
}

impl View {
    /// Whether the terminal body (output and input line) is visible.
    pub fn body_visible(&self) -> bool {
        matches!(
            self.state,
            PresentationState::Shown | PresentationState::FullPage
        )
    }

    /// Title of the header maximize control, `None` when there is no control.
    pub fn maximize_title(&self) -> Option<&'static str> {
        match self.state {
            PresentationState::FullPage | PresentationState::Dismissed => None,
            PresentationState::Shown => Some("Minimize"),
            PresentationState::Hidden | PresentationState::Minimized => Some("Maximize"),
        }
    }
}

/// Presentation state machine with its affordance timers.
#[derive(Debug)]
pub struct Presentation<C: TerminalConfig> {
    variant: Variant,
    state: PresentationState,
    affordance_visible: bool,
    hint_visible: bool,
    /// The hint is a one-shot announcement; set once shown or suppressed
    hint_spent: bool,
    reveal_timer: Option<TimerHandle>,
    hint_timer: Option<TimerHandle>,
    timers: TimerQueue,
    _config: PhantomData<C>,
}

impl<C: TerminalConfig> Presentation<C> {
    /// Initial state for `variant`, with start-up timers scheduled.
    pub fn new(variant: Variant) -> Self {
        let state = match variant {
            Variant::AutoHide => PresentationState::Hidden,
            Variant::Minimizing => PresentationState::Minimized,
            Variant::FullPage => PresentationState::FullPage,
        };

        let mut presentation = Self {
            variant,
            state,
            affordance_visible: false,
            hint_visible: false,
            hint_spent: !C::SHOW_HINT,
            reveal_timer: None,
            hint_timer: None,
            timers: TimerQueue::new(),
            _config: PhantomData,
        };

        if variant == Variant::AutoHide {
            if C::AFFORDANCE_DELAY_MS == 0 {
                presentation.reveal_affordance();
            } else {
                presentation.reveal_timer = presentation
                    .timers
                    .schedule(TimerKind::RevealAffordance, C::AFFORDANCE_DELAY_MS);
            }
        }

        presentation
    }

    /// Session variant.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Active state.
    pub fn state(&self) -> PresentationState {
        self.state
    }

    /// Current snapshot.
    pub fn view(&self) -> View {
        View {
            variant: self.variant,
            state: self.state,
            affordance_visible: self.affordance_visible,
            hint_visible: self.hint_visible,
        }
    }

    /// Milliseconds until the next timer is due, `None` if nothing is pending.
    pub fn next_timer_in(&self) -> Option<u64> {
        self.timers.next_due_in()
    }

    /// Pending timers (for hosts and diagnostics).
    pub fn timers(&self) -> &TimerQueue {
        &self.timers
    }

    /// Explicit open: affordance click, or header/maximize while hidden.
    ///
    /// Returns whether the view changed.
    pub fn open(&mut self) -> bool {
        match (self.variant, self.state) {
            (Variant::AutoHide, PresentationState::Hidden)
            | (Variant::Minimizing, PresentationState::Minimized) => {
                self.enter_shown();
                true
            }
            _ => false,
        }
    }

    /// Header bar or maximize control activated.
    pub fn toggle(&mut self) -> bool {
        match (self.variant, self.state) {
            (Variant::AutoHide, PresentationState::Hidden)
            | (Variant::Minimizing, PresentationState::Minimized) => {
                self.enter_shown();
                true
            }
            (Variant::AutoHide, PresentationState::Shown) => {
                self.enter_hidden();
                true
            }
            (Variant::Minimizing, PresentationState::Shown) => {
                log::debug!("presentation: shown -> minimized");
                self.state = PresentationState::Minimized;
                true
            }
            _ => false,
        }
    }

    /// Close control or `exit`: dismiss for the rest of the page load.
    ///
    /// The full-page terminal cannot be closed.
    pub fn close(&mut self) -> bool {
        match self.state {
            PresentationState::FullPage | PresentationState::Dismissed => false,
            _ => {
                log::debug!("presentation: {:?} -> dismissed", self.state);
                self.cancel_timers();
                self.state = PresentationState::Dismissed;
                self.affordance_visible = false;
                self.hint_visible = false;
                self.hint_spent = true;
                true
            }
        }
    }

    /// Pointer-down anywhere on the page.
    pub fn pointer_down(&mut self, target: PointerTarget) -> bool {
        if self.variant != Variant::AutoHide {
            return false;
        }
        match (self.state, target) {
            (PresentationState::Shown, PointerTarget::Outside) => {
                self.enter_hidden();
                true
            }
            (PresentationState::Hidden, PointerTarget::Affordance) => {
                self.enter_shown();
                true
            }
            _ => false,
        }
    }

    /// Hide the hint bubble before its timer does.
    pub fn dismiss_hint(&mut self) -> bool {
        if let Some(handle) = self.hint_timer.take() {
            self.timers.cancel(handle);
        }
        self.hint_spent = true;
        core::mem::replace(&mut self.hint_visible, false)
    }

    /// Advance host time by `elapsed_ms`, firing every timer that falls due.
    pub fn advance(&mut self, elapsed_ms: u64) -> bool {
        let before = self.view();
        let until = self.timers.now().saturating_add(elapsed_ms);
        while let Some(handle) = self.timers.pop_due(until) {
            self.fire(handle);
        }
        self.timers.settle(until);
        self.view() != before
    }

    fn fire(&mut self, handle: TimerHandle) {
        match handle.kind() {
            TimerKind::RevealAffordance => {
                self.reveal_timer = None;
                if self.state == PresentationState::Hidden && !self.affordance_visible {
                    self.reveal_affordance();
                }
            }
            TimerKind::ShowHint => {
                self.hint_timer = None;
                if self.state == PresentationState::Hidden
                    && self.affordance_visible
                    && !self.hint_spent
                {
                    log::debug!("presentation: hint shown");
                    self.hint_visible = true;
                    self.hint_spent = true;
                    self.hint_timer = self
                        .timers
                        .schedule(TimerKind::DismissHint, C::HINT_DURATION_MS);
                }
            }
            TimerKind::DismissHint => {
                self.hint_timer = None;
                if self.hint_visible {
                    log::debug!("presentation: hint dismissed");
                    self.hint_visible = false;
                }
            }
        }
    }

    fn reveal_affordance(&mut self) {
        log::debug!("presentation: affordance revealed");
        self.affordance_visible = true;
        if !self.hint_spent {
            self.hint_timer = self.timers.schedule(TimerKind::ShowHint, C::HINT_DELAY_MS);
        }
    }

    fn enter_shown(&mut self) {
        log::debug!("presentation: {:?} -> shown", self.state);
        // Opening before the announcement suppresses it for good
        self.cancel_timers();
        self.hint_spent = true;
        self.state = PresentationState::Shown;
        self.affordance_visible = false;
        self.hint_visible = false;
    }

    fn enter_hidden(&mut self) {
        log::debug!("presentation: {:?} -> hidden", self.state);
        self.state = PresentationState::Hidden;
        self.affordance_visible = true;
    }

    fn cancel_timers(&mut self) {
        if let Some(handle) = self.reveal_timer.take() {
            self.timers.cancel(handle);
        }
        if let Some(handle) = self.hint_timer.take() {
            self.timers.cancel(handle);
        }
    }
}
