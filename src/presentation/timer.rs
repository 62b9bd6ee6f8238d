//! Fire-once, cancellable timers driven by host time.
//!
//! The queue never reads a clock. The host reports elapsed time through
//! `Session::advance()` and asks `next_due_in()` when to call back, which maps
//! directly onto a single `setTimeout` in a browser.

/// Maximum number of simultaneously pending timers.
pub const MAX_TIMERS: usize = 4;

/// What a timer does when it fires.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TimerKind {
    /// Show the floating affordance after the start-up delay
    RevealAffordance,

    /// Show the hint bubble next to the affordance
    ShowHint,

    /// Hide the hint bubble again
    DismissHint,
}

/// Handle to a scheduled timer.
///
/// Handles are unique for the life of a queue; cancelling a handle that
/// already fired is a no-op.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TimerHandle {
    id: u32,
    kind: TimerKind,
}

impl TimerHandle {
    /// Kind the timer was scheduled with.
    pub fn kind(&self) -> TimerKind {
        self.kind
    }
}

#[derive(Debug, Copy, Clone)]
struct Pending {
    handle: TimerHandle,
    deadline: u64,
}

/// Queue of pending timers against a host-driven clock (milliseconds).
#[derive(Debug)]
pub struct TimerQueue {
    pending: heapless::Vec<Pending, MAX_TIMERS>,
    now: u64,
    next_id: u32,
}

impl TimerQueue {
    /// Empty queue at time zero.
    pub const fn new() -> Self {
        Self {
            pending: heapless::Vec::new(),
            now: 0,
            next_id: 0,
        }
    }

    /// Current queue time.
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Number of pending timers.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// True when nothing is scheduled.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Schedule a timer `delay_ms` from now.
    ///
    /// Returns `None` if the queue is full.
    pub fn schedule(&mut self, kind: TimerKind, delay_ms: u64) -> Option<TimerHandle> {
        let handle = TimerHandle {
            id: self.next_id,
            kind,
        };
        let pending = Pending {
            handle,
            deadline: self.now.saturating_add(delay_ms),
        };
        if self.pending.push(pending).is_err() {
            log::warn!("timer queue full, dropping {:?}", kind);
            return None;
        }
        self.next_id = self.next_id.wrapping_add(1);
        log::trace!("scheduled {:?} in {}ms", kind, delay_ms);
        Some(handle)
    }

    /// Cancel a pending timer. Returns whether it was still pending.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        match self.pending.iter().position(|p| p.handle == handle) {
            Some(index) => {
                self.pending.swap_remove(index);
                log::trace!("cancelled {:?}", handle.kind);
                true
            }
            None => false,
        }
    }

    /// Whether the timer is still pending.
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.pending.iter().any(|p| p.handle == handle)
    }

    /// Milliseconds until the earliest pending timer is due.
    pub fn next_due_in(&self) -> Option<u64> {
        self.pending
            .iter()
            .map(|p| p.deadline.saturating_sub(self.now))
            .min()
    }

    /// Remove and return the earliest timer due at or before `until`.
    ///
    /// Queue time moves to that timer's deadline, so anything scheduled while
    /// handling it is measured from the moment it fired. Ties fire in
    /// scheduling order.
    pub fn pop_due(&mut self, until: u64) -> Option<TimerHandle> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.deadline <= until)
            .min_by_key(|(_, p)| (p.deadline, p.handle.id))
            .map(|(index, _)| index)?;

        let due = self.pending.swap_remove(index);
        self.now = self.now.max(due.deadline);
        log::trace!("fired {:?} at {}ms", due.handle.kind, self.now);
        Some(due.handle)
    }

    /// Move queue time forward to `until` (never backwards).
    pub fn settle(&mut self, until: u64) {
        self.now = self.now.max(until);
    }
}

impl Default for TimerQueue {
    fn default() -> Self {
        Self::new()
    }
}
