//! Timer lifecycle state machine
//!
//! The state word is the single gate in front of the underlying timer
//! primitive. Every suspend/resume/cancel request and every tick delivery
//! checks it, so the primitive never sees an unbalanced stop/start pair and
//! never fires after cancellation.

/// Lifecycle of a managed timer.
///
/// Transitions:
/// - `Active` → `Suspended` (suspend), `Active` → `Cancelled` (cancel)
/// - `Suspended` → `Active` (resume), `Suspended` → `Cancelled` (cancel)
/// - `Cancelled` is terminal
///
/// Redundant requests (suspend while suspended, resume while active, anything
/// after cancel) are silent no-ops, never errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    /// Ticking; the primitive is armed.
    Active,
    /// Not ticking, resumable.
    Suspended,
    /// Terminal; no tick is ever delivered again.
    Cancelled,
}

impl LifecycleState {
    /// Whether this state can still change.
    pub fn is_terminal(self) -> bool {
        matches!(self, LifecycleState::Cancelled)
    }

    /// Apply a suspend request. Returns `true` if the state changed.
    pub(crate) fn apply_suspend(&mut self) -> bool {
        match self {
            LifecycleState::Active => {
                *self = LifecycleState::Suspended;
                true
            }
            LifecycleState::Suspended | LifecycleState::Cancelled => false,
        }
    }

    /// Apply a resume request. Returns `true` if the state changed.
    pub(crate) fn apply_resume(&mut self) -> bool {
        match self {
            LifecycleState::Suspended => {
                *self = LifecycleState::Active;
                true
            }
            LifecycleState::Active | LifecycleState::Cancelled => false,
        }
    }

    /// Apply a cancel request. Returns `true` if the state changed.
    pub(crate) fn apply_cancel(&mut self) -> bool {
        match self {
            LifecycleState::Active | LifecycleState::Suspended => {
                *self = LifecycleState::Cancelled;
                true
            }
            LifecycleState::Cancelled => false,
        }
    }
}

/// How many ticks a timer delivers before completing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatPolicy {
    /// Tick forever until suspended or cancelled.
    Unbounded,
    /// Deliver exactly this many ticks, then complete and cancel.
    Bounded(u64),
}

impl RepeatPolicy {
    /// Build a policy from a raw repeat count.
    ///
    /// A count of `0` means **unbounded** ("run forever"), not "never fire".
    /// This matches the legacy constructor contract this crate replaces;
    /// callers wanting a one-shot timer pass `1` or use a non-repeating
    /// constructor.
    pub fn from_count(count: u64) -> Self {
        if count == 0 {
            RepeatPolicy::Unbounded
        } else {
            RepeatPolicy::Bounded(count)
        }
    }

    /// Whether `delivered` ticks exhaust this policy.
    pub fn exhausted_by(self, delivered: u64) -> bool {
        match self {
            RepeatPolicy::Unbounded => false,
            RepeatPolicy::Bounded(limit) => delivered >= limit,
        }
    }
}
