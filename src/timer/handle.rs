//! Timer control surfaces
//!
//! [`TimerControl`] is the clonable, thread-safe face of a running timer:
//! every suspend/resume/cancel request goes through its guarded state word.
//! [`TimerHandle`] is the owning wrapper returned by the constructors; it
//! cancels the timer when dropped unless explicitly detached.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;

use crate::state::LifecycleState;

/// Clonable control surface for a running timer.
///
/// All methods are synchronous, idempotent, and safe to call from any thread,
/// including from inside the timer's own tick callback. The lifecycle state
/// lives in a single guarded word shared with the tick task; redundant
/// requests (suspend while suspended, resume while active, anything after
/// cancel) change nothing and report nothing.
#[derive(Clone)]
pub struct TimerControl {
    state: watch::Sender<LifecycleState>,
    ticks: Arc<AtomicU64>,
}

impl TimerControl {
    /// Create the shared state word and the receiver the tick task waits on.
    pub(crate) fn new(initial: LifecycleState) -> (Self, watch::Receiver<LifecycleState>) {
        let (state, rx) = watch::channel(initial);
        let control = Self {
            state,
            ticks: Arc::new(AtomicU64::new(0)),
        };
        (control, rx)
    }

    /// Stop tick delivery until [`resume`](Self::resume) is called.
    ///
    /// No-op if the timer is already suspended or cancelled.
    pub fn suspend(&self) {
        self.state.send_if_modified(|state| {
            let changed = state.apply_suspend();
            if changed {
                tracing::debug!("timer suspended");
            }
            changed
        });
    }

    /// Restart tick delivery after a suspend.
    ///
    /// The interval restarts from a full period: ticks missed while suspended
    /// are not delivered in a burst. No-op if the timer is already active or
    /// cancelled.
    pub fn resume(&self) {
        self.state.send_if_modified(|state| {
            let changed = state.apply_resume();
            if changed {
                tracing::debug!("timer resumed");
            }
            changed
        });
    }

    /// Permanently stop the timer. Irreversible and idempotent.
    ///
    /// After `cancel` returns, no new tick callback begins: the tick task
    /// re-checks the state word under the same lock this write takes before
    /// invoking the callback. A callback already past that check when the
    /// cancel lands runs to completion; `cancel` does not wait for it.
    pub fn cancel(&self) {
        self.state.send_if_modified(|state| {
            let changed = state.apply_cancel();
            if changed {
                tracing::debug!("timer cancelled");
            }
            changed
        });
    }

    /// Current lifecycle state.
    pub fn state(&self) -> LifecycleState {
        *self.state.borrow()
    }

    /// Whether the timer has reached its terminal state.
    pub fn is_cancelled(&self) -> bool {
        self.state().is_terminal()
    }

    /// Number of ticks delivered so far.
    pub fn elapsed_ticks(&self) -> u64 {
        self.ticks.load(Ordering::Relaxed)
    }

    /// Record a delivered tick, returning the new 1-based count.
    pub(crate) fn record_tick(&self) -> u64 {
        self.ticks.fetch_add(1, Ordering::Relaxed) + 1
    }
}

impl fmt::Debug for TimerControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerControl")
            .field("state", &self.state())
            .field("elapsed_ticks", &self.elapsed_ticks())
            .finish()
    }
}

/// Context passed to the tick callback on every delivery.
pub struct Tick<'a> {
    /// 1-based count of ticks delivered so far, this one included.
    pub count: u64,
    pub(crate) control: &'a TimerControl,
}

impl Tick<'_> {
    /// Control surface of the timer that delivered this tick, so a callback
    /// can suspend or cancel its own timer.
    pub fn timer(&self) -> &TimerControl {
        self.control
    }
}

impl fmt::Debug for Tick<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tick").field("count", &self.count).finish()
    }
}

/// Owning handle for a running timer.
///
/// Dropping the handle cancels the timer, so a timer cannot keep firing into
/// a scope that no longer holds any reference to it. Call
/// [`detach`](Self::detach) for timers whose lifetime is governed elsewhere
/// (a bounded repeat count, or a forwarding proxy that self-cancels when its
/// target goes away).
#[must_use = "dropping the handle cancels the timer"]
pub struct TimerHandle {
    control: TimerControl,
    detached: bool,
}

impl TimerHandle {
    pub(crate) fn new(control: TimerControl) -> Self {
        Self {
            control,
            detached: false,
        }
    }

    /// A clonable control surface for this timer.
    pub fn control(&self) -> TimerControl {
        self.control.clone()
    }

    /// See [`TimerControl::suspend`].
    pub fn suspend(&self) {
        self.control.suspend();
    }

    /// See [`TimerControl::resume`].
    pub fn resume(&self) {
        self.control.resume();
    }

    /// See [`TimerControl::cancel`].
    pub fn cancel(&self) {
        self.control.cancel();
    }

    /// Current lifecycle state.
    pub fn state(&self) -> LifecycleState {
        self.control.state()
    }

    /// Number of ticks delivered so far.
    pub fn elapsed_ticks(&self) -> u64 {
        self.control.elapsed_ticks()
    }

    /// Consume the handle without cancelling the timer.
    ///
    /// The timer keeps running until it cancels itself (bounded count
    /// exhausted, or proxy target gone) or until a retained
    /// [`TimerControl`] cancels it.
    pub fn detach(mut self) {
        self.detached = true;
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        if !self.detached {
            self.control.cancel();
        }
    }
}

impl fmt::Debug for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerHandle")
            .field("control", &self.control)
            .field("detached", &self.detached)
            .finish()
    }
}
