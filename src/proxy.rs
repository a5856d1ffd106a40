//! Forwarding proxy for weak-target timers
//!
//! A repeating timer that notifies some object must not keep that object
//! alive, and must not keep firing after the object is gone. The proxy is
//! the indirection that makes both hold: the timer task strongly owns the
//! proxy, the proxy holds the real target only weakly, and every tick is
//! forwarded through it. When the target has been dropped, the proxy cancels
//! the owning timer instead of firing into a void forever.

use std::any::Any;
use std::sync::{Arc, Weak};

use crate::timer::TimerControl;

/// Opaque payload delivered to a target alongside the action name.
/// Targets downcast it to whatever concrete type the caller supplied.
pub type Payload = Arc<dyn Any + Send + Sync>;

/// An object that can receive a named action from a timer.
///
/// The `timer` argument is the control surface of the timer that fired, so a
/// target can suspend or cancel it from inside the handler.
pub trait TimerTarget: Send + Sync {
    fn receive_action(&self, action: &str, payload: Option<&Payload>, timer: &TimerControl);
}

/// What a [`forward`](ActionProxy::forward) call observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForwardOutcome {
    /// The target was alive and its handler ran.
    TargetNotified,
    /// The target has been dropped; the owning timer was cancelled.
    TargetGone,
}

/// Indirection between a timer and its callback target.
///
/// Holds the target weakly: creating a proxy never extends the target's
/// lifetime, and a proxy outliving its target is the expected end-of-life
/// signal for the owning timer.
pub struct ActionProxy<T: TimerTarget> {
    target: Weak<T>,
    action: String,
    payload: Option<Payload>,
}

impl<T: TimerTarget> ActionProxy<T> {
    /// Create a proxy for `target`. Only a weak reference is taken.
    pub fn new(target: &Arc<T>, action: impl Into<String>, payload: Option<Payload>) -> Self {
        Self {
            target: Arc::downgrade(target),
            action: action.into(),
            payload,
        }
    }

    /// The action name delivered on each tick.
    pub fn action(&self) -> &str {
        &self.action
    }

    /// Forward one tick to the target.
    ///
    /// If the target is still alive its handler is invoked with the action
    /// name, the payload, and `timer`. If the target has been dropped,
    /// nothing is invoked and `timer` is cancelled so the underlying
    /// primitive stops firing.
    pub fn forward(&self, timer: &TimerControl) -> ForwardOutcome {
        match self.target.upgrade() {
            Some(target) => {
                target.receive_action(&self.action, self.payload.as_ref(), timer);
                ForwardOutcome::TargetNotified
            }
            None => {
                tracing::debug!(action = %self.action, "proxy target gone, cancelling timer");
                timer.cancel();
                ForwardOutcome::TargetGone
            }
        }
    }
}
