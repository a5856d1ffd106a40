//! Managed interval timers
//!
//! This module provides:
//! - **Builder**: full control over interval, repeat policy, delivery
//!   strategy, and initial suspension
//! - **Handles**: owning [`TimerHandle`] (cancel-on-drop) and clonable
//!   [`TimerControl`] (suspend/resume/cancel from any thread)
//! - **Constructors**: the common calling styles as one-line functions
//!
//! # Lifecycle
//!
//! construct → (resume ⇄ suspend)* → cancel (terminal)
//!
//! Ticks come from the runtime's kernel-backed time driver, so they keep
//! arriving in contexts where a cooperative host loop would suspend its own
//! timers. Every control operation is idempotent; cancellation is
//! irreversible and releases the callbacks.

mod builder;
mod handle;
mod task;


pub use builder::TimerBuilder;
pub use handle::{Tick, TimerControl, TimerHandle};

use std::sync::Arc;
use std::time::Duration;

use crate::error::TimerError;
use crate::proxy::{ActionProxy, Payload, TimerTarget};

/// An unbounded timer ticking once per second, the default cadence.
pub fn every_second<F>(on_tick: F) -> Result<TimerHandle, TimerError>
where
    F: FnMut(Tick<'_>) + Send + 'static,
{
    TimerBuilder::new(Duration::from_secs(1)).spawn(on_tick)
}

/// A timer with a caller-supplied interval.
///
/// `repeating = false` delivers a single tick and then cancels.
pub fn simple_timer<F>(
    interval: Duration,
    repeating: bool,
    on_tick: F,
) -> Result<TimerHandle, TimerError>
where
    F: FnMut(Tick<'_>) + Send + 'static,
{
    TimerBuilder::new(interval).repeating(repeating).spawn(on_tick)
}

/// A timer that delivers `repeat_count` ticks, then invokes `on_complete`
/// once and cancels itself.
///
/// `repeat_count == 0` means unbounded: the timer runs forever and
/// `on_complete` never fires.
pub fn bounded_timer<F, C>(
    interval: Duration,
    repeat_count: u64,
    on_tick: F,
    on_complete: Option<C>,
) -> Result<TimerHandle, TimerError>
where
    F: FnMut(Tick<'_>) + Send + 'static,
    C: FnOnce() + Send + 'static,
{
    let mut builder = TimerBuilder::new(interval).repeat_count(repeat_count);
    if let Some(on_complete) = on_complete {
        builder = builder.on_complete(on_complete);
    }
    builder.spawn(on_tick)
}

/// A timer that notifies `target` through a forwarding proxy instead of a
/// closure, holding the target only weakly.
///
/// Drop-in replacement for target/action timers that would otherwise retain
/// their target: the caller does not need to cancel the timer when the
/// target goes away. Once the target is dropped, the timer cancels itself on
/// the next forward attempt and no call reaches the dead target. Detach the
/// returned handle to let the proxy govern the timer's lifetime entirely.
pub fn proxied_timer<T>(
    interval: Duration,
    target: &Arc<T>,
    action: impl Into<String>,
    payload: Option<Payload>,
    repeating: bool,
) -> Result<TimerHandle, TimerError>
where
    T: TimerTarget + 'static,
{
    let proxy = ActionProxy::new(target, action, payload);
    TimerBuilder::new(interval)
        .repeating(repeating)
        .spawn(move |tick| {
            proxy.forward(tick.timer());
        })
}
