//! Timer construction

use std::time::Duration;

use crate::delivery::{KernelDelivery, TickDelivery};
use crate::error::TimerError;
use crate::state::{LifecycleState, RepeatPolicy};

use super::handle::{Tick, TimerControl, TimerHandle};
use super::task::{self, CompleteFn};

/// Configures and spawns a managed interval timer.
///
/// Defaults: unbounded repeats, kernel delivery, starts active. Must be
/// built from within a tokio runtime; the tick loop is spawned onto it.
///
/// ```no_run
/// use std::time::Duration;
/// use pacer::TimerBuilder;
///
/// #[tokio::main]
/// async fn main() -> Result<(), pacer::TimerError> {
///     let timer = TimerBuilder::new(Duration::from_secs(1))
///         .repeat_count(5)
///         .on_complete(|| println!("done"))
///         .spawn(|tick| println!("tick {}", tick.count))?;
///
///     tokio::time::sleep(Duration::from_secs(6)).await;
///     drop(timer);
///     Ok(())
/// }
/// ```
pub struct TimerBuilder {
    interval: Duration,
    policy: RepeatPolicy,
    start_suspended: bool,
    delivery: Box<dyn TickDelivery>,
    on_complete: Option<CompleteFn>,
}

impl TimerBuilder {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            policy: RepeatPolicy::Unbounded,
            start_suspended: false,
            delivery: Box::new(KernelDelivery),
            on_complete: None,
        }
    }

    /// Deliver exactly `count` ticks, then complete and cancel.
    ///
    /// A count of `0` means unbounded — run forever — not "never fire".
    pub fn repeat_count(mut self, count: u64) -> Self {
        self.policy = RepeatPolicy::from_count(count);
        self
    }

    /// `true` ticks forever; `false` delivers a single tick then cancels.
    pub fn repeating(mut self, repeating: bool) -> Self {
        self.policy = if repeating {
            RepeatPolicy::Unbounded
        } else {
            RepeatPolicy::Bounded(1)
        };
        self
    }

    /// Create the timer in the `Suspended` state; no tick is delivered until
    /// the first [`resume`](TimerControl::resume).
    pub fn start_suspended(mut self) -> Self {
        self.start_suspended = true;
        self
    }

    /// Select the tick delivery strategy (default: [`KernelDelivery`]).
    pub fn delivery(mut self, delivery: impl TickDelivery) -> Self {
        self.delivery = Box::new(delivery);
        self
    }

    /// Callback invoked exactly once when a bounded repeat count is
    /// exhausted naturally. Never invoked on manual cancel.
    pub fn on_complete<F>(mut self, on_complete: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        self.on_complete = Some(Box::new(on_complete));
        self
    }

    /// Validate the configuration and spawn the tick loop.
    ///
    /// Fails with [`TimerError::InvalidInterval`] on a zero interval.
    pub fn spawn<F>(self, on_tick: F) -> Result<TimerHandle, TimerError>
    where
        F: FnMut(Tick<'_>) + Send + 'static,
    {
        if self.interval.is_zero() {
            return Err(TimerError::InvalidInterval {
                interval: self.interval,
            });
        }

        let initial = if self.start_suspended {
            LifecycleState::Suspended
        } else {
            LifecycleState::Active
        };
        let (control, state_rx) = TimerControl::new(initial);

        tokio::spawn(task::run(
            control.clone(),
            state_rx,
            self.interval,
            self.policy,
            self.delivery,
            Box::new(on_tick),
            self.on_complete,
        ));

        Ok(TimerHandle::new(control))
    }
}
