//! The spawned tick loop
//!
//! One task per timer. The task arms the runtime's interval primitive only
//! while the state word says `Active`; suspending drops the armed interval
//! and resuming arms a fresh one, so the primitive never sees an unbalanced
//! stop/start pair and a resumed timer restarts from a full period.

use std::time::Duration;

use tokio::sync::watch;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::delivery::TickDelivery;
use crate::state::{LifecycleState, RepeatPolicy};

use super::handle::{Tick, TimerControl};

pub(crate) type TickFn = Box<dyn FnMut(Tick<'_>) + Send>;
pub(crate) type CompleteFn = Box<dyn FnOnce() + Send>;

pub(crate) async fn run(
    control: TimerControl,
    mut state_rx: watch::Receiver<LifecycleState>,
    period: Duration,
    policy: RepeatPolicy,
    delivery: Box<dyn TickDelivery>,
    mut on_tick: TickFn,
    mut on_complete: Option<CompleteFn>,
) {
    'lifecycle: loop {
        // Park until the timer is active. No interval is armed here, so a
        // suspended timer costs nothing and delivers nothing.
        loop {
            match *state_rx.borrow_and_update() {
                LifecycleState::Active => break,
                LifecycleState::Suspended => {}
                LifecycleState::Cancelled => break 'lifecycle,
            }
            if state_rx.changed().await.is_err() {
                break 'lifecycle;
            }
        }

        // Arm a fresh interval on every entry to Active: a resume restarts
        // the period instead of replaying ticks missed while suspended.
        let mut interval = time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    // Re-check the state word right before delivering: once
                    // cancel() has returned, this read observes Cancelled
                    // and no new callback begins.
                    if *state_rx.borrow() != LifecycleState::Active {
                        continue 'lifecycle;
                    }
                    if !delivery.deliverable() {
                        tracing::trace!("tick suppressed by delivery strategy");
                        continue;
                    }
                    let count = control.record_tick();
                    tracing::trace!(count, "tick delivered");
                    on_tick(Tick {
                        count,
                        control: &control,
                    });
                    if policy.exhausted_by(count) {
                        tracing::debug!(count, "repeat count exhausted");
                        if let Some(complete) = on_complete.take() {
                            complete();
                        }
                        control.cancel();
                        break 'lifecycle;
                    }
                }
                changed = state_rx.changed() => {
                    if changed.is_err() {
                        break 'lifecycle;
                    }
                    // Drops the armed interval before re-evaluating state.
                    continue 'lifecycle;
                }
            }
        }
    }
}
