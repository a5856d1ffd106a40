//! Tick delivery strategies
//!
//! A timer's ticks originate from the runtime's kernel-backed time driver,
//! but whether a given tick is *delivered* to the callback depends on the
//! delivery strategy chosen at construction:
//!
//! - [`KernelDelivery`]: always deliver (the default).
//! - [`HostLoopDelivery`]: deliver only while an associated [`HostLoop`] is
//!   in one of the modes the timer registered for. Cooperative host loops
//!   suppress ordinary timers during interactive phases such as scroll
//!   tracking; this strategy reproduces that gating for callers that need
//!   drop-in compatible behavior.
//!
//! Suppressed ticks are discarded, not queued: when the loop re-enters a
//! registered mode, delivery resumes on the next scheduled tick.

use std::borrow::Cow;

use tokio::sync::watch;

/// A named execution mode of a cooperative host event loop.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LoopMode(Cow<'static, str>);

impl LoopMode {
    /// The mode a host loop runs in when nothing special is happening.
    pub const DEFAULT: LoopMode = LoopMode(Cow::Borrowed("default"));

    /// The mode a host loop enters during interactive tracking (scrolling,
    /// dragging). Timers registered only for [`LoopMode::DEFAULT`] are
    /// suppressed here.
    pub const TRACKING: LoopMode = LoopMode(Cow::Borrowed("tracking"));

    /// A custom mode name.
    pub fn new(name: impl Into<String>) -> Self {
        LoopMode(Cow::Owned(name.into()))
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

/// Decides whether a scheduled tick is delivered to the timer callback.
///
/// Implementations must answer from the calling context without blocking;
/// the tick task consults this immediately before each delivery.
pub trait TickDelivery: Send + Sync + 'static {
    fn deliverable(&self) -> bool;
}

/// Default strategy: every tick from the time driver is delivered.
#[derive(Debug, Clone, Copy, Default)]
pub struct KernelDelivery;

impl TickDelivery for KernelDelivery {
    fn deliverable(&self) -> bool {
        true
    }
}

/// Handle to a cooperative, mode-based host event loop.
///
/// The host integration flips the current mode as its loop transitions
/// (e.g. entering [`LoopMode::TRACKING`] while the user scrolls); timers
/// built with a [`HostLoopDelivery`] from this loop only deliver while the
/// current mode is one they registered for.
#[derive(Debug, Clone)]
pub struct HostLoop {
    mode: watch::Sender<LoopMode>,
}

impl HostLoop {
    /// Create a host loop handle starting in [`LoopMode::DEFAULT`].
    pub fn new() -> Self {
        let (mode, _) = watch::channel(LoopMode::DEFAULT);
        Self { mode }
    }

    /// Switch the loop's current mode.
    pub fn enter_mode(&self, mode: LoopMode) {
        self.mode.send_if_modified(|current| {
            if *current == mode {
                return false;
            }
            tracing::debug!(mode = mode.name(), "host loop changed mode");
            *current = mode;
            true
        });
    }

    /// The mode the loop is currently in.
    pub fn current_mode(&self) -> LoopMode {
        self.mode.borrow().clone()
    }

    /// Build a delivery strategy that fires only while the loop is in one of
    /// `modes`. Registering for both [`LoopMode::DEFAULT`] and
    /// [`LoopMode::TRACKING`] keeps a timer alive across interactive phases.
    pub fn delivery(&self, modes: impl IntoIterator<Item = LoopMode>) -> HostLoopDelivery {
        HostLoopDelivery {
            current: self.mode.subscribe(),
            registered: modes.into_iter().collect(),
        }
    }
}

impl Default for HostLoop {
    fn default() -> Self {
        Self::new()
    }
}

/// Delivery gated on a [`HostLoop`]'s current mode.
#[derive(Debug)]
pub struct HostLoopDelivery {
    current: watch::Receiver<LoopMode>,
    registered: Vec<LoopMode>,
}

impl TickDelivery for HostLoopDelivery {
    fn deliverable(&self) -> bool {
        let current = self.current.borrow();
        self.registered.iter().any(|mode| *mode == *current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kernel_delivery_always_fires() {
        assert!(KernelDelivery.deliverable());
    }

    #[test]
    fn host_loop_gates_on_registered_modes() {
        let host = HostLoop::new();
        let default_only = host.delivery([LoopMode::DEFAULT]);
        let common = host.delivery([LoopMode::DEFAULT, LoopMode::TRACKING]);

        assert!(default_only.deliverable());
        assert!(common.deliverable());

        host.enter_mode(LoopMode::TRACKING);
        assert!(!default_only.deliverable());
        assert!(common.deliverable());

        host.enter_mode(LoopMode::DEFAULT);
        assert!(default_only.deliverable());
    }

    #[test]
    fn custom_modes_compare_by_name() {
        let host = HostLoop::new();
        let modal = host.delivery([LoopMode::new("modal")]);
        assert!(!modal.deliverable());

        host.enter_mode(LoopMode::new("modal"));
        assert_eq!(host.current_mode().name(), "modal");
        assert!(modal.deliverable());
    }
}
