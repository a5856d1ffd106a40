//! # pacer
//!
//! Pause/resume/cancel-able interval timers on the tokio time driver, with a
//! weak-target forwarding proxy for callback targets the timer must not keep
//! alive.
//!
//! Two independent pieces, each usable on its own:
//!
//! - [`timer`] — a managed interval timer wrapping the runtime's
//!   kernel-backed timer primitive behind an explicit lifecycle state
//!   machine. Suspend, resume, and cancel are synchronous, idempotent, and
//!   thread-safe; bounded timers deliver exactly N ticks and then a single
//!   completion callback.
//! - [`proxy`] — a forwarding indirection the timer owns strongly while
//!   holding the real target only weakly. When the target is dropped the
//!   proxy cancels the owning timer, so a repeating timer neither extends
//!   its target's lifetime nor keeps firing into a void.
//!
//! Tick delivery is pluggable ([`delivery`]): the default kernel strategy
//! always fires, and a host-loop strategy reproduces the mode-gated delivery
//! of cooperative event loops for drop-in compatibility.

pub mod delivery;
pub mod error;
pub mod proxy;
pub mod state;
pub mod timer;

// Re-exports for convenience
pub use delivery::{HostLoop, HostLoopDelivery, KernelDelivery, LoopMode, TickDelivery};
pub use error::TimerError;
pub use proxy::{ActionProxy, ForwardOutcome, Payload, TimerTarget};
pub use state::{LifecycleState, RepeatPolicy};
pub use timer::{
    Tick, TimerBuilder, TimerControl, TimerHandle, bounded_timer, every_second, proxied_timer,
    simple_timer,
};
