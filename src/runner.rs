//! Shared completion and cancellation state for long-running computations.
//!
//! The congruence never runs anything in the background itself. Whoever
//! drives the classification strategy (possibly on another thread) shares a
//! [`RunState`] with the congruence through an `Arc` and flips its flags; the
//! congruence reads them at well-defined points.

use std::sync::atomic::{AtomicBool, Ordering};

/// Atomic `finished` / `dead` flags.
///
/// `finished` means the strategy has fully determined the classes for the
/// current generating pairs. `dead` means the computation has been killed and
/// must not be resumed.
#[derive(Debug, Default)]
pub struct RunState {
    finished: AtomicBool,
    dead: AtomicBool,
}

impl RunState {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn finished(&self) -> bool {
        self.finished.load(Ordering::Acquire)
    }

    #[inline]
    pub fn set_finished(&self, value: bool) {
        self.finished.store(value, Ordering::Release);
    }

    /// Kills the computation. Irreversible.
    #[inline]
    pub fn kill(&self) {
        self.dead.store(true, Ordering::Release);
    }

    #[inline]
    pub fn dead(&self) -> bool {
        self.dead.load(Ordering::Acquire)
    }
}
