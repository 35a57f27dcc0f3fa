//! The periodic tick source.

use crate::debounce::DebounceCounter;
use crate::toggle::{PeriodicOutput, ToggleDriver};
use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

/// Gate for periodic toggling.
///
/// Written only from the button interrupt and read from the tick interrupt.
/// A single-byte flag with one writer is tear-free, so plain relaxed loads and
/// stores are used and no critical section is taken. Read-modify-write atomics
/// are avoided so the flag builds on cores without compare-and-swap (ARMv6-M).
pub struct ToggleEnable(AtomicBool);

impl ToggleEnable {
    /// Creates the flag with an initial state.
    pub const fn new(enabled: bool) -> Self {
        ToggleEnable(AtomicBool::new(enabled))
    }

    /// Returns true while periodic toggling is enabled.
    pub fn get(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Enables or disables periodic toggling.
    pub fn set(&self, enabled: bool) {
        self.0.store(enabled, Ordering::Relaxed);
    }

    /// Flips the flag and returns the new value.
    pub fn flip(&self) -> bool {
        let enabled = !self.0.load(Ordering::Relaxed);
        self.0.store(enabled, Ordering::Relaxed);
        enabled
    }
}

impl Default for ToggleEnable {
    fn default() -> Self {
        Self::new(false)
    }
}

/// Advances time for everything that depends on the periodic interrupt.
///
/// [`advance`](TickSource::advance) must be called exactly once per tick and
/// must not be reentered; a tick interrupt never preempts itself on the
/// targets this runs on.
pub struct TickSource {
    ticks: AtomicU32,
    enable: ToggleEnable,
    toggles: ToggleDriver,
}

impl TickSource {
    /// Creates a disabled tick source with the two toggle periods.
    pub const fn new(period_a: u32, period_b: u32) -> Self {
        Self {
            ticks: AtomicU32::new(0),
            enable: ToggleEnable::new(false),
            toggles: ToggleDriver::new(period_a, period_b),
        }
    }

    /// Runs one tick.
    ///
    /// Increments the tick counter (wrapping at `u32::MAX`), advances every
    /// debounce domain, then runs the toggle driver against the current
    /// enable flag.
    pub fn advance<O: PeriodicOutput>(&self, domains: &[&DebounceCounter], output: &mut O) {
        // Only this method writes the tick counter, and it is never reentered.
        let ticks = self.ticks.load(Ordering::Relaxed).wrapping_add(1);
        self.ticks.store(ticks, Ordering::Relaxed);

        for domain in domains {
            domain.advance();
        }

        self.toggles.advance(self.enable.get(), output);
    }

    /// Ticks since boot, modulo 2^32.
    pub fn ticks(&self) -> u32 {
        self.ticks.load(Ordering::Relaxed)
    }

    /// The flag gating periodic toggling.
    pub fn enable(&self) -> &ToggleEnable {
        &self.enable
    }

    /// The two periodic toggles.
    pub fn toggles(&self) -> &ToggleDriver {
        &self.toggles
    }
}
