//! Periodic toggle signals derived from the tick counter.

use core::sync::atomic::{AtomicU32, Ordering};

/// Trait for abstracting the periodic outputs.
///
/// Implement this for whatever renders the two toggles (LEDs, test probes, a
/// log). Calls arrive from the tick interrupt and must return quickly.
pub trait PeriodicOutput {
    /// Period A elapsed: flip output A.
    fn toggle_a(&mut self);

    /// Period B elapsed: flip output B.
    fn toggle_b(&mut self);

    /// Toggling is disabled: drive both outputs to their off state.
    fn force_off(&mut self);
}

/// Which periodic output fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Toggle {
    A,
    B,
}

/// A tick accumulator that fires once every `period` ticks.
///
/// Only the tick interrupt writes the phase, so relaxed atomics are enough;
/// the atomic type exists to make the owning controller `Sync`.
pub struct PeriodicPhase {
    count: AtomicU32,
    period: u32,
}

impl PeriodicPhase {
    /// Creates a phase at zero. A period of zero is treated as one tick.
    pub const fn new(period: u32) -> Self {
        Self {
            count: AtomicU32::new(0),
            period: if period == 0 { 1 } else { period },
        }
    }

    /// Adds one tick. Returns true, and restarts from zero, when the period is reached.
    pub fn advance(&self) -> bool {
        let next = self.count.load(Ordering::Relaxed).saturating_add(1);
        if next >= self.period {
            self.count.store(0, Ordering::Relaxed);
            true
        } else {
            self.count.store(next, Ordering::Relaxed);
            false
        }
    }

    /// Drops accumulated ticks.
    pub fn reset(&self) {
        self.count.store(0, Ordering::Relaxed);
    }

    /// Ticks accumulated toward the next toggle.
    pub fn count(&self) -> u32 {
        self.count.load(Ordering::Relaxed)
    }

    /// Ticks between toggles.
    pub fn period(&self) -> u32 {
        self.period
    }
}

/// Two independent phases sharing one tick cadence and one enable flag.
pub struct ToggleDriver {
    a: PeriodicPhase,
    b: PeriodicPhase,
}

impl ToggleDriver {
    /// Creates both phases at zero.
    pub const fn new(period_a: u32, period_b: u32) -> Self {
        Self {
            a: PeriodicPhase::new(period_a),
            b: PeriodicPhase::new(period_b),
        }
    }

    /// Runs one tick of the driver.
    ///
    /// While enabled both phases advance and each emits its own toggle when it
    /// wraps. While disabled both phases are held at zero and `force_off` is
    /// emitted every tick.
    pub fn advance<O: PeriodicOutput>(&self, enabled: bool, output: &mut O) {
        if enabled {
            if self.a.advance() {
                output.toggle_a();
            }
            if self.b.advance() {
                output.toggle_b();
            }
        } else {
            self.a.reset();
            self.b.reset();
            output.force_off();
        }
    }

    /// The phase behind one of the two toggles.
    pub fn phase(&self, toggle: Toggle) -> &PeriodicPhase {
        match toggle {
            Toggle::A => &self.a,
            Toggle::B => &self.b,
        }
    }
}
