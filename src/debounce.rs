//! Elapsed-tick debounce gate shared between the tick and edge interrupts.
//!
//! The elapsed counter is the one value written from more than one interrupt
//! context: the tick path increments it, the edge path compares and resets it.
//! Both sequences run inside a single `critical_section::with` scope, so a tick
//! that fires while an edge is being evaluated is applied either wholly before
//! or wholly after the reset, never lost and never counted twice.

use crate::config::OverflowPolicy;
use core::cell::Cell;
use critical_section::Mutex;

/// Decides whether an edge is far enough from the last accepted one.
///
/// Accepts iff `elapsed >= threshold`.
#[inline]
pub const fn evaluate(elapsed: u32, threshold: u32) -> bool {
    elapsed >= threshold
}

/// Ticks elapsed since the last accepted edge of one debounce domain.
pub struct DebounceCounter {
    elapsed: Mutex<Cell<u32>>,
    overflow: OverflowPolicy,
}

impl DebounceCounter {
    /// Creates a counter at zero: the first `threshold` ticks reject edges.
    pub const fn new(overflow: OverflowPolicy) -> Self {
        Self::preloaded(0, overflow)
    }

    /// Creates a counter that already reads `elapsed` ticks.
    ///
    /// Preloading with the threshold arms the domain so the first edge after
    /// boot is accepted.
    pub const fn preloaded(elapsed: u32, overflow: OverflowPolicy) -> Self {
        Self {
            elapsed: Mutex::new(Cell::new(elapsed)),
            overflow,
        }
    }

    /// Advances the counter by one tick. Called from the tick interrupt.
    pub fn advance(&self) {
        critical_section::with(|cs| {
            let elapsed = self.elapsed.borrow(cs);
            let next = match self.overflow {
                OverflowPolicy::Saturating => elapsed.get().saturating_add(1),
                OverflowPolicy::Wrapping => elapsed.get().wrapping_add(1),
            };
            elapsed.set(next);
        });
    }

    /// Evaluates an edge against `threshold` and resets the counter if accepted.
    ///
    /// Returns the elapsed count the decision was made on alongside the verdict.
    /// A rejected edge leaves the counter untouched.
    pub fn try_accept(&self, threshold: u32) -> (bool, u32) {
        critical_section::with(|cs| {
            let elapsed = self.elapsed.borrow(cs);
            let seen = elapsed.get();
            let accepted = evaluate(seen, threshold);
            if accepted {
                elapsed.set(0);
            }
            (accepted, seen)
        })
    }

    /// Current elapsed count.
    pub fn elapsed(&self) -> u32 {
        critical_section::with(|cs| self.elapsed.borrow(cs).get())
    }

    /// Overflow policy this counter was built with.
    pub fn overflow(&self) -> OverflowPolicy {
        self.overflow
    }
}
