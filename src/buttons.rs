//! Button state machine driving the display counter and the toggle enable.

use crate::dispatch::EdgeHandler;
use crate::input::SampledInput;
use crate::tick::ToggleEnable;
use core::sync::atomic::{AtomicU8, Ordering};

/// Counter value written by [`ButtonAction::Sentinel`].
pub const SENTINEL: u8 = 0xAA;

/// Trait for abstracting whatever shows the counter.
pub trait CounterDisplay {
    /// Called after every recognized button press with the counter's new value.
    fn counter_changed(&mut self, value: u8);
}

impl<F: FnMut(u8)> CounterDisplay for F {
    fn counter_changed(&mut self, value: u8) {
        self(value)
    }
}

/// The bounded display counter. Wraps silently in both directions.
///
/// Written only from the button interrupt; readers in other contexts see a
/// whole byte, so relaxed loads and stores are sufficient. No read-modify-write
/// atomics, so it builds for cores without compare-and-swap (ARMv6-M).
pub struct OutputCounter(AtomicU8);

impl OutputCounter {
    /// Creates the counter at `value`.
    pub const fn new(value: u8) -> Self {
        OutputCounter(AtomicU8::new(value))
    }

    /// Current value.
    pub fn get(&self) -> u8 {
        self.0.load(Ordering::Relaxed)
    }

    fn increment(&self) -> u8 {
        self.set(self.get().wrapping_add(1))
    }

    fn decrement(&self) -> u8 {
        self.set(self.get().wrapping_sub(1))
    }

    fn set(&self, value: u8) -> u8 {
        self.0.store(value, Ordering::Relaxed);
        value
    }
}

impl Default for OutputCounter {
    fn default() -> Self {
        Self::new(0)
    }
}

/// What a debounced button mask asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonAction {
    /// Button 0: count up.
    Increment,
    /// Button 1: count down.
    Decrement,
    /// Button 2: clear the counter and stop toggling.
    Reset,
    /// Button 3: show the sentinel pattern and flip toggling.
    Sentinel,
    /// No button, several buttons, or an unknown bit.
    Ignore,
}

impl ButtonAction {
    /// Looks up the action for a mask. Only exact single-bit masks 0-3 map to actions.
    pub const fn from_mask(mask: u8) -> Self {
        match mask {
            0x01 => ButtonAction::Increment,
            0x02 => ButtonAction::Decrement,
            0x04 => ButtonAction::Reset,
            0x08 => ButtonAction::Sentinel,
            _ => ButtonAction::Ignore,
        }
    }
}

impl From<SampledInput> for ButtonAction {
    fn from(input: SampledInput) -> Self {
        ButtonAction::from_mask(input.bits())
    }
}

/// Applies button actions to the counter and the toggle enable flag.
///
/// Stateless apart from the two values it writes: the next transition depends
/// only on the incoming mask.
pub struct ButtonStateMachine<'c, D: CounterDisplay> {
    counter: &'c OutputCounter,
    enable: &'c ToggleEnable,
    display: D,
}

impl<'c, D: CounterDisplay> ButtonStateMachine<'c, D> {
    /// Wires the machine to the counter it drives and the flag it gates.
    pub fn new(counter: &'c OutputCounter, enable: &'c ToggleEnable, display: D) -> Self {
        Self {
            counter,
            enable,
            display,
        }
    }

    /// Applies the action for `mask`. Returns the action taken.
    pub fn handle_mask(&mut self, mask: u8) -> ButtonAction {
        let action = ButtonAction::from_mask(mask);

        let value = match action {
            ButtonAction::Increment => Some(self.counter.increment()),
            ButtonAction::Decrement => Some(self.counter.decrement()),
            ButtonAction::Reset => {
                self.enable.set(false);
                Some(self.counter.set(0))
            }
            ButtonAction::Sentinel => {
                self.enable.flip();
                Some(self.counter.set(SENTINEL))
            }
            ButtonAction::Ignore => None,
        };

        #[cfg(feature = "defmt")]
        defmt::debug!("button mask {=u8:#x}, counter {=u8}", mask, self.counter.get());

        if let Some(value) = value {
            self.display.counter_changed(value);
        }

        action
    }

    /// The display receiving `counter_changed` calls.
    pub fn display(&self) -> &D {
        &self.display
    }
}

impl<D: CounterDisplay> EdgeHandler for ButtonStateMachine<'_, D> {
    fn handle(&mut self, input: SampledInput) {
        self.handle_mask(input.bits());
    }
}
