//! The context object tying the tick source, debounce domains and outputs together.

use crate::buttons::{ButtonStateMachine, CounterDisplay, OutputCounter};
use crate::config::TickConfig;
use crate::debounce::DebounceCounter;
use crate::dispatch::{EdgeDispatcher, EdgeHandler, InterruptAck};
use crate::input::BitRemap;
use crate::tick::TickSource;
use crate::toggle::PeriodicOutput;

/// All state shared between the tick interrupt and the edge interrupts.
///
/// Every method takes `&self`, so a single controller can live in a `static`
/// and be reached from each interrupt vector:
///
/// - the tick interrupt calls [`on_tick`](Controller::on_tick);
/// - each edge interrupt owns an [`EdgeDispatcher`] built by
///   [`bumper_dispatcher`](Controller::bumper_dispatcher) or
///   [`button_dispatcher`](Controller::button_dispatcher) and calls its
///   `on_input_edge`.
///
/// Both debounce domains start armed, so the first edge of each group after
/// boot is accepted.
pub struct Controller {
    config: TickConfig,
    tick: TickSource,
    bumpers: DebounceCounter,
    buttons: DebounceCounter,
    counter: OutputCounter,
}

impl Controller {
    /// Creates a controller with toggling disabled and both debounce domains armed.
    pub const fn new(config: TickConfig) -> Self {
        Self {
            config,
            tick: TickSource::new(config.period_a(), config.period_b()),
            bumpers: DebounceCounter::preloaded(config.debounce_threshold(), config.overflow()),
            buttons: DebounceCounter::preloaded(config.debounce_threshold(), config.overflow()),
            counter: OutputCounter::new(0),
        }
    }

    /// Runs one period of the tick interrupt. Must not be reentered.
    pub fn on_tick<O: PeriodicOutput>(&self, output: &mut O) {
        self.tick.advance(&[&self.bumpers, &self.buttons], output);
    }

    /// Builds the dispatcher for the bump-sensor group.
    ///
    /// Accepted edges are passed to `handler` as the `debounced_event` output.
    pub fn bumper_dispatcher<H: EdgeHandler, A: InterruptAck>(
        &self,
        remap: BitRemap,
        ack: A,
        handler: H,
    ) -> EdgeDispatcher<'_, H, A> {
        EdgeDispatcher::new(&self.bumpers, self.config.debounce_threshold(), remap, ack, handler)
    }

    /// Builds the dispatcher for the button group, wired to the button state machine.
    pub fn button_dispatcher<D: CounterDisplay, A: InterruptAck>(
        &self,
        remap: BitRemap,
        ack: A,
        display: D,
    ) -> EdgeDispatcher<'_, ButtonStateMachine<'_, D>, A> {
        let machine = ButtonStateMachine::new(&self.counter, self.tick.enable(), display);
        EdgeDispatcher::new(&self.buttons, self.config.debounce_threshold(), remap, ack, machine)
    }

    /// The configuration the controller was built with.
    pub fn config(&self) -> &TickConfig {
        &self.config
    }

    /// Ticks since boot, modulo 2^32.
    pub fn ticks(&self) -> u32 {
        self.tick.ticks()
    }

    /// Current display counter value.
    pub fn counter(&self) -> u8 {
        self.counter.get()
    }

    /// Returns true while periodic toggling is enabled.
    pub fn toggle_enabled(&self) -> bool {
        self.tick.enable().get()
    }

    /// The tick source and the toggles behind it.
    pub fn tick_source(&self) -> &TickSource {
        &self.tick
    }

    /// Debounce domain of the bump-sensor group.
    pub fn bumper_domain(&self) -> &DebounceCounter {
        &self.bumpers
    }

    /// Debounce domain of the button group.
    pub fn button_domain(&self) -> &DebounceCounter {
        &self.buttons
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(TickConfig::DEFAULT)
    }
}
