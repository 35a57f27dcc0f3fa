//! Shared test infrastructure for edge-debounce integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use edge_debounce::{Controller, PeriodicOutput, SampledInput, Toggle};

// ============================================================================
// Mock Periodic Outputs
// ============================================================================

/// One periodic output call, tagged with the tick it happened on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Toggle(Toggle, u32),
    ForceOff(u32),
}

/// Records every periodic output call.
pub struct MockOutputs {
    tick: u32,
    history: heapless::Vec<Signal, 512>,
    pub toggles_a: u32,
    pub toggles_b: u32,
    pub force_offs: u32,
}

impl MockOutputs {
    pub fn new() -> Self {
        Self {
            tick: 0,
            history: heapless::Vec::new(),
            toggles_a: 0,
            toggles_b: 0,
            force_offs: 0,
        }
    }

    /// Ticks on which the given toggle fired.
    pub fn toggle_ticks(&self, toggle: Toggle) -> heapless::Vec<u32, 512> {
        self.history
            .iter()
            .filter_map(|signal| match signal {
                Signal::Toggle(t, tick) if *t == toggle => Some(*tick),
                _ => None,
            })
            .collect()
    }

    pub fn history(&self) -> &[Signal] {
        &self.history
    }
}

impl PeriodicOutput for MockOutputs {
    fn toggle_a(&mut self) {
        self.toggles_a += 1;
        let _ = self.history.push(Signal::Toggle(Toggle::A, self.tick));
    }

    fn toggle_b(&mut self) {
        self.toggles_b += 1;
        let _ = self.history.push(Signal::Toggle(Toggle::B, self.tick));
    }

    fn force_off(&mut self) {
        self.force_offs += 1;
        let _ = self.history.push(Signal::ForceOff(self.tick));
    }
}

// ============================================================================
// Mock Edge Consumers
// ============================================================================

/// Records debounced bump events.
pub struct MockBumpLog {
    events: heapless::Vec<SampledInput, 32>,
}

impl MockBumpLog {
    pub fn new() -> Self {
        Self {
            events: heapless::Vec::new(),
        }
    }

    pub fn events(&self) -> &[SampledInput] {
        &self.events
    }
}

impl edge_debounce::EdgeHandler for MockBumpLog {
    fn handle(&mut self, input: SampledInput) {
        let _ = self.events.push(input);
    }
}

/// Records every value shown on the counter display.
pub struct MockDisplay {
    values: heapless::Vec<u8, 600>,
}

impl MockDisplay {
    pub fn new() -> Self {
        Self {
            values: heapless::Vec::new(),
        }
    }

    pub fn values(&self) -> &[u8] {
        &self.values
    }

    pub fn last(&self) -> Option<u8> {
        self.values.last().copied()
    }
}

impl edge_debounce::CounterDisplay for MockDisplay {
    fn counter_changed(&mut self, value: u8) {
        let _ = self.values.push(value);
    }
}

/// Counts interrupt acknowledgements.
pub struct MockAck {
    pub count: u32,
}

impl MockAck {
    pub fn new() -> Self {
        Self { count: 0 }
    }
}

impl edge_debounce::InterruptAck for MockAck {
    fn acknowledge(&mut self) {
        self.count += 1;
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Runs `n` ticks, stamping each output call with the controller's tick count.
pub fn run_ticks(controller: &Controller, outputs: &mut MockOutputs, n: u32) {
    for _ in 0..n {
        outputs.tick = controller.ticks() + 1;
        controller.on_tick(outputs);
    }
}
