//! Edge interrupt dispatch through a debounce domain.

use crate::debounce::DebounceCounter;
use crate::input::{BitRemap, SampledInput};

/// Consumer of debounced edges for one input group.
pub trait EdgeHandler {
    /// Called with the sampled input of every accepted edge.
    fn handle(&mut self, input: SampledInput);
}

impl<F: FnMut(SampledInput)> EdgeHandler for F {
    fn handle(&mut self, input: SampledInput) {
        self(input)
    }
}

/// Clears the hardware condition that raised an edge interrupt.
pub trait InterruptAck {
    /// Called exactly once per edge interrupt, accepted or dropped.
    fn acknowledge(&mut self);
}

impl<F: FnMut()> InterruptAck for F {
    fn acknowledge(&mut self) {
        self()
    }
}

/// For inputs whose interrupt flag is cleared elsewhere.
pub struct NoAck;

impl InterruptAck for NoAck {
    fn acknowledge(&mut self) {}
}

/// Outcome of a single dispatched edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Dispatch {
    /// Forwarded to the handler.
    Accepted(SampledInput),

    /// Arrived `elapsed` ticks after the last accepted edge, under the threshold.
    Dropped { elapsed: u32 },
}

/// Routes edges of one input group to its handler, dropping bounces.
///
/// Edges arriving faster than the threshold are discarded, not queued.
pub struct EdgeDispatcher<'d, H: EdgeHandler, A: InterruptAck> {
    domain: &'d DebounceCounter,
    threshold: u32,
    remap: BitRemap,
    ack: A,
    handler: H,
}

impl<'d, H: EdgeHandler, A: InterruptAck> EdgeDispatcher<'d, H, A> {
    /// Creates a dispatcher for one input group.
    ///
    /// Edges are accepted once `domain` has counted at least `threshold` ticks.
    pub fn new(domain: &'d DebounceCounter, threshold: u32, remap: BitRemap, ack: A, handler: H) -> Self {
        Self {
            domain,
            threshold,
            remap,
            ack,
            handler,
        }
    }

    /// Handles one edge interrupt carrying the raw port value.
    ///
    /// Acknowledges the interrupt exactly once, remaps the port value, and
    /// hands the result to the handler only if the debounce domain accepts it.
    pub fn on_input_edge(&mut self, raw: u8) -> Dispatch {
        self.ack.acknowledge();

        let input = self.remap.apply(raw);
        let (accepted, elapsed) = self.domain.try_accept(self.threshold);

        if !accepted {
            #[cfg(feature = "defmt")]
            defmt::trace!("edge dropped after {} ticks", elapsed);
            return Dispatch::Dropped { elapsed };
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("edge accepted: {=u8:#x}", input.bits());

        self.handler.handle(input);
        Dispatch::Accepted(input)
    }

    /// The interrupt acknowledge collaborator.
    pub fn ack(&self) -> &A {
        &self.ack
    }

    /// The handler receiving accepted edges.
    pub fn handler(&self) -> &H {
        &self.handler
    }
}
