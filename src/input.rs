//! Sampled input masks and physical-to-logical bit remapping.

/// The state of every channel in an input group at the moment of an edge.
///
/// Bit `n` set means logical channel `n` was active. Several bits can be set
/// at once when switches close together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SampledInput(u8);

impl SampledInput {
    /// No channel active.
    pub const NONE: SampledInput = SampledInput(0);

    /// Wraps an already-logical mask.
    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        SampledInput(bits)
    }

    /// Returns the raw logical mask.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns true if logical channel `channel` (0-7) is active.
    #[inline]
    pub const fn is_active(self, channel: u8) -> bool {
        channel < 8 && self.0 & (1 << channel) != 0
    }

    /// Number of active channels.
    #[inline]
    pub const fn active_count(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns true if no channel is active.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl From<u8> for SampledInput {
    fn from(bits: u8) -> Self {
        SampledInput(bits)
    }
}

impl From<SampledInput> for u8 {
    fn from(input: SampledInput) -> Self {
        input.0
    }
}

/// A contiguous run of physical pins moved as one block.
///
/// The pins selected by `mask` are shifted right by `shift` bits. Shifting
/// keeps the order of pins within the group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BitGroup {
    /// Physical pins in the group.
    pub mask: u8,

    /// Right shift applied to the selected pins.
    pub shift: u8,
}

impl BitGroup {
    /// Creates a group moving the pins in `mask` down by `shift` bits.
    pub const fn new(mask: u8, shift: u8) -> Self {
        Self { mask, shift }
    }
}

/// Table-driven translation from a physical port value to a [`SampledInput`].
///
/// Pins outside every group are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitRemap {
    groups: &'static [BitGroup],
    active_low: bool,
}

impl BitRemap {
    /// Creates an active-high remap from a group table.
    pub const fn new(groups: &'static [BitGroup]) -> Self {
        Self {
            groups,
            active_low: false,
        }
    }

    /// Inverts the port value before remapping, for switches that pull to ground.
    pub const fn active_low(mut self) -> Self {
        self.active_low = true;
        self
    }

    /// Translates a raw port value.
    pub fn apply(&self, raw: u8) -> SampledInput {
        let raw = if self.active_low { !raw } else { raw };

        let bits = self
            .groups
            .iter()
            .fold(0u8, |acc, group| {
                acc | (raw & group.mask).checked_shr(u32::from(group.shift)).unwrap_or(0)
            });

        SampledInput(bits)
    }

    /// Physical pins that contribute to the logical mask.
    pub fn pin_mask(&self) -> u8 {
        self.groups.iter().fold(0, |acc, group| acc | group.mask)
    }

    /// Returns true if no two physical pins land on the same logical bit and
    /// no pin is shifted off the bottom of the mask.
    pub fn is_injective(&self) -> bool {
        let mut seen = 0u8;

        for group in self.groups {
            if group.shift > 7 || group.mask.trailing_zeros() < u32::from(group.shift) {
                return false;
            }

            let landed = group.mask >> group.shift;
            if seen & landed != 0 {
                return false;
            }
            seen |= landed;
        }

        true
    }
}

const BUMPER_GROUPS: [BitGroup; 3] = [
    BitGroup::new(0xE0, 2),
    BitGroup::new(0x0C, 1),
    BitGroup::new(0x01, 0),
];

const BUTTON_GROUPS: [BitGroup; 1] = [BitGroup::new(0x0F, 0)];

/// Six bump switches on P7..P5, P3, P2 and P0, packed to bits 5..0.
///
/// The switches pull to ground; use `BUMPER_REMAP.active_low()` when feeding
/// the raw port value instead of an already-inverted one.
pub const BUMPER_REMAP: BitRemap = BitRemap::new(&BUMPER_GROUPS);

/// Four push buttons on P3..P0, already active high.
pub const BUTTON_REMAP: BitRemap = BitRemap::new(&BUTTON_GROUPS);
