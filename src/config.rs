//! Tick-period and debounce configuration.

/// What the debounce elapsed counter does when it reaches `u32::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OverflowPolicy {
    /// Stick at `u32::MAX` until the next accepted edge resets it.
    #[default]
    Saturating,

    /// Roll over to zero.
    ///
    /// After a long enough quiet period the counter wraps and reads as
    /// "just reset", so an edge arriving in the first `threshold` ticks after
    /// the wrap is judged against a count that no longer reflects real
    /// elapsed time. Kept for parity with firmware that relies on it.
    Wrapping,
}

/// Configuration errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A toggle period of zero ticks.
    ZeroPeriod,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroPeriod => {
                write!(f, "toggle periods must be at least one tick")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Tick counts for the two periodic toggles and for debounce acceptance.
///
/// All values are in ticks of the periodic timer driving
/// [`Controller::on_tick`](crate::Controller::on_tick). At a 1 kHz tick one
/// tick is one millisecond.
///
/// Fields are private so every configuration goes through [`TickConfig::new`]
/// or [`TickConfig::DEFAULT`]; a zero period cannot be built by hand:
///
/// ```compile_fail
/// use edge_debounce::TickConfig;
///
/// let config = TickConfig { period_a: 0, ..TickConfig::DEFAULT };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickConfig {
    /// Ticks between `toggle_a` signals.
    period_a: u32,

    /// Ticks between `toggle_b` signals.
    period_b: u32,

    /// Minimum ticks since the last accepted edge before another is accepted.
    debounce_threshold: u32,

    /// Overflow behavior of the debounce elapsed counter.
    overflow: OverflowPolicy,
}

impl TickConfig {
    /// 1 kHz tick: toggle A every 500 ms, toggle B every 2 s, 300 ms debounce.
    pub const DEFAULT: TickConfig = TickConfig {
        period_a: 500,
        period_b: 2000,
        debounce_threshold: 300,
        overflow: OverflowPolicy::Saturating,
    };

    /// Creates a configuration with the saturating overflow policy.
    ///
    /// # Errors
    /// * `ZeroPeriod` - `period_a` or `period_b` is zero
    pub const fn new(period_a: u32, period_b: u32, debounce_threshold: u32) -> Result<Self, ConfigError> {
        if period_a == 0 || period_b == 0 {
            return Err(ConfigError::ZeroPeriod);
        }

        Ok(Self {
            period_a,
            period_b,
            debounce_threshold,
            overflow: OverflowPolicy::Saturating,
        })
    }

    /// Ticks between `toggle_a` signals. Never zero.
    pub const fn period_a(&self) -> u32 {
        self.period_a
    }

    /// Ticks between `toggle_b` signals. Never zero.
    pub const fn period_b(&self) -> u32 {
        self.period_b
    }

    /// Minimum ticks between accepted edges of one input group.
    pub const fn debounce_threshold(&self) -> u32 {
        self.debounce_threshold
    }

    /// Overflow behavior of the debounce elapsed counters.
    pub const fn overflow(&self) -> OverflowPolicy {
        self.overflow
    }

    /// Returns this configuration with a different overflow policy.
    pub const fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }
}

impl Default for TickConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
