#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Controller`**: Owns every piece of state shared between the tick and edge interrupts
//! - **`TickSource`**: Advances the tick counter, the debounce domains and the toggles once per period
//! - **`DebounceCounter`**: Ticks since the last accepted edge of one input group, guarded by a critical section
//! - **`EdgeDispatcher`**: Acknowledges, remaps and debounces edges, then calls the group's `EdgeHandler`
//! - **`ButtonStateMachine`**: Maps button masks to counter and toggle-enable changes
//! - **`ToggleDriver`**: Two independent periodic toggles gated by `ToggleEnable`
//! - **`PeriodicOutput`** / **`CounterDisplay`** / **`EdgeHandler`** / **`InterruptAck`**:
//!   Traits to implement for your hardware
//!
//! Nothing here blocks, allocates or returns errors at runtime. The only
//! fallible call is building a [`TickConfig`].

pub mod config;
pub mod input;
pub mod debounce;
pub mod toggle;
pub mod tick;
pub mod dispatch;
pub mod buttons;
pub mod controller;

pub use config::{ConfigError, OverflowPolicy, TickConfig};
pub use input::{BitGroup, BitRemap, SampledInput, BUMPER_REMAP, BUTTON_REMAP};
pub use debounce::{evaluate, DebounceCounter};
pub use toggle::{PeriodicOutput, PeriodicPhase, Toggle, ToggleDriver};
pub use tick::{TickSource, ToggleEnable};
pub use dispatch::{Dispatch, EdgeDispatcher, EdgeHandler, InterruptAck, NoAck};
pub use buttons::{ButtonAction, ButtonStateMachine, CounterDisplay, OutputCounter, SENTINEL};
pub use controller::Controller;
