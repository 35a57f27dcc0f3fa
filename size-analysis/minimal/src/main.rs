#![no_std]
#![no_main]

use core::cell::RefCell;
use cortex_m_rt::{entry, exception};
use critical_section::Mutex;
use edge_debounce::{
    BUMPER_REMAP, BUTTON_REMAP, ButtonStateMachine, Controller, EdgeDispatcher, PeriodicOutput,
    SampledInput, TickConfig,
};
use panic_halt as _;

// ============================================================================
// Minimal Collaborators
// ============================================================================

/// Zero-size periodic outputs for measuring library overhead
pub struct MinimalLeds;

impl PeriodicOutput for MinimalLeds {
    fn toggle_a(&mut self) {
        core::hint::black_box(());
    }

    fn toggle_b(&mut self) {
        core::hint::black_box(());
    }

    fn force_off(&mut self) {
        core::hint::black_box(());
    }
}

fn clear_port_flags() {
    core::hint::black_box(());
}

fn show_bumps(input: SampledInput) {
    core::hint::black_box(input);
}

fn show_counter(value: u8) {
    core::hint::black_box(value);
}

// ============================================================================
// Shared State
// ============================================================================

type BumperDispatcher = EdgeDispatcher<'static, fn(SampledInput), fn()>;
type ButtonDispatcher = EdgeDispatcher<'static, ButtonStateMachine<'static, fn(u8)>, fn()>;

static CONTROLLER: Controller = Controller::new(TickConfig::DEFAULT);

static BUMPERS: Mutex<RefCell<Option<BumperDispatcher>>> = Mutex::new(RefCell::new(None));
static BUTTONS: Mutex<RefCell<Option<ButtonDispatcher>>> = Mutex::new(RefCell::new(None));

// ============================================================================
// Interrupt Bodies
// ============================================================================

#[exception]
fn SysTick() {
    CONTROLLER.on_tick(&mut MinimalLeds);
}

// Stand-ins for the two port vectors; a PAC would mark these `#[interrupt]`.
#[inline(never)]
fn bumper_port_edge(raw: u8) {
    critical_section::with(|cs| {
        if let Some(dispatcher) = BUMPERS.borrow_ref_mut(cs).as_mut() {
            dispatcher.on_input_edge(raw);
        }
    });
}

#[inline(never)]
fn button_port_edge(raw: u8) {
    critical_section::with(|cs| {
        if let Some(dispatcher) = BUTTONS.borrow_ref_mut(cs).as_mut() {
            dispatcher.on_input_edge(raw);
        }
    });
}

#[entry]
fn main() -> ! {
    let bumpers: BumperDispatcher = CONTROLLER.bumper_dispatcher(
        BUMPER_REMAP.active_low(),
        clear_port_flags as fn(),
        show_bumps as fn(SampledInput),
    );
    let buttons: ButtonDispatcher =
        CONTROLLER.button_dispatcher(BUTTON_REMAP, clear_port_flags as fn(), show_counter as fn(u8));

    critical_section::with(|cs| {
        BUMPERS.borrow_ref_mut(cs).replace(bumpers);
        BUTTONS.borrow_ref_mut(cs).replace(buttons);
    });

    loop {
        bumper_port_edge(core::hint::black_box(0x7F));
        button_port_edge(core::hint::black_box(0x08));
        core::hint::black_box(CONTROLLER.counter());
    }
}
