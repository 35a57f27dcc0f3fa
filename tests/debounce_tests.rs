//! Integration tests for debounced edge dispatch

mod common;
use common::*;

use edge_debounce::{
    BUMPER_REMAP, BUTTON_REMAP, Controller, DebounceCounter, Dispatch, EdgeDispatcher, NoAck,
    OverflowPolicy, SampledInput, TickConfig,
};

fn controller(threshold: u32) -> Controller {
    Controller::new(TickConfig::new(500, 2000, threshold).unwrap())
}

#[test]
fn edges_at_0_150_300_600_with_threshold_300() {
    let controller = controller(300);
    let mut outputs = MockOutputs::new();
    let mut bumpers = controller.bumper_dispatcher(BUMPER_REMAP, NoAck, MockBumpLog::new());

    assert!(matches!(bumpers.on_input_edge(0x01), Dispatch::Accepted(_)));

    run_ticks(&controller, &mut outputs, 150);
    assert_eq!(bumpers.on_input_edge(0x01), Dispatch::Dropped { elapsed: 150 });

    run_ticks(&controller, &mut outputs, 150);
    assert!(matches!(bumpers.on_input_edge(0x01), Dispatch::Accepted(_)));

    run_ticks(&controller, &mut outputs, 300);
    assert!(matches!(bumpers.on_input_edge(0x01), Dispatch::Accepted(_)));

    assert_eq!(bumpers.handler().events().len(), 3);
}

#[test]
fn one_tick_short_is_dropped() {
    let controller = controller(300);
    let mut outputs = MockOutputs::new();
    let mut bumpers = controller.bumper_dispatcher(BUMPER_REMAP, NoAck, MockBumpLog::new());

    bumpers.on_input_edge(0x01);
    run_ticks(&controller, &mut outputs, 299);
    assert_eq!(bumpers.on_input_edge(0x01), Dispatch::Dropped { elapsed: 299 });

    run_ticks(&controller, &mut outputs, 1);
    assert!(matches!(bumpers.on_input_edge(0x01), Dispatch::Accepted(_)));
}

#[test]
fn dropped_edges_do_not_restart_the_window() {
    let controller = controller(300);
    let mut outputs = MockOutputs::new();
    let mut bumpers = controller.bumper_dispatcher(BUMPER_REMAP, NoAck, MockBumpLog::new());

    bumpers.on_input_edge(0x80);

    // Contact bounce: a burst of edges well inside the window.
    for _ in 0..5 {
        run_ticks(&controller, &mut outputs, 50);
        assert!(matches!(bumpers.on_input_edge(0x80), Dispatch::Dropped { .. }));
    }

    run_ticks(&controller, &mut outputs, 50);
    assert!(matches!(bumpers.on_input_edge(0x80), Dispatch::Accepted(_)));
    assert_eq!(bumpers.handler().events().len(), 2);
}

#[test]
fn accepted_event_carries_every_simultaneous_bit() {
    let controller = controller(300);
    let mut bumpers = controller.bumper_dispatcher(BUMPER_REMAP, NoAck, MockBumpLog::new());

    // P7, P3 and P0 closed together.
    bumpers.on_input_edge(0x89);

    let event = bumpers.handler().events()[0];
    assert_eq!(event, SampledInput::from_bits(0x25));
    assert_eq!(event.active_count(), 3);
}

#[test]
fn raw_active_low_port_is_inverted_before_remap() {
    let controller = controller(300);
    let mut bumpers =
        controller.bumper_dispatcher(BUMPER_REMAP.active_low(), NoAck, MockBumpLog::new());

    // P5 pulled to ground, everything else idle high.
    bumpers.on_input_edge(!0x20);

    assert_eq!(bumpers.handler().events(), &[SampledInput::from_bits(0x08)]);
}

#[test]
fn interrupt_is_acknowledged_once_per_edge() {
    let controller = controller(300);
    let mut bumpers = controller.bumper_dispatcher(BUMPER_REMAP, MockAck::new(), MockBumpLog::new());

    for _ in 0..4 {
        bumpers.on_input_edge(0x01);
    }

    // Dropped edges are acknowledged too.
    assert_eq!(bumpers.ack().count, 4);
    assert_eq!(bumpers.handler().events().len(), 1);
}

#[test]
fn bumper_and_button_domains_are_independent() {
    let controller = controller(300);
    let mut outputs = MockOutputs::new();
    let mut bumpers = controller.bumper_dispatcher(BUMPER_REMAP, NoAck, MockBumpLog::new());
    let mut buttons = controller.button_dispatcher(BUTTON_REMAP, NoAck, MockDisplay::new());

    assert!(matches!(bumpers.on_input_edge(0x01), Dispatch::Accepted(_)));
    run_ticks(&controller, &mut outputs, 10);

    // The bump reset did not touch the button window.
    assert_eq!(controller.bumper_domain().elapsed(), 10);
    assert_eq!(controller.button_domain().elapsed(), 310);
    assert!(matches!(buttons.on_input_edge(0x01), Dispatch::Accepted(_)));
    assert_eq!(controller.counter(), 1);

    assert_eq!(bumpers.on_input_edge(0x01), Dispatch::Dropped { elapsed: 10 });
}

#[test]
fn wrapping_counter_misjudges_edge_right_after_rollover() {
    let domain = DebounceCounter::preloaded(u32::MAX - 1, OverflowPolicy::Wrapping);
    let mut bumpers = EdgeDispatcher::new(&domain, 300, BUMPER_REMAP, NoAck, MockBumpLog::new());

    // Far more than 300 ticks have passed, but the count has rolled over.
    domain.advance();
    domain.advance();
    assert_eq!(domain.elapsed(), 0);

    assert_eq!(bumpers.on_input_edge(0x01), Dispatch::Dropped { elapsed: 0 });
    assert!(bumpers.handler().events().is_empty());
}

#[test]
fn saturating_counter_accepts_after_long_quiet_period() {
    let domain = DebounceCounter::preloaded(u32::MAX - 1, OverflowPolicy::Saturating);
    let mut bumpers = EdgeDispatcher::new(&domain, 300, BUMPER_REMAP, NoAck, MockBumpLog::new());

    domain.advance();
    domain.advance();
    assert_eq!(domain.elapsed(), u32::MAX);

    assert!(matches!(bumpers.on_input_edge(0x01), Dispatch::Accepted(_)));
}

#[test]
fn wrapping_policy_flows_from_config() {
    let config = TickConfig::new(500, 2000, 300)
        .unwrap()
        .with_overflow(OverflowPolicy::Wrapping);
    let controller = Controller::new(config);

    assert_eq!(controller.bumper_domain().overflow(), OverflowPolicy::Wrapping);
    assert_eq!(controller.button_domain().overflow(), OverflowPolicy::Wrapping);
}

#[test]
fn concurrent_ticks_and_resets_lose_no_ticks() {
    const TICKS: u32 = 20_000;

    let domain = DebounceCounter::new(OverflowPolicy::Saturating);
    let mut observed = 0u64;

    std::thread::scope(|scope| {
        let ticker = scope.spawn(|| {
            for _ in 0..TICKS {
                domain.advance();
            }
        });

        // Threshold zero: every evaluation accepts and returns the ticks since
        // the previous reset.
        while !ticker.is_finished() {
            let (accepted, elapsed) = domain.try_accept(0);
            assert!(accepted);
            observed += u64::from(elapsed);
        }
    });

    observed += u64::from(domain.elapsed());
    assert_eq!(observed, u64::from(TICKS));
}
