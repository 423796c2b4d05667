// Host-side tests for the frame-loop state machine and animation clock.

use notchclip_core::*;

#[test]
fn start_only_from_idle() {
    let mut c = LoopControl::new(LoopMode::Continuous);
    assert_eq!(c.state(), LoopState::Idle);
    assert!(c.start());
    assert_eq!(c.state(), LoopState::Running);
    assert!(c.is_pending());
    assert!(!c.start(), "second start must not request another frame");
}

#[test]
fn continuous_ticks_keep_rescheduling() {
    let mut c = LoopControl::new(LoopMode::Continuous);
    c.start();
    for n in 1..=5 {
        assert_eq!(c.tick(), Tick::Draw { reschedule: true });
        assert!(c.is_pending());
        assert_eq!(c.frames(), n);
    }
    // A frame is already on its way; invalidation must not double-book.
    assert!(!c.invalidate());
}

#[test]
fn on_demand_draws_once_per_invalidation() {
    let mut c = LoopControl::new(LoopMode::OnDemand);
    c.start();
    assert_eq!(c.tick(), Tick::Draw { reschedule: false });
    assert!(!c.is_pending());
    assert!(c.invalidate());
    assert!(!c.invalidate(), "coalesced while pending");
    assert_eq!(c.tick(), Tick::Draw { reschedule: false });
    assert_eq!(c.frames(), 2);
}

#[test]
fn stop_is_idempotent_and_halts_ticks() {
    let mut c = LoopControl::new(LoopMode::Continuous);
    c.start();
    c.tick();
    assert!(c.stop());
    assert_eq!(c.state(), LoopState::Stopping);
    assert!(!c.stop());
    assert!(!c.invalidate());
    assert_eq!(c.tick(), Tick::Halt);
    assert_eq!(c.state(), LoopState::Idle);
    assert_eq!(c.tick(), Tick::Halt);
    assert!(!c.stop());
    assert_eq!(c.frames(), 1);
}

#[test]
fn settle_finishes_a_stop_without_a_tick() {
    let mut c = LoopControl::new(LoopMode::Continuous);
    c.start();
    c.stop();
    c.settle();
    assert_eq!(c.state(), LoopState::Idle);
    assert!(!c.is_pending());
    // Settling an idle loop changes nothing.
    c.settle();
    assert_eq!(c.state(), LoopState::Idle);
}

#[test]
fn stop_before_start_is_a_no_op() {
    let mut c = LoopControl::new(LoopMode::OnDemand);
    assert!(!c.stop());
    assert_eq!(c.tick(), Tick::Halt);
    assert_eq!(c.frames(), 0);
}

#[test]
fn clock_converts_milliseconds_to_seconds() {
    let mut clock = AnimationClock::new();
    assert_eq!(clock.seconds(), None);
    assert!((clock.advance(1500.0) - 1.5).abs() < 1e-12);
    assert!((clock.advance(16_016.0) - 16.016).abs() < 1e-9);
    let secs = clock.seconds().expect("a frame was seen");
    assert!((secs - 16.016).abs() < 1e-9);
}

#[test]
fn clock_never_runs_backwards() {
    let mut clock = AnimationClock::new();
    clock.advance(2000.0);
    assert!((clock.advance(1000.0) - 2.0).abs() < 1e-12);
    assert!((clock.advance(f64::NAN) - 2.0).abs() < 1e-12);
    assert!((clock.advance(2500.0) - 2.5).abs() < 1e-12);
}

#[test]
fn failed_request_clears_pending_so_invalidate_retries() {
    let mut c = LoopControl::new(LoopMode::Continuous);
    assert!(c.start());
    c.request_failed();
    assert!(!c.is_pending());
    assert_eq!(c.state(), LoopState::Running);
    assert!(c.invalidate());
    assert_eq!(c.tick(), Tick::Draw { reschedule: true });
}
