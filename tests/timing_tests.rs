//! Stopwatch behaviour driven by a manual clock and ticker.

use std::time::Duration;

use chrono::{Local, TimeZone};
use lapwatch::model::constants::{TICK_INTERVAL, ZERO_DISPLAY};
use lapwatch::{format_hms, ManualClock, ManualTicker, RunState, Ticker, TimingCore};

fn secs(n: u64) -> Duration {
    Duration::from_secs(n)
}

fn new_core(clock: &ManualClock) -> TimingCore<&ManualClock, ManualTicker> {
    TimingCore::new(clock, ManualTicker::new())
}

// === Scenarios ===

#[test]
fn single_lap_of_five_seconds() {
    let clock = ManualClock::new();
    let mut core = new_core(&clock);

    core.start();
    clock.advance(secs(5));
    core.pause();

    assert_eq!(core.laps().len(), 1);
    assert_eq!(core.laps()[0].duration(), secs(5));
    assert_eq!(core.total_elapsed(), secs(5));
    assert_eq!(core.total_elapsed_display(), "00:00:05");
}

#[test]
fn two_laps_accumulate() {
    let clock = ManualClock::new();
    let mut core = new_core(&clock);

    core.start();
    clock.advance(secs(65));
    core.pause();
    clock.advance(secs(30));
    core.start();
    clock.advance(secs(10));
    core.pause();

    let views = core.lap_views();
    assert_eq!(views.len(), 2);
    assert_eq!(views[0].duration_display, "00:01:05");
    assert_eq!(views[1].duration_display, "00:00:10");
    assert_eq!(core.total_elapsed_display(), "00:01:15");
}

#[test]
fn delete_twice_returns_to_zero() {
    let clock = ManualClock::new();
    let mut core = new_core(&clock);
    core.start();
    clock.advance(secs(65));
    core.pause();
    core.start();
    clock.advance(secs(10));
    core.pause();

    let removed = core.delete_last_lap().unwrap();
    assert_eq!(removed.number(), 2);
    assert_eq!(core.total_elapsed_display(), "00:01:05");

    core.delete_last_lap();
    assert!(core.laps().is_empty());
    assert_eq!(core.total_elapsed_display(), ZERO_DISPLAY);
    assert!(!core.can_delete_last_lap());

    assert!(core.delete_last_lap().is_none());
    assert_eq!(core.total_elapsed(), Duration::ZERO);
}

#[test]
fn toggle_twice_records_one_lap() {
    let clock = ManualClock::new();
    let mut core = new_core(&clock);

    core.toggle_start_stop();
    assert!(core.is_running());
    clock.advance(secs(3));
    core.toggle_start_stop();

    assert!(!core.is_running());
    assert_eq!(core.laps().len(), 1);
    assert_eq!(core.total_elapsed_display(), "00:00:03");
}

// === Invariants ===

#[test]
fn total_equals_sum_of_laps() {
    let clock = ManualClock::new();
    let mut core = new_core(&clock);

    for n in [1u64, 7, 59, 3600, 2] {
        core.start();
        clock.advance(secs(n));
        core.pause();
        clock.advance(secs(11));
        let sum: Duration = core.laps().iter().map(|lap| lap.duration()).sum();
        assert_eq!(core.total_elapsed(), sum);
    }

    core.delete_last_lap();
    let sum: Duration = core.laps().iter().map(|lap| lap.duration()).sum();
    assert_eq!(core.total_elapsed(), sum);
}

#[test]
fn lap_numbers_are_sequential_after_delete() {
    let clock = ManualClock::new();
    let mut core = new_core(&clock);
    for _ in 0..3 {
        core.toggle_start_stop();
        clock.advance(secs(1));
        core.toggle_start_stop();
    }
    core.delete_last_lap();
    core.toggle_start_stop();
    clock.advance(secs(1));
    core.toggle_start_stop();

    let numbers: Vec<usize> = core.laps().iter().map(|lap| lap.number()).collect();
    assert_eq!(numbers, vec![1, 2, 3]);
}

#[test]
fn lap_start_exists_only_while_running() {
    let clock = ManualClock::new();
    let mut core = new_core(&clock);
    assert_eq!(core.session().run_state(), RunState::Stopped);

    core.start();
    assert!(matches!(
        core.session().run_state(),
        RunState::Running { .. }
    ));

    core.pause();
    assert_eq!(core.session().run_state(), RunState::Stopped);
}

#[test]
fn ticker_is_scheduled_only_while_running() {
    let clock = ManualClock::new();
    let mut core = new_core(&clock);
    assert!(!core.ticker().is_scheduled());

    core.start();
    assert!(core.ticker().is_scheduled());
    assert_eq!(core.ticker().interval(), Some(TICK_INTERVAL));

    core.pause();
    assert!(!core.ticker().is_scheduled());

    core.start();
    core.stop();
    assert!(!core.ticker().is_scheduled());
    assert_eq!(core.ticker().schedule_count(), 2);
}

#[test]
fn redundant_commands_are_ignored() {
    let clock = ManualClock::new();
    let mut core = new_core(&clock);

    assert!(core.pause().is_none());
    assert!(core.start());
    clock.advance(secs(2));
    assert!(!core.start());
    clock.advance(secs(2));
    core.pause();

    assert_eq!(core.laps().len(), 1);
    assert_eq!(core.laps()[0].duration(), secs(4));
    assert_eq!(core.ticker().schedule_count(), 1);
}

#[test]
fn noops_leave_state_untouched() {
    let clock = ManualClock::new();
    let mut core = new_core(&clock);
    core.start();
    clock.advance(secs(7));
    core.pause();
    core.delete_last_lap();
    clock.advance(secs(3));

    let session = core.session().clone();
    let display = core.total_elapsed_display().to_string();

    assert!(core.pause().is_none());
    assert!(core.delete_last_lap().is_none());
    core.refresh_display();

    assert_eq!(core.session(), &session);
    assert_eq!(core.total_elapsed_display(), display);
    assert!(!core.ticker().is_scheduled());
}

// === Display ===

#[test]
fn running_display_follows_ticks() {
    let clock = ManualClock::new();
    let mut core = new_core(&clock);
    core.start();
    clock.advance(secs(4));
    core.pause();

    core.start();
    clock.advance_secs_f64(2.7);
    assert_eq!(core.total_elapsed_display(), "00:00:04");
    core.refresh_display();
    assert_eq!(core.total_elapsed_display(), "00:00:06");
    assert_eq!(core.live_elapsed().as_millis(), 6700);
}

#[test]
fn refresh_while_stopped_keeps_display() {
    let clock = ManualClock::new();
    let mut core = new_core(&clock);
    core.start();
    clock.advance(secs(9));
    core.pause();
    clock.advance(secs(100));
    core.refresh_display();
    assert_eq!(core.total_elapsed_display(), "00:00:09");
}

#[test]
fn stop_resets_everything() {
    let clock = ManualClock::new();
    let mut core = new_core(&clock);
    core.start();
    clock.advance(secs(42));
    core.pause();
    core.start();
    clock.advance(secs(1));

    core.stop();

    assert!(!core.is_running());
    assert!(core.laps().is_empty());
    assert_eq!(core.total_elapsed(), Duration::ZERO);
    assert_eq!(core.total_elapsed_display(), ZERO_DISPLAY);
}

#[test]
fn delete_while_running_keeps_lap_open() {
    let clock = ManualClock::new();
    let mut core = new_core(&clock);
    core.start();
    clock.advance(secs(10));
    core.pause();
    core.start();
    clock.advance(secs(5));

    core.delete_last_lap();

    assert!(core.is_running());
    assert_eq!(core.total_elapsed(), Duration::ZERO);
    assert_eq!(core.total_elapsed_display(), "00:00:05");
    clock.advance(secs(1));
    core.pause();
    assert_eq!(core.laps()[0].number(), 1);
    assert_eq!(core.laps()[0].duration(), secs(6));
}

#[test]
fn lap_start_uses_wall_clock() {
    let nine = Local.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
    let clock = ManualClock::starting_at(nine);
    let mut core = new_core(&clock);

    clock.advance(secs(90));
    core.start();
    clock.advance(secs(65));
    core.pause();

    let view = &core.lap_views()[0];
    assert_eq!(view.number, 1);
    assert_eq!(view.start_display, "09:01:30");
    assert_eq!(view.duration_display, "00:01:05");
}

#[test]
fn hours_do_not_wrap() {
    assert_eq!(format_hms(secs(100 * 3600)), "100:00:00");
    assert_eq!(format_hms(secs(3599)), "00:59:59");
    assert_eq!(format_hms(Duration::from_millis(999)), "00:00:00");
}
