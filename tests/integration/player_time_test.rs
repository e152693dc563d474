//! Library tests for the resume calculation against both clocks

use seekback::clock::{Clock, FixedClock, SystemClock};
use seekback::config::ResumeConfig;
use seekback::{
    calc_seek_back_time, compute_elapsed_seconds, seek_back_seconds_for_elapsed,
    time_since_last_played, time_to_seek_back_for_since_last_played, SeekBackCalculator,
};

use crate::helpers::{fixed_secs_ago, real_secs_ago, NOW_MS};

const CURRENT_TIME: f64 = 1000.0;

// ============================================================================
// calc_seek_back_time on the system clock
// ============================================================================

#[test]
fn no_last_played_keeps_playhead() {
    assert_eq!(calc_seek_back_time(CURRENT_TIME, None), 1000.0);
}

#[test]
fn played_2s_ago_does_not_seek() {
    assert_eq!(calc_seek_back_time(CURRENT_TIME, Some(real_secs_ago(2.0))), 1000.0);
}

#[test]
fn played_12s_ago_seeks_back_3s() {
    assert_eq!(calc_seek_back_time(CURRENT_TIME, Some(real_secs_ago(12.0))), 997.0);
}

#[test]
fn played_62s_ago_seeks_back_10s() {
    assert_eq!(calc_seek_back_time(CURRENT_TIME, Some(real_secs_ago(62.0))), 990.0);
}

#[test]
fn played_302s_ago_seeks_back_20s() {
    assert_eq!(calc_seek_back_time(CURRENT_TIME, Some(real_secs_ago(302.0))), 980.0);
}

#[test]
fn played_1802s_ago_seeks_back_30s() {
    assert_eq!(calc_seek_back_time(CURRENT_TIME, Some(real_secs_ago(1802.0))), 970.0);
}

#[test]
fn small_current_time_clamps_to_zero() {
    assert_eq!(calc_seek_back_time(1.0, Some(real_secs_ago(1802.0))), 0.0);
}

#[test]
fn negative_last_played_is_treated_as_old() {
    assert_eq!(calc_seek_back_time(CURRENT_TIME, Some(-5000.0)), 970.0);
}

#[test]
fn zero_current_time_stays_zero() {
    assert_eq!(calc_seek_back_time(0.0, Some(real_secs_ago(300.0))), 0.0);
}

// ============================================================================
// time_since_last_played
// ============================================================================

#[test]
fn time_since_last_played_is_about_five_seconds() {
    let result = time_since_last_played(Some(real_secs_ago(5.0)));
    let seconds = result.expect("timestamp given, elapsed expected");
    assert!((seconds - 5.0).abs() < 1.0, "Expected ~5.0 seconds, got {seconds}");
}

#[test]
fn time_since_last_played_none_for_none() {
    assert_eq!(time_since_last_played(None), None);
    assert_eq!(compute_elapsed_seconds(None), None);
}

#[test]
fn time_since_last_played_agrees_with_elapsed() {
    let last = real_secs_ago(42.0);
    let shown = time_since_last_played(Some(last)).unwrap();
    let internal = compute_elapsed_seconds(Some(last)).unwrap();
    assert!((shown - internal).abs() < 1.0);
}

// ============================================================================
// seek_back_seconds_for_elapsed
// ============================================================================

#[test]
fn elapsed_none_seeks_back_zero() {
    assert_eq!(time_to_seek_back_for_since_last_played(None), 0.0);
}

#[test]
fn elapsed_under_10s_seeks_back_zero() {
    assert_eq!(time_to_seek_back_for_since_last_played(Some(5.0)), 0.0);
}

#[test]
fn elapsed_under_1_minute_seeks_back_3s() {
    assert_eq!(time_to_seek_back_for_since_last_played(Some(11.0)), 3.0);
}

#[test]
fn elapsed_under_5_minutes_seeks_back_10s() {
    assert_eq!(time_to_seek_back_for_since_last_played(Some(298.0)), 10.0);
}

#[test]
fn elapsed_under_30_minutes_seeks_back_20s() {
    assert_eq!(time_to_seek_back_for_since_last_played(Some(1798.0)), 20.0);
}

#[test]
fn elapsed_over_30_minutes_seeks_back_30s() {
    assert_eq!(seek_back_seconds_for_elapsed(Some(3599.0)), 30.0);
}

// ============================================================================
// Injected clock
// ============================================================================

#[test]
fn fixed_clock_scenarios() {
    let calc = SeekBackCalculator::with_clock(FixedClock(NOW_MS));
    let cases = [
        (2.0, 1000.0),
        (12.0, 997.0),
        (62.0, 990.0),
        (302.0, 980.0),
        (1802.0, 970.0),
    ];
    for (ago, expected) in cases {
        assert_eq!(
            calc.calc_seek_back_time(CURRENT_TIME, Some(fixed_secs_ago(ago))),
            expected,
            "played {ago}s ago"
        );
    }
}

#[test]
fn fixed_clock_elapsed_is_exact() {
    let calc = SeekBackCalculator::with_clock(FixedClock(NOW_MS));
    assert_eq!(calc.time_since_last_played(Some(fixed_secs_ago(5.0))), Some(5.0));
}

#[test]
fn custom_clock_is_used() {
    struct Epoch;
    impl Clock for Epoch {
        fn now_ms(&self) -> f64 {
            0.0
        }
    }

    let calc = SeekBackCalculator::with_clock(Epoch);
    assert_eq!(calc.time_since_last_played(Some(-62_000.0)), Some(62.0));
    assert_eq!(calc.calc_seek_back_time(100.0, Some(-62_000.0)), 90.0);
}

#[test]
fn resume_config_changes_no_history_offset() {
    let config = ResumeConfig {
        no_history_seek_back: 5.0,
    };
    let calc = SeekBackCalculator::with_clock(SystemClock).with_resume_config(&config);
    assert_eq!(calc.calc_seek_back_time(CURRENT_TIME, None), 995.0);
    // Timestamps still go through the tier table.
    assert_eq!(
        calc.calc_seek_back_time(CURRENT_TIME, Some(real_secs_ago(2.0))),
        1000.0
    );
}
