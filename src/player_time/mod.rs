//! Resume-position math for the player.
//!
//! When playback resumes after a pause the playhead is moved back a few
//! seconds so the listener can pick the thread up again. How far depends on
//! how long ago they last played:
//!
//! - [`seek_back_seconds_for_elapsed`]: pure lookup from elapsed seconds
//! - [`SeekBackCalculator::calc_seek_back_time`]: clamped resume position
//! - [`SeekBackCalculator::time_since_last_played`]: seconds since the last
//!   recorded playback, for display and logging
//!
//! Timestamps are milliseconds since the Unix epoch, playhead and elapsed
//! values are seconds. None of these operations can fail: negative,
//! future-dated and missing timestamps all produce a defined result, and the
//! resume position is never negative.
//!
//! # Usage
//!
//! ```
//! use seekback::clock::FixedClock;
//! use seekback::player_time::SeekBackCalculator;
//!
//! let now = 1_700_000_000_000.0;
//! let calc = SeekBackCalculator::with_clock(FixedClock(now));
//! assert_eq!(calc.calc_seek_back_time(1000.0, Some(now - 62_000.0)), 990.0);
//! assert_eq!(calc.calc_seek_back_time(1000.0, None), 1000.0);
//! ```

mod format;
pub mod tiers;

use serde::Serialize;

use crate::clock::{Clock, SystemClock};
use crate::config::ResumeConfig;

pub use format::format_elapsed;
pub use tiers::Tier;

/// Outcome of a resume decision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResumePoint {
    /// Seconds since last played, `None` when nothing was played before
    pub elapsed_seconds: Option<f64>,
    /// Offset applied to the playhead
    pub seek_back_seconds: f64,
    /// Playhead to resume from, never negative
    pub position: f64,
}

/// Seek-back calculator with an injected clock.
#[derive(Debug, Clone)]
pub struct SeekBackCalculator<C = SystemClock> {
    clock: C,
    no_history_seek_back: f64,
}

/// Calculator reading the real clock with default settings.
impl Default for SeekBackCalculator<SystemClock> {
    fn default() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<C: Clock> SeekBackCalculator<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            no_history_seek_back: ResumeConfig::default().no_history_seek_back,
        }
    }

    /// Apply the `[resume]` section of the config.
    pub fn with_resume_config(self, config: &ResumeConfig) -> Self {
        self.with_no_history_seek_back(config.no_history_seek_back)
    }

    /// Seconds to seek back when there is no last-played timestamp.
    ///
    /// Negative and NaN values become 0.
    pub fn with_no_history_seek_back(mut self, seconds: f64) -> Self {
        self.no_history_seek_back = seconds.max(0.0);
        self
    }

    /// Seconds between `last_played_ms` and now.
    ///
    /// Not bounds checked: a future timestamp gives a negative value and a
    /// negative timestamp gives a very large one.
    pub fn compute_elapsed_seconds(&self, last_played_ms: Option<f64>) -> Option<f64> {
        last_played_ms.map(|last| (self.clock.now_ms() - last) / 1000.0)
    }

    /// Seconds since the last recorded playback, for display.
    ///
    /// Same value the resume calculation sees for the same clock reading.
    pub fn time_since_last_played(&self, last_played_ms: Option<f64>) -> Option<f64> {
        self.compute_elapsed_seconds(last_played_ms)
    }

    /// Work out where to resume and why.
    pub fn resume(&self, current_time: f64, last_played_ms: Option<f64>) -> ResumePoint {
        let elapsed_seconds = self.compute_elapsed_seconds(last_played_ms);
        let seek_back_seconds = match elapsed_seconds {
            Some(elapsed) => tiers::lookup(tiers::RESUME_TIERS, elapsed),
            None => self.no_history_seek_back,
        };
        let position = clamp_position(current_time - seek_back_seconds);

        tracing::debug!(
            current_time,
            ?elapsed_seconds,
            seek_back_seconds,
            position,
            "computed resume position"
        );

        ResumePoint {
            elapsed_seconds,
            seek_back_seconds,
            position,
        }
    }

    /// Playhead to resume from, never below zero.
    pub fn calc_seek_back_time(&self, current_time: f64, last_played_ms: Option<f64>) -> f64 {
        self.resume(current_time, last_played_ms).position
    }
}

/// `f64::max` also maps NaN to 0.
fn clamp_position(position: f64) -> f64 {
    position.max(0.0)
}

/// Seek-back offset for a number of seconds since last played.
///
/// | elapsed        | seek back |
/// |----------------|-----------|
/// | none or < 10   | 0         |
/// | 10 ..< 60      | 3         |
/// | 60 ..< 300     | 10        |
/// | 300 ..< 1800   | 20        |
/// | 1800 and above | 30        |
pub fn seek_back_seconds_for_elapsed(elapsed_seconds: Option<f64>) -> f64 {
    elapsed_seconds.map_or(0.0, |elapsed| tiers::lookup(tiers::ELAPSED_TIERS, elapsed))
}

pub use self::seek_back_seconds_for_elapsed as time_to_seek_back_for_since_last_played;

fn system() -> SeekBackCalculator {
    SeekBackCalculator::default()
}

/// [`SeekBackCalculator::compute_elapsed_seconds`] on the system clock.
pub fn compute_elapsed_seconds(last_played_ms: Option<f64>) -> Option<f64> {
    system().compute_elapsed_seconds(last_played_ms)
}

/// [`SeekBackCalculator::time_since_last_played`] on the system clock.
pub fn time_since_last_played(last_played_ms: Option<f64>) -> Option<f64> {
    system().time_since_last_played(last_played_ms)
}

/// [`SeekBackCalculator::calc_seek_back_time`] on the system clock with
/// default settings.
pub fn calc_seek_back_time(current_time: f64, last_played_ms: Option<f64>) -> f64 {
    system().calc_seek_back_time(current_time, last_played_ms)
}
