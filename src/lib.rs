//! seekback - resume-position math for audiobook players.
//!
//! When a listener comes back to a paused book the playhead is moved back a
//! little so they can re-orient. The further in the past the last playback,
//! the further back it goes, and the result never drops below zero.
//!
//! - [`player_time`]: seek-back tables and the resume calculation
//! - [`clock`]: injectable wall clock
//! - [`config`]: TOML configuration
//! - [`logging`]: tracing subscriber setup
//! - [`cli`]: clap definitions for the `seekback` binary

pub mod cli;
pub mod clock;
pub mod config;
pub mod logging;
pub mod player_time;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use player_time::{
    calc_seek_back_time, compute_elapsed_seconds, seek_back_seconds_for_elapsed,
    time_since_last_played, time_to_seek_back_for_since_last_played, ResumePoint,
    SeekBackCalculator,
};
