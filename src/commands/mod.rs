//! Subcommand handlers

pub mod config;
pub mod offset;
pub mod resume;
pub mod since;

use seekback::cli::TimestampArgs;
use seekback::clock::{Clock, FixedClock, SystemClock};

/// Clock selected by `--now-ms`, or the system clock.
pub fn clock_for(args: &TimestampArgs) -> Box<dyn Clock> {
    match args.now_ms {
        Some(now) => Box::new(FixedClock::at_ms(now)),
        None => Box::new(SystemClock),
    }
}
