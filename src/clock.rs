//! Wall-clock access for elapsed-time calculations.
//!
//! Everything that needs "now" takes a [`Clock`] so tests and the CLI
//! `--now-ms` flag can pin the instant instead of racing the real clock.

use chrono::Utc;

/// Source of the current time in milliseconds since the Unix epoch.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> f64 {
        (**self).now_ms()
    }
}

/// Reads the real UTC clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        // Microsecond reading keeps sub-millisecond precision.
        Utc::now().timestamp_micros() as f64 / 1000.0
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedClock(pub f64);

impl FixedClock {
    /// Build a clock from a millisecond timestamp.
    pub fn at_ms(ms: f64) -> Self {
        Self(ms)
    }
}

impl Clock for FixedClock {
    fn now_ms(&self) -> f64 {
        self.0
    }
}
