//! Step tables mapping "seconds since last played" to a seek-back offset.
//!
//! Each table is sorted by `min_elapsed`. A lookup picks the last tier whose
//! lower bound is reached, so a boundary value belongs to the higher tier.
//! Anything below the first tier (including NaN) seeks back nothing.

/// One step of a seek-back table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tier {
    /// Inclusive lower bound in seconds since last played
    pub min_elapsed: f64,
    /// Seconds to seek back once the bound is reached
    pub seek_back: f64,
}

impl Tier {
    const fn new(min_elapsed: f64, seek_back: f64) -> Self {
        Self {
            min_elapsed,
            seek_back,
        }
    }
}

/// Table behind `seek_back_seconds_for_elapsed`.
pub const ELAPSED_TIERS: &[Tier] = &[
    Tier::new(10.0, 3.0),
    Tier::new(60.0, 10.0),
    Tier::new(300.0, 20.0),
    Tier::new(1800.0, 30.0),
];

/// Table behind `calc_seek_back_time`. Starts earlier than
/// [`ELAPSED_TIERS`]; keep the two separate even where they agree.
pub const RESUME_TIERS: &[Tier] = &[
    Tier::new(6.0, 3.0),
    Tier::new(60.0, 10.0),
    Tier::new(300.0, 20.0),
    Tier::new(1800.0, 30.0),
];

/// Find the seek-back offset for `elapsed` in `tiers`.
pub fn lookup(tiers: &[Tier], elapsed: f64) -> f64 {
    tiers
        .iter()
        .rev()
        .find(|tier| elapsed >= tier.min_elapsed)
        .map_or(0.0, |tier| tier.seek_back)
}
