//! Core constants, deterministic hashing, and seeded randomness for the star system generator workspace.

pub mod hash;
pub mod random;

pub use hash::{hash_to_degrees, hash_to_int};
pub use random::SeededRandom;

/// Calendar and angle constants.
pub mod constants {
    /// Days in one campaign year (no leap days).
    pub const DAYS_PER_YEAR: u32 = 365;
    /// Minutes per campaign day.
    pub const MINUTES_PER_DAY: u32 = 1_440;
    /// Year of the reference epoch (the canonical campaign start).
    pub const EPOCH_YEAR: u32 = 1100;
    /// Day-of-year of the reference epoch.
    pub const EPOCH_DAY: u32 = 1;
    /// Degrees in a full orbit.
    pub const FULL_CIRCLE_DEG: f64 = 360.0;
}

/// Angle helpers shared by the generator and the orbital calculator.
pub mod angle {
    use super::constants::FULL_CIRCLE_DEG;

    /// Wrap any finite angle into `[0, 360)`.
    #[inline]
    pub fn normalize_degrees(deg: f64) -> f64 {
        let wrapped = deg.rem_euclid(FULL_CIRCLE_DEG);
        // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
        if wrapped >= FULL_CIRCLE_DEG {
            0.0
        } else {
            wrapped
        }
    }
}
