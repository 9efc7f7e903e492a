//! World statistics (UWP) decoding.
//!
//! A profile reads `SAHPGLT-T`: starport, size, atmosphere, hydrographics,
//! population, government, law level, then tech level after the dash. Digits
//! are extended hex (`0-9`, `A-H`, `J-N`, `P-Z`; `I` and `O` are skipped).

use serde::{Deserialize, Serialize};

/// Radius step per size code, in kilometres.
pub const KM_PER_SIZE_CODE: f64 = 800.0;
/// Radius given to a size-0 (asteroid belt) mainworld.
pub const ASTEROID_MAINWORLD_RADIUS_KM: f64 = 300.0;
/// Size code assumed when the profile has none.
pub const DEFAULT_SIZE_CODE: u8 = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldStats {
    pub starport: Option<char>,
    pub size: Option<u8>,
    pub atmosphere: Option<u8>,
    pub hydrographics: Option<u8>,
    pub population: Option<u8>,
    pub government: Option<u8>,
    pub law_level: Option<u8>,
    pub tech_level: Option<u8>,
}

impl WorldStats {
    /// Decode a profile string. Missing or unreadable positions become `None`.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        let (profile, tech) = match trimmed.split_once('-') {
            Some((profile, tech)) => (profile, tech.chars().next()),
            None => (trimmed, None),
        };
        let mut chars = profile.chars();
        let starport = chars
            .next()
            .map(|c| c.to_ascii_uppercase())
            .filter(|c| matches!(c, 'A'..='H' | 'X' | 'Y'));
        let mut digit = || chars.next().and_then(ehex_value);

        let stats = WorldStats {
            starport,
            size: digit(),
            atmosphere: digit(),
            hydrographics: digit(),
            population: digit(),
            government: digit(),
            law_level: digit(),
            tech_level: tech.and_then(ehex_value),
        };
        if stats.size.is_none() && !trimmed.is_empty() {
            tracing::debug!(world_stats = input, "no size code in world statistics");
        }
        stats
    }

    /// Mainworld radius implied by the size code.
    pub fn radius_km(&self) -> f64 {
        match self.size.unwrap_or(DEFAULT_SIZE_CODE) {
            0 => ASTEROID_MAINWORLD_RADIUS_KM,
            size => f64::from(size) * KM_PER_SIZE_CODE,
        }
    }

    /// Signed hint in `[-1, 1]` for where in the habitable zone the world sits.
    ///
    /// Positive leans toward the cool outer edge, negative toward the warm
    /// inner edge, zero means the optimal orbit.
    pub fn placement_bias(&self) -> f64 {
        let hydro = self
            .hydrographics
            .map(|h| (f64::from(h.min(10)) - 5.0) / 10.0)
            .unwrap_or(0.0);
        let atmosphere = match self.atmosphere {
            None => 0.0,
            Some(0..=1) => -0.3,
            Some(2..=5) => -0.1,
            Some(6..=7) => 0.0,
            Some(8..=9) => 0.2,
            // Codes A to C, exotic through insidious, read as runaway greenhouse worlds.
            Some(0xA..=0xC) => -0.4,
            Some(_) => 0.1,
        };
        (hydro + atmosphere).clamp(-1.0, 1.0)
    }
}

/// Value of one extended-hex digit.
pub fn ehex_value(c: char) -> Option<u8> {
    let c = c.to_ascii_uppercase();
    let value = match c {
        '0'..='9' => c as u32 - '0' as u32,
        'A'..='H' => c as u32 - 'A' as u32 + 10,
        'J'..='N' => c as u32 - 'J' as u32 + 18,
        'P'..='Z' => c as u32 - 'P' as u32 + 23,
        _ => return None,
    };
    u8::try_from(value).ok()
}
