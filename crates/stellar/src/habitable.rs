use serde::{Deserialize, Serialize};

use crate::spectral::StellarClass;

/// Orbital distance band (AU) where liquid water is plausible.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HabitableZone {
    pub inner: f64,
    pub optimal: f64,
    pub outer: f64,
}

impl HabitableZone {
    /// The Sun's zone.
    pub const SOLAR: HabitableZone = HabitableZone {
        inner: 0.953_462_589_245_592_4,
        optimal: 1.0,
        outer: 1.666_666_666_666_666_7,
    };

    /// Zone edges scale with the square root of luminosity relative to the Sun.
    ///
    /// Non-finite or non-positive luminosities fall back to [`HabitableZone::SOLAR`].
    pub fn from_luminosity(luminosity: f64) -> Self {
        if !luminosity.is_finite() || luminosity <= 0.0 {
            tracing::debug!(luminosity, "degenerate luminosity, using solar habitable zone");
            return Self::SOLAR;
        }
        Self {
            inner: (luminosity / 1.1).sqrt(),
            optimal: luminosity.sqrt(),
            outer: (luminosity / 0.36).sqrt(),
        }
    }

    pub fn contains(&self, orbit_au: f64) -> bool {
        (self.inner..=self.outer).contains(&orbit_au)
    }

    /// Frost-line heuristic: a multiple of the outer edge.
    pub fn frost_line(&self, factor: f64) -> f64 {
        self.outer * factor
    }
}

impl Default for HabitableZone {
    fn default() -> Self {
        Self::SOLAR
    }
}

/// Habitable zone for a spectral classification string such as `G2 V`.
///
/// Unrecognised classifications get [`HabitableZone::SOLAR`] rather than failing.
pub fn calculate_habitable_zone(stellar_class: &str) -> HabitableZone {
    StellarClass::parse(stellar_class).map_or(HabitableZone::SOLAR, |class| {
        HabitableZone::from_luminosity(class.luminosity())
    })
}
