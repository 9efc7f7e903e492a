//! Circular-orbit position helpers for the live system map.
//!
//! Every body sits on a circular orbit around a one-solar-mass primary, so
//! Kepler's third law reduces to `P[years] = a[AU]^1.5`. A body's bearing is
//! its hashed starting angle plus the fraction of its period elapsed since the
//! campaign epoch. Nothing here is cached; each call recomputes from inputs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use stargen_calendar::CampaignDate;
use stargen_core::angle::normalize_degrees;
use stargen_core::constants::{DAYS_PER_YEAR, FULL_CIRCLE_DEG};
use stargen_core::hash_to_degrees;

/// Period returned for degenerate (non-positive or non-finite) orbital radii.
pub const DEFAULT_PERIOD_DAYS: f64 = DAYS_PER_YEAR as f64;

/// Wall-clock seconds for the animation to sweep one full turn of a 1 AU orbit.
const ANIMATION_SECONDS_PER_TURN_AT_1AU: f64 = 120.0;

/// Orbital period in days for a circular orbit of `orbit_au` around a solar-mass star.
pub fn orbital_period_days(orbit_au: f64) -> f64 {
    if !orbit_au.is_finite() || orbit_au <= 0.0 {
        tracing::debug!(orbit_au, "degenerate orbit radius, using one-year period");
        return DEFAULT_PERIOD_DAYS;
    }
    orbit_au.powf(1.5) * DEFAULT_PERIOD_DAYS
}

/// Stable starting angle for planet `planet_index` of `system_name`.
pub fn get_initial_bearing(system_name: &str, planet_index: usize) -> f64 {
    f64::from(hash_to_degrees(&format!("{system_name}-planet-{planet_index}")))
}

/// Inputs for a single body's position.
#[derive(Debug, Clone, Copy)]
pub struct OrbitQuery<'a> {
    pub system_name: &'a str,
    pub planet_index: usize,
    pub orbit_au: f64,
    pub current_date: &'a CampaignDate,
}

/// Live angular position of one body at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrbitalState {
    pub planet_index: usize,
    pub initial_bearing_deg: f64,
    pub period_days: f64,
    pub elapsed_days: f64,
    pub bearing_deg: f64,
}

/// Full orbital state for a query, bearing normalised into `[0, 360)`.
pub fn orbital_state(query: &OrbitQuery<'_>) -> OrbitalState {
    let initial = get_initial_bearing(query.system_name, query.planet_index);
    let period_days = orbital_period_days(query.orbit_au);
    let elapsed_days = query.current_date.days_since_epoch();
    let swept = (elapsed_days / period_days) * FULL_CIRCLE_DEG;
    OrbitalState {
        planet_index: query.planet_index,
        initial_bearing_deg: initial,
        period_days,
        elapsed_days,
        bearing_deg: normalize_degrees(initial + swept),
    }
}

/// Current bearing in degrees, always within `[0, 360)`.
pub fn calculate_orbital_position(query: &OrbitQuery<'_>) -> f64 {
    orbital_state(query).bearing_deg
}

/// A system whose star-orbiting planets can be placed on the live map.
pub trait OrbitalSystem {
    /// Name used to seed each planet's starting bearing.
    fn system_name(&self) -> &str;

    /// Orbital radius (AU) of each planet, in planet-index order; `None` when unknown.
    fn planet_orbits_au(&self) -> Option<Vec<f64>>;
}

/// Minimal system description for callers that only hold persisted orbit data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemSnapshot {
    pub name: String,
    #[serde(default)]
    pub planets: Option<Vec<PlanetOrbit>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanetOrbit {
    #[serde(rename = "orbitAU")]
    pub orbit_au: f64,
}

impl OrbitalSystem for SystemSnapshot {
    fn system_name(&self) -> &str {
        &self.name
    }

    fn planet_orbits_au(&self) -> Option<Vec<f64>> {
        self.planets
            .as_ref()
            .map(|planets| planets.iter().map(|p| p.orbit_au).collect())
    }
}

/// Current bearing of every planet, keyed by planet index.
///
/// An absent system or planet list yields an empty map.
pub fn calculate_system_orbits<S>(
    system: Option<&S>,
    current_date: &CampaignDate,
) -> BTreeMap<usize, f64>
where
    S: OrbitalSystem + ?Sized,
{
    let Some(system) = system else {
        return BTreeMap::new();
    };
    let Some(orbits) = system.planet_orbits_au() else {
        return BTreeMap::new();
    };
    orbits
        .into_iter()
        .enumerate()
        .map(|(planet_index, orbit_au)| {
            let bearing = calculate_orbital_position(&OrbitQuery {
                system_name: system.system_name(),
                planet_index,
                orbit_au,
                current_date,
            });
            (planet_index, bearing)
        })
        .collect()
}

/// Cosmetic drift (degrees, `[0, 360)`) layered over the true bearing while animating.
///
/// Outer bodies drift more slowly. This is display-only and never a substitute
/// for [`calculate_orbital_position`].
pub fn get_animation_offset(elapsed_ms: f64, orbit_au: f64) -> f64 {
    if !elapsed_ms.is_finite() || elapsed_ms <= 0.0 {
        return 0.0;
    }
    let period_years = orbital_period_days(orbit_au) / DEFAULT_PERIOD_DAYS;
    let turns = (elapsed_ms / 1_000.0) / (ANIMATION_SECONDS_PER_TURN_AT_1AU * period_years);
    normalize_degrees(turns * FULL_CIRCLE_DEG)
}
