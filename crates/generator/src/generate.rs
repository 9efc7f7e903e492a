//! System assembly: star, mainworld, gas giants, belts and their moons.
//!
//! Every stochastic choice draws from a [`SeededRandom`] keyed on the sector
//! hex and the body it concerns, so each body is reproducible on its own and
//! adding a gas giant never reshuffles the mainworld.

use rand::distributions::{Distribution, WeightedIndex};
use serde::{Deserialize, Serialize};
use stargen_config::GeneratorConfig;
use stargen_core::{SeededRandom, hash_to_degrees};
use stargen_stellar::{HabitableZone, StellarClass};

use crate::body::{BeltClass, BodyType, CelestialObject, GasGiantClass, Orbit, WorldClass};
use crate::ids::generate_id;
use crate::moons::generate_moons;
use crate::system::StarSystem;
use crate::world::{DEFAULT_SIZE_CODE, WorldStats};

/// Largest-body radius range for a planetoid belt, in kilometres.
const BELT_RADIUS_KM: (f64, f64) = (100.0, 500.0);
/// Fractional (±) jitter applied to belt orbits.
const BELT_JITTER: f64 = 0.1;
/// Belts inside this fraction of the frost line are rocky.
const ROCKY_BELT_LIMIT: f64 = 0.75;
/// Most gas giants, or belts, a single system will carry.
pub const MAX_BODIES_PER_KIND: u32 = 32;
/// Orbits are clamped here so every distance stays finite.
pub const MAX_ORBIT_AU: f64 = 1.0e6;

/// Everything needed to build one system.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub hex: String,
    pub world_stats: String,
    pub stellar_class: String,
    #[serde(default)]
    pub gas_giants: Option<u32>,
    #[serde(default)]
    pub belts: Option<u32>,
}

impl GenerationRequest {
    pub fn new(hex: &str, world_stats: &str, stellar_class: &str) -> Self {
        Self {
            hex: hex.to_owned(),
            world_stats: world_stats.to_owned(),
            stellar_class: stellar_class.to_owned(),
            gas_giants: None,
            belts: None,
        }
    }

    pub fn gas_giants(mut self, count: u32) -> Self {
        self.gas_giants = Some(count);
        self
    }

    pub fn belts(mut self, count: u32) -> Self {
        self.belts = Some(count);
        self
    }
}

/// Build the ordered body list with default tunables.
///
/// An absent gas giant count means none. Never fails: unreadable stellar
/// classes fall back to a solar star and unreadable world statistics to
/// neutral defaults.
pub fn generate_system(
    hex: &str,
    world_stats: &str,
    stellar_class: &str,
    gas_giant_count: Option<u32>,
) -> Vec<CelestialObject> {
    let mut request = GenerationRequest::new(hex, world_stats, stellar_class);
    request.gas_giants = gas_giant_count;
    generate_system_with(&request, &GeneratorConfig::default()).into_objects()
}

/// Build a full [`StarSystem`] for `request` using `config`.
pub fn generate_system_with(request: &GenerationRequest, config: &GeneratorConfig) -> StarSystem {
    let hex = request.hex.as_str();
    let gas_giants = request.gas_giants.unwrap_or_else(|| {
        tracing::debug!(hex, "no gas giant count, generating none");
        0
    });
    let gas_giants = capped_count(hex, "gas giants", gas_giants);
    let belts = capped_count(hex, "belts", request.belts.unwrap_or(0));

    let class = StellarClass::parse(&request.stellar_class);
    let star_class = class.unwrap_or(StellarClass::SOLAR);
    if class.is_none() {
        tracing::debug!(
            hex,
            stellar_class = %request.stellar_class,
            "unrecognised stellar class, using solar defaults"
        );
    }
    let zone = class.map_or(HabitableZone::SOLAR, |c| {
        HabitableZone::from_luminosity(c.luminosity())
    });
    let frost_line = zone.frost_line(config.frost_line_factor);
    let stats = WorldStats::parse(&request.world_stats);

    let mut objects = Vec::new();
    let unrecognised = class.is_none().then_some(request.stellar_class.as_str());
    objects.push(star_object(hex, &star_class, unrecognised));

    let mainworld = mainworld_object(hex, &stats, &zone, config);
    let world_size = stats.size.unwrap_or(DEFAULT_SIZE_CODE);
    let world_moon_limit = if world_size >= config.world_moon_min_size {
        config.max_world_moons
    } else {
        0
    };
    push_with_moons(&mut objects, hex, mainworld, world_moon_limit);

    for index in 0..gas_giants as usize {
        let giant = gas_giant_object(hex, index, frost_line, config);
        push_with_moons(&mut objects, hex, giant, config.max_gas_giant_moons);
    }

    for index in 0..belts as usize {
        objects.push(belt_object(hex, index, &zone, frost_line, config));
    }

    tracing::debug!(hex, bodies = objects.len(), "generated system");
    StarSystem::new(hex, &request.world_stats, &request.stellar_class, objects)
}

fn capped_count(hex: &str, kind: &'static str, requested: u32) -> u32 {
    if requested > MAX_BODIES_PER_KIND {
        tracing::debug!(hex, kind, requested, limit = MAX_BODIES_PER_KIND, "capping body count");
    }
    requested.min(MAX_BODIES_PER_KIND)
}

fn exponent(n: usize) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}

fn push_with_moons(
    objects: &mut Vec<CelestialObject>,
    hex: &str,
    parent: CelestialObject,
    max_moons: u32,
) {
    let mut rng = SeededRandom::from_key(&format!("{}-moons", parent.id));
    let moons = generate_moons(hex, &parent, max_moons, &mut rng);
    objects.push(parent);
    objects.extend(moons);
}

fn star_object(hex: &str, class: &StellarClass, unrecognised: Option<&str>) -> CelestialObject {
    let id = generate_id(hex, BodyType::Star, 0, None);
    CelestialObject {
        bearing: f64::from(hash_to_degrees(&id)),
        id,
        body_type: BodyType::Star,
        subtype: class.to_string(),
        orbit: Orbit::Star { orbit_au: 0.0 },
        radius_km: class.radius_km(),
        is_mainworld: false,
        notes: unrecognised
            .map(|raw| format!("unrecognised stellar class `{raw}`; solar defaults applied")),
    }
}

/// Orbit for the mainworld: optimal distance shifted by the world's placement bias.
fn mainworld_orbit(
    stats: &WorldStats,
    zone: &HabitableZone,
    config: &GeneratorConfig,
    rng: &mut SeededRandom,
) -> f64 {
    let bias = stats.placement_bias() * config.mainworld_bias_spread;
    let target = if bias >= 0.0 {
        zone.optimal + bias * (zone.outer - zone.optimal)
    } else {
        zone.optimal + bias * (zone.optimal - zone.inner)
    };
    (target * rng.jitter(config.mainworld_jitter)).clamp(zone.inner, zone.outer)
}

fn mainworld_object(
    hex: &str,
    stats: &WorldStats,
    zone: &HabitableZone,
    config: &GeneratorConfig,
) -> CelestialObject {
    let mut rng = SeededRandom::from_key(&format!("{hex}-mainworld"));
    let orbit_au = mainworld_orbit(stats, zone, config, &mut rng);
    let class = WorldClass::from_size(stats.size.unwrap_or(DEFAULT_SIZE_CODE));
    let id = generate_id(hex, BodyType::Mainworld, 0, None);
    CelestialObject {
        bearing: f64::from(hash_to_degrees(&id)),
        id,
        body_type: BodyType::Mainworld,
        subtype: class.as_str().to_owned(),
        orbit: Orbit::Star { orbit_au },
        radius_km: stats.radius_km(),
        is_mainworld: true,
        notes: None,
    }
}

/// Class weights for giant `index`: larger classes are damped more at higher indices.
fn gas_giant_weights(index: usize, config: &GeneratorConfig) -> [f64; 4] {
    let mut weights = config.gas_giant_class_weights;
    for (rank, weight) in weights.iter_mut().enumerate() {
        *weight *= config
            .gas_giant_size_decay
            .powi(exponent(index.saturating_mul(rank)));
    }
    weights
}

fn gas_giant_object(
    hex: &str,
    index: usize,
    frost_line: f64,
    config: &GeneratorConfig,
) -> CelestialObject {
    let mut rng = SeededRandom::from_key(&format!("{hex}-gasgiant-{index}"));
    let orbit_au = (frost_line
        * config.gas_giant_spacing.powi(exponent(index))
        * rng.jitter(config.orbit_jitter))
    .min(MAX_ORBIT_AU);

    let class = match WeightedIndex::new(gas_giant_weights(index, config)) {
        Ok(dist) => GasGiantClass::ALL[dist.sample(&mut rng)],
        Err(err) => {
            tracing::debug!(hex, index, %err, "unusable gas giant weights, using small class");
            GasGiantClass::Small
        }
    };
    let (low, high) = class.radius_range_km();
    let radius_km = rng.range_f64(low, high);

    let id = generate_id(hex, BodyType::GasGiant, index, None);
    CelestialObject {
        bearing: f64::from(hash_to_degrees(&id)),
        id,
        body_type: BodyType::GasGiant,
        subtype: class.as_str().to_owned(),
        orbit: Orbit::Star { orbit_au },
        radius_km,
        is_mainworld: false,
        notes: None,
    }
}

fn belt_object(
    hex: &str,
    index: usize,
    zone: &HabitableZone,
    frost_line: f64,
    config: &GeneratorConfig,
) -> CelestialObject {
    let mut rng = SeededRandom::from_key(&format!("{hex}-belt-{index}"));
    let orbit_au = (zone.outer
        * config.belt_spacing.powi(exponent(index.saturating_add(1)))
        * rng.jitter(BELT_JITTER))
    .min(MAX_ORBIT_AU);
    let class = if orbit_au < frost_line * ROCKY_BELT_LIMIT {
        BeltClass::Rocky
    } else if orbit_au < frost_line {
        BeltClass::Mixed
    } else {
        BeltClass::Icy
    };
    let radius_km = rng.range_f64(BELT_RADIUS_KM.0, BELT_RADIUS_KM.1);

    let id = generate_id(hex, BodyType::Belt, index, None);
    CelestialObject {
        bearing: f64::from(hash_to_degrees(&id)),
        id,
        body_type: BodyType::Belt,
        subtype: class.as_str().to_owned(),
        orbit: Orbit::Star { orbit_au },
        radius_km,
        is_mainworld: false,
        notes: None,
    }
}
