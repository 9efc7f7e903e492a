use rand::Rng;
use rand::distributions::{Distribution, WeightedIndex};
use stargen_core::{SeededRandom, hash_to_degrees};

use crate::body::{BodyType, CelestialObject, MoonClass, Orbit};
use crate::ids::generate_id;

/// Closest first moon, in parent radii.
const FIRST_ORBIT_RADII: (f64, f64) = (3.0, 8.0);
/// Gap between successive moons, in parent radii.
const ORBIT_STEP_RADII: (f64, f64) = (2.0, 10.0);
/// A moon never exceeds this fraction of its parent's radius.
const MAX_PARENT_RADIUS_FRACTION: f64 = 0.5;

/// Generate between 0 and `max_moons` satellites of `parent`.
///
/// Every moon is placed in parent radii with `parentId` set, never in AU.
/// Ids use `hex` as their sector prefix.
pub fn generate_moons(
    hex: &str,
    parent: &CelestialObject,
    max_moons: u32,
    rng: &mut SeededRandom,
) -> Vec<CelestialObject> {
    if max_moons == 0 {
        return Vec::new();
    }
    let count = rng.gen_range(0..=max_moons) as usize;
    let classes = WeightedIndex::new(MoonClass::WEIGHTS).ok();

    let mut orbit_radii = rng.range_f64(FIRST_ORBIT_RADII.0, FIRST_ORBIT_RADII.1);
    let mut moons = Vec::with_capacity(count);
    for index in 0..count {
        if index > 0 {
            orbit_radii += rng.range_f64(ORBIT_STEP_RADII.0, ORBIT_STEP_RADII.1);
        }
        let class = match &classes {
            Some(dist) => MoonClass::ALL[dist.sample(rng)],
            None => MoonClass::Small,
        };
        let (low, high) = class.radius_range_km();
        let radius_km = rng
            .range_f64(low, high)
            .min(parent.radius_km * MAX_PARENT_RADIUS_FRACTION);

        let id = generate_id(hex, BodyType::Moon, index, Some(&parent.id));
        moons.push(CelestialObject {
            bearing: f64::from(hash_to_degrees(&id)),
            id,
            body_type: BodyType::Moon,
            subtype: class.as_str().to_owned(),
            orbit: Orbit::around(parent, orbit_radii),
            radius_km,
            is_mainworld: false,
            notes: None,
        });
    }
    moons
}
