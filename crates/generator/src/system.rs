//! The generated system as a flat arena of bodies addressed by id.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use stargen_orbits::OrbitalSystem;
use thiserror::Error;

use crate::body::{BodyType, CelestialObject, Orbit};

/// Relative tolerance for the `orbitKm == orbitRadii × parent radius` check.
const ORBIT_KM_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SystemError {
    #[error("duplicate body id `{0}`")]
    DuplicateId(String),
    #[error("`{id}` references missing parent `{parent_id}`")]
    MissingParent { id: String, parent_id: String },
    #[error("`{id}` orbits `{parent_id}`, which is itself a satellite")]
    NestedSatellite { id: String, parent_id: String },
    #[error("`{id}` has orbitKm {orbit_km} but parent radius implies {expected}")]
    OrbitKmMismatch {
        id: String,
        orbit_km: f64,
        expected: f64,
    },
}

/// A generated star system. Bodies keep generation order; each satellite
/// follows its parent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarSystem {
    pub hex: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub world_stats: String,
    pub stellar_class: String,
    objects: Vec<CelestialObject>,
}

impl StarSystem {
    pub(crate) fn new(
        hex: &str,
        world_stats: &str,
        stellar_class: &str,
        objects: Vec<CelestialObject>,
    ) -> Self {
        Self {
            hex: hex.to_owned(),
            name: None,
            world_stats: world_stats.to_owned(),
            stellar_class: stellar_class.to_owned(),
            objects,
        }
    }

    /// Attach a display name. The name also seeds live orbital bearings.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn objects(&self) -> &[CelestialObject] {
        &self.objects
    }

    pub fn into_objects(self) -> Vec<CelestialObject> {
        self.objects
    }

    pub fn get(&self, id: &str) -> Option<&CelestialObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    /// Satellites of the body `id`, in generation order.
    pub fn children<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a CelestialObject> + 'a {
        self.objects
            .iter()
            .filter(move |o| o.parent_id() == Some(id))
    }

    pub fn parent_of(&self, id: &str) -> Option<&CelestialObject> {
        self.get(id)
            .and_then(|o| o.parent_id())
            .and_then(|parent| self.get(parent))
    }

    pub fn star(&self) -> Option<&CelestialObject> {
        self.objects.iter().find(|o| o.body_type == BodyType::Star)
    }

    pub fn mainworld(&self) -> Option<&CelestialObject> {
        self.objects.iter().find(|o| o.is_mainworld)
    }

    /// Star-orbiting bodies in generation order; position here is the planet index.
    pub fn planets(&self) -> impl Iterator<Item = &CelestialObject> {
        self.objects.iter().filter(|o| o.is_planet())
    }

    pub fn moons(&self) -> impl Iterator<Item = &CelestialObject> {
        self.objects.iter().filter(|o| o.parent_id().is_some())
    }

    /// Re-check the satellite invariants over the whole arena.
    pub fn validate(&self) -> Result<(), SystemError> {
        let mut seen = HashSet::new();
        for object in &self.objects {
            if !seen.insert(object.id.as_str()) {
                return Err(SystemError::DuplicateId(object.id.clone()));
            }
        }
        for object in &self.objects {
            let Orbit::Parent {
                parent_id,
                orbit_radii,
                orbit_km,
            } = &object.orbit
            else {
                continue;
            };
            let parent = self.get(parent_id).ok_or_else(|| SystemError::MissingParent {
                id: object.id.clone(),
                parent_id: parent_id.clone(),
            })?;
            if parent.parent_id().is_some() {
                return Err(SystemError::NestedSatellite {
                    id: object.id.clone(),
                    parent_id: parent_id.clone(),
                });
            }
            let expected = orbit_radii * parent.radius_km;
            if (orbit_km - expected).abs() > ORBIT_KM_TOLERANCE * expected.abs().max(1.0) {
                return Err(SystemError::OrbitKmMismatch {
                    id: object.id.clone(),
                    orbit_km: *orbit_km,
                    expected,
                });
            }
        }
        Ok(())
    }
}

impl OrbitalSystem for StarSystem {
    fn system_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.hex)
    }

    fn planet_orbits_au(&self) -> Option<Vec<f64>> {
        Some(self.planets().filter_map(CelestialObject::orbit_au).collect())
    }
}
