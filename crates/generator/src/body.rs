//! Generated bodies and their orbit descriptions.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyType {
    Star,
    Mainworld,
    GasGiant,
    Belt,
    Moon,
}

impl BodyType {
    /// Lowercase token used inside identifiers (`gasgiant`, `moon`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            BodyType::Star => "star",
            BodyType::Mainworld => "mainworld",
            BodyType::GasGiant => "gasgiant",
            BodyType::Belt => "belt",
            BodyType::Moon => "moon",
        }
    }
}

impl fmt::Display for BodyType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a body orbits.
///
/// Star-orbiting bodies carry only `orbitAU`; satellites carry only the
/// parent-relative trio. The enum makes a moon with a stellar distance
/// unrepresentable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Orbit {
    Parent {
        #[serde(rename = "parentId")]
        parent_id: String,
        #[serde(rename = "orbitRadii")]
        orbit_radii: f64,
        #[serde(rename = "orbitKm")]
        orbit_km: f64,
    },
    Star {
        #[serde(rename = "orbitAU")]
        orbit_au: f64,
    },
}

impl Orbit {
    /// Satellite orbit; the kilometre distance always follows from the parent radius.
    pub fn around(parent: &CelestialObject, orbit_radii: f64) -> Self {
        Orbit::Parent {
            parent_id: parent.id.clone(),
            orbit_radii,
            orbit_km: orbit_radii * parent.radius_km,
        }
    }
}

/// One generated body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CelestialObject {
    pub id: String,
    #[serde(rename = "type")]
    pub body_type: BodyType,
    pub subtype: String,
    #[serde(flatten)]
    pub orbit: Orbit,
    pub radius_km: f64,
    /// Display offset in degrees, `[0, 360)`, hashed from the id.
    ///
    /// Live positions start from the orbit calculator's own epoch bearing,
    /// which is keyed on the system name and planet index instead.
    pub bearing: f64,
    pub is_mainworld: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl CelestialObject {
    pub fn orbit_au(&self) -> Option<f64> {
        match self.orbit {
            Orbit::Star { orbit_au } => Some(orbit_au),
            Orbit::Parent { .. } => None,
        }
    }

    pub fn parent_id(&self) -> Option<&str> {
        match &self.orbit {
            Orbit::Parent { parent_id, .. } => Some(parent_id),
            Orbit::Star { .. } => None,
        }
    }

    pub fn orbit_radii(&self) -> Option<f64> {
        match self.orbit {
            Orbit::Parent { orbit_radii, .. } => Some(orbit_radii),
            Orbit::Star { .. } => None,
        }
    }

    pub fn orbit_km(&self) -> Option<f64> {
        match self.orbit {
            Orbit::Parent { orbit_km, .. } => Some(orbit_km),
            Orbit::Star { .. } => None,
        }
    }

    /// True for bodies orbiting the star (everything except the star itself and moons).
    pub fn is_planet(&self) -> bool {
        self.body_type != BodyType::Star && matches!(self.orbit, Orbit::Star { .. })
    }
}

/// Gas giant size classes, smallest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GasGiantClass {
    IceGiant,
    Small,
    Large,
    SuperJovian,
}

impl GasGiantClass {
    pub const ALL: [GasGiantClass; 4] = [
        GasGiantClass::IceGiant,
        GasGiantClass::Small,
        GasGiantClass::Large,
        GasGiantClass::SuperJovian,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            GasGiantClass::IceGiant => "ice-giant",
            GasGiantClass::Small => "small-gas-giant",
            GasGiantClass::Large => "large-gas-giant",
            GasGiantClass::SuperJovian => "super-jovian",
        }
    }

    /// Equatorial radius range in kilometres.
    pub fn radius_range_km(self) -> (f64, f64) {
        match self {
            GasGiantClass::IceGiant => (20_000.0, 28_000.0),
            GasGiantClass::Small => (28_000.0, 50_000.0),
            GasGiantClass::Large => (50_000.0, 75_000.0),
            GasGiantClass::SuperJovian => (75_000.0, 100_000.0),
        }
    }
}

/// Mainworld size classes derived from the world-statistics size code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorldClass {
    AsteroidBelt,
    Dwarf,
    Terrestrial,
    Large,
    SuperTerrestrial,
}

impl WorldClass {
    pub fn from_size(size: u8) -> Self {
        match size {
            0 => WorldClass::AsteroidBelt,
            1..=3 => WorldClass::Dwarf,
            4..=7 => WorldClass::Terrestrial,
            8..=9 => WorldClass::Large,
            _ => WorldClass::SuperTerrestrial,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WorldClass::AsteroidBelt => "asteroid-belt",
            WorldClass::Dwarf => "dwarf",
            WorldClass::Terrestrial => "terrestrial",
            WorldClass::Large => "large-terrestrial",
            WorldClass::SuperTerrestrial => "super-terrestrial",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeltClass {
    Rocky,
    Mixed,
    Icy,
}

impl BeltClass {
    pub fn as_str(self) -> &'static str {
        match self {
            BeltClass::Rocky => "rocky",
            BeltClass::Mixed => "mixed",
            BeltClass::Icy => "icy",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoonClass {
    Small,
    Medium,
    Large,
}

impl MoonClass {
    pub const ALL: [MoonClass; 3] = [MoonClass::Small, MoonClass::Medium, MoonClass::Large];
    pub const WEIGHTS: [f64; 3] = [0.6, 0.3, 0.1];

    pub fn as_str(self) -> &'static str {
        match self {
            MoonClass::Small => "small",
            MoonClass::Medium => "medium",
            MoonClass::Large => "large",
        }
    }

    pub fn radius_range_km(self) -> (f64, f64) {
        match self {
            MoonClass::Small => (50.0, 500.0),
            MoonClass::Medium => (500.0, 1_500.0),
            MoonClass::Large => (1_500.0, 2_700.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn giant() -> CelestialObject {
        CelestialObject {
            id: "1910-gasgiant-0-abcd".into(),
            body_type: BodyType::GasGiant,
            subtype: GasGiantClass::Large.as_str().into(),
            orbit: Orbit::Star { orbit_au: 4.2 },
            radius_km: 60_000.0,
            bearing: 12.0,
            is_mainworld: false,
            notes: None,
        }
    }

    #[test]
    fn satellite_orbit_derives_km_from_parent_radius() {
        let parent = giant();
        let orbit = Orbit::around(&parent, 5.5);
        assert_eq!(
            orbit,
            Orbit::Parent {
                parent_id: parent.id.clone(),
                orbit_radii: 5.5,
                orbit_km: 330_000.0,
            }
        );
    }

    #[test]
    fn planet_json_has_orbit_au_only() {
        let json = serde_json::to_value(giant()).unwrap();
        assert_eq!(json["type"], "gasgiant");
        assert_eq!(json["orbitAU"], 4.2);
        assert_eq!(json["radiusKm"], 60_000.0);
        assert_eq!(json["isMainworld"], false);
        assert!(json.get("parentId").is_none());
        assert!(json.get("orbitKm").is_none());
        assert!(json.get("notes").is_none());
    }

    #[test]
    fn moon_json_has_parent_fields_only() {
        let parent = giant();
        let moon = CelestialObject {
            id: "moon".into(),
            body_type: BodyType::Moon,
            subtype: MoonClass::Small.as_str().into(),
            orbit: Orbit::around(&parent, 4.0),
            radius_km: 200.0,
            bearing: 0.0,
            is_mainworld: false,
            notes: None,
        };
        let json = serde_json::to_value(&moon).unwrap();
        assert!(json.get("orbitAU").is_none());
        assert_eq!(json["parentId"], parent.id.as_str());
        assert_eq!(json["orbitRadii"], 4.0);

        let back: CelestialObject = serde_json::from_value(json).unwrap();
        assert_eq!(back, moon);
        assert_eq!(back.orbit_au(), None);
        assert!(!back.is_planet());
    }

    #[test]
    fn world_class_bands() {
        assert_eq!(WorldClass::from_size(0), WorldClass::AsteroidBelt);
        assert_eq!(WorldClass::from_size(8), WorldClass::Large);
        assert_eq!(WorldClass::from_size(12), WorldClass::SuperTerrestrial);
    }
}
