use std::fmt;

use serde::{Deserialize, Serialize};

/// Solar radius in kilometres.
pub const SOLAR_RADIUS_KM: f64 = 695_700.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpectralType {
    O,
    B,
    A,
    F,
    G,
    K,
    M,
    L,
    T,
    Y,
}

impl SpectralType {
    /// Main-sequence luminosity (L☉) at subclass 0 of each type, plus one
    /// trailing anchor so subclass 9 of the coolest type can interpolate.
    const LUMINOSITY_ANCHORS: [f64; 11] = [
        1.0e6, 2.5e4, 40.0, 6.5, 1.26, 0.42, 0.07, 5.0e-4, 1.0e-5, 1.0e-6, 1.0e-7,
    ];

    /// Main-sequence radius (R☉) at subclass 0, same layout as the luminosity anchors.
    const RADIUS_ANCHORS: [f64; 11] = [
        15.0, 7.0, 2.4, 1.5, 1.1, 0.85, 0.6, 0.12, 0.1, 0.1, 0.1,
    ];

    fn from_char(c: char) -> Option<Self> {
        Some(match c {
            'O' => SpectralType::O,
            'B' => SpectralType::B,
            'A' => SpectralType::A,
            'F' => SpectralType::F,
            'G' => SpectralType::G,
            'K' => SpectralType::K,
            'M' => SpectralType::M,
            'L' => SpectralType::L,
            'T' => SpectralType::T,
            'Y' => SpectralType::Y,
            _ => return None,
        })
    }

    /// Geometric interpolation between this type's anchor and the next cooler type's.
    fn interpolate(self, subclass: u8, anchors: &[f64; 11]) -> f64 {
        let i = self as usize;
        let t = f64::from(subclass.min(9)) / 10.0;
        anchors[i] * (anchors[i + 1] / anchors[i]).powf(t)
    }
}

impl fmt::Display for SpectralType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LuminosityClass {
    Ia,
    Ib,
    II,
    III,
    IV,
    V,
    VI,
}

impl LuminosityClass {
    fn parse(token: &str) -> Option<Self> {
        Some(match token {
            "IA" | "I" => LuminosityClass::Ia,
            "IB" => LuminosityClass::Ib,
            "II" => LuminosityClass::II,
            "III" => LuminosityClass::III,
            "IV" => LuminosityClass::IV,
            "V" => LuminosityClass::V,
            "VI" => LuminosityClass::VI,
            _ => return None,
        })
    }

    /// (multiplier on main-sequence luminosity, luminosity floor in L☉).
    fn luminosity_scaling(self) -> (f64, f64) {
        match self {
            LuminosityClass::Ia => (25.0, 10_000.0),
            LuminosityClass::Ib => (10.0, 3_000.0),
            LuminosityClass::II => (5.0, 500.0),
            LuminosityClass::III => (2.5, 40.0),
            LuminosityClass::IV => (2.0, 2.0),
            LuminosityClass::V => (1.0, 0.0),
            LuminosityClass::VI => (0.5, 0.0),
        }
    }

    fn radius_multiplier(self) -> f64 {
        match self {
            LuminosityClass::Ia => 100.0,
            LuminosityClass::Ib => 50.0,
            LuminosityClass::II => 30.0,
            LuminosityClass::III => 10.0,
            LuminosityClass::IV => 2.0,
            LuminosityClass::V => 1.0,
            LuminosityClass::VI => 0.8,
        }
    }
}

impl fmt::Display for LuminosityClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A parsed stellar classification such as `G2 V`, `M0 III` or `D`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum StellarClass {
    Normal {
        spectral: SpectralType,
        subclass: u8,
        luminosity: LuminosityClass,
    },
    WhiteDwarf,
    BrownDwarf,
}

impl StellarClass {
    /// The Sun, used whenever a classification cannot be read.
    pub const SOLAR: StellarClass = StellarClass::Normal {
        spectral: SpectralType::G,
        subclass: 2,
        luminosity: LuminosityClass::V,
    };

    /// Parse the primary star of a classification string.
    ///
    /// Accepts forms like `G2 V`, `g2v`, `K7 III`, `M2 V M5 V` (only the first
    /// star is read), `A` (subclass defaults to 5, class to V), `D` and `BD`.
    pub fn parse(input: &str) -> Option<Self> {
        let upper = input.trim().to_ascii_uppercase();
        let mut tokens = upper.split_whitespace();
        let head = tokens.next()?;

        if head == "BD" {
            return Some(StellarClass::BrownDwarf);
        }
        if head.starts_with('D') {
            return Some(StellarClass::WhiteDwarf);
        }

        let mut chars = head.chars();
        let spectral = SpectralType::from_char(chars.next()?)?;
        let rest: String = chars.collect();
        let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
        let subclass = if digits.is_empty() {
            5
        } else {
            digits.parse::<u8>().ok().filter(|d| *d <= 9)?
        };

        // The luminosity class may be glued to the subclass ("G2V") or a separate token.
        let glued = &rest[digits.len()..];
        let class_token = if glued.is_empty() {
            tokens.next().unwrap_or("V")
        } else {
            glued
        };
        let luminosity = LuminosityClass::parse(class_token)?;

        Some(StellarClass::Normal {
            spectral,
            subclass,
            luminosity,
        })
    }

    /// Parse, falling back to a solar-type star for anything unrecognised.
    pub fn parse_or_solar(input: &str) -> Self {
        Self::parse(input).unwrap_or_else(|| {
            tracing::debug!(stellar_class = input, "unrecognised stellar class, using G2 V");
            Self::SOLAR
        })
    }

    /// Approximate bolometric luminosity in solar units.
    pub fn luminosity(&self) -> f64 {
        match *self {
            StellarClass::Normal {
                spectral,
                subclass,
                luminosity,
            } => {
                let main_sequence = spectral.interpolate(subclass, &SpectralType::LUMINOSITY_ANCHORS);
                let (multiplier, floor) = luminosity.luminosity_scaling();
                (main_sequence * multiplier).max(floor)
            }
            StellarClass::WhiteDwarf => 0.005,
            StellarClass::BrownDwarf => 1.0e-5,
        }
    }

    /// Approximate photospheric radius in kilometres.
    pub fn radius_km(&self) -> f64 {
        let solar_radii = match *self {
            StellarClass::Normal {
                spectral,
                subclass,
                luminosity,
            } => {
                spectral.interpolate(subclass, &SpectralType::RADIUS_ANCHORS)
                    * luminosity.radius_multiplier()
            }
            StellarClass::WhiteDwarf => 0.012,
            StellarClass::BrownDwarf => 0.1,
        };
        solar_radii * SOLAR_RADIUS_KM
    }
}

impl fmt::Display for StellarClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StellarClass::Normal {
                spectral,
                subclass,
                luminosity,
            } => write!(f, "{}{} {}", spectral, subclass, luminosity),
            StellarClass::WhiteDwarf => write!(f, "D"),
            StellarClass::BrownDwarf => write!(f, "BD"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_forms() {
        let g2v = StellarClass::parse("G2 V").unwrap();
        assert_eq!(g2v, StellarClass::SOLAR);
        assert_eq!(StellarClass::parse("g2v").unwrap(), g2v);
        assert_eq!(StellarClass::parse("  G2   V  ").unwrap(), g2v);
        assert_eq!(
            StellarClass::parse("K7 III").unwrap(),
            StellarClass::Normal {
                spectral: SpectralType::K,
                subclass: 7,
                luminosity: LuminosityClass::III,
            }
        );
        assert_eq!(StellarClass::parse("M2 V M5 V").unwrap().to_string(), "M2 V");
        assert_eq!(StellarClass::parse("F").unwrap().to_string(), "F5 V");
        assert_eq!(StellarClass::parse("D").unwrap(), StellarClass::WhiteDwarf);
        assert_eq!(StellarClass::parse("DA").unwrap(), StellarClass::WhiteDwarf);
        assert_eq!(StellarClass::parse("BD").unwrap(), StellarClass::BrownDwarf);
    }

    #[test]
    fn rejects_nonsense() {
        assert!(StellarClass::parse("").is_none());
        assert!(StellarClass::parse("Q9 V").is_none());
        assert!(StellarClass::parse("G12 V").is_none());
        assert!(StellarClass::parse("G2 XI").is_none());
        assert_eq!(StellarClass::parse_or_solar("???"), StellarClass::SOLAR);
    }

    #[test]
    fn sun_is_roughly_one_solar_luminosity_and_radius() {
        let sun = StellarClass::SOLAR;
        assert!((sun.luminosity() - 1.0).abs() < 0.05, "L = {}", sun.luminosity());
        assert!((sun.radius_km() / SOLAR_RADIUS_KM - 1.0).abs() < 0.1);
    }

    #[test]
    fn luminosity_falls_with_spectral_type() {
        let classes = ["B0 V", "A0 V", "F0 V", "G0 V", "K0 V", "M0 V", "M9 V"];
        let lums: Vec<f64> = classes
            .iter()
            .map(|c| StellarClass::parse(c).unwrap().luminosity())
            .collect();
        assert!(lums.windows(2).all(|w| w[0] > w[1]), "{lums:?}");
    }

    #[test]
    fn giants_outshine_dwarfs_of_the_same_type() {
        let dwarf = StellarClass::parse("K2 V").unwrap().luminosity();
        let giant = StellarClass::parse("K2 III").unwrap().luminosity();
        let supergiant = StellarClass::parse("K2 Ia").unwrap().luminosity();
        assert!(dwarf < giant && giant < supergiant);
    }
}
