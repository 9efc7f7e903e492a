//! Tunable generation parameters and their loaders.
//!
//! The numbers here shape the statistical texture of generated systems (how
//! far out gas giants sit, how strongly the first giants trend large, how far
//! world statistics may nudge the mainworld). They are tuning knobs, not
//! canonical distributions; the defaults reproduce the stock behaviour.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Gas giant size classes in ascending order, matching `gas_giant_class_weights`.
pub const GAS_GIANT_CLASS_COUNT: usize = 4;

/// Generation tunables. Missing keys in a config file take the default value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Gas giant frost line as a multiple of the habitable zone's outer edge.
    pub frost_line_factor: f64,
    /// Geometric ratio between successive gas giant orbits.
    pub gas_giant_spacing: f64,
    /// Fractional (±) jitter applied to each gas giant orbit.
    pub orbit_jitter: f64,
    /// Base weights for ice giant, small, large and super-jovian classes.
    pub gas_giant_class_weights: [f64; GAS_GIANT_CLASS_COUNT],
    /// Per-index penalty on larger classes; below 1.0 makes later giants trend smaller.
    pub gas_giant_size_decay: f64,
    /// Fraction of the optimal-to-edge span that world statistics may shift the mainworld.
    pub mainworld_bias_spread: f64,
    /// Fractional (±) jitter applied to the mainworld orbit.
    pub mainworld_jitter: f64,
    pub max_gas_giant_moons: u32,
    pub max_world_moons: u32,
    /// Smallest world size code that may carry moons.
    pub world_moon_min_size: u8,
    /// Geometric ratio between successive planetoid belts.
    pub belt_spacing: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            frost_line_factor: 1.6,
            gas_giant_spacing: 1.7,
            orbit_jitter: 0.15,
            gas_giant_class_weights: [1.0, 2.0, 3.0, 2.0],
            gas_giant_size_decay: 0.7,
            mainworld_bias_spread: 0.6,
            mainworld_jitter: 0.05,
            max_gas_giant_moons: 4,
            max_world_moons: 2,
            world_moon_min_size: 6,
            belt_spacing: 1.3,
        }
    }
}

impl GeneratorConfig {
    /// Reject values that would produce inverted or degenerate layouts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("frost_line_factor", self.frost_line_factor),
            ("gas_giant_spacing", self.gas_giant_spacing),
            ("gas_giant_size_decay", self.gas_giant_size_decay),
            ("belt_spacing", self.belt_spacing),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!("{name} must be positive, got {value}")));
            }
        }
        if self.frost_line_factor <= 1.0 {
            return Err(ConfigError::Invalid(
                "frost_line_factor must exceed 1.0 so giants sit beyond the habitable zone".into(),
            ));
        }
        // Jitter at or above half the spacing step lets neighbours swap places.
        let max_jitter = (self.gas_giant_spacing - 1.0) / (self.gas_giant_spacing + 1.0);
        if !(0.0..max_jitter).contains(&self.orbit_jitter) {
            return Err(ConfigError::Invalid(format!(
                "orbit_jitter must lie in [0, {max_jitter:.3}) for spacing {}",
                self.gas_giant_spacing
            )));
        }
        if !(0.0..=1.0).contains(&self.mainworld_bias_spread) {
            return Err(ConfigError::Invalid(
                "mainworld_bias_spread must lie in [0, 1]".into(),
            ));
        }
        if !(0.0..0.5).contains(&self.mainworld_jitter) {
            return Err(ConfigError::Invalid("mainworld_jitter must lie in [0, 0.5)".into()));
        }
        let weights = &self.gas_giant_class_weights;
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) || weights.iter().sum::<f64>() <= 0.0
        {
            return Err(ConfigError::Invalid(
                "gas_giant_class_weights must be non-negative with a positive sum".into(),
            ));
        }
        Ok(())
    }
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid generator config: {0}")]
    Invalid(String),
}

/// Load and validate generator tunables.
///
/// `.toml` files are read as TOML, anything else as YAML. A directory reads
/// its `*.toml` files in name order and the last one wins; an empty directory
/// yields the defaults.
pub fn load_generator_config<P: AsRef<Path>>(path: P) -> Result<GeneratorConfig, ConfigError> {
    let path = path.as_ref();
    let config = if path.is_dir() {
        read_dir_records::<GeneratorConfig>(path)?
            .pop()
            .unwrap_or_default()
    } else {
        load_record(path)?
    };
    config.validate()?;
    Ok(config)
}

fn load_record<T>(path: &Path) -> Result<T, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    if is_toml(path) {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| is_toml(path))
        .collect();
    entries.sort();
    entries.iter().map(|path| load_record(path)).collect()
}

fn is_toml(path: &Path) -> bool {
    path.extension().map(|ext| ext == "toml").unwrap_or(false)
}
