//! Stellar classification parsing and habitable-zone estimates.

pub mod habitable;
pub mod spectral;

pub use habitable::{HabitableZone, calculate_habitable_zone};
pub use spectral::{LuminosityClass, SpectralType, StellarClass};
