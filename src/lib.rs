//! Deterministic star systems, live orbital bearings and the campaign calendar.
//!
//! The workspace crates are re-exported here so front-ends and integration
//! tests can depend on one library.

pub use stargen_calendar as calendar;
pub use stargen_config as config;
pub use stargen_core as common;
pub use stargen_export as export;
pub use stargen_generator as generator;
pub use stargen_orbits as orbits;
pub use stargen_stellar as stellar;

pub use stargen_generator::{CelestialObject, StarSystem, generate_system};

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
