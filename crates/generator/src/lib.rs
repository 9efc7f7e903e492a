//! Procedural star system generation.
//!
//! [`generate_system`] turns a sector hex, a world profile and a stellar
//! classification into an ordered list of bodies; [`generate_system_with`]
//! does the same with explicit tunables and returns a queryable
//! [`StarSystem`]. Output depends only on the inputs.

pub mod body;
pub mod generate;
pub mod ids;
pub mod moons;
pub mod system;
pub mod world;

pub use body::{BodyType, CelestialObject, Orbit};
pub use generate::{
    GenerationRequest, MAX_BODIES_PER_KIND, MAX_ORBIT_AU, generate_system, generate_system_with,
};
pub use ids::generate_id;
pub use moons::generate_moons;
pub use system::{StarSystem, SystemError};
pub use world::WorldStats;
