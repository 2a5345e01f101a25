//! # weft-dynamics
//!
//! Per-particle cloth dynamics: force accumulation, Verlet position
//! integration with damping, and the particle populations scenarios
//! are built from.
//!
//! ## Key Types
//!
//! - [`Particle`] — kinematic state plus force accumulator
//! - [`SimParams`] — damping / friction / gravity configuration
//! - [`ParticleSheet`] — rectangular particle grid from a 2D parameterization
//!
//! The spring/constraint network between particles is supplied by the
//! simulation host; this crate only advances individual particles.

pub mod params;
pub mod particle;
pub mod sheet;

pub use params::SimParams;
pub use particle::Particle;
pub use sheet::ParticleSheet;
