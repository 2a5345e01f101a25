//! Scalar type alias for the simulation.
//!
//! `f32` matches the precision of the scene units the collision
//! clearances were tuned for. This alias makes it easy to experiment
//! with `f64` precision if needed.

/// The floating-point type used throughout the simulation.
pub type Scalar = f32;
