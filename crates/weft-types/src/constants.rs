//! Simulation constants and defaults.
//!
//! The collision clearances are fixed scene-unit offsets, empirically
//! determined for the cloth scale this engine targets. They are part of
//! the observable behavior contract, not tunables.

use crate::scalar::Scalar;

/// Gravitational acceleration (scene units / s²).
pub const GRAVITY: Scalar = 9.81;

/// Default simulation timestep (seconds). 1/60th of a second.
pub const DEFAULT_DT: Scalar = 1.0 / 60.0;

/// Default Verlet velocity damping factor, in `[0, 1)`.
pub const DEFAULT_DAMPING: Scalar = 0.03;

/// Default obstacle friction blend factor, in `[0, 1]`.
pub const DEFAULT_FRICTION: Scalar = 0.9;

/// Clearance kept between cloth and the floor plane (scene units).
pub const FLOOR_CLEARANCE: Scalar = 5.0;

/// Clearance kept between cloth and sphere surfaces (scene units).
pub const SPHERE_CLEARANCE: Scalar = 5.0;

/// Clearance kept between cloth and box faces (scene units).
pub const BOX_CLEARANCE: Scalar = 10.0;

/// Epsilon for floating-point comparisons.
pub const EPSILON: Scalar = 1.0e-7;
