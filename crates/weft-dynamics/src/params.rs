//! Simulation parameters.
//!
//! Damping and friction are process-wide simulation parameters owned by
//! the host and passed by reference into every integration and collision
//! call. They are never ambient global state.

use serde::{Deserialize, Serialize};
use weft_types::{constants, Scalar, WeftError, WeftResult};

/// Configuration for particle integration and collision response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimParams {
    /// Verlet velocity damping factor, in `[0, 1)`.
    ///
    /// Folded into the velocity estimate as `(1 - damping)`; approximates
    /// air/internal drag without tracking an explicit velocity field.
    pub damping: Scalar,

    /// Obstacle friction blend factor, in `[0, 1]`.
    ///
    /// `0.0` resolves collisions by pure surface projection; `1.0` lets
    /// the obstacle drag the particle with it (no-slip).
    pub friction: Scalar,

    /// Gravity vector `[gx, gy, gz]` in scene units / s².
    pub gravity: [Scalar; 3],
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            damping: constants::DEFAULT_DAMPING,
            friction: constants::DEFAULT_FRICTION,
            gravity: [0.0, -constants::GRAVITY, 0.0],
        }
    }
}

impl SimParams {
    /// Validates parameter ranges.
    pub fn validate(&self) -> WeftResult<()> {
        if !self.damping.is_finite() || !(0.0..1.0).contains(&self.damping) {
            return Err(WeftError::InvalidConfig(format!(
                "damping must be in [0, 1), got {}",
                self.damping
            )));
        }
        if !self.friction.is_finite() || !(0.0..=1.0).contains(&self.friction) {
            return Err(WeftError::InvalidConfig(format!(
                "friction must be in [0, 1], got {}",
                self.friction
            )));
        }
        if self.gravity.iter().any(|g| !g.is_finite()) {
            return Err(WeftError::InvalidConfig(
                "gravity components must be finite".into(),
            ));
        }
        Ok(())
    }

    /// Creates frictionless, undamped parameters (useful for tests).
    pub fn ideal() -> Self {
        Self {
            damping: 0.0,
            friction: 0.0,
            ..Default::default()
        }
    }
}
