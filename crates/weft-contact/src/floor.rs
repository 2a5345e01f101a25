//! Floor plane collision.
//!
//! A horizontal plane at `y = height`. Particles within the floor
//! clearance are clamped vertically to `height + FLOOR_CLEARANCE`;
//! x and z are untouched and no velocity correction is applied, so a
//! fast particle may visibly penetrate then pop on the next Verlet
//! step. Acceptable for this model.

use weft_dynamics::{Particle, SimParams};
use weft_types::constants::FLOOR_CLEARANCE;
use weft_types::Scalar;

use crate::response::Collider;

/// Floor plane at a fixed Y height. Always active.
#[derive(Debug, Clone, Copy)]
pub struct Floor {
    /// Height of the floor plane (Y coordinate).
    pub height: Scalar,
}

impl Floor {
    /// Creates a new floor at the given height.
    pub fn new(height: Scalar) -> Self {
        Self { height }
    }
}

impl Collider for Floor {
    fn resolve_particle(&self, particle: &mut Particle, _params: &SimParams) -> Option<Scalar> {
        let gap = particle.position.y - self.height;
        if gap < FLOOR_CLEARANCE {
            particle.position.y = self.height + FLOOR_CLEARANCE;
            Some(FLOOR_CLEARANCE - gap)
        } else {
            None
        }
    }

    fn name(&self) -> &str {
        "floor"
    }
}
