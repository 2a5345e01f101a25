//! Analytical sphere collision.
//!
//! Particles within the sphere clearance are projected radially onto the
//! expanded surface, blended against a no-slip position that follows the
//! sphere's own per-tick displacement. The friction parameter picks the
//! mix: 0 is pure projection, 1 rides the surface.

use weft_dynamics::{Particle, SimParams};
use weft_math::Vec3;
use weft_types::constants::{EPSILON, SPHERE_CLEARANCE};
use weft_types::Scalar;

use crate::response::Collider;

/// Sphere obstacle that may move between ticks.
#[derive(Debug, Clone, Copy)]
pub struct SphereCollider {
    /// Center this tick.
    pub center: Vec3,
    /// Center the previous tick; the difference drives surface drag.
    pub prev_center: Vec3,
    /// Sphere radius.
    pub radius: Scalar,
    /// Invisible spheres are skipped entirely.
    pub visible: bool,
}

impl SphereCollider {
    /// Creates a stationary, visible sphere.
    pub fn new(center: Vec3, radius: Scalar) -> Self {
        Self {
            center,
            prev_center: center,
            radius,
            visible: true,
        }
    }

    /// Moves the sphere to a new center, remembering the old one for
    /// the drag term. Call once per tick for moving spheres.
    pub fn advance(&mut self, new_center: Vec3) {
        self.prev_center = self.center;
        self.center = new_center;
    }

    /// Per-tick displacement of the sphere.
    pub fn displacement(&self) -> Vec3 {
        self.center - self.prev_center
    }
}

impl Collider for SphereCollider {
    fn resolve_particle(&self, particle: &mut Particle, params: &SimParams) -> Option<Scalar> {
        if !self.visible {
            return None;
        }

        let vpoint = particle.position - self.center;
        let dist = vpoint.length();
        if dist - self.radius >= SPHERE_CLEARANCE {
            return None;
        }

        // A particle exactly at the center has no radial direction;
        // push it out along +Y instead of propagating NaN.
        let normal = if dist > EPSILON {
            vpoint / dist
        } else {
            Vec3::Y
        };

        let pos_no_friction = self.center + normal * (self.radius + SPHERE_CLEARANCE);
        let pos_friction = particle.previous + self.displacement();

        particle.position =
            pos_friction * params.friction + pos_no_friction * (1.0 - params.friction);

        Some(self.radius + SPHERE_CLEARANCE - dist)
    }

    fn name(&self) -> &str {
        "sphere"
    }
}
