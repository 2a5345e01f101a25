//! Analytical axis-aligned box collision.
//!
//! Resolution projects the particle onto the nearest of the six faces,
//! offset outward by the box clearance along that axis only. The
//! nearest-face scan is a running minimum over a fixed face order
//! (min.x, max.x, min.y, max.y, min.z, max.z) with strictly-smaller
//! comparisons, so the earliest face wins ties. Near edges and corners
//! this exits through the locally nearest surface rather than the exact
//! closest point; the heuristic is intentional and load-bearing for
//! behavior parity with tuned scenes.

use weft_dynamics::{Particle, SimParams};
use weft_math::{Aabb, Vec3};
use weft_types::constants::BOX_CLEARANCE;
use weft_types::Scalar;

use crate::response::Collider;

/// Static axis-aligned box obstacle.
#[derive(Debug, Clone, Copy)]
pub struct BoxCollider {
    /// Box extents.
    pub bounds: Aabb,
    /// Invisible boxes are skipped entirely.
    pub visible: bool,
}

impl BoxCollider {
    /// Creates a visible box with the given bounds.
    pub fn new(bounds: Aabb) -> Self {
        Self {
            bounds,
            visible: true,
        }
    }
}

impl Collider for BoxCollider {
    fn resolve_particle(&self, particle: &mut Particle, params: &SimParams) -> Option<Scalar> {
        if !self.visible {
            return None;
        }

        let pos = particle.position;
        let dist = self.bounds.distance_to_point(pos);
        if dist > BOX_CLEARANCE {
            return None;
        }

        let mut closest = Scalar::INFINITY;
        let mut projected = pos;

        let d = (self.bounds.min.x - pos.x).abs();
        if d < closest {
            closest = d;
            projected = Vec3::new(self.bounds.min.x - BOX_CLEARANCE, pos.y, pos.z);
        }
        let d = (self.bounds.max.x - pos.x).abs();
        if d < closest {
            closest = d;
            projected = Vec3::new(self.bounds.max.x + BOX_CLEARANCE, pos.y, pos.z);
        }
        let d = (self.bounds.min.y - pos.y).abs();
        if d < closest {
            closest = d;
            projected = Vec3::new(pos.x, self.bounds.min.y - BOX_CLEARANCE, pos.z);
        }
        let d = (self.bounds.max.y - pos.y).abs();
        if d < closest {
            closest = d;
            projected = Vec3::new(pos.x, self.bounds.max.y + BOX_CLEARANCE, pos.z);
        }
        let d = (self.bounds.min.z - pos.z).abs();
        if d < closest {
            closest = d;
            projected = Vec3::new(pos.x, pos.y, self.bounds.min.z - BOX_CLEARANCE);
        }
        let d = (self.bounds.max.z - pos.z).abs();
        if d < closest {
            projected = Vec3::new(pos.x, pos.y, self.bounds.max.z + BOX_CLEARANCE);
        }

        // A particle whose previous position was already within the
        // clearance is stuck against the box; snap it straight to the
        // face instead of compounding friction blends while embedded.
        if self.bounds.distance_to_point(particle.previous) < BOX_CLEARANCE {
            particle.position = projected;
        } else {
            particle.position =
                particle.previous * params.friction + projected * (1.0 - params.friction);
        }

        Some(BOX_CLEARANCE - dist)
    }

    fn name(&self) -> &str {
        "box"
    }
}
