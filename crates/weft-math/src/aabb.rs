//! Axis-aligned bounding box.
//!
//! Used by the box collider for proximity tests. The distance query
//! returns zero for points inside the box, so "within clearance of the
//! box" includes embedded points.

use glam::Vec3;
use weft_types::Scalar;

/// Axis-aligned bounding box defined by its corner extents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl Aabb {
    /// Creates a box from its corner extents.
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Creates a box from a center point and half-extents.
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Returns true if the point lies inside or on the box boundary.
    pub fn contains_point(&self, point: Vec3) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }

    /// Returns the point on or inside the box closest to `point`.
    pub fn clamp_point(&self, point: Vec3) -> Vec3 {
        point.clamp(self.min, self.max)
    }

    /// Euclidean distance from `point` to the box surface.
    ///
    /// Zero for points inside or on the box.
    pub fn distance_to_point(&self, point: Vec3) -> Scalar {
        (self.clamp_point(point) - point).length()
    }
}
