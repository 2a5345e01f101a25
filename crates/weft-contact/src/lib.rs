//! # weft-contact
//!
//! Collision response between cloth particles and static/dynamic
//! obstacles: a floor plane, a sphere, and an axis-aligned box.
//!
//! All colliders are analytical and resolve by direct position
//! correction — no velocity impulses. Each keeps the particle a fixed
//! clearance away from the surface to prevent visual clipping; the
//! clearances live in `weft_types::constants` and are part of the
//! behavior contract.
//!
//! Obstacle descriptors are geometric-only value types plus a
//! visibility flag; rendering state stays on the host side.

pub mod box_collider;
pub mod floor;
pub mod response;
pub mod sphere;

pub use box_collider::BoxCollider;
pub use floor::Floor;
pub use response::{resolve_all, Collider, ContactResult};
pub use sphere::SphereCollider;
