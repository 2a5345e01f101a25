//! # weft-math
//!
//! Math primitives for the Weft simulation engine.
//!
//! Provides:
//! - Re-exports of `glam` vector types (`Vec2`, `Vec3`)
//! - Axis-aligned bounding box with point-distance queries

pub mod aabb;

pub use aabb::Aabb;

// Re-export glam types as the canonical math types for Weft.
pub use glam::{Vec2, Vec3};
