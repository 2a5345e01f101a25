//! Simulation scenarios — procedural particle sheet + obstacles + params.
//!
//! Three canonical scenarios for regression testing:
//! 1. **Floor drop** — a sheet free-falls onto the floor plane
//! 2. **Sphere drape** — a sheet falls onto a sphere, top row pinned
//! 3. **Box drape** — a sheet falls onto an axis-aligned box

use serde::{Deserialize, Serialize};

use weft_contact::{BoxCollider, Floor, SphereCollider};
use weft_dynamics::{ParticleSheet, SimParams};
use weft_math::{Aabb, Vec3};
use weft_types::{constants, Scalar, WeftResult};

/// Which scenario to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioKind {
    /// Sheet free-falling onto the floor plane.
    FloorDrop,
    /// Sheet draped over a sphere, top row pinned.
    SphereDrape,
    /// Sheet draped over an axis-aligned box.
    BoxDrape,
}

impl ScenarioKind {
    /// Returns all scenario kinds.
    pub fn all() -> &'static [ScenarioKind] {
        &[
            ScenarioKind::FloorDrop,
            ScenarioKind::SphereDrape,
            ScenarioKind::BoxDrape,
        ]
    }

    /// Returns a human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            ScenarioKind::FloorDrop => "floor_drop",
            ScenarioKind::SphereDrape => "sphere_drape",
            ScenarioKind::BoxDrape => "box_drape",
        }
    }
}

/// A fully specified scenario.
pub struct Scenario {
    /// Scenario type.
    pub kind: ScenarioKind,
    /// The cloth particle population.
    pub sheet: ParticleSheet,
    /// Simulation parameters.
    pub params: SimParams,
    /// Number of timesteps to simulate.
    pub timesteps: u32,
    /// Timestep size (seconds).
    pub dt: Scalar,
    /// Floor obstacle, if any.
    pub floor: Option<Floor>,
    /// Sphere obstacle, if any.
    pub sphere: Option<SphereCollider>,
    /// Box obstacle, if any.
    pub box_obstacle: Option<BoxCollider>,
    /// Grid row held at its rest pose every tick, if any.
    pub pinned_row: Option<usize>,
}

/// Sheet resolution used by all canonical scenarios.
const SHEET_ROWS: usize = 20;
const SHEET_COLS: usize = 20;

/// Side length of the sheet in scene units.
const SHEET_SIZE: Scalar = 500.0;

/// Per-particle mass for the canonical scenarios.
const PARTICLE_MASS: Scalar = 0.1;

/// Gravity magnitude in scene units (centimeters) per second squared.
/// With damping 0.03 and a 1/60 s step this settles at roughly nine
/// scene units of fall per tick, comfortably inside every clearance
/// band, so particles cannot tunnel past an obstacle.
const SCENE_GRAVITY: Scalar = 981.0;

fn scene_params() -> SimParams {
    SimParams {
        gravity: [0.0, -SCENE_GRAVITY, 0.0],
        ..Default::default()
    }
}

/// Maps the unit square onto a horizontal sheet centered on the Y axis
/// at the given height.
fn horizontal_sheet_at(height: Scalar) -> impl Fn(Scalar, Scalar) -> Vec3 {
    move |u, v| {
        Vec3::new(
            (u - 0.5) * SHEET_SIZE,
            height,
            (v - 0.5) * SHEET_SIZE,
        )
    }
}

impl Scenario {
    /// Builds the canonical scenario for `kind`.
    pub fn from_kind(kind: ScenarioKind) -> WeftResult<Self> {
        match kind {
            ScenarioKind::FloorDrop => Self::floor_drop(),
            ScenarioKind::SphereDrape => Self::sphere_drape(),
            ScenarioKind::BoxDrape => Self::box_drape(),
        }
    }

    /// Sheet starting 300 units up, free-falling onto the floor at y = 0.
    pub fn floor_drop() -> WeftResult<Self> {
        let sheet = ParticleSheet::from_plane(
            SHEET_ROWS,
            SHEET_COLS,
            PARTICLE_MASS,
            horizontal_sheet_at(300.0),
        )?;
        Ok(Self {
            kind: ScenarioKind::FloorDrop,
            sheet,
            params: scene_params(),
            timesteps: 240,
            dt: constants::DEFAULT_DT,
            floor: Some(Floor::new(0.0)),
            sphere: None,
            box_obstacle: None,
            pinned_row: None,
        })
    }

    /// Sheet falling onto a sphere above the floor, top row pinned.
    pub fn sphere_drape() -> WeftResult<Self> {
        let sheet = ParticleSheet::from_plane(
            SHEET_ROWS,
            SHEET_COLS,
            PARTICLE_MASS,
            horizontal_sheet_at(350.0),
        )?;
        Ok(Self {
            kind: ScenarioKind::SphereDrape,
            sheet,
            params: scene_params(),
            timesteps: 240,
            dt: constants::DEFAULT_DT,
            floor: Some(Floor::new(0.0)),
            // Sphere held clear of the floor so the two clearance bands
            // never overlap and fight over the same particles.
            sphere: Some(SphereCollider::new(Vec3::new(0.0, 160.0, 0.0), 120.0)),
            box_obstacle: None,
            pinned_row: Some(0),
        })
    }

    /// Sheet falling onto a box held above the floor.
    pub fn box_drape() -> WeftResult<Self> {
        let sheet = ParticleSheet::from_plane(
            SHEET_ROWS,
            SHEET_COLS,
            PARTICLE_MASS,
            horizontal_sheet_at(300.0),
        )?;
        let bounds = Aabb::from_center_half_extents(
            Vec3::new(0.0, 130.0, 0.0),
            Vec3::new(150.0, 100.0, 150.0),
        );
        Ok(Self {
            kind: ScenarioKind::BoxDrape,
            sheet,
            params: scene_params(),
            timesteps: 240,
            dt: constants::DEFAULT_DT,
            floor: Some(Floor::new(0.0)),
            sphere: None,
            box_obstacle: Some(BoxCollider::new(bounds)),
            pinned_row: None,
        })
    }
}
