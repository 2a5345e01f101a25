//! Simulation event types.
//!
//! Lightweight value types emitted by the driver at defined points in
//! each tick. They carry just enough data for monitoring and debugging.

use serde::{Deserialize, Serialize};

/// A simulation event tagged with the timestep that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationEvent {
    /// Timestep number (0-indexed).
    pub timestep: u32,
    /// Event payload.
    pub kind: EventKind,
}

/// Event payload variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EventKind {
    /// Tick started.
    StepBegin {
        /// Target simulation time for this step (seconds).
        sim_time: f64,
    },

    /// Tick completed.
    StepEnd {
        /// Wall-clock time for the entire tick (seconds).
        wall_time: f64,
    },

    /// One collider pass over the particle population completed.
    ContactPass {
        /// Collider name ("floor", "sphere", "box").
        collider: String,
        /// Particles corrected in this pass.
        resolved: u32,
        /// Deepest penetration encountered (scene units).
        max_penetration: f32,
    },

    /// Kinetic energy snapshot at the end of the tick.
    Energy {
        /// Total kinetic energy (0.5 * Σ m * v²).
        kinetic: f64,
    },
}

impl SimulationEvent {
    /// Creates a new event for the given timestep.
    pub fn new(timestep: u32, kind: EventKind) -> Self {
        Self { timestep, kind }
    }
}
