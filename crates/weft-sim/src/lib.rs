//! # weft-sim
//!
//! Procedural drop/drape scenarios and the per-tick driver loop.
//!
//! The driver owns the per-particle tick protocol: force accumulation,
//! Verlet integration, then collision resolution against the floor,
//! sphere, and box obstacles in that order. Obstacles are immutable for
//! the duration of a tick. No springs — particles fall independently.

pub mod metrics;
pub mod runner;
pub mod scenarios;

pub use metrics::RunMetrics;
pub use runner::SimRunner;
pub use scenarios::{Scenario, ScenarioKind};
