//! # weft-telemetry
//!
//! Event bus for simulation telemetry. The driver emits structured
//! events (step timing, contact passes, energy) that pluggable sinks
//! consume — console lines, JSON-lines streams, or in-memory capture
//! for tests.

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::EventBus;
pub use events::{EventKind, SimulationEvent};
pub use sinks::{ConsoleSink, EventSink, JsonLinesSink, MemorySink};
