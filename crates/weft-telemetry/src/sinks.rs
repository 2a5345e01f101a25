//! Event sinks — pluggable consumers of simulation events.

use std::io::Write;

use crate::events::{EventKind, SimulationEvent};

/// Consumer of simulation events.
pub trait EventSink: Send {
    /// Records one event.
    fn record(&mut self, event: &SimulationEvent);

    /// Flushes any buffered output.
    fn flush(&mut self) {}

    /// Sink name for diagnostics.
    fn name(&self) -> &str;
}

/// Human-readable one-line-per-event sink on standard error.
pub struct ConsoleSink;

impl EventSink for ConsoleSink {
    fn record(&mut self, event: &SimulationEvent) {
        let t = event.timestep;
        match &event.kind {
            EventKind::StepBegin { sim_time } => {
                eprintln!("[{t:>5}] step begin  t={sim_time:.4}s");
            }
            EventKind::StepEnd { wall_time } => {
                eprintln!("[{t:>5}] step end    {:.3}ms", wall_time * 1000.0);
            }
            EventKind::ContactPass {
                collider,
                resolved,
                max_penetration,
            } => {
                eprintln!(
                    "[{t:>5}] contact     {collider}: {resolved} resolved, max pen {max_penetration:.3}"
                );
            }
            EventKind::Energy { kinetic } => {
                eprintln!("[{t:>5}] energy      KE={kinetic:.6e}");
            }
        }
    }

    fn name(&self) -> &str {
        "console"
    }
}

/// JSON-lines sink: one serialized event per line into any writer.
pub struct JsonLinesSink<W: Write + Send> {
    writer: W,
}

impl<W: Write + Send> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> EventSink for JsonLinesSink<W> {
    fn record(&mut self, event: &SimulationEvent) {
        // A sink must not fail the simulation; drop events the writer
        // rejects.
        if let Ok(json) = serde_json::to_string(event) {
            let _ = writeln!(self.writer, "{json}");
        }
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn name(&self) -> &str {
        "json_lines"
    }
}

/// In-memory sink over a shared buffer. Intended for tests: clone the
/// sink before boxing it into the bus and inspect the clone afterwards.
#[derive(Clone, Default)]
pub struct MemorySink {
    events: std::sync::Arc<std::sync::Mutex<Vec<SimulationEvent>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all events recorded so far.
    pub fn events(&self) -> Vec<SimulationEvent> {
        self.events.lock().expect("memory sink poisoned").clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().expect("memory sink poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EventSink for MemorySink {
    fn record(&mut self, event: &SimulationEvent) {
        self.events
            .lock()
            .expect("memory sink poisoned")
            .push(event.clone());
    }

    fn name(&self) -> &str {
        "memory"
    }
}
