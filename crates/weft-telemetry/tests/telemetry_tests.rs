//! Integration tests for weft-telemetry.

use weft_telemetry::{ConsoleSink, EventBus, EventKind, EventSink, JsonLinesSink, MemorySink, SimulationEvent};

#[test]
fn emit_and_flush_reaches_sinks() {
    let mut bus = EventBus::new();
    let sink = MemorySink::new();
    bus.add_sink(Box::new(sink.clone()));

    bus.emit(SimulationEvent::new(0, EventKind::StepBegin { sim_time: 0.0 }));
    bus.emit(SimulationEvent::new(0, EventKind::StepEnd { wall_time: 0.001 }));
    bus.flush();

    assert_eq!(sink.len(), 2);
    assert_eq!(sink.events()[0].timestep, 0);
}

#[test]
fn disabled_bus_drops_events() {
    let mut bus = EventBus::new();
    let sink = MemorySink::new();
    bus.add_sink(Box::new(sink.clone()));
    bus.set_enabled(false);

    bus.emit(SimulationEvent::new(3, EventKind::Energy { kinetic: 1.0 }));
    bus.flush();

    assert!(sink.is_empty());
}

#[test]
fn multiple_sinks_all_receive() {
    let mut bus = EventBus::new();
    let a = MemorySink::new();
    let b = MemorySink::new();
    bus.add_sink(Box::new(a.clone()));
    bus.add_sink(Box::new(b.clone()));
    assert_eq!(bus.sink_count(), 2);

    bus.emit(SimulationEvent::new(1, EventKind::Energy { kinetic: 0.5 }));
    bus.flush();

    assert_eq!(a.len(), 1);
    assert_eq!(b.len(), 1);
}

#[test]
fn event_serialization_round_trips() {
    let event = SimulationEvent::new(
        5,
        EventKind::ContactPass {
            collider: "sphere".into(),
            resolved: 12,
            max_penetration: 0.25,
        },
    );
    let json = serde_json::to_string(&event).unwrap();
    let recovered: SimulationEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered.timestep, 5);
    match recovered.kind {
        EventKind::ContactPass { resolved, .. } => assert_eq!(resolved, 12),
        other => panic!("wrong variant: {other:?}"),
    }
}

#[test]
fn json_lines_sink_writes_one_line_per_event() {
    let mut sink = JsonLinesSink::new(Vec::new());
    sink.record(&SimulationEvent::new(0, EventKind::Energy { kinetic: 2.0 }));
    sink.record(&SimulationEvent::new(1, EventKind::Energy { kinetic: 1.5 }));
    let buf = sink.into_inner();
    let text = String::from_utf8(buf).unwrap();
    assert_eq!(text.lines().count(), 2);
    let first: SimulationEvent = serde_json::from_str(text.lines().next().unwrap()).unwrap();
    assert_eq!(first.timestep, 0);
}

#[test]
fn sink_names() {
    assert_eq!(ConsoleSink.name(), "console");
    assert_eq!(MemorySink::new().name(), "memory");
}
