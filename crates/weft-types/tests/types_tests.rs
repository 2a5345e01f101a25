//! Integration tests for weft-types.

use weft_types::{constants, ParticleId, WeftError};

// ─── ID Tests ──────────────────────────────────────────────────

#[test]
fn particle_id_index() {
    let id = ParticleId(42);
    assert_eq!(id.index(), 42);
}

#[test]
fn particle_id_from_u32() {
    let id: ParticleId = 7u32.into();
    assert_eq!(id, ParticleId(7));
}

#[test]
fn particle_id_is_serializable() {
    let id = ParticleId(100);
    let json = serde_json::to_string(&id).unwrap();
    let deserialized: ParticleId = serde_json::from_str(&json).unwrap();
    assert_eq!(id, deserialized);
}

// ─── Error Tests ──────────────────────────────────────────────

#[test]
fn error_display() {
    let err = WeftError::InvalidParticle("mass must be positive, got -1".into());
    assert!(err.to_string().contains("mass must be positive"));
}

#[test]
fn config_error_display() {
    let err = WeftError::InvalidConfig("damping out of range".into());
    assert!(err.to_string().starts_with("Invalid configuration"));
}

#[test]
fn io_error_converts() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let err: WeftError = io.into();
    assert!(matches!(err, WeftError::Io(_)));
}

// ─── Constant Sanity ──────────────────────────────────────────

#[test]
fn damping_default_in_range() {
    assert!(constants::DEFAULT_DAMPING >= 0.0);
    assert!(constants::DEFAULT_DAMPING < 1.0);
}

#[test]
fn friction_default_in_range() {
    assert!(constants::DEFAULT_FRICTION >= 0.0);
    assert!(constants::DEFAULT_FRICTION <= 1.0);
}

#[test]
fn clearances_are_positive() {
    assert!(constants::FLOOR_CLEARANCE > 0.0);
    assert!(constants::SPHERE_CLEARANCE > 0.0);
    assert!(constants::BOX_CLEARANCE > 0.0);
}
