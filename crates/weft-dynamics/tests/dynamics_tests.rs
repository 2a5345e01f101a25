//! Integration tests for weft-dynamics.

use weft_dynamics::{Particle, ParticleSheet, SimParams};
use weft_math::Vec3;

fn params(damping: f32, friction: f32) -> SimParams {
    SimParams {
        damping,
        friction,
        ..Default::default()
    }
}

// ─── Particle Construction ────────────────────────────────────

#[test]
fn new_particle_is_at_rest() {
    let p = Particle::new(Vec3::new(1.0, 2.0, 3.0), 0.5).unwrap();
    assert_eq!(p.position, p.previous);
    assert_eq!(p.position, p.original);
    assert_eq!(p.net_force, Vec3::ZERO);
    assert_eq!(p.correction, Vec3::ZERO);
}

#[test]
fn zero_mass_is_rejected() {
    assert!(Particle::new(Vec3::ZERO, 0.0).is_err());
}

#[test]
fn negative_mass_is_rejected() {
    assert!(Particle::new(Vec3::ZERO, -1.0).is_err());
}

#[test]
fn nan_mass_is_rejected() {
    assert!(Particle::new(Vec3::ZERO, f32::NAN).is_err());
}

#[test]
fn from_plane_applies_mapping() {
    let p = Particle::from_plane(0.25, 0.5, 1.0, |u, v| Vec3::new(u * 4.0, 10.0, v * 2.0)).unwrap();
    assert_eq!(p.original, Vec3::new(1.0, 10.0, 1.0));
}

// ─── Verlet Integration ───────────────────────────────────────

#[test]
fn rest_stays_at_rest() {
    // Zero force, zero damping, position == previous.
    let mut p = Particle::new(Vec3::new(3.0, 4.0, 5.0), 1.0).unwrap();
    let params = params(0.0, 0.0);
    for _ in 0..100 {
        p.integrate(1.0 / 60.0, &params);
    }
    assert_eq!(p.position, Vec3::new(3.0, 4.0, 5.0));
}

#[test]
fn free_particle_coasts() {
    let mut p = Particle::new(Vec3::ZERO, 1.0).unwrap();
    p.position = Vec3::new(1.0, 0.0, 0.0); // implicit velocity of 1 unit/tick
    let params = params(0.0, 0.0);
    p.integrate(1.0 / 60.0, &params);
    assert_eq!(p.position, Vec3::new(2.0, 0.0, 0.0));
    assert_eq!(p.previous, Vec3::new(1.0, 0.0, 0.0));
}

#[test]
fn damping_is_monotonic() {
    // Larger damping must not produce a larger step.
    let step = |damping: f32| -> f32 {
        let mut p = Particle::new(Vec3::ZERO, 1.0).unwrap();
        p.position = Vec3::new(1.0, 0.0, 0.0);
        let before = p.position;
        p.integrate(1.0 / 60.0, &params(damping, 0.0));
        (p.position - before).length()
    };
    assert!(step(0.5) <= step(0.1));
    assert!(step(0.1) <= step(0.0));
}

#[test]
fn force_accumulator_resets_after_integrate() {
    let mut p = Particle::new(Vec3::ZERO, 2.0).unwrap();
    p.add_force(Vec3::new(10.0, -5.0, 3.0));
    p.add_force(Vec3::new(-1.0, 0.0, 0.0));
    p.integrate(0.1, &params(0.0, 0.0));
    assert_eq!(p.net_force, Vec3::ZERO);
}

#[test]
fn force_accumulation_is_commutative() {
    let mut a = Particle::new(Vec3::ZERO, 1.0).unwrap();
    let mut b = a.clone();
    a.add_force(Vec3::X);
    a.add_force(Vec3::Y * 2.0);
    b.add_force(Vec3::Y * 2.0);
    b.add_force(Vec3::X);
    assert_eq!(a.net_force, b.net_force);
}

#[test]
fn acceleration_scales_with_dt_squared() {
    let mut p = Particle::new(Vec3::ZERO, 1.0).unwrap();
    p.add_force(Vec3::new(0.0, -10.0, 0.0));
    p.integrate(0.5, &params(0.0, 0.0));
    // displacement = (f/m) * dt² = -10 * 0.25
    assert!((p.position.y - (-2.5)).abs() < 1e-6);
}

#[test]
fn force_divides_by_mass() {
    let mut heavy = Particle::new(Vec3::ZERO, 4.0).unwrap();
    let mut light = Particle::new(Vec3::ZERO, 1.0).unwrap();
    let f = Vec3::new(0.0, -8.0, 0.0);
    heavy.add_force(f);
    light.add_force(f);
    let params = params(0.0, 0.0);
    heavy.integrate(1.0, &params);
    light.integrate(1.0, &params);
    assert!((heavy.position.y * 4.0 - light.position.y).abs() < 1e-6);
}

#[test]
fn zero_dt_leaves_damped_drift_only() {
    let mut p = Particle::new(Vec3::ZERO, 1.0).unwrap();
    p.position = Vec3::new(1.0, 0.0, 0.0);
    p.add_force(Vec3::new(1000.0, 1000.0, 1000.0));
    p.integrate(0.0, &params(0.0, 0.0));
    // Force contributes nothing at dt = 0; velocity carries through.
    assert_eq!(p.position, Vec3::new(2.0, 0.0, 0.0));
}

#[test]
fn integrate_supports_varying_dt() {
    let mut p = Particle::new(Vec3::ZERO, 1.0).unwrap();
    let params = params(0.0, 0.0);
    p.add_force(Vec3::Y);
    p.integrate(0.1, &params);
    p.add_force(Vec3::Y);
    p.integrate(0.2, &params);
    assert!(p.position.is_finite());
    assert!(p.position.y > 0.0);
}

// ─── Locking ──────────────────────────────────────────────────

#[test]
fn lock_to_original_restores_rest_pose() {
    let mut p = Particle::new(Vec3::new(1.0, 1.0, 1.0), 1.0).unwrap();
    p.position = Vec3::new(9.0, 9.0, 9.0);
    p.previous = Vec3::new(8.0, 8.0, 8.0);
    p.lock_to_original();
    assert_eq!(p.position, Vec3::new(1.0, 1.0, 1.0));
    assert_eq!(p.previous, Vec3::new(1.0, 1.0, 1.0));
    // Stationary next tick: no implicit velocity.
    p.integrate(1.0 / 60.0, &params(0.0, 0.0));
    assert_eq!(p.position, Vec3::new(1.0, 1.0, 1.0));
}

#[test]
fn lock_cancels_tentative_position() {
    let mut p = Particle::new(Vec3::new(2.0, 0.0, 0.0), 1.0).unwrap();
    p.position = Vec3::new(5.0, 0.0, 0.0);
    p.lock();
    assert_eq!(p.position, Vec3::new(2.0, 0.0, 0.0));
}

#[test]
fn apply_correction_offsets_and_clears() {
    let mut p = Particle::new(Vec3::ZERO, 1.0).unwrap();
    p.correction = Vec3::new(0.5, 0.0, -0.5);
    p.apply_correction();
    assert_eq!(p.position, Vec3::new(0.5, 0.0, -0.5));
    assert_eq!(p.correction, Vec3::ZERO);
}

// ─── Params ───────────────────────────────────────────────────

#[test]
fn default_params_validate() {
    assert!(SimParams::default().validate().is_ok());
}

#[test]
fn damping_of_one_is_rejected() {
    let p = params(1.0, 0.5);
    assert!(p.validate().is_err());
}

#[test]
fn negative_friction_is_rejected() {
    let p = params(0.1, -0.1);
    assert!(p.validate().is_err());
}

#[test]
fn friction_of_one_is_accepted() {
    assert!(params(0.0, 1.0).validate().is_ok());
}

#[test]
fn params_round_trip_json() {
    let p = params(0.02, 0.8);
    let json = serde_json::to_string(&p).unwrap();
    let back: SimParams = serde_json::from_str(&json).unwrap();
    assert_eq!(back.damping, 0.02);
    assert_eq!(back.friction, 0.8);
}

// ─── ParticleSheet ────────────────────────────────────────────

#[test]
fn sheet_has_row_major_layout() {
    let sheet = ParticleSheet::from_plane(3, 4, 1.0, |u, v| Vec3::new(u, 0.0, v)).unwrap();
    assert_eq!(sheet.len(), 12);
    assert_eq!(sheet.rows(), 3);
    assert_eq!(sheet.cols(), 4);
    let corner = sheet.get(2, 3).unwrap();
    assert_eq!(corner.original, Vec3::new(1.0, 0.0, 1.0));
}

#[test]
fn empty_sheet_is_rejected() {
    assert!(ParticleSheet::from_plane(0, 4, 1.0, |_, _| Vec3::ZERO).is_err());
}

#[test]
fn lock_row_pins_particles() {
    let mut sheet = ParticleSheet::from_plane(2, 2, 1.0, |u, v| Vec3::new(u, 5.0, v)).unwrap();
    for p in sheet.particles_mut() {
        p.position += Vec3::new(0.0, -3.0, 0.0);
    }
    sheet.lock_row_to_original(0);
    assert_eq!(sheet.get(0, 0).unwrap().position.y, 5.0);
    assert_eq!(sheet.get(1, 0).unwrap().position.y, 2.0);
}
