//! Verlet particles — position-based dynamics with implicit velocity.
//!
//! A particle carries its current, previous, and rest positions plus a
//! per-tick force accumulator. The host drives each particle once per
//! tick: zero or more [`Particle::add_force`] calls, one
//! [`Particle::integrate`], then collision resolution.

use weft_math::Vec3;
use weft_types::{Scalar, WeftError, WeftResult};

use crate::params::SimParams;

/// A cloth particle advanced by Verlet integration.
///
/// Velocity is implicit in the gap between `position` and `previous`;
/// `previous` doubles as the collision-safe fallback location.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Current location, mutated each tick.
    pub position: Vec3,
    /// Location one tick ago.
    pub previous: Vec3,
    /// Rest location; immutable after construction except via reset.
    pub original: Vec3,
    /// Per-tick force accumulator, zeroed by `integrate`.
    pub net_force: Vec3,
    /// Particle mass, strictly positive.
    pub mass: Scalar,
    /// Offset reserved for constraint projection by the host solver.
    pub correction: Vec3,
}

impl Particle {
    /// Creates a particle at rest at `position`.
    ///
    /// Rejects non-positive or non-finite mass: integration divides by
    /// mass, so the invariant is enforced once, here.
    pub fn new(position: Vec3, mass: Scalar) -> WeftResult<Self> {
        if !mass.is_finite() || mass <= 0.0 {
            return Err(WeftError::InvalidParticle(format!(
                "mass must be positive and finite, got {mass}"
            )));
        }
        if !position.is_finite() {
            return Err(WeftError::InvalidParticle(
                "position components must be finite".into(),
            ));
        }
        Ok(Self {
            position,
            previous: position,
            original: position,
            net_force: Vec3::ZERO,
            mass,
            correction: Vec3::ZERO,
        })
    }

    /// Creates a particle from 2D mesh coordinates and a host-supplied
    /// mapping into 3D rest space.
    pub fn from_plane<F>(u: Scalar, v: Scalar, mass: Scalar, map: F) -> WeftResult<Self>
    where
        F: Fn(Scalar, Scalar) -> Vec3,
    {
        Self::new(map(u, v), mass)
    }

    /// Snaps the particle back to its rest position.
    ///
    /// `position == previous` afterwards, so the particle is stationary
    /// on the next tick.
    pub fn lock_to_original(&mut self) {
        self.position = self.original;
        self.previous = self.original;
    }

    /// Freezes the particle at its prior location, canceling the
    /// tentative position computed earlier in the tick.
    pub fn lock(&mut self) {
        self.position = self.previous;
    }

    /// Accumulates `force` into the net force for this tick.
    ///
    /// Commutative; magnitude is the caller's responsibility.
    pub fn add_force(&mut self, force: Vec3) {
        self.net_force += force;
    }

    /// Advances one timestep of Verlet integration with damping.
    ///
    /// The velocity estimate is the previous displacement scaled by
    /// `(1 - damping)`; acceleration contributes `(f / m) * dt²`. The
    /// force accumulator is zeroed afterwards — skipping that would
    /// double-apply forces on the next tick.
    ///
    /// `dt` may vary call to call; `dt = 0` leaves only the damped
    /// velocity term.
    pub fn integrate(&mut self, dt: Scalar, params: &SimParams) {
        let prev = self.previous;
        self.previous = self.position;

        let vel = (self.position - prev) * (1.0 - params.damping);
        let accel = self.net_force / self.mass;
        self.position += vel + accel * (dt * dt);
        self.net_force = Vec3::ZERO;
    }

    /// Applies the cached constraint correction and zeroes it.
    pub fn apply_correction(&mut self) {
        self.position += self.correction;
        self.correction = Vec3::ZERO;
    }

    /// Finite-difference velocity estimate over the given timestep.
    pub fn velocity(&self, dt: Scalar) -> Vec3 {
        if dt.abs() < weft_types::constants::EPSILON {
            return Vec3::ZERO;
        }
        (self.position - self.previous) / dt
    }

    /// Raw per-tick displacement (velocity times dt).
    pub fn velocity_raw(&self) -> Vec3 {
        self.position - self.previous
    }
}
