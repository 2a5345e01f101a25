//! Contact response trait and per-pass reporting.

use weft_dynamics::{Particle, SimParams};
use weft_types::Scalar;

/// Aggregate result of one collider pass over a particle population.
#[derive(Debug, Clone, Default)]
pub struct ContactResult {
    /// Number of particles corrected.
    pub resolved_count: u32,
    /// Deepest penetration encountered before correction.
    pub max_penetration: Scalar,
}

/// An obstacle that resolves interpenetration by direct position
/// correction on individual particles.
///
/// `Send` so a host may shard particle populations across workers;
/// obstacles are read-only for the duration of a tick.
pub trait Collider: Send {
    /// Resolves this obstacle against one particle.
    ///
    /// Returns the penetration depth when a correction was applied,
    /// `None` when the particle was already clear (position and
    /// previous untouched in that case).
    fn resolve_particle(&self, particle: &mut Particle, params: &SimParams) -> Option<Scalar>;

    /// Collider name for telemetry and logging.
    fn name(&self) -> &str;
}

/// Runs one collider over every particle in a slice.
pub fn resolve_all(
    collider: &dyn Collider,
    particles: &mut [Particle],
    params: &SimParams,
) -> ContactResult {
    let mut result = ContactResult::default();
    for particle in particles.iter_mut() {
        if let Some(depth) = collider.resolve_particle(particle, params) {
            result.resolved_count += 1;
            result.max_penetration = result.max_penetration.max(depth);
        }
    }
    result
}
