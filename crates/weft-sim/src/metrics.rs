//! Run metrics — data collected during a scenario run.

use serde::{Deserialize, Serialize};
use weft_dynamics::Particle;
use weft_types::Scalar;

/// Metrics collected from a scenario run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunMetrics {
    /// Scenario name.
    pub scenario: String,
    /// Number of timesteps executed.
    pub timesteps: u32,
    /// Number of particles.
    pub particle_count: usize,
    /// Total wall-clock time (seconds).
    pub total_wall_time: f64,
    /// Average wall-clock time per timestep (seconds).
    pub avg_step_time: f64,
    /// Final kinetic energy (approaches zero as the drape settles).
    pub final_kinetic_energy: f64,
    /// Maximum particle displacement from its rest position.
    pub max_displacement: Scalar,
    /// Total collision corrections applied over the run.
    pub contacts_resolved: u64,
}

impl RunMetrics {
    /// Format as a CSV header row.
    pub fn to_csv_header() -> String {
        "scenario,particle_count,timesteps,total_wall_time_s,avg_step_ms,final_ke,max_displacement,contacts_resolved"
            .to_string()
    }

    /// Format this metrics instance as a CSV data row.
    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{},{:.6},{:.4},{:.6e},{:.4},{}",
            self.scenario,
            self.particle_count,
            self.timesteps,
            self.total_wall_time,
            self.avg_step_time * 1000.0,
            self.final_kinetic_energy,
            self.max_displacement,
            self.contacts_resolved,
        )
    }

    /// Format multiple metrics as a complete CSV string.
    pub fn to_csv(metrics: &[RunMetrics]) -> String {
        let mut csv = Self::to_csv_header();
        for m in metrics {
            csv.push('\n');
            csv.push_str(&m.to_csv_row());
        }
        csv
    }
}

/// Total kinetic energy of a particle population: 0.5 * Σ m * ‖v‖².
pub fn kinetic_energy(particles: &[Particle], dt: Scalar) -> f64 {
    particles
        .iter()
        .map(|p| {
            let v = p.velocity(dt);
            0.5 * p.mass as f64 * (v.length_squared() as f64)
        })
        .sum()
}
