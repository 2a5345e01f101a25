//! Scenario runner — executes the per-tick protocol and collects metrics.
//!
//! Tick order per particle population: gravity accumulation, Verlet
//! integration, then floor → sphere → box resolution. Obstacles are
//! read-only within a tick; the sphere's drag state advances between
//! ticks via `advance`.

use std::time::Instant;

use weft_contact::resolve_all;
use weft_dynamics::Particle;
use weft_math::Vec3;
use weft_telemetry::{EventBus, EventKind, SimulationEvent};
use weft_types::WeftResult;

use crate::metrics::{kinetic_energy, RunMetrics};
use crate::scenarios::Scenario;

/// Runs scenarios and collects metrics.
pub struct SimRunner;

impl SimRunner {
    /// Run a scenario to completion, emitting telemetry along the way.
    pub fn run(scenario: &mut Scenario, bus: &mut EventBus) -> WeftResult<RunMetrics> {
        scenario.params.validate()?;

        let gravity = Vec3::from_array(scenario.params.gravity);
        let dt = scenario.dt;
        let mut contacts_resolved: u64 = 0;

        let total_start = Instant::now();

        for step in 0..scenario.timesteps {
            let step_start = Instant::now();
            bus.emit(SimulationEvent::new(
                step,
                EventKind::StepBegin {
                    sim_time: step as f64 * dt as f64,
                },
            ));

            let params = scenario.params.clone();
            let particles = scenario.sheet.particles_mut();

            for particle in particles.iter_mut() {
                particle.add_force(gravity * particle.mass);
                particle.integrate(dt, &params);
            }

            if let Some(floor) = &scenario.floor {
                let result = resolve_all(floor, particles, &params);
                contacts_resolved += result.resolved_count as u64;
                emit_contact_pass(bus, step, "floor", &result);
            }
            if let Some(sphere) = &scenario.sphere {
                let result = resolve_all(sphere, particles, &params);
                contacts_resolved += result.resolved_count as u64;
                emit_contact_pass(bus, step, "sphere", &result);
            }
            if let Some(box_obstacle) = &scenario.box_obstacle {
                let result = resolve_all(box_obstacle, particles, &params);
                contacts_resolved += result.resolved_count as u64;
                emit_contact_pass(bus, step, "box", &result);
            }

            if let Some(row) = scenario.pinned_row {
                scenario.sheet.lock_row_to_original(row);
            }

            // Stationary obstacles: carry the sphere center forward so
            // its drag term stays zero.
            if let Some(sphere) = &mut scenario.sphere {
                let center = sphere.center;
                sphere.advance(center);
            }

            bus.emit(SimulationEvent::new(
                step,
                EventKind::Energy {
                    kinetic: kinetic_energy(scenario.sheet.particles(), dt),
                },
            ));
            bus.emit(SimulationEvent::new(
                step,
                EventKind::StepEnd {
                    wall_time: step_start.elapsed().as_secs_f64(),
                },
            ));
            bus.flush();
        }

        let total_wall_time = total_start.elapsed().as_secs_f64();
        Ok(Self::collect_metrics(
            scenario,
            total_wall_time,
            contacts_resolved,
        ))
    }

    fn collect_metrics(
        scenario: &Scenario,
        total_wall_time: f64,
        contacts_resolved: u64,
    ) -> RunMetrics {
        let particles = scenario.sheet.particles();
        let max_displacement = particles
            .iter()
            .map(|p| (p.position - p.original).length())
            .fold(0.0f32, f32::max);

        let avg_step_time = if scenario.timesteps > 0 {
            total_wall_time / scenario.timesteps as f64
        } else {
            0.0
        };

        RunMetrics {
            scenario: scenario.kind.name().to_string(),
            timesteps: scenario.timesteps,
            particle_count: particles.len(),
            total_wall_time,
            avg_step_time,
            final_kinetic_energy: kinetic_energy(particles, scenario.dt),
            max_displacement,
            contacts_resolved,
        }
    }
}

fn emit_contact_pass(
    bus: &EventBus,
    step: u32,
    collider: &str,
    result: &weft_contact::ContactResult,
) {
    bus.emit(SimulationEvent::new(
        step,
        EventKind::ContactPass {
            collider: collider.to_string(),
            resolved: result.resolved_count,
            max_penetration: result.max_penetration,
        },
    ));
}

/// Convenience driver used by hosts that manage their own particles:
/// one full tick for a standalone population with a single collider set.
pub fn step_particles(
    particles: &mut [Particle],
    gravity: Vec3,
    dt: weft_types::Scalar,
    params: &weft_dynamics::SimParams,
    colliders: &[&dyn weft_contact::Collider],
) {
    for particle in particles.iter_mut() {
        particle.add_force(gravity * particle.mass);
        particle.integrate(dt, params);
    }
    for collider in colliders {
        resolve_all(*collider, particles, params);
    }
}
