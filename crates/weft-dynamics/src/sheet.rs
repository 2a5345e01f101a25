//! Rectangular particle populations.
//!
//! A [`ParticleSheet`] is a rows × cols grid of particles built from a
//! 2D parameterization and a host-supplied mapping into 3D. It carries
//! no springs or topology — only the particles themselves.

use weft_math::Vec3;
use weft_types::{Scalar, WeftError, WeftResult};

use crate::particle::Particle;

/// A grid of cloth particles, row-major.
#[derive(Debug, Clone)]
pub struct ParticleSheet {
    particles: Vec<Particle>,
    rows: usize,
    cols: usize,
}

impl ParticleSheet {
    /// Builds a rows × cols sheet.
    ///
    /// The mapping receives normalized `(u, v)` coordinates in `[0, 1]²`
    /// (column fraction, row fraction) and returns the 3D rest position.
    pub fn from_plane<F>(rows: usize, cols: usize, mass: Scalar, map: F) -> WeftResult<Self>
    where
        F: Fn(Scalar, Scalar) -> Vec3,
    {
        if rows == 0 || cols == 0 {
            return Err(WeftError::InvalidScenario(format!(
                "sheet dimensions must be nonzero, got {rows}x{cols}"
            )));
        }
        let mut particles = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                let u = c as Scalar / (cols.max(2) - 1) as Scalar;
                let v = r as Scalar / (rows.max(2) - 1) as Scalar;
                particles.push(Particle::from_plane(u, v, mass, &map)?);
            }
        }
        Ok(Self {
            particles,
            rows,
            cols,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    /// Returns the particle at grid coordinates `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Option<&Particle> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.particles.get(row * self.cols + col)
    }

    /// Snaps every particle in `row` back to its rest position.
    ///
    /// Scenario pinning: applied after integration and collisions each
    /// tick, it holds the row stationary.
    pub fn lock_row_to_original(&mut self, row: usize) {
        if row >= self.rows {
            return;
        }
        let start = row * self.cols;
        for p in &mut self.particles[start..start + self.cols] {
            p.lock_to_original();
        }
    }
}
