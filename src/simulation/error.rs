//! Error types for the simulation core.
//!
//! All failures here are precondition violations: the core performs no
//! I/O and has no transient failure modes. Numerical near-singularities
//! are absorbed by the softening term and collisions are reported as
//! data, so neither appears in this enum.

use crate::simulation::states::Vec3;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// Tree construction over zero particles has no defined geometry.
    #[error("cannot build an octree from an empty particle set")]
    EmptyParticleSet,

    /// The force law divides by mass, so every particle needs m > 0.
    #[error("particle {index} has non-positive mass {mass}")]
    NonPositiveMass { index: usize, mass: f64 },

    /// Insertion routing assumes the root box contains every particle.
    #[error("particle {index} at {position:?} lies outside the tree bounds")]
    OutOfBounds { index: usize, position: Vec3 },
}
