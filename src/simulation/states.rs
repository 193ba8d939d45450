//! Core state types for the N-body simulation.
//!
//! Defines the particle record and the system that owns it:
//! - `Particle` holds position, velocity, mass, radius and an optional id
//! - `System` holds the ordered particle collection and the current time `t`
//!
//! The particle collection is index-stable for the duration of a run: the
//! integrator mutates positions and velocities in place and never reorders
//! or resizes it mid-step.

use nalgebra::Vector3;
pub type Vec3 = Vector3<f64>;

#[derive(Debug, Clone)]
pub struct Particle {
    pub x: Vec3, // position
    pub v: Vec3, // velocity
    pub m: f64, // mass, must be > 0
    pub radius: f64, // radius (collision detection)
    pub id: Option<u32>, // stable identity across a run, if assigned
}

#[derive(Debug, Clone)]
pub struct System {
    pub particles: Vec<Particle>, // ordered collection of particles
    pub t: f64, // time
}

impl System {
    pub fn new(particles: Vec<Particle>) -> Self {
        Self { particles, t: 0.0 }
    }
}
