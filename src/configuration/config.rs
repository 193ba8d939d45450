//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – integrator and force-evaluation strategy
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`ParticleConfig`]   – initial state for each explicitly listed particle
//! - [`ClusterConfig`]    – optional procedurally generated particle cloud
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   integrator: "leapfrog"  # or "euler"
//!   evaluator: "tree"       # or "direct"
//!   theta: 0.5              # opening angle; 0 degenerates to brute force
//!   leaf_capacity: 1        # particles per leaf before subdividing
//!
//! parameters:
//!   t_end: 10.0             # total simulation time
//!   dt: 0.01                # fixed step size
//!   eps: 1.0e-4             # softening length
//!   g: 1.0                  # gravitational constant
//!
//! particles:
//!   - x: [ -1.0, 0.0, 0.0 ]
//!     v: [  0.0, 0.0, 0.0 ]
//!     m: 1.0
//!     radius: 0.02
//!   - x: [  1.0, 0.0, 0.0 ]
//!     v: [  0.0, 0.0, 0.0 ]
//!     m: 1.0
//!     radius: 0.02
//!
//! # alternatively (or additionally), a generated cloud:
//! cluster:
//!   count: 50
//!   seed: 42
//!   radius: 50.0            # half-extent of the spawn cube
//!   speed: 20.0             # velocity magnitude cap
//!   mass_min: 1.0
//!   mass_max: 5.0
//!   particle_radius: 0.5
//! ```
//!
//! The engine maps this configuration into its internal runtime scenario
//! representation, which may use different structs optimized for performance.

use serde::Deserialize;

/// Which integrator advances the system state
#[derive(Deserialize, Debug, Clone)]
pub enum IntegratorConfig {
    #[serde(rename = "leapfrog")] // kick-drift-kick velocity-Verlet, symplectic, fixed step
    Leapfrog,

    #[serde(rename = "euler")] // explicit first-order step, for comparison only
    Euler,
}

/// Which force-evaluation strategy the engine uses
#[derive(Deserialize, Debug, Clone)]
pub enum EvaluatorConfig {
    #[serde(rename = "tree")] // Barnes-Hut octree approximation
    Tree,

    #[serde(rename = "direct")] // exact O(N^2) pairwise summation
    Direct,
}

/// High-level engine configuration
#[derive(Deserialize, Debug, Clone)]
pub struct EngineConfig {
    pub integrator: IntegratorConfig,
    pub evaluator: EvaluatorConfig,
    pub theta: Option<f64>, // opening angle threshold, defaults to 0.5
    pub leaf_capacity: Option<usize>, // defaults to 1
}

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub t_end: f64, // time end
    pub dt: f64, // time step size
    pub eps: f64, // softening length - prevents singular forces at small separations
    pub g: f64, // gravitational constant, carries the unit system
}

/// Configuration for a single particle's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct ParticleConfig {
    pub x: [f64; 3], // initial position in simulation units
    pub v: [f64; 3], // initial velocity in simulation units per time unit
    pub m: f64, // mass, must be positive
    pub radius: f64, // radius used for collision detection
    pub id: Option<u32>, // stable identity; assigned from the index when absent
}

/// Deterministic pseudo-random particle cloud
#[derive(Deserialize, Debug, Clone)]
pub struct ClusterConfig {
    pub count: usize, // number of particles to generate
    pub seed: u64, // RNG seed, makes runs reproducible
    pub radius: f64, // half-extent of the cubic spawn region
    pub speed: f64, // upper bound on initial speed
    pub mass_min: f64,
    pub mass_max: f64,
    pub particle_radius: f64, // collision radius given to every generated particle
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub particles: Vec<ParticleConfig>, // explicitly listed initial particles
    pub cluster: Option<ClusterConfig>, // optional generated cloud, appended after `particles`
}
