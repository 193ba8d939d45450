//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime bundle
//! (`Scenario`) containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - system state (`System` with particles at t = 0)
//! - the active force evaluator
//!
//! Preconditions the core relies on are checked here: the particle set
//! must be non-empty and every mass strictly positive.

use crate::configuration::config::{ClusterConfig, EvaluatorConfig, IntegratorConfig, ScenarioConfig};
use crate::simulation::engine::Engine;
use crate::simulation::error::SimError;
use crate::simulation::forces::{DirectSum, ForceEvaluator, Gravity, TreeApprox};
use crate::simulation::integrator::{step_euler, step_leapfrog, StepOutcome};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Particle, System, Vec3};

const DEFAULT_THETA: f64 = 0.5;
const DEFAULT_LEAF_CAPACITY: usize = 1;

/// A fully-initialized runtime scenario
///
/// This is the main "runtime bundle" constructed from a [`ScenarioConfig`]:
/// engine settings, parameters, the current system state and the force
/// evaluator the engine was configured with. The driver loop calls
/// [`Scenario::step`] until `t_end`.
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
    pub evaluator: Box<dyn ForceEvaluator>,
}

impl Scenario {
    pub fn build(cfg: ScenarioConfig) -> Result<Self, SimError> {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            t_end: p_cfg.t_end,
            dt: p_cfg.dt,
            eps: p_cfg.eps,
            g: p_cfg.g,
        };

        // Engine (runtime) from EngineConfig
        let e_cfg = cfg.engine;
        let engine = Engine {
            integrator: e_cfg.integrator,
            evaluator: e_cfg.evaluator,
            theta: e_cfg.theta.unwrap_or(DEFAULT_THETA),
            leaf_capacity: e_cfg.leaf_capacity.unwrap_or(DEFAULT_LEAF_CAPACITY),
        };

        // Particles: explicitly listed first, then any generated cloud
        let mut particles: Vec<Particle> = cfg
            .particles
            .iter()
            .enumerate()
            .map(|(i, pc)| Particle {
                x: Vec3::new(pc.x[0], pc.x[1], pc.x[2]),
                v: Vec3::new(pc.v[0], pc.v[1], pc.v[2]),
                m: pc.m,
                radius: pc.radius,
                id: Some(pc.id.unwrap_or(i as u32)),
            })
            .collect();

        if let Some(cluster) = &cfg.cluster {
            let first_id = particles.len() as u32;
            particles.extend(generate_cluster(cluster, first_id));
        }

        // Fail fast on preconditions the core assumes
        if particles.is_empty() {
            return Err(SimError::EmptyParticleSet);
        }
        for (index, p) in particles.iter().enumerate() {
            if p.m <= 0.0 {
                return Err(SimError::NonPositiveMass { index, mass: p.m });
            }
        }

        // The configured force-evaluation strategy
        let gravity = Gravity {
            g: parameters.g,
            eps: parameters.eps,
        };
        let evaluator: Box<dyn ForceEvaluator> = match engine.evaluator {
            EvaluatorConfig::Tree => Box::new(TreeApprox {
                gravity,
                theta: engine.theta,
                leaf_capacity: engine.leaf_capacity,
            }),
            EvaluatorConfig::Direct => Box::new(DirectSum { gravity }),
        };

        Ok(Self {
            engine,
            parameters,
            system: System::new(particles),
            evaluator,
        })
    }

    /// Advance one step with the configured integrator
    pub fn step(&mut self) -> Result<StepOutcome, SimError> {
        match self.engine.integrator {
            IntegratorConfig::Leapfrog => {
                step_leapfrog(&mut self.system, self.evaluator.as_ref(), self.parameters.dt)
            }
            IntegratorConfig::Euler => {
                step_euler(&mut self.system, self.evaluator.as_ref(), self.parameters.dt)
            }
        }
    }
}

/// Generate a deterministic particle cloud from a seeded RNG.
///
/// Positions are uniform in a cube of the configured half-extent,
/// velocities point in a random direction with speed below the cap, and
/// masses are uniform in `[mass_min, mass_max]`.
fn generate_cluster(cfg: &ClusterConfig, first_id: u32) -> Vec<Particle> {
    let mut rng = fastrand::Rng::with_seed(cfg.seed);

    // uniform in [-1, 1) per component
    fn signed_unit(rng: &mut fastrand::Rng) -> f64 {
        rng.f64() * 2.0 - 1.0
    }

    (0..cfg.count)
        .map(|i| {
            let x = Vec3::new(
                signed_unit(&mut rng),
                signed_unit(&mut rng),
                signed_unit(&mut rng),
            ) * cfg.radius;
            let dir = Vec3::new(
                signed_unit(&mut rng),
                signed_unit(&mut rng),
                signed_unit(&mut rng),
            )
            .try_normalize(0.0)
            .unwrap_or_else(Vec3::zeros);
            let speed = rng.f64() * cfg.speed;
            let m = cfg.mass_min + rng.f64() * (cfg.mass_max - cfg.mass_min);

            Particle {
                x,
                v: dir * speed,
                m,
                radius: cfg.particle_radius,
                id: Some(first_id + i as u32),
            }
        })
        .collect()
}
