pub mod simulation;
pub mod configuration;
pub mod output;

pub use simulation::states::{Particle, System, Vec3};
pub use simulation::octree::{OctNode, Octree, MAX_DEPTH};
pub use simulation::forces::{
    direct_force, CollisionEvent, DirectSum, EvalReport, Evaluation, ForceEvaluator, Gravity,
    TreeApprox,
};
pub use simulation::integrator::{step_euler, step_leapfrog, StepOutcome};
pub use simulation::scenario::Scenario;
pub use simulation::error::SimError;

pub use configuration::config::{
    ClusterConfig, EngineConfig, EvaluatorConfig, IntegratorConfig, ParametersConfig,
    ParticleConfig, ScenarioConfig,
};

pub use output::snapshot::SnapshotWriter;
