//! High-level runtime engine settings
//!
//! Selects integrator scheme and force-evaluation strategy
//! used when building and running a `Scenario`

use crate::configuration::config::{EvaluatorConfig, IntegratorConfig};

#[derive(Debug, Clone)]
pub struct Engine {
    pub integrator: IntegratorConfig, // leapfrog or euler
    pub evaluator: EvaluatorConfig, // tree-approximated or direct pairwise
    pub theta: f64, // opening angle, 0 degenerates to brute force
    pub leaf_capacity: usize, // particles a leaf holds before subdividing
}
