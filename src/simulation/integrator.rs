//! Fixed-step time integrators for the N-body system
//!
//! Provides the leapfrog (kick-drift-kick) scheme, the preferred
//! time-symmetric integrator, and an explicit Euler step for comparison.
//! Both advance positions, velocities and `sys.t` in place, and hand the
//! step's final tree (tree strategy only) back to the caller for
//! optional serialization before it drops.

use crate::simulation::error::SimError;
use crate::simulation::forces::{EvalReport, Evaluation, ForceEvaluator};
use crate::simulation::octree::Octree;
use crate::simulation::states::{System, Vec3};

/// What one integration step hands back to the driver
pub struct StepOutcome {
    pub tree: Option<Octree>, // the step's final tree, None in direct mode
    pub report: EvalReport, // merged over the step's force evaluations
}

/// Advance the system by one step using leapfrog (velocity-Verlet).
///
/// Two force evaluations per step, each on a tree freshly built from the
/// positions it evaluates:
///
/// 1. Kick: `v_n+1/2 = v_n + (dt/2) * f(x_n) / m`
/// 2. Drift: `x_n+1 = x_n + dt * v_n+1/2`
/// 3. Kick: `v_n+1 = v_n+1/2 + (dt/2) * f(x_n+1) / m`
///
/// The pre-drift tree is dropped before the second evaluation; its
/// geometry is stale once positions move and must never be reused.
pub fn step_leapfrog(
    sys: &mut System,
    evaluator: &dyn ForceEvaluator,
    dt: f64,
) -> Result<StepOutcome, SimError> {
    let n = sys.particles.len();
    let half_dt = 0.5 * dt;

    // f_n from x_n at time t_n
    let mut forces = vec![Vec3::zeros(); n];
    let Evaluation { tree: stale, mut report } = evaluator.forces(&*sys, &mut forces)?;
    drop(stale);

    // Kick: v_n+1/2 = v_n + (dt/2) * a_n
    for (p, f) in sys.particles.iter_mut().zip(forces.iter()) {
        p.v += half_dt * (*f / p.m);
    }

    // Drift: x_n+1 = x_n + dt * v_n+1/2
    for p in sys.particles.iter_mut() {
        p.x += dt * p.v;
    }

    // advance time: t_n+1 = t_n + dt
    sys.t += dt;

    // f_n+1 from x_n+1, on a tree rebuilt over the moved positions
    let second = evaluator.forces(&*sys, &mut forces)?;
    report.merge(second.report);

    // Second kick: v_n+1 = v_n+1/2 + (dt/2) * a_n+1
    for (p, f) in sys.particles.iter_mut().zip(forces.iter()) {
        p.v += half_dt * (*f / p.m);
    }

    Ok(StepOutcome {
        tree: second.tree,
        report,
    })
}

/// Advance the system by one step using explicit Euler.
///
/// One force evaluation, then velocity and position updated in a single
/// pass. First order and not time-symmetric; kept for comparison runs,
/// leapfrog is the scheme long integrations should use.
pub fn step_euler(
    sys: &mut System,
    evaluator: &dyn ForceEvaluator,
    dt: f64,
) -> Result<StepOutcome, SimError> {
    let n = sys.particles.len();

    let mut forces = vec![Vec3::zeros(); n];
    let Evaluation { tree, report } = evaluator.forces(&*sys, &mut forces)?;

    for (p, f) in sys.particles.iter_mut().zip(forces.iter()) {
        p.v += dt * (*f / p.m);
        p.x += dt * p.v;
    }
    sys.t += dt;

    Ok(StepOutcome { tree, report })
}
