//! Force evaluation for the n-body engine
//!
//! Defines the softened pairwise gravity law, the direct O(N²) oracle,
//! and the [`ForceEvaluator`] seam with its two interchangeable
//! strategies: tree-approximated and direct pairwise summation.
//!
//! Evaluators never mutate particle state; they fill a force buffer and
//! return an [`Evaluation`] carrying the tree they built (if any) and a
//! report of approximation usage and detected collisions. Callers divide
//! by mass to obtain accelerations.

use std::collections::HashSet;

use crate::simulation::error::SimError;
use crate::simulation::octree::Octree;
use crate::simulation::states::{Particle, System, Vec3};

/// Pairwise Newtonian gravity with softening
///
/// `eps` bounds the force magnitude as separations approach zero; it
/// also serves as the guard term in the tree's opening criterion.
#[derive(Debug, Clone, Copy)]
pub struct Gravity {
    pub g: f64, // gravitational constant
    pub eps: f64, // softening length
}

impl Gravity {
    /// Softening squared, the form the force law consumes
    pub fn eps2(&self) -> f64 {
        self.eps * self.eps
    }

    /// Force exerted on the body at `p1` by the body at `p2`:
    /// `F = G * m1 * m2 * unit(p2 - p1) / (|p2 - p1|^2 + eps^2)`
    ///
    /// The unit vector of a zero separation is the zero vector, so two
    /// coincident bodies exert no force on each other.
    pub fn force(&self, p1: Vec3, m1: f64, p2: Vec3, m2: f64) -> Vec3 {
        let dist = p2 - p1;
        let r2 = dist.norm_squared();
        let unit = dist.try_normalize(0.0).unwrap_or_else(Vec3::zeros);
        unit * (self.g * m1 * m2 / (r2 + self.eps2()))
    }
}

/// Two particles closer than the sum of their radii.
///
/// Detection only; nothing in this engine resolves or merges the pair.
/// Indices are canonical (`a < b`) and refer to the particle collection.
#[derive(Debug, Clone)]
pub struct CollisionEvent {
    pub a: usize,
    pub b: usize,
    pub separation: f64,
}

/// Statistics accumulated over one force evaluation pass.
///
/// Carried as an explicit value instead of process-wide counters, so the
/// caller decides what to log or persist.
#[derive(Debug, Default)]
pub struct EvalReport {
    pub approximations: u64, // times a subtree was collapsed to its center of mass
    pub collisions: Vec<CollisionEvent>,
    seen: HashSet<(usize, usize)>, // canonical pairs already reported
}

impl EvalReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a collision once per unordered pair
    pub(crate) fn collide(&mut self, i: usize, j: usize, separation: f64) {
        let (a, b) = if i < j { (i, j) } else { (j, i) };
        if self.seen.insert((a, b)) {
            self.collisions.push(CollisionEvent { a, b, separation });
        }
    }

    /// Fold another report into this one, deduplicating collision pairs
    pub fn merge(&mut self, other: EvalReport) {
        self.approximations += other.approximations;
        for c in other.collisions {
            if self.seen.insert((c.a, c.b)) {
                self.collisions.push(c);
            }
        }
    }
}

/// Result of one full force evaluation pass.
///
/// `tree` is `Some` only for the tree strategy; ownership passes to the
/// caller, who may serialize it before letting it drop.
pub struct Evaluation {
    pub tree: Option<Octree>,
    pub report: EvalReport,
}

/// Net force on every particle, behind one contract for both strategies
pub trait ForceEvaluator: Send + Sync {
    /// Fill `out[i]` with the net force on particle `i` at the current
    /// positions. `out` must have one slot per particle.
    fn forces(&self, sys: &System, out: &mut [Vec3]) -> Result<Evaluation, SimError>;
}

/// O(N) pairwise force on one particle from every other particle.
///
/// The correctness oracle for the tree evaluator; self-interaction is
/// excluded by index.
pub fn direct_force(index: usize, particles: &[Particle], gravity: &Gravity) -> Vec3 {
    let p = &particles[index];
    let mut f = Vec3::zeros();
    for (j, other) in particles.iter().enumerate() {
        if j == index {
            continue; // avoid self-interaction
        }
        f += gravity.force(p.x, p.m, other.x, other.m);
    }
    f
}

/// Direct O(N²) summation strategy
pub struct DirectSum {
    pub gravity: Gravity,
}

impl ForceEvaluator for DirectSum {
    fn forces(&self, sys: &System, out: &mut [Vec3]) -> Result<Evaluation, SimError> {
        for (i, f) in out.iter_mut().enumerate() {
            *f = direct_force(i, &sys.particles, &self.gravity);
        }
        Ok(Evaluation {
            tree: None,
            report: EvalReport::new(),
        })
    }
}

/// Barnes–Hut tree strategy
///
/// Builds a fresh octree per evaluation and walks it once per particle.
/// `theta = 0` opens every node and degenerates to the direct sum.
pub struct TreeApprox {
    pub gravity: Gravity,
    pub theta: f64, // opening angle threshold
    pub leaf_capacity: usize,
}

impl ForceEvaluator for TreeApprox {
    fn forces(&self, sys: &System, out: &mut [Vec3]) -> Result<Evaluation, SimError> {
        let tree = Octree::build(&sys.particles, self.leaf_capacity)?;
        let mut report = EvalReport::new();
        for (i, f) in out.iter_mut().enumerate() {
            *f = tree.force_on(i, &sys.particles, &self.gravity, self.theta, &mut report);
        }
        Ok(Evaluation {
            tree: Some(tree),
            report,
        })
    }
}
