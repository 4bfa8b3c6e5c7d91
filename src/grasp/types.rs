//! Solution representation and the local-search extension point.

use crate::model::{ProblemModel, TaskSet};
use crate::rotation::Rotation;
use rand::Rng;

/// An ordered list of pairwise-disjoint rotations.
///
/// Owned by the construction that built it; the driver compares solutions
/// by total cost and keeps at most one best across restarts. A solution
/// returned by [`construct`](super::construct) is *complete*: its
/// rotations' task sets partition the full task set.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    rotations: Vec<Rotation>,
    total_cost: f64,
}

impl Solution {
    /// Wraps the selected rotations, caching their summed cost.
    pub fn new(rotations: Vec<Rotation>) -> Self {
        let total_cost = rotations.iter().map(Rotation::cost).sum();
        Self {
            rotations,
            total_cost,
        }
    }

    /// The member rotations, in selection order.
    pub fn rotations(&self) -> &[Rotation] {
        &self.rotations
    }

    /// Sum of member rotation costs.
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// Number of rotations.
    pub fn len(&self) -> usize {
        self.rotations.len()
    }

    /// Whether the solution holds no rotations (the trivial solution of a
    /// zero-task instance).
    pub fn is_empty(&self) -> bool {
        self.rotations.is_empty()
    }

    /// Union of the member rotations' task sets.
    pub fn covered_tasks(&self, num_tasks: usize) -> TaskSet {
        let mut covered = TaskSet::new(num_tasks);
        for rotation in &self.rotations {
            covered.union_with(rotation.tasks());
        }
        covered
    }

    /// Whether every task of `problem` is covered.
    pub fn is_complete(&self, problem: &ProblemModel) -> bool {
        self.covered_tasks(problem.num_tasks()).count() == problem.num_tasks()
    }
}

/// A candidate rotation with its greedy score for one construction.
///
/// Scores may include a random perturbation, so candidates are rebuilt
/// fresh for every construction attempt and never cached across restarts.
#[derive(Debug, Clone)]
pub(super) struct Candidate {
    pub rotation: Rotation,
    pub score: f64,
}

/// Refinement step applied to each constructed solution before it
/// competes for best.
///
/// This is an explicit extension point: the driver is refinement-agnostic
/// and [`NoRefinement`] is the default. Implementations must return a
/// solution that is still complete and disjoint.
pub trait LocalSearch: Send + Sync {
    /// Refines a freshly constructed solution.
    fn refine<R: Rng>(
        &self,
        solution: Solution,
        problem: &ProblemModel,
        rng: &mut R,
    ) -> Solution;
}

/// The identity refinement: construction results compete unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRefinement;

impl LocalSearch for NoRefinement {
    fn refine<R: Rng>(
        &self,
        solution: Solution,
        _problem: &ProblemModel,
        _rng: &mut R,
    ) -> Solution {
        solution
    }
}
