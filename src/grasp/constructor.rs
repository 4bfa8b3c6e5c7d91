//! Single GRASP construction.

use super::greedy::GreedyCost;
use super::types::{Candidate, Solution};
use crate::model::{ProblemModel, TaskSet};
use crate::rotation::Rotation;
use rand::Rng;

/// Indices of the restricted candidate list: every candidate scoring
/// within `min + alpha * (max - min)` of the pool's best score.
///
/// With `alpha = 0` this keeps only candidates tied at the minimum; with
/// `alpha = 1` it keeps the whole pool.
fn restricted_candidates(candidates: &[Candidate], alpha: f64) -> Vec<usize> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for candidate in candidates {
        min = min.min(candidate.score);
        max = max.max(candidate.score);
    }
    let threshold = min + alpha * (max - min);
    candidates
        .iter()
        .enumerate()
        .filter(|(_, c)| c.score <= threshold)
        .map(|(i, _)| i)
        .collect()
}

/// Builds one covering solution, or returns `None` if the candidate pool
/// runs dry before every task is covered.
///
/// All rotations are scored once up front (one perturbation draw each,
/// never refreshed mid-construction); the loop then repeatedly selects a
/// rotation uniformly at random from the RCL and discards every candidate
/// whose task set intersects it, which keeps the growing solution
/// pairwise disjoint by construction.
///
/// A zero-task problem yields the empty solution immediately; a problem
/// with tasks but an empty rotation pool is infeasible.
///
/// Each call consumes only its own candidate pool: a failed construction
/// leaves no residue behind.
pub fn construct<R: Rng>(
    rotations: &[Rotation],
    problem: &ProblemModel,
    greedy: &GreedyCost,
    alpha: f64,
    rng: &mut R,
) -> Option<Solution> {
    let num_tasks = problem.num_tasks();
    if num_tasks == 0 {
        return Some(Solution::new(Vec::new()));
    }

    let mut candidates: Vec<Candidate> = rotations
        .iter()
        .map(|rotation| Candidate {
            rotation: rotation.clone(),
            score: greedy.score(rotation, rng),
        })
        .collect();

    let mut covered = TaskSet::new(num_tasks);
    let mut selected = Vec::new();

    while covered.count() < num_tasks {
        if candidates.is_empty() {
            return None;
        }

        let rcl = restricted_candidates(&candidates, alpha);
        let pick = rcl[rng.random_range(0..rcl.len())];
        let rotation = candidates.swap_remove(pick).rotation;

        covered.union_with(rotation.tasks());
        candidates.retain(|c| !c.rotation.tasks().intersects(rotation.tasks()));
        selected.push(rotation);
    }

    Some(Solution::new(selected))
}
