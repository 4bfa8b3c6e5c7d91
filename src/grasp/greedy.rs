//! Greedy scoring of candidate rotations.

use crate::rotation::Rotation;
use rand::Rng;

/// The greedy cost function ranking candidate rotations. Lower is better.
///
/// `score = cost - per_task_bonus * |tasks| + perturbation_radius * U[0,1)`
///
/// The bonus term rewards rotations covering more tasks (progress toward
/// full coverage); the perturbation term injects randomized tie-breaking
/// so restarts explore different constructions. A fresh uniform draw is
/// taken per evaluation, so re-scoring the same rotation gives a
/// different value whenever the radius is positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GreedyCost {
    /// Score reward per covered task.
    pub per_task_bonus: f64,
    /// Magnitude of the uniform random perturbation.
    pub perturbation_radius: f64,
}

impl Default for GreedyCost {
    /// Deterministic pure-cost greedy: no bonus, no perturbation.
    fn default() -> Self {
        Self {
            per_task_bonus: 0.0,
            perturbation_radius: 0.0,
        }
    }
}

impl GreedyCost {
    /// Creates a scoring function with the given parameters.
    pub fn new(per_task_bonus: f64, perturbation_radius: f64) -> Self {
        Self {
            per_task_bonus,
            perturbation_radius,
        }
    }

    /// Scores one rotation. Lower is better.
    pub fn score<R: Rng>(&self, rotation: &Rotation, rng: &mut R) -> f64 {
        let mut score = rotation.cost() - self.per_task_bonus * rotation.len() as f64;
        if self.perturbation_radius > 0.0 {
            score += self.perturbation_radius * rng.random_range(0.0..1.0);
        }
        score
    }
}
