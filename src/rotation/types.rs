//! Rotation value type.

use crate::model::{TaskSet, Time};

/// A feasible ordered chain of distinct tasks.
///
/// Produced by [`RotationGenerator`](super::RotationGenerator), never
/// mutated afterward. Carries its derived attributes so construction-time
/// hot paths (overlap tests, scoring) never recompute them:
/// the task set for O(1) overlap tests, the summed transition cost, and
/// the chain duration.
#[derive(Debug, Clone, PartialEq)]
pub struct Rotation {
    sequence: Vec<usize>,
    tasks: TaskSet,
    cost: f64,
    duration: Time,
}

impl Rotation {
    pub(crate) fn new(sequence: Vec<usize>, tasks: TaskSet, cost: f64, duration: Time) -> Self {
        debug_assert_eq!(sequence.len(), tasks.count());
        Self {
            sequence,
            tasks,
            cost,
            duration,
        }
    }

    /// Task indices in execution order.
    pub fn sequence(&self) -> &[usize] {
        &self.sequence
    }

    /// The set of covered tasks.
    pub fn tasks(&self) -> &TaskSet {
        &self.tasks
    }

    /// Number of tasks in the chain.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Rotations are never empty; this exists for clippy's sake.
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Sum of transition costs along the chain. A single-task rotation
    /// costs nothing.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Finish time of the last task minus start time of the first.
    pub fn duration(&self) -> Time {
        self.duration
    }
}
