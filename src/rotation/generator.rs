//! Depth-first rotation enumeration.

use super::types::Rotation;
use crate::model::{ProblemModel, TaskSet, Time};

/// Per-branch search state: a feasible chain awaiting emission and
/// extension.
struct Frame {
    chain: Vec<usize>,
    visited: TaskSet,
    cost: f64,
    start: Time,
}

/// Lazy enumerator of every feasible rotation of a problem.
///
/// The traversal starts independently from every task (each task is a
/// valid length-1 rotation) and extends a chain ending at `t` with every
/// successor of `t` not already in the chain, provided the extended
/// duration stays within the time limit. Each feasible chain is yielded
/// exactly once; two orderings of the same task set are distinct
/// rotations. Enumeration order carries no meaning — consumers must not
/// depend on it.
///
/// The traversal is iterative with an explicit frame stack, so chain
/// length is bounded by memory rather than the call stack.
///
/// A model with zero tasks, or one whose every task overruns the time
/// limit on its own, simply yields nothing.
pub struct RotationGenerator<'a> {
    problem: &'a ProblemModel,
    stack: Vec<Frame>,
}

impl<'a> RotationGenerator<'a> {
    /// Creates a generator over all rotations of `problem`.
    pub fn new(problem: &'a ProblemModel) -> Self {
        let n = problem.num_tasks();
        let mut stack = Vec::with_capacity(n);
        // Seed in reverse so task 0's subtree is explored first.
        for task in (0..n).rev() {
            let duration = problem.tasks()[task].duration();
            if duration > problem.time_limit() {
                continue;
            }
            let mut visited = TaskSet::new(n);
            visited.insert(task);
            stack.push(Frame {
                chain: vec![task],
                visited,
                cost: 0.0,
                start: problem.tasks()[task].start,
            });
        }
        Self { problem, stack }
    }
}

impl Iterator for RotationGenerator<'_> {
    type Item = Rotation;

    fn next(&mut self) -> Option<Rotation> {
        let frame = self.stack.pop()?;
        let last = *frame
            .chain
            .last()
            .unwrap_or_else(|| unreachable!("frames hold non-empty chains"));
        let duration = self.problem.tasks()[last].finish - frame.start;

        // Push extensions in reverse so the lowest successor index is
        // explored first.
        for &next in self.problem.successors(last).iter().rev() {
            if frame.visited.contains(next) {
                continue;
            }
            let extended_duration = self.problem.tasks()[next].finish - frame.start;
            if extended_duration > self.problem.time_limit() {
                continue;
            }
            let Some(step_cost) = self.problem.transition_cost(last, next) else {
                continue;
            };
            let mut chain = frame.chain.clone();
            chain.push(next);
            let mut visited = frame.visited.clone();
            visited.insert(next);
            self.stack.push(Frame {
                chain,
                visited,
                cost: frame.cost + step_cost,
                start: frame.start,
            });
        }

        Some(Rotation::new(frame.chain, frame.visited, frame.cost, duration))
    }
}

/// Materializes every rotation of `problem`.
pub fn enumerate_rotations(problem: &ProblemModel) -> Vec<Rotation> {
    RotationGenerator::new(problem).collect()
}
