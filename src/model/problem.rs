//! Crew scheduling problem instance.

use super::task::{Task, Time};
use std::collections::HashMap;

/// A crew scheduling set-partitioning instance.
///
/// Owns the task list, the partial transition-cost table, the adjacency
/// derived from it, and the per-rotation time limit. Built once — from
/// parts with [`ProblemModel::new`] or from an instance file via
/// [`parse_instance`](super::parse_instance) — and read-only afterward:
/// everything downstream borrows from the model rather than copying it.
///
/// A transition `(i, j)` is feasible iff it appears in the cost table;
/// there is no infinite-cost sentinel. Adjacency is derived only from
/// defined entries.
#[derive(Debug, Clone)]
pub struct ProblemModel {
    tasks: Vec<Task>,
    transitions: HashMap<(usize, usize), f64>,
    successors: Vec<Vec<usize>>,
    time_limit: Time,
}

impl ProblemModel {
    /// Builds a model from its parts.
    ///
    /// `transitions` lists `(from, to, cost)` triples with 0-based task
    /// indices. A pair listed more than once keeps its first cost; the
    /// duplicate is reported by [`validate_model`](super::validate_model).
    ///
    /// The model itself does not re-validate structure (that is the
    /// loading boundary's job); out-of-range indices here would panic.
    pub fn new(tasks: Vec<Task>, transitions: &[(usize, usize, f64)], time_limit: Time) -> Self {
        let mut table = HashMap::with_capacity(transitions.len());
        let mut successors = vec![Vec::new(); tasks.len()];
        for &(from, to, cost) in transitions {
            if table.insert((from, to), cost).is_none() {
                successors[from].push(to);
            }
        }
        Self {
            tasks,
            transitions: table,
            successors,
            time_limit,
        }
    }

    /// The task list, indexed by task id.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of tasks in the instance.
    pub fn num_tasks(&self) -> usize {
        self.tasks.len()
    }

    /// Maximum allowed rotation duration.
    pub fn time_limit(&self) -> Time {
        self.time_limit
    }

    /// Cost of the transition `from → to`, or `None` if it is infeasible.
    pub fn transition_cost(&self, from: usize, to: usize) -> Option<f64> {
        self.transitions.get(&(from, to)).copied()
    }

    /// Tasks that may directly follow `task`.
    pub fn successors(&self, task: usize) -> &[usize] {
        &self.successors[task]
    }

    /// Number of defined transitions.
    pub fn num_transitions(&self) -> usize {
        self.transitions.len()
    }
}
