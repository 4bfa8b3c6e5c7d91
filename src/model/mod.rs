//! Problem model for crew scheduling set-partitioning.
//!
//! A [`ProblemModel`] owns the task list, the partial transition-cost table,
//! the adjacency derived from it, and the per-rotation time limit. It is
//! built once — from parts or from an ORLIB-format instance file — validated
//! at the boundary, and read-only afterward.

mod instance;
mod problem;
mod task;
mod task_set;
mod validation;

pub use instance::{load_instance, parse_instance, InstanceError};
pub use problem::ProblemModel;
pub use task::{Task, Time};
pub use task_set::TaskSet;
pub use validation::{validate_model, ValidationError, ValidationErrorKind};
