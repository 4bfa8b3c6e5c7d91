//! Rotation enumeration.
//!
//! A *rotation* is a feasible ordered chain of tasks a single crew could
//! perform: consecutive tasks are linked by defined transitions, no task
//! repeats, and the chain's duration (finish of the last task minus start
//! of the first) stays within the instance time limit.
//!
//! [`RotationGenerator`] enumerates every such chain lazily by depth-first
//! traversal of the adjacency graph. The search space is exponential in
//! chain length in the worst case; the duration cap is the only bound.

mod generator;
mod types;

pub use generator::{enumerate_rotations, RotationGenerator};
pub use types::Rotation;
