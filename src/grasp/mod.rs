//! Greedy Randomized Adaptive Search Procedure (GRASP).
//!
//! Repeated randomized-greedy construction over a pre-enumerated rotation
//! pool: each restart scores the pool once, builds a restricted candidate
//! list (RCL) around the best score, selects from it uniformly at random,
//! and drops candidates overlapping the selection until every task is
//! covered or the pool runs dry. The best feasible solution across all
//! restarts wins; a local-search refinement step can be plugged in
//! between construction and comparison.
//!
//! # References
//!
//! - Feo & Resende (1995), "Greedy Randomized Adaptive Search Procedures"
//! - Resende & Ribeiro (2010), "Greedy Randomized Adaptive Search
//!   Procedures: Advances and Applications"

mod config;
mod constructor;
mod greedy;
mod runner;
mod types;

pub use config::GraspConfig;
pub use constructor::construct;
pub use greedy::GreedyCost;
pub use runner::{GraspResult, GraspRunner};
pub use types::{LocalSearch, NoRefinement, Solution};
