//! GRASP solver for crew scheduling set-partitioning instances.
//!
//! A crew scheduling instance is a fixed collection of tasks, each with a
//! start and finish time, that must be covered exactly once by *rotations* —
//! feasible task chains a single crew could perform — while minimizing total
//! rotation cost. This crate provides:
//!
//! - **Problem model**: tasks, a partial transition-cost table (absent entry
//!   = infeasible transition), the adjacency derived from it, and a duration
//!   limit per rotation.
//! - **Rotation enumeration**: a lazy depth-first generator yielding every
//!   feasible task chain within the duration limit.
//! - **GRASP construction**: repeated randomized-greedy covering using a
//!   restricted candidate list (RCL), keeping the best feasible solution
//!   across restarts, with an optional local-search extension point.
//!
//! # Architecture
//!
//! Data flows leaf-first: [`model::ProblemModel`] →
//! [`rotation::RotationGenerator`] (lazy sequence of [`rotation::Rotation`])
//! → [`grasp::GraspRunner`] (restarted RCL construction scored by
//! [`grasp::GreedyCost`]) → final [`grasp::Solution`] or an explicit
//! infeasibility result. The model is immutable after construction and is
//! safely shared across threads; with the `parallel` feature, restarts run
//! on a rayon pool and reduce by minimum cost.
//!
//! # References
//!
//! - Feo & Resende (1995), "Greedy Randomized Adaptive Search Procedures"
//! - Chu & Beasley (1998), "Constraint Handling in Genetic Algorithms:
//!   The Set Partitioning Problem" (instance family)

pub mod grasp;
pub mod model;
pub mod rotation;
