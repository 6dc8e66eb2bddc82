//! Rust implementation of inverse kinematics for n-link serial manipulators,
//! using particle swarm optimization (PSO) rather than a closed-form or
//! Jacobian-based solver.
//!
//! The solver makes no assumption about the chain geometry: each link is
//! described by its length, a joint rotation (theta) and a joint twist
//! (alpha), composed through the standard Denavit-Hartenberg link transform.
//! Because the search is derivative-free, arbitrary chains and per-joint
//! angle constraints are handled uniformly - the swarm simply never proposes
//! a non-compliant candidate.
//!
//! # Features
//!
//! - Forward kinematics for chains of any length, including the positions of
//!   all intermediate joints (useful for rendering the arm pose).
//! - Twist angles can be fixed externally or searched together with the
//!   joint angles ([`pso::AlphaMode`]), doubling the search dimension.
//! - Per-joint angle constraints with three boundary responses: absorb,
//!   reflect and damping.
//! - Deterministic runs through an injectable random generator; every solve
//!   can be seeded for reproducible results.
//! - The returned report carries the full per-iteration history of the best
//!   candidate, so a caller can replay or animate the convergence.
//!
//! To use the library, build a [`kinematics_impl::LinkChain`], pick an
//! [`pso::AlphaMode`] and hand both to [`pso::PsoIkSolver`].

pub mod kinematic_traits;
pub mod kinematics_impl;

pub mod constraints;

pub mod solver_error;

pub mod pso;

pub mod utils;

#[cfg(test)]
mod tests;
