//! Error handling for solver configuration and kinematic queries

/// Unified error to report misconfigurations that are rejected before any
/// swarm state is allocated, and dimension errors in kinematic queries.
#[derive(Debug)]
pub enum SolverError {
    DimensionMismatch { expected: usize, found: usize },
    InvalidBounds { joint: usize, from: f64, to: f64 },
    InvalidPopulation(usize),
    InvalidIterationBudget(usize),
}

impl std::fmt::Display for SolverError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            SolverError::DimensionMismatch { expected, found } =>
                write!(f, "Dimension mismatch: expected {}, found {}", expected, found),
            SolverError::InvalidBounds { joint, from, to } =>
                write!(f, "Invalid bounds for joint {}: from {} exceeds to {}", joint, from, to),
            SolverError::InvalidPopulation(size) =>
                write!(f, "Invalid population size: {}", size),
            SolverError::InvalidIterationBudget(budget) =>
                write!(f, "Invalid iteration budget: {}", budget),
        }
    }
}

impl std::error::Error for SolverError {}
