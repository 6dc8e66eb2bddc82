extern crate nalgebra as na;

use crate::solver_error::SolverError;
use na::Vector3;

/// Joint or twist angles in radians, one entry per link of the chain.
pub type Angles = Vec<f64>;

/// Cartesian position of a point of the arm, in the units of the link lengths.
/// ```
/// extern crate nalgebra as na;
/// use na::Vector3;
///
/// type Position = Vector3<f64>;
///
/// let target = Position::new(2.0, 0.0, 0.0);
/// ```
pub type Position = Vector3<f64>;

pub trait Kinematics {
    /// Computes the end effector position for the given joint rotations and
    /// twists. Both slices must have one entry per link.
    fn forward(&self, theta: &[f64], alpha: &[f64]) -> Result<Position, SolverError>;

    /// Computes the position of every joint origin plus the end effector
    /// (n + 1 points, starting with the base at the origin). The last entry
    /// equals the result of [`Kinematics::forward`].
    fn joint_positions(&self, theta: &[f64], alpha: &[f64]) -> Result<Vec<Position>, SolverError>;
}
