//! Forward kinematics via the Denavit-Hartenberg transform chain.

use crate::kinematic_traits::{Kinematics, Position};
use crate::solver_error::SolverError;
use nalgebra::{Matrix4, Vector4};

/// An n-link serial chain, described by its link lengths only. Joint
/// rotations and twists are inputs of every query, not part of the chain.
#[derive(Debug, Clone)]
pub struct LinkChain {
    lengths: Vec<f64>,
}

impl LinkChain {
    /// Creates a new `LinkChain` with the given link lengths.
    pub fn new(lengths: Vec<f64>) -> Self {
        LinkChain { lengths }
    }

    /// Number of links (and so of joints) in the chain.
    pub fn dof(&self) -> usize {
        self.lengths.len()
    }

    pub fn lengths(&self) -> &[f64] {
        &self.lengths
    }

    fn check_dimensions(&self, theta: &[f64], alpha: &[f64]) -> Result<(), SolverError> {
        let n = self.lengths.len();
        if theta.len() != n {
            return Err(SolverError::DimensionMismatch {
                expected: n,
                found: theta.len(),
            });
        }
        if alpha.len() != n {
            return Err(SolverError::DimensionMismatch {
                expected: n,
                found: alpha.len(),
            });
        }
        Ok(())
    }

    /// The DH transform of a single link: rotation by theta about the joint
    /// axis, translation along the rotated link of length l, then twist by
    /// alpha about the link axis (Rz(theta) * Tx(l) * Rx(alpha)).
    fn link_transform(l: f64, theta: f64, alpha: f64) -> Matrix4<f64> {
        let (st, ct) = theta.sin_cos();
        let (sa, ca) = alpha.sin_cos();
        Matrix4::new(
            ct, -ca * st, sa * st, l * ct,
            st, ca * ct, -sa * ct, l * st,
            0.0, sa, ca, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }
}

impl Kinematics for LinkChain {
    fn forward(&self, theta: &[f64], alpha: &[f64]) -> Result<Position, SolverError> {
        self.check_dimensions(theta, alpha)?;

        // Walking the chain tip-to-base and post-multiplying the homogeneous
        // point is equivalent to composing the link transforms from the base.
        let mut pos = Vector4::new(0.0, 0.0, 0.0, 1.0);
        for i in (0..self.lengths.len()).rev() {
            pos = Self::link_transform(self.lengths[i], theta[i], alpha[i]) * pos;
        }
        Ok(Position::new(pos.x, pos.y, pos.z))
    }

    fn joint_positions(&self, theta: &[f64], alpha: &[f64]) -> Result<Vec<Position>, SolverError> {
        self.check_dimensions(theta, alpha)?;

        let mut points = Vec::with_capacity(self.lengths.len() + 1);
        points.push(Position::new(0.0, 0.0, 0.0));

        let mut accumulated = Matrix4::identity();
        for i in 0..self.lengths.len() {
            accumulated *= Self::link_transform(self.lengths[i], theta[i], alpha[i]);
            let origin = accumulated * Vector4::new(0.0, 0.0, 0.0, 1.0);
            points.push(Position::new(origin.x, origin.y, origin.z));
        }
        Ok(points)
    }
}
