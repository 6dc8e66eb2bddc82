use crate::solver_error::SolverError;
use nalgebra::DVector;
use rand::Rng;

/// How the velocity of a particle reacts when a joint angle is clamped to
/// its constraint boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryMode {
    /// The velocity component dies on the boundary.
    Absorb,
    /// The velocity component bounces back with the same magnitude.
    Reflect,
    /// The velocity component bounces back, scaled by a random factor in [0, 1).
    Damping,
}

/// Per-joint angle limits for the rotation angles (theta). Twist angles are
/// never constrained: they are either fixed or searched freely.
#[derive(Debug, Clone)]
pub struct Constraints {
    /// Lower limit per joint, radians.
    pub from: Vec<f64>,

    /// Upper limit per joint, radians. Must not be below the lower limit.
    pub to: Vec<f64>,

    /// Boundary response applied when a candidate leaves the limits.
    pub mode: BoundaryMode,
}

impl Constraints {
    pub fn new(from: Vec<f64>, to: Vec<f64>, mode: BoundaryMode) -> Result<Self, SolverError> {
        if from.len() != to.len() {
            return Err(SolverError::DimensionMismatch {
                expected: from.len(),
                found: to.len(),
            });
        }
        for joint in 0..from.len() {
            if from[joint] > to[joint] {
                return Err(SolverError::InvalidBounds {
                    joint,
                    from: from[joint],
                    to: to[joint],
                });
            }
        }
        Ok(Constraints { from, to, mode })
    }

    /// Number of constrained joints.
    pub fn dof(&self) -> usize {
        self.from.len()
    }

    pub fn compliant(&self, angles: &[f64]) -> bool {
        (0..self.from.len())
            .all(|i| angles[i] >= self.from[i] && angles[i] <= self.to[i])
    }

    /// Clamps the constrained prefix of `position` back into the limits and
    /// adjusts `velocity` per the boundary mode. Only the first `dof()`
    /// dimensions are touched; a free twist suffix passes through unchanged.
    /// At most one of the two boundary checks can fire per dimension.
    pub(crate) fn apply(
        &self,
        position: &mut DVector<f64>,
        velocity: &mut DVector<f64>,
        rng: &mut impl Rng,
    ) {
        for d in 0..self.from.len() {
            let clamped = if position[d] < self.from[d] {
                position[d] = self.from[d];
                true
            } else if position[d] > self.to[d] {
                position[d] = self.to[d];
                true
            } else {
                false
            };
            if clamped {
                match self.mode {
                    BoundaryMode::Absorb => velocity[d] = 0.0,
                    BoundaryMode::Reflect => velocity[d] = -velocity[d],
                    BoundaryMode::Damping => velocity[d] = -rng.random::<f64>() * velocity[d],
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::f64::consts::PI;

    fn vectors(position: &[f64], velocity: &[f64]) -> (DVector<f64>, DVector<f64>) {
        (
            DVector::from_column_slice(position),
            DVector::from_column_slice(velocity),
        )
    }

    #[test]
    fn test_absorb_clamps_and_zeroes_velocity() {
        let limits =
            Constraints::new(vec![0.0, 0.0], vec![PI, PI], BoundaryMode::Absorb).unwrap();
        let (mut pos, mut vel) = vectors(&[-0.5, 0.25 * PI], &[-1.0, 0.125]);
        let mut rng = StdRng::seed_from_u64(0);

        limits.apply(&mut pos, &mut vel, &mut rng);
        assert_eq!(pos[0], 0.0);
        assert_eq!(vel[0], 0.0);
        // The compliant dimension is untouched, bit for bit.
        assert_eq!(pos[1], 0.25 * PI);
        assert_eq!(vel[1], 0.125);
    }

    #[test]
    fn test_reflect_flips_velocity_exactly() {
        let limits =
            Constraints::new(vec![0.0], vec![PI / 2.0], BoundaryMode::Reflect).unwrap();
        let (mut pos, mut vel) = vectors(&[2.0], &[0.75]);
        let mut rng = StdRng::seed_from_u64(0);

        limits.apply(&mut pos, &mut vel, &mut rng);
        assert_eq!(pos[0], PI / 2.0);
        assert_eq!(vel[0], -0.75);
    }

    #[test]
    fn test_damping_flips_and_shrinks_velocity() {
        let limits =
            Constraints::new(vec![0.0], vec![PI / 2.0], BoundaryMode::Damping).unwrap();
        let (mut pos, mut vel) = vectors(&[-1.0], &[-2.0]);
        let mut rng = StdRng::seed_from_u64(7);

        limits.apply(&mut pos, &mut vel, &mut rng);
        assert_eq!(pos[0], 0.0);
        assert!(vel[0] >= 0.0, "damping must flip the sign");
        assert!(vel[0] < 2.0, "damping factor must stay below 1");
    }

    #[test]
    fn test_free_twist_suffix_passes_through() {
        let limits =
            Constraints::new(vec![0.0], vec![PI], BoundaryMode::Absorb).unwrap();
        // One constrained joint, one free twist dimension well outside [0, PI].
        let (mut pos, mut vel) = vectors(&[0.5, 42.0], &[1.0, 3.0]);
        let mut rng = StdRng::seed_from_u64(0);

        limits.apply(&mut pos, &mut vel, &mut rng);
        assert_eq!(pos[1], 42.0);
        assert_eq!(vel[1], 3.0);
    }

    #[test]
    fn test_compliant() {
        let limits =
            Constraints::new(vec![0.0, -PI], vec![PI, PI], BoundaryMode::Absorb).unwrap();
        assert!(limits.compliant(&[0.5 * PI, 0.0]));
        assert!(!limits.compliant(&[-0.1, 0.0]));
        assert!(!limits.compliant(&[0.5 * PI, 1.5 * PI]));
    }

    #[test]
    fn test_rejects_inverted_bounds() {
        let result = Constraints::new(vec![1.0], vec![0.0], BoundaryMode::Absorb);
        assert!(matches!(
            result,
            Err(SolverError::InvalidBounds { joint: 0, .. })
        ));
    }

    #[test]
    fn test_rejects_mismatched_limits() {
        let result = Constraints::new(vec![0.0, 0.0], vec![PI], BoundaryMode::Absorb);
        assert!(matches!(result, Err(SolverError::DimensionMismatch { .. })));
    }
}
