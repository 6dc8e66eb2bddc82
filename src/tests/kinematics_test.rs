#[cfg(test)]
mod tests {
    use crate::kinematic_traits::{Kinematics, Position};
    use crate::kinematics_impl::LinkChain;
    use crate::solver_error::SolverError;
    use std::f64::consts::PI;

    const TOLERANCE: f64 = 1e-12;

    fn assert_position(actual: &Position, expected: (f64, f64, f64)) {
        assert!(
            (actual.x - expected.0).abs() < TOLERANCE
                && (actual.y - expected.1).abs() < TOLERANCE
                && (actual.z - expected.2).abs() < TOLERANCE,
            "expected ({}, {}, {}), got ({}, {}, {})",
            expected.0,
            expected.1,
            expected.2,
            actual.x,
            actual.y,
            actual.z
        );
    }

    #[test]
    fn test_single_link_trig_identity() {
        let length = 2.5;
        let chain = LinkChain::new(vec![length]);
        // A single untwisted link is a plain planar rotation.
        for step in -8..=8 {
            let theta = step as f64 * PI / 8.0;
            let pos = chain.forward(&[theta], &[0.0]).unwrap();
            assert_position(&pos, (length * theta.cos(), length * theta.sin(), 0.0));
        }
    }

    #[test]
    fn test_straight_chain_reaches_sum_of_lengths() {
        let chain = LinkChain::new(vec![1.0, 2.0, 3.0]);
        let pos = chain.forward(&[0.0; 3], &[0.0; 3]).unwrap();
        assert_position(&pos, (6.0, 0.0, 0.0));
    }

    #[test]
    fn test_planar_elbow() {
        // First link straight up, second link folded back to horizontal.
        let chain = LinkChain::new(vec![1.0, 1.0]);
        let pos = chain
            .forward(&[PI / 2.0, -PI / 2.0], &[0.0, 0.0])
            .unwrap();
        assert_position(&pos, (1.0, 1.0, 0.0));
    }

    #[test]
    fn test_twist_leaves_the_plane() {
        // A 90 degree twist on the first link turns the second joint's
        // rotation plane vertical: the elbow bend now produces pure z.
        let chain = LinkChain::new(vec![1.0, 1.0]);
        let pos = chain
            .forward(&[0.0, PI / 2.0], &[PI / 2.0, 0.0])
            .unwrap();
        assert_position(&pos, (1.0, 0.0, 1.0));
    }

    #[test]
    fn test_joint_positions_trace_the_arm() {
        let chain = LinkChain::new(vec![1.0, 1.0]);
        let theta = [PI / 2.0, -PI / 2.0];
        let alpha = [0.0, 0.0];

        let points = chain.joint_positions(&theta, &alpha).unwrap();
        assert_eq!(points.len(), 3);
        assert_position(&points[0], (0.0, 0.0, 0.0));
        assert_position(&points[1], (0.0, 1.0, 0.0));
        assert_position(&points[2], (1.0, 1.0, 0.0));

        // The last traced point is the end effector.
        let end = chain.forward(&theta, &alpha).unwrap();
        assert!((points[2] - end).norm() < TOLERANCE);
    }

    #[test]
    fn test_rejects_mismatched_theta() {
        let chain = LinkChain::new(vec![1.0, 1.0]);
        let result = chain.forward(&[0.0], &[0.0, 0.0]);
        assert!(matches!(
            result,
            Err(SolverError::DimensionMismatch {
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn test_rejects_mismatched_alpha() {
        let chain = LinkChain::new(vec![1.0, 1.0]);
        let result = chain.joint_positions(&[0.0, 0.0], &[0.0, 0.0, 0.0]);
        assert!(matches!(
            result,
            Err(SolverError::DimensionMismatch {
                expected: 2,
                found: 3
            })
        ));
    }
}
