use anyhow::Result;
use rs_pso_kinematics::constraints::{BoundaryMode, Constraints};
use rs_pso_kinematics::kinematic_traits::{Kinematics, Position};
use rs_pso_kinematics::kinematics_impl::LinkChain;
use rs_pso_kinematics::pso::{AlphaMode, PsoIkSolver, SwarmParameters};
use rs_pso_kinematics::utils::dump_report;
use std::f64::consts::PI;

/// Usage example.
fn main() -> Result<()> {
    // A planar 3-link arm: all twist angles zero.
    let chain = LinkChain::new(vec![1.0, 0.8, 0.5]);
    let target = Position::new(1.2, 1.0, 0.0);

    let solver = PsoIkSolver::new(
        chain.clone(),
        AlphaMode::Fixed(vec![0.0; 3]),
        SwarmParameters::default(),
    )?;
    println!("Planar arm, unconstrained:");
    let report = solver.solve(&target);
    dump_report(&report);

    let reached = chain.forward(report.theta(), report.alpha())?;
    println!(
        "End effector at x: {:.4}, y: {:.4}, z: {:.4}",
        reached.x, reached.y, reached.z
    );

    // The same arm with elbow-up style limits on every joint.
    let solver = PsoIkSolver::new_with_constraints(
        chain.clone(),
        AlphaMode::Fixed(vec![0.0; 3]),
        SwarmParameters::default(),
        Constraints::new(vec![0.0; 3], vec![PI; 3], BoundaryMode::Reflect)?,
    )?;
    println!("\nPlanar arm, joints limited to [0, 180] degrees:");
    let report = solver.solve(&target);
    dump_report(&report);

    // Free twists: the solver searches alpha too and the arm leaves the plane.
    let solver = PsoIkSolver::new(
        chain,
        AlphaMode::Free,
        SwarmParameters {
            max_iterations: 500,
            ..SwarmParameters::default()
        },
    )?;
    let target = Position::new(1.0, 0.8, 0.7);
    println!("\nSpatial target, twist angles searched:");
    let report = solver.solve(&target);
    dump_report(&report);

    Ok(())
}
