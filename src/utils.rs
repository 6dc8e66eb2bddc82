//! Helper functions

use crate::pso::SolveReport;

/// Allows to specify joint values in degrees (converts to radians)
pub fn as_radians(degrees: &[f64]) -> Vec<f64> {
    degrees.iter().map(|d| d.to_radians()).collect()
}

/// Convert angles in radians to degrees.
pub fn to_degrees(angles: &[f64]) -> Vec<f64> {
    angles.iter().map(|a| a.to_degrees()).collect()
}

/// Print joint values, converting radians to degrees.
pub fn dump_angles(angles: &[f64]) {
    let row_str: Vec<String> = angles
        .iter()
        .map(|angle| format!("{:5.2}", angle.to_degrees()))
        .collect();
    println!("[{}]", row_str.join(" "));
}

/// Print a one-line summary of a solve, then the final angles in degrees.
pub fn dump_report(report: &SolveReport) {
    println!(
        "{:?} after {} iterations, distance to target {:.6}",
        report.exit, report.iterations, report.fitness
    );
    print!("theta: ");
    dump_angles(report.theta());
    print!("alpha: ");
    dump_angles(report.alpha());
}
