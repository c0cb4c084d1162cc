use crate::logistic::trajectory::Trajectory;

/// Guard added inside the logarithm so that x = 0.5 exactly (where the
/// map derivative r*(1-2x) vanishes) yields ln(1e-12) instead of -inf.
pub const DERIVATIVE_LOG_GUARD: f64 = 1e-12;

/// Estimates the sensitivity exponent of an orbit: the mean of
/// ln(|r*(1-2x)| + guard) over all iterates.
///
/// This is a Lyapunov-type exponent specific to the logistic family (the
/// derivative of r*x*(1-x) is r*(1-2x)), not a general Jacobian estimator.
/// A positive value conventionally signals sensitive dependence on initial
/// conditions; no classification happens here, only the number is returned.
///
/// Returns NaN for an empty trajectory.
pub fn estimate(r: f64, trajectory: &Trajectory) -> f64 {
    if trajectory.is_empty() {
        return f64::NAN;
    }
    let sum: f64 = trajectory
        .values()
        .iter()
        .map(|&x| ((r * (1.0 - 2.0 * x)).abs() + DERIVATIVE_LOG_GUARD).ln())
        .sum();
    sum / trajectory.len() as f64
}
