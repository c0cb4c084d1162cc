use crate::logistic::histogram::Histogram;
use crate::logistic::trajectory::Trajectory;

/// Bin count used by the analysis layer.
pub const DEFAULT_BIN_COUNT: usize = 128;

/// Discretized entropy of an orbit: bins the iterates over [0,1] and
/// returns the Shannon entropy of the empirical bin distribution, in bits.
///
/// Always non-negative; 0.0 for an empty trajectory (or zero bins).
pub fn estimate(trajectory: &Trajectory, bin_count: usize) -> f64 {
    Histogram::from_values(trajectory.values(), bin_count).shannon_entropy_bits()
}
