/// Magnitude above which a sampled value is treated as a blow-up (e.g. near
/// an asymptote) and replaced by the undefined sentinel for plotting.
pub const PLOT_CLAMP_LIMIT: f64 = 1e6;

/// Undefined-value sentinel. serde_json serializes it as null, which is the
/// form the presentation layer expects in sample series.
pub const UNDEFINED: f64 = f64::NAN;

/// Clamp used when sampling for display: non-finite values and values with
/// magnitude above `PLOT_CLAMP_LIMIT` become the undefined sentinel.
///
/// Plotting only. Quadrature accumulators use raw values so that bad points
/// poison the sums instead of being silently skipped.
pub fn plot_value(y: f64) -> f64 {
    if y.is_finite() && y.abs() <= PLOT_CLAMP_LIMIT { y } else { UNDEFINED }
}
