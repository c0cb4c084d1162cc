use numexplore::math::safeeval;
use numexplore::quadrature::sampleseries;

#[test]
fn series_has_point_count_plus_one_inclusive_samples() {
    let series = sampleseries::sample(&|x: f64| x, 0.0, 1.0, 10);
    assert_eq!(series.len(), 11);
    assert_eq!(series.xs()[0], 0.0);
    assert_eq!(series.xs()[10], 1.0);
    assert_eq!(series.ys()[5], 0.5);
}

#[test]
fn pole_becomes_the_undefined_sentinel() {
    // 1/x sampled across 0: the pole must come back as NaN, not +/-inf.
    let series = sampleseries::sample(&|x: f64| 1.0 / x, -1.0, 1.0, 2);
    assert_eq!(series.xs()[1], 0.0);
    assert!(series.ys()[1].is_nan());
    assert_eq!(series.ys()[0], -1.0);
    assert_eq!(series.ys()[2], 1.0);
}

#[test]
fn blow_ups_past_the_clamp_limit_become_undefined() {
    let series = sampleseries::sample(
        &|_: f64| 2.0 * safeeval::PLOT_CLAMP_LIMIT,
        0.0,
        1.0,
        4
    );
    assert!(series.ys().iter().all(|y| y.is_nan()));
}

#[test]
fn values_at_the_clamp_limit_survive() {
    let series = sampleseries::sample(&|_: f64| safeeval::PLOT_CLAMP_LIMIT, 0.0, 1.0, 2);
    assert!(series.ys().iter().all(|&y| y == safeeval::PLOT_CLAMP_LIMIT));
}

#[test]
fn zero_point_count_samples_only_the_left_bound() {
    let series = sampleseries::sample(&|x: f64| x + 1.0, 3.0, 9.0, 0);
    assert_eq!(series.len(), 1);
    assert_eq!(series.xs()[0], 3.0);
    assert_eq!(series.ys()[0], 4.0);
}

#[test]
fn left_rule_rectangles_span_axis_to_sample() {
    let rectangles = sampleseries::left_rule_rectangles(&|x: f64| x - 0.5, 0.0, 1.0, 2);
    assert_eq!(rectangles.len(), 2);
    // f(0) = -0.5: below the axis.
    assert_eq!(rectangles[0].y0(), -0.5);
    assert_eq!(rectangles[0].y1(), 0.0);
    // f(0.5) = 0.0: degenerate.
    assert_eq!(rectangles[1].x0(), 0.5);
    assert_eq!(rectangles[1].x1(), 1.0);
    assert_eq!(rectangles[1].y0(), 0.0);
    assert_eq!(rectangles[1].y1(), 0.0);
}

#[test]
fn undefined_left_sample_gives_nan_rectangle_bounds() {
    let rectangles = sampleseries::left_rule_rectangles(&|_: f64| f64::NAN, 0.0, 1.0, 1);
    assert!(rectangles[0].y0().is_nan());
    assert!(rectangles[0].y1().is_nan());
}
