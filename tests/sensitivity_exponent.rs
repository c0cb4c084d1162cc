use numexplore::logistic::mapparameters::MapParameters;
use numexplore::logistic::sensitivity;
use numexplore::logistic::trajectory::Trajectory;

#[test]
fn constant_zero_orbit_hits_the_log_guard() {
    // r = 0: every iterate is 0, the derivative term is 0, and each sample
    // contributes ln(0 + 1e-12) exactly.
    let trajectory = Trajectory::generate(&MapParameters::new(0.0, 0.3, 100, 0));
    let exponent = sensitivity::estimate(0.0, &trajectory);
    let expected = sensitivity::DERIVATIVE_LOG_GUARD.ln();
    assert!((exponent - expected).abs() < 1e-9);
}

#[test]
fn empty_trajectory_returns_nan() {
    let empty = Trajectory::new(Vec::new());
    assert!(sensitivity::estimate(3.8, &empty).is_nan());
}

#[test]
fn fully_chaotic_regime_is_positive() {
    // At r = 4 the exponent converges to ln 2 ~ 0.693.
    let params = MapParameters::new(4.0, 0.2, 5000, 500);
    let trajectory = Trajectory::generate(&params);
    let exponent = sensitivity::estimate(4.0, &trajectory);
    assert!(exponent > 0.4 && exponent < 0.9);
}

#[test]
fn periodic_regime_is_negative() {
    // r = 3.2 settles on a period-2 cycle; nearby orbits converge.
    let params = MapParameters::new(3.2, 0.2, 5000, 500);
    let trajectory = Trajectory::generate(&params);
    assert!(sensitivity::estimate(3.2, &trajectory) < 0.0);
}
