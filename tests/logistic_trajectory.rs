use numexplore::logistic::mapparameters::MapParameters;
use numexplore::logistic::trajectory::Trajectory;

#[test]
fn r_zero_gives_constant_zero_orbit() {
    let params = MapParameters::new(0.0, 0.7, 50, 10);
    let trajectory = Trajectory::generate(&params);
    assert_eq!(trajectory.len(), 50);
    assert!(trajectory.values().iter().all(|&x| x == 0.0));
}

#[test]
fn generation_is_deterministic() {
    let params = MapParameters::new(3.8, 0.123456, 2000, 200);
    let first = Trajectory::generate(&params);
    let second = Trajectory::generate(&params);
    assert_eq!(first.len(), second.len());
    for (a, b) in first.values().iter().zip(second.values()) {
        assert_eq!(a.to_bits(), b.to_bits());
    }
}

#[test]
fn burn_in_discards_leading_iterates() {
    let all = Trajectory::generate(&MapParameters::new(3.5, 0.2, 30, 0));
    let tail = Trajectory::generate(&MapParameters::new(3.5, 0.2, 20, 10));
    assert_eq!(&all.values()[10..], tail.values());
}

#[test]
fn zero_n_gives_empty_trajectory() {
    let trajectory = Trajectory::generate(&MapParameters::new(3.8, 0.5, 0, 100));
    assert!(trajectory.is_empty());
}

#[test]
fn divergent_map_propagates_non_finite_values() {
    // r = 5.0 leaves [0,1] immediately and runs off to -inf; the engine
    // must not clamp.
    let trajectory = Trajectory::generate(&MapParameters::new(5.0, 0.6, 100, 0));
    assert!(!trajectory.values().last().unwrap().is_finite());
}
