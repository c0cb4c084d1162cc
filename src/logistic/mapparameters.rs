use serde::Deserialize;

/// Parameters of a logistic-family orbit computation.
///
/// `x0` in (0,1) and `r` in [2.5, 4.0] are the recommended ranges but are
/// deliberately not enforced: the map is allowed to diverge, and downstream
/// estimators handle the non-finite values that result.
#[derive(Clone, Copy, PartialEq, Deserialize)]
pub struct MapParameters {
    r: f64,
    x0: f64,
    n: usize,
    burn_in: usize
}

impl MapParameters {
    pub fn new(r: f64, x0: f64, n: usize, burn_in: usize) -> MapParameters {
        MapParameters { r, x0, n, burn_in }
    }

    pub fn r(&self) -> f64 {
        self.r
    }

    pub fn x0(&self) -> f64 {
        self.x0
    }

    /// Number of iterates kept after burn-in.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Number of initial iterates discarded before sampling.
    pub fn burn_in(&self) -> usize {
        self.burn_in
    }
}
