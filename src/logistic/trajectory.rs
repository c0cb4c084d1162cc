use serde::Serialize;

use crate::logistic::mapparameters::MapParameters;

/// Post-burn-in iterates of the logistic map, in iteration order.
///
/// Serializes transparently as a plain array of values.
#[derive(Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Trajectory {
    values: Vec<f64>
}

impl Trajectory {
    pub fn new(values: Vec<f64>) -> Trajectory {
        Trajectory { values }
    }

    /// Iterates x <- r*x*(1-x) for `burn_in + n` steps starting from `x0`,
    /// discards the first `burn_in` iterates and keeps the remaining `n`.
    ///
    /// Deterministic for identical parameters. Values leaving [0,1] are not
    /// clamped; a diverging map produces non-finite iterates and those are
    /// propagated as-is.
    pub fn generate(params: &MapParameters) -> Trajectory {
        let mut values = Vec::with_capacity(params.n());
        let mut x = params.x0();
        for i in 0..(params.burn_in() + params.n()) {
            x = params.r() * x * (1.0 - x);
            if i >= params.burn_in() {
                values.push(x);
            }
        }
        Trajectory { values }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
