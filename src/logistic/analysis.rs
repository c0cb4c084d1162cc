use serde::Serialize;

use crate::logistic::entropy;
use crate::logistic::mapparameters::MapParameters;
use crate::logistic::sensitivity;
use crate::logistic::trajectory::Trajectory;

/// Everything the trajectory pipeline derives from one parameter set.
#[derive(Serialize)]
pub struct LogisticAnalysis {
    trajectory: Trajectory,
    sensitivity: f64,
    entropy: f64
}

impl LogisticAnalysis {
    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    pub fn sensitivity(&self) -> f64 {
        self.sensitivity
    }

    pub fn entropy(&self) -> f64 {
        self.entropy
    }
}

/// Runs the full trajectory pipeline: orbit generation, sensitivity
/// exponent, entropy estimate (at the default bin count).
pub fn analyze(params: &MapParameters) -> LogisticAnalysis {
    let trajectory = Trajectory::generate(params);
    let sensitivity = sensitivity::estimate(params.r(), &trajectory);
    let entropy = entropy::estimate(&trajectory, entropy::DEFAULT_BIN_COUNT);
    LogisticAnalysis { trajectory, sensitivity, entropy }
}
