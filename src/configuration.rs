use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::logistic::mapparameters::MapParameters;
use crate::quadrature::quadratureparameters::QuadratureParameters;

#[derive(Debug, Error)]
pub enum RequestError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error)
}

/// One computation request as submitted by the presentation layer: either
/// pipeline's parameter block, or both, in a single JSON document.
///
/// ```json
/// {
///     "logistic": { "r": 3.8, "x0": 0.123456, "n": 2000, "burn_in": 200 },
///     "quadrature": { "expression": "sin(1/x)", "a": 0.001, "b": 1.0,
///                     "subinterval_count": 200 }
/// }
/// ```
#[derive(Deserialize)]
pub struct AnalysisRequest {
    logistic: Option<MapParameters>,
    quadrature: Option<QuadratureParameters>
}

impl AnalysisRequest {
    pub fn from_json(text: &str) -> Result<AnalysisRequest, RequestError> {
        let request = serde_json::from_str(text)?;
        Ok(request)
    }

    pub fn from_reader(path: &Path) -> Result<AnalysisRequest, RequestError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let request = serde_json::from_reader(reader)?;
        Ok(request)
    }

    pub fn logistic(&self) -> Option<&MapParameters> {
        self.logistic.as_ref()
    }

    pub fn quadrature(&self) -> Option<&QuadratureParameters> {
        self.quadrature.as_ref()
    }
}
