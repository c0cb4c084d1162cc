use serde::Serialize;

use crate::math::expression::expression::CompiledExpression;
use crate::quadrature::quadratureparameters::QuadratureParameters;
use crate::quadrature::riemann;
use crate::quadrature::riemann::QuadratureResult;
use crate::quadrature::sampleseries;
use crate::quadrature::sampleseries::{
    Rectangle,
    SampleSeries
};

/// Point count of the display series produced by the analysis layer.
pub const SAMPLE_POINT_COUNT: usize = 800;

/// Everything the quadrature pipeline derives from one parameter set.
#[derive(Clone, PartialEq, Serialize)]
pub struct QuadratureAnalysis {
    result: QuadratureResult,
    series: SampleSeries,
    rectangles: Vec<Rectangle>
}

impl QuadratureAnalysis {
    pub fn result(&self) -> &QuadratureResult {
        &self.result
    }

    pub fn series(&self) -> &SampleSeries {
        &self.series
    }

    pub fn rectangles(&self) -> &[Rectangle] {
        &self.rectangles
    }
}

/// Compiles the expression once and runs the three products off the same
/// compiled function: the integral estimates, the clamped display series,
/// and the left-rule rectangle decomposition.
///
/// A malformed expression is not an error here: the compiled fallback
/// evaluates to the undefined sentinel everywhere, so the estimates come
/// back NaN and the series comes back entirely undefined.
pub fn analyze(params: &QuadratureParameters) -> QuadratureAnalysis {
    let f = CompiledExpression::compile(params.expression());
    let result = riemann::integrate(&f, params.a(), params.b(), params.subinterval_count());
    let series = sampleseries::sample(&f, params.a(), params.b(), SAMPLE_POINT_COUNT);
    let rectangles = sampleseries::left_rule_rectangles(
        &f,
        params.a(),
        params.b(),
        params.subinterval_count()
    );
    QuadratureAnalysis { result, series, rectangles }
}
