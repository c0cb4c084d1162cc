use serde::Serialize;

use crate::math::function::UnaryFunction;
use crate::math::safeeval;

/// Equal-length domain and codomain sequences for plotting. Codomain
/// entries may be the undefined sentinel (NaN, serialized as null) where
/// evaluation failed or blew up past the plot clamp limit.
#[derive(Clone, PartialEq, Serialize)]
pub struct SampleSeries {
    xs: Vec<f64>,
    ys: Vec<f64>
}

impl SampleSeries {
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
}

/// Samples `f` at `point_count + 1` equally spaced points from `a` to `b`
/// inclusive, clamping each image through the plot clamp (non-finite or
/// |y| > 1e6 becomes the undefined sentinel).
///
/// The clamp exists for display only; quadrature accumulators use raw
/// values. `point_count = 0` yields the single sample at `a`.
pub fn sample(f: &dyn UnaryFunction, a: f64, b: f64, point_count: usize) -> SampleSeries {
    if point_count == 0 {
        return SampleSeries { xs: vec![a], ys: vec![safeeval::plot_value(f.value(a))] };
    }
    let mut xs = Vec::with_capacity(point_count + 1);
    let mut ys = Vec::with_capacity(point_count + 1);
    for i in 0..=point_count {
        let x = a + (b - a) * i as f64 / point_count as f64;
        xs.push(x);
        ys.push(safeeval::plot_value(f.value(x)));
    }
    SampleSeries { xs, ys }
}

/// Axis-aligned rectangle between the x axis and a left-endpoint sample,
/// the visualization aid for the left-rule decomposition.
#[derive(Clone, Copy, PartialEq, Serialize)]
pub struct Rectangle {
    x0: f64,
    x1: f64,
    y0: f64,
    y1: f64
}

impl Rectangle {
    pub fn x0(&self) -> f64 {
        self.x0
    }

    pub fn x1(&self) -> f64 {
        self.x1
    }

    pub fn y0(&self) -> f64 {
        self.y0
    }

    pub fn y1(&self) -> f64 {
        self.y1
    }
}

/// One rectangle per subinterval of the left-rule decomposition:
/// y0 = min(0, f_l), y1 = max(0, f_l).
///
/// An undefined left sample gives NaN bounds (f64::min would silently
/// prefer the finite operand, hiding the failed evaluation from the plot).
pub fn left_rule_rectangles(
    f: &dyn UnaryFunction,
    a: f64,
    b: f64,
    subinterval_count: usize
) -> Vec<Rectangle> {
    if subinterval_count == 0 {
        return Vec::new();
    }
    let dx = (b - a) / subinterval_count as f64;
    (0..subinterval_count)
        .map(|i| {
            let x0 = a + i as f64 * dx;
            let x1 = a + (i + 1) as f64 * dx;
            let f_l = f.value(x0);
            let (y0, y1) = if f_l.is_nan() {
                (f64::NAN, f64::NAN)
            } else {
                (f_l.min(0.0), f_l.max(0.0))
            };
            Rectangle { x0, x1, y0, y1 }
        })
        .collect()
}
