use serde::Serialize;

use crate::math::function::UnaryFunction;

/// Left, right and trapezoid Riemann estimates plus the step width used.
/// Each field may be non-finite; callers check finiteness independently.
#[derive(Clone, Copy, PartialEq, Serialize)]
pub struct QuadratureResult {
    left: f64,
    right: f64,
    trapezoid: f64,
    step_width: f64
}

impl QuadratureResult {
    /// The degenerate-input marker: all fields NaN.
    pub fn undefined() -> QuadratureResult {
        QuadratureResult {
            left: f64::NAN,
            right: f64::NAN,
            trapezoid: f64::NAN,
            step_width: f64::NAN
        }
    }

    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn right(&self) -> f64 {
        self.right
    }

    pub fn trapezoid(&self) -> f64 {
        self.trapezoid
    }

    pub fn step_width(&self) -> f64 {
        self.step_width
    }
}

/// Accumulates the three elementary Riemann estimates of the integral of
/// `f` over [a, b] with `subinterval_count` equal subintervals.
///
/// Per subinterval [x_l, x_r]: left += f(x_l)*dx, right += f(x_r)*dx,
/// trapezoid += 0.5*(f(x_l)+f(x_r))*dx, with dx = (b-a)/subinterval_count.
/// A non-finite sample poisons the affected accumulators for the rest of
/// the sum; the engine never skips bad points, callers check finiteness of
/// each estimate on their own. With b < a the step width is negative and
/// all three sums flip sign (signed integral).
///
/// `subinterval_count = 0` returns the all-NaN result.
pub fn integrate(
    f: &dyn UnaryFunction,
    a: f64,
    b: f64,
    subinterval_count: usize
) -> QuadratureResult {
    if subinterval_count == 0 {
        return QuadratureResult::undefined();
    }
    let dx = (b - a) / subinterval_count as f64;
    let mut left = 0.0;
    let mut right = 0.0;
    let mut trapezoid = 0.0;
    for i in 0..subinterval_count {
        let x_l = a + i as f64 * dx;
        let x_r = a + (i + 1) as f64 * dx;
        let f_l = f.value(x_l);
        let f_r = f.value(x_r);
        left += f_l * dx;
        right += f_r * dx;
        trapezoid += 0.5 * (f_l + f_r) * dx;
    }
    QuadratureResult { left, right, trapezoid, step_width: dx }
}
