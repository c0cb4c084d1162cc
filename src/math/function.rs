/// A real-valued function of one real variable.
///
/// Implementations must be pure with respect to repeated invocation: the
/// quadrature and sampling routines call `value` many times, possibly from
/// several threads, and rely on getting the same answer for the same x.
pub trait UnaryFunction {
    fn value(&self, x: f64) -> f64;
}

impl<F> UnaryFunction for F
    where F: Fn(f64) -> f64 {
    fn value(&self, x: f64) -> f64 {
        self(x)
    }
}
