use serde::Deserialize;

fn clamp_subinterval_count(count: usize) -> usize {
    count.max(1)
}

/// Parameters of a quadrature computation over a user-supplied expression.
///
/// `subinterval_count` is clamped to at least 1 at construction and during
/// deserialization. `b < a` is allowed and gives signed-integral semantics:
/// the step width comes out negative and the sums flip sign.
#[derive(Clone, PartialEq, Deserialize)]
pub struct QuadratureParameters {
    expression: String,
    a: f64,
    b: f64,
    #[serde(deserialize_with = "deserialize_subinterval_count")]
    subinterval_count: usize
}

fn deserialize_subinterval_count<'de, D>(deserializer: D) -> Result<usize, D::Error>
    where D: serde::Deserializer<'de> {
    let count = usize::deserialize(deserializer)?;
    Ok(clamp_subinterval_count(count))
}

impl QuadratureParameters {
    pub fn new(expression: String, a: f64, b: f64, subinterval_count: usize) -> QuadratureParameters {
        QuadratureParameters {
            expression,
            a,
            b,
            subinterval_count: clamp_subinterval_count(subinterval_count)
        }
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn subinterval_count(&self) -> usize {
        self.subinterval_count
    }
}
