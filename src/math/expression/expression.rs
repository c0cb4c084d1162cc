use thiserror::Error;

use crate::math::expression::parser;
use crate::math::function::UnaryFunction;
use crate::math::safeeval;

/// Why an expression source string failed to compile.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExpressionError {
    #[error("unexpected character '{character}' at byte {position}")]
    UnexpectedCharacter { character: char, position: usize },
    #[error("malformed number literal '{0}'")]
    MalformedNumber(String),
    #[error("unknown identifier '{0}'")]
    UnknownIdentifier(String),
    #[error("unknown function '{0}'")]
    UnknownFunction(String),
    #[error("unexpected {0}")]
    UnexpectedToken(String),
    #[error("unexpected end of expression")]
    UnexpectedEnd,
    #[error("trailing input starting at {0}")]
    TrailingInput(String),
    #[error("expression nested too deeply")]
    TooDeep
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    /// Right-associative; `2^3^2` parses as `2^(3^2)`.
    Power
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Negate
}

/// The fixed one-argument function set available to expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathFunction {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Exp,
    Ln,
    Log2,
    Log10,
    Sqrt,
    Cbrt,
    Abs,
    Floor,
    Ceil,
    Round,
    Signum
}

impl MathFunction {
    pub fn from_name(name: &str) -> Option<MathFunction> {
        match name {
            "sin" => Some(MathFunction::Sin),
            "cos" => Some(MathFunction::Cos),
            "tan" => Some(MathFunction::Tan),
            "asin" => Some(MathFunction::Asin),
            "acos" => Some(MathFunction::Acos),
            "atan" => Some(MathFunction::Atan),
            "sinh" => Some(MathFunction::Sinh),
            "cosh" => Some(MathFunction::Cosh),
            "tanh" => Some(MathFunction::Tanh),
            "exp" => Some(MathFunction::Exp),
            "ln" => Some(MathFunction::Ln),
            "log2" => Some(MathFunction::Log2),
            "log10" => Some(MathFunction::Log10),
            "sqrt" => Some(MathFunction::Sqrt),
            "cbrt" => Some(MathFunction::Cbrt),
            "abs" => Some(MathFunction::Abs),
            "floor" => Some(MathFunction::Floor),
            "ceil" => Some(MathFunction::Ceil),
            "round" => Some(MathFunction::Round),
            "signum" => Some(MathFunction::Signum),
            _ => None
        }
    }

    pub fn apply(&self, v: f64) -> f64 {
        match self {
            MathFunction::Sin => v.sin(),
            MathFunction::Cos => v.cos(),
            MathFunction::Tan => v.tan(),
            MathFunction::Asin => v.asin(),
            MathFunction::Acos => v.acos(),
            MathFunction::Atan => v.atan(),
            MathFunction::Sinh => v.sinh(),
            MathFunction::Cosh => v.cosh(),
            MathFunction::Tanh => v.tanh(),
            MathFunction::Exp => v.exp(),
            MathFunction::Ln => v.ln(),
            MathFunction::Log2 => v.log2(),
            MathFunction::Log10 => v.log10(),
            MathFunction::Sqrt => v.sqrt(),
            MathFunction::Cbrt => v.cbrt(),
            MathFunction::Abs => v.abs(),
            MathFunction::Floor => v.floor(),
            MathFunction::Ceil => v.ceil(),
            MathFunction::Round => v.round(),
            MathFunction::Signum => v.signum()
        }
    }
}

/// Immutable expression tree over one free variable.
///
/// Evaluation is plain float arithmetic over the tree: out-of-domain inputs
/// produce NaN or infinities per IEEE semantics, nothing panics, and the
/// tree carries no interior state, so a compiled expression can be invoked
/// repeatedly and concurrently.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Constant(f64),
    /// The free variable x.
    Variable,
    Unary(UnaryOp, Box<Expression>),
    Binary(BinaryOp, Box<Expression>, Box<Expression>),
    Call(MathFunction, Box<Expression>)
}

impl Expression {
    /// Strict compilation: reports why the source is malformed.
    pub fn parse(source: &str) -> Result<Expression, ExpressionError> {
        parser::parse(source)
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        match self {
            Expression::Constant(value) => *value,
            Expression::Variable => x,
            Expression::Unary(UnaryOp::Negate, inner) => -inner.evaluate(x),
            Expression::Binary(op, lhs, rhs) => {
                let l = lhs.evaluate(x);
                let r = rhs.evaluate(x);
                match op {
                    BinaryOp::Add => l + r,
                    BinaryOp::Subtract => l - r,
                    BinaryOp::Multiply => l * r,
                    BinaryOp::Divide => l / r,
                    BinaryOp::Power => l.powf(r)
                }
            },
            Expression::Call(function, argument) => function.apply(argument.evaluate(x))
        }
    }
}

impl UnaryFunction for Expression {
    fn value(&self, x: f64) -> f64 {
        self.evaluate(x)
    }
}

/// Total compilation result: a malformed source yields a function that
/// evaluates to the undefined sentinel for every input instead of an error,
/// so downstream quadrature and sampling never have to special-case it.
pub struct CompiledExpression {
    expression: Option<Expression>
}

impl CompiledExpression {
    pub fn compile(source: &str) -> CompiledExpression {
        CompiledExpression { expression: parser::parse(source).ok() }
    }

    pub fn is_valid(&self) -> bool {
        self.expression.is_some()
    }
}

impl UnaryFunction for CompiledExpression {
    fn value(&self, x: f64) -> f64 {
        match &self.expression {
            Some(expression) => expression.evaluate(x),
            None => safeeval::UNDEFINED
        }
    }
}
