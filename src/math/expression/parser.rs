use std::iter::Peekable;
use std::slice::Iter;

use crate::math::expression::expression::{
    BinaryOp,
    Expression,
    ExpressionError,
    MathFunction,
    UnaryOp
};
use crate::math::expression::lexer::{
    tokenize,
    Token
};

/// Maximum depth of a parsed expression tree. Parse recursion, evaluation
/// recursion and the generated drop glue all recurse once per tree level,
/// and a flat operator chain builds a left-leaning tree one level deeper
/// per operator, so accumulated operators count toward this cap alongside
/// nesting. Nothing deeper than the cap ever leaves the parser.
pub const MAX_NESTING_DEPTH: usize = 64;

/// Grammar:
///
/// ```text
/// expression := term (('+' | '-') term)*
/// term       := unary (('*' | '/') unary)*
/// unary      := '-' unary | power
/// power      := atom ('^' unary)?          right-associative
/// atom       := number | identifier | identifier '(' expression ')'
///             | '(' expression ')'
/// ```
///
/// Identifiers resolve to the free variable `x`, the constants `pi`, `e`
/// and `tau`, or a name in the fixed function set.
pub fn parse(source: &str) -> Result<Expression, ExpressionError> {
    let tokens = tokenize(source)?;
    let mut parser = Parser { tokens: tokens.iter().peekable() };
    let expression = parser.expression(0)?;
    match parser.tokens.next() {
        Some(token) => Err(ExpressionError::TrailingInput(token.describe())),
        None => Ok(expression)
    }
}

struct Parser<'a> {
    tokens: Peekable<Iter<'a, Token>>
}

impl<'a> Parser<'a> {
    fn expression(&mut self, depth: usize) -> Result<Expression, ExpressionError> {
        if depth > MAX_NESTING_DEPTH {
            return Err(ExpressionError::TooDeep);
        }
        let mut lhs = self.term(depth + 1)?;
        // Each accumulated operator deepens the left-leaning tree by one
        // level, so the chain length draws on the same depth budget.
        let mut tree_depth = depth;
        loop {
            let op = match self.tokens.peek() {
                Some(Token::Plus) => BinaryOp::Add,
                Some(Token::Minus) => BinaryOp::Subtract,
                _ => break
            };
            self.tokens.next();
            tree_depth += 1;
            if tree_depth > MAX_NESTING_DEPTH {
                return Err(ExpressionError::TooDeep);
            }
            let rhs = self.term(depth + 1)?;
            lhs = Expression::Binary(op, Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    fn term(&mut self, depth: usize) -> Result<Expression, ExpressionError> {
        if depth > MAX_NESTING_DEPTH {
            return Err(ExpressionError::TooDeep);
        }
        let mut lhs = self.unary(depth + 1)?;
        let mut tree_depth = depth;
        loop {
            let op = match self.tokens.peek() {
                Some(Token::Star) => BinaryOp::Multiply,
                Some(Token::Slash) => BinaryOp::Divide,
                _ => break
            };
            self.tokens.next();
            tree_depth += 1;
            if tree_depth > MAX_NESTING_DEPTH {
                return Err(ExpressionError::TooDeep);
            }
            let rhs = self.unary(depth + 1)?;
            lhs = Expression::Binary(op, Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    fn unary(&mut self, depth: usize) -> Result<Expression, ExpressionError> {
        if depth > MAX_NESTING_DEPTH {
            return Err(ExpressionError::TooDeep);
        }
        if let Some(Token::Minus) = self.tokens.peek() {
            self.tokens.next();
            let inner = self.unary(depth + 1)?;
            Ok(Expression::Unary(UnaryOp::Negate, Box::new(inner)))
        } else {
            self.power(depth + 1)
        }
    }

    fn power(&mut self, depth: usize) -> Result<Expression, ExpressionError> {
        if depth > MAX_NESTING_DEPTH {
            return Err(ExpressionError::TooDeep);
        }
        let base = self.atom(depth + 1)?;
        if let Some(Token::Caret) = self.tokens.peek() {
            self.tokens.next();
            // Right-associative exponent; also admits '2^-3'.
            let exponent = self.unary(depth + 1)?;
            Ok(Expression::Binary(
                BinaryOp::Power,
                Box::new(base),
                Box::new(exponent)
            ))
        } else {
            Ok(base)
        }
    }

    fn atom(&mut self, depth: usize) -> Result<Expression, ExpressionError> {
        if depth > MAX_NESTING_DEPTH {
            return Err(ExpressionError::TooDeep);
        }
        match self.tokens.next() {
            Some(Token::Number(value)) => Ok(Expression::Constant(*value)),
            Some(Token::Ident(name)) => self.resolve_ident(name, depth),
            Some(Token::LParen) => {
                let inner = self.expression(depth + 1)?;
                self.expect_rparen()?;
                Ok(inner)
            },
            Some(token) => Err(ExpressionError::UnexpectedToken(token.describe())),
            None => Err(ExpressionError::UnexpectedEnd)
        }
    }

    fn resolve_ident(&mut self, name: &str, depth: usize) -> Result<Expression, ExpressionError> {
        if let Some(Token::LParen) = self.tokens.peek() {
            let function = MathFunction::from_name(name)
                .ok_or_else(|| ExpressionError::UnknownFunction(name.to_owned()))?;
            self.tokens.next();
            let argument = self.expression(depth + 1)?;
            self.expect_rparen()?;
            Ok(Expression::Call(function, Box::new(argument)))
        } else {
            match name {
                "x" => Ok(Expression::Variable),
                "pi" => Ok(Expression::Constant(std::f64::consts::PI)),
                "e" => Ok(Expression::Constant(std::f64::consts::E)),
                "tau" => Ok(Expression::Constant(std::f64::consts::TAU)),
                _ => Err(ExpressionError::UnknownIdentifier(name.to_owned()))
            }
        }
    }

    fn expect_rparen(&mut self) -> Result<(), ExpressionError> {
        match self.tokens.next() {
            Some(Token::RParen) => Ok(()),
            Some(token) => Err(ExpressionError::UnexpectedToken(token.describe())),
            None => Err(ExpressionError::UnexpectedEnd)
        }
    }
}
