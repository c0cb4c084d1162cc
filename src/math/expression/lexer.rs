use crate::math::expression::expression::ExpressionError;

/// Tokens of the expression grammar.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A decimal numeric literal.
    Number(f64),
    /// An identifier: the free variable, a named constant, or a function name.
    Ident(String),
    /// Addition operator: +
    Plus,
    /// Subtraction or negation operator: -
    Minus,
    /// Multiplication operator: *
    Star,
    /// Division operator: /
    Slash,
    /// Power operator: ^
    Caret,
    /// Left parenthesis: (
    LParen,
    /// Right parenthesis: )
    RParen
}

impl Token {
    /// Short description used in parse error messages.
    pub fn describe(&self) -> String {
        match self {
            Token::Number(value) => format!("number '{}'", value),
            Token::Ident(name) => format!("identifier '{}'", name),
            Token::Plus => "'+'".to_owned(),
            Token::Minus => "'-'".to_owned(),
            Token::Star => "'*'".to_owned(),
            Token::Slash => "'/'".to_owned(),
            Token::Caret => "'^'".to_owned(),
            Token::LParen => "'('".to_owned(),
            Token::RParen => "')'".to_owned()
        }
    }
}

/// Splits an expression source string into tokens.
///
/// Literals are plain decimal (digits and at most one dot); scientific
/// notation is written with the power operator instead, e.g. `1.5*10^-3`,
/// which keeps the lexer unambiguous around the constant `e`.
pub fn tokenize(source: &str) -> Result<Vec<Token>, ExpressionError> {
    let mut tokens = Vec::new();
    let mut chars = source.char_indices().peekable();

    while let Some(&(position, c)) = chars.peek() {
        match c {
            c if c.is_whitespace() => {
                chars.next();
            },
            '+' => {
                chars.next();
                tokens.push(Token::Plus);
            },
            '-' => {
                chars.next();
                tokens.push(Token::Minus);
            },
            '*' => {
                chars.next();
                tokens.push(Token::Star);
            },
            '/' => {
                chars.next();
                tokens.push(Token::Slash);
            },
            '^' => {
                chars.next();
                tokens.push(Token::Caret);
            },
            '(' => {
                chars.next();
                tokens.push(Token::LParen);
            },
            ')' => {
                chars.next();
                tokens.push(Token::RParen);
            },
            c if c.is_ascii_digit() || c == '.' => {
                let mut literal = String::new();
                while let Some(&(_, d)) = chars.peek() {
                    if d.is_ascii_digit() || d == '.' {
                        literal.push(d);
                        chars.next();
                    } else {
                        break;
                    }
                }
                let value = literal
                    .parse::<f64>()
                    .map_err(|_| ExpressionError::MalformedNumber(literal.clone()))?;
                tokens.push(Token::Number(value));
            },
            c if c.is_ascii_alphabetic() || c == '_' => {
                let mut name = String::new();
                while let Some(&(_, d)) = chars.peek() {
                    if d.is_ascii_alphanumeric() || d == '_' {
                        name.push(d);
                        chars.next();
                    } else {
                        break;
                    }
                }
                tokens.push(Token::Ident(name));
            },
            _ => {
                return Err(ExpressionError::UnexpectedCharacter { character: c, position });
            }
        }
    }
    Ok(tokens)
}
