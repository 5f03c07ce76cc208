use std::fmt;

use crate::interpreter::lexer::Token;

/// Binary arithmetic operators, grouped by precedence level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl BinaryOperator {
    /// Maps an additive token (`+`, `-`) to its operator.
    ///
    /// # Example
    /// ```
    /// use arithex::interpreter::{evaluator::binary::BinaryOperator, lexer::Token};
    ///
    /// assert_eq!(BinaryOperator::additive(Token::Minus), Some(BinaryOperator::Sub));
    /// assert_eq!(BinaryOperator::additive(Token::Star), None);
    /// ```
    #[must_use]
    pub const fn additive(token: Token) -> Option<Self> {
        match token {
            Token::Plus => Some(Self::Add),
            Token::Minus => Some(Self::Sub),
            _ => None,
        }
    }

    /// Maps a multiplicative token (`*`, `/`) to its operator.
    #[must_use]
    pub const fn multiplicative(token: Token) -> Option<Self> {
        match token {
            Token::Star => Some(Self::Mul),
            Token::Slash => Some(Self::Div),
            _ => None,
        }
    }

    /// Applies the operator to two operands.
    ///
    /// Division is plain `f64` division, so a zero divisor gives an infinity
    /// or `NaN` rather than an error.
    ///
    /// # Example
    /// ```
    /// use arithex::interpreter::evaluator::binary::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Mul.apply(1.5, 2.0), 3.0);
    /// assert!(BinaryOperator::Div.apply(1.0, 0.0).is_infinite());
    /// assert!(BinaryOperator::Div.apply(0.0, 0.0).is_nan());
    /// ```
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
        }
    }
}

/// Writes the operator's symbol.
///
/// # Example
/// ```
/// use arithex::interpreter::evaluator::binary::BinaryOperator;
///
/// assert_eq!(BinaryOperator::Sub.to_string(), "-");
/// assert_eq!(format!("3 {} 4", BinaryOperator::Div), "3 / 4");
/// ```
impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{symbol}")
    }
}
