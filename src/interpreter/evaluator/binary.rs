use std::fmt;

use tracing::debug;

use crate::interpreter::lexer::{Token, TokenKind};

/// The arithmetic operators understood by the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`
    Pow,
}

impl BinaryOperator {
    /// Returns `true` for the operators of the expression level, `+` and `-`.
    #[must_use]
    pub const fn is_additive(self) -> bool {
        matches!(self, Self::Add | Self::Sub)
    }

    /// Returns `true` for the operators of the term level, `*`, `/` and `^`.
    #[must_use]
    pub const fn is_multiplicative(self) -> bool {
        matches!(self, Self::Mul | Self::Div | Self::Pow)
    }

    /// Applies the operator to two operands.
    ///
    /// Follows IEEE 754 semantics throughout. Division by zero yields an
    /// infinity or NaN instead of failing, and `^` behaves like [`f64::powf`],
    /// so a negative base with a fractional exponent is NaN.
    ///
    /// # Example
    /// ```
    /// use rootcalc::interpreter::evaluator::binary::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Pow.apply(2.0, 10.0), 1024.0);
    /// assert!(BinaryOperator::Div.apply(1.0, 0.0).is_infinite());
    /// assert!(BinaryOperator::Div.apply(0.0, 0.0).is_nan());
    /// ```
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        let result = match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
            Self::Pow => left.powf(right),
        };
        debug!("operation: {left} {self} {right} = {result}");
        result
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        };
        f.write_str(symbol)
    }
}

/// Maps a token to its binary operator.
///
/// Returns `None` for every token that is not an `Operator`.
#[must_use]
pub fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    if token.kind != TokenKind::Operator {
        return None;
    }
    match token.text.as_str() {
        "+" => Some(BinaryOperator::Add),
        "-" => Some(BinaryOperator::Sub),
        "*" => Some(BinaryOperator::Mul),
        "/" => Some(BinaryOperator::Div),
        "^" => Some(BinaryOperator::Pow),
        _ => None,
    }
}
