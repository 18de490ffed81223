use tracing::trace;

use crate::{
    error::CalcResult,
    interpreter::{
        evaluator::{binary::token_to_binary_operator, core::Context},
        parser::{core::Cursor, factor::parse_factor},
    },
};

/// Parses addition and subtraction.
///
/// This is the lowest precedence level and the entry point for every
/// expression. Operators are left-associative.
///
/// The rule is: `expression := term (("+" | "-") term)*`
///
/// # Parameters
/// - `cursor`: Cursor positioned at the first token of the expression.
/// - `context`: Variable state used to resolve names.
///
/// # Returns
/// The value of the expression.
pub fn parse_expression(cursor: &mut Cursor<'_>, context: &Context) -> CalcResult<f64> {
    trace!(position = cursor.position(), "parsing expression");

    let mut left = parse_term(cursor, context)?;
    while let Some(op) = token_to_binary_operator(cursor.peek())
          && op.is_additive()
    {
        cursor.advance();
        let right = parse_term(cursor, context)?;
        left = op.apply(left, right);
    }
    Ok(left)
}

/// Parses multiplication, division and exponentiation.
///
/// All three operators share one precedence tier and associate to the left,
/// so `2 ^ 3 ^ 2` is `64` and `2 * 3 ^ 2` is `36`.
///
/// The rule is: `term := factor (("*" | "/" | "^") factor)*`
///
/// # Parameters
/// - `cursor`: Cursor positioned at the first token of the term.
/// - `context`: Variable state used to resolve names.
///
/// # Returns
/// The value of the term.
pub fn parse_term(cursor: &mut Cursor<'_>, context: &Context) -> CalcResult<f64> {
    trace!(position = cursor.position(), "parsing term");

    let mut left = parse_factor(cursor, context)?;
    while let Some(op) = token_to_binary_operator(cursor.peek())
          && op.is_multiplicative()
    {
        cursor.advance();
        let right = parse_factor(cursor, context)?;
        left = op.apply(left, right);
    }
    Ok(left)
}
