use tracing::{debug, trace};

use crate::{
    error::{CalcResult, ParseError},
    interpreter::{
        evaluator::{core::Context, function::BuiltinFunction},
        lexer::TokenKind,
        parser::{binary::parse_expression, core::Cursor},
    },
};

/// Parses a factor, the highest precedence level.
///
/// Factors are:
/// - numeric literals
/// - variables
/// - parenthesized expressions
/// - calls of the built-in function, `root(expression)`
///
/// Grammar:
/// ```text
///     factor := number
///             | variable
///             | "(" expression ")"
///             | function "(" expression ")"
/// ```
///
/// # Errors
/// - `UnexpectedToken` for any other token, including `End`, stray operators
///   and invalid characters.
/// - `NestingTooDeep` past `MAX_NESTING_DEPTH` open groups.
/// - `UndefinedVariable` for a name that was never assigned.
/// - Errors from the nested expression and the function.
pub fn parse_factor(cursor: &mut Cursor<'_>, context: &Context) -> CalcResult<f64> {
    trace!(position = cursor.position(), "parsing factor");

    let token = cursor.peek();
    match token.kind {
        TokenKind::Number => parse_number(cursor),
        TokenKind::Variable => {
            let value = context.lookup_variable(&token.text, cursor.position())?;
            cursor.advance();
            Ok(value)
        },
        TokenKind::ParenOpen => parse_grouping(cursor, context),
        TokenKind::Function => parse_function_call(cursor, context),
        _ => Err(ParseError::UnexpectedToken { token:    token.to_string(),
                                               position: cursor.position(), }.into()),
    }
}

/// Converts a number token to its value.
///
/// The lexer accepts any run of digits and dots, so the text is validated
/// here. A literal with more than one dot, or made only of dots, fails.
fn parse_number(cursor: &mut Cursor<'_>) -> CalcResult<f64> {
    let position = cursor.position();
    let literal = &cursor.advance().text;
    let value = literal.parse::<f64>()
                       .map_err(|_| ParseError::NumberFormat { literal: literal.clone(),
                                                               position })?;
    debug!("number: {value}");
    Ok(value)
}

/// Parses `"(" expression ")"`.
fn parse_grouping(cursor: &mut Cursor<'_>, context: &Context) -> CalcResult<f64> {
    cursor.enter_group()?;
    cursor.advance();
    let value = parse_expression(cursor, context)?;
    expect_closing_paren(cursor)?;
    cursor.leave_group();
    Ok(value)
}

/// Parses `function "(" expression ")"` and applies the function.
fn parse_function_call(cursor: &mut Cursor<'_>, context: &Context) -> CalcResult<f64> {
    let position = cursor.position();
    cursor.enter_group()?;
    let token = cursor.advance();
    let Some(function) = BuiltinFunction::from_name(&token.text) else {
        return Err(ParseError::UnexpectedToken { token: token.to_string(),
                                                 position }.into());
    };

    if !cursor.eat(TokenKind::ParenOpen) {
        return Err(ParseError::ExpectedOpenParen { function: function.name().to_string(),
                                                   position: cursor.position(), }.into());
    }
    let argument = parse_expression(cursor, context)?;
    expect_closing_paren(cursor)?;
    cursor.leave_group();

    Ok(function.apply(argument, position)?)
}

fn expect_closing_paren(cursor: &mut Cursor<'_>) -> Result<(), ParseError> {
    if cursor.eat(TokenKind::ParenClose) {
        Ok(())
    } else {
        Err(ParseError::UnclosedParenthesis { position: cursor.position() })
    }
}
