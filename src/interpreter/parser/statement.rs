use tracing::debug;

use crate::{
    error::CalcResult,
    interpreter::{
        evaluator::core::{Context, Evaluation, Statement},
        lexer::TokenKind,
        parser::{binary::parse_expression, core::Cursor},
    },
};

/// Parses and evaluates a single statement.
///
/// A statement is one of:
/// - an assignment, `name = expression`, which stores the value;
/// - a print statement, `print expression`;
/// - a bare expression.
///
/// The form is decided by looking at most two tokens ahead. Tokens left over
/// after the expression are not consumed; the cursor is left on the first of
/// them.
///
/// # Parameters
/// - `cursor`: Cursor positioned at the start of the statement.
/// - `context`: Variable state, written by assignments.
///
/// # Returns
/// An [`Evaluation`] holding the value and the statement form.
pub fn parse_statement(cursor: &mut Cursor<'_>, context: &mut Context) -> CalcResult<Evaluation> {
    debug!(position = cursor.position(), "evaluating tokens");

    let evaluation = if cursor.peek().kind == TokenKind::Variable
                        && cursor.peek_next().kind == TokenKind::Equal
    {
        let name = cursor.advance().text.clone();
        cursor.advance();
        let value = parse_expression(cursor, context)?;
        context.set_variable(&name, value);
        Evaluation { statement: Statement::Assignment { name },
                     value }
    } else if cursor.eat(TokenKind::Print) {
        let value = parse_expression(cursor, context)?;
        debug!("print: {value}");
        Evaluation { statement: Statement::Print,
                     value }
    } else {
        let value = parse_expression(cursor, context)?;
        Evaluation { statement: Statement::Expression,
                     value }
    };

    if !cursor.at_end() {
        debug!(position = cursor.position(),
               token = %cursor.peek(),
               "ignoring trailing tokens");
    }

    Ok(evaluation)
}
