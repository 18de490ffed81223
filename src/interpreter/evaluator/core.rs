use std::{collections::HashMap, fmt};

use tracing::debug;

use crate::{
    error::{CalcResult, RuntimeError},
    interpreter::{
        lexer::Token,
        parser::{core::Cursor, statement::parse_statement},
    },
};

/// Result type used by the evaluator.
///
/// Evaluation helpers return either a value of type `T` or a `RuntimeError`
/// describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Which form a line took.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `name = expression`
    Assignment {
        /// The variable that was written.
        name: String,
    },
    /// `print expression`
    Print,
    /// A bare expression.
    Expression,
}

/// The outcome of evaluating one statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// The form of the statement.
    pub statement: Statement,
    /// The value the statement produced.
    pub value:     f64,
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.statement {
            Statement::Print => write!(f, "Print: {}", self.value),
            Statement::Assignment { .. } | Statement::Expression => {
                write!(f, "Result: {}", self.value)
            },
        }
    }
}

/// Stores the runtime evaluation context.
///
/// The context owns the variable mapping. Variables are created or overwritten
/// by assignment statements and live as long as the context does; nothing ever
/// removes them.
///
/// ## Usage
///
/// A `Context` is created once per session and passed to every evaluation, so
/// a variable assigned on one line can be read on the next.
#[derive(Debug, Default, Clone)]
pub struct Context {
    variables: HashMap<String, f64>,
}

impl Context {
    /// Creates a context with no variables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of a variable, if it was ever assigned.
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<f64> {
        self.variables.get(name).copied()
    }

    /// Stores a value under `name`, replacing any earlier value.
    pub fn set_variable(&mut self, name: &str, value: f64) {
        debug!("assignment: {name} = {value}");
        self.variables.insert(name.to_string(), value);
    }

    /// All assigned variables.
    #[must_use]
    pub const fn variables(&self) -> &HashMap<String, f64> {
        &self.variables
    }

    /// Reads a variable that a factor refers to.
    ///
    /// # Errors
    /// `UndefinedVariable` if `name` was never assigned. There is no default
    /// value.
    pub fn lookup_variable(&self, name: &str, position: usize) -> EvalResult<f64> {
        let value =
            self.get_variable(name)
                .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string(),
                                                                 position })?;
        debug!("variable: {name} = {value}");
        Ok(value)
    }

    /// Evaluates a tokenized line starting at `*position`.
    ///
    /// On return `*position` holds the index of the first token that was not
    /// consumed, which is `End` for a complete line.
    ///
    /// # Example
    /// ```
    /// use rootcalc::interpreter::{evaluator::core::Context, lexer::tokenize};
    ///
    /// let mut context = Context::new();
    /// let tokens = tokenize("x = 2 + 3 * 4");
    /// let mut position = 0;
    ///
    /// assert_eq!(context.evaluate(&tokens, &mut position).unwrap(), 14.0);
    /// assert_eq!(position, tokens.len() - 1);
    /// assert_eq!(context.get_variable("x"), Some(14.0));
    /// ```
    pub fn evaluate(&mut self, tokens: &[Token], position: &mut usize) -> CalcResult<f64> {
        let mut cursor = Cursor::at(tokens, *position);
        let result = self.evaluate_statement(&mut cursor);
        *position = cursor.position();
        result.map(|evaluation| evaluation.value)
    }

    /// Evaluates one statement at the cursor and reports which form it took.
    pub fn evaluate_statement(&mut self, cursor: &mut Cursor<'_>) -> CalcResult<Evaluation> {
        parse_statement(cursor, self)
    }
}
