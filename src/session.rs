use std::fmt;

use tracing::debug;

use crate::{
    config::{EXIT_COMMAND, ErrorPolicy},
    error::CalcError,
    interpreter::{
        evaluator::core::{Context, Evaluation},
        lexer::tokenize,
        parser::core::Cursor,
    },
};

/// The response of a session to one input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// The user asked to leave.
    Exit,
    /// The line held nothing to evaluate.
    InvalidInput,
    /// The line was evaluated.
    Value(Evaluation),
    /// The line failed to evaluate.
    Error(CalcError),
}

impl Reply {
    /// Returns `true` if the session should stop after this reply under
    /// `policy`.
    #[must_use]
    pub const fn ends_session(&self, policy: ErrorPolicy) -> bool {
        match self {
            Self::Exit => true,
            Self::Error(_) => policy.is_fatal(),
            Self::InvalidInput | Self::Value(_) => false,
        }
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exit => Ok(()),
            Self::InvalidInput => write!(f, "Invalid input."),
            Self::Value(evaluation) => write!(f, "{evaluation}"),
            Self::Error(e) => write!(f, "Error: {e}"),
        }
    }
}

/// An interactive calculator session.
///
/// Holds the variables shared by all lines and the error policy that decides
/// whether a failing line ends the session.
///
/// # Example
/// ```
/// use rootcalc::{
///     config::ErrorPolicy,
///     session::{Reply, Session},
/// };
///
/// let mut session = Session::new(ErrorPolicy::Continue);
/// session.process("r = root(16)");
///
/// let Reply::Value(evaluation) = session.process("r * 2") else {
///     panic!("expected a value");
/// };
/// assert_eq!(evaluation.value, 8.0);
/// assert_eq!(session.process("exit"), Reply::Exit);
/// ```
#[derive(Debug, Default)]
pub struct Session {
    context: Context,
    policy:  ErrorPolicy,
}

impl Session {
    /// Creates a session with no variables.
    #[must_use]
    pub fn new(policy: ErrorPolicy) -> Self {
        Self { context: Context::new(),
               policy }
    }

    /// The error policy of this session.
    #[must_use]
    pub const fn policy(&self) -> ErrorPolicy {
        self.policy
    }

    /// The variable state of this session.
    #[must_use]
    pub const fn context(&self) -> &Context {
        &self.context
    }

    /// Handles one line of input.
    ///
    /// The exit command must match exactly; surrounding whitespace makes it an
    /// ordinary (and undefined) variable reference. A line without any tokens
    /// is reported as invalid input and never reaches the evaluator.
    pub fn process(&mut self, line: &str) -> Reply {
        if line == EXIT_COMMAND {
            return Reply::Exit;
        }

        let tokens = tokenize(line);
        if tokens.len() == 1 {
            return Reply::InvalidInput;
        }

        let mut cursor = Cursor::new(&tokens);
        match self.context.evaluate_statement(&mut cursor) {
            Ok(evaluation) => Reply::Value(evaluation),
            Err(e) => {
                debug!(position = e.position(), "line failed: {e}");
                Reply::Error(e)
            },
        }
    }
}
