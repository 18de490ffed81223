/// Parsing errors.
///
/// Defines the errors raised while reading the token sequence: tokens that
/// cannot start a factor, missing delimiters and malformed numeric literals.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while computing values: reads of variables that
/// were never assigned and square roots of negative numbers.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any error produced while evaluating a line.
///
/// Parsing and evaluation happen in the same pass, so every grammar function
/// can fail with either kind.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalcError {
    /// The line is not well formed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The line is well formed but cannot be computed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl CalcError {
    /// The index of the token at which the error was detected.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Parse(e) => e.position(),
            Self::Runtime(e) => e.position(),
        }
    }
}

/// Result type shared by the grammar functions.
pub type CalcResult<T> = Result<T, CalcError>;
