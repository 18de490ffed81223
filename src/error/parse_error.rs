/// Represents all errors that can occur while reading tokens.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Found a token that cannot start a factor.
    #[error("Unexpected token {token} at index {position}.")]
    UnexpectedToken {
        /// The token encountered, as displayed to the user.
        token:    String,
        /// Index of the token in the line.
        position: usize,
    },
    /// A parenthesized group or function argument is missing its `)`.
    #[error("Unclosed parenthesis: expected ')' at index {position}.")]
    UnclosedParenthesis {
        /// Index where `)` was expected.
        position: usize,
    },
    /// A function name was not followed by `(`.
    #[error("Expected '(' after '{function}' at index {position}.")]
    ExpectedOpenParen {
        /// The function name.
        function: String,
        /// Index where `(` was expected.
        position: usize,
    },
    /// A numeric literal could not be converted to a number, e.g. `1.2.3`.
    #[error("Malformed number '{literal}' at index {position}.")]
    NumberFormat {
        /// The literal text as scanned.
        literal:  String,
        /// Index of the literal in the line.
        position: usize,
    },
    /// Parentheses or function calls are nested too deeply to evaluate.
    #[error("Expression nested too deeply at index {position}.")]
    NestingTooDeep {
        /// Index of the group that went over the limit.
        position: usize,
    },
}

impl ParseError {
    /// The index of the token at which the error was detected.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedToken { position, .. }
            | Self::UnclosedParenthesis { position }
            | Self::ExpectedOpenParen { position, .. }
            | Self::NumberFormat { position, .. }
            | Self::NestingTooDeep { position } => *position,
        }
    }
}
