/// Represents all errors that can occur while computing a value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RuntimeError {
    /// Tried to read a variable that was never assigned.
    #[error("Undefined variable '{name}'.")]
    UndefinedVariable {
        /// The name of the variable.
        name:     String,
        /// Index of the variable token in the line.
        position: usize,
    },
    /// `root` was applied to a negative number.
    #[error("Square root of negative number {value}.")]
    NegativeRoot {
        /// The offending argument.
        value:    f64,
        /// Index of the function token in the line.
        position: usize,
    },
}

impl RuntimeError {
    /// The index of the token at which the error was detected.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UndefinedVariable { position, .. } | Self::NegativeRoot { position, .. } => {
                *position
            },
        }
    }
}
