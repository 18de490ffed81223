use clap::ValueEnum;

/// Prompt shown before every line when none is configured.
pub const DEFAULT_PROMPT: &str = "Enter an expression or 'exit' to finish: ";

/// The line that ends a session.
pub const EXIT_COMMAND: &str = "exit";

/// What a session does after a line fails to evaluate.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Report the error and end the process with a failure status.
    #[default]
    Terminate,
    /// Report the error and read the next line.
    Continue,
}

impl ErrorPolicy {
    /// Returns `true` if an error ends the session.
    #[must_use]
    pub const fn is_fatal(self) -> bool {
        matches!(self, Self::Terminate)
    }
}

/// Runtime settings of an interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Reaction to a failing line.
    pub on_error: ErrorPolicy,
    /// Whether step-by-step evaluation traces are logged.
    pub trace:    bool,
    /// Text shown before each line is read.
    pub prompt:   String,
}

impl Default for Config {
    fn default() -> Self {
        Self { on_error: ErrorPolicy::default(),
               trace:    false,
               prompt:   DEFAULT_PROMPT.to_string(), }
    }
}
