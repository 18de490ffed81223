use tracing::debug;

use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// The built-in functions. There is exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinFunction {
    /// `root(x)`, the non-negative square root.
    Root,
}

impl BuiltinFunction {
    /// Looks up a function by name. Case-sensitive.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "root" => Some(Self::Root),
            _ => None,
        }
    }

    /// The name the function is called by.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Root => "root",
        }
    }

    /// Calls the function on its argument.
    ///
    /// # Parameters
    /// - `argument`: The evaluated argument.
    /// - `position`: Index of the function token, for error reporting.
    pub fn apply(self, argument: f64, position: usize) -> EvalResult<f64> {
        let result = match self {
            Self::Root => root(argument, position)?,
        };
        debug!("function: {}({argument}) = {result}", self.name());
        Ok(result)
    }
}

/// Computes the square root of a non-negative number.
///
/// NaN is not negative and passes through as NaN.
///
/// # Errors
/// `NegativeRoot` if `value` is below zero.
///
/// # Example
/// ```
/// use rootcalc::interpreter::evaluator::function::root;
///
/// assert_eq!(root(9.0, 0).unwrap(), 3.0);
/// assert!(root(-4.0, 0).is_err());
/// ```
pub fn root(value: f64, position: usize) -> EvalResult<f64> {
    if value < 0.0 {
        return Err(RuntimeError::NegativeRoot { value, position });
    }
    Ok(value.sqrt())
}
