//! # rootcalc
//!
//! rootcalc is an interactive command-line calculator written in Rust.
//! It tokenizes a line, parses it as an arithmetic expression, an assignment
//! or a print statement, and evaluates it immediately against a set of named
//! variables.
//!
//! The grammar, from lowest to highest precedence:
//!
//! ```text
//!     statement  := variable "=" expression
//!                 | "print" expression
//!                 | expression
//!     expression := term (("+" | "-") term)*
//!     term       := factor (("*" | "/" | "^") factor)*
//!     factor     := number | variable | "(" expression ")" | "root" "(" expression ")"
//! ```
//!
//! Note that `^` shares its tier with `*` and `/` and associates to the left.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::CalcResult,
    interpreter::{evaluator::core::Context, lexer::tokenize},
};

/// Runtime configuration.
///
/// Declares the error policy and the other settings the command-line front end
/// exposes.
pub mod config;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines every error that can be raised while evaluating a line.
/// Each error carries the index of the token at which it was detected.
///
/// # Responsibilities
/// - Defines error enums for parse and runtime failures.
/// - Wraps both in [`error::CalcError`], the error of the grammar functions.
pub mod error;
/// Orchestrates the evaluation of a single line.
///
/// This module ties together lexing, parsing and evaluation.
///
/// # Responsibilities
/// - Coordinates the lexer, the grammar and the evaluator state.
/// - Provides entry points for tokenizing and evaluating user input.
pub mod interpreter;
/// Interactive sessions.
///
/// Classifies input lines (exit command, empty line, statement), evaluates them
/// against a persistent context and applies the error policy.
pub mod session;

/// Evaluates one line of source against `context` and returns its value.
///
/// Assignments made by the line are kept in `context`.
///
/// # Errors
/// Returns an error if the line cannot be parsed or evaluated.
///
/// # Examples
/// ```
/// use rootcalc::{evaluate_line, interpreter::evaluator::core::Context};
///
/// let mut context = Context::new();
///
/// assert_eq!(evaluate_line("x = 5", &mut context).unwrap(), 5.0);
/// assert_eq!(evaluate_line("root(x + 4)", &mut context).unwrap(), 3.0);
///
/// // 'y' is not defined.
/// assert!(evaluate_line("y + 1", &mut context).is_err());
/// ```
pub fn evaluate_line(source: &str, context: &mut Context) -> CalcResult<f64> {
    let tokens = tokenize(source);
    let mut position = 0;
    context.evaluate(&tokens, &mut position)
}
