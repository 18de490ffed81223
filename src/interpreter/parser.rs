/// The token cursor shared by every grammar level.
pub mod core;

/// The addition and multiplication levels of the grammar.
///
/// Both levels are left-associative. `^` shares the multiplication tier, so
/// `2 ^ 3 ^ 2` is `(2 ^ 3) ^ 2`.
pub mod binary;

/// The factor level: numbers, variables, groups and function calls.
pub mod factor;

/// Top-level statement dispatch: assignment, print or bare expression.
pub mod statement;
