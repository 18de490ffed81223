/// Core evaluation state.
///
/// Contains the [`core::Context`] with the variable mapping and the public
/// entry points that evaluate a tokenized line.
pub mod core;

/// Binary operator evaluation.
///
/// Maps operator tokens to [`binary::BinaryOperator`] and applies them.
pub mod binary;

/// Built-in function evaluation.
///
/// The calculator knows a single function, `root`.
pub mod function;
