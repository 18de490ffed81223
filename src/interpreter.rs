/// The evaluator module holds the state and arithmetic of the calculator.
///
/// It owns the variable mapping that persists between lines, the binary
/// operations and the built-in functions. The grammar in [`parser`] calls into
/// it as soon as each piece of a line has been recognised.
///
/// # Responsibilities
/// - Stores and looks up variables, failing on undefined names.
/// - Applies `+ - * / ^` with native floating point semantics.
/// - Implements the `root` function.
pub mod evaluator;
/// The lexer module tokenizes a line of input.
///
/// The lexer reads the raw text and produces classified tokens: numbers,
/// variables, operators, parentheses, `=`, the `root` function and the `print`
/// keyword. It never fails; unknown characters become `Invalid` tokens.
pub mod lexer;
/// The parser module walks the tokens and evaluates as it goes.
///
/// There is no syntax tree. Each precedence level reads its tokens through a
/// shared [`parser::core::Cursor`] and returns the number it denotes.
///
/// # Responsibilities
/// - Detects assignment and print statements.
/// - Implements the precedence hierarchy `+ -` below `* / ^` below factors.
/// - Reports unexpected tokens, missing parentheses and malformed numbers.
pub mod parser;
