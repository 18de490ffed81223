use crate::{
    error::ParseError,
    interpreter::lexer::{END_TOKEN, Token, TokenKind},
};

/// How many parenthesized groups and function calls may be open at once.
pub const MAX_NESTING_DEPTH: usize = 128;

/// A read position in a tokenized line.
///
/// Every grammar function takes the cursor by mutable reference. When a
/// function returns successfully the cursor points at the first token it did
/// not consume. The cursor never moves past the `End` token, so peeking is
/// always safe.
///
/// The cursor also counts open groups, so the recursion of the grammar stays
/// bounded by [`MAX_NESTING_DEPTH`] whatever the input.
///
/// # Example
/// ```
/// use rootcalc::interpreter::{
///     lexer::{TokenKind, tokenize},
///     parser::core::Cursor,
/// };
///
/// let tokens = tokenize("1");
/// let mut cursor = Cursor::new(&tokens);
/// cursor.advance();
/// cursor.advance();
/// assert_eq!(cursor.peek().kind, TokenKind::End);
/// assert_eq!(cursor.position(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    tokens:   &'a [Token],
    position: usize,
    depth:    usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `tokens`.
    #[must_use]
    pub const fn new(tokens: &'a [Token]) -> Self {
        Self::at(tokens, 0)
    }

    /// Creates a cursor at an arbitrary index of `tokens`.
    #[must_use]
    pub const fn at(tokens: &'a [Token], position: usize) -> Self {
        Self { tokens,
               position,
               depth: 0 }
    }

    /// The index of the current token.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// The current token, or `End` if the slice has been exhausted.
    #[must_use]
    pub fn peek(&self) -> &'a Token {
        self.tokens.get(self.position).unwrap_or(&END_TOKEN)
    }

    /// The token after the current one, or `End`.
    #[must_use]
    pub fn peek_next(&self) -> &'a Token {
        if self.at_end() {
            return &END_TOKEN;
        }
        self.tokens.get(self.position + 1).unwrap_or(&END_TOKEN)
    }

    /// Returns `true` once the cursor rests on `End`.
    #[must_use]
    pub fn at_end(&self) -> bool {
        self.peek().kind == TokenKind::End
    }

    /// Moves to the next token and returns the one just passed.
    ///
    /// On `End` the cursor stays where it is.
    pub fn advance(&mut self) -> &'a Token {
        let token = self.peek();
        if token.kind != TokenKind::End {
            self.position += 1;
        }
        token
    }

    /// Consumes the current token if it has the given kind.
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.peek().kind == kind {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Opens a nested group at the current token.
    ///
    /// # Errors
    /// `NestingTooDeep` once [`MAX_NESTING_DEPTH`] groups are already open.
    pub fn enter_group(&mut self) -> Result<(), ParseError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ParseError::NestingTooDeep { position: self.position });
        }
        self.depth += 1;
        Ok(())
    }

    /// Closes the innermost group.
    pub const fn leave_group(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// The number of groups currently open.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }
}
