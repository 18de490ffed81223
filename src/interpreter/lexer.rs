use std::fmt;

use logos::Logos;
use tracing::trace;

/// The kind of a lexical token.
///
/// Every line tokenizes to a sequence of these, always terminated by exactly
/// one [`TokenKind::End`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A run of digits and dots, such as `42`, `3.14` or `1.2.3`.
    Number,
    /// Any identifier that is not a keyword.
    Variable,
    /// One of `+`, `-`, `*`, `/`, `^`.
    Operator,
    /// The built-in function name `root`.
    Function,
    /// `(`
    ParenOpen,
    /// `)`
    ParenClose,
    /// `=`
    Equal,
    /// The `print` keyword.
    Print,
    /// End of input sentinel.
    End,
    /// A character the calculator does not understand.
    Invalid,
}

/// A classified lexical unit together with its source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The classification of the token.
    pub kind: TokenKind,
    /// The literal digits, the identifier, the symbol, or empty for `End`.
    pub text: String,
}

/// The shared end-of-input token, used when a cursor runs off its slice.
pub static END_TOKEN: Token = Token { kind: TokenKind::End,
                                      text: String::new(), };

impl Token {
    /// Creates a token of the given kind.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self { kind,
               text: text.into() }
    }

    /// Creates the end-of-input sentinel.
    #[must_use]
    pub const fn end() -> Self {
        Self { kind: TokenKind::End,
               text: String::new(), }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::End => write!(f, "end of input"),
            _ => write!(f, "'{}'", self.text),
        }
    }
}

/// Raw lexemes recognised by the scanner before keyword classification.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[ \t\r\n\f\x0B]+")]
enum Lexeme {
    /// Digits and dots, scanned greedily. `1.2.3` is one lexeme.
    #[regex(r"[0-9.]+")]
    Number,
    /// Letters only; keywords are sorted out by [`classify_word`].
    #[regex(r"[a-zA-Z]+")]
    Word,
    /// `=`
    #[token("=")]
    Equal,
    /// `+ - * / ^`
    #[token("+")]
    #[token("-")]
    #[token("*")]
    #[token("/")]
    #[token("^")]
    Operator,
    /// `(`
    #[token("(")]
    ParenOpen,
    /// `)`
    #[token(")")]
    ParenClose,
}

/// Converts one line of text into tokens.
///
/// The scan is a single left-to-right pass. Numbers are read greedily as any
/// run of digits and `.` characters, so malformed literals such as `1.2.3`
/// still become a single `Number` token; they are rejected later, when the
/// evaluator converts the text to a floating point value. Characters that are
/// not part of the language become `Invalid` tokens rather than errors.
///
/// The returned sequence always ends with exactly one `End` token.
///
/// # Example
/// ```
/// use rootcalc::interpreter::lexer::{TokenKind, tokenize};
///
/// let kinds: Vec<TokenKind> = tokenize("x = root(4)").iter().map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            vec![TokenKind::Variable,
///                 TokenKind::Equal,
///                 TokenKind::Function,
///                 TokenKind::ParenOpen,
///                 TokenKind::Number,
///                 TokenKind::ParenClose,
///                 TokenKind::End]);
/// ```
#[must_use]
pub fn tokenize(line: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = Lexeme::lexer(line);

    while let Some(lexeme) = lexer.next() {
        let text = lexer.slice();
        match lexeme {
            Ok(Lexeme::Number) => tokens.push(Token::new(TokenKind::Number, text)),
            Ok(Lexeme::Word) => tokens.push(Token::new(classify_word(text), text)),
            Ok(Lexeme::Equal) => tokens.push(Token::new(TokenKind::Equal, text)),
            Ok(Lexeme::Operator) => tokens.push(Token::new(TokenKind::Operator, text)),
            Ok(Lexeme::ParenOpen) => tokens.push(Token::new(TokenKind::ParenOpen, text)),
            Ok(Lexeme::ParenClose) => tokens.push(Token::new(TokenKind::ParenClose, text)),
            Err(()) => {
                tokens.extend(text.chars()
                                  .map(|c| Token::new(TokenKind::Invalid, c.to_string())));
            },
        }
    }

    tokens.push(Token::end());
    trace!(count = tokens.len(), "tokenized line");
    tokens
}

/// Sorts an identifier into a keyword or a variable name. Case-sensitive.
fn classify_word(word: &str) -> TokenKind {
    match word {
        "root" => TokenKind::Function,
        "print" => TokenKind::Print,
        _ => TokenKind::Variable,
    }
}
