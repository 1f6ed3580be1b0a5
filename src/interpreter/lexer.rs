use logos::Logos;

use crate::error::LexError;

/// Result type used by the lexer.
pub type LexResult<T> = Result<T, LexError>;

/// The kind of a lexical token.
///
/// The set is closed: every token the lexer produces is one of these five
/// kinds. Whitespace between tokens is skipped and never produces a token.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\n\r\x0B\x0C]+")]
pub enum TokenKind {
    /// Numeric literal tokens, such as `42`, `3.14` or `.5`.
    ///
    /// Any run of digits and dots is accepted here; literals such as `1.2.3`
    /// are rejected later, when the evaluator reads their value.
    #[regex(r"[0-9.]+")]
    Number,
    /// `+`, `-`, `*` or `/`.
    #[regex(r"[+\-*/]")]
    Operator,
    /// Identifier tokens, such as `x` or `rate2`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*")]
    Variable,
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Number => "NUMBER",
            Self::Operator => "OPERATOR",
            Self::Variable => "VARIABLE",
            Self::LeftParen => "LEFT_PAREN",
            Self::RightParen => "RIGHT_PAREN",
        };
        write!(f, "{name}")
    }
}

/// A token together with the text it was read from and where it starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is.
    pub kind:   TokenKind,
    /// The literal text: a number, a single-character operator, a parenthesis
    /// or an identifier.
    pub text:   String,
    /// Zero-based offset into the input line where the token begins.
    pub offset: usize,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, offset: usize) -> Self {
        Self { kind,
               text: text.into(),
               offset }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Splits an input line into tokens.
///
/// The input is scanned left to right. Whitespace separates tokens and is
/// otherwise ignored, so an empty or blank line yields an empty sequence.
/// Each token records the offset of its first character, which keeps offsets
/// non-decreasing across the returned sequence.
///
/// # Errors
/// Returns [`LexError::InvalidCharacter`] for the first character that cannot
/// start a token.
///
/// # Examples
/// ```
/// use exprcalc::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("2 + 3 * x").unwrap();
/// let offsets: Vec<usize> = tokens.iter().map(|t| t.offset).collect();
/// assert_eq!(offsets, vec![0, 2, 4, 6, 8]);
/// assert_eq!(tokens[4].kind, TokenKind::Variable);
///
/// let err = tokenize("2 + @").unwrap_err();
/// assert_eq!(err.to_string(), "Invalid character: @");
/// assert_eq!(err.offset(), 4);
/// ```
pub fn tokenize(input: &str) -> LexResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(input);

    while let Some(kind) = lexer.next() {
        let offset = lexer.span().start;
        let slice = lexer.slice();

        if let Ok(kind) = kind {
            tokens.push(Token::new(kind, slice, offset));
        } else {
            let character = slice.chars().next().unwrap_or_default();
            return Err(LexError::InvalidCharacter { character, offset });
        }
    }

    Ok(tokens)
}

/// Joins the text of each token with single spaces.
///
/// Used for diagnostics: a postfix sequence renders as `2 3 4 * +`.
#[must_use]
pub fn render(tokens: &[Token]) -> String {
    tokens.iter()
          .map(|token| token.text.as_str())
          .collect::<Vec<_>>()
          .join(" ")
}
