#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while converting infix tokens to
/// postfix order.
pub enum SyntaxError {
    /// A `)` without a matching `(`, or a `(` that is never closed.
    MismatchedParentheses {
        /// Offset of the unmatched parenthesis.
        offset: usize,
    },
    /// A token appeared where the grammar does not allow it. Also raised for
    /// empty input and for input that ends while an operand is still expected.
    InvalidToken {
        /// Offset of the offending token, or of the last token when the input
        /// ended early.
        offset: usize,
    },
}

impl SyntaxError {
    /// Returns the input offset the error points at.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::MismatchedParentheses { offset } | Self::InvalidToken { offset } => *offset,
        }
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MismatchedParentheses { .. } => write!(f, "Mismatched parentheses"),
            Self::InvalidToken { .. } => write!(f, "Invalid token in expression"),
        }
    }
}

impl std::error::Error for SyntaxError {}
