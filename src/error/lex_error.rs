#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while splitting input into tokens.
pub enum LexError {
    /// Found a character that does not start any token.
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Offset of the character in the input line.
        offset:    usize,
    },
}

impl LexError {
    /// Returns the input offset the error points at.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::InvalidCharacter { offset, .. } => *offset,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { character, .. } => {
                write!(f, "Invalid character: {character}")
            },
        }
    }
}

impl std::error::Error for LexError {}
