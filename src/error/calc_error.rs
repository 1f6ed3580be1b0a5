use crate::error::{EvalError, LexError, SyntaxError};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Any failure of the full expression pipeline, tagged with the stage that
/// raised it.
pub enum CalcError {
    /// The lexer rejected the input.
    Lex(LexError),
    /// The shunting-yard conversion rejected the token sequence.
    Syntax(SyntaxError),
    /// The postfix program could not be evaluated.
    Eval(EvalError),
}

impl CalcError {
    /// Returns the input offset reported by the underlying stage error.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::Lex(e) => e.offset(),
            Self::Syntax(e) => e.offset(),
            Self::Eval(e) => e.offset(),
        }
    }
}

impl From<LexError> for CalcError {
    fn from(value: LexError) -> Self {
        Self::Lex(value)
    }
}

impl From<SyntaxError> for CalcError {
    fn from(value: SyntaxError) -> Self {
        Self::Syntax(value)
    }
}

impl From<EvalError> for CalcError {
    fn from(value: EvalError) -> Self {
        Self::Eval(value)
    }
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => e.fmt(f),
            Self::Syntax(e) => e.fmt(f),
            Self::Eval(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for CalcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Syntax(e) => Some(e),
            Self::Eval(e) => Some(e),
        }
    }
}
