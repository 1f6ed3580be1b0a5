#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while running a postfix program.
pub enum EvalError {
    /// Tried to use a variable with no binding.
    UndefinedVariable {
        /// The name of the variable.
        name:   String,
        /// Offset of the variable in the input line.
        offset: usize,
    },
    /// An operator found fewer than two values on the stack.
    InsufficientOperands {
        /// The operator symbol.
        operator: String,
        /// Offset of the operator in the input line.
        offset:   usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// Offset of the `/` operator in the input line.
        offset: usize,
    },
    /// A number literal could not be read as a floating-point value.
    InvalidNumber {
        /// The literal text, such as `1.2.3`.
        literal: String,
        /// Offset of the literal in the input line.
        offset:  usize,
    },
    /// The stack did not hold exactly one value once the program finished.
    TooManyOperands,
    /// A token kind that has no meaning in postfix form, such as a
    /// parenthesis.
    InvalidToken {
        /// Offset of the token in the input line.
        offset: usize,
    },
}

impl EvalError {
    /// Returns the input offset the error points at. Whole-expression defects
    /// report `0`.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::UndefinedVariable { offset, .. }
            | Self::InsufficientOperands { offset, .. }
            | Self::DivisionByZero { offset }
            | Self::InvalidNumber { offset, .. }
            | Self::InvalidToken { offset } => *offset,
            Self::TooManyOperands => 0,
        }
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name, .. } => write!(f, "Undefined variable: {name}"),
            Self::InsufficientOperands { operator, .. } => {
                write!(f, "Insufficient operands for operator {operator}")
            },
            Self::DivisionByZero { .. } => write!(f, "Division by zero"),
            Self::InvalidNumber { literal, .. } => write!(f, "Invalid number: {literal}"),
            Self::TooManyOperands => write!(f, "Invalid expression: too many operands"),
            Self::InvalidToken { .. } => write!(f, "Invalid token in evaluation"),
        }
    }
}

impl std::error::Error for EvalError {}
