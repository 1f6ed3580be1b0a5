use crate::interpreter::lexer::Token;

/// How operators of equal precedence group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// `a - b - c` groups as `(a - b) - c`.
    Left,
}

/// The binary operators understood by the converter and the evaluator.
///
/// This is a closed table; symbols outside it are rejected by both stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl Operator {
    /// Looks up the operator written as `symbol`.
    ///
    /// # Examples
    /// ```
    /// use exprcalc::interpreter::operator::Operator;
    ///
    /// assert_eq!(Operator::from_symbol("*"), Some(Operator::Mul));
    /// assert_eq!(Operator::from_symbol("^"), None);
    /// ```
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            _ => None,
        }
    }

    /// Looks up the operator a token stands for. Only the token text is
    /// consulted.
    #[must_use]
    pub fn from_token(token: &Token) -> Option<Self> {
        Self::from_symbol(&token.text)
    }

    /// Binding strength; higher binds tighter.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }

    /// How chains of this operator group. Every operator in the table is
    /// left-associative.
    #[must_use]
    pub const fn associativity(self) -> Associativity {
        Associativity::Left
    }

    /// The single-character symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }

    /// Whether an operator already on the stack must be emitted before `self`
    /// is pushed.
    #[must_use]
    pub const fn yields_to(self, stacked: Self) -> bool {
        match self.associativity() {
            Associativity::Left => stacked.precedence() >= self.precedence(),
        }
    }

    /// Computes `left <op> right`.
    ///
    /// Returns `None` when dividing by exactly zero.
    ///
    /// # Examples
    /// ```
    /// use exprcalc::interpreter::operator::Operator;
    ///
    /// assert_eq!(Operator::Sub.apply(7.0, 2.0), Some(5.0));
    /// assert_eq!(Operator::Div.apply(1.0, 0.0), None);
    /// ```
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> Option<f64> {
        match self {
            Self::Add => Some(left + right),
            Self::Sub => Some(left - right),
            Self::Mul => Some(left * right),
            Self::Div => {
                if right == 0.0 {
                    return None;
                }
                Some(left / right)
            },
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
