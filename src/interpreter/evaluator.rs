use crate::{
    error::EvalError,
    interpreter::{
        bindings::Lookup,
        lexer::{Token, TokenKind},
        operator::Operator,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Runs a postfix program and returns its single result.
///
/// Numbers and variables push their value onto a stack. Each operator pops
/// its right operand, then its left operand, and pushes the result. When the
/// program ends exactly one value must remain.
///
/// The stack lives only for the duration of the call, so evaluating the same
/// program against unchanged bindings always gives the same answer.
///
/// # Parameters
/// - `postfix`: Tokens in postfix order, as produced by
///   [`to_postfix`](crate::interpreter::parser::to_postfix).
/// - `bindings`: Where variable values are looked up.
///
/// # Errors
/// - [`EvalError::UndefinedVariable`] for a variable with no binding.
/// - [`EvalError::InvalidNumber`] for a literal such as `1.2.3`.
/// - [`EvalError::InsufficientOperands`] when an operator finds fewer than two
///   values.
/// - [`EvalError::DivisionByZero`] when the divisor is exactly zero.
/// - [`EvalError::InvalidToken`] for parentheses or unknown operators.
/// - [`EvalError::TooManyOperands`] when the final stack does not hold exactly
///   one value.
///
/// # Examples
/// ```
/// use exprcalc::interpreter::{
///     bindings::Bindings,
///     evaluator::evaluate,
///     lexer::{Token, TokenKind},
/// };
///
/// let mut bindings = Bindings::new();
/// bindings.set("x", 4.0);
///
/// // 2 x *
/// let program = vec![Token::new(TokenKind::Number, "2", 0),
///                    Token::new(TokenKind::Variable, "x", 4),
///                    Token::new(TokenKind::Operator, "*", 2)];
///
/// assert_eq!(evaluate(&program, &bindings).unwrap(), 8.0);
/// ```
pub fn evaluate<L>(postfix: &[Token], bindings: &L) -> EvalResult<f64>
    where L: Lookup + ?Sized
{
    let mut stack: Vec<f64> = Vec::new();

    for token in postfix {
        match token.kind {
            TokenKind::Number => stack.push(parse_number(token)?),

            TokenKind::Variable => {
                let value =
                    bindings.lookup(&token.text)
                            .ok_or_else(|| EvalError::UndefinedVariable { name:   token.text.clone(),
                                                                          offset: token.offset, })?;
                stack.push(value);
            },

            TokenKind::Operator => {
                let result = apply_operator(&mut stack, token)?;
                stack.push(result);
            },

            TokenKind::LeftParen | TokenKind::RightParen => {
                return Err(EvalError::InvalidToken { offset: token.offset });
            },
        }
    }

    match stack.as_slice() {
        [value] => Ok(*value),
        _ => Err(EvalError::TooManyOperands),
    }
}

/// Reads the value of a number literal.
fn parse_number(token: &Token) -> EvalResult<f64> {
    token.text
         .parse()
         .map_err(|_| EvalError::InvalidNumber { literal: token.text.clone(),
                                                 offset:  token.offset, })
}

/// Pops two operands and applies the operator named by `token` to them.
fn apply_operator(stack: &mut Vec<f64>, token: &Token) -> EvalResult<f64> {
    let Some(op) = Operator::from_token(token) else {
        return Err(EvalError::InvalidToken { offset: token.offset });
    };

    let (Some(right), Some(left)) = (stack.pop(), stack.pop()) else {
        return Err(EvalError::InsufficientOperands { operator: token.text.clone(),
                                                     offset:   token.offset, });
    };

    op.apply(left, right)
      .ok_or(EvalError::DivisionByZero { offset: token.offset })
}
