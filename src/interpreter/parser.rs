use crate::{
    error::SyntaxError,
    interpreter::{
        lexer::{Token, TokenKind},
        operator::Operator,
    },
};

/// Result type used by the converter.
pub type ParseResult<T> = Result<T, SyntaxError>;

/// Converts an infix token sequence to postfix (reverse Polish) order.
///
/// This is the shunting-yard algorithm. Operands go straight to the output;
/// operators wait on a stack until an operator of lower precedence, a closing
/// parenthesis or the end of input releases them. Operators of equal
/// precedence are released left to right.
///
/// The grammar is checked strictly while scanning: operands and operators
/// must alternate, `(` may only open an operand position and `)` may only
/// close one. A violation is reported at the offending token, so `2 + + 3`
/// fails at the second `+` instead of surfacing later as a malformed
/// program.
///
/// The returned sequence holds no parentheses.
///
/// # Errors
/// - [`SyntaxError::MismatchedParentheses`] for a `)` with no open `(`, or a
///   `(` left open at the end of input.
/// - [`SyntaxError::InvalidToken`] for a token out of place, an unknown
///   operator, empty input, or input that ends after an operator.
///
/// # Examples
/// ```
/// use exprcalc::interpreter::{
///     lexer::{render, tokenize},
///     parser::to_postfix,
/// };
///
/// let tokens = tokenize("2 + 3 * 4").unwrap();
/// assert_eq!(render(&to_postfix(&tokens).unwrap()), "2 3 4 * +");
///
/// let tokens = tokenize("(2 + 3) * 4").unwrap();
/// assert_eq!(render(&to_postfix(&tokens).unwrap()), "2 3 + 4 *");
/// ```
pub fn to_postfix(tokens: &[Token]) -> ParseResult<Vec<Token>> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<&Token> = Vec::new();
    let mut expect_operand = true;

    for token in tokens {
        match token.kind {
            TokenKind::Number | TokenKind::Variable => {
                if !expect_operand {
                    return Err(SyntaxError::InvalidToken { offset: token.offset });
                }
                output.push(token.clone());
                expect_operand = false;
            },

            TokenKind::Operator => {
                if expect_operand {
                    return Err(SyntaxError::InvalidToken { offset: token.offset });
                }
                let Some(op) = Operator::from_token(token) else {
                    return Err(SyntaxError::InvalidToken { offset: token.offset });
                };

                while let Some(top) = stack.last()
                      && top.kind == TokenKind::Operator
                      && Operator::from_token(top).is_some_and(|stacked| op.yields_to(stacked))
                {
                    output.extend(stack.pop().cloned());
                }
                stack.push(token);
                expect_operand = true;
            },

            TokenKind::LeftParen => {
                if !expect_operand {
                    return Err(SyntaxError::InvalidToken { offset: token.offset });
                }
                stack.push(token);
            },

            TokenKind::RightParen => {
                if expect_operand {
                    return Err(SyntaxError::InvalidToken { offset: token.offset });
                }
                pop_until_left_paren(&mut stack, &mut output, token.offset)?;
                expect_operand = false;
            },
        }
    }

    while let Some(top) = stack.pop() {
        if top.kind == TokenKind::LeftParen {
            return Err(SyntaxError::MismatchedParentheses { offset: top.offset });
        }
        output.push(top.clone());
    }

    if expect_operand {
        let offset = tokens.last().map_or(0, |token| token.offset);
        return Err(SyntaxError::InvalidToken { offset });
    }

    Ok(output)
}

/// Moves operators from the stack to the output until the nearest `(`, which
/// is discarded.
///
/// # Errors
/// Returns [`SyntaxError::MismatchedParentheses`] at `offset` when the stack
/// holds no `(`.
fn pop_until_left_paren(stack: &mut Vec<&Token>,
                        output: &mut Vec<Token>,
                        offset: usize)
                        -> ParseResult<()> {
    while let Some(top) = stack.pop() {
        if top.kind == TokenKind::LeftParen {
            return Ok(());
        }
        output.push(top.clone());
    }

    Err(SyntaxError::MismatchedParentheses { offset })
}
