use exprcalc::{
    error::SyntaxError,
    interpreter::{
        lexer::{Token, TokenKind, render, tokenize},
        parser::to_postfix,
    },
};

fn postfix(src: &str) -> String {
    let tokens = tokenize(src).unwrap();
    render(&to_postfix(&tokens).unwrap())
}

fn syntax_error(src: &str) -> SyntaxError {
    let tokens = tokenize(src).unwrap();
    to_postfix(&tokens).unwrap_err()
}

#[test]
fn precedence_is_respected() {
    assert_eq!(postfix("2 + 3 * 4"), "2 3 4 * +");
    assert_eq!(postfix("2 * 3 + 4"), "2 3 * 4 +");
    assert_eq!(postfix("a - b / c * d"), "a b c / d * -");
}

#[test]
fn equal_precedence_groups_left_to_right() {
    assert_eq!(postfix("8 - 3 - 2"), "8 3 - 2 -");
    assert_eq!(postfix("8 / 4 * 2"), "8 4 / 2 *");
    assert_eq!(postfix("1 + 2 - 3 + 4"), "1 2 + 3 - 4 +");
}

#[test]
fn parentheses_override_precedence() {
    assert_eq!(postfix("(2 + 3) * 4"), "2 3 + 4 *");
    assert_eq!(postfix("2 * (3 + 4)"), "2 3 4 + *");
    assert_eq!(postfix("8 - (3 - 2)"), "8 3 2 - -");
    assert_eq!(postfix("((x))"), "x");
    assert_eq!(postfix("((1 + 2) * (3 - 4)) / 5"), "1 2 + 3 4 - * 5 /");
}

#[test]
fn postfix_keeps_original_offsets() {
    let tokens = tokenize("2 + 3 * 4").unwrap();
    let program = to_postfix(&tokens).unwrap();
    let offsets: Vec<usize> = program.iter().map(|t| t.offset).collect();
    assert_eq!(offsets, vec![0, 4, 8, 6, 2]);
}

#[test]
fn postfix_has_no_parentheses() {
    let tokens = tokenize("((1 + (2)) * ((3)))").unwrap();
    let program = to_postfix(&tokens).unwrap();
    assert!(program.iter()
                   .all(|t| !matches!(t.kind, TokenKind::LeftParen | TokenKind::RightParen)));
}

#[test]
fn unclosed_left_paren() {
    let err = syntax_error("(2 + 3");
    assert_eq!(err, SyntaxError::MismatchedParentheses { offset: 0 });
    assert_eq!(err.to_string(), "Mismatched parentheses");

    assert_eq!(syntax_error("1 * ((2 + 3)"),
               SyntaxError::MismatchedParentheses { offset: 4 });
}

#[test]
fn unopened_right_paren() {
    let err = syntax_error("2 + 3)");
    assert_eq!(err, SyntaxError::MismatchedParentheses { offset: 5 });
    assert_eq!(err.to_string(), "Mismatched parentheses");
}

#[test]
fn doubled_operator_is_reported_at_the_second_one() {
    let err = syntax_error("2 + + 3");
    assert_eq!(err, SyntaxError::InvalidToken { offset: 4 });
    assert_eq!(err.to_string(), "Invalid token in expression");
}

#[test]
fn operands_must_be_separated_by_operators() {
    assert_eq!(syntax_error("2 3"), SyntaxError::InvalidToken { offset: 2 });
    assert_eq!(syntax_error("2x"), SyntaxError::InvalidToken { offset: 1 });
    assert_eq!(syntax_error("2 (3)"), SyntaxError::InvalidToken { offset: 2 });
    assert_eq!(syntax_error("(1) (2)"), SyntaxError::InvalidToken { offset: 4 });
}

#[test]
fn leading_operator_is_rejected() {
    assert_eq!(syntax_error("- 3"), SyntaxError::InvalidToken { offset: 0 });
    assert_eq!(syntax_error("* 3"), SyntaxError::InvalidToken { offset: 0 });
}

#[test]
fn empty_parentheses_are_rejected() {
    assert_eq!(syntax_error("()"), SyntaxError::InvalidToken { offset: 1 });
    assert_eq!(syntax_error("2 * ()"), SyntaxError::InvalidToken { offset: 5 });
}

#[test]
fn trailing_operator_is_rejected() {
    assert_eq!(syntax_error("2 +"), SyntaxError::InvalidToken { offset: 2 });
    assert_eq!(syntax_error("1 * 2 /"), SyntaxError::InvalidToken { offset: 6 });
}

#[test]
fn empty_input_is_rejected() {
    assert_eq!(to_postfix(&[]).unwrap_err(),
               SyntaxError::InvalidToken { offset: 0 });
}

#[test]
fn unknown_operator_text_is_rejected() {
    let tokens = vec![Token::new(TokenKind::Number, "2", 0),
                      Token::new(TokenKind::Operator, "^", 2),
                      Token::new(TokenKind::Number, "3", 4)];
    assert_eq!(to_postfix(&tokens).unwrap_err(),
               SyntaxError::InvalidToken { offset: 2 });
}
