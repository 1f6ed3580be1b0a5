/// Lexing errors.
///
/// Raised while splitting an input line into tokens, when a character does
/// not begin any recognized token.
pub mod lex_error;
/// Syntax errors.
///
/// Raised by the shunting-yard conversion: unbalanced parentheses and tokens
/// that appear where the grammar expects something else.
pub mod syntax_error;
/// Evaluation errors.
///
/// Raised while running a postfix program: undefined variables, division by
/// zero, malformed literals and stack-shape defects.
pub mod eval_error;
/// The pipeline-wide error.
///
/// Wraps the stage errors so the full pipeline can be composed with `?`.
pub mod calc_error;

pub use calc_error::CalcError;
pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use syntax_error::SyntaxError;
