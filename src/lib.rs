//! # exprcalc
//!
//! exprcalc evaluates arithmetic expressions written as text. It supports
//! numeric literals, variables bound to numeric values, the binary operators
//! `+ - * /` and parentheses.
//!
//! Evaluation is a three-stage pipeline: the lexer splits a line into tokens,
//! the shunting-yard converter reorders them into postfix form, and the
//! evaluator runs the postfix program on a stack.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::interpreter::{
    bindings::Lookup,
    evaluator::evaluate,
    lexer::{Token, render, tokenize},
    parser::to_postfix,
};

/// Provides error types for every stage of the pipeline.
///
/// This module defines the errors raised while lexing, converting and
/// evaluating an expression. Each error carries the offset in the input line
/// that is most relevant to the failure, and a message suitable for showing
/// to a user.
///
/// # Responsibilities
/// - Defines one error enum per stage, plus a wrapper for the whole pipeline.
/// - Produces the exact user-facing messages through `Display`.
/// - Integrates with `std::error::Error` and the `?` operator.
pub mod error;
/// Implements the expression pipeline.
///
/// This module contains the lexer, the shunting-yard converter, the postfix
/// evaluator, the operator table, the bindings table and the session type that
/// ties them together.
///
/// # Responsibilities
/// - Coordinates the three stages and the data passed between them.
/// - Provides entry points for tokenizing, converting and evaluating.
pub mod interpreter;
/// Sets up diagnostic output.
///
/// Installs a `tracing` subscriber whose verbosity can be switched between
/// normal and debug output while the program runs.
pub mod logging;
/// The interactive command shell.
///
/// Reads lines, recognizes the `set`, `debug`, `help` and `exit` commands,
/// evaluates everything else as an expression and prints the outcome.
pub mod shell;

pub use error::CalcError;

/// Evaluates an expression in one call.
///
/// This runs the lexer, the shunting-yard converter and the evaluator in
/// turn. The first error from any stage aborts the evaluation and is returned
/// as is.
///
/// Each intermediate stream is reported as a `tracing` debug event, so the
/// tokens and the postfix program show up only when a subscriber has debug
/// output enabled.
///
/// # Errors
/// Returns a [`CalcError`] wrapping the error of the stage that failed.
///
/// # Examples
/// ```
/// use std::collections::HashMap;
///
/// use exprcalc::evaluate_expression;
///
/// let mut bindings = HashMap::new();
/// bindings.insert("x".to_string(), 2.0);
///
/// assert_eq!(evaluate_expression("(x + 3) * 4", &bindings).unwrap(), 20.0);
///
/// let err = evaluate_expression("5 / 0", &bindings).unwrap_err();
/// assert_eq!(err.to_string(), "Division by zero");
/// ```
pub fn evaluate_expression<L>(expression: &str, bindings: &L) -> Result<f64, CalcError>
    where L: Lookup + ?Sized
{
    let tokens = tokenize(expression)?;
    log_tokens("tokens", &tokens);

    let postfix = to_postfix(&tokens)?;
    log_tokens("postfix", &postfix);
    debug!(program = %render(&postfix), "converted to postfix");

    let result = evaluate(&postfix, bindings)?;
    debug!(result, "evaluated");

    Ok(result)
}

fn log_tokens(stage: &str, tokens: &[Token]) {
    for token in tokens {
        debug!(stage,
               kind = %token.kind,
               value = %token.text,
               position = token.offset);
    }
}
