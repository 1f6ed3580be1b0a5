/// The lexer module tokenizes input lines.
///
/// The lexer reads the raw text of one line and produces a sequence of
/// tokens: numbers, operators, variables and parentheses, each tagged with
/// the offset it starts at. This is the first stage of the pipeline.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind, text and
///   offset.
/// - Skips whitespace between tokens.
/// - Reports the first character that cannot begin a token.
pub mod lexer;
/// The operator table.
///
/// Declares the closed set of binary operators together with their
/// precedence, associativity and arithmetic.
pub mod operator;
/// The parser module reorders infix tokens into postfix form.
///
/// The converter implements the shunting-yard algorithm. It resolves operator
/// precedence and parentheses so that the evaluator can run the result as a
/// plain stack program.
///
/// # Responsibilities
/// - Produces a postfix token sequence with no parentheses.
/// - Validates that operands and operators alternate.
/// - Reports unbalanced parentheses with the offset of the culprit.
pub mod parser;
/// The evaluator module runs postfix programs.
///
/// The evaluator drives a numeric stack across a postfix sequence, looking up
/// variables in a bindings table and applying operators as they appear.
///
/// # Responsibilities
/// - Computes the single numeric result of a postfix program.
/// - Reports undefined variables, division by zero and malformed programs.
pub mod evaluator;
/// Variable bindings.
///
/// Declares the bindings table owned by a session and the lookup trait
/// through which the evaluator reads it.
pub mod bindings;
/// Evaluation sessions.
///
/// Keeps a bindings table alive across evaluations and runs the pipeline
/// against it.
pub mod calculator;
