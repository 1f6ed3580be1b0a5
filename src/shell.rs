use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::{
    interpreter::{
        calculator::Calculator,
        lexer::{TokenKind, tokenize},
    },
    logging::LogHandle,
};

/// Greeting printed when the shell starts interactively.
pub const BANNER: &str =
    "ExprCalc: Enter expressions, 'set x = value', 'debug on/off', 'help', or 'exit'";

/// Text printed by the `help` command.
pub const HELP: &str = "Commands:
  <expression> : Evaluate (e.g., 2 + 3 * 4)
  set x = value : Set variable
  debug on/off : Enable/disable debug
  exit : Quit";

/// One line of shell input, classified.
#[derive(Debug, Clone, PartialEq)]
pub enum Command<'a> {
    /// A blank line.
    Empty,
    /// `exit`
    Exit,
    /// `help`
    Help,
    /// `debug on` or `debug off`.
    Debug(bool),
    /// `set <name> = <value>`
    Set {
        /// The variable to bind.
        name:  &'a str,
        /// The value to bind it to.
        value: f64,
    },
    /// Anything else is an expression to evaluate.
    Evaluate(&'a str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents a shell line that looks like a command but cannot be carried
/// out.
pub enum CommandError {
    /// A `set` line without `=`, with a name that is not an identifier, or
    /// with a value that is not a number.
    InvalidSet {
        /// The offending line.
        line: String,
    },
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSet { .. } => write!(f, "Invalid set command"),
        }
    }
}

impl std::error::Error for CommandError {}

impl<'a> Command<'a> {
    /// Classifies one line of input.
    ///
    /// Commands are recognized with surrounding whitespace ignored. An
    /// expression keeps the line exactly as typed, so error offsets point into
    /// what the user entered. A line starting with `set ` is always treated as
    /// an assignment, so a malformed one is an error rather than an
    /// expression.
    ///
    /// # Examples
    /// ```
    /// use exprcalc::shell::Command;
    ///
    /// assert_eq!(Command::parse("set rate = 1.5").unwrap(),
    ///            Command::Set { name:  "rate",
    ///                           value: 1.5, });
    /// assert_eq!(Command::parse("debug off").unwrap(), Command::Debug(false));
    /// assert_eq!(Command::parse("(2 + 3) * 4").unwrap(),
    ///            Command::Evaluate("(2 + 3) * 4"));
    /// assert!(Command::parse("set x 5").is_err());
    /// ```
    pub fn parse(line: &'a str) -> Result<Self, CommandError> {
        let trimmed = line.trim();

        match trimmed {
            "" => Ok(Self::Empty),
            "exit" => Ok(Self::Exit),
            "help" => Ok(Self::Help),
            "debug on" => Ok(Self::Debug(true)),
            "debug off" => Ok(Self::Debug(false)),
            _ => match trimmed.strip_prefix("set ") {
                Some(assignment) => {
                    parse_assignment(assignment).ok_or_else(|| CommandError::InvalidSet { line: trimmed.to_string() })
                },
                None => Ok(Self::Evaluate(line)),
            },
        }
    }
}

/// Parses `<name> = <value>`. The name must lex as a single variable token.
fn parse_assignment(assignment: &str) -> Option<Command<'_>> {
    let (name, value) = assignment.split_once('=')?;
    let name = name.trim();

    match tokenize(name).ok()?.as_slice() {
        [token] if token.kind == TokenKind::Variable => {},
        _ => return None,
    }

    let value = value.trim().parse().ok()?;

    Some(Command::Set { name, value })
}

/// Whether the shell should keep reading after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line.
    Continue,
    /// Stop; `exit` was entered.
    Exit,
}

/// The interactive front end.
///
/// The shell owns a [`Calculator`] session. Every line is either a command or
/// an expression, and every outcome, including errors, is written back as a
/// single reply so that one bad line never ends the session.
pub struct Shell {
    calculator: Calculator,
    log:        Option<LogHandle>,
}

impl Shell {
    /// Creates a shell around an existing session.
    #[must_use]
    pub const fn new(calculator: Calculator) -> Self {
        Self { calculator,
               log: None }
    }

    /// Lets `debug on` and `debug off` change the verbosity of the installed
    /// subscriber.
    #[must_use]
    pub fn with_log_handle(mut self, handle: LogHandle) -> Self {
        self.log = Some(handle);
        self
    }

    /// The session the shell evaluates against.
    #[must_use]
    pub const fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Reads lines from `input` until end of input or `exit`, writing one
    /// reply per non-blank line to `output`.
    ///
    /// # Errors
    /// Only I/O errors from `input` or `output` are returned; command and
    /// evaluation errors are reported in the output.
    ///
    /// # Examples
    /// ```
    /// use exprcalc::{interpreter::calculator::Calculator, shell::Shell};
    ///
    /// let mut shell = Shell::new(Calculator::new());
    /// let mut output = Vec::new();
    /// shell.run("set x = 5\nx * 2\nexit\n1 + 1\n".as_bytes(), &mut output)
    ///      .unwrap();
    ///
    /// assert_eq!(String::from_utf8(output).unwrap(), "Set x = 5\nResult: 10\n");
    /// ```
    pub fn run<R, W>(&mut self, input: R, mut output: W) -> io::Result<()>
        where R: BufRead,
              W: Write
    {
        for line in input.lines() {
            if self.execute(&line?, &mut output)? == Flow::Exit {
                break;
            }
        }
        output.flush()
    }

    /// Handles a single line of input.
    ///
    /// # Errors
    /// Returns an error only when writing the reply fails.
    pub fn execute<W: Write>(&mut self, line: &str, output: &mut W) -> io::Result<Flow> {
        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(e) => {
                debug!(error = %e, "rejected command");
                writeln!(output, "Error: {e}")?;
                return Ok(Flow::Continue);
            },
        };

        match command {
            Command::Empty => {},
            Command::Exit => return Ok(Flow::Exit),
            Command::Help => writeln!(output, "{HELP}")?,
            Command::Debug(enabled) => {
                self.set_debug(enabled);
                let state = if enabled { "enabled" } else { "disabled" };
                writeln!(output, "Debug mode {state}")?;
            },
            Command::Set { name, value } => {
                self.calculator.set_variable(name, value);
                debug!(name, value, "variable bound");
                writeln!(output, "Set {name} = {value}")?;
            },
            Command::Evaluate(expression) => match self.calculator.evaluate(expression) {
                Ok(result) => writeln!(output, "Result: {result}")?,
                Err(e) => writeln!(output, "Error: {e} at position {}", e.offset())?,
            },
        }

        Ok(Flow::Continue)
    }

    fn set_debug(&self, enabled: bool) {
        if let Some(handle) = &self.log
           && let Err(e) = handle.set_debug(enabled)
        {
            warn!("could not change log level: {e}");
        }
    }
}
