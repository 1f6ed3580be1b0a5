use std::{
    fs,
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;
use exprcalc::{
    interpreter::{bindings::Bindings, calculator::Calculator},
    logging,
    shell::{BANNER, Shell},
};
use tracing::error;

/// exprcalc evaluates arithmetic expressions with variables, the operators
/// `+ - * /` and parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat `contents` as the path of a script with one shell line per line.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// Print the tokens, the postfix program and the result of each
    /// evaluation.
    #[arg(short, long)]
    debug: bool,

    /// Bind a variable before evaluating, as `NAME=VALUE`. May be repeated.
    #[arg(short, long, value_name = "NAME=VALUE", value_parser = parse_binding)]
    set: Vec<(String, f64)>,

    /// An expression to evaluate once. Without it, an interactive shell reads
    /// from standard input.
    contents: Option<String>,
}

fn parse_binding(arg: &str) -> Result<(String, f64), String> {
    let (name, value) = arg.split_once('=')
                           .ok_or_else(|| format!("expected NAME=VALUE, found '{arg}'"))?;
    let value = value.trim()
                     .parse()
                     .map_err(|_| format!("'{}' is not a number", value.trim()))?;

    Ok((name.trim().to_string(), value))
}

fn main() -> ExitCode {
    let args = Args::parse();

    let log = match logging::init(args.debug) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("Failed to set up logging: {e}");
            None
        },
    };

    let calculator = Calculator::with_bindings(args.set.into_iter().collect::<Bindings>());

    match (args.contents, args.file) {
        (Some(path), true) => {
            let script = fs::read_to_string(&path).unwrap_or_else(|_| {
                eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                std::process::exit(1);
            });
            run_shell(calculator, log, script.as_bytes(), false)
        },
        (Some(expression), false) => match calculator.evaluate(&expression) {
            Ok(result) => {
                println!("{result}");
                ExitCode::SUCCESS
            },
            Err(e) => {
                eprintln!("Error: {e} at position {}", e.offset());
                ExitCode::FAILURE
            },
        },
        (None, _) => run_shell(calculator, log, io::stdin().lock(), true),
    }
}

fn run_shell(calculator: Calculator,
             log: Option<logging::LogHandle>,
             input: impl io::BufRead,
             interactive: bool)
             -> ExitCode {
    let mut shell = Shell::new(calculator);
    if let Some(handle) = log {
        shell = shell.with_log_handle(handle);
    }

    let mut stdout = io::stdout().lock();
    if interactive && writeln!(stdout, "{BANNER}").is_err() {
        return ExitCode::FAILURE;
    }

    if let Err(e) = shell.run(input, stdout) {
        error!("shell stopped: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
