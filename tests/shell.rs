use exprcalc::{
    interpreter::{bindings::Bindings, calculator::Calculator},
    shell::{Command, CommandError, Flow, Shell},
};

fn run(input: &str) -> String {
    let mut shell = Shell::new(Calculator::new());
    let mut output = Vec::new();
    shell.run(input.as_bytes(), &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn parses_commands() {
    assert_eq!(Command::parse("").unwrap(), Command::Empty);
    assert_eq!(Command::parse("   ").unwrap(), Command::Empty);
    assert_eq!(Command::parse("exit").unwrap(), Command::Exit);
    assert_eq!(Command::parse("  help  ").unwrap(), Command::Help);
    assert_eq!(Command::parse("debug on").unwrap(), Command::Debug(true));
    assert_eq!(Command::parse("debug off").unwrap(), Command::Debug(false));
    assert_eq!(Command::parse("set x = 5").unwrap(),
               Command::Set { name:  "x",
                              value: 5.0, });
    assert_eq!(Command::parse("set total2=0.25").unwrap(),
               Command::Set { name:  "total2",
                              value: 0.25, });
}

#[test]
fn set_accepts_negative_values() {
    assert_eq!(Command::parse("set t = -40").unwrap(),
               Command::Set { name:  "t",
                              value: -40.0, });
}

#[test]
fn other_lines_are_expressions() {
    assert_eq!(Command::parse("x + 1").unwrap(), Command::Evaluate("x + 1"));
    assert_eq!(Command::parse("debug").unwrap(), Command::Evaluate("debug"));
    assert_eq!(Command::parse("settle + 1").unwrap(),
               Command::Evaluate("settle + 1"));
}

#[test]
fn rejects_malformed_set() {
    for line in ["set x 5", "set = 5", "set 1x = 5", "set a b = 5", "set x = five", "set x ="] {
        let err = Command::parse(line).unwrap_err();
        assert!(matches!(err, CommandError::InvalidSet { .. }), "for `{line}`");
        assert_eq!(err.to_string(), "Invalid set command");
    }
}

#[test]
fn execute_reports_flow() {
    let mut shell = Shell::new(Calculator::new());
    let mut output = Vec::new();

    assert_eq!(shell.execute("1 + 1", &mut output).unwrap(), Flow::Continue);
    assert_eq!(shell.execute("nope", &mut output).unwrap(), Flow::Continue);
    assert_eq!(shell.execute("exit", &mut output).unwrap(), Flow::Exit);
    assert_eq!(String::from_utf8(output).unwrap(),
               "Result: 2\nError: Undefined variable: nope at position 0\n");
}

#[test]
fn set_updates_the_session() {
    let mut shell = Shell::new(Calculator::new());
    let mut output = Vec::new();
    shell.execute("set x = 5", &mut output).unwrap();
    shell.execute("set x = 7", &mut output).unwrap();

    let bindings = shell.calculator().bindings();
    assert_eq!(bindings.get("x"), Some(7.0));
    assert_eq!(bindings.len(), 1);
}

#[test]
fn starts_from_existing_bindings() {
    let bindings: Bindings = [("width", 3.0), ("height", 4.0)].into_iter().collect();
    let mut shell = Shell::new(Calculator::with_bindings(bindings));
    let mut output = Vec::new();
    shell.execute("width * height", &mut output).unwrap();
    assert_eq!(String::from_utf8(output).unwrap(), "Result: 12\n");
}

#[test]
fn errors_do_not_end_the_session() {
    assert_eq!(run("1 / 0\n(1\n2 * 3\n"),
               "Error: Division by zero at position 2\n\
                Error: Mismatched parentheses at position 0\n\
                Result: 6\n");
}

#[test]
fn exit_stops_reading() {
    assert_eq!(run("1\nexit\n2\n"), "Result: 1\n");
}

#[test]
fn blank_lines_are_silent() {
    assert_eq!(run("\n   \n\n"), "");
}

#[test]
fn debug_toggle_without_subscriber() {
    assert_eq!(run("debug on\n2 * 2\ndebug off\n"),
               "Debug mode enabled\nResult: 4\nDebug mode disabled\n");
}

#[test]
fn expressions_keep_their_leading_whitespace() {
    assert_eq!(Command::parse("   2 + @").unwrap(), Command::Evaluate("   2 + @"));
    assert_eq!(run("   2 + @\n"), "Error: Invalid character: @ at position 7\n");
    assert_eq!(run("\t(1 + 2\n"), "Error: Mismatched parentheses at position 1\n");
}

#[test]
fn commands_ignore_surrounding_whitespace() {
    assert_eq!(run("  set x = 2  \n x * 3\n exit \n4\n"),
               "Set x = 2\nResult: 6\n");
}
