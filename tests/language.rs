use std::fs;

use languageko::{
    error::{Error, ParseError, RuntimeError},
    evaluate,
    interpreter::{evaluator::core::Context, lexer::tokenize, symbols::SymbolTable, value::Value},
    run,
};
use walkdir::WalkDir;

#[test]
fn sample_programs_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("programs").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "ko"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let input = fs::read_to_string(path.with_extension("in")).unwrap_or_default();
        let expected = fs::read_to_string(path.with_extension("out"))
            .unwrap_or_else(|e| panic!("Missing expected output for {path:?}: {e}"));

        count += 1;
        let mut output = Vec::new();
        if let Err(e) = run(&source, input.as_bytes(), &mut output) {
            panic!("Program {path:?} failed:\n{source}\nError: {e}");
        }
        assert_eq!(String::from_utf8(output).unwrap(),
                   expected,
                   "Output of {path:?} does not match");
    }

    assert!(count > 0, "No programs found in programs/");
}

fn run_with(src: &str, input: &str) -> (Result<SymbolTable, Error>, String) {
    let mut output = Vec::new();
    let result = run(src, input.as_bytes(), &mut output);
    (result, String::from_utf8(output).expect("output is UTF-8"))
}

fn assert_output(src: &str, input: &str, expected: &str) -> SymbolTable {
    match run_with(src, input) {
        (Ok(symbols), output) => {
            assert_eq!(output, expected, "unexpected output for {src:?}");
            symbols
        },
        (Err(e), _) => panic!("Script failed: {e}"),
    }
}

fn assert_failure(src: &str, input: &str) -> Error {
    match run_with(src, input) {
        (Ok(_), _) => panic!("Script succeeded but was expected to fail"),
        (Err(e), _) => e,
    }
}

#[test]
fn literals_evaluate_to_themselves() {
    for n in [0_i64, 1, 7, 42, 1_000_000, i64::MAX] {
        assert_eq!(evaluate(&n.to_string()).unwrap(), n);
    }
}

#[test]
fn precedence_and_associativity() {
    assert_eq!(evaluate("2 + 3 * 4").unwrap(), 14);
    assert_eq!(evaluate("(2 + 3) * 4").unwrap(), 20);
    assert_eq!(evaluate("10 - 4 - 3").unwrap(), 3);
    assert_eq!(evaluate("100 / 10 / 5").unwrap(), 2);
    assert_eq!(evaluate("8 / 3 * 3").unwrap(), 6);
    assert_eq!(evaluate("((7))").unwrap(), 7);
    assert_eq!(evaluate("0 - 7 / 2").unwrap(), -3);
}

#[test]
fn division_by_zero_is_error() {
    assert!(matches!(evaluate("5 / 0"),
                     Err(Error::Runtime(RuntimeError::DivisionByZero { .. }))));
    assert!(matches!(evaluate("5 / (3 - 3)"),
                     Err(Error::Runtime(RuntimeError::DivisionByZero { .. }))));
}

#[test]
fn malformed_expressions_are_errors() {
    assert!(matches!(evaluate("(2 + 3"),
                     Err(Error::Parse(ParseError::ExpectedClosingParen { .. }))));
    assert!(matches!(evaluate("2 +"), Err(Error::Parse(ParseError::ExpectedFactor { .. }))));
    assert!(matches!(evaluate("-1"), Err(Error::Parse(ParseError::ExpectedFactor { .. }))));
    assert!(matches!(evaluate("2 3"),
                     Err(Error::Parse(ParseError::UnexpectedTrailingTokens { .. }))));
}

#[test]
fn arithmetic_wraps_instead_of_panicking() {
    let max = i64::MAX;
    assert_eq!(evaluate(&format!("{max} + 1")).unwrap(), i64::MIN);
    assert_eq!(evaluate(&format!("{max} * 2")).unwrap(), -2);
}

#[test]
fn assignment_then_print() {
    assert_output("simula() { x = 5; ipakita(x); }", "", "5\n");
    assert_output("simula() { x = 2 + 3 * 4; y = x - 4; ipakita(x, \" \", y); }",
                  "",
                  "14 10\n");
}

#[test]
fn string_assignment_and_print() {
    let symbols = assert_output("simula() { s = \"hi\"; ipakita(s); }", "", "hi\n");
    assert_eq!(symbols.get("s"), Some(&Value::Text("hi".into())));
}

#[test]
fn unassigned_variable_reads_as_zero() {
    let symbols = assert_output("simula() { ipakita(y); }", "", "0\n");
    assert_eq!(symbols.get("y"), Some(&Value::Integer(0)));

    assert_output("simula() { x = y + 1; ipakita(x); }", "", "1\n");
}

#[test]
fn reassignment_replaces_the_kind_of_value() {
    let symbols = assert_output("simula() { v = \"teksto\"; v = 3; ipakita(v); }", "", "3\n");
    assert_eq!(symbols.get("v"), Some(&Value::Integer(3)));

    let symbols = assert_output("simula() { v = 3; v = \"teksto\"; ipakita(v); }", "", "teksto\n");
    assert_eq!(symbols.get("v"), Some(&Value::Text("teksto".into())));
}

#[test]
fn text_variables_count_as_zero_in_expressions() {
    assert_output("simula() { s = \"abc\"; n = s + 4; ipakita(n); }", "", "4\n");
}

#[test]
fn empty_string_stays_text() {
    let symbols = assert_output("simula() { s = \"\"; ipakita(\"[\", s, \"]\"); }", "", "[]\n");
    assert_eq!(symbols.get("s"), Some(&Value::Text(String::new())));
}

#[test]
fn print_arguments_are_concatenated() {
    assert_output("simula() { a = 1; b = \"dalawa\"; ipakita(\"a=\", a, \", b=\", b); }",
                  "",
                  "a=1, b=dalawa\n");
}

#[test]
fn empty_print_writes_a_line_break() {
    assert_output("simula() { ipakita(); ipakita(); }", "", "\n\n");
}

#[test]
fn input_reads_an_integer() {
    let symbols = assert_output("simula() { x = pasok(\"Enter: \"); }", "42\n", "Enter: ");
    assert_eq!(symbols.get("x"), Some(&Value::from(42)));
    assert_eq!(symbols.len(), 1);
}

#[test]
fn input_reads_text() {
    let symbols = assert_output("simula() { x = pasok(\"Enter: \"); }", "abc\n", "Enter: ");
    let x = symbols.get("x").unwrap();
    assert_eq!(x, &Value::from("abc"));
    assert_eq!(x.as_text(), Some("abc"));
    assert_eq!(x.as_integer(), 0);
}

#[test]
fn input_replaces_previous_value() {
    let symbols = assert_output("simula() { x = \"luma\"; x = pasok(\"? \"); y = x + 1; ipakita(y); }",
                                "9\n",
                                "? 10\n");
    assert_eq!(symbols.get("x"), Some(&Value::Integer(9)));
}

#[test]
fn input_without_trailing_newline_or_with_crlf() {
    let symbols = assert_output("simula() { a = pasok(\"\"); b = pasok(\"\"); }", "5\r\nlast", "");
    assert_eq!(symbols.get("a"), Some(&Value::Integer(5)));
    assert_eq!(symbols.get("b"), Some(&Value::Text("last".into())));
}

#[test]
fn bare_input_statement_discards_the_value() {
    let symbols = assert_output("simula() { pasok(\"Pindutin ang Enter\"); ipakita(\"tapos\"); }",
                                "kahit ano\n",
                                "Pindutin ang Entertapos\n");
    assert!(symbols.is_empty());
}

#[test]
fn input_at_end_of_stream_is_error() {
    let e = assert_failure("simula() { x = pasok(\"? \"); }", "");
    assert!(matches!(e, Error::Runtime(RuntimeError::InvalidInput { .. })));
}

#[test]
fn input_with_invalid_utf8_is_kept_as_text() {
    let src = "simula() { n = pasok(\"Pangalan: \"); ipakita(n); }";
    let mut output = Vec::new();
    let symbols = run(src, &b"Jos\xe9\n"[..], &mut output).unwrap();

    assert_eq!(symbols.get("n"), Some(&Value::Text("Jos\u{FFFD}".into())));
    assert_eq!(String::from_utf8(output).unwrap(), "Pangalan: Jos\u{FFFD}\n");
}

#[test]
fn keyword_prefixes_are_variable_names() {
    let symbols = assert_output("simula() { pasokx = 3; ipakita(pasokx); }", "", "3\n");
    assert_eq!(symbols.get("pasokx"), Some(&Value::Integer(3)));
}

#[test]
fn repeated_terminators_are_accepted() {
    assert_output("simula() { x = 1;;; ipakita(x); y = 2;; ipakita(y); }", "", "1\n2\n");
}

#[test]
fn division_by_zero_in_a_program_stops_it() {
    let (result, output) = run_with("simula() { ipakita(\"una\"); x = 1 / 0; ipakita(\"hindi\"); }", "");
    assert!(matches!(result, Err(Error::Runtime(RuntimeError::DivisionByZero { line: 1 }))));
    assert_eq!(output, "una\n");
}

#[test]
fn missing_closing_paren_in_expression() {
    let e = assert_failure("simula() { x = (1 + 2; }", "");
    assert!(matches!(e,
                     Error::Parse(ParseError::ExpectedClosingParen { after: "expression", .. })));
    assert_eq!(e.to_string(), "Error on line 1: Expected ')' after expression.");
}

#[test]
fn missing_equals_in_assignment() {
    // Without `=`, the identifier cannot start any statement.
    let e = assert_failure("simula() { x 5; }", "");
    assert!(matches!(e, Error::Parse(ParseError::UnexpectedTokenInBody { .. })));
}

#[test]
fn assignment_requires_equals() {
    let tokens = tokenize("x 5;");
    let mut ctx = Context::new(std::io::empty(), std::io::sink());

    let e = ctx.exec_assignment(&mut tokens.iter().peekable()).unwrap_err();
    assert!(matches!(e, Error::Parse(ParseError::ExpectedEquals { line: 1 })));
    assert_eq!(e.to_string(), "Error on line 1: Expected '=' after variable name.");

    let tokens = tokenize("= 5;");
    let e = ctx.exec_assignment(&mut tokens.iter().peekable()).unwrap_err();
    assert!(matches!(e, Error::Parse(ParseError::ExpectedVariableName { .. })));
}

#[test]
fn skeleton_errors() {
    let cases = [("ipakita(1);", "Missing 'simula'"),
                 ("simula { }", "Missing '()'"),
                 ("simula( { }", "Missing '()'"),
                 ("simula() ipakita(x); }", "Missing '{' for body"),
                 ("simula() { x = 1;", "Missing '}' to close body"),
                 ("", "Missing 'simula'")];

    for (src, message) in cases {
        let e = assert_failure(src, "");
        assert!(e.to_string().contains(message), "{src:?} gave {e}");
    }
}

#[test]
fn unexpected_tokens_in_body() {
    for src in ["simula() { ; }", "simula() { 5; }", "simula() { x; }", "simula() { ( }"] {
        let e = assert_failure(src, "");
        assert!(matches!(e, Error::Parse(ParseError::UnexpectedTokenInBody { .. })), "{src:?}");
    }
}

#[test]
fn malformed_print_statements() {
    let e = assert_failure("simula() { ipakita x; }", "");
    assert!(matches!(e, Error::Parse(ParseError::ExpectedOpenParen { keyword: "ipakita", .. })));

    let e = assert_failure("simula() { ipakita(1); }", "");
    assert!(matches!(e, Error::Parse(ParseError::UnexpectedPrintArgument { .. })));

    let e = assert_failure("simula() { ipakita(x) }", "");
    assert!(matches!(e, Error::Parse(ParseError::ExpectedTerminator { keyword: "ipakita", .. })));

    let e = assert_failure("simula() { ipakita(x", "");
    assert!(matches!(e, Error::Parse(ParseError::ExpectedClosingParen { .. })));
}

#[test]
fn malformed_input_statements() {
    let e = assert_failure("simula() { x = pasok(5); }", "1\n");
    assert!(matches!(e, Error::Parse(ParseError::ExpectedPrompt { .. })));

    let (result, output) = run_with("simula() { x = pasok(\"?\"; }", "1\n");
    assert!(matches!(result,
                     Err(Error::Parse(ParseError::ExpectedClosingParen { after: "prompt", .. }))));
    assert_eq!(output, "?");

    let (result, output) = run_with("simula() { pasok(\"?\") }", "1\n");
    assert!(matches!(result,
                     Err(Error::Parse(ParseError::ExpectedTerminator { keyword: "pasok", .. }))));
    assert_eq!(output, "?");
}

#[test]
fn errors_report_their_line() {
    let src = "simula() {\n    x = 1;\n    y = x / 0;\n}\n";
    let e = assert_failure(src, "");
    assert_eq!(e.line(), 3);
    assert_eq!(e.to_string(), "Error on line 3: Division by zero.");
}

#[test]
fn tokens_after_the_body_are_ignored() {
    assert_output("simula() { ipakita(\"ok\"); } ipakita(\"wala\");", "", "ok\n");
}

#[test]
fn runs_are_independent() {
    assert_output("simula() { x = 10; }", "", "");
    assert_output("simula() { ipakita(x); }", "", "0\n");
}
