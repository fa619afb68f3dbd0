use std::fs;

use walkdir::WalkDir;
use ysh::{Environment, Value, shell};

/// Runs a script line by line in a fresh environment.
///
/// Fails on the first fatal error or error value.
fn run_script(source: &str) -> Result<Environment, String> {
    let mut env = Environment::new();

    for line in shell::logical_lines(source) {
        let values = shell::run_line(&line.text, &mut env).map_err(|e| {
                                                               format!("line {}: {e}",
                                                                       line.number)
                                                           })?;
        if let Some(Value::Error(message)) = values.iter().find(|v| v.is_error()) {
            return Err(format!("line {}: {}\n{message}", line.number, line.text));
        }
    }

    Ok(env)
}

fn assert_success(src: &str) {
    if let Err(e) = run_script(src) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) {
    if run_script(src).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

#[test]
fn script_examples_work() {
    let mut count = 0;

    let is_script = |e: &walkdir::DirEntry| e.path().extension().is_some_and(|ext| ext == "ysh");

    for entry in WalkDir::new("tests/scripts").into_iter()
                                              .filter_map(Result::ok)
                                              .filter(is_script)
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        if let Err(e) = run_script(&content) {
            panic!("Script {path:?} failed:\n{e}");
        }
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

#[test]
fn assignment_and_basic_arithmetic() {
    assert_success("(x <- 1 + 2)\n(assert (x = 3))");
    assert_success("(x <- 7 * 9)\n(assert (x = 63))");
    assert_success("(x <- 8 - 5)\n(assert (x = 3))");
    assert_success("(x <- 10 / 3)\n(assert (x = 3))");
}

#[test]
fn assignment_reads_the_old_value() {
    assert_success("(x <- 5)\n(x <- x + 1)\n(assert (x = 6))");
}

#[test]
fn bindings_persist_across_lines_and_tokens() {
    assert_success("(a <- 2) (b <- 3)\n(assert (a * b = 6))");
}

#[test]
fn line_continuation_joins_lines() {
    assert_success("(total <- 1 + \\\n 2)\n(assert (total = 3))");
}

#[test]
fn comments_and_blank_lines_are_skipped() {
    assert_success("# heading\n\n(assert 1) # trailing\n");
}

#[test]
fn builtin_functions() {
    assert_success("(assert ((sqrt 9) = 3))");
    assert_success("(assert ((abs (0 - 5)) = 5))");
    assert_success("(assert ((len \"abc\") = 3))");
    assert_success("(assert ((type 1.5) = \"Real\"))");
    assert_success("(assert ((int \"42\") = 42))");
}

#[test]
fn user_defined_function_and_calls() {
    assert_success("(double <- x -> \"x * 2\")\n(assert ((double 21) = 42))");
    assert_success("(add <- a -> \"b -> \\\"a + b\\\"\")\n(assert ((add 2 5) = 7))");
}

#[test]
fn functions_capture_a_snapshot() {
    assert_success("(k <- 1)\n(f <- x -> \"x + k\")\n(k <- 100)\n(assert ((f 1) = 2))");
}

#[test]
fn application_heads_read_left_to_right() {
    assert_success("(add <- a -> \"b -> \\\"a + b\\\"\")\n(assert (add 1 2 + 4 * 5 = 35))");
}

#[test]
fn division_by_zero_is_an_error_value() {
    assert_failure("(1 / 0)");
    assert_success("(assert (is_error (1 / 0)))");
}

#[test]
fn failed_assertion_is_error() {
    assert_failure("(assert (1 = 2))");
}

#[test]
fn unknown_variable_is_error() {
    assert_failure("(assert (foo = 1))");
}

#[test]
fn unbalanced_brackets_are_errors() {
    assert_failure("(1 + 2");
    assert_failure("1 + 2)");
    assert_failure("((1 + 2]");
}
