//! Non-interactive front end: evaluate a single expression or a file
//! (or stdin) of expressions, one per line.
use std::fs::File;
use std::io::{self, BufRead, BufReader};

use crate::config::Config;
use crate::evaluator::{EvalErr, EvalResult, Evaluator};
use crate::lexer::scan_text;
use crate::result::{CalcErr, CalcErrKind, CalcResult};

/// Evaluate `text` and print the result. The exit code is 1 if the
/// expression is invalid.
pub fn run_code(text: &str, config: &Config) -> CalcResult {
    match eval_and_print(text, config) {
        Ok(_) => Ok(0),
        Err(err) => {
            print_source_line(text, &err);
            eprintln!("Error: {}", err.kind);
            Ok(1)
        }
    }
}

/// Evaluate each non-blank line of a file, or of stdin if the file
/// name is `-`. Every line is evaluated even if some fail; the exit
/// code is 1 if any did.
pub fn run_file(file_name: &str, config: &Config) -> CalcResult {
    let reader: Box<dyn BufRead> = if file_name == "-" {
        Box::new(BufReader::new(io::stdin()))
    } else {
        let file = File::open(file_name).map_err(|err| read_err(file_name, err))?;
        Box::new(BufReader::new(file))
    };
    run_lines(reader, file_name, config)
}

fn run_lines(reader: impl BufRead, file_name: &str, config: &Config) -> CalcResult {
    let mut failures = 0;
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|err| read_err(file_name, err))?;
        if line.trim().is_empty() {
            continue;
        }
        if let Err(err) = eval_and_print(&line, config) {
            print_source_line(&line, &err);
            eprintln!("Error on line {}: {}", index + 1, err.kind);
            failures += 1;
        }
    }
    log::debug!("{file_name}: {failures} expression(s) failed");
    Ok(if failures > 0 { 1 } else { 0 })
}

/// Evaluate one expression and print its value on success. Errors
/// are left to the caller to report.
pub fn eval_and_print(text: &str, config: &Config) -> EvalResult {
    if config.show_tokens {
        print_tokens(text);
    }
    let value = Evaluator::new(text, config.max_depth).evaluate()?;
    println!("{value}");
    Ok(value)
}

/// Print the tokens in `text` to stderr. A lex error stops the listing
/// quietly since evaluation will report it.
pub fn print_tokens(text: &str) {
    match scan_text(text) {
        Ok(tokens) => {
            for token in tokens {
                eprintln!("{token}");
            }
        }
        Err(err) => log::debug!("Token listing stopped: {err}"),
    }
}

/// Print a caret under the column where `err` occurred. `indent` is
/// the width of whatever precedes the source text on screen (e.g., a
/// prompt).
pub fn print_caret(err: &EvalErr, indent: usize) {
    let width = indent + err.location.col.saturating_sub(1);
    eprintln!("{: >width$}^", "", width = width);
}

fn print_source_line(text: &str, err: &EvalErr) {
    let line_index = err.location.line.saturating_sub(1);
    if let Some(line) = text.lines().nth(line_index) {
        eprintln!("{line}");
        print_caret(err, 0);
    }
}

fn read_err(file_name: &str, err: io::Error) -> CalcErr {
    CalcErr::new(CalcErrKind::CouldNotReadSourceFile(format!("{file_name}: {err}")))
}
