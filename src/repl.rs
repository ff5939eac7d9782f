//! # intcalc REPL
use std::fs;

use rustyline::config::{Configurer, EditMode};
use rustyline::error::ReadlineError;

use crate::config::Config;
use crate::result::{CalcErr, CalcErrKind, CalcResult};
use crate::run::{eval_and_print, print_caret};

const PROMPT: &str = "→ ";
const PROMPT_WIDTH: usize = 2;

/// Run REPL until user exits.
pub fn run(config: &Config) -> CalcResult {
    let mut repl = Repl::new(config)?;
    repl.run()
}

/// What to do with a line of input.
#[derive(Debug, PartialEq, Eq)]
pub enum ReplAction<'a> {
    /// Blank or all-whitespace line.
    Skip,
    Exit,
    Help,
    SetEditMode(EditMode),
    UnknownCommand(&'a str),
    Eval(&'a str),
}

/// Decide what a line of input means without acting on it.
pub fn handle_line(text: &str) -> ReplAction<'_> {
    match text.trim() {
        "" => ReplAction::Skip,
        "q" | "quit" | "exit" | ".q" | ".quit" | ".exit" => ReplAction::Exit,
        "?" | ".help" => ReplAction::Help,
        ".emacs" => ReplAction::SetEditMode(EditMode::Emacs),
        ".vi" | ".vim" => ReplAction::SetEditMode(EditMode::Vi),
        command if command.starts_with('.') => ReplAction::UnknownCommand(command),
        _ => ReplAction::Eval(text),
    }
}

pub struct Repl {
    reader: rustyline::Editor<()>,
    config: Config,
}

impl Repl {
    pub fn new(config: &Config) -> Result<Self, CalcErr> {
        let reader = rustyline::Editor::<()>::new().map_err(|err| {
            CalcErr::new(CalcErrKind::ReplErr(format!("Could not initialize readline: {err}")))
        })?;
        Ok(Repl { reader, config: config.clone() })
    }

    pub fn run(&mut self) -> CalcResult {
        println!("Welcome to the intcalc REPL (read/eval/print loop)");
        println!("Type an expression, then hit Enter to evaluate it");
        self.load_history();
        println!("Type .help for help or q to exit");

        loop {
            match self.reader.readline(PROMPT) {
                Ok(input) => {
                    if self.eval(input.as_str()) {
                        break Ok(0);
                    }
                }
                // User hit Ctrl-C
                Err(ReadlineError::Interrupted) => {
                    println!("Use Ctrl-D or q to exit");
                }
                // User hit Ctrl-D
                Err(ReadlineError::Eof) => {
                    break Ok(0);
                }
                // Unexpected error encountered while attempting to read
                // a line.
                Err(err) => {
                    let msg = format!("Could not read line: {err}");
                    break Err(CalcErr::new(CalcErrKind::ReplErr(msg)));
                }
            }
        }
    }

    /// Handle a line of input. Returns true when the REPL should exit.
    /// Bad input is reported and otherwise ignored.
    fn eval(&mut self, text: &str) -> bool {
        let action = handle_line(text);
        if action != ReplAction::Skip {
            self.add_history_entry(text);
        }
        match action {
            ReplAction::Skip => (),
            ReplAction::Exit => return true,
            ReplAction::Help => print_help(),
            ReplAction::SetEditMode(mode) => self.reader.set_edit_mode(mode),
            ReplAction::UnknownCommand(command) => {
                eprintln!("Unknown command: {command} (type .help for help)");
            }
            ReplAction::Eval(text) => {
                if let Err(err) = eval_and_print(text, &self.config) {
                    print_caret(&err, PROMPT_WIDTH);
                    eprintln!("Error: {}", err.kind);
                }
            }
        }
        false
    }

    fn load_history(&mut self) {
        if let Some(path) = &self.config.history_path {
            println!("REPL history will be saved to {}", path.to_string_lossy());
            if let Some(dir) = path.parent() {
                if let Err(err) = fs::create_dir_all(dir) {
                    log::warn!("Could not create REPL history directory: {err}");
                }
            }
            if path.exists() {
                if let Err(err) = self.reader.load_history(path.as_path()) {
                    eprintln!("Could not load REPL history: {err}");
                }
            }
        }
    }

    fn add_history_entry(&mut self, input: &str) {
        if let Some(path) = &self.config.history_path {
            self.reader.add_history_entry(input);
            if let Err(err) = self.reader.save_history(path.as_path()) {
                log::warn!("Could not save REPL history: {err}");
            }
        }
    }
}

fn print_help() {
    eprintln!("{:=>72}", "");
    eprintln!("intcalc Help");
    eprintln!("{:->72}", "");
    eprintln!("Operators, loosest to tightest: | ^ & << >> + - * / %");
    eprintln!("Use parens to group. A - directly before a digit is a");
    eprintln!("negative number when an operand is expected (-5, 3 - -5).");
    eprintln!("{:->72}", "");
    eprintln!(".help      -> show this help");
    eprintln!(".exit      -> exit (also q, quit, exit)");
    eprintln!(".emacs     -> switch to emacs-style input (default)");
    eprintln!(".vi        -> switch to vi-style input");
    eprintln!("{:=>72}", "");
}
