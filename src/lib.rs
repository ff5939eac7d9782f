//! Evaluate integer expressions like `(1 + 2) * 3 << 1`.
//!
//! The lexer hands out one token at a time and the evaluator folds them
//! into a value as it goes using precedence climbing:
//!
//! ```
//! assert_eq!(intcalc::eval_text("1 + 2 * 3"), Ok(7));
//! assert_eq!(intcalc::eval_text("10 - 3 - 2"), Ok(5));
//! assert!(intcalc::eval_text("5 / 0").is_err());
//! ```
pub use evaluator::{eval_text, EvalErr, EvalErrKind, EvalResult, Evaluator};
pub use lexer::{scan_text, LexErr, LexErrKind, Token, TokenWithLocation};
pub use util::{Int, Location};

pub mod cli;
pub mod config;
pub mod evaluator;
pub mod lexer;
pub mod repl;
pub mod result;
pub mod run;
pub mod util;
