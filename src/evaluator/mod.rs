pub use evaluator::{eval_text, Evaluator, DEFAULT_MAX_DEPTH};
pub use precedence::{get_binary_precedence, Precedence, MIN_PRECEDENCE};
pub use result::{EvalErr, EvalErrKind, EvalResult};

mod evaluator;
mod precedence;
mod result;
