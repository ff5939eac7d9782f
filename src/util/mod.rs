pub use operators::{ArithmeticErr, BinaryOperator};
pub use source::{source_from_text, Location, Source};

mod operators;
mod source;

/// Integer type all expressions evaluate to.
pub type Int = i64;
