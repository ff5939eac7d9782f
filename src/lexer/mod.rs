pub use lexer::{scan_text, Expect, Lexer};
pub use result::{LexErr, LexErrKind, LexResult, LexTokensResult};
pub use token::{Token, TokenWithLocation};

#[cfg(test)]
pub(crate) use lexer::scan_optimistic;

mod lexer;
mod result;
mod token;

#[cfg(test)]
mod tests;
