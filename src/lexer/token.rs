use std::fmt;

use crate::evaluator::get_binary_precedence;
use crate::util::{Int, Location};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token {
    Number(Int), // 1, 123, -5 (when an operand is expected)

    Plus,      // +
    Minus,     // -
    Multiply,  // *
    Divide,    // /
    Remainder, // %

    BitAnd,     // &
    BitOr,      // |
    BitXor,     // ^
    ShiftLeft,  // <<
    ShiftRight, // >>

    LParen, // (
    RParen, // )

    End,
}

impl Token {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Number(_) => "number",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Remainder => "%",
            Self::BitAnd => "&",
            Self::BitOr => "|",
            Self::BitXor => "^",
            Self::ShiftLeft => "<<",
            Self::ShiftRight => ">>",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::End => "end of input",
        }
    }

    /// Binding strength of this token. 0 for numbers and the end
    /// marker.
    pub fn precedence(&self) -> u16 {
        get_binary_precedence(self)
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            other => write!(f, "{}", other.as_str()),
        }
    }
}

// A token with its start and end locations in the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenWithLocation {
    pub token: Token,
    pub start: Location,
    pub end: Location,
}

impl TokenWithLocation {
    pub fn new(token: Token, start: Location, end: Location) -> Self {
        Self { token, start, end }
    }
}

impl fmt::Display for TokenWithLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {} -> {}", self.token, self.start, self.end)
    }
}
