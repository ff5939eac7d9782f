use std::fmt;

use crate::util::Location;

use super::TokenWithLocation;

pub type LexResult = Result<TokenWithLocation, LexErr>;
pub type LexTokensResult = Result<Vec<TokenWithLocation>, LexErr>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexErr {
    pub kind: LexErrKind,
    pub location: Location,
}

impl LexErr {
    pub fn new(kind: LexErrKind, location: Location) -> Self {
        Self { kind, location }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LexErrKind {
    UnexpectedChar(char),
    IncompleteShift(char), // < or > not followed by its pair
}

impl fmt::Display for LexErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.kind, self.location)
    }
}

impl fmt::Display for LexErrKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use LexErrKind::*;
        match self {
            UnexpectedChar(c) => write!(f, "malformed token: unexpected character {c:?}"),
            IncompleteShift(c) => {
                write!(f, "malformed token: expected {c}{c}, found lone {c}")
            }
        }
    }
}
