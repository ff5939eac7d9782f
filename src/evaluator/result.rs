use std::fmt;

use crate::lexer::{LexErr, LexErrKind, Token};
use crate::util::{ArithmeticErr, BinaryOperator, Int, Location};

pub type EvalResult = Result<Int, EvalErr>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalErr {
    pub kind: EvalErrKind,
    pub location: Location,
}

impl EvalErr {
    pub fn new(kind: EvalErrKind, location: Location) -> Self {
        Self { kind, location }
    }

    pub fn arithmetic(op: BinaryOperator, err: ArithmeticErr, location: Location) -> Self {
        let kind = match err {
            ArithmeticErr::DivisionByZero => EvalErrKind::DivisionByZero(op),
            ArithmeticErr::ShiftOutOfRange(amount) => EvalErrKind::ShiftOutOfRange(amount),
        };
        Self::new(kind, location)
    }
}

impl From<LexErr> for EvalErr {
    fn from(err: LexErr) -> Self {
        Self::new(EvalErrKind::LexErr(err.kind), err.location)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrKind {
    LexErr(LexErrKind),
    UnexpectedToken(Token),
    ExpectedOperator(Token),
    MissingClosingParen,
    DivisionByZero(BinaryOperator), // / or %
    ShiftOutOfRange(Int),
    NestingTooDeep(usize), // max depth
}

impl EvalErrKind {
    pub fn is_lexical(&self) -> bool {
        matches!(self, Self::LexErr(_))
    }

    pub fn is_syntax(&self) -> bool {
        matches!(
            self,
            Self::UnexpectedToken(_) | Self::ExpectedOperator(_) | Self::MissingClosingParen
        )
    }

    pub fn is_arithmetic(&self) -> bool {
        matches!(self, Self::DivisionByZero(_) | Self::ShiftOutOfRange(_))
    }
}

impl fmt::Display for EvalErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.kind, self.location)
    }
}

impl fmt::Display for EvalErrKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use EvalErrKind::*;
        let msg = match self {
            LexErr(kind) => format!("{kind}"),
            UnexpectedToken(token) => format!("unexpected token: {token}"),
            ExpectedOperator(token) if token.is_number() => {
                "expected operator, not variable".to_owned()
            }
            ExpectedOperator(token) => format!("expected operator, found {token}"),
            MissingClosingParen => "missing closing parenthesis".to_owned(),
            DivisionByZero(op) => format!("division by zero ({op})"),
            ShiftOutOfRange(amount) => format!("shift amount out of range: {amount}"),
            NestingTooDeep(max_depth) => {
                format!("expression nested too deeply (max depth: {max_depth})")
            }
        };
        write!(f, "{msg}")
    }
}
