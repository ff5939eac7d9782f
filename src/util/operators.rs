//! Binary operators applied by the evaluator. Every operator works on
//! `Int` values; the checked cases (division, remainder, and shifts)
//! report an `ArithmeticErr` instead of faulting.
use std::fmt;

use crate::lexer::Token;

use super::Int;

/// Binary operators.
#[derive(Clone, Copy, Eq, PartialEq)]
pub enum BinaryOperator {
    Mul,
    Div,
    Mod,
    Add,
    Sub,
    Shl,
    Shr,
    BitAnd,
    BitXor,
    BitOr,
}

/// Arithmetic failures, detected before the native operation runs.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ArithmeticErr {
    DivisionByZero,
    ShiftOutOfRange(Int),
}

impl BinaryOperator {
    pub fn from_token(token: &Token) -> Result<Self, String> {
        let op = match token {
            Token::Multiply => Self::Mul,
            Token::Divide => Self::Div,
            Token::Remainder => Self::Mod,
            Token::Plus => Self::Add,
            Token::Minus => Self::Sub,
            Token::ShiftLeft => Self::Shl,
            Token::ShiftRight => Self::Shr,
            Token::BitAnd => Self::BitAnd,
            Token::BitXor => Self::BitXor,
            Token::BitOr => Self::BitOr,
            _ => return Err(format!("Unknown binary operator: {token}")),
        };
        Ok(op)
    }

    /// Apply operator to `lhs` and `rhs`. Overflow wraps; division and
    /// remainder truncate toward zero.
    pub fn apply(&self, lhs: Int, rhs: Int) -> Result<Int, ArithmeticErr> {
        let value = match self {
            Self::Mul => lhs.wrapping_mul(rhs),
            Self::Div => {
                if rhs == 0 {
                    return Err(ArithmeticErr::DivisionByZero);
                }
                lhs.wrapping_div(rhs)
            }
            Self::Mod => {
                if rhs == 0 {
                    return Err(ArithmeticErr::DivisionByZero);
                }
                lhs.wrapping_rem(rhs)
            }
            Self::Add => lhs.wrapping_add(rhs),
            Self::Sub => lhs.wrapping_sub(rhs),
            Self::Shl => lhs << shift_amount(rhs)?,
            Self::Shr => lhs >> shift_amount(rhs)?,
            Self::BitAnd => lhs & rhs,
            Self::BitXor => lhs ^ rhs,
            Self::BitOr => lhs | rhs,
        };
        Ok(value)
    }
}

/// Shift amounts must be in 0..Int::BITS.
fn shift_amount(rhs: Int) -> Result<u32, ArithmeticErr> {
    match u32::try_from(rhs) {
        Ok(amount) if amount < Int::BITS => Ok(amount),
        _ => Err(ArithmeticErr::ShiftOutOfRange(rhs)),
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let string = match self {
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Shl => "<<",
            Self::Shr => ">>",
            Self::BitAnd => "&",
            Self::BitXor => "^",
            Self::BitOr => "|",
        };
        write!(f, "{string}")
    }
}

impl fmt::Debug for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_token() {
        assert_eq!(BinaryOperator::from_token(&Token::ShiftLeft), Ok(BinaryOperator::Shl));
        assert!(BinaryOperator::from_token(&Token::LParen).is_err());
        assert!(BinaryOperator::from_token(&Token::Number(1)).is_err());
    }

    #[test]
    fn truncating_division() {
        assert_eq!(BinaryOperator::Div.apply(-7, 2), Ok(-3));
        assert_eq!(BinaryOperator::Mod.apply(-7, 2), Ok(-1));
        assert_eq!(BinaryOperator::Mod.apply(7, -2), Ok(1));
    }

    #[test]
    fn division_by_zero() {
        assert_eq!(BinaryOperator::Div.apply(1, 0), Err(ArithmeticErr::DivisionByZero));
        assert_eq!(BinaryOperator::Mod.apply(1, 0), Err(ArithmeticErr::DivisionByZero));
    }

    #[test]
    fn overflow_wraps() {
        assert_eq!(BinaryOperator::Add.apply(Int::MAX, 1), Ok(Int::MIN));
        assert_eq!(BinaryOperator::Div.apply(Int::MIN, -1), Ok(Int::MIN));
        assert_eq!(BinaryOperator::Mod.apply(Int::MIN, -1), Ok(0));
    }

    #[test]
    fn shifts() {
        assert_eq!(BinaryOperator::Shl.apply(1, 63), Ok(Int::MIN));
        assert_eq!(BinaryOperator::Shr.apply(-16, 2), Ok(-4));
        assert_eq!(
            BinaryOperator::Shl.apply(1, 64),
            Err(ArithmeticErr::ShiftOutOfRange(64))
        );
        assert_eq!(
            BinaryOperator::Shr.apply(1, -1),
            Err(ArithmeticErr::ShiftOutOfRange(-1))
        );
    }
}
