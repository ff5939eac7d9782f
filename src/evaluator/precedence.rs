use crate::lexer::Token;

pub type Precedence = u16;

/// Precedence the outermost expression (and every parenthesized
/// sub-expression) starts from. Any operator binds tighter than this.
pub const MIN_PRECEDENCE: Precedence = 0;

#[rustfmt::skip]
/// Return the binary precedence of the specified token. 0 indicates
/// that the token is not an operator. Parens get the highest value,
/// but that only bounds nesting; they're never applied as operators.
///
/// All binary operators are left-associative.
pub const fn get_binary_precedence(token: &Token) -> Precedence {
    match token {
        | Token::BitOr            => 300, // a | b
        | Token::BitXor           => 400, // a ^ b
        | Token::BitAnd           => 500, // a & b

        | Token::ShiftLeft                // a << b
        | Token::ShiftRight       => 600, // a >> b

        | Token::Plus                     // a + b
        | Token::Minus            => 700, // a - b

        | Token::Multiply                 // a * b
        | Token::Divide                   // a / b   (truncating)
        | Token::Remainder        => 800, // a % b

        | Token::LParen
        | Token::RParen           => 900,

        | Token::Number(_)
        | Token::End              => 0,   // not an operator
    }
}
