use crate::util::{source_from_text, Int, Source};

use super::result::{LexErr, LexErrKind, LexResult, LexTokensResult};
use super::token::{Token, TokenWithLocation};

type NextOption = Option<(char, Option<char>)>;

/// What the caller is about to parse. This decides whether a `-`
/// directly followed by a digit starts a negative number or is the
/// subtraction operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Expect {
    Factor,
    Operator,
}

/// Scan the text into tokens up front and return them or the first
/// error. The end marker is *not* included.
///
/// The lexer needs to know whether an operand or an operator comes
/// next. Here that's derived from the previous token: a number or `)`
/// is followed by an operator, anything else by an operand.
pub fn scan_text(text: &str) -> LexTokensResult {
    let mut lexer = Lexer::new(text);
    let mut tokens = vec![];
    let mut expect = Expect::Factor;
    loop {
        let token = lexer.next_token(expect)?;
        expect = match token.token {
            Token::End => break Ok(tokens),
            Token::Number(_) | Token::RParen => Expect::Operator,
            _ => Expect::Factor,
        };
        tokens.push(token);
    }
}

/// Scan text and assume success, returning tokens in unwrapped form.
/// Panic on error. Mainly useful for testing.
#[cfg(test)]
pub fn scan_optimistic(text: &str) -> Vec<TokenWithLocation> {
    match scan_text(text) {
        Ok(tokens) => tokens,
        Err(err) => panic!("Scan failed unexpectedly: {err:?}"),
    }
}

/// Hands out one token at a time. Owned by a single evaluation.
pub struct Lexer<'a> {
    source: Source<'a>,
}

impl<'a> Lexer<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { source: source_from_text(text) }
    }

    /// Consume and return the next token. Once the end of the text is
    /// reached, every subsequent call returns `End` again.
    pub fn next_token(&mut self, expect: Expect) -> LexResult {
        self.consume_whitespace();

        let start = self.source.next_loc();

        let token = match self.next_char() {
            Some((c @ '0'..='9', _)) => Token::Number(self.read_number(c, false)),
            Some(('-', Some(d @ '0'..='9'))) if expect == Expect::Factor => {
                self.source.next();
                Token::Number(self.read_number(d, true))
            }
            Some(('+', _)) => Token::Plus,
            Some(('-', _)) => Token::Minus,
            Some(('*', _)) => Token::Multiply,
            Some(('/', _)) => Token::Divide,
            Some(('%', _)) => Token::Remainder,
            Some(('&', _)) => Token::BitAnd,
            Some(('|', _)) => Token::BitOr,
            Some(('^', _)) => Token::BitXor,
            Some(('<', Some('<'))) => self.consume_char_and_return_token(Token::ShiftLeft),
            Some(('>', Some('>'))) => self.consume_char_and_return_token(Token::ShiftRight),
            Some((c @ ('<' | '>'), _)) => {
                return Err(LexErr::new(LexErrKind::IncompleteShift(c), start));
            }
            Some(('(', _)) => Token::LParen,
            Some((')', _)) => Token::RParen,
            // Unknown
            Some((c, _)) => {
                return Err(LexErr::new(LexErrKind::UnexpectedChar(c), start));
            }
            // End of input
            None => Token::End,
        };

        let end = match token {
            Token::End => start,
            _ => self.source.loc(),
        };
        let token = TokenWithLocation::new(token, start, end);
        log::trace!("TOKEN ({expect:?}): {token}");
        Ok(token)
    }

    /// Consume the next character and return the specified token.
    fn consume_char_and_return_token(&mut self, token: Token) -> Token {
        self.source.next();
        token
    }

    /// Consume and return the next character. The following character
    /// is included as well for easy peeking.
    fn next_char(&mut self) -> NextOption {
        let c = self.source.next()?;
        let d = self.source.peek().copied();
        Some((c, d))
    }

    /// Skip spaces, tabs, carriage returns, and newlines.
    fn consume_whitespace(&mut self) {
        while self.source.next_if(|&c| matches!(c, ' ' | '\t' | '\r' | '\n')).is_some() {}
    }

    /// Read the rest of a decimal number. Digits are consumed greedily
    /// and the value wraps on overflow.
    fn read_number(&mut self, first_digit: char, negative: bool) -> Int {
        let mut value = digit_value(first_digit);
        while let Some(digit) = self.source.next_if(|c| c.is_ascii_digit()) {
            value = value.wrapping_mul(10).wrapping_add(digit_value(digit));
        }
        if negative {
            value.wrapping_neg()
        } else {
            value
        }
    }
}

fn digit_value(digit: char) -> Int {
    Int::from(digit as u8 - b'0')
}
