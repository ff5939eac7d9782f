use crate::lexer::{Expect, Lexer, Token, TokenWithLocation};
use crate::util::{BinaryOperator, Int, Location};

use super::precedence::{Precedence, MIN_PRECEDENCE};
use super::result::{EvalErr, EvalErrKind, EvalResult};

/// Nesting depth allowed when none is configured. Counts parenthesized
/// groups *and* right hand operands that bind tighter than their left
/// hand side.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Evaluate the text as a single integer expression using the default
/// max nesting depth.
pub fn eval_text(text: &str) -> EvalResult {
    Evaluator::new(text, DEFAULT_MAX_DEPTH).evaluate()
}

/// Precedence climbing evaluator. The value of each sub-expression is
/// computed as soon as its operands are known, so no tree is built.
///
/// Grammar:
///
/// ```text
/// expression := factor (operator factor)*
/// factor     := number | "(" expression ")"
/// ```
///
/// The lexer is told which of the two it should expect next, since
/// that's what decides whether `-5` is a negative number or a minus
/// followed by 5.
pub struct Evaluator<'a> {
    lexer: Lexer<'a>,
    /// The token currently being looked at. It's only consumed when
    /// the next one is fetched.
    token: TokenWithLocation,
    depth: usize,
    max_depth: usize,
}

impl<'a> Evaluator<'a> {
    pub fn new(text: &'a str, max_depth: usize) -> Self {
        let start = Location::new(1, 1);
        Self {
            lexer: Lexer::new(text),
            token: TokenWithLocation::new(Token::End, start, start),
            depth: 0,
            max_depth,
        }
    }

    /// Evaluate the whole text. Everything must be consumed; a trailing
    /// `)` without an opening paren is an error.
    pub fn evaluate(mut self) -> EvalResult {
        self.advance(Expect::Factor)?;
        let value = self.expression(MIN_PRECEDENCE)?;
        match self.token.token {
            Token::End => {
                log::debug!("RESULT: {value}");
                Ok(value)
            }
            token => Err(self.err(EvalErrKind::UnexpectedToken(token))),
        }
    }

    /// Fetch the next token, replacing the current one.
    fn advance(&mut self, expect: Expect) -> Result<(), EvalErr> {
        self.token = self.lexer.next_token(expect)?;
        Ok(())
    }

    /// Create a new EvalErr of the specified kind at the current token.
    fn err(&self, kind: EvalErrKind) -> EvalErr {
        EvalErr::new(kind, self.token.start)
    }

    // Grammar

    /// A number or a parenthesized expression.
    fn factor(&mut self) -> EvalResult {
        match self.token.token {
            Token::Number(value) => {
                self.advance(Expect::Operator)?;
                Ok(value)
            }
            Token::LParen => {
                self.advance(Expect::Factor)?;
                let value = self.expression(MIN_PRECEDENCE)?;
                if self.token.token != Token::RParen {
                    return Err(self.err(EvalErrKind::MissingClosingParen));
                }
                self.advance(Expect::Operator)?;
                Ok(value)
            }
            token => Err(self.err(EvalErrKind::UnexpectedToken(token))),
        }
    }

    /// Evaluate a factor followed by any operators that bind tighter
    /// than `min_precedence` (and their right hand sides).
    ///
    /// Each right hand side is evaluated with the operator's own
    /// precedence as the floor, so it only picks up operators that
    /// bind strictly tighter. An operator of equal precedence hands
    /// control back to this loop, which makes every operator left-
    /// associative: 10 - 3 - 2 is (10 - 3) - 2.
    fn expression(&mut self, min_precedence: Precedence) -> EvalResult {
        if self.depth >= self.max_depth {
            return Err(self.err(EvalErrKind::NestingTooDeep(self.max_depth)));
        }
        self.depth += 1;
        log::trace!("BEGIN: expression with min precedence {min_precedence}");

        let mut value = self.factor()?;

        loop {
            let op_token = self.token;
            let precedence = match op_token.token {
                Token::End | Token::RParen => break,
                // Two operands in a row.
                Token::Number(_) | Token::LParen => {
                    return Err(self.err(EvalErrKind::ExpectedOperator(op_token.token)));
                }
                token => token.precedence(),
            };

            if precedence <= min_precedence {
                break;
            }

            let op = BinaryOperator::from_token(&op_token.token)
                .map_err(|_| self.err(EvalErrKind::UnexpectedToken(op_token.token)))?;

            self.advance(Expect::Factor)?;
            let rhs = self.expression(precedence)?;

            value = self.apply(op, value, rhs, op_token.start)?;
        }

        log::trace!("END: expression with min precedence {min_precedence} = {value}");
        self.depth -= 1;
        Ok(value)
    }

    fn apply(&self, op: BinaryOperator, lhs: Int, rhs: Int, location: Location) -> EvalResult {
        log::trace!("APPLY: {lhs} {op} {rhs}");
        op.apply(lhs, rhs).map_err(|err| EvalErr::arithmetic(op, err, location))
    }
}
