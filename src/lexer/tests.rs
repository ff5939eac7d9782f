use crate::util::{Int, Location};

use super::*;

fn kinds(text: &str) -> Vec<Token> {
    scan_optimistic(text).into_iter().map(|t| t.token).collect()
}

fn check_token(
    token: Option<&TokenWithLocation>,
    expected: Token,
    start_col: usize,
    end_col: usize,
) {
    assert_eq!(
        token,
        Some(&TokenWithLocation::new(
            expected,
            Location::new(1, start_col),
            Location::new(1, end_col)
        ))
    );
}

#[test]
fn scan_empty() {
    let tokens = scan_optimistic("");
    assert_eq!(tokens.len(), 0);
}

#[test]
fn scan_whitespace_only() {
    let tokens = scan_optimistic(" \t\r\n ");
    assert_eq!(tokens.len(), 0);
}

#[test]
fn scan_int() {
    let tokens = scan_optimistic("123");
    assert_eq!(tokens.len(), 1);
    check_token(tokens.first(), Token::Number(123), 1, 3);
}

#[test]
fn scan_binary_operation() {
    let tokens = scan_optimistic("1 + 23");
    assert_eq!(tokens.len(), 3);
    check_token(tokens.first(), Token::Number(1), 1, 1);
    check_token(tokens.get(1), Token::Plus, 3, 3);
    check_token(tokens.get(2), Token::Number(23), 5, 6);
}

#[test]
fn scan_all_operators() {
    assert_eq!(
        kinds("1+2-3*4/5%6&7|8^9<<1>>2"),
        vec![
            Token::Number(1),
            Token::Plus,
            Token::Number(2),
            Token::Minus,
            Token::Number(3),
            Token::Multiply,
            Token::Number(4),
            Token::Divide,
            Token::Number(5),
            Token::Remainder,
            Token::Number(6),
            Token::BitAnd,
            Token::Number(7),
            Token::BitOr,
            Token::Number(8),
            Token::BitXor,
            Token::Number(9),
            Token::ShiftLeft,
            Token::Number(1),
            Token::ShiftRight,
            Token::Number(2),
        ]
    );
}

#[test]
fn scan_shift_location() {
    let tokens = scan_optimistic("1 << 3");
    check_token(tokens.get(1), Token::ShiftLeft, 3, 4);
}

#[test]
fn scan_negative_number_at_start() {
    let tokens = scan_optimistic("-5+3");
    assert_eq!(tokens.len(), 3);
    check_token(tokens.first(), Token::Number(-5), 1, 2);
    check_token(tokens.get(1), Token::Plus, 3, 3);
}

#[test]
fn scan_subtraction_without_spaces() {
    assert_eq!(kinds("3-5"), vec![Token::Number(3), Token::Minus, Token::Number(5)]);
}

#[test]
fn scan_subtraction_with_space_after_minus() {
    assert_eq!(kinds("3- 5"), vec![Token::Number(3), Token::Minus, Token::Number(5)]);
}

#[test]
fn scan_negative_number_after_operator() {
    assert_eq!(kinds("3 - -5"), vec![Token::Number(3), Token::Minus, Token::Number(-5)]);
}

#[test]
fn scan_negative_number_in_parens() {
    assert_eq!(
        kinds("(-5)-1"),
        vec![
            Token::LParen,
            Token::Number(-5),
            Token::RParen,
            Token::Minus,
            Token::Number(1)
        ]
    );
}

#[test]
fn scan_minus_before_paren_is_operator() {
    assert_eq!(kinds("-(1)"), vec![Token::Minus, Token::LParen, Token::Number(1), Token::RParen]);
}

#[test]
fn minus_depends_on_hint() {
    let mut lexer = Lexer::new("-7");
    let token = lexer.next_token(Expect::Operator).unwrap();
    assert_eq!(token.token, Token::Minus);
    assert_eq!(lexer.next_token(Expect::Operator).unwrap().token, Token::Number(7));

    let mut lexer = Lexer::new("-7");
    let token = lexer.next_token(Expect::Factor).unwrap();
    assert_eq!(token.token, Token::Number(-7));
}

#[test]
fn end_is_repeatable() {
    let mut lexer = Lexer::new("1 ");
    assert_eq!(lexer.next_token(Expect::Factor).unwrap().token, Token::Number(1));
    for _ in 0..3 {
        let token = lexer.next_token(Expect::Operator).unwrap();
        assert_eq!(token.token, Token::End);
        assert_eq!(token.start, Location::new(1, 3));
    }
}

#[test]
fn nul_terminates_input() {
    assert_eq!(kinds("1+2\0*3"), vec![Token::Number(1), Token::Plus, Token::Number(2)]);
}

#[test]
fn scan_across_newline() {
    let tokens = scan_optimistic("1\n+ 2");
    assert_eq!(tokens.get(1).unwrap().start, Location::new(2, 1));
    assert_eq!(tokens.get(2).unwrap().start, Location::new(2, 3));
}

#[test]
fn scan_wraps_on_overflow() {
    assert_eq!(kinds("9223372036854775808"), vec![Token::Number(Int::MIN)]);
    assert_eq!(kinds("-9223372036854775808"), vec![Token::Number(Int::MIN)]);
}

#[test]
fn scan_precedence() {
    let precedence = |text: &str| scan_optimistic(text)[0].token.precedence();
    assert_eq!(precedence("|"), 300);
    assert_eq!(precedence("^"), 400);
    assert_eq!(precedence("&"), 500);
    assert_eq!(precedence("<<"), 600);
    assert_eq!(precedence(">>"), 600);
    assert_eq!(precedence("+"), 700);
    assert_eq!(precedence("-"), 700);
    assert_eq!(precedence("*"), 800);
    assert_eq!(precedence("/"), 800);
    assert_eq!(precedence("%"), 800);
    assert_eq!(precedence("("), 900);
    assert_eq!(precedence(")"), 900);
    assert_eq!(precedence("1"), 0);
    assert_eq!(Token::End.precedence(), 0);
}

#[test]
fn scan_unexpected_char() {
    let result = scan_text("1 $ 2");
    assert_eq!(
        result,
        Err(LexErr::new(LexErrKind::UnexpectedChar('$'), Location::new(1, 3)))
    );
}

#[test]
fn scan_non_ascii_whitespace_is_an_error() {
    let result = scan_text("1\u{a0}+ 2");
    assert!(matches!(
        result,
        Err(LexErr { kind: LexErrKind::UnexpectedChar('\u{a0}'), .. })
    ));
}

#[test]
fn scan_lone_less_than() {
    let result = scan_text("1 < 2");
    assert_eq!(
        result,
        Err(LexErr::new(LexErrKind::IncompleteShift('<'), Location::new(1, 3)))
    );
}

#[test]
fn scan_lone_greater_than_at_end() {
    let result = scan_text("1 >");
    assert_eq!(
        result,
        Err(LexErr::new(LexErrKind::IncompleteShift('>'), Location::new(1, 3)))
    );
}

#[test]
fn lex_err_message() {
    let err = scan_text("1 < 2").unwrap_err();
    assert_eq!(err.to_string(), "malformed token: expected <<, found lone < at 1:3");
}
