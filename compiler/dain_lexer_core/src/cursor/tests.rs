use super::Cursor;

// === Basic Navigation ===

#[test]
fn current_returns_first_byte() {
    let cursor = Cursor::new(b"abc");
    assert_eq!(cursor.current(), b'a');
}

#[test]
fn advance_moves_forward() {
    let mut cursor = Cursor::new(b"abc");
    cursor.advance();
    assert_eq!(cursor.current(), b'b');
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn advance_n_clamps_at_eof() {
    let mut cursor = Cursor::new(b"abc");
    cursor.advance_n(10);
    assert_eq!(cursor.pos(), 3);
    assert!(cursor.is_eof());
}

#[test]
fn advance_at_eof_is_noop() {
    let mut cursor = Cursor::new(b"x");
    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.pos(), 1);
}

// === Peek ===

#[test]
fn peek_looks_one_ahead() {
    let cursor = Cursor::new(b"abc");
    assert_eq!(cursor.current(), b'a');
    assert_eq!(cursor.peek(), b'b');
}

#[test]
fn peek_past_end_returns_zero() {
    let cursor = Cursor::new(b"a");
    assert_eq!(cursor.peek(), 0);
}

// === EOF Detection ===

#[test]
fn empty_buffer_is_eof() {
    let cursor = Cursor::new(b"");
    assert!(cursor.is_eof());
    assert!(cursor.is_empty());
    assert_eq!(cursor.current(), 0);
}

#[test]
fn interior_null_is_not_eof() {
    let cursor = Cursor::new(b"\0a");
    assert_eq!(cursor.current(), 0);
    assert!(!cursor.is_eof());
}

// === Scanning helpers ===

#[test]
fn eat_while_stops_at_predicate_failure() {
    let mut cursor = Cursor::new(b"abc123");
    cursor.eat_while(|b| b.is_ascii_alphabetic());
    assert_eq!(cursor.pos(), 3);
    assert_eq!(cursor.rest(), b"123");
}

#[test]
fn eat_while_stops_at_eof_even_if_pred_accepts_zero() {
    let mut cursor = Cursor::new(b"\0\0");
    cursor.eat_while(|_| true);
    assert_eq!(cursor.pos(), 2);
}

#[test]
fn eat_until_newline_stops_before_newline() {
    let mut cursor = Cursor::new(b"// note\nnext");
    cursor.eat_until_newline_or_eof();
    assert_eq!(cursor.pos(), 7);
    assert_eq!(cursor.current(), b'\n');
}

#[test]
fn eat_until_newline_without_newline_reaches_eof() {
    let mut cursor = Cursor::new(b"// note");
    cursor.eat_until_newline_or_eof();
    assert!(cursor.is_eof());
}

#[test]
fn skip_to_string_delim_finds_quote_or_backslash() {
    let mut cursor = Cursor::new(b"abc\\\"def\"");
    assert_eq!(cursor.skip_to_string_delim(), b'\\');
    assert_eq!(cursor.pos(), 3);
    cursor.advance_n(2);
    assert_eq!(cursor.skip_to_string_delim(), b'"');
    assert_eq!(cursor.pos(), 8);
}

#[test]
fn skip_to_string_delim_at_eof_returns_zero() {
    let mut cursor = Cursor::new(b"no closing quote");
    assert_eq!(cursor.skip_to_string_delim(), 0);
    assert!(cursor.is_eof());
}

#[test]
fn eat_past_consumes_needle() {
    let mut cursor = Cursor::new(b"body */ rest");
    assert!(cursor.eat_past(b"*/"));
    assert_eq!(cursor.rest(), b" rest");
}

#[test]
fn eat_past_missing_needle_reaches_eof() {
    let mut cursor = Cursor::new(b"body * / rest");
    assert!(!cursor.eat_past(b"*/"));
    assert!(cursor.is_eof());
}
