use super::*;
use pretty_assertions::assert_eq;

fn scanned<'s>(kind: TokenKind, source: &'s [u8], start: usize, len: usize, line: u32, column: u32) -> Token<'s> {
    Token {
        kind,
        lexeme: &source[start..start + len],
        location: SourceLocation::new(start as u32, line, column),
    }
}

fn records(tokens: &[Token<'_>]) -> Vec<u8> {
    tokens.iter().flat_map(encode_record).collect()
}

#[test]
fn record_layout_is_little_endian() {
    let source = b"  let";
    let record = encode_record(&scanned(TokenKind::Let, source, 2, 3, 1, 3));
    assert_eq!(
        record,
        [
            TokenKind::Let as u8, 0, 0, 0, //
            2, 0, 0, 0, //
            3, 0, 0, 0, //
            1, 0, 0, 0, //
            3, 0, 0, 0,
        ]
    );
}

#[test]
fn stream_decodes_tokens_and_borrows_lexemes() {
    let source = b"x = 1";
    let bytes = records(&[
        scanned(TokenKind::Identifier, source, 0, 1, 1, 1),
        scanned(TokenKind::Assignment, source, 2, 1, 1, 3),
        scanned(TokenKind::Integer, source, 4, 1, 1, 5),
        scanned(TokenKind::End, source, 5, 0, 1, 6),
    ]);
    let stream = TokenStream::new(&bytes, source);

    assert_eq!(stream.len(), 4);
    let one = stream.get(2).unwrap();
    assert_eq!(one.kind, TokenKind::Integer);
    assert_eq!(one.lexeme, b"1");
    assert!(std::ptr::eq(one.lexeme.as_ptr(), source[4..].as_ptr()));
    assert_eq!(one.location, SourceLocation::new(4, 1, 5));
    assert_eq!(stream.get(4), None);
    assert_eq!(stream.last().map(|t| t.kind), Some(TokenKind::End));
}

#[test]
fn iter_is_exact_size_and_double_ended() {
    let source = b"a b c";
    let bytes = records(&[
        scanned(TokenKind::Identifier, source, 0, 1, 1, 1),
        scanned(TokenKind::Identifier, source, 2, 1, 1, 3),
        scanned(TokenKind::Identifier, source, 4, 1, 1, 5),
    ]);
    let stream = TokenStream::new(&bytes, source);
    let mut iter = stream.iter();
    assert_eq!(iter.len(), 3);
    assert_eq!(iter.next_back().unwrap().lexeme, b"c");
    assert_eq!(iter.next().unwrap().lexeme, b"a");
    assert_eq!(iter.len(), 1);
    assert_eq!(iter.next().unwrap().lexeme, b"b");
    assert_eq!(iter.next(), None);
}

#[test]
fn kinds_lists_every_kind() {
    let source = b"(";
    let bytes = records(&[
        scanned(TokenKind::LParen, source, 0, 1, 1, 1),
        scanned(TokenKind::End, source, 1, 0, 1, 2),
    ]);
    let stream = TokenStream::new(&bytes, source);
    assert_eq!(stream.kinds().collect::<Vec<_>>(), vec![TokenKind::LParen, TokenKind::End]);
}

#[test]
fn empty_stream() {
    let stream = TokenStream::new(&[], b"");
    assert!(stream.is_empty());
    assert_eq!(stream.last(), None);
    assert_eq!(stream.iter().count(), 0);
}

#[test]
fn dump_prints_one_row_per_token() {
    let source = b"a\n\"s\"";
    let bytes = records(&[
        scanned(TokenKind::Identifier, source, 0, 1, 1, 1),
        scanned(TokenKind::String, source, 2, 3, 2, 1),
        scanned(TokenKind::End, source, 5, 0, 2, 4),
    ]);
    let stream = TokenStream::new(&bytes, source);
    assert_eq!(
        stream.dump(),
        "1:1 | IDENTIFIER | \"a\"\n2:1 | STRING | \"\"s\"\"\n2:4 | END | \"\"\n"
    );
}

#[test]
fn streams_compare_by_content() {
    let left_src = b"a";
    let right_src = b"a".to_vec();
    let left = records(&[scanned(TokenKind::Identifier, left_src, 0, 1, 1, 1)]);
    let right = records(&[scanned(TokenKind::Identifier, &right_src, 0, 1, 1, 1)]);
    assert_eq!(TokenStream::new(&left, left_src), TokenStream::new(&right, &right_src));

    let other = records(&[scanned(TokenKind::Let, left_src, 0, 1, 1, 1)]);
    assert_ne!(TokenStream::new(&left, left_src), TokenStream::new(&other, left_src));
}

#[test]
fn token_text_is_lossy_for_invalid_utf8() {
    let source = [0xFFu8];
    let token = scanned(TokenKind::Unknown, &source, 0, 1, 1, 1);
    assert_eq!(token.text(), "\u{FFFD}");
}
