//! Tokens and the arena-backed token stream.
//!
//! A [`TokenStream`] is one arena allocation of fixed-size records:
//!
//! | Bytes  | Field                 |
//! |--------|-----------------------|
//! | 0      | kind (`TokenKind as u8`) |
//! | 1-3    | padding               |
//! | 4-7    | lexeme offset         |
//! | 8-11   | lexeme length         |
//! | 12-15  | line                  |
//! | 16-19  | column                |
//!
//! All integers are little-endian `u32`. Lexemes are not copied: a record
//! stores the lexeme's position and [`TokenStream::get`] re-borrows it from
//! the source buffer.

use std::fmt;
use std::iter::FusedIterator;

use dain_lexer_core::{SourceLocation, TokenKind};

/// A classified token with its lexeme borrowed from the source.
pub use dain_lexer_core::ScannedToken as Token;

/// Size of one encoded token record.
pub(crate) const RECORD_SIZE: usize = 20;

/// Alignment of the record array within its arena block.
pub(crate) const RECORD_ALIGN: usize = 4;

pub(crate) fn encode_record(token: &Token<'_>) -> [u8; RECORD_SIZE] {
    let len = u32::try_from(token.lexeme.len()).unwrap_or(u32::MAX);
    let mut record = [0u8; RECORD_SIZE];
    record[0] = token.kind as u8;
    record[4..8].copy_from_slice(&token.location.offset.to_le_bytes());
    record[8..12].copy_from_slice(&len.to_le_bytes());
    record[12..16].copy_from_slice(&token.location.line.to_le_bytes());
    record[16..20].copy_from_slice(&token.location.column.to_le_bytes());
    record
}

#[inline]
fn read_u32(record: &[u8], at: usize) -> u32 {
    let mut bytes = [0u8; 4];
    bytes.copy_from_slice(&record[at..at + 4]);
    u32::from_le_bytes(bytes)
}

/// Ordered tokens of one source buffer, ending with exactly one
/// [`TokenKind::End`].
///
/// Borrows the arena holding its records (`'a`) and the source its lexemes
/// point into (`'src`), so neither can be reset or dropped while the stream
/// is alive.
#[derive(Clone, Copy)]
pub struct TokenStream<'a, 'src> {
    records: &'a [u8],
    source: &'src [u8],
}

impl<'a, 'src> TokenStream<'a, 'src> {
    pub(crate) fn new(records: &'a [u8], source: &'src [u8]) -> Self {
        debug_assert_eq!(records.len() % RECORD_SIZE, 0);
        TokenStream { records, source }
    }

    /// Number of tokens, including the final `End`.
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len() / RECORD_SIZE
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Token at `index`.
    pub fn get(&self, index: usize) -> Option<Token<'src>> {
        let start = index.checked_mul(RECORD_SIZE)?;
        let record = self.records.get(start..start + RECORD_SIZE)?;
        Some(self.decode(record))
    }

    fn decode(&self, record: &[u8]) -> Token<'src> {
        let offset = read_u32(record, 4) as usize;
        let len = read_u32(record, 8) as usize;
        Token {
            kind: TokenKind::from_u8(record[0]).unwrap_or(TokenKind::Unknown),
            lexeme: self.source.get(offset..offset + len).unwrap_or_default(),
            location: SourceLocation::new(
                read_u32(record, 4),
                read_u32(record, 12),
                read_u32(record, 16),
            ),
        }
    }

    /// The last token, which is always `End` for a stream from `tokenize`.
    pub fn last(&self) -> Option<Token<'src>> {
        self.len().checked_sub(1).and_then(|i| self.get(i))
    }

    pub fn iter(&self) -> TokenIter<'a, 'src> {
        TokenIter {
            stream: *self,
            front: 0,
            back: self.len(),
        }
    }

    /// Kinds in order.
    pub fn kinds(&self) -> impl Iterator<Item = TokenKind> + 'a {
        self.records
            .chunks_exact(RECORD_SIZE)
            .map(|record| TokenKind::from_u8(record[0]).unwrap_or(TokenKind::Unknown))
    }

    /// The source buffer the lexemes borrow from.
    pub fn source(&self) -> &'src [u8] {
        self.source
    }

    /// One `line:column | KIND | "lexeme"` row per token.
    pub fn dump(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TokenStream<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in self {
            writeln!(
                f,
                "{}:{} | {} | \"{}\"",
                token.location.line,
                token.location.column,
                token.kind.name(),
                token.text()
            )?;
        }
        Ok(())
    }
}

impl fmt::Debug for TokenStream<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl PartialEq for TokenStream<'_, '_> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for TokenStream<'_, '_> {}

impl<'a, 'src> IntoIterator for &TokenStream<'a, 'src> {
    type Item = Token<'src>;
    type IntoIter = TokenIter<'a, 'src>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a [`TokenStream`].
#[derive(Clone)]
pub struct TokenIter<'a, 'src> {
    stream: TokenStream<'a, 'src>,
    front: usize,
    back: usize,
}

impl<'src> Iterator for TokenIter<'_, 'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Token<'src>> {
        if self.front >= self.back {
            return None;
        }
        let token = self.stream.get(self.front);
        self.front += 1;
        token
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<'src> DoubleEndedIterator for TokenIter<'_, 'src> {
    fn next_back(&mut self) -> Option<Token<'src>> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.stream.get(self.back)
    }
}

impl ExactSizeIterator for TokenIter<'_, '_> {}

impl FusedIterator for TokenIter<'_, '_> {}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests;
