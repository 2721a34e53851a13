//! Scanner state machine.
//!
//! [`step`] is a pure function from `(state, remaining bytes)` to one
//! [`Step`]: the bytes it consumed, the token they form (if any), and any
//! lexical fault. Dispatch looks at the first byte, and the first matching
//! rule wins:
//!
//! 1. whitespace run (trivia)
//! 2. `//` line comment (trivia)
//! 3. `/* ... */` block comment (trivia, may fault)
//! 4. identifier or keyword
//! 5. number (`.` followed by a digit only when no value token precedes it)
//! 6. string (may fault, still yields a token)
//! 7. operator or punctuation, longest match first
//! 8. unknown byte (faults, yields a one-byte `Unknown` token)
//!
//! Every rule consumes at least one byte, so a driver loop over `step`
//! terminates in time linear in the input. [`Scanner`] is that driver.

use crate::cursor::Cursor;
use crate::kind::{TokenKind, MAX_OPERATOR_LEN};
use crate::location::{saturating_u32, SourceLocation};
use crate::perfect_hash::{classifier, PerfectHashTable};

/// Scanner state carried between steps.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct ScanState {
    /// Location of the next unconsumed byte.
    pub location: SourceLocation,
    /// The previous step emitted a value token ([`TokenKind::ends_value`])
    /// that ends exactly here. A `.` in this position is member access.
    pub after_value: bool,
}

/// A classified token, as a kind and a byte length.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct RawToken {
    pub kind: TokenKind,
    pub len: u32,
}

/// Lexical faults detected while scanning. Recoverable; scanning continues.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ScanFault {
    /// `/*` with no closing `*/` before end of input.
    UnterminatedComment,
    /// `"` with no closing `"` before end of input.
    UnterminatedString,
    /// A byte that starts no token.
    UnknownCharacter { byte: u8 },
}

/// Result of one [`step`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Step {
    /// `None` for trivia.
    pub token: Option<RawToken>,
    pub fault: Option<ScanFault>,
    /// Bytes consumed. At least 1 unless the input was empty.
    pub consumed: u32,
    /// Location of the first consumed byte.
    pub start: SourceLocation,
    /// State for the next step.
    pub state: ScanState,
}

/// Scan one token or trivia run from the front of `rest`.
///
/// On empty input, returns a step that consumes nothing and leaves
/// `state` unchanged.
pub fn step(state: ScanState, rest: &[u8], classifier: &PerfectHashTable) -> Step {
    let start = state.location;
    let Some(&first) = rest.first() else {
        return Step {
            token: None,
            fault: None,
            consumed: 0,
            start,
            state,
        };
    };
    let second = rest.get(1).copied().unwrap_or(0);

    let (token, fault, consumed) = match first {
        b if b.is_ascii_whitespace() => (None, None, scan_whitespace(rest)),
        b'/' if second == b'/' => (None, None, scan_line_comment(rest)),
        b'/' if second == b'*' => {
            let (len, terminated) = scan_block_comment(rest);
            (None, (!terminated).then_some(ScanFault::UnterminatedComment), len)
        }
        b if is_ident_start(b) => {
            let len = scan_identifier(rest);
            let kind = classifier.classify(&rest[..len as usize]);
            (Some(RawToken { kind, len }), None, len)
        }
        b'0'..=b'9' => {
            let token = scan_number(rest);
            (Some(token), None, token.len)
        }
        b'.' if !state.after_value && second.is_ascii_digit() => {
            let token = scan_number(rest);
            (Some(token), None, token.len)
        }
        b'"' => {
            let (len, terminated) = scan_string(rest);
            let token = RawToken {
                kind: TokenKind::String,
                len,
            };
            (Some(token), (!terminated).then_some(ScanFault::UnterminatedString), len)
        }
        _ => match scan_operator(rest, classifier) {
            Some(token) => (Some(token), None, token.len),
            None => {
                let token = RawToken {
                    kind: TokenKind::Unknown,
                    len: 1,
                };
                (Some(token), Some(ScanFault::UnknownCharacter { byte: first }), 1)
            }
        },
    };

    let location = start.advanced_over(&rest[..consumed as usize]);
    Step {
        token,
        fault,
        consumed,
        start,
        state: ScanState {
            location,
            after_value: token.is_some_and(|t| t.kind.ends_value()),
        },
    }
}

// === Sub-scanners ===
//
// Each takes the remaining input with the dispatch byte at index 0 and
// returns the number of bytes it covers.

/// Maximal run of ASCII whitespace.
pub fn scan_whitespace(rest: &[u8]) -> u32 {
    let mut cursor = Cursor::new(rest);
    cursor.eat_while(|b| b.is_ascii_whitespace());
    cursor.pos()
}

/// `//` through the end of the line. The newline is left for the next step.
pub fn scan_line_comment(rest: &[u8]) -> u32 {
    let mut cursor = Cursor::new(rest);
    cursor.eat_until_newline_or_eof();
    cursor.pos()
}

/// `/*` through the first `*/`. Returns `(len, terminated)`; an
/// unterminated comment runs to the end of input.
pub fn scan_block_comment(rest: &[u8]) -> (u32, bool) {
    let mut cursor = Cursor::new(rest);
    cursor.advance_n(2);
    let terminated = cursor.eat_past(b"*/");
    (cursor.pos(), terminated)
}

/// `[A-Za-z_][A-Za-z0-9_]*`.
pub fn scan_identifier(rest: &[u8]) -> u32 {
    let mut cursor = Cursor::new(rest);
    cursor.advance();
    cursor.eat_while(is_ident_continue);
    cursor.pos()
}

/// Numeric literal starting with a digit or with `.` and a digit.
///
/// `0x`, `0b` and `0o` (either case) select hexadecimal, binary and octal
/// digit runs. Otherwise the literal is decimal and becomes a float at the
/// first `.` that is followed by a digit; a later `.` ends it. `_` is
/// accepted anywhere in a digit run.
pub fn scan_number(rest: &[u8]) -> RawToken {
    let mut cursor = Cursor::new(rest);

    if cursor.current() == b'0' {
        let radix = match cursor.peek() {
            b'x' | b'X' => Some(TokenKind::Hexadecimal),
            b'b' | b'B' => Some(TokenKind::Binary),
            b'o' | b'O' => Some(TokenKind::Octal),
            _ => None,
        };
        if let Some(kind) = radix {
            cursor.advance_n(2);
            cursor.eat_while(|b| b == b'_' || is_radix_digit(kind, b));
            return RawToken {
                kind,
                len: cursor.pos(),
            };
        }
    }

    let mut kind = TokenKind::Integer;
    loop {
        cursor.eat_while(|b| b.is_ascii_digit() || b == b'_');
        if kind == TokenKind::Integer && cursor.current() == b'.' && cursor.peek().is_ascii_digit()
        {
            kind = TokenKind::Float;
            cursor.advance();
            continue;
        }
        break;
    }
    RawToken {
        kind,
        len: cursor.pos(),
    }
}

fn is_radix_digit(kind: TokenKind, b: u8) -> bool {
    match kind {
        TokenKind::Hexadecimal => b.is_ascii_hexdigit(),
        TokenKind::Binary => matches!(b, b'0' | b'1'),
        TokenKind::Octal => matches!(b, b'0'..=b'7'),
        _ => b.is_ascii_digit(),
    }
}

/// `"` through the matching unescaped `"`. A backslash takes the next byte
/// with it. Returns `(len, terminated)`; an unterminated string runs to the
/// end of input.
pub fn scan_string(rest: &[u8]) -> (u32, bool) {
    let mut cursor = Cursor::new(rest);
    cursor.advance(); // opening '"'
    loop {
        match cursor.skip_to_string_delim() {
            b'"' => {
                cursor.advance();
                return (cursor.pos(), true);
            }
            b'\\' => cursor.advance_n(2),
            _ => return (cursor.pos(), false),
        }
    }
}

/// Longest operator or punctuation prefix of `rest`, trying
/// [`MAX_OPERATOR_LEN`] bytes down to one.
pub fn scan_operator(rest: &[u8], classifier: &PerfectHashTable) -> Option<RawToken> {
    (1..=MAX_OPERATOR_LEN.min(rest.len()))
        .rev()
        .find_map(|len| {
            let kind = classifier.classify(&rest[..len]);
            (kind != TokenKind::Identifier).then_some(RawToken {
                kind,
                len: saturating_u32(len),
            })
        })
}

#[inline]
fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

/// 256-byte lookup table for identifier continuation bytes.
/// `true` for a-z, A-Z, 0-9, and underscore.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static IS_IDENT_CONTINUE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = matches!(
            i as u8,
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_'
        );
        i += 1;
    }
    table
};

#[inline]
fn is_ident_continue(b: u8) -> bool {
    IS_IDENT_CONTINUE_TABLE[b as usize]
}

// === Driver ===

/// A token with its lexeme borrowed from the source.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ScannedToken<'src> {
    pub kind: TokenKind,
    pub lexeme: &'src [u8],
    pub location: SourceLocation,
}

impl<'src> ScannedToken<'src> {
    /// Lexeme as text, with invalid UTF-8 replaced.
    pub fn text(&self) -> std::borrow::Cow<'src, str> {
        String::from_utf8_lossy(self.lexeme)
    }
}

/// One item produced by [`Scanner`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScanEvent<'src> {
    Token(ScannedToken<'src>),
    /// A fault located at the start of the construct that caused it.
    Fault(ScanFault, SourceLocation),
}

/// Iterator that runs [`step`] over a whole buffer.
///
/// Trivia is dropped. A step that both faults and produces a token yields
/// the fault first. After the input is exhausted the scanner yields one
/// [`TokenKind::End`] token with an empty lexeme, then `None` forever.
pub struct Scanner<'src> {
    source: &'src [u8],
    offset: usize,
    state: ScanState,
    classifier: &'src PerfectHashTable,
    pending: Option<ScannedToken<'src>>,
    finished: bool,
}

impl<'src> Scanner<'src> {
    /// Scanner over `source` using the process-wide [`classifier`].
    pub fn new(source: &'src [u8]) -> Self {
        Self::with_classifier(source, classifier())
    }

    pub fn with_classifier(source: &'src [u8], classifier: &'src PerfectHashTable) -> Self {
        Scanner {
            source,
            offset: 0,
            state: ScanState::default(),
            classifier,
            pending: None,
            finished: false,
        }
    }

    /// Location of the next unconsumed byte.
    pub fn location(&self) -> SourceLocation {
        self.state.location
    }
}

impl<'src> Iterator for Scanner<'src> {
    type Item = ScanEvent<'src>;

    fn next(&mut self) -> Option<ScanEvent<'src>> {
        if let Some(token) = self.pending.take() {
            return Some(ScanEvent::Token(token));
        }
        loop {
            let rest = &self.source[self.offset..];
            if rest.is_empty() {
                if self.finished {
                    return None;
                }
                self.finished = true;
                return Some(ScanEvent::Token(ScannedToken {
                    kind: TokenKind::End,
                    lexeme: rest,
                    location: self.state.location,
                }));
            }

            let scanned = step(self.state, rest, self.classifier);
            let lexeme = &rest[..scanned.consumed as usize];
            self.offset += lexeme.len();
            self.state = scanned.state;

            let token = scanned.token.map(|raw| ScannedToken {
                kind: raw.kind,
                lexeme,
                location: scanned.start,
            });
            match (scanned.fault, token) {
                (Some(fault), token) => {
                    self.pending = token;
                    return Some(ScanEvent::Fault(fault, scanned.start));
                }
                (None, Some(token)) => return Some(ScanEvent::Token(token)),
                (None, None) => {}
            }
        }
    }
}

impl std::iter::FusedIterator for Scanner<'_> {}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
