//! Lexical errors.
//!
//! Errors are collected alongside the token stream and never abort a
//! scan. Each one carries the location of the construct that caused it:
//! the opening `/*` or `"` for unterminated bodies, the offending byte for
//! unknown characters.

use std::fmt::Write as _;

use dain_lexer_core::{ScanFault, SourceLocation};
use thiserror::Error;

/// A lexical error and where it happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
#[error("line {}, column {}: {}", .location.line, .location.column, .kind)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub location: SourceLocation,
}

/// What went wrong.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum LexErrorKind {
    /// `/*` with no closing `*/`.
    #[error("unterminated block comment")]
    UnterminatedComment,
    /// `"` with no closing `"`.
    #[error("unterminated string literal")]
    UnterminatedString,
    /// A byte that starts no token.
    #[error("unknown character {}", describe_byte(.byte))]
    UnknownCharacter { byte: u8 },
}

impl LexErrorKind {
    /// One-line fix suggestion.
    pub fn help(self) -> &'static str {
        match self {
            LexErrorKind::UnterminatedComment => "add a closing `*/`",
            LexErrorKind::UnterminatedString => "add a closing `\"`",
            LexErrorKind::UnknownCharacter { .. } => "remove this character",
        }
    }
}

impl LexError {
    #[cold]
    pub fn unterminated_comment(location: SourceLocation) -> Self {
        LexError {
            kind: LexErrorKind::UnterminatedComment,
            location,
        }
    }

    #[cold]
    pub fn unterminated_string(location: SourceLocation) -> Self {
        LexError {
            kind: LexErrorKind::UnterminatedString,
            location,
        }
    }

    #[cold]
    pub fn unknown_character(byte: u8, location: SourceLocation) -> Self {
        LexError {
            kind: LexErrorKind::UnknownCharacter { byte },
            location,
        }
    }

    /// Convert a scanner fault.
    pub fn from_fault(fault: ScanFault, location: SourceLocation) -> Self {
        match fault {
            ScanFault::UnterminatedComment => Self::unterminated_comment(location),
            ScanFault::UnterminatedString => Self::unterminated_string(location),
            ScanFault::UnknownCharacter { byte } => Self::unknown_character(byte, location),
        }
    }
}

/// Printable ASCII is quoted; anything else is shown as hex.
fn describe_byte(byte: &u8) -> String {
    if byte.is_ascii_graphic() {
        format!("'{}'", char::from(*byte))
    } else {
        format!("0x{byte:02X}")
    }
}

/// Render a report of `errors` in `path`, one entry per error:
///
/// ```text
/// main.dn:3:9: error: unterminated string literal
///   help: add a closing `"`
/// ```
///
/// Returns an empty string when there are no errors.
pub fn render_errors(path: &str, errors: &[LexError]) -> String {
    let mut out = String::new();
    for error in errors {
        // Writing to a String cannot fail.
        let _ = writeln!(
            out,
            "{path}:{}:{}: error: {}\n  help: {}",
            error.location.line,
            error.location.column,
            error.kind,
            error.kind.help()
        );
    }
    out
}
