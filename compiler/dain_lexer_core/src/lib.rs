//! Low-level scanner for Dain.
//!
//! Standalone: no arena, no token storage, no error rendering. The pieces:
//!
//! - [`SourceLocation`]: byte offset plus 1-based line and column.
//! - [`Cursor`]: byte cursor with `memchr`-backed body skips.
//! - [`TokenKind`] and the [`RESERVED`] key set.
//! - [`PerfectHashTable`]: one-slot-read keyword and operator classifier,
//!   with the process-wide instance behind [`classifier`].
//! - [`step`] and [`Scanner`]: the scanning state machine.
//!
//! `dain_lexer` builds the arena-backed token stream on top of this crate.

mod cursor;
mod kind;
mod location;
mod perfect_hash;
mod scanner;

pub use cursor::Cursor;
pub use kind::{TokenKind, MAX_OPERATOR_LEN, RESERVED};
pub use location::SourceLocation;
pub use perfect_hash::{
    classifier, fnv1a64, ClassifierBuildError, ClassifierConfig, PerfectHashTable,
};
pub use scanner::{
    scan_block_comment, scan_identifier, scan_line_comment, scan_number, scan_operator,
    scan_string, scan_whitespace, step, RawToken, ScanEvent, ScanFault, ScanState, ScannedToken,
    Scanner, Step,
};
