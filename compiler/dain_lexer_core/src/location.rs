//! Source location tracking.
//!
//! A [`SourceLocation`] pairs a byte offset with a 1-based line and column.
//! The scanner advances it over every byte it consumes, so the location
//! attached to a token always names the token's first byte.
//!
//! Newline counting uses `memchr` over the consumed slice instead of a
//! per-byte branch; comment and string bodies can span many lines.

use std::fmt;

/// Location of a byte in the source buffer.
///
/// Layout: 12 bytes (`offset`, `line`, `column`, all `u32`).
/// Immutable once attached to a token; the scanner produces new values
/// with [`advanced_over`](Self::advanced_over).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    /// Byte offset from the start of the buffer.
    pub offset: u32,
    /// 1-based line number. Incremented only by `\n`.
    pub line: u32,
    /// 1-based byte column within the line. Reset to 1 after `\n`.
    pub column: u32,
}

const _: () = assert!(std::mem::size_of::<SourceLocation>() == 12);

impl SourceLocation {
    /// Location of the first byte of every buffer.
    pub const START: SourceLocation = SourceLocation {
        offset: 0,
        line: 1,
        column: 1,
    };

    /// Create a location from its parts.
    #[inline]
    pub const fn new(offset: u32, line: u32, column: u32) -> Self {
        SourceLocation {
            offset,
            line,
            column,
        }
    }

    /// Location reached after consuming `consumed`, starting here.
    ///
    /// Offsets saturate at `u32::MAX` for buffers larger than 4 GiB.
    #[must_use]
    pub fn advanced_over(self, consumed: &[u8]) -> Self {
        let len = saturating_u32(consumed.len());
        let offset = self.offset.saturating_add(len);

        match memchr::memrchr(b'\n', consumed) {
            None => SourceLocation {
                offset,
                line: self.line,
                column: self.column.saturating_add(len),
            },
            Some(last_newline) => {
                let newlines = saturating_u32(memchr::memchr_iter(b'\n', consumed).count());
                SourceLocation {
                    offset,
                    line: self.line.saturating_add(newlines),
                    column: saturating_u32(consumed.len() - last_newline),
                }
            }
        }
    }

    /// Byte offset as a `usize` index into the source buffer.
    #[inline]
    pub fn index(self) -> usize {
        self.offset as usize
    }
}

impl Default for SourceLocation {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Convert a length to `u32`, saturating at `u32::MAX`.
#[inline]
pub(crate) fn saturating_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
