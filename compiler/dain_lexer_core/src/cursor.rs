//! Byte cursor over the unscanned remainder of a source buffer.
//!
//! The cursor advances through the buffer byte-by-byte. Reads past the end
//! return `0x00`; [`Cursor::is_eof`] compares the position against the
//! buffer length, so interior null bytes in the source are never mistaken
//! for the end of input.
//!
//! Body scans (line comments, block comments, string contents) use
//! `memchr` to jump straight to the next interesting byte.

/// Cursor over a byte slice.
///
/// The cursor is [`Copy`], so a sub-scanner can snapshot it before a
/// speculative read and throw the copy away.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: u32,
}

/// Size assertion: Cursor should be <= 24 bytes on 64-bit platforms.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// Create a cursor at position 0.
    ///
    /// Buffers longer than `u32::MAX` bytes are truncated to `u32::MAX`.
    pub fn new(buf: &'a [u8]) -> Self {
        let len = buf.len().min(u32::MAX as usize);
        Self {
            buf: &buf[..len],
            pos: 0,
        }
    }

    /// Returns the byte at the current position, or `0x00` at EOF.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos as usize)
    }

    /// Returns the byte one position ahead of current, or `0x00` past EOF.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos as usize + 1)
    }

    #[inline]
    fn byte_at(&self, index: usize) -> u8 {
        self.buf.get(index).copied().unwrap_or(0)
    }

    /// Advance the cursor by one byte. No-op at EOF.
    #[inline]
    pub fn advance(&mut self) {
        if !self.is_eof() {
            self.pos += 1;
        }
    }

    /// Advance the cursor by `n` bytes, stopping at EOF.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos = self.pos.saturating_add(n).min(self.len());
    }

    /// Returns `true` once every byte has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.len()
    }

    /// Current byte offset from the start of the buffer.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Number of bytes in the buffer.
    #[inline]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "length clamped to u32::MAX in new()"
    )]
    pub fn len(&self) -> u32 {
        self.buf.len() as u32
    }

    /// Returns `true` if the buffer has no bytes at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Bytes not yet consumed.
    #[inline]
    pub fn rest(&self) -> &'a [u8] {
        &self.buf[self.pos as usize..]
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// Stops at EOF regardless of `pred(0)`.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while let Some(&b) = self.buf.get(self.pos as usize) {
            if !pred(b) {
                break;
            }
            self.pos += 1;
        }
    }

    /// Advance to the next `\n` byte or EOF. The newline is not consumed.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= len() which fits in u32"
    )]
    pub fn eat_until_newline_or_eof(&mut self) {
        let remaining = self.rest();
        match memchr::memchr(b'\n', remaining) {
            Some(offset) => self.pos += offset as u32,
            None => self.pos = self.len(),
        }
    }

    /// Advance to the next `"` or `\` byte inside a string body.
    ///
    /// Returns the byte found, or `0x00` with the cursor at EOF when
    /// neither delimiter occurs in the rest of the buffer.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= len() which fits in u32"
    )]
    pub fn skip_to_string_delim(&mut self) -> u8 {
        let remaining = self.rest();
        if let Some(offset) = memchr::memchr2(b'"', b'\\', remaining) {
            self.pos += offset as u32;
            remaining[offset]
        } else {
            self.pos = self.len();
            0
        }
    }

    /// Advance just past the next occurrence of `needle`.
    ///
    /// Returns `false` and leaves the cursor at EOF when `needle` does not
    /// occur in the rest of the buffer.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset + needle.len() <= len() which fits in u32"
    )]
    pub fn eat_past(&mut self, needle: &[u8]) -> bool {
        match memchr::memmem::find(self.rest(), needle) {
            Some(offset) => {
                self.pos += (offset + needle.len()) as u32;
                true
            }
            None => {
                self.pos = self.len();
                false
            }
        }
    }
}

#[cfg(test)]
mod tests;
