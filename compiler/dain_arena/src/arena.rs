//! Bump allocator over [`bumpalo::Bump`].
//!
//! Allocation takes `&self` and hands out slices that live as long as the
//! borrow of the arena, so a source loaded into the arena can be scanned
//! into that same arena, and callers can keep allocating while earlier
//! results are still in use. Chunks never move once allocated.
//!
//! [`Arena::reset`] and [`Arena::destroy`] need exclusive access, so the
//! borrow checker rejects either call while any slice is still alive.

use std::cell::Cell;
use std::fmt;
use std::path::Path;

use bumpalo::Bump;

use crate::error::ArenaError;

/// Block size used by [`Arena::new`]: 64 KiB.
pub const DEFAULT_BLOCK_SIZE: usize = 64 * 1024;

/// Arena configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Size of the first block. `0` selects [`DEFAULT_BLOCK_SIZE`].
    pub block_size: usize,
    /// Cap on the total bytes of all blocks. Requests that would need a
    /// block past the cap fail with [`ArenaError::OutOfMemory`].
    pub allocation_limit: Option<usize>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        ArenaConfig {
            block_size: DEFAULT_BLOCK_SIZE,
            allocation_limit: None,
        }
    }
}

/// Growable bump allocator owning all derived data of one compilation unit.
pub struct Arena {
    bump: Bump,
    block_size: usize,
    /// Bytes handed out since creation or the last reset.
    allocated: Cell<usize>,
}

impl Arena {
    /// Arena whose first block is [`DEFAULT_BLOCK_SIZE`] bytes.
    pub fn new() -> Self {
        Self::with_config(ArenaConfig::default())
    }

    /// Arena whose first block is `block_size` bytes (`0` for the default).
    pub fn with_block_size(block_size: usize) -> Self {
        Self::with_config(ArenaConfig {
            block_size,
            ..ArenaConfig::default()
        })
    }

    pub fn with_config(config: ArenaConfig) -> Self {
        let block_size = if config.block_size == 0 {
            DEFAULT_BLOCK_SIZE
        } else {
            config.block_size
        };
        let bump = Bump::with_capacity(block_size);
        bump.set_allocation_limit(config.allocation_limit);
        Arena {
            bump,
            block_size,
            allocated: Cell::new(0),
        }
    }

    /// Reserve `size` zeroed bytes starting at an address that is a
    /// multiple of `align`.
    ///
    /// A request that does not fit the current block gets a new block of at
    /// least `size` bytes. Earlier blocks stay where they are.
    pub fn allocate(&self, size: usize, align: usize) -> Result<&mut [u8], ArenaError> {
        if !align.is_power_of_two() {
            return Err(ArenaError::InvalidAlignment { align });
        }
        // Over-allocate by `align - 1` and start at the first aligned byte.
        let padded = size
            .checked_add(align - 1)
            .filter(|&n| isize::try_from(n).is_ok())
            .ok_or(ArenaError::TooLarge { requested: size })?;

        let capacity_before = self.bump.allocated_bytes();
        let region = self
            .bump
            .try_alloc_slice_fill_copy(padded, 0u8)
            .map_err(|_| ArenaError::OutOfMemory { requested: padded })?;
        if self.bump.allocated_bytes() > capacity_before {
            tracing::trace!(
                requested = padded,
                capacity = self.bump.allocated_bytes(),
                "arena block allocated"
            );
        }

        let address = region.as_ptr() as usize;
        let start = address.wrapping_neg() & (align - 1);
        self.allocated.set(self.allocated.get().saturating_add(size));
        Ok(&mut region[start..start + size])
    }

    /// Copy `bytes` into a fresh allocation.
    pub fn duplicate(&self, bytes: &[u8]) -> Result<&mut [u8], ArenaError> {
        let region = self.allocate(bytes.len(), 1)?;
        region.copy_from_slice(bytes);
        Ok(region)
    }

    /// Copy `bytes` followed by a `0x00` terminator. The returned slice
    /// includes the terminator.
    pub fn duplicate_nul(&self, bytes: &[u8]) -> Result<&mut [u8], ArenaError> {
        let len = bytes
            .len()
            .checked_add(1)
            .ok_or(ArenaError::TooLarge { requested: bytes.len() })?;
        let region = self.allocate(len, 1)?;
        region[..bytes.len()].copy_from_slice(bytes);
        Ok(region)
    }

    pub fn duplicate_str(&self, text: &str) -> Result<&str, ArenaError> {
        let copy = self
            .bump
            .try_alloc_str(text)
            .map_err(|_| ArenaError::OutOfMemory { requested: text.len() })?;
        self.allocated.set(self.allocated.get().saturating_add(text.len()));
        Ok(copy)
    }

    /// Read a whole file into a single allocation.
    ///
    /// No existence, file-type or extension checks beyond what the read
    /// itself reports.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<&[u8], ArenaError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| ArenaError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "loaded source into arena");
        let source: &[u8] = self.duplicate(&bytes)?;
        Ok(source)
    }

    /// Discard every allocation and keep one block for reuse.
    pub fn reset(&mut self) {
        tracing::debug!(
            allocated = self.allocated.get(),
            capacity = self.capacity(),
            "arena reset"
        );
        self.bump.reset();
        self.allocated.set(0);
    }

    /// Release every block. Consumes the arena.
    pub fn destroy(self) {
        tracing::debug!(
            allocated = self.allocated.get(),
            capacity = self.capacity(),
            "arena destroyed"
        );
        drop(self);
    }

    /// Bytes handed out since creation or the last reset, excluding
    /// alignment padding.
    pub fn allocated_bytes(&self) -> usize {
        self.allocated.get()
    }

    /// Total bytes owned across all blocks.
    pub fn capacity(&self) -> usize {
        self.bump.allocated_bytes()
    }

    /// Size of the first block.
    pub fn block_size(&self) -> usize {
        self.block_size
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Arena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Arena {{ {} / {} bytes }}",
            self.allocated.get(),
            self.capacity()
        )
    }
}
