use std::path::PathBuf;

use thiserror::Error;

/// Arena allocation failures.
///
/// `OutOfMemory` is fatal for callers: no partial recovery is attempted.
#[derive(Debug, Error)]
pub enum ArenaError {
    #[error("arena out of memory allocating a block of {requested} bytes")]
    OutOfMemory { requested: usize },

    #[error("alignment {align} is not a power of two")]
    InvalidAlignment { align: usize },

    #[error("allocation of {requested} bytes exceeds the largest possible block")]
    TooLarge { requested: usize },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ArenaError {
    /// Whether this error means the process could not get memory.
    pub fn is_out_of_memory(&self) -> bool {
        matches!(self, ArenaError::OutOfMemory { .. })
    }
}
