//! Memory arena for the Dain front-end.
//!
//! One [`Arena`] per compilation unit owns the token stream's backing
//! storage, duplicated strings and sources loaded from disk. Everything is
//! released in bulk by [`Arena::reset`] or [`Arena::destroy`].
//!
//! Allocations are ordinary borrowed slices tied to the arena's lifetime,
//! so use after [`Arena::reset`] or [`Arena::destroy`] is a compile error.

mod arena;
mod error;

pub use arena::{Arena, ArenaConfig, DEFAULT_BLOCK_SIZE};
pub use error::ArenaError;
