//! Perfect-hash classifier for keywords, operators and punctuation.
//!
//! The table is built once from a fixed key set by searching for a seed
//! under which every key lands in a distinct slot. After that a lookup is
//! one FNV-1a hash, one mix, one slot read and one byte comparison, with
//! no allocation and no false positives: any candidate that is not a key
//! either hits an empty slot or fails the comparison.
//!
//! The process-wide table for [`RESERVED`] lives behind a `OnceLock`; see
//! [`classifier`].

use std::sync::OnceLock;

use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::kind::{TokenKind, RESERVED};

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Slot marker for "no key here".
const EMPTY: u16 = u16::MAX;

/// FNV-1a, 64-bit.
#[inline]
pub fn fnv1a64(bytes: &[u8]) -> u64 {
    let mut hash = FNV_OFFSET_BASIS;
    for &b in bytes {
        hash ^= u64::from(b);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// MurmurHash3 64-bit finalizer. Spreads a seeded hash over the low bits
/// that select the slot.
#[inline]
const fn fmix64(mut k: u64) -> u64 {
    k ^= k >> 33;
    k = k.wrapping_mul(0xff51_afd7_ed55_8ccd);
    k ^= k >> 33;
    k = k.wrapping_mul(0xc4ce_b9fe_1a85_ec53);
    k ^= k >> 33;
    k
}

/// Build parameters for [`PerfectHashTable::build_with`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClassifierConfig {
    /// Slot count. `None` picks the next power of two at or above
    /// `max(2 * keys, keys² / 2)`.
    pub table_size: Option<usize>,
    /// Seeds `1..=max_seed_attempts` are tried in order.
    pub max_seed_attempts: u64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        ClassifierConfig {
            table_size: None,
            max_seed_attempts: 1 << 20,
        }
    }
}

/// Failure to build a [`PerfectHashTable`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ClassifierBuildError {
    #[error("cannot build a perfect hash over an empty key set")]
    EmptyKeySet,

    #[error("key {key:?} appears more than once")]
    DuplicateKey { key: &'static str },

    #[error("{keys} keys exceed the table's index capacity of {max}")]
    TooManyKeys { keys: usize, max: usize },

    #[error("table size {table_size} must be a power of two no smaller than the key count {keys}")]
    InvalidTableSize { table_size: usize, keys: usize },

    #[error("no perfect seed for {keys} keys in {table_size} slots after {attempts} attempts")]
    NoSeedFound {
        keys: usize,
        table_size: usize,
        attempts: u64,
    },
}

/// Collision-free one-slot-read lookup table from byte strings to
/// [`TokenKind`].
#[derive(Clone, Debug)]
pub struct PerfectHashTable {
    entries: Box<[(&'static str, TokenKind)]>,
    /// Index into `entries`, or [`EMPTY`].
    slots: Box<[u16]>,
    seed: u64,
    mask: u64,
}

impl PerfectHashTable {
    /// Build with the default [`ClassifierConfig`].
    pub fn build(
        entries: &[(&'static str, TokenKind)],
    ) -> Result<PerfectHashTable, ClassifierBuildError> {
        Self::build_with(entries, ClassifierConfig::default())
    }

    /// Search for the smallest seed that places every key in its own slot.
    #[tracing::instrument(level = "debug", skip_all, fields(keys = entries.len()))]
    pub fn build_with(
        entries: &[(&'static str, TokenKind)],
        config: ClassifierConfig,
    ) -> Result<PerfectHashTable, ClassifierBuildError> {
        let keys = entries.len();
        if keys == 0 {
            return Err(ClassifierBuildError::EmptyKeySet);
        }
        let max = usize::from(EMPTY);
        if keys > max {
            return Err(ClassifierBuildError::TooManyKeys { keys, max });
        }

        let mut seen = FxHashSet::default();
        for &(key, _) in entries {
            if !seen.insert(key) {
                return Err(ClassifierBuildError::DuplicateKey { key });
            }
        }

        let table_size = match config.table_size {
            None => (2 * keys).max(keys.saturating_mul(keys) / 2).next_power_of_two(),
            Some(size) if size.is_power_of_two() && size >= keys => size,
            Some(table_size) => {
                return Err(ClassifierBuildError::InvalidTableSize { table_size, keys });
            }
        };
        let mask = (table_size - 1) as u64;

        // FNV is seed-independent; hash each key once.
        let hashes: Vec<u64> = entries.iter().map(|(k, _)| fnv1a64(k.as_bytes())).collect();
        let mut slots = vec![EMPTY; table_size].into_boxed_slice();

        for seed in 1..=config.max_seed_attempts {
            if place_all(&hashes, seed, mask, &mut slots) {
                tracing::debug!(seed, table_size, "perfect hash built");
                return Ok(PerfectHashTable {
                    entries: entries.into(),
                    slots,
                    seed,
                    mask,
                });
            }
        }

        Err(ClassifierBuildError::NoSeedFound {
            keys,
            table_size,
            attempts: config.max_seed_attempts,
        })
    }

    /// Kind of `candidate`, or `None` if it is not a key.
    #[inline]
    pub fn lookup(&self, candidate: &[u8]) -> Option<TokenKind> {
        let index = self.slots[slot_of(fnv1a64(candidate), self.seed, self.mask)];
        if index == EMPTY {
            return None;
        }
        let (key, kind) = self.entries[usize::from(index)];
        (key.as_bytes() == candidate).then_some(kind)
    }

    /// Kind of `candidate`, with [`TokenKind::Identifier`] standing in for
    /// anything that is not a key.
    #[inline]
    pub fn classify(&self, candidate: &[u8]) -> TokenKind {
        self.lookup(candidate).unwrap_or(TokenKind::Identifier)
    }

    /// The winning seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of slots (a power of two).
    pub fn table_size(&self) -> usize {
        self.slots.len()
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[inline]
#[allow(
    clippy::cast_possible_truncation,
    reason = "mask is table_size - 1, which fits in usize"
)]
fn slot_of(hash: u64, seed: u64, mask: u64) -> usize {
    (fmix64(hash ^ seed) & mask) as usize
}

/// Try one seed. Leaves `slots` filled on success.
fn place_all(hashes: &[u64], seed: u64, mask: u64, slots: &mut [u16]) -> bool {
    slots.fill(EMPTY);
    for (index, &hash) in hashes.iter().enumerate() {
        let slot = &mut slots[slot_of(hash, seed, mask)];
        if *slot != EMPTY {
            return false;
        }
        // Key count was checked against EMPTY, so the index fits.
        *slot = u16::try_from(index).unwrap_or(EMPTY);
    }
    true
}

static CLASSIFIER: OnceLock<PerfectHashTable> = OnceLock::new();

/// The process-wide classifier over [`RESERVED`].
///
/// Built on first use. Panics if the reserved set admits no perfect seed,
/// which would make every scan meaningless.
pub fn classifier() -> &'static PerfectHashTable {
    CLASSIFIER.get_or_init(|| {
        PerfectHashTable::build(RESERVED)
            .unwrap_or_else(|e| panic!("reserved key classifier: {e}"))
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;
