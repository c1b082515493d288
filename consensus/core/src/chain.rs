//! Append-only chain index
//!
//! Block metadata is stored in a contiguous arena indexed by height, which
//! makes ancestor-by-height lookup O(1). The difficulty engine only needs
//! read access; entries are never mutated once appended.

use rapid_hashes::Hash;

/// Metadata of one accepted block, as seen by the difficulty engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockEntry {
    /// Height of the block; equals its index in the chain arena
    pub height: u64,
    /// Block timestamp in seconds since the epoch
    pub time: i64,
    /// Compact difficulty target the block was mined at
    pub bits: u32,
    /// Header hash
    pub hash: Hash,
}

/// Append-only arena of block metadata, index == height.
#[derive(Clone, Debug, Default)]
pub struct ChainIndex {
    entries: Vec<BlockEntry>,
}

impl ChainIndex {
    /// Creates an empty chain index.
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Appends a block at the next height and returns its entry.
    pub fn push(&mut self, time: i64, bits: u32, hash: Hash) -> &BlockEntry {
        let height = self.entries.len() as u64;
        self.entries.push(BlockEntry { height, time, bits, hash });
        &self.entries[height as usize]
    }

    /// Number of blocks in the chain.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the chain holds no blocks yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at the given height, if any.
    pub fn get(&self, height: u64) -> Option<&BlockEntry> {
        self.entries.get(height as usize)
    }

    /// The most recently accepted block.
    pub fn tip(&self) -> Option<&BlockEntry> {
        self.entries.last()
    }

    /// The unique ancestor of `from` at `height`.
    ///
    /// Returns `None` only when `height` exceeds `from.height`; for any
    /// in-range height on a well-formed chain the lookup always succeeds.
    pub fn ancestor_at(&self, from: &BlockEntry, height: u64) -> Option<&BlockEntry> {
        if height > from.height {
            return None;
        }
        self.entries.get(height as usize)
    }
}
