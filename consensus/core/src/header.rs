use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use rapid_hashes::{double_sha256, Hash};

/// Serialized header size in bytes.
pub const HEADER_SIZE: usize = 84;

/// Block header.
///
/// The difficulty engine reads `time` and `bits`; the proof verifier reads
/// the header hash against the claimed `bits`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    /// Header version
    pub version: u32,
    /// Hash of the parent block header
    pub prev_block: Hash,
    /// Merkle root of the block's transactions
    pub merkle_root: Hash,
    /// Block timestamp in seconds since the epoch
    pub time: i64,
    /// Compact encoding of the claimed difficulty target
    pub bits: u32,
    /// Proof-of-work nonce
    pub nonce: u32,
}

impl Header {
    /// Creates a new header with the given fields.
    pub fn new(version: u32, prev_block: Hash, merkle_root: Hash, time: i64, bits: u32, nonce: u32) -> Self {
        Self { version, prev_block, merkle_root, time, bits, nonce }
    }

    /// Serializes the header into its fixed wire layout (little-endian
    /// fields, hashes as raw bytes).
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut buf = [0u8; HEADER_SIZE];
        buf[0..4].copy_from_slice(&self.version.to_le_bytes());
        buf[4..36].copy_from_slice(self.prev_block.as_bytes());
        buf[36..68].copy_from_slice(self.merkle_root.as_bytes());
        buf[68..76].copy_from_slice(&self.time.to_le_bytes());
        buf[76..80].copy_from_slice(&self.bits.to_le_bytes());
        buf[80..84].copy_from_slice(&self.nonce.to_le_bytes());
        buf
    }

    /// Double-SHA256 hash of the serialized header.
    pub fn hash(&self) -> Hash {
        Hash::from(double_sha256(&self.to_bytes()))
    }
}
