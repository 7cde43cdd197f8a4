use certledger_crypto::BlockHasher;
use certledger_types::{BlockHash, BlockPayload};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One immutable entry in the certificate chain.
///
/// A block is sealed at construction: its fingerprint is computed once over
/// `(index, timestamp, payload, previous_hash)` and never recomputed in
/// place. There are no setters; the only way to change a chain is to append.
/// Equality is field-wise over all five fields, the stored hash included.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub(crate) index: u64,
    pub(crate) timestamp: DateTime<Utc>,
    pub(crate) payload: BlockPayload,
    pub(crate) previous_hash: BlockHash,
    pub(crate) hash: BlockHash,
}

impl Block {
    /// Seal a new block, computing its fingerprint from the given content.
    pub fn seal(
        index: u64,
        timestamp: DateTime<Utc>,
        payload: BlockPayload,
        previous_hash: BlockHash,
    ) -> Self {
        let hash = BlockHasher::BLOCK.fingerprint(
            index,
            timestamp.timestamp_millis(),
            &payload,
            &previous_hash,
        );
        Self {
            index,
            timestamp,
            payload,
            previous_hash,
            hash,
        }
    }

    /// The chain's root block: index 0, no certificate payload, zero sentinel
    /// as `previous_hash`.
    pub fn genesis(timestamp: DateTime<Utc>) -> Self {
        Self::seal(0, timestamp, BlockPayload::Genesis, BlockHash::zero())
    }

    pub fn index(&self) -> u64 {
        self.index
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn payload(&self) -> &BlockPayload {
        &self.payload
    }

    pub fn previous_hash(&self) -> BlockHash {
        self.previous_hash
    }

    pub fn hash(&self) -> BlockHash {
        self.hash
    }

    /// Recompute the fingerprint over the stored fields and compare with the
    /// stored hash.
    pub fn verify_hash(&self) -> bool {
        BlockHasher::BLOCK.verify(
            self.index,
            self.timestamp.timestamp_millis(),
            &self.payload,
            &self.previous_hash,
            &self.hash,
        )
    }

    /// Returns `true` when the payload issues or revokes the given id.
    pub fn references(&self, certificate_id: &str) -> bool {
        self.payload.certificate_id() == Some(certificate_id)
    }
}
