use certledger_types::BlockPayload;

use crate::block::Block;
use crate::error::LedgerError;

/// Write boundary for chain append operations.
pub trait LedgerWriter: Send + Sync {
    /// Append a payload as the next block: index `last + 1`, timestamp now,
    /// `previous_hash` taken from the current head. Reading the head and
    /// pushing the new block are atomic, so every block has exactly one
    /// successor.
    fn append(&self, payload: BlockPayload) -> Result<Block, LedgerError>;
}

/// Read boundary for chain query and validation operations.
///
/// Readers return owned snapshots taken under the read lock; callers iterate
/// without holding any lock, and never observe a half-written block.
pub trait LedgerReader: Send + Sync {
    /// The newest block. A ledger always holds at least its genesis block.
    fn head(&self) -> Result<Block, LedgerError>;

    /// Total number of blocks, genesis included.
    fn block_count(&self) -> Result<u64, LedgerError>;

    /// The last `min(n, len)` blocks in chain order (oldest first among the
    /// returned subset). `n == 0` yields an empty sequence.
    fn recent_blocks(&self, n: usize) -> Result<Vec<Block>, LedgerError>;

    /// All blocks whose payload references the given certificate id, in
    /// chain order (issue followed by any later revoke). Finite and
    /// restartable.
    fn find_by_certificate(&self, certificate_id: &str) -> Result<Vec<Block>, LedgerError>;

    /// The exact block sequence, for persistence.
    fn snapshot(&self) -> Result<Vec<Block>, LedgerError>;

    /// Walk the whole chain checking genesis shape, linkage, and
    /// authenticity. Pure read; reports the first failing block and never
    /// repairs anything.
    fn validate_chain(&self) -> Result<(), LedgerError>;
}
