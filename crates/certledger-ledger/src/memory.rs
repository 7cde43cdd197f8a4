use std::sync::RwLock;

use certledger_types::BlockPayload;
use chrono::Utc;

use crate::block::Block;
use crate::error::LedgerError;
use crate::traits::{LedgerReader, LedgerWriter};
use crate::validation::{verify_blocks, ChainFault};

/// In-memory certificate chain.
///
/// Holds the append-only block sequence behind an `RwLock`: appends are
/// serialized through the write lock (read-head-then-push is atomic), reads
/// take the read lock and hand out owned snapshots. Created with a single
/// genesis block; blocks are never edited or removed.
#[derive(Debug)]
pub struct InMemoryLedger {
    pub(crate) inner: RwLock<Vec<Block>>,
}

impl InMemoryLedger {
    /// Create a ledger holding only a freshly sealed genesis block.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(vec![Block::genesis(Utc::now())]),
        }
    }

    /// Rebuild a ledger from a persisted block sequence.
    ///
    /// The sequence is fully validated before it is accepted; a tampered or
    /// reordered sequence is rejected with the first fault found.
    pub fn from_blocks(blocks: Vec<Block>) -> Result<Self, ChainFault> {
        verify_blocks(&blocks)?;
        Ok(Self {
            inner: RwLock::new(blocks),
        })
    }
}

impl Default for InMemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerWriter for InMemoryLedger {
    fn append(&self, payload: BlockPayload) -> Result<Block, LedgerError> {
        let mut chain = self.inner.write().map_err(|_| LedgerError::LockPoisoned)?;
        let previous = chain
            .last()
            .expect("ledger always holds a genesis block");
        let block = Block::seal(
            previous.index() + 1,
            Utc::now(),
            payload,
            previous.hash(),
        );
        chain.push(block.clone());
        tracing::debug!(index = block.index(), hash = %block.hash().short_hex(), "appended block");
        Ok(block)
    }
}

impl LedgerReader for InMemoryLedger {
    fn head(&self) -> Result<Block, LedgerError> {
        let chain = self.inner.read().map_err(|_| LedgerError::LockPoisoned)?;
        Ok(chain
            .last()
            .expect("ledger always holds a genesis block")
            .clone())
    }

    fn block_count(&self) -> Result<u64, LedgerError> {
        let chain = self.inner.read().map_err(|_| LedgerError::LockPoisoned)?;
        Ok(chain.len() as u64)
    }

    fn recent_blocks(&self, n: usize) -> Result<Vec<Block>, LedgerError> {
        let chain = self.inner.read().map_err(|_| LedgerError::LockPoisoned)?;
        let start = chain.len().saturating_sub(n);
        Ok(chain[start..].to_vec())
    }

    fn find_by_certificate(&self, certificate_id: &str) -> Result<Vec<Block>, LedgerError> {
        let chain = self.inner.read().map_err(|_| LedgerError::LockPoisoned)?;
        Ok(chain
            .iter()
            .filter(|block| block.references(certificate_id))
            .cloned()
            .collect())
    }

    fn snapshot(&self) -> Result<Vec<Block>, LedgerError> {
        let chain = self.inner.read().map_err(|_| LedgerError::LockPoisoned)?;
        Ok(chain.clone())
    }

    fn validate_chain(&self) -> Result<(), LedgerError> {
        let chain = self.inner.read().map_err(|_| LedgerError::LockPoisoned)?;
        verify_blocks(&chain).map_err(|fault| {
            tracing::warn!(%fault, "chain validation failed");
            LedgerError::Tampered(fault)
        })
    }
}
