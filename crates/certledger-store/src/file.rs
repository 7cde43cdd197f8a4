use std::fs;
use std::path::{Path, PathBuf};

use certledger_ledger::{Block, InMemoryLedger, LedgerReader};

use crate::error::StoreError;

/// A chain persisted as a JSON file.
///
/// The file holds the exact block sequence (`index`, `timestamp`,
/// `payload`, `previous_hash`, `hash`), so a reloaded ledger re-validates
/// identically. Pretty-printed so operators can inspect it.
pub struct ChainFile {
    path: PathBuf,
}

impl ChainFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the block sequence to disk, replacing any previous contents.
    pub fn save(&self, blocks: &[Block]) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(blocks)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        fs::write(&self.path, json)?;
        tracing::debug!(path = %self.path.display(), blocks = blocks.len(), "saved chain");
        Ok(())
    }

    /// Read the file and rebuild a validated ledger from it.
    ///
    /// The chain is fully validated before it is accepted; a sequence that
    /// fails validation is rejected with [`StoreError::CorruptLedgerFile`].
    pub fn load(&self) -> Result<InMemoryLedger, StoreError> {
        let raw = fs::read(&self.path)?;
        let blocks: Vec<Block> = serde_json::from_slice(&raw)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        InMemoryLedger::from_blocks(blocks).map_err(|fault| StoreError::CorruptLedgerFile {
            path: self.path.clone(),
            fault,
        })
    }

    /// Load the persisted chain, or create and persist a fresh genesis-only
    /// ledger when no file exists yet.
    pub fn load_or_init(&self) -> Result<InMemoryLedger, StoreError> {
        if self.exists() {
            self.load()
        } else {
            let ledger = InMemoryLedger::new();
            self.save(&ledger.snapshot()?)?;
            tracing::info!(path = %self.path.display(), "initialized new chain file");
            Ok(ledger)
        }
    }
}
