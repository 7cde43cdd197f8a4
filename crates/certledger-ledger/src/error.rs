use crate::validation::ChainFault;

/// Errors produced by ledger operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    /// Chain validation found tampered or reordered blocks. Never repaired;
    /// the only remedy is restoring from a known-good copy.
    #[error("ledger integrity violation: {0}")]
    Tampered(#[from] ChainFault),

    #[error("ledger lock poisoned")]
    LockPoisoned,
}
