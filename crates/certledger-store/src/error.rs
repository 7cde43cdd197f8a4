use std::path::PathBuf;

use certledger_ledger::{ChainFault, LedgerError};

/// Errors from chain persistence. Fatal to the load operation, not to any
/// in-memory ledger.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The file deserialized cleanly but failed chain validation.
    #[error("corrupt ledger file {path}: {fault}", path = .path.display())]
    CorruptLedgerFile { path: PathBuf, fault: ChainFault },

    /// The file is not a valid serialized block sequence.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// I/O error from the filesystem.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
