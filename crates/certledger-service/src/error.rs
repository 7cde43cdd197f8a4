use certledger_ledger::LedgerError;

/// Domain-level failures. Recoverable: the caller reports and continues.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    #[error("certificate {certificate_id} is already issued")]
    DuplicateCertificate { certificate_id: String },

    #[error("certificate {certificate_id} not found in the ledger")]
    NotFound { certificate_id: String },

    #[error("certificate {certificate_id} is already revoked")]
    AlreadyRevoked { certificate_id: String },

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
