//! Certificate business rules for the certificate ledger.
//!
//! [`CertificateService`] enforces the per-certificate lifecycle (issue only
//! once, revoke only what is issued, revocation is terminal) on top of the
//! ledger's generic append/validate contract. It holds a reference to any
//! [`certledger_ledger::LedgerReader`] + [`certledger_ledger::LedgerWriter`]
//! and never touches blocks directly.

pub mod error;
pub mod service;

pub use error::ServiceError;
pub use service::{CertificateService, VerifyOutcome};
