use certledger_ledger::{
    Block, CertificateProjection, ChainFault, LedgerError, LedgerReader, LedgerWriter,
    ProjectionBuilder,
};
use certledger_types::{BlockPayload, CertificateRecord};
use chrono::{DateTime, NaiveDate, Utc};

use crate::error::ServiceError;

/// Result of verifying a certificate against the chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// Chain validation failed; the fault names the failing block and check.
    Tampered { fault: ChainFault },
    NotFound,
    Valid {
        university_name: String,
        issue_date: NaiveDate,
        issued_at: DateTime<Utc>,
    },
    Revoked {
        university_name: String,
        issue_date: NaiveDate,
        issued_at: DateTime<Utc>,
        reason: Option<String>,
    },
}

/// Certificate-level business rules over a ledger.
///
/// All mutation goes through the ledger's append operation; the service
/// never edits blocks. Domain errors are returned, never swallowed.
pub struct CertificateService<'a, L> {
    ledger: &'a L,
}

impl<'a, L: LedgerReader + LedgerWriter> CertificateService<'a, L> {
    pub fn new(ledger: &'a L) -> Self {
        Self { ledger }
    }

    /// Record the issuance of a certificate.
    ///
    /// Fails with [`ServiceError::DuplicateCertificate`] when the id is
    /// already issued, or was issued and later revoked; revocation is
    /// terminal and the id stays unavailable.
    pub fn issue(&self, record: CertificateRecord) -> Result<Block, ServiceError> {
        let certificate_id = record.certificate_id.clone();
        match ProjectionBuilder::certificate_status(self.ledger, &certificate_id)? {
            CertificateProjection::Absent => {
                let block = self.ledger.append(BlockPayload::Issue(record))?;
                tracing::info!(%certificate_id, index = block.index(), "issued certificate");
                Ok(block)
            }
            CertificateProjection::Issued(_) | CertificateProjection::Revoked { .. } => {
                Err(ServiceError::DuplicateCertificate { certificate_id })
            }
        }
    }

    /// Record the revocation of an issued certificate.
    pub fn revoke(
        &self,
        certificate_id: &str,
        reason: Option<String>,
    ) -> Result<Block, ServiceError> {
        match ProjectionBuilder::certificate_status(self.ledger, certificate_id)? {
            CertificateProjection::Absent => Err(ServiceError::NotFound {
                certificate_id: certificate_id.into(),
            }),
            CertificateProjection::Revoked { .. } => Err(ServiceError::AlreadyRevoked {
                certificate_id: certificate_id.into(),
            }),
            CertificateProjection::Issued(_) => {
                let block = self.ledger.append(BlockPayload::Revoke {
                    certificate_id: certificate_id.into(),
                    reason,
                })?;
                tracing::info!(certificate_id, index = block.index(), "revoked certificate");
                Ok(block)
            }
        }
    }

    /// Verify a certificate's standing.
    ///
    /// Chain integrity is checked first: a tampered ledger yields
    /// [`VerifyOutcome::Tampered`] regardless of the certificate's apparent
    /// status, since none of the stored data can be trusted.
    pub fn verify(&self, certificate_id: &str) -> Result<VerifyOutcome, ServiceError> {
        match self.ledger.validate_chain() {
            Ok(()) => {}
            Err(LedgerError::Tampered(fault)) => {
                tracing::warn!(certificate_id, %fault, "verification hit a tampered chain");
                return Ok(VerifyOutcome::Tampered { fault });
            }
            Err(other) => return Err(other.into()),
        }

        let outcome = match ProjectionBuilder::certificate_status(self.ledger, certificate_id)? {
            CertificateProjection::Absent => VerifyOutcome::NotFound,
            CertificateProjection::Issued(issued) => VerifyOutcome::Valid {
                university_name: issued.university_name,
                issue_date: issued.issue_date,
                issued_at: issued.issued_at,
            },
            CertificateProjection::Revoked { issued, reason } => VerifyOutcome::Revoked {
                university_name: issued.university_name,
                issue_date: issued.issue_date,
                issued_at: issued.issued_at,
                reason,
            },
        };
        Ok(outcome)
    }
}
