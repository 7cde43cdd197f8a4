use certledger_types::BlockPayload;
use chrono::{DateTime, NaiveDate, Utc};

use crate::error::LedgerError;
use crate::traits::LedgerReader;

/// Details of the block that issued a certificate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IssuedView {
    pub certificate_id: String,
    pub student_name: String,
    pub course_name: String,
    pub university_name: String,
    pub issue_date: NaiveDate,
    /// Timestamp of the issuing block.
    pub issued_at: DateTime<Utc>,
    pub block_index: u64,
}

/// Derived lifecycle state of a certificate id.
///
/// Not stored anywhere; always reconstructed by folding the id's blocks in
/// chain order. Transitions: absent → issued → revoked; revocation is
/// terminal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CertificateProjection {
    Absent,
    Issued(IssuedView),
    Revoked {
        issued: IssuedView,
        reason: Option<String>,
    },
}

/// Deterministic projection builder over a ledger reader.
pub struct ProjectionBuilder;

impl ProjectionBuilder {
    /// Fold the blocks referencing `certificate_id` into its current state.
    pub fn certificate_status<R: LedgerReader>(
        reader: &R,
        certificate_id: &str,
    ) -> Result<CertificateProjection, LedgerError> {
        let blocks = reader.find_by_certificate(certificate_id)?;
        let mut projection = CertificateProjection::Absent;

        for block in &blocks {
            projection = match block.payload() {
                BlockPayload::Genesis => projection,
                BlockPayload::Issue(record) => CertificateProjection::Issued(IssuedView {
                    certificate_id: record.certificate_id.clone(),
                    student_name: record.student_name.clone(),
                    course_name: record.course_name.clone(),
                    university_name: record.university_name.clone(),
                    issue_date: record.issue_date,
                    issued_at: block.timestamp(),
                    block_index: block.index(),
                }),
                BlockPayload::Revoke { reason, .. } => match projection {
                    CertificateProjection::Issued(issued) => CertificateProjection::Revoked {
                        issued,
                        reason: reason.clone(),
                    },
                    other => other,
                },
            };
        }

        Ok(projection)
    }
}
