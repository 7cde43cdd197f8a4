use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lifecycle status carried by a certificate record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CertificateStatus {
    Issued,
    Revoked,
}

/// A university certificate as recorded on the ledger.
///
/// The `certificate_id` is unique across all non-revoked issued records at
/// any point in the chain; uniqueness is enforced by the service layer, not
/// here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateRecord {
    pub certificate_id: String,
    pub student_name: String,
    pub course_name: String,
    pub university_name: String,
    pub issue_date: NaiveDate,
    pub status: CertificateStatus,
}

impl CertificateRecord {
    /// Build a freshly issued record.
    pub fn issued(
        certificate_id: impl Into<String>,
        student_name: impl Into<String>,
        course_name: impl Into<String>,
        university_name: impl Into<String>,
        issue_date: NaiveDate,
    ) -> Self {
        Self {
            certificate_id: certificate_id.into(),
            student_name: student_name.into(),
            course_name: course_name.into(),
            university_name: university_name.into(),
            issue_date,
            status: CertificateStatus::Issued,
        }
    }
}
