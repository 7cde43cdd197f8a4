use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::record::{CertificateRecord, CertificateStatus};

/// Action carried by a single ledger block.
///
/// The genesis block carries no certificate data; every later block records
/// either the issuance of a certificate or the revocation of a previously
/// issued one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockPayload {
    Genesis,
    Issue(CertificateRecord),
    Revoke {
        certificate_id: String,
        reason: Option<String>,
    },
}

impl BlockPayload {
    /// Returns `true` for the genesis payload.
    pub fn is_genesis(&self) -> bool {
        matches!(self, BlockPayload::Genesis)
    }

    /// The certificate id this payload refers to, if any.
    pub fn certificate_id(&self) -> Option<&str> {
        match self {
            BlockPayload::Genesis => None,
            BlockPayload::Issue(record) => Some(&record.certificate_id),
            BlockPayload::Revoke { certificate_id, .. } => Some(certificate_id),
        }
    }

    /// Canonical byte encoding fed into the block fingerprint.
    ///
    /// Layout (bytes, in order):
    ///   1. variant tag: 0x00 genesis, 0x01 issue, 0x02 revoke
    ///   2. issue: certificate_id, student_name, course_name, university_name
    ///      each as u32 little-endian length followed by UTF-8 bytes, then
    ///      issue_date as i32 little-endian days-from-CE, then a status byte
    ///      (0x00 issued, 0x01 revoked)
    ///   3. revoke: certificate_id length-prefixed as above, then 0x00 for no
    ///      reason or 0x01 followed by the length-prefixed reason
    ///
    /// Every variable-length field carries its own length prefix, so two
    /// different field splits can never produce the same byte stream.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        match self {
            BlockPayload::Genesis => buf.push(0x00),
            BlockPayload::Issue(record) => {
                buf.push(0x01);
                put_str(&mut buf, &record.certificate_id);
                put_str(&mut buf, &record.student_name);
                put_str(&mut buf, &record.course_name);
                put_str(&mut buf, &record.university_name);
                buf.extend_from_slice(&record.issue_date.num_days_from_ce().to_le_bytes());
                buf.push(match record.status {
                    CertificateStatus::Issued => 0x00,
                    CertificateStatus::Revoked => 0x01,
                });
            }
            BlockPayload::Revoke {
                certificate_id,
                reason,
            } => {
                buf.push(0x02);
                put_str(&mut buf, certificate_id);
                match reason {
                    None => buf.push(0x00),
                    Some(reason) => {
                        buf.push(0x01);
                        put_str(&mut buf, reason);
                    }
                }
            }
        }
        buf
    }
}

fn put_str(buf: &mut Vec<u8>, s: &str) {
    buf.extend_from_slice(&(s.len() as u32).to_le_bytes());
    buf.extend_from_slice(s.as_bytes());
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use proptest::prelude::*;

    use super::*;

    fn record(id: &str, student: &str) -> CertificateRecord {
        CertificateRecord::issued(
            id,
            student,
            "CS101",
            "State U",
            NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
        )
    }

    #[test]
    fn genesis_is_a_single_tag_byte() {
        assert_eq!(BlockPayload::Genesis.canonical_bytes(), vec![0x00]);
    }

    #[test]
    fn variants_have_distinct_tags() {
        let issue = BlockPayload::Issue(record("CERT-001", "A. Lee"));
        let revoke = BlockPayload::Revoke {
            certificate_id: "CERT-001".into(),
            reason: None,
        };
        assert_eq!(issue.canonical_bytes()[0], 0x01);
        assert_eq!(revoke.canonical_bytes()[0], 0x02);
    }

    #[test]
    fn shifted_field_boundaries_encode_differently() {
        // "ab" + "c" vs "a" + "bc" must not collide
        let left = BlockPayload::Issue(record("ab", "c"));
        let right = BlockPayload::Issue(record("a", "bc"));
        assert_ne!(left.canonical_bytes(), right.canonical_bytes());
    }

    #[test]
    fn missing_reason_differs_from_empty_reason() {
        let none = BlockPayload::Revoke {
            certificate_id: "CERT-001".into(),
            reason: None,
        };
        let empty = BlockPayload::Revoke {
            certificate_id: "CERT-001".into(),
            reason: Some(String::new()),
        };
        assert_ne!(none.canonical_bytes(), empty.canonical_bytes());
    }

    #[test]
    fn certificate_id_lookup() {
        assert_eq!(BlockPayload::Genesis.certificate_id(), None);
        let issue = BlockPayload::Issue(record("CERT-007", "C. Diaz"));
        assert_eq!(issue.certificate_id(), Some("CERT-007"));
        let revoke = BlockPayload::Revoke {
            certificate_id: "CERT-007".into(),
            reason: Some("data entry error".into()),
        };
        assert_eq!(revoke.certificate_id(), Some("CERT-007"));
    }

    #[test]
    fn serde_tags_variants_by_type() {
        let issue = BlockPayload::Issue(record("CERT-001", "A. Lee"));
        let json = serde_json::to_value(&issue).unwrap();
        assert_eq!(json["type"], "issue");
        assert_eq!(json["certificate_id"], "CERT-001");

        let parsed: BlockPayload = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, issue);
    }

    proptest! {
        #[test]
        fn encoding_is_deterministic(id in ".{0,40}", student in ".{0,40}") {
            let payload = BlockPayload::Issue(record(&id, &student));
            prop_assert_eq!(payload.canonical_bytes(), payload.canonical_bytes());
        }

        #[test]
        fn distinct_payloads_encode_distinctly(
            a in ".{0,40}", b in ".{0,40}",
            c in ".{0,40}", d in ".{0,40}",
        ) {
            let left = BlockPayload::Issue(record(&a, &b));
            let right = BlockPayload::Issue(record(&c, &d));
            prop_assume!(left != right);
            prop_assert_ne!(left.canonical_bytes(), right.canonical_bytes());
        }
    }
}
