use certledger_types::{BlockHash, BlockPayload};

/// Domain-separated BLAKE3 fingerprint over a block's canonical form.
///
/// The hasher carries a domain tag that is prepended to every computation,
/// so a certificate block can never collide with a digest produced for any
/// other purpose.
///
/// Hash input layout (bytes, in order):
///   1. domain tag as UTF-8 bytes, followed by `:`
///   2. block index as 8-byte little-endian
///   3. block timestamp as 8-byte little-endian epoch milliseconds
///   4. previous hash, raw 32 bytes
///   5. payload canonical bytes (see [`BlockPayload::canonical_bytes`])
///
/// Fields 2–4 are fixed-width and the payload's variable-length fields are
/// individually length-prefixed, so no two field splits produce the same
/// input stream. The function is total: every well-formed block has a
/// fingerprint.
pub struct BlockHasher {
    domain: &'static str,
}

impl BlockHasher {
    /// Hasher for certificate ledger blocks.
    pub const BLOCK: Self = Self {
        domain: "certledger-block-v1",
    };

    /// Create a hasher with a custom domain tag.
    pub const fn new(domain: &'static str) -> Self {
        Self { domain }
    }

    /// Compute the fingerprint of a block's content.
    pub fn fingerprint(
        &self,
        index: u64,
        timestamp_ms: i64,
        payload: &BlockPayload,
        previous_hash: &BlockHash,
    ) -> BlockHash {
        let mut hasher = blake3::Hasher::new();
        hasher.update(self.domain.as_bytes());
        hasher.update(b":");
        hasher.update(&index.to_le_bytes());
        hasher.update(&timestamp_ms.to_le_bytes());
        hasher.update(previous_hash.as_bytes());
        hasher.update(&payload.canonical_bytes());
        BlockHash::from_digest(*hasher.finalize().as_bytes())
    }

    /// Recompute and compare against a stored fingerprint.
    pub fn verify(
        &self,
        index: u64,
        timestamp_ms: i64,
        payload: &BlockPayload,
        previous_hash: &BlockHash,
        expected: &BlockHash,
    ) -> bool {
        self.fingerprint(index, timestamp_ms, payload, previous_hash) == *expected
    }

    /// The domain tag used by this hasher.
    pub fn domain(&self) -> &str {
        self.domain
    }
}

#[cfg(test)]
mod tests {
    use certledger_types::CertificateRecord;
    use chrono::NaiveDate;

    use super::*;

    fn issue_payload(id: &str) -> BlockPayload {
        BlockPayload::Issue(CertificateRecord::issued(
            id,
            "A. Lee",
            "CS101",
            "State U",
            NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
        ))
    }

    #[test]
    fn fingerprint_is_deterministic() {
        let payload = issue_payload("CERT-001");
        let prev = BlockHash::zero();
        let h1 = BlockHasher::BLOCK.fingerprint(1, 1_700_000_000_000, &payload, &prev);
        let h2 = BlockHasher::BLOCK.fingerprint(1, 1_700_000_000_000, &payload, &prev);
        assert_eq!(h1, h2);
    }

    #[test]
    fn every_field_contributes_to_the_fingerprint() {
        let payload = issue_payload("CERT-001");
        let prev = BlockHash::zero();
        let base = BlockHasher::BLOCK.fingerprint(1, 1_700_000_000_000, &payload, &prev);

        let changed_index = BlockHasher::BLOCK.fingerprint(2, 1_700_000_000_000, &payload, &prev);
        assert_ne!(base, changed_index);

        let changed_time = BlockHasher::BLOCK.fingerprint(1, 1_700_000_000_001, &payload, &prev);
        assert_ne!(base, changed_time);

        let changed_payload =
            BlockHasher::BLOCK.fingerprint(1, 1_700_000_000_000, &issue_payload("CERT-002"), &prev);
        assert_ne!(base, changed_payload);

        let other_prev = BlockHash::from_digest([9u8; 32]);
        let changed_prev =
            BlockHasher::BLOCK.fingerprint(1, 1_700_000_000_000, &payload, &other_prev);
        assert_ne!(base, changed_prev);
    }

    #[test]
    fn different_domains_produce_different_fingerprints() {
        let payload = BlockPayload::Genesis;
        let prev = BlockHash::zero();
        let block_hash = BlockHasher::BLOCK.fingerprint(0, 0, &payload, &prev);
        let custom = BlockHasher::new("certledger-test-v1").fingerprint(0, 0, &payload, &prev);
        assert_ne!(block_hash, custom);
    }

    #[test]
    fn verify_accepts_matching_fingerprint() {
        let payload = issue_payload("CERT-003");
        let prev = BlockHash::zero();
        let hash = BlockHasher::BLOCK.fingerprint(1, 42, &payload, &prev);
        assert!(BlockHasher::BLOCK.verify(1, 42, &payload, &prev, &hash));
    }

    #[test]
    fn verify_rejects_tampered_content() {
        let payload = issue_payload("CERT-003");
        let prev = BlockHash::zero();
        let hash = BlockHasher::BLOCK.fingerprint(1, 42, &payload, &prev);
        let tampered = issue_payload("CERT-004");
        assert!(!BlockHasher::BLOCK.verify(1, 42, &tampered, &prev, &hash));
    }
}
