//! Record digests for change detection.
//!
//! A record digest is the lower 64 bits of a labeled SHA-256 over the
//! record's canonical JSON:
//!
//! `D(record) = lower_64(SHA256("site" || 0x00 || json(record)))`
//!
//! Identical records digest identically; any field change moves the digest
//! with overwhelming probability. The digest is a change-detection etag for
//! fetched records, not a security boundary and not related to the visual
//! fingerprint glyph.

use sha2::{Digest, Sha256};

use crate::error::AtlasError;
use crate::types::HeritageSite;

/// Domain-separation label for record digests.
const RECORD_LABEL: &[u8] = b"site";

/// Digest a record to a u64.
pub fn record_digest(site: &HeritageSite) -> Result<u64, AtlasError> {
    let canonical = serde_json::to_vec(site)
        .map_err(|e| AtlasError::RecordSerialize(e.to_string()))?;
    Ok(labeled_digest(RECORD_LABEL, &canonical))
}

/// Fixed-width hex rendering of a digest, for log lines and comparisons.
pub fn digest_hex(digest: u64) -> String {
    hex::encode(digest.to_be_bytes())
}

/// Labeled SHA-256 truncated to the last 8 bytes, little-endian.
fn labeled_digest(label: &[u8], data: &[u8]) -> u64 {
    let mut hasher = Sha256::new();
    hasher.update(label);
    hasher.update([0x00]);
    hasher.update(data);
    let hash = hasher.finalize();

    // Lower 64 bits: the last 8 bytes interpreted little-endian.
    let bytes: [u8; 8] = hash[hash.len() - 8..].try_into().unwrap_or([0; 8]);
    u64::from_le_bytes(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sites::{builtin_sites, site_by_id};

    #[test]
    fn test_digest_determinism() {
        let site = site_by_id(0).unwrap();
        assert_eq!(record_digest(&site).unwrap(), record_digest(&site).unwrap());
    }

    #[test]
    fn test_digest_changes_with_record() {
        let site = site_by_id(0).unwrap();
        let mut edited = site.clone();
        edited.description.push_str(" Updated.");

        assert_ne!(
            record_digest(&site).unwrap(),
            record_digest(&edited).unwrap()
        );
    }

    #[test]
    fn test_builtin_digests_distinct() {
        let sites = builtin_sites();
        let mut digests: Vec<u64> = sites
            .iter()
            .map(|site| record_digest(site).unwrap())
            .collect();
        digests.sort_unstable();
        digests.dedup();
        assert_eq!(digests.len(), sites.len());
    }

    #[test]
    fn test_label_separation() {
        // Same bytes under different labels must not collide.
        let a = labeled_digest(b"site", b"payload");
        let b = labeled_digest(b"other", b"payload");
        assert_ne!(a, b);
    }

    #[test]
    fn test_digest_hex_width() {
        assert_eq!(digest_hex(0), "0000000000000000");
        assert_eq!(digest_hex(0x2397), "0000000000002397");
        assert_eq!(digest_hex(u64::MAX), "ffffffffffffffff");
    }
}
