//! Canonical serialization for deterministic fingerprints.
//!
//! The report contract is determinism: the same model must produce the same
//! record sequence, byte for byte, on every run. The fingerprint makes that
//! property checkable without diffing report files.
//!
//! ## Determinism Guarantees
//!
//! - Stable field order: struct fields serialize in declaration order
//! - Stable Vec order: vectors serialize in index order
//! - No HashMap allowed: keyed aggregates use BTreeMap

use serde::Serialize;
use xxhash_rust::xxh64::xxh64;

use crate::types::ApertureRecord;

/// Serialize a value to canonical JSON bytes for hashing.
pub fn to_canonical_bytes<T: Serialize>(value: &T) -> Vec<u8> {
    serde_json::to_vec(value).expect("canonical serialization failed")
}

/// Compute canonical hash of a serializable value.
pub fn canonical_hash<T: Serialize>(value: &T) -> u64 {
    xxh64(&to_canonical_bytes(value), 0)
}

/// Compute canonical hash and return as hex string.
pub fn canonical_hash_hex<T: Serialize>(value: &T) -> String {
    format!("{:016x}", canonical_hash(value))
}

/// Fingerprint of an ordered record sequence.
///
/// Covers every record field in sequence order, so two passes agree iff they
/// produced identical inventories.
pub fn inventory_fingerprint(records: &[ApertureRecord]) -> String {
    canonical_hash_hex(&records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ApertureRecord, AttachmentPoint, Element, ElementKind, PositionInterval};

    fn make_record(name: &str, radius: f64) -> ApertureRecord {
        let child = Element::new(name, ElementKind::CircleAperture { radius }, 0.0);
        ApertureRecord::from_child(
            &child,
            0,
            AttachmentPoint::Body,
            0,
            PositionInterval::new(0.0, 1.0),
        )
        .unwrap()
    }

    #[test]
    fn test_fingerprint_determinism() {
        let records = vec![make_record("a", 0.05), make_record("b", 0.07)];

        let f1 = inventory_fingerprint(&records);
        let f2 = inventory_fingerprint(&records);
        assert_eq!(f1, f2);
    }

    #[test]
    fn test_fingerprint_is_order_sensitive() {
        let forward = vec![make_record("a", 0.05), make_record("b", 0.07)];
        let reversed: Vec<_> = forward.iter().rev().cloned().collect();

        assert_ne!(
            inventory_fingerprint(&forward),
            inventory_fingerprint(&reversed)
        );
    }

    #[test]
    fn test_fingerprint_sees_geometry() {
        let narrow = vec![make_record("a", 0.05)];
        let wide = vec![make_record("a", 0.06)];

        assert_ne!(inventory_fingerprint(&narrow), inventory_fingerprint(&wide));
    }
}
