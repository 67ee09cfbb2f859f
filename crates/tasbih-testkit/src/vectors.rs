//! Snapshot vectors pinning the persisted document formats.
//!
//! Each vector pairs raw persisted documents with the state a session
//! must recover from them. Running the table through a real gateway pins
//! both the on-disk layout and the recovery rules: missing keys fill
//! with zero, unknown keys are pruned, stale selections are dropped, and
//! any undecodable document resets the whole state.

use std::io;
use std::path::Path;

use tasbih_core::CounterKey;

/// File name of the counts document, as written by the JSON gateway.
pub const COUNTS_FILE: &str = "counters.json";
/// File name of the selection document, as written by the JSON gateway.
pub const SELECTION_FILE: &str = "selection.json";

/// A stored-state vector: raw documents in, recovered state out.
#[derive(Debug, Clone)]
pub struct SnapshotVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Raw counts document, `None` when the medium holds none.
    pub counts_json: Option<&'static str>,
    /// Raw selection document, `None` when the medium holds none.
    pub selection_json: Option<&'static str>,
    /// Keys the recovering session is configured with.
    pub keys: &'static [&'static str],
    /// Expected counts after recovery, in configured order.
    pub expected_counts: &'static [(&'static str, u64)],
    /// Expected selection after recovery.
    pub expected_selection: Option<&'static str>,
}

impl SnapshotVector {
    /// The expected counts as typed pairs.
    pub fn expected_pairs(&self) -> Vec<(CounterKey, u64)> {
        self.expected_counts
            .iter()
            .map(|&(key, count)| (CounterKey::from(key), count))
            .collect()
    }

    /// The expected selection as a typed key.
    pub fn expected_key(&self) -> Option<CounterKey> {
        self.expected_selection.map(CounterKey::from)
    }
}

/// Get all snapshot vectors.
pub fn all_vectors() -> Vec<SnapshotVector> {
    vec![
        SnapshotVector {
            name: "fresh_install",
            counts_json: None,
            selection_json: None,
            keys: &["alpha", "beta"],
            expected_counts: &[("alpha", 0), ("beta", 0)],
            expected_selection: None,
        },
        SnapshotVector {
            name: "typical_session",
            counts_json: Some(r#"{"alpha":3,"beta":7}"#),
            selection_json: Some(r#""beta""#),
            keys: &["alpha", "beta"],
            expected_counts: &[("alpha", 3), ("beta", 7)],
            expected_selection: Some("beta"),
        },
        SnapshotVector {
            name: "default_phrases_session",
            counts_json: Some(r#"{"الحمد لله":33,"سبحان الله":21}"#),
            selection_json: Some(r#""الحمد لله""#),
            keys: &[
                "استغفر الله",
                "سبحان الله",
                "الحمد لله",
                "لا اله إلا الله",
                "الله أكبر",
            ],
            expected_counts: &[
                ("استغفر الله", 0),
                ("سبحان الله", 21),
                ("الحمد لله", 33),
                ("لا اله إلا الله", 0),
                ("الله أكبر", 0),
            ],
            expected_selection: Some("الحمد لله"),
        },
        SnapshotVector {
            name: "missing_keys_fill_with_zero",
            counts_json: Some(r#"{"alpha":5}"#),
            selection_json: None,
            keys: &["alpha", "beta", "gamma"],
            expected_counts: &[("alpha", 5), ("beta", 0), ("gamma", 0)],
            expected_selection: None,
        },
        SnapshotVector {
            name: "unknown_keys_pruned",
            counts_json: Some(r#"{"alpha":5,"retired":9}"#),
            selection_json: None,
            keys: &["alpha", "beta"],
            expected_counts: &[("alpha", 5), ("beta", 0)],
            expected_selection: None,
        },
        SnapshotVector {
            name: "stale_selection_dropped",
            counts_json: Some(r#"{"alpha":1}"#),
            selection_json: Some(r#""retired""#),
            keys: &["alpha", "beta"],
            expected_counts: &[("alpha", 1), ("beta", 0)],
            expected_selection: None,
        },
        SnapshotVector {
            name: "selection_without_counts",
            counts_json: None,
            selection_json: Some(r#""beta""#),
            keys: &["alpha", "beta"],
            expected_counts: &[("alpha", 0), ("beta", 0)],
            expected_selection: Some("beta"),
        },
        SnapshotVector {
            name: "explicit_zero_counts",
            counts_json: Some(r#"{"alpha":0,"beta":0}"#),
            selection_json: Some(r#""alpha""#),
            keys: &["alpha", "beta"],
            expected_counts: &[("alpha", 0), ("beta", 0)],
            expected_selection: Some("alpha"),
        },
        // A single undecodable document resets the whole state, even when
        // the other half is valid.
        SnapshotVector {
            name: "mangled_counts_document",
            counts_json: Some(r#"{"alpha": oops"#),
            selection_json: Some(r#""beta""#),
            keys: &["alpha", "beta"],
            expected_counts: &[("alpha", 0), ("beta", 0)],
            expected_selection: None,
        },
        SnapshotVector {
            name: "negative_count_rejected",
            counts_json: Some(r#"{"alpha":-4}"#),
            selection_json: None,
            keys: &["alpha", "beta"],
            expected_counts: &[("alpha", 0), ("beta", 0)],
            expected_selection: None,
        },
        SnapshotVector {
            name: "fractional_count_rejected",
            counts_json: Some(r#"{"alpha":3.5}"#),
            selection_json: None,
            keys: &["alpha", "beta"],
            expected_counts: &[("alpha", 0), ("beta", 0)],
            expected_selection: None,
        },
        SnapshotVector {
            name: "malformed_selection_document",
            counts_json: Some(r#"{"alpha":2}"#),
            selection_json: Some(r#"{"key":"alpha"}"#),
            keys: &["alpha", "beta"],
            expected_counts: &[("alpha", 0), ("beta", 0)],
            expected_selection: None,
        },
    ]
}

/// Write a vector's raw documents into a gateway directory.
pub fn seed_into(dir: &Path, vector: &SnapshotVector) -> io::Result<()> {
    if let Some(doc) = vector.counts_json {
        std::fs::write(dir.join(COUNTS_FILE), doc)?;
    }
    if let Some(doc) = vector.selection_json {
        std::fs::write(dir.join(SELECTION_FILE), doc)?;
    }
    Ok(())
}

/// Serialize (key, count) pairs into a well-formed counts document.
pub fn counts_document(pairs: &[(&str, u64)]) -> String {
    let map: std::collections::BTreeMap<&str, u64> = pairs.iter().copied().collect();
    serde_json::to_string(&map).expect("count maps always serialize")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tasbih::{CounterStore, JsonFileGateway, TallyConfig};

    #[test]
    fn test_vectors_recover_through_json_gateway() {
        for vector in all_vectors() {
            let dir = tempfile::tempdir().unwrap();
            seed_into(dir.path(), &vector).unwrap();

            let gateway = JsonFileGateway::open(dir.path()).unwrap();
            let config = TallyConfig::new(vector.keys.iter().copied()).unwrap();
            let store = CounterStore::initialize(config, gateway);

            for (key, expected) in vector.expected_pairs() {
                assert_eq!(
                    store.count_of(&key),
                    expected,
                    "vector '{}' recovered wrong count for {}",
                    vector.name,
                    key
                );
            }
            assert_eq!(
                store.selection().cloned(),
                vector.expected_key(),
                "vector '{}' recovered wrong selection",
                vector.name
            );
        }
    }

    #[test]
    fn test_vector_names_are_unique() {
        let vectors = all_vectors();
        let mut names: Vec<_> = vectors.iter().map(|v| v.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), vectors.len());
    }

    #[test]
    fn test_counts_document_shape() {
        let doc = counts_document(&[("beta", 0), ("alpha", 3)]);
        assert_eq!(doc, r#"{"alpha":3,"beta":0}"#);
    }

    #[test]
    fn test_counts_document_round_trips_through_vector() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(COUNTS_FILE),
            counts_document(&[("alpha", 44)]),
        )
        .unwrap();

        let gateway = JsonFileGateway::open(dir.path()).unwrap();
        let config = TallyConfig::new(["alpha"]).unwrap();
        let store = CounterStore::initialize(config, gateway);
        assert_eq!(store.count_of(&CounterKey::from("alpha")), 44);
    }
}
