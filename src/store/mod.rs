use std::fs;
use std::io;
use std::path::PathBuf;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::{HIGH_SCORE_KEY, SCORE_TABLE_KEY};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    pub score: u64,
}

/// File-per-key local storage for scores. Missing or unparsable values fall
/// back to defaults; they are replaced wholesale on the next write.
pub struct ScoreStore {
    root: PathBuf,
}

impl ScoreStore {
    pub fn open(root: impl Into<PathBuf>) -> io::Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn read_key(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.root.join(key)).ok()
    }

    fn write_key(&self, key: &str, value: &str) -> io::Result<()> {
        fs::write(self.root.join(key), value)
    }

    /// The persisted high score, stored as a base-10 integer string.
    pub fn high_score(&self) -> u64 {
        match self.read_key(HIGH_SCORE_KEY) {
            None => 0,
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!("unparsable high score {raw:?}, treating as 0");
                0
            }),
        }
    }

    pub fn set_high_score(&self, score: u64) -> io::Result<()> {
        self.write_key(HIGH_SCORE_KEY, &score.to_string())
    }

    /// All stored table entries, in insertion order.
    pub fn entries(&self) -> Vec<ScoreEntry> {
        match self.read_key(SCORE_TABLE_KEY) {
            None => Vec::new(),
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!("unparsable score table ({e}), treating as empty");
                Vec::new()
            }),
        }
    }

    /// Append one entry; the stored list is never deduplicated or pruned.
    pub fn append_entry(&self, entry: ScoreEntry) -> io::Result<()> {
        let mut entries = self.entries();
        entries.push(entry);
        let encoded = serde_json::to_string(&entries)?;
        self.write_key(SCORE_TABLE_KEY, &encoded)
    }
}

/// Display-time view: descending by score, truncated to `limit`.
pub fn top_entries(entries: &[ScoreEntry], limit: usize) -> Vec<ScoreEntry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| b.score.cmp(&a.score));
    sorted.truncate(limit);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn temp_store(tag: &str) -> ScoreStore {
        let root = std::env::temp_dir().join(format!("isosnake-{}-{tag}", std::process::id()));
        let _ = fs::remove_dir_all(&root);
        ScoreStore::open(root).unwrap()
    }

    fn seed_key(root: &Path, key: &str, value: &str) {
        fs::write(root.join(key), value).unwrap();
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let store = temp_store("missing");
        assert_eq!(store.high_score(), 0);
        assert!(store.entries().is_empty());
    }

    #[test]
    fn garbage_values_fall_back_to_defaults() {
        let store = temp_store("garbage");
        seed_key(&store.root, HIGH_SCORE_KEY, "not a number");
        seed_key(&store.root, SCORE_TABLE_KEY, "{broken json");
        assert_eq!(store.high_score(), 0);
        assert!(store.entries().is_empty());
    }

    #[test]
    fn high_score_round_trips_as_integer_string() {
        let store = temp_store("roundtrip");
        store.set_high_score(42).unwrap();
        assert_eq!(store.high_score(), 42);
        assert_eq!(
            fs::read_to_string(store.root.join(HIGH_SCORE_KEY)).unwrap(),
            "42"
        );
    }

    #[test]
    fn appended_entries_keep_insertion_order() {
        let store = temp_store("append");
        store
            .append_entry(ScoreEntry { name: "Alice".into(), score: 7 })
            .unwrap();
        store
            .append_entry(ScoreEntry { name: "Bob".into(), score: 3 })
            .unwrap();
        store
            .append_entry(ScoreEntry { name: "Alice".into(), score: 7 })
            .unwrap();
        let entries = store.entries();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].name, "Alice");
        assert_eq!(entries[1].name, "Bob");
        assert_eq!(entries[2], ScoreEntry { name: "Alice".into(), score: 7 });
    }

    #[test]
    fn top_entries_sorts_descending_and_truncates() {
        let entries: Vec<ScoreEntry> = [
            ("A", 10),
            ("B", 30),
            ("C", 20),
            ("D", 5),
            ("E", 25),
            ("F", 1),
        ]
        .into_iter()
        .map(|(name, score)| ScoreEntry { name: name.into(), score })
        .collect();
        let top = top_entries(&entries, 5);
        let view: Vec<(&str, u64)> = top.iter().map(|e| (e.name.as_str(), e.score)).collect();
        assert_eq!(view, vec![("B", 30), ("E", 25), ("C", 20), ("A", 10), ("D", 5)]);
    }
}
