//! Urdu → Roman Urdu lookup table.
//!
//! The built-in table is the compiled-in `DEFAULT_MAPPINGS` slice. Custom
//! tables load from TOML (`[mappings]` section, one `"urdu" = "roman"` pair
//! per line). A `MappingTable` is immutable once built.

mod config;
mod table;

pub use config::{parse_mapping_toml, MappingConfigError};
pub use table::DEFAULT_MAPPINGS;

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum MappingError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Config(#[from] MappingConfigError),
}

/// Whether a key is a single letter or a multi-letter word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MappingKind {
    Character,
    Word,
}

impl MappingKind {
    /// Classify by code-point count.
    pub fn of(key: &str) -> Self {
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(_), None) => MappingKind::Character,
            _ => MappingKind::Word,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MappingEntry {
    pub urdu: String,
    pub roman: String,
}

impl MappingEntry {
    pub fn kind(&self) -> MappingKind {
        MappingKind::of(&self.urdu)
    }
}

/// Counts per kind plus the first few entries in table order.
#[derive(Debug, Clone, Serialize)]
pub struct MappingSummary {
    pub character_mappings: usize,
    pub word_mappings: usize,
    pub total_mappings: usize,
    pub sample: Vec<MappingEntry>,
}

#[derive(Debug, Clone)]
pub struct MappingTable {
    entries: Vec<MappingEntry>,
    index: HashMap<String, usize>,
}

impl MappingTable {
    /// The compiled-in table.
    pub fn builtin() -> Self {
        Self::from_pairs(DEFAULT_MAPPINGS.iter().map(|&(k, v)| (k.to_string(), v.to_string())))
    }

    /// Parse and validate a `[mappings]` TOML document.
    pub fn from_toml(toml_str: &str) -> Result<Self, MappingConfigError> {
        let map = parse_mapping_toml(toml_str)?;
        Ok(Self::from_pairs(map))
    }

    /// Load a custom table from a TOML file.
    pub fn open(path: &Path) -> Result<Self, MappingError> {
        let content = fs::read_to_string(path)?;
        let table = Self::from_toml(&content)?;
        debug!(path = %path.display(), entries = table.len(), "loaded mapping table");
        Ok(table)
    }

    /// Later duplicates overwrite earlier values but keep the first position.
    fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut entries: Vec<MappingEntry> = Vec::new();
        let mut index = HashMap::new();
        for (urdu, roman) in pairs {
            match index.get(&urdu) {
                Some(&i) => entries[i] = MappingEntry { urdu, roman },
                None => {
                    index.insert(urdu.clone(), entries.len());
                    entries.push(MappingEntry { urdu, roman });
                }
            }
        }
        Self { entries, index }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.index.get(key).map(|&i| self.entries[i].roman.as_str())
    }

    pub fn get_char(&self, c: char) -> Option<&str> {
        let mut buf = [0u8; 4];
        self.get(c.encode_utf8(&mut buf))
    }

    /// Look up a whole-word key. Single-letter keys never match here.
    pub fn get_word(&self, word: &str) -> Option<&str> {
        match MappingKind::of(word) {
            MappingKind::Word => self.get(word),
            MappingKind::Character => None,
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = &MappingEntry> {
        self.entries.iter()
    }

    pub fn summary(&self, sample_len: usize) -> MappingSummary {
        let character_mappings = self
            .entries
            .iter()
            .filter(|e| e.kind() == MappingKind::Character)
            .count();
        MappingSummary {
            character_mappings,
            word_mappings: self.entries.len() - character_mappings,
            total_mappings: self.entries.len(),
            sample: self.entries.iter().take(sample_len).cloned().collect(),
        }
    }

    /// Export as a `[mappings]` TOML document in table order.
    pub fn to_toml(&self) -> String {
        config::render_toml(
            self.entries
                .iter()
                .map(|e| (e.urdu.as_str(), e.roman.as_str())),
        )
    }
}

impl Default for MappingTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// The built-in table rendered as TOML, a starting point for custom tables.
pub fn default_toml() -> String {
    MappingTable::builtin().to_toml()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::io::Write;

    use super::*;

    #[test]
    fn test_builtin_counts() {
        let summary = MappingTable::builtin().summary(10);
        assert_eq!(summary.character_mappings, 41);
        assert_eq!(summary.word_mappings, 19);
        assert_eq!(summary.total_mappings, 60);
        assert_eq!(summary.sample.len(), 10);
        assert_eq!(summary.sample[0].urdu, "ا");
        assert_eq!(summary.sample[3].urdu, "ای");
        assert_eq!(summary.sample[9].urdu, "ب");
    }

    #[test]
    fn test_builtin_keys_unique_and_valid() {
        let mut seen = HashSet::new();
        for (key, _) in DEFAULT_MAPPINGS {
            assert!(seen.insert(*key), "duplicate key {key}");
            config::validate_key(key).unwrap();
        }
    }

    #[test]
    fn test_lookup() {
        let table = MappingTable::builtin();
        assert_eq!(table.get("ب"), Some("b"));
        assert_eq!(table.get_char('چ'), Some("ch"));
        assert_eq!(table.get_char('ء'), Some(""));
        assert_eq!(table.get_char('ہ'), None);
        assert_eq!(table.get_word("اور"), Some("aur"));
        assert_eq!(table.get_word("ا"), None);
        assert!(table.contains("ای"));
        assert!(!table.contains("x"));
    }

    #[test]
    fn test_kind() {
        assert_eq!(MappingKind::of("ا"), MappingKind::Character);
        assert_eq!(MappingKind::of("او"), MappingKind::Word);
        assert_eq!(MappingKind::of("میں"), MappingKind::Word);
    }

    #[test]
    fn test_default_toml_roundtrip() {
        let exported = default_toml();
        let table = MappingTable::from_toml(&exported).unwrap();
        assert_eq!(table.len(), DEFAULT_MAPPINGS.len());
        for (key, value) in DEFAULT_MAPPINGS {
            assert_eq!(table.get(key), Some(*value), "mismatch for {key}");
        }
    }

    #[test]
    fn test_summary_sample_shorter_than_requested() {
        let table = MappingTable::from_toml("[mappings]\n\"ب\" = \"b\"\n").unwrap();
        let summary = table.summary(10);
        assert_eq!(summary.total_mappings, 1);
        assert_eq!(summary.sample.len(), 1);
    }

    #[test]
    fn test_open_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[mappings]\n\"ب\" = \"bay\"\n\"گھر\" = \"ghar\"").unwrap();
        let table = MappingTable::open(file.path()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("ب"), Some("bay"));
        assert_eq!(table.get_word("گھر"), Some("ghar"));
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = MappingTable::open(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, MappingError::Io(_)));
    }

    #[test]
    fn test_open_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[mappings]").unwrap();
        let err = MappingTable::open(file.path()).unwrap_err();
        assert!(matches!(err, MappingError::Config(MappingConfigError::Empty)));
    }
}
