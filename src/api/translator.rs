use std::path::Path;
use std::sync::Arc;

use tracing::debug;
use urdu_core::translator::explain;
use urdu_core::{MappingTable, TranslationStats, Translator};

use super::{UrduError, UrduExplanation, UrduMappingSummary, UrduStats};

/// An immutable translator. Build one per mapping table and share it.
#[derive(uniffi::Object)]
pub struct UrduTranslator {
    inner: Translator,
}

#[uniffi::export]
impl UrduTranslator {
    /// Translator over the built-in table.
    #[uniffi::constructor]
    fn new() -> Arc<Self> {
        Arc::new(Self {
            inner: Translator::default(),
        })
    }

    /// Translator over a custom TOML mapping table.
    #[uniffi::constructor]
    fn from_config(path: String) -> Result<Arc<Self>, UrduError> {
        let table = MappingTable::open(Path::new(&path)).map_err(|e| match e {
            urdu_core::MappingError::Io(io) => UrduError::Io {
                msg: format!("{path}: {io}"),
            },
            other => other.into(),
        })?;
        debug!(path = %path, entries = table.len(), "custom translator");
        Ok(Arc::new(Self {
            inner: Translator::new(table),
        }))
    }

    fn translate(&self, text: String) -> String {
        self.inner.translate(&text)
    }

    fn explain(&self, text: String) -> UrduExplanation {
        explain(&self.inner, &text).into()
    }

    fn stats(&self, text: String) -> UrduStats {
        let output = self.inner.translate(&text);
        TranslationStats::measure(&text, &output).into()
    }

    fn summary(&self, sample_len: u32) -> UrduMappingSummary {
        self.inner.table().summary(sample_len as usize).into()
    }

    fn lookup(&self, key: String) -> Option<String> {
        self.inner.table().get(&key).map(String::from)
    }
}
