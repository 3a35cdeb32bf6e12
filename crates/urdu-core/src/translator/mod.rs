//! Urdu → Roman Urdu transliteration.
//!
//! Pipeline per call: normalize → split on spaces → strip the four Urdu
//! punctuation marks → whole-word lookup → per-character fallback. Characters
//! without a mapping pass through unchanged, so translation never fails.

mod explain;
#[cfg(test)]
mod tests;

pub use explain::{explain, format_text, CharMapping, ExplainResult};

use std::sync::{Arc, OnceLock};

use serde::Serialize;
use tracing::{debug, debug_span};

use crate::mapping::MappingTable;
use crate::normalize::normalize;
use crate::unicode::{is_space, strip_punctuation};

/// Which rule produced a token's output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// The stripped token is a whole-word key.
    Word,
    /// Letter-by-letter substitution.
    Characters,
    /// The token was nothing but stripped punctuation and is emitted as-is.
    Passthrough,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenTrace {
    pub source: String,
    pub stripped: String,
    pub output: String,
    pub kind: MatchKind,
}

#[derive(Debug, Clone, Default)]
pub struct Translator {
    table: Arc<MappingTable>,
}

impl Translator {
    pub fn new(table: MappingTable) -> Self {
        Self {
            table: Arc::new(table),
        }
    }

    /// Shared translator over the built-in table, built on first use.
    pub fn builtin() -> &'static Translator {
        static INSTANCE: OnceLock<Translator> = OnceLock::new();
        INSTANCE.get_or_init(Translator::default)
    }

    pub fn table(&self) -> &MappingTable {
        &self.table
    }

    /// Transliterate `text`. Total over all input; empty in, empty out.
    pub fn translate(&self, text: &str) -> String {
        self.translate_tokens(text)
            .into_iter()
            .map(|t| t.output)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Normalize and translate, keeping the per-token record.
    pub fn translate_tokens(&self, text: &str) -> Vec<TokenTrace> {
        let _span = debug_span!("translate", input_len = text.len()).entered();
        let normalized = normalize(text);
        if normalized.is_empty() {
            return Vec::new();
        }

        let traces: Vec<TokenTrace> = normalized
            .split(' ')
            .map(|token| self.translate_token(token))
            .collect();

        debug!(
            tokens = traces.len(),
            word_hits = traces.iter().filter(|t| t.kind == MatchKind::Word).count(),
            "translated"
        );
        traces
    }

    /// Translate one whitespace-free token.
    pub fn translate_token(&self, token: &str) -> TokenTrace {
        let stripped = strip_punctuation(token);

        let (output, kind) = if let Some(roman) = self.table.get_word(&stripped) {
            (roman.to_string(), MatchKind::Word)
        } else if stripped.is_empty() {
            (token.to_string(), MatchKind::Passthrough)
        } else {
            (self.transliterate_chars(&stripped), MatchKind::Characters)
        };

        TokenTrace {
            source: token.to_string(),
            stripped,
            output,
            kind,
        }
    }

    /// Letter-by-letter substitution with no normalization or tokenizing.
    /// Whitespace becomes a single ASCII space per character; unmapped
    /// characters are kept.
    pub fn transliterate_chars(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            match self.table.get_char(c) {
                Some(roman) => out.push_str(roman),
                None if is_space(c) => out.push(' '),
                None => out.push(c),
            }
        }
        out
    }
}

/// Transliterate with the built-in table.
pub fn translate(text: &str) -> String {
    Translator::builtin().translate(text)
}
