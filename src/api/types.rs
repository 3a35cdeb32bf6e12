use urdu_core::mapping::{MappingEntry, MappingSummary};
use urdu_core::translator::{CharMapping, ExplainResult, MatchKind, TokenTrace};
use urdu_core::TranslationStats;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum UrduError {
    #[error("IO error: {msg}")]
    Io { msg: String },
    #[error("invalid data: {msg}")]
    InvalidData { msg: String },
}

impl From<urdu_core::MappingError> for UrduError {
    fn from(e: urdu_core::MappingError) -> Self {
        match e {
            urdu_core::MappingError::Io(io) => UrduError::Io { msg: io.to_string() },
            urdu_core::MappingError::Config(c) => UrduError::InvalidData { msg: c.to_string() },
        }
    }
}

// ---------------------------------------------------------------------------
// Records (value types, copied across FFI boundary)
// ---------------------------------------------------------------------------

#[derive(Clone, uniffi::Record)]
pub struct UrduStats {
    pub input_words: u32,
    pub input_chars: u32,
    pub output_words: u32,
    pub output_chars: u32,
}

impl From<TranslationStats> for UrduStats {
    fn from(s: TranslationStats) -> Self {
        Self {
            input_words: saturate(s.input_words),
            input_chars: saturate(s.input_chars),
            output_words: saturate(s.output_words),
            output_chars: saturate(s.output_chars),
        }
    }
}

#[derive(Clone, uniffi::Record)]
pub struct UrduMappingEntry {
    pub urdu: String,
    pub roman: String,
}

impl From<MappingEntry> for UrduMappingEntry {
    fn from(e: MappingEntry) -> Self {
        Self {
            urdu: e.urdu,
            roman: e.roman,
        }
    }
}

impl From<CharMapping> for UrduMappingEntry {
    fn from(m: CharMapping) -> Self {
        Self {
            urdu: m.urdu.to_string(),
            roman: m.roman,
        }
    }
}

#[derive(uniffi::Record)]
pub struct UrduMappingSummary {
    pub character_mappings: u32,
    pub word_mappings: u32,
    pub total_mappings: u32,
    pub sample: Vec<UrduMappingEntry>,
}

impl From<MappingSummary> for UrduMappingSummary {
    fn from(s: MappingSummary) -> Self {
        Self {
            character_mappings: saturate(s.character_mappings),
            word_mappings: saturate(s.word_mappings),
            total_mappings: saturate(s.total_mappings),
            sample: s.sample.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, uniffi::Enum)]
pub enum UrduMatchKind {
    Word,
    Characters,
    Passthrough,
}

impl From<MatchKind> for UrduMatchKind {
    fn from(k: MatchKind) -> Self {
        match k {
            MatchKind::Word => UrduMatchKind::Word,
            MatchKind::Characters => UrduMatchKind::Characters,
            MatchKind::Passthrough => UrduMatchKind::Passthrough,
        }
    }
}

#[derive(Clone, uniffi::Record)]
pub struct UrduToken {
    pub source: String,
    pub stripped: String,
    pub output: String,
    pub kind: UrduMatchKind,
}

impl From<TokenTrace> for UrduToken {
    fn from(t: TokenTrace) -> Self {
        Self {
            source: t.source,
            stripped: t.stripped,
            output: t.output,
            kind: t.kind.into(),
        }
    }
}

#[derive(uniffi::Record)]
pub struct UrduExplanation {
    pub normalized: String,
    pub output: String,
    pub tokens: Vec<UrduToken>,
    pub char_mappings: Vec<UrduMappingEntry>,
    pub unmapped: Vec<String>,
    pub stats: UrduStats,
}

impl From<ExplainResult> for UrduExplanation {
    fn from(r: ExplainResult) -> Self {
        Self {
            normalized: r.normalized,
            output: r.output,
            tokens: r.tokens.into_iter().map(Into::into).collect(),
            char_mappings: r.char_mappings.into_iter().map(Into::into).collect(),
            unmapped: r.unmapped.into_iter().map(String::from).collect(),
            stats: r.stats.into(),
        }
    }
}

fn saturate(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
