use std::collections::BTreeMap;

use serde::Deserialize;
use unicode_normalization::is_nfkc;

use crate::unicode::{is_space, is_stripped_punctuation};

#[derive(Deserialize)]
struct MappingConfig {
    mappings: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum MappingConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[mappings] table is empty")]
    Empty,
    #[error("empty key")]
    EmptyKey,
    #[error("key contains whitespace: {0:?}")]
    WhitespaceKey(String),
    #[error("key contains stripped punctuation: {0}")]
    PunctuationKey(String),
    #[error("key is not NFKC-normalized: {0}")]
    NotNormalized(String),
}

/// Parse TOML text into a sorted `BTreeMap<urdu, roman>`.
///
/// Keys are matched against normalized, punctuation-stripped tokens, so a
/// key that could never appear in one is rejected. Empty values are valid.
pub fn parse_mapping_toml(toml_str: &str) -> Result<BTreeMap<String, String>, MappingConfigError> {
    let config: MappingConfig =
        toml::from_str(toml_str).map_err(|e| MappingConfigError::Parse(e.to_string()))?;

    if config.mappings.is_empty() {
        return Err(MappingConfigError::Empty);
    }

    for key in config.mappings.keys() {
        validate_key(key)?;
    }

    Ok(config.mappings)
}

pub(crate) fn validate_key(key: &str) -> Result<(), MappingConfigError> {
    if key.is_empty() {
        return Err(MappingConfigError::EmptyKey);
    }
    if key.chars().any(is_space) {
        return Err(MappingConfigError::WhitespaceKey(key.to_string()));
    }
    if key.chars().any(is_stripped_punctuation) {
        return Err(MappingConfigError::PunctuationKey(key.to_string()));
    }
    if !is_nfkc(key) {
        return Err(MappingConfigError::NotNormalized(key.to_string()));
    }
    Ok(())
}

/// Render `(key, value)` pairs as a `[mappings]` TOML document, keeping the
/// given order.
pub(crate) fn render_toml<'a>(entries: impl Iterator<Item = (&'a str, &'a str)>) -> String {
    let mut out = String::from("[mappings]\n");
    for (key, value) in entries {
        out.push_str(&toml::Value::String(key.to_string()).to_string());
        out.push_str(" = ");
        out.push_str(&toml::Value::String(value.to_string()).to_string());
        out.push('\n');
    }
    out
}
