//! UniFFI export layer: Swift/Kotlin bindings for the transliteration engine.
//!
//! Each public type here maps to a generated class, struct, or enum.

mod translator;
mod types;

pub use translator::UrduTranslator;
pub use types::{
    UrduError, UrduExplanation, UrduMappingEntry, UrduMappingSummary, UrduMatchKind, UrduStats,
    UrduToken,
};

use std::path::Path;

use urdu_core::mapping::{default_toml, parse_mapping_toml};

// ---------------------------------------------------------------------------
// Top-level functions
// ---------------------------------------------------------------------------

#[uniffi::export]
fn engine_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Transliterate with the built-in table.
#[uniffi::export]
fn translate(text: String) -> String {
    urdu_core::translate(&text)
}

#[uniffi::export]
fn normalize_text(text: String) -> String {
    urdu_core::normalize(&text)
}

#[uniffi::export]
fn mapping_default_config() -> String {
    default_toml()
}

/// Validate a mapping TOML file, returning its entry count.
#[uniffi::export]
fn mapping_validate_config(path: String) -> Result<u32, UrduError> {
    let content = std::fs::read_to_string(&path).map_err(|e| UrduError::Io {
        msg: format!("{path}: {e}"),
    })?;
    let map =
        parse_mapping_toml(&content).map_err(|e| UrduError::InvalidData { msg: e.to_string() })?;
    Ok(u32::try_from(map.len()).unwrap_or(u32::MAX))
}

#[uniffi::export]
fn init_tracing(log_dir: String) {
    crate::trace_init::init_tracing(Path::new(&log_dir));
}
