//! Urdu → Roman Urdu transliteration engine with UniFFI bindings.

uniffi::setup_scaffolding!();

pub mod api;
mod trace_init;

pub use urdu_core::{mapping, normalize, samples, translator, TranslationStats, Translator};
