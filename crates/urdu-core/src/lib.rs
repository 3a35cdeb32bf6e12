//! Urdu → Roman Urdu transliteration by table lookup.

pub mod mapping;
pub mod normalize;
pub mod samples;
pub mod stats;
pub mod translator;
pub mod unicode;

pub use mapping::{MappingError, MappingTable};
pub use normalize::normalize;
pub use stats::TranslationStats;
pub use translator::{translate, Translator};
