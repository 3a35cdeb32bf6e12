use serde::Serialize;

use crate::unicode::is_space;

/// Word and character counts for one translation. Characters are code
/// points; words are runs of non-whitespace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TranslationStats {
    pub input_words: usize,
    pub input_chars: usize,
    pub output_words: usize,
    pub output_chars: usize,
}

impl TranslationStats {
    /// `input` is measured after trimming; `output` as given.
    pub fn measure(input: &str, output: &str) -> Self {
        let input = input.trim_matches(is_space);
        Self {
            input_words: count_words(input),
            input_chars: input.chars().count(),
            output_words: count_words(output),
            output_chars: output.chars().count(),
        }
    }
}

fn count_words(s: &str) -> usize {
    s.split(is_space).filter(|w| !w.is_empty()).count()
}
