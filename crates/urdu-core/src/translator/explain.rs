use serde::Serialize;

use super::{MatchKind, TokenTrace, Translator};
use crate::normalize::normalize;
use crate::stats::TranslationStats;
use crate::unicode::{is_arabic_script, is_stripped_punctuation};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharMapping {
    pub urdu: char,
    pub roman: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExplainResult {
    pub input: String,
    pub normalized: String,
    pub tokens: Vec<TokenTrace>,
    pub output: String,
    /// Distinct mapped letters of the raw input, in first-appearance order.
    pub char_mappings: Vec<CharMapping>,
    /// Distinct Arabic-script letters of the normalized input with no mapping.
    pub unmapped: Vec<char>,
    pub stats: TranslationStats,
}

/// Translate `text` and record how every token and letter was handled.
pub fn explain(translator: &Translator, text: &str) -> ExplainResult {
    let table = translator.table();
    let normalized = normalize(text);
    let tokens = translator.translate_tokens(text);
    let output = tokens
        .iter()
        .map(|t| t.output.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    let mut char_mappings: Vec<CharMapping> = Vec::new();
    for c in text.chars() {
        if char_mappings.iter().any(|m| m.urdu == c) {
            continue;
        }
        if let Some(roman) = table.get_char(c) {
            char_mappings.push(CharMapping {
                urdu: c,
                roman: roman.to_string(),
            });
        }
    }

    let mut unmapped: Vec<char> = Vec::new();
    for c in normalized.chars() {
        if is_arabic_script(c)
            && !is_stripped_punctuation(c)
            && table.get_char(c).is_none()
            && !unmapped.contains(&c)
        {
            unmapped.push(c);
        }
    }

    let stats = TranslationStats::measure(text, &output);

    ExplainResult {
        input: text.to_string(),
        normalized,
        tokens,
        output,
        char_mappings,
        unmapped,
        stats,
    }
}

fn pad(label: &str, width: usize) -> String {
    use unicode_width::UnicodeWidthStr;
    let display_width = UnicodeWidthStr::width(label);
    if display_width < width {
        format!("{}{}", label, " ".repeat(width - display_width))
    } else {
        label.to_string()
    }
}

fn kind_label(kind: MatchKind) -> &'static str {
    match kind {
        MatchKind::Word => "word",
        MatchKind::Characters => "chars",
        MatchKind::Passthrough => "keep",
    }
}

/// Format an ExplainResult as human-readable text.
pub fn format_text(result: &ExplainResult) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "=== Tokens for \"{}\" ({}) ===\n",
        result.normalized,
        result.tokens.len(),
    ));
    for (i, t) in result.tokens.iter().enumerate() {
        let stripped = if t.stripped != t.source {
            format!("  (stripped: {})", t.stripped)
        } else {
            String::new()
        };
        out.push_str(&format!(
            "  #{:<3} {} -> {}  [{}]{}\n",
            i + 1,
            pad(&t.source, 12),
            t.output,
            kind_label(t.kind),
            stripped,
        ));
    }

    out.push_str(&format!("\n=== Output ===\n  {}\n", result.output));

    if !result.char_mappings.is_empty() {
        out.push_str(&format!(
            "\n=== Character mapping ({}) ===\n",
            result.char_mappings.len()
        ));
        for m in &result.char_mappings {
            let roman = if m.roman.is_empty() {
                "(silent)"
            } else {
                m.roman.as_str()
            };
            out.push_str(&format!("  {} -> {}\n", pad(&m.urdu.to_string(), 4), roman));
        }
    }

    if !result.unmapped.is_empty() {
        let letters: Vec<String> = result
            .unmapped
            .iter()
            .map(|c| format!("{c} (U+{:04X})", *c as u32))
            .collect();
        out.push_str(&format!("\n=== Unmapped ===\n  {}\n", letters.join(", ")));
    }

    let s = &result.stats;
    out.push_str(&format!(
        "\n=== Stats ===\n  input:  {} words, {} chars\n  output: {} words, {} chars\n",
        s.input_words, s.input_chars, s.output_words, s.output_chars,
    ));

    out
}
