use std::fs;

use unicode_width::UnicodeWidthStr;
use urdu_core::mapping::{default_toml, parse_mapping_toml, MappingKind, MappingSummary};
use urdu_core::Translator;

pub fn mapping_export() {
    print!("{}", default_toml());
}

pub fn mapping_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let map = die!(parse_mapping_toml(&content), "Error: {}");
    let words = map
        .keys()
        .filter(|k| MappingKind::of(k) == MappingKind::Word)
        .count();
    println!(
        "OK: {} mappings ({} characters, {} words)",
        map.len(),
        map.len() - words,
        words
    );
}

pub fn mapping_show(translator: &Translator, limit: usize, json: bool) {
    let summary = translator.table().summary(limit);
    if json {
        let out = die!(serde_json::to_string_pretty(&summary), "Error: {}");
        println!("{out}");
    } else {
        print!("{}", format_summary(&summary));
    }
}

fn format_summary(summary: &MappingSummary) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Character mappings: {}\nWord mappings:      {}\nTotal mappings:     {}\n",
        summary.character_mappings, summary.word_mappings, summary.total_mappings,
    ));
    if summary.sample.is_empty() {
        return out;
    }

    let pad_width = 8;
    out.push_str(&format!("\n  {}Roman\n", pad("Urdu", pad_width)));
    for e in &summary.sample {
        out.push_str(&format!("  {}{}\n", pad(&e.urdu, pad_width), e.roman));
    }
    out
}

fn pad(label: &str, width: usize) -> String {
    let display_width = UnicodeWidthStr::width(label);
    if display_width < width {
        format!("{}{}", label, " ".repeat(width - display_width))
    } else {
        format!("{label} ")
    }
}
