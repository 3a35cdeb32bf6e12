use serde::Serialize;

use urdu_core::samples::SAMPLES;
use urdu_core::translator::{explain, format_text};
use urdu_core::{normalize, TranslationStats, Translator};

#[derive(Debug, Serialize)]
struct TranslateOutput<'a> {
    input: &'a str,
    output: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    stats: Option<TranslationStats>,
}

pub fn translate_cmd(translator: &Translator, text: &str, stats: bool, json: bool) {
    if text.trim().is_empty() {
        eprintln!("Warning: nothing to translate, input is blank");
        return;
    }

    let output = translator.translate(text);
    let measured = stats.then(|| TranslationStats::measure(text, &output));

    if json {
        let record = TranslateOutput {
            input: text.trim(),
            output,
            stats: measured,
        };
        let line = die!(serde_json::to_string_pretty(&record), "Error: {}");
        println!("{line}");
        return;
    }

    println!("{output}");
    if let Some(s) = measured {
        eprintln!(
            "input: {} words, {} chars | output: {} words, {} chars",
            s.input_words, s.input_chars, s.output_words, s.output_chars
        );
    }
}

pub fn normalize_cmd(text: &str) {
    println!("{}", normalize(text));
}

pub fn explain_cmd(translator: &Translator, text: &str, json: bool) {
    let result = explain(translator, text);
    if json {
        let out = die!(serde_json::to_string_pretty(&result), "Error: {}");
        println!("{out}");
    } else {
        print!("{}", format_text(&result));
    }
}

#[derive(Debug, Serialize)]
struct SampleOutput {
    label: &'static str,
    input: &'static str,
    output: String,
}

pub fn samples_cmd(translator: &Translator, json: bool) {
    let results: Vec<SampleOutput> = SAMPLES
        .iter()
        .map(|&(label, input)| SampleOutput {
            label,
            input,
            output: translator.translate(input),
        })
        .collect();

    if json {
        let out = die!(serde_json::to_string_pretty(&results), "Error: {}");
        println!("{out}");
        return;
    }

    for r in &results {
        println!("{}:", r.label);
        println!("  {}", r.input);
        println!("  -> {}", r.output);
    }
}
