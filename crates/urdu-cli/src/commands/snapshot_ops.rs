//! JSONL snapshots of translations, for catching regressions when the
//! mapping table changes.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::io::{self, BufWriter, Write};
use std::process;

use serde::{Deserialize, Serialize};
use urdu_core::Translator;

use crate::read_lines;

/// One snapshot line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotEntry {
    pub input: String,
    pub output: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        source: serde_json::Error,
    },
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SnapshotDiff {
    pub same: usize,
    /// `(input, baseline output, current output)`
    pub changed: Vec<(String, String, String)>,
    pub new: Vec<SnapshotEntry>,
    pub removed: Vec<String>,
}

impl SnapshotDiff {
    pub fn is_clean(&self) -> bool {
        self.changed.is_empty() && self.removed.is_empty()
    }
}

pub fn run_snapshot(translator: &Translator, inputs: &[String]) -> Vec<SnapshotEntry> {
    inputs
        .iter()
        .map(|input| SnapshotEntry {
            input: input.clone(),
            output: translator.translate(input),
        })
        .collect()
}

pub fn write_snapshot(entries: &[SnapshotEntry], writer: impl Write) -> Result<(), SnapshotError> {
    let mut writer = BufWriter::new(writer);
    for entry in entries {
        writeln!(writer, "{}", serde_json::to_string(entry)?)?;
    }
    writer.flush()?;
    Ok(())
}

/// Parse JSONL, skipping blank lines. Later duplicates win.
pub fn parse_snapshot(content: &str) -> Result<HashMap<String, SnapshotEntry>, SnapshotError> {
    let mut baseline = HashMap::new();
    for (i, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let entry: SnapshotEntry =
            serde_json::from_str(line).map_err(|source| SnapshotError::Parse {
                line: i + 1,
                source,
            })?;
        baseline.insert(entry.input.clone(), entry);
    }
    Ok(baseline)
}

pub fn diff_snapshot(
    current: &[SnapshotEntry],
    baseline: &HashMap<String, SnapshotEntry>,
) -> SnapshotDiff {
    let mut diff = SnapshotDiff::default();
    for entry in current {
        match baseline.get(&entry.input) {
            Some(base) if base.output == entry.output => diff.same += 1,
            Some(base) => diff.changed.push((
                entry.input.clone(),
                base.output.clone(),
                entry.output.clone(),
            )),
            None => diff.new.push(entry.clone()),
        }
    }

    let inputs: HashSet<&str> = current.iter().map(|e| e.input.as_str()).collect();
    let mut removed: Vec<String> = baseline
        .keys()
        .filter(|k| !inputs.contains(k.as_str()))
        .cloned()
        .collect();
    removed.sort();
    diff.removed = removed;
    diff
}

pub fn snapshot_cmd(translator: &Translator, input_file: &str, output_file: &str) {
    let inputs = read_lines(input_file);
    let entries = run_snapshot(translator, &inputs);
    let file = die!(
        fs::File::create(output_file),
        "Failed to create output file {output_file}: {}"
    );
    die!(write_snapshot(&entries, file), "Failed to write: {}");
    eprintln!("Snapshot written: {} lines -> {}", entries.len(), output_file);
}

pub fn diff_snapshot_cmd(translator: &Translator, input_file: &str, baseline_file: &str) {
    let inputs = read_lines(input_file);
    let content = die!(
        fs::read_to_string(baseline_file),
        "Failed to read baseline file {baseline_file}: {}"
    );
    let baseline = die!(parse_snapshot(&content), "Failed to parse baseline JSONL: {}");
    let current = run_snapshot(translator, &inputs);
    let diff = diff_snapshot(&current, &baseline);

    for (input, was, now) in &diff.changed {
        println!("  CHANGED: {input} -> {now} (was: {was})");
    }
    for entry in &diff.new {
        println!("  NEW:     {} -> {}", entry.input, entry.output);
    }
    for input in &diff.removed {
        println!("  REMOVED: {input}");
    }

    println!();
    println!("=== Summary ===");
    println!("  Total:    {}", current.len());
    println!("  Same:     {}", diff.same);
    println!("  Changed:  {}", diff.changed.len());
    println!("  New:      {}", diff.new.len());
    println!("  Removed:  {}", diff.removed.len());

    if !diff.is_clean() {
        process::exit(1);
    }
}
