use clap::{Parser, Subcommand};

use urdu_cli::commands::{config_ops, snapshot_ops, translate_ops};
use urdu_cli::{init_logging, load_translator, read_input};

#[derive(Parser)]
#[command(name = "urdutool", about = "Urdu to Roman Urdu transliteration tool")]
struct Cli {
    /// Custom mapping table (TOML with a [mappings] section)
    #[arg(long, global = true)]
    mapping: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transliterate Urdu text to Roman Urdu
    Translate {
        /// Text to translate (reads stdin when omitted)
        text: Option<String>,
        /// Print word and character counts to stderr
        #[arg(long)]
        stats: bool,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the normalized form of the text
    Normalize {
        /// Text to normalize (reads stdin when omitted)
        text: Option<String>,
    },
    /// Show how each token and letter was transliterated
    Explain {
        /// Text to explain (reads stdin when omitted)
        text: Option<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Transliterate the built-in sample sentences
    Samples {
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the built-in mapping table as TOML
    MappingExport,
    /// Validate a custom mapping TOML file
    MappingValidate {
        /// TOML file to validate
        file: String,
    },
    /// Summarize the active mapping table
    MappingShow {
        /// Number of sample entries to list
        #[arg(short, long, default_value = "10")]
        limit: usize,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Translate each line of a file and record the results to JSONL
    Snapshot {
        /// Input file (one text per line)
        input_file: String,
        /// Output JSONL file
        output_file: String,
    },
    /// Compare current output against a saved snapshot
    DiffSnapshot {
        /// Input file (one text per line)
        input_file: String,
        /// Baseline JSONL snapshot file
        baseline_file: String,
    },
}

fn main() {
    init_logging();
    let cli = Cli::parse();
    let translator = load_translator(cli.mapping.as_deref());

    match cli.command {
        Command::Translate { text, stats, json } => {
            let text = read_input(text);
            translate_ops::translate_cmd(&translator, &text, stats, json);
        }
        Command::Normalize { text } => translate_ops::normalize_cmd(&read_input(text)),
        Command::Explain { text, json } => {
            translate_ops::explain_cmd(&translator, &read_input(text), json)
        }
        Command::Samples { json } => translate_ops::samples_cmd(&translator, json),
        Command::MappingExport => config_ops::mapping_export(),
        Command::MappingValidate { file } => config_ops::mapping_validate(&file),
        Command::MappingShow { limit, json } => config_ops::mapping_show(&translator, limit, json),
        Command::Snapshot {
            input_file,
            output_file,
        } => snapshot_ops::snapshot_cmd(&translator, &input_file, &output_file),
        Command::DiffSnapshot {
            input_file,
            baseline_file,
        } => snapshot_ops::diff_snapshot_cmd(&translator, &input_file, &baseline_file),
    }
}
