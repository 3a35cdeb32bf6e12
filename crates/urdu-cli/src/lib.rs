use std::fs;
use std::io::{self, Read};
use std::path::Path;

use tracing::debug;
use tracing_subscriber::EnvFilter;
use urdu_core::{MappingTable, Translator};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub mod commands;

/// Log to stderr, filtered by `RUST_LOG` (default `warn`).
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
}

/// Build the translator once: the custom table at `mapping`, or the built-in one.
pub fn load_translator(mapping: Option<&str>) -> Translator {
    match mapping {
        Some(path) => {
            let table = die!(
                MappingTable::open(Path::new(path)),
                "Error loading mapping {path}: {}"
            );
            debug!(path, entries = table.len(), "using custom mapping table");
            Translator::new(table)
        }
        None => Translator::default(),
    }
}

/// The positional text argument, or all of stdin when it is absent.
pub fn read_input(text: Option<String>) -> String {
    match text {
        Some(t) => t,
        None => {
            let mut buf = String::new();
            die!(io::stdin().read_to_string(&mut buf), "Error reading stdin: {}");
            buf
        }
    }
}

/// Non-blank lines of a text file, trimmed.
pub fn read_lines(path: &str) -> Vec<String> {
    let content = die!(fs::read_to_string(path), "Error reading {path}: {}");
    content
        .lines()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}
