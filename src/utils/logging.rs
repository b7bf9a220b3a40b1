// file: src/utils/logging.rs
// description: stderr tracing setup and styled status lines for the console summary
// reference: https://docs.rs/tracing-subscriber

use colored::*;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Logs go to stderr so the printed results preview stays clean on stdout.
/// `RUST_LOG` wins over `--verbose` when set.
pub fn init_logger(colored_output: bool, verbose: bool) {
    let directive = if verbose {
        "weather_analyzer=debug,warn"
    } else {
        "weather_analyzer=info,warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .with_file(verbose)
        .with_line_number(verbose)
        .with_ansi(colored_output)
        .compact();

    // a second init (e.g. from an embedding binary) keeps the first subscriber
    let _ = tracing_subscriber::registry().with(filter).with(layer).try_init();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Done,
    Failed,
    Caution,
    Note,
}

impl Status {
    fn marker(self) -> &'static str {
        match self {
            Status::Done => "✓",
            Status::Failed => "✗",
            Status::Caution => "⚠",
            Status::Note => "ℹ",
        }
    }

    pub fn line(self, msg: &str) -> String {
        let marker = self.marker();
        match self {
            Status::Done => format!("{} {}", marker.green().bold(), msg.green()),
            Status::Failed => format!("{} {}", marker.red().bold(), msg.red()),
            Status::Caution => format!("{} {}", marker.yellow().bold(), msg.yellow()),
            Status::Note => format!("{} {}", marker.blue().bold(), msg),
        }
    }
}

/// Section title underlined to its own width
pub fn heading(title: &str) -> String {
    format!("{}\n{}", title.cyan().bold(), "-".repeat(title.chars().count()))
}
