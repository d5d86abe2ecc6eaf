use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

/// Xiphos - boolean full-text search CLI
#[derive(Parser)]
#[command(name = "xiphos", version, about)]
pub struct Cli {
    /// Path to the corpus CSV file (columns: id, title, content).
    #[arg(long, env = "XIPHOS_CORPUS", default_value = "corpus.csv")]
    pub corpus: PathBuf,

    /// Maximum number of corpus rows to read.
    #[arg(long, default_value_t = 10_000)]
    pub max_rows: usize,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Execute a single search query against the corpus.
    Search(SearchCommand),
    /// Start an interactive search session.
    Repl,
    /// Load the corpus and show index statistics.
    Stats,
}

#[derive(Parser)]
pub struct SearchCommand {
    /// Search query (AND, OR, NOT, NEAR/k, ADJ/k, field:term, "phrases").
    pub query: String,

    /// Maximum number of documents to display.
    #[arg(long, default_value_t = 5)]
    pub limit: usize,
}
