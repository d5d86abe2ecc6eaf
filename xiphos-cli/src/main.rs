mod cli;
mod commands;
mod context;
mod corpus;
mod output;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::commands::{repl, search};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let format = cli.format;
    let corpus = cli.corpus;
    let max_rows = cli.max_rows;

    match cli.command {
        Command::Search(cmd) => search::run(cmd, &corpus, max_rows, format),
        Command::Repl => repl::run(&corpus, max_rows, format),
        Command::Stats => {
            let engine = context::load_engine(&corpus, max_rows)?;
            output::print_stats(&engine.stats(), format);
            Ok(())
        }
    }
}
