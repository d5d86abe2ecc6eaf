use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use crate::cli::SearchCommand;
use crate::context;
use crate::output::{self, OutputFormat};

/// Run a one-shot search against the corpus.
pub fn run(cmd: SearchCommand, corpus: &Path, max_rows: usize, format: OutputFormat) -> Result<()> {
    let engine = context::load_engine(corpus, max_rows)?;

    let started = Instant::now();
    let results = engine.execute_query(&cmd.query);
    eprintln!("Execution time: {} ms", started.elapsed().as_millis());

    output::print_results(&engine, &results, cmd.limit, format);
    Ok(())
}
