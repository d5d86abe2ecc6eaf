use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use xiphos::SearchEngine;

use crate::corpus::CsvCorpus;

/// Progress is reported every this many indexed documents.
const PROGRESS_EVERY: u64 = 1000;

/// Load the corpus into a fresh engine, reporting indexing progress.
pub fn load_engine(corpus: &Path, max_rows: usize) -> Result<SearchEngine> {
    let mut source = CsvCorpus::open(corpus, max_rows)
        .with_context(|| format!("Failed to open corpus {}", corpus.display()))?;

    let engine = SearchEngine::new();
    let started = Instant::now();
    let count = engine
        .ingest_with_progress(&mut source, |count| {
            if count % PROGRESS_EVERY == 0 {
                eprintln!("Indexed {count} docs");
            }
        })
        .context("Failed to ingest corpus")?;
    eprintln!(
        "Indexed {count} documents in {} ms",
        started.elapsed().as_millis()
    );

    Ok(engine)
}
