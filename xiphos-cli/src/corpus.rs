//! CSV corpus ingestion.

use std::fs::File;
use std::path::Path;

use xiphos::{DocumentSource, Result, XiphosError};

/// A document source over a CSV corpus file.
///
/// Reads the header row to locate the `title` and `content` columns; other
/// columns are ignored. Rows where both are empty are skipped, and reading
/// stops after `max_rows` rows regardless of how many were kept.
pub struct CsvCorpus {
    records: csv::StringRecordsIntoIter<File>,
    title_idx: Option<usize>,
    content_idx: Option<usize>,
    max_rows: usize,
    rows_read: usize,
}

impl std::fmt::Debug for CsvCorpus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CsvCorpus")
            .field("title_idx", &self.title_idx)
            .field("content_idx", &self.content_idx)
            .field("max_rows", &self.max_rows)
            .field("rows_read", &self.rows_read)
            .finish()
    }
}

impl CsvCorpus {
    /// Open a corpus file and resolve its columns.
    pub fn open(path: &Path, max_rows: usize) -> Result<Self> {
        let mut reader = csv::Reader::from_path(path)
            .map_err(|e| XiphosError::source(format!("{}: {e}", path.display())))?;
        let headers = reader
            .headers()
            .map_err(|e| XiphosError::source(e.to_string()))?
            .clone();

        let title_idx = headers.iter().position(|h| h.trim() == "title");
        let content_idx = headers.iter().position(|h| h.trim() == "content");

        if title_idx.is_none() && content_idx.is_none() {
            return Err(XiphosError::invalid_argument(format!(
                "{}: corpus has neither a title nor a content column",
                path.display()
            )));
        }

        Ok(CsvCorpus {
            records: reader.into_records(),
            title_idx,
            content_idx,
            max_rows,
            rows_read: 0,
        })
    }

    fn column(record: &csv::StringRecord, index: Option<usize>) -> String {
        index
            .and_then(|i| record.get(i))
            .unwrap_or("")
            .trim()
            .to_string()
    }
}

impl DocumentSource for CsvCorpus {
    fn next_document(&mut self) -> Result<Option<Vec<(String, String)>>> {
        while self.rows_read < self.max_rows {
            let Some(record) = self.records.next() else {
                return Ok(None);
            };
            self.rows_read += 1;

            let record = record.map_err(|e| XiphosError::source(e.to_string()))?;
            let title = Self::column(&record, self.title_idx);
            let content = Self::column(&record, self.content_idx);

            if title.is_empty() && content.is_empty() {
                continue;
            }

            return Ok(Some(vec![
                ("title".to_string(), title),
                ("content".to_string(), content),
            ]));
        }

        Ok(None)
    }
}
