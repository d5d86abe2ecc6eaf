use clap::ValueEnum;
use serde_json::json;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use xiphos::{DocId, IndexStats, SearchEngine};

/// Longest content preview shown in table output.
const PREVIEW_CHARS: usize = 200;

/// Output format for CLI results.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table.
    Table,
    /// JSON output.
    Json,
}

#[derive(Tabled)]
struct ResultRow {
    id: DocId,
    title: String,
    content: String,
}

/// Print search results, at most `limit` documents.
pub fn print_results(engine: &SearchEngine, results: &[DocId], limit: usize, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let docs: Vec<serde_json::Value> = results
                .iter()
                .take(limit)
                .map(|&id| {
                    json!({
                        "id": id,
                        "title": engine.document_title(id),
                        "content": engine.document_content(id),
                    })
                })
                .collect();
            let out = json!({ "total": results.len(), "documents": docs });
            println!("{}", serde_json::to_string_pretty(&out).unwrap());
        }
        OutputFormat::Table => {
            if results.is_empty() {
                println!("Nothing found.");
                return;
            }

            println!("Found docs: {}", results.len());
            let rows: Vec<ResultRow> = results
                .iter()
                .take(limit)
                .map(|&id| ResultRow {
                    id,
                    title: engine.document_title(id),
                    content: preview(&engine.document_content(id)),
                })
                .collect();

            let table = Table::new(&rows).with(Style::rounded()).to_string();
            println!("{table}");
        }
    }
}

/// Print index statistics.
pub fn print_stats(stats: &IndexStats, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(stats).unwrap());
        }
        OutputFormat::Table => {
            println!("Documents: {}", stats.doc_count);
            println!("Terms:     {}", stats.term_count);
            println!("Fields:    {}", stats.field_count);
        }
    }
}

/// Truncate content for table display.
fn preview(content: &str) -> String {
    if content.chars().count() <= PREVIEW_CHARS {
        return content.to_string();
    }
    let truncated: String = content.chars().take(PREVIEW_CHARS).collect();
    format!("{truncated}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_truncates_long_content() {
        let short = "brief";
        assert_eq!(preview(short), "brief");

        let long = "x".repeat(300);
        let shown = preview(&long);
        assert!(shown.ends_with("..."));
        assert_eq!(shown.chars().count(), PREVIEW_CHARS + 3);
    }
}
