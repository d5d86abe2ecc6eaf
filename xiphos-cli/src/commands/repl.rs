use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use rustyline::DefaultEditor;

use crate::context;
use crate::output::{self, OutputFormat};

/// Results displayed per query in the interactive session.
const DISPLAY_LIMIT: usize = 5;

/// Run the interactive search session.
pub fn run(corpus: &Path, max_rows: usize, format: OutputFormat) -> Result<()> {
    let engine = context::load_engine(corpus, max_rows)?;

    let mut rl = DefaultEditor::new()?;

    println!("Xiphos REPL (type 'help' for commands, 'quit' to exit)");
    println!("Operators: AND, OR, NOT, NEAR/k, ADJ/k, field:term, \"phrases\"");

    loop {
        let line = match rl.readline("xiphos> ") {
            Ok(line) => line,
            Err(
                rustyline::error::ReadlineError::Interrupted | rustyline::error::ReadlineError::Eof,
            ) => {
                break;
            }
            Err(err) => {
                eprintln!("Error: {err}");
                break;
            }
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let _ = rl.add_history_entry(line);

        match line {
            "help" => print_help(),
            "quit" | "exit" => break,
            "stats" => output::print_stats(&engine.stats(), format),
            query => {
                let started = Instant::now();
                let results = engine.execute_query(query);
                println!("Execution time: {} ms", started.elapsed().as_millis());
                output::print_results(&engine, &results, DISPLAY_LIMIT, format);
            }
        }
    }

    println!("Goodbye.");
    Ok(())
}

fn print_help() {
    println!(
        "\
Available commands:
  <query>                      Execute a search query
  stats                        Show index statistics
  help                         Show this help
  quit                         Exit the session

Query syntax:
  quick brown                  Implicit AND
  quick AND dog                Explicit AND
  quick OR sleeps              OR
  lazy AND NOT fox             NOT
  fox NEAR/5 dog               Within 5 positions, either order
  quick ADJ/3 dog              dog follows quick within 3 positions
  title:dogs                   Field-scoped term
  \"lazy dog\"                   Quoted literal (single term)"
    );
}
