// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Build the shared HTTP fetcher
// 3. Either run one query (one-shot mode) or enter the interactive loop
// 4. Exit with proper code (0 = normal termination, 2 = startup error)
//
// The interactive loop is the default: it prompts for a search term,
// normalizes it (trim + lowercase), and runs it against the configured
// seed list. Typing 'sair' (any casing) quits without any fetch; EOF on
// stdin quits too.
//
// Rust concepts used:
// - async/await: reqwest's API is async, so the crawl is too (even
//   though everything runs strictly sequentially)
// - Result<T, E>: For error handling (T = success type, E = error type)
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;           // src/cli.rs - command-line parsing
mod crawl;         // src/crawl/ - crawl sessions and the seed loop
mod extract;       // src/extract/ - link and title extraction
mod fetch;         // src/fetch.rs - HTTP fetching
mod matcher;       // src/matcher.rs - query word matching

use clap::Parser;  // Parser trait enables the parse() method
use cli::Cli;
use crawl::MatchRecord;
use fetch::HttpFetcher;
use std::io::{self, BufRead, Write};

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::Result;

// The sentinel the interactive loop treats as "quit". The input is
// lowercased first, so any casing of it works.
const EXIT_COMMAND: &str = "sair";

// The #[tokio::main] attribute transforms our async main into a real main function
// It creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = normal termination
//   Err = unexpected error (bad startup, broken stdin/stdout)
async fn run() -> Result<i32> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();

    // One fetcher (and one connection pool) for the whole run
    let fetcher = HttpFetcher::new()?;

    // One-shot mode: a query was passed on the command line
    if let Some(raw) = cli.query {
        let query = normalize_query(&raw);
        if query != EXIT_COMMAND {
            run_once(&fetcher, &query, cli.follow, cli.json).await?;
        }
        return Ok(0);
    }

    // Interactive mode: prompt until 'sair' or EOF
    let stdin = io::stdin();
    loop {
        print!("🔎 Enter a search term (or '{}' to quit): ", EXIT_COMMAND);
        io::stdout().flush()?;

        let mut line = String::new();
        // read_line returns the number of bytes read; 0 means EOF
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let query = normalize_query(&line);
        if query == EXIT_COMMAND {
            break;
        }

        // Everything else is a query - even an empty line, which matches
        // every titled link (an empty query has no words to miss)
        run_once(&fetcher, &query, cli.follow, cli.json).await?;
    }

    Ok(0)
}

// Runs one query across all seeds and prints the result summary
//
// The per-match lines (title, then link) are printed by the crawl as
// they happen; this function only adds the trailing summary or, in
// --json mode, the machine-readable dump of everything collected.
async fn run_once(fetcher: &HttpFetcher, query: &str, follow: bool, json: bool) -> Result<()> {
    let matches = crawl::run_query(fetcher, query, follow).await;
    print_results(&matches, json)?;
    Ok(())
}

// Prints the collected matches either as a summary line or as JSON
fn print_results(matches: &[MatchRecord], json: bool) -> Result<()> {
    if json {
        // Serialize results to JSON and print
        let json_output = serde_json::to_string_pretty(matches)?;
        println!("{}", json_output);
    } else {
        println!();
        println!("📊 {} match(es) found", matches.len());
        println!();
    }
    Ok(())
}

// Normalizes raw user input into a query: trim surrounding whitespace,
// then lowercase. Matching against hrefs is case-sensitive, so this is
// the only case normalization the query ever gets.
fn normalize_query(input: &str) -> String {
    input.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_lowercases() {
        assert_eq!(normalize_query("  Copa DO Mundo \n"), "copa do mundo");
    }

    #[test]
    fn test_exit_command_recognized_in_any_casing() {
        // The loop compares AFTER normalization, so 'SAIR' quits too
        assert_eq!(normalize_query("SAIR\n"), EXIT_COMMAND);
        assert_eq!(normalize_query(" Sair "), EXIT_COMMAND);
    }

    #[test]
    fn test_empty_input_normalizes_to_empty_query() {
        assert_eq!(normalize_query("   \n"), "");
    }
}
