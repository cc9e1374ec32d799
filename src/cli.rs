// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// newshound has no subcommands: run it bare for the interactive prompt,
// or pass a query to run a single search and exit.
// =============================================================================

use clap::Parser;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "newshound",
    version = "0.1.0",
    about = "Crawls news sites and reports links matching a search query",
    long_about = "newshound walks a fixed set of news-site seed pages, extracts every \
                  anchor link, and reports the ones whose URL contains all the words of \
                  your search query, together with a headline resolved from the page. \
                  Run it without arguments for an interactive prompt (type 'sair' to quit)."
)]
pub struct Cli {
    /// Search query to run once, skipping the interactive prompt
    ///
    /// This is a positional argument (optional)
    /// Example: newshound "copa do mundo"
    pub query: Option<String>,

    /// Output the collected matches as JSON after the crawl
    ///
    /// This is an optional flag: --json
    /// #[arg(long)] creates a flag from the field name
    #[arg(long)]
    pub json: bool,

    /// Follow discovered links into additional fetches (multi-hop crawl)
    ///
    /// By default each seed's page is scanned but outbound links are
    /// only recorded, never fetched. With --follow the crawl descends
    /// depth-first into discovered links, still capped at 100 URLs
    /// per seed.
    #[arg(long)]
    pub follow: bool,
}
