// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things). There are no
// subcommands - webscan does one thing, so every knob hangs off the root
// command.
// =============================================================================

use clap::Parser;
use std::path::PathBuf;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "webscan",
    version = "0.1.0",
    about = "Scan a web page and report its status and hyperlinks",
    long_about = "webscan fetches a single web page over HTTP/HTTPS, reports whether the \
                  fetch succeeded (HTTP errors and unreachable hosts are findings, not \
                  crashes), and lists every hyperlink found in the returned markup."
)]
pub struct Cli {
    /// The URL to scan
    ///
    /// This is a positional argument; it can be omitted when --file is given
    pub url: Option<String>,

    /// A text file containing a list of URLs (one per line)
    #[arg(long, short)]
    pub file: Option<PathBuf>,

    /// Path to save scan results
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// How deep to follow links (default: 1)
    ///
    /// Accepted for forward compatibility; scanning is currently limited
    /// to the given page(s) regardless of this value
    #[arg(long, short, default_value_t = 1)]
    pub depth: usize,

    /// Only scan URLs matching this pattern (may be repeated)
    ///
    /// Accepted for forward compatibility; currently has no effect
    #[arg(long, short)]
    pub include: Vec<String>,

    /// Exclude URLs matching this pattern (may be repeated)
    ///
    /// Accepted for forward compatibility; currently has no effect
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Enable verbose output
    #[arg(long, short)]
    pub verbose: bool,

    /// Timeout in seconds for HTTP requests (default: 100)
    #[arg(long, short)]
    pub timeout: Option<i64>,

    /// Output results in JSON format instead of text
    #[arg(long)]
    pub json: bool,
}
