// src/config.rs
// =============================================================================
// This module resolves the parsed CLI arguments into a ScanConfig: the
// list of URLs to scan plus every option, with defaults applied.
//
// URL gathering works the same whether the URL came from the positional
// argument or from a --file list: collect the raw strings first, then
// run the same coarse check (absolute URL, http/https scheme) over each
// one, printing a warning for rejects instead of aborting the run. The
// scanner core re-validates every URL it is handed; doing it here too is
// intentional defense-in-depth, so one bad line in a file never stops
// the good ones from being scanned.
// =============================================================================

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use url::Url;

use crate::cli::Cli;

// Everything one run of webscan needs to know, resolved from the CLI
#[derive(Debug)]
pub struct ScanConfig {
    /// URLs that passed the coarse check, in input order
    pub uris: Vec<Url>,
    /// Where to save results, if anywhere
    pub output: Option<PathBuf>,
    /// Crawl depth - accepted but currently unused
    pub depth: usize,
    /// Include patterns - accepted but currently unused
    pub include: Vec<String>,
    /// Exclude patterns - accepted but currently unused
    pub exclude: Vec<String>,
    pub verbose: bool,
    /// Request timeout in seconds, if the user set one
    pub timeout: Option<i64>,
    pub json: bool,
}

impl ScanConfig {
    // Builds a ScanConfig from parsed CLI arguments
    //
    // Reads the --file URL list if one was given (one URL per line,
    // blank lines skipped). Only failing to read that file is an error;
    // invalid URLs are reported and skipped.
    pub fn resolve(cli: &Cli) -> Result<ScanConfig> {
        let mut raw_urls = Vec::new();

        if let Some(url) = &cli.url {
            if !url.trim().is_empty() {
                raw_urls.push(url.trim().to_string());
            }
        }

        if let Some(path) = &cli.file {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("failed to read URL list {}", path.display()))?;
            for line in contents.lines() {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    raw_urls.push(trimmed.to_string());
                }
            }
        }

        // Coarse check: absolute http/https URLs only. The scanner core
        // repeats this check on its own terms before fetching.
        let mut uris = Vec::new();
        for raw in raw_urls {
            match Url::parse(&raw) {
                Ok(url) if url.scheme() == "http" || url.scheme() == "https" => uris.push(url),
                _ => eprintln!("Invalid URL: {}", raw),
            }
        }

        Ok(ScanConfig {
            uris,
            output: cli.output.clone(),
            depth: cli.depth,
            include: cli.include.clone(),
            exclude: cli.exclude.clone(),
            verbose: cli.verbose,
            timeout: cli.timeout,
            json: cli.json,
        })
    }

    // Dumps the resolved configuration, one field per line
    pub fn print(&self) {
        println!("ScanConfig:");
        println!(
            "  Output: {}",
            self.output
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(none)".to_string())
        );
        println!("  Depth: {}", self.depth);
        println!("  Include: [{}]", self.include.join(", "));
        println!("  Exclude: [{}]", self.exclude.join(", "));
        println!("  Verbose: {}", self.verbose);
        println!(
            "  Timeout: {}",
            self.timeout
                .map(|t| t.to_string())
                .unwrap_or_else(|| "(default)".to_string())
        );
        println!("  Uris:");
        for uri in &self.uris {
            println!("    {}", uri);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_resolve_keeps_valid_url_from_argument() {
        let cli = Cli::parse_from(["webscan", "https://example.com"]);
        let config = ScanConfig::resolve(&cli).unwrap();
        assert_eq!(config.uris.len(), 1);
        assert_eq!(config.uris[0].as_str(), "https://example.com/");
    }

    #[test]
    fn test_resolve_skips_invalid_url() {
        // ftp is rejected by the scheme check, not a parse failure
        let cli = Cli::parse_from(["webscan", "ftp://example.com"]);
        let config = ScanConfig::resolve(&cli).unwrap();
        assert!(config.uris.is_empty());
    }

    #[test]
    fn test_resolve_reads_urls_from_file() {
        let path = std::env::temp_dir().join("webscan_test_urls.txt");
        fs::write(
            &path,
            "https://example.com/a\n\n  https://example.com/b  \nnot a url\n",
        )
        .unwrap();

        let cli = Cli::parse_from(["webscan", "--file", path.to_str().unwrap()]);
        let config = ScanConfig::resolve(&cli).unwrap();
        fs::remove_file(&path).ok();

        // Blank lines skipped, whitespace trimmed, junk line dropped
        assert_eq!(config.uris.len(), 2);
        assert_eq!(config.uris[0].path(), "/a");
        assert_eq!(config.uris[1].path(), "/b");
    }

    #[test]
    fn test_resolve_fails_on_missing_file() {
        let cli = Cli::parse_from(["webscan", "--file", "/no/such/file/anywhere.txt"]);
        assert!(ScanConfig::resolve(&cli).is_err());
    }
}
