// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Resolve them into a ScanConfig (URL argument and/or --file list)
// 3. Apply the request timeout, if one was given
// 4. Scan each URL in turn and print what was found
// 5. Exit with proper code (0 = all pages OK, 1 = failures found, 2 = error)
//
// One deliberate behavior to notice: an unreachable host or a 404 page is
// a *finding*, printed and reflected in the exit code - never a crash.
// Only bad input (no valid URLs, unreadable file, invalid timeout) aborts
// the run with exit code 2.
// =============================================================================

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use webscan::cli::Cli;
use webscan::config::ScanConfig;
use webscan::scanner::{self, Scanner};

// The #[tokio::main] attribute transforms our async main into a real main
// function: it creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // An unexpected error occurred - print it and exit with code 2
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// What one scan produced, in printable/serializable form
#[derive(Debug, Serialize)]
struct ScanReport {
    url: String,
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    links: Vec<String>,
}

impl ScanReport {
    fn from_scanner(scanner: &Scanner) -> ScanReport {
        ScanReport {
            url: scanner.target().to_string(),
            success: scanner.is_success_status(),
            status: scanner.status_code().map(|s| s.as_u16()),
            message: scanner.error_message(),
            links: scanner.extract_hyperlinks(),
        }
    }
}

// The main application logic
// Returns:
//   Ok(0) = every page scanned successfully
//   Ok(1) = at least one page failed (HTTP error or unreachable)
//   Ok(2) = nothing to do (no valid URLs)
async fn run() -> Result<i32> {
    let cli = Cli::parse();
    let config = ScanConfig::resolve(&cli)?;

    // The timeout is process-wide shared state, so it must be set before
    // the first scan. An out-of-range value is a usage error.
    if let Some(timeout) = config.timeout {
        scanner::set_timeout_secs(timeout)?;
    }

    if config.verbose {
        config.print();
    }

    if config.uris.is_empty() {
        eprintln!("No valid URLs to scan.");
        return Ok(2);
    }

    // Scan each URL in turn. Strictly sequential: one page, one fetch,
    // one report at a time.
    let mut reports = Vec::new();
    for uri in &config.uris {
        if config.verbose {
            println!("Scanning URL: {}", uri);
        }

        // The config already filtered out anything the scanner would
        // reject, so a validation error here is unexpected
        let scanner = Scanner::create_from_url(uri.clone()).await?;
        reports.push(ScanReport::from_scanner(&scanner));
    }

    let rendered = render_reports(&reports, config.json)?;
    println!("{}", rendered);

    if let Some(path) = &config.output {
        std::fs::write(path, &rendered)?;
        if config.verbose {
            println!("Results saved to {}", path.display());
        }
    }

    let failed = reports.iter().filter(|r| !r.success).count();
    if failed > 0 {
        Ok(1) // Exit code 1 = failing pages found
    } else {
        Ok(0) // Exit code 0 = all good
    }
}

// Renders all reports either as human-readable text or as JSON
fn render_reports(reports: &[ScanReport], json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(reports)?)
    } else {
        Ok(render_text(reports))
    }
}

// Human-readable rendering: one block per scanned page, then a summary
fn render_text(reports: &[ScanReport]) -> String {
    let mut out = String::new();

    for report in reports {
        out.push_str(&format!("Scanning completed for: {}\n", report.url));

        if report.success {
            let status = report.status.map(|s| s.to_string()).unwrap_or_default();
            out.push_str(&format!("  Status: {} OK\n", status));
        } else {
            let message = report.message.as_deref().unwrap_or("unknown failure");
            out.push_str(&format!("  Unreachable or failing: {}\n", message));
        }

        if report.links.is_empty() {
            out.push_str("  No links found.\n");
        } else {
            out.push_str("  Links found:\n");
            for link in &report.links {
                out.push_str(&format!("    {}\n", link));
            }
        }
    }

    let ok_count = reports.iter().filter(|r| r.success).count();
    out.push_str(&format!(
        "Summary: {} OK, {} failed, {} total",
        ok_count,
        reports.len() - ok_count,
        reports.len()
    ));

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_reports() -> Vec<ScanReport> {
        vec![
            ScanReport {
                url: "https://example.com/".to_string(),
                success: true,
                status: Some(200),
                message: None,
                links: vec!["/a".to_string(), "/b".to_string()],
            },
            ScanReport {
                url: "https://gone.example.com/".to_string(),
                success: false,
                status: Some(404),
                message: Some("HTTP 404 Not Found".to_string()),
                links: vec![],
            },
        ]
    }

    #[test]
    fn test_text_rendering_lists_links_and_summary() {
        let text = render_text(&sample_reports());
        assert!(text.contains("Scanning completed for: https://example.com/"));
        assert!(text.contains("    /a"));
        assert!(text.contains("    /b"));
        assert!(text.contains("Unreachable or failing: HTTP 404 Not Found"));
        assert!(text.contains("Summary: 1 OK, 1 failed, 2 total"));
    }

    #[test]
    fn test_json_rendering_is_valid_json() {
        let json = render_reports(&sample_reports(), true).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["success"], true);
        assert_eq!(parsed[1]["status"], 404);
        // message is omitted for successful scans, not serialized as null
        assert!(parsed[0].get("message").is_none());
    }
}
