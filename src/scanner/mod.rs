// src/scanner/mod.rs
// =============================================================================
// This module contains the scanning core: everything between a raw URL
// string and an inspectable scan result.
//
// Submodules:
// - target: Validates input into http/https Target References
// - fetch:  Shared HTTP client, timeout knob, the GET itself
// - scan:   The Scanner type - async factory plus read-only accessors
// - links:  Hyperlink extraction from fetched HTML
//
// This file (mod.rs) is the module root - it re-exports the public API so
// callers write `scanner::Scanner` instead of `scanner::scan::Scanner`.
// =============================================================================

mod fetch;
mod links;
mod scan;
mod target;

pub use fetch::{current_timeout, set_timeout_secs, ConfigError, DEFAULT_TIMEOUT_SECS};
pub use links::extract_hyperlinks;
pub use scan::Scanner;
pub use target::{TargetReference, ValidationError};
