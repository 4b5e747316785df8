// src/scanner/target.rs
// =============================================================================
// This module validates user-supplied URLs into Target References.
//
// A Target Reference is an absolute URL with an http or https scheme.
// Nothing in the scanner touches the network until validation has passed,
// so every bad input is rejected here, synchronously, with a typed error.
//
// We use the `url` crate which:
// - Parses strings into a structured Url (RFC 3986)
// - Rejects relative references when no base URL is given
// - Normalizes the scheme to lowercase during parsing
//
// Rust concepts:
// - thiserror: Derive macro that generates Display/Error impls for our enum
// - Newtype pattern: TargetReference wraps Url to enforce the invariant
// =============================================================================

use std::fmt;
use thiserror::Error;
use url::Url;

// The two schemes a Target Reference may carry
const ALLOWED_SCHEMES: [&str; 2] = ["http", "https"];

// Everything that can go wrong turning caller input into a Target Reference
//
// These are the only errors the scanner ever returns to a caller: they all
// represent bad input discoverable before any I/O happens.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The input string was empty or contained only whitespace
    #[error("no URL given (empty or whitespace-only input)")]
    EmptyInput,

    /// The input could not be parsed as an absolute URL
    #[error("malformed URL '{input}': {source}")]
    MalformedUri {
        input: String,
        source: url::ParseError,
    },

    /// The URL parsed fine but its scheme is not http or https
    #[error("unsupported scheme '{0}' (only http and https are allowed)")]
    UnsupportedScheme(String),
}

// A validated absolute http/https URL - the unit of work for one scan
//
// Immutable once constructed: the only way to get one is through the two
// validating constructors below, so holding a TargetReference means the
// scheme check has already passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetReference(Url);

impl TargetReference {
    // Validates a raw string into a Target Reference
    //
    // Examples:
    //   "https://example.com"  -> Ok
    //   ""                     -> Err(EmptyInput)
    //   "not a url"            -> Err(MalformedUri)
    //   "ftp://example.com"    -> Err(UnsupportedScheme)
    //
    // Pure and synchronous - no network access happens here.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyInput);
        }

        // Url::parse fails on relative references (no base to resolve
        // against), which is exactly what we want: only absolute URLs
        // make sense as scan targets.
        let url = Url::parse(trimmed).map_err(|source| ValidationError::MalformedUri {
            input: trimmed.to_string(),
            source,
        })?;

        Self::from_url(url)
    }

    // Validates an already-parsed Url into a Target Reference
    //
    // The scheme comparison is case-insensitive. The url crate lowercases
    // schemes during parsing, but a Url handed to us directly gets the
    // same treatment rather than trusting the caller's casing.
    pub fn from_url(url: Url) -> Result<Self, ValidationError> {
        let scheme = url.scheme();
        if ALLOWED_SCHEMES
            .iter()
            .any(|allowed| scheme.eq_ignore_ascii_case(allowed))
        {
            Ok(TargetReference(url))
        } else {
            Err(ValidationError::UnsupportedScheme(scheme.to_string()))
        }
    }

    /// The underlying parsed URL
    pub fn url(&self) -> &Url {
        &self.0
    }

    /// The URL as a string slice
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for TargetReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
