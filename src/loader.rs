//! Token file loading
//!
//! Reads a token document from disk into the nested structure the tab
//! builder consumes. `.toml` files parse as TOML, anything else as JSON.
//! Both parsers keep map entries in declaration order.

use anyhow::{Context, Result};
use serde_json::Value;
use std::path::Path;

/// Source format of a token document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenFormat {
    Json,
    Toml,
}

impl TokenFormat {
    /// Pick the format from the file extension
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Json,
        }
    }
}

/// Parse token document text
pub fn parse_tokens(contents: &str, format: TokenFormat) -> Result<Value> {
    match format {
        TokenFormat::Json => serde_json::from_str(contents).context("Invalid JSON token document"),
        TokenFormat::Toml => toml::from_str(contents).context("Invalid TOML token document"),
    }
}

/// Read and parse a token file
pub fn load_token_file(path: &Path) -> Result<Value> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read token file {}", path.display()))?;
    let format = TokenFormat::from_path(path);

    let value = parse_tokens(&contents, format)
        .with_context(|| format!("Failed to load {}", path.display()))?;
    tracing::debug!(path = %path.display(), ?format, "Loaded token file");
    Ok(value)
}
