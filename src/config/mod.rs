//! Configuration for the token browser
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/swatchbook/config.toml)
//! 3. Built-in defaults (lowest priority)

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::docblock::{DocBlockOptions, ViewType};
use crate::paginate::PageSize;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod display;
mod observability;
mod serialization;


// ─────────────────────────────────────────────────────────────────────────────
// Re-exports (maintain public API)
// ─────────────────────────────────────────────────────────────────────────────

pub use display::{DisplayConfig, FileDisplay};
pub use observability::{FileLogging, LogRotation, LoggingConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Cards per page in card view
    pub page_size: PageSize,

    /// Default layout: table or card
    pub view: ViewType,

    /// Doc block display defaults
    pub display: DisplayConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: PageSize::default(),
            view: ViewType::Table,
            display: DisplayConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    /// Signed so that a negative size is reported, not a parse error
    pub page_size: Option<i64>,
    pub view: Option<String>,

    /// Optional [display] section
    pub display: Option<FileDisplay>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/swatchbook/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("swatchbook").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        // Don't overwrite existing config
        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Config is optional
            }
        }

        // Write config (ignore errors - config is optional)
        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Load a config file
    ///
    /// A missing file means defaults. A file that exists but does not parse
    /// is an error: a broken config should fail loudly rather than silently
    /// fall back while the user debugs the wrong thing.
    fn load_file_config(path: &Path) -> Result<FileConfig> {
        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config file {}", path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileConfig::default()),
            Err(e) => Err(e).with_context(|| format!("Cannot read config file {}", path.display())),
        }
    }

    /// Load configuration: env vars > file > defaults
    pub fn from_env() -> Result<Self> {
        let file = match Self::config_path() {
            Some(path) => Self::load_file_config(&path)?,
            None => FileConfig::default(),
        };
        Self::from_sources(file, |key| std::env::var(key).ok())
    }

    /// Load configuration from an explicit file path (env still applies)
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = Self::load_file_config(path)?;
        Self::from_sources(file, |key| std::env::var(key).ok())
    }

    /// Merge file values with an environment lookup
    pub(crate) fn from_sources(
        file: FileConfig,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        // Page size: env > file > default. Non-positive sizes are rejected.
        let page_size = match env("SWATCHBOOK_PAGE_SIZE") {
            Some(raw) => raw
                .parse::<PageSize>()
                .context("Invalid SWATCHBOOK_PAGE_SIZE")?,
            None => match file.page_size {
                Some(size) => PageSize::try_from(size).context("Invalid page_size in config")?,
                None => PageSize::default(),
            },
        };

        // View: env > file > default ("table"). Unknown names are rejected.
        let view = match env("SWATCHBOOK_VIEW") {
            Some(raw) => raw.parse().context("Invalid SWATCHBOOK_VIEW")?,
            None => match file.view {
                Some(raw) => raw.parse().context("Invalid view in config")?,
                None => ViewType::default(),
            },
        };

        let display = DisplayConfig::from_file(file.display);
        let logging = LoggingConfig::from_file(file.logging);

        Ok(Self {
            page_size,
            view,
            display,
            logging,
        })
    }

    /// Doc block options for a tab using this config's defaults
    pub fn doc_block_options(&self, category_name: impl Into<String>) -> DocBlockOptions {
        DocBlockOptions {
            category_name: category_name.into(),
            view: self.view,
            show_search: self.display.show_search,
            show_value_column: self.display.show_value_column,
            max_height: self.display.max_height,
            page_size: self.page_size,
        }
    }
}
