//! Display configuration
//!
//! Defaults for how an embedded token block is shown.

use serde::Deserialize;

/// Doc block display defaults
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayConfig {
    /// Show the search field above the listing
    pub show_search: bool,

    /// Show the value column / value line on cards
    pub show_value_column: bool,

    /// Table height limit in pixels
    pub max_height: u32,

    /// Max display columns for a value in text output
    pub value_width: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_search: true,
            show_value_column: true,
            max_height: 600,
            value_width: 40,
        }
    }
}

/// Display settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileDisplay {
    pub show_search: Option<bool>,
    pub show_value_column: Option<bool>,
    pub max_height: Option<u32>,
    pub value_width: Option<usize>,
}

impl DisplayConfig {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileDisplay>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            show_search: file.show_search.unwrap_or(defaults.show_search),
            show_value_column: file.show_value_column.unwrap_or(defaults.show_value_column),
            max_height: file.max_height.unwrap_or(defaults.max_height),
            value_width: file.value_width.unwrap_or(defaults.value_width),
        }
    }
}
