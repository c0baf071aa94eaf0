//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Render the config as a commented TOML file
    pub fn to_toml(&self) -> String {
        format!(
            r#"# swatchbook configuration

# Cards per page in card view (must be positive)
page_size = {page_size}

# Default layout: table, card
view = "{view}"

# Doc block display defaults
[display]
show_search = {show_search}
show_value_column = {show_value_column}
max_height = {max_height}
# Max columns a token value may take in text output
value_width = {value_width}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
# File logging (in addition to stderr)
file_enabled = {log_file_enabled}
file_dir = "{log_file_dir}"
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = "{log_file_prefix}"
"#,
            page_size = self.page_size,
            view = self.view.as_str(),
            show_search = self.display.show_search,
            show_value_column = self.display.show_value_column,
            max_height = self.display.max_height,
            value_width = self.display.value_width,
            log_level = self.logging.level,
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = self.logging.file_dir.display().to_string().replace('\\', "/"),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = self.logging.file_prefix,
        )
    }
}
