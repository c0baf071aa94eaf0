// swatchbook - browse design tokens from the command line
//
// Loads configuration (env > file > defaults), sets up logging, then hands
// the parsed command to the CLI module. Listings go to stdout, logs to stderr.

use anyhow::Result;
use clap::Parser;

use swatchbook::cli::{self, Cli};
use swatchbook::config::Config;
use swatchbook::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Ensure config template exists (helps users discover options)
    if cli.config.is_none() {
        Config::ensure_config_exists();
    }

    let config = cli::load_config(&cli)?;

    // Keep the guard alive so file logs flush before exit
    let _file_guard = logging::init(&config.logging);

    tracing::debug!(
        page_size = %config.page_size,
        view = config.view.as_str(),
        "Configuration loaded"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    cli::run(cli, &config, &mut out)
}
