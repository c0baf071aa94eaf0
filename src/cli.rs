// CLI module - command-line argument parsing and handlers
//
// Subcommands:
// - tabs <FILE>: list the tabs a token document produces
// - show <FILE>: print one tab as a table or a page of cards
// - config --show/--reset/--path: configuration management

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

use crate::config::{Config, VERSION};
use crate::docblock::{DocBlockSession, ViewType};
use crate::loader::load_token_file;
use crate::output::{render_tabs, render_view};
use crate::paginate::PageSize;
use crate::tabs::build_tabs;

/// swatchbook - browse, search and page through design tokens
#[derive(Parser)]
#[command(name = "swatchbook")]
#[command(version = VERSION)]
#[command(about = "Browse design tokens by category", long_about = None)]
pub struct Cli {
    /// Use this config file instead of ~/.config/swatchbook/config.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the tabs in a token file
    Tabs {
        /// Token file (.json or .toml)
        file: PathBuf,

        /// Print tabs as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the tokens of one tab
    Show {
        /// Token file (.json or .toml)
        file: PathBuf,

        /// Tab label (defaults to the first tab)
        #[arg(long)]
        tab: Option<String>,

        /// Case-insensitive substring of token names
        #[arg(long, short)]
        query: Option<String>,

        /// Layout (defaults to the configured view)
        #[arg(long, value_enum)]
        view: Option<ViewType>,

        /// Card page to show, starting at 1
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
        page: u64,

        /// Cards per page
        #[arg(long)]
        page_size: Option<PageSize>,

        /// Print the view as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

/// Config file this invocation reads and manages: `--config` or the default
pub fn config_file(cli: &Cli) -> Option<PathBuf> {
    cli.config.clone().or_else(Config::config_path)
}

/// Load the config the command line asked for
pub fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => Config::from_path(path),
        None => Config::from_env(),
    }
}

/// Run a parsed command, writing listings to `out`
pub fn run(cli: Cli, config: &Config, out: &mut impl Write) -> Result<()> {
    let config_path = config_file(&cli);
    match cli.command {
        Commands::Tabs { file, json } => {
            let tabs = build_tabs(&load_token_file(&file)?);
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&tabs)?)?;
            } else {
                write!(out, "{}", render_tabs(&tabs))?;
            }
        }
        Commands::Show {
            file,
            tab,
            query,
            view,
            page,
            page_size,
            json,
        } => {
            let tabs = build_tabs(&load_token_file(&file)?);
            let Some(label) = tab.or_else(|| tabs.first().map(|t| t.label.clone())) else {
                write!(out, "{}", render_tabs(&tabs))?;
                return Ok(());
            };

            let mut options = config.doc_block_options(label.as_str());
            if let Some(view) = view {
                options.view = view;
            }
            if let Some(page_size) = page_size {
                options.page_size = page_size;
            }

            let Some(mut session) = DocBlockSession::open(tabs, options) else {
                bail!("No tab named {:?} in {}", label, file.display());
            };

            if let Some(query) = query {
                if session.options().show_search {
                    session.set_query(query);
                } else {
                    tracing::warn!("Search is disabled in config; ignoring --query");
                }
            }

            // Navigation clamps, so an oversized --page lands on the last page
            for _ in 1..page {
                if !session.next_page() {
                    break;
                }
            }

            let view = session.view();
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&view)?)?;
            } else {
                write!(out, "{}", render_view(&view, config.display.value_width))?;
            }
        }
        Commands::Config { show, reset, path } => {
            if path {
                handle_config_path(config_path, out)?;
            } else if show {
                handle_config_show(config, config_path, out)?;
            } else if reset {
                handle_config_reset(config_path, out)?;
            } else {
                // No flag provided, show help
                writeln!(out, "Usage: swatchbook config [--show|--reset|--path]")?;
                writeln!(out)?;
                writeln!(out, "Options:")?;
                writeln!(out, "  --show    Display effective configuration")?;
                writeln!(out, "  --reset   Reset config file to defaults")?;
                writeln!(out, "  --path    Show config file path")?;
            }
        }
    }
    Ok(())
}

fn handle_config_path(path: Option<PathBuf>, out: &mut impl Write) -> Result<()> {
    let path = path.context("Could not determine config path")?;
    writeln!(out, "{}", path.display())?;
    Ok(())
}

fn handle_config_show(config: &Config, path: Option<PathBuf>, out: &mut impl Write) -> Result<()> {
    writeln!(out, "# Effective configuration (env > file > defaults)")?;
    writeln!(out)?;
    write!(out, "{}", config.to_toml())?;

    // Show source info
    writeln!(out)?;
    if let Some(path) = path {
        if path.exists() {
            writeln!(out, "# Source: {}", path.display())?;
        } else {
            writeln!(out, "# Source: defaults (no config file)")?;
        }
    }
    Ok(())
}

fn handle_config_reset(path: Option<PathBuf>, out: &mut impl Write) -> Result<()> {
    let path = path.context("Could not determine config path")?;

    // Confirm if file exists
    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush()?;

        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            writeln!(out, "Aborted.")?;
            return Ok(());
        }
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Error creating directory {}", parent.display()))?;
    }

    std::fs::write(&path, Config::default().to_toml())
        .with_context(|| format!("Error writing config {}", path.display()))?;

    writeln!(out, "Config reset to defaults: {}", path.display())?;
    Ok(())
}
