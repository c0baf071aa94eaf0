// swatchbook - design token catalog engine
//
// Turns a nested token document into tabs of categories, filters them by
// token name, and pages through the results for card layouts.
//
// Architecture:
// - model: Token / Category / Tab shapes
// - tabs: flat or nested document -> ordered tabs
// - search: name substring filter over categories
// - paginate: page slicing and clamped navigation
// - overlay / presenter: per-token value overrides and presenter passthrough
// - docblock: session state for one embedded token listing
// - config, logging, loader, output, cli: the command-line front end

pub mod cli;
pub mod config;
pub mod docblock;
pub mod loader;
pub mod logging;
pub mod model;
pub mod output;
pub mod overlay;
pub mod paginate;
pub mod presenter;
pub mod search;
pub mod tabs;

pub use docblock::{BlockView, DocBlockOptions, DocBlockSession, UnknownViewType, ViewType};
pub use model::{Category, Tab, Token};
pub use overlay::ValueOverlay;
pub use paginate::{flatten, paginate, Page, PageSize, PageSizeError, Pager, DEFAULT_PAGE_SIZE};
pub use presenter::PresenterMap;
pub use search::{filter, TokenSearch};
pub use tabs::{build_tabs, find_tab, ConfigShape, DEFAULT_TAB_LABEL};
