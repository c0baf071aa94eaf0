//! Doc block session
//!
//! The state behind one embedded token listing: which tab is shown, the
//! current search query, the current card page and any value overrides.
//! Everything a renderer needs comes out of [`DocBlockSession::view`];
//! focus handling and debouncing of the search box stay with the UI.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::{Category, Tab, Token};
use crate::overlay::ValueOverlay;
use crate::paginate::{flatten, PageSize, Pager};
use crate::presenter::PresenterMap;
use crate::search::TokenSearch;

/// How tokens are laid out
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ViewType {
    /// All matching categories, unpaginated
    #[default]
    Table,
    /// Flattened token cards, paginated
    #[serde(alias = "cards")]
    #[value(alias = "cards")]
    Card,
}

/// View name that is neither "table" nor "card"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownViewType(pub String);

impl fmt::Display for UnknownViewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown view {:?} (expected \"table\" or \"card\")", self.0)
    }
}

impl std::error::Error for UnknownViewType {}

impl FromStr for ViewType {
    type Err = UnknownViewType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "card" | "cards" => Ok(Self::Card),
            _ => Err(UnknownViewType(s.to_string())),
        }
    }
}

impl ViewType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Card => "card",
        }
    }
}

/// Options a documentation page passes when embedding a token block
#[derive(Debug, Clone, PartialEq)]
pub struct DocBlockOptions {
    /// Label of the tab to show
    pub category_name: String,
    pub view: ViewType,
    pub show_search: bool,
    pub show_value_column: bool,
    /// Table height limit in pixels (passed through to the renderer)
    pub max_height: u32,
    pub page_size: PageSize,
}

impl DocBlockOptions {
    pub fn new(category_name: impl Into<String>) -> Self {
        Self {
            category_name: category_name.into(),
            view: ViewType::default(),
            show_search: true,
            show_value_column: true,
            max_height: 600,
            page_size: PageSize::default(),
        }
    }
}

/// Renderable state of a doc block
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "lowercase")]
pub enum BlockView {
    Table {
        categories: Vec<Category>,
        show_value_column: bool,
        max_height: u32,
    },
    Card {
        items: Vec<Token>,
        current_page: usize,
        total_pages: usize,
        show_pagination: bool,
        show_value_column: bool,
    },
}

/// Live state for one doc block
///
/// `P` is the caller's presenter type. The session never looks inside a
/// presenter; it only hands the table back next to each view.
#[derive(Debug, Clone)]
pub struct DocBlockSession<P = ()> {
    tabs: Vec<Tab>,
    /// Index into `tabs` of the shown tab
    active: usize,
    options: DocBlockOptions,
    search: TokenSearch,
    pager: Pager,
    overlay: ValueOverlay,
    presenters: PresenterMap<P>,
}

impl DocBlockSession {
    /// Open a session on the tab named by `options.category_name`
    ///
    /// Returns None when no such tab exists; the block renders nothing.
    /// The session starts with no presenters; see [`Self::with_presenters`].
    pub fn open(tabs: Vec<Tab>, options: DocBlockOptions) -> Option<Self> {
        let active = tabs
            .iter()
            .position(|tab| tab.label == options.category_name)?;

        let categories = tabs[active].categories.clone();
        let pager = Pager::new(flatten(&categories), options.page_size);

        tracing::debug!(
            tab = %options.category_name,
            view = options.view.as_str(),
            "Opened doc block"
        );

        Some(Self {
            tabs,
            active,
            options,
            search: TokenSearch::new(categories),
            pager,
            overlay: ValueOverlay::new(),
            presenters: PresenterMap::new(),
        })
    }
}

impl<P> DocBlockSession<P> {
    /// Attach the presenter table handed along with every view
    pub fn with_presenters<Q>(self, presenters: PresenterMap<Q>) -> DocBlockSession<Q> {
        DocBlockSession {
            tabs: self.tabs,
            active: self.active,
            options: self.options,
            search: self.search,
            pager: self.pager,
            overlay: self.overlay,
            presenters,
        }
    }

    pub fn presenters(&self) -> &PresenterMap<P> {
        &self.presenters
    }

    pub fn tab_label(&self) -> &str {
        &self.tabs[self.active].label
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn options(&self) -> &DocBlockOptions {
        &self.options
    }

    pub fn query(&self) -> &str {
        self.search.query()
    }

    pub fn current_page(&self) -> usize {
        self.pager.current_page()
    }

    pub fn total_pages(&self) -> usize {
        self.pager.total_pages()
    }

    /// Update the search query and re-derive the card pages
    ///
    /// The page always goes back to the first one, since the filtered
    /// list it indexed into has been replaced.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.search.set_query(query);
        self.pager.set_tokens(flatten(&self.search.categories()));
    }

    /// Switch to another tab; query, page and overrides start fresh
    pub fn select_tab(&mut self, label: &str) -> bool {
        let Some(active) = self.tabs.iter().position(|tab| tab.label == label) else {
            return false;
        };

        let categories = self.tabs[active].categories.clone();
        self.active = active;
        self.options.category_name = label.to_string();
        self.pager.set_tokens(flatten(&categories));
        self.search = TokenSearch::new(categories);
        self.overlay.clear();
        true
    }

    pub fn next_page(&mut self) -> bool {
        self.pager.next_page()
    }

    pub fn previous_page(&mut self) -> bool {
        self.pager.previous_page()
    }

    /// Override a token's shown value. Returns false for unknown names.
    pub fn set_value(&mut self, name: &str, value: Value) -> bool {
        let Some(token) = self
            .search
            .source()
            .iter()
            .flat_map(|category| category.tokens.iter())
            .find(|token| token.name == name)
        else {
            return false;
        };

        self.overlay.set(token, value);
        true
    }

    pub fn overlay(&self) -> &ValueOverlay {
        &self.overlay
    }

    /// Current renderable state, with overrides applied
    pub fn view(&self) -> BlockView {
        match self.options.view {
            ViewType::Table => BlockView::Table {
                categories: self
                    .search
                    .categories()
                    .into_iter()
                    .map(|category| Category {
                        tokens: category
                            .tokens
                            .iter()
                            .map(|token| self.overlay.apply(token))
                            .collect(),
                        label: category.label,
                    })
                    .collect(),
                show_value_column: self.options.show_value_column,
                max_height: self.options.max_height,
            },
            ViewType::Card => {
                let page = self.pager.page();
                BlockView::Card {
                    show_pagination: page.shows_controls(),
                    items: page.items.iter().map(|t| self.overlay.apply(t)).collect(),
                    current_page: page.current_page,
                    total_pages: page.total_pages,
                    show_value_column: self.options.show_value_column,
                }
            }
        }
    }

    /// Current view together with the presenter table to render it with
    pub fn render_input(&self) -> (BlockView, &PresenterMap<P>) {
        (self.view(), &self.presenters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tabs::{build_tabs, find_tab};
    use serde_json::json;

    fn tabs() -> Vec<Tab> {
        let colors: Vec<_> = (0..120)
            .map(|i| json!({"name": format!("color-{}", i), "value": i}))
            .collect();
        build_tabs(&json!({
            "Brand": {"Color": colors},
            "Layout": {"Spacing": [{"name": "space-sm", "value": "4px"}]}
        }))
    }

    fn card_options(tab: &str) -> DocBlockOptions {
        DocBlockOptions {
            view: ViewType::Card,
            ..DocBlockOptions::new(tab)
        }
    }

    #[test]
    fn test_unknown_tab_opens_nothing() {
        assert!(DocBlockSession::open(tabs(), DocBlockOptions::new("Missing")).is_none());
        assert!(DocBlockSession::open(Vec::new(), DocBlockOptions::new("Brand")).is_none());
    }

    #[test]
    fn test_query_change_resets_page() {
        let mut session = DocBlockSession::open(tabs(), card_options("Brand")).unwrap();
        assert_eq!(session.total_pages(), 3);

        session.next_page();
        session.next_page();
        assert_eq!(session.current_page(), 2);

        // "color-1" matches color-1, color-10..19, color-100..119: 31 tokens
        session.set_query("color-1");
        assert_eq!(session.current_page(), 0);
        assert_eq!(session.total_pages(), 1);
    }

    #[test]
    fn test_card_view_metadata() {
        let mut session = DocBlockSession::open(tabs(), card_options("Brand")).unwrap();
        session.next_page();

        match session.view() {
            BlockView::Card {
                items,
                current_page,
                total_pages,
                show_pagination,
                ..
            } => {
                assert_eq!(items.len(), 50);
                assert_eq!(items[0].name, "color-50");
                assert_eq!(current_page, 1);
                assert_eq!(total_pages, 3);
                assert!(show_pagination);
            }
            other => panic!("expected card view, got {:?}", other),
        }
    }

    #[test]
    fn test_table_view_filters_categories() {
        let mut session = DocBlockSession::open(tabs(), DocBlockOptions::new("Layout")).unwrap();
        session.set_query("nothing-matches");

        match session.view() {
            BlockView::Table { categories, .. } => assert!(categories.is_empty()),
            other => panic!("expected table view, got {:?}", other),
        }
    }

    #[test]
    fn test_select_tab_resets_state() {
        let mut session = DocBlockSession::open(tabs(), card_options("Brand")).unwrap();
        session.set_query("color");
        session.next_page();
        assert!(session.set_value("color-0", json!("changed")));

        assert!(session.select_tab("Layout"));
        assert_eq!(session.tab_label(), "Layout");
        assert_eq!(session.query(), "");
        assert_eq!(session.current_page(), 0);
        assert!(session.overlay().is_empty());

        assert!(!session.select_tab("Nope"));
        assert_eq!(session.tab_label(), "Layout");
    }

    #[test]
    fn test_overrides_shown_but_catalog_untouched() {
        let mut session = DocBlockSession::open(tabs(), DocBlockOptions::new("Layout")).unwrap();
        assert!(session.set_value("space-sm", json!("8px")));
        assert!(!session.set_value("space-xl", json!("64px")));

        match session.view() {
            BlockView::Table { categories, .. } => {
                assert_eq!(categories[0].tokens[0].value, json!("8px"));
                assert_eq!(categories[0].tokens[0].raw_value, json!("4px"));
            }
            other => panic!("expected table view, got {:?}", other),
        }

        let original = &find_tab(session.tabs(), "Layout").unwrap().categories;
        assert_eq!(original[0].tokens[0].value, json!("4px"));
    }

    #[test]
    fn test_view_is_idempotent() {
        let mut session = DocBlockSession::open(tabs(), card_options("Brand")).unwrap();
        session.set_query("color-2");
        session.set_query("color-2");
        assert_eq!(session.view(), session.view());
    }

    #[test]
    fn test_view_type_parsing() {
        assert_eq!("card".parse(), Ok(ViewType::Card));
        assert_eq!(" Cards ".parse(), Ok(ViewType::Card));
        assert_eq!("table".parse(), Ok(ViewType::Table));
        assert_eq!(
            "grid".parse::<ViewType>(),
            Err(UnknownViewType("grid".to_string()))
        );
    }

    #[test]
    fn test_card_items_resolve_through_session_presenters() {
        let tabs = build_tabs(&json!({
            "Brand": {
                "Color": [{"name": "primary-500", "value": "#36f", "type": "color"}],
                "Spacing": [{"name": "space-sm", "value": "4px", "type": "spacing"}],
                "Misc": [{"name": "opacity", "value": 0.5}]
            }
        }));
        let presenters: PresenterMap<&str> =
            [("color", "swatch"), ("spacing", "ruler")].into_iter().collect();
        let session = DocBlockSession::open(tabs, card_options("Brand"))
            .unwrap()
            .with_presenters(presenters);

        let (view, presenters) = session.render_input();
        let BlockView::Card { items, .. } = view else {
            panic!("expected card view");
        };
        let resolved: Vec<_> = items.iter().map(|t| presenters.presenter_for(t)).collect();
        assert_eq!(resolved, vec![Some(&"swatch"), Some(&"ruler"), None]);
    }

    #[test]
    fn test_presenters_survive_tab_switch() {
        let presenters: PresenterMap<u8> = [("color", 1u8)].into_iter().collect();
        let mut session = DocBlockSession::open(tabs(), DocBlockOptions::new("Brand"))
            .unwrap()
            .with_presenters(presenters);

        assert!(session.select_tab("Layout"));
        assert_eq!(session.presenters().len(), 1);
    }
}
