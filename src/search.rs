//! Token search
//!
//! Case-insensitive substring search over token names. Values and
//! descriptions are deliberately not searched: the search box is for
//! locating tokens by identifier.

use crate::model::Category;

/// Filter categories down to tokens whose name contains `query`
///
/// - Empty query returns the input unchanged
/// - Categories left with no tokens are dropped
/// - Surviving categories and tokens keep their relative order
/// - Whitespace is an ordinary query character (`" "` matches names with spaces)
pub fn filter(categories: &[Category], query: &str) -> Vec<Category> {
    if query.is_empty() {
        return categories.to_vec();
    }

    let needle = query.to_lowercase();

    categories
        .iter()
        .filter_map(|category| {
            let tokens: Vec<_> = category
                .tokens
                .iter()
                .filter(|token| token.name.to_lowercase().contains(&needle))
                .cloned()
                .collect();

            if tokens.is_empty() {
                None
            } else {
                Some(Category::new(category.label.clone(), tokens))
            }
        })
        .collect()
}

/// Search state for one viewed tab
///
/// Holds the unfiltered categories and the current query; the filtered view
/// is recomputed on demand so repeated reads with the same query agree.
#[derive(Debug, Clone, Default)]
pub struct TokenSearch {
    source: Vec<Category>,
    query: String,
}

impl TokenSearch {
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            source: categories,
            query: String::new(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replace the query. Returns true when the query text changed.
    pub fn set_query(&mut self, query: impl Into<String>) -> bool {
        let query = query.into();
        if query == self.query {
            return false;
        }
        tracing::debug!(query = %query, "Token search query changed");
        self.query = query;
        true
    }

    pub fn clear(&mut self) -> bool {
        self.set_query(String::new())
    }

    /// Unfiltered categories
    pub fn source(&self) -> &[Category] {
        &self.source
    }

    /// Categories matching the current query
    pub fn categories(&self) -> Vec<Category> {
        filter(&self.source, &self.query)
    }
}
