//! Tab builder
//!
//! Normalizes a loosely-shaped token configuration into tabs of ordered
//! categories. Two shapes are accepted:
//!
//! ```text
//! flat:    { "Color": [token, ...], "Spacing": [token, ...] }
//! nested:  { "Brand": { "Color": [token, ...] }, "Layout": { ... } }
//! ```
//!
//! Shape is decided once at the root by [`ConfigShape::classify`]. Anything
//! that is neither shape yields no tabs; callers render that as an empty state.

use std::collections::HashSet;

use serde_json::{Map, Value};

use crate::model::{Category, Tab, Token};

/// Label of the implicit tab produced for flat configurations
pub const DEFAULT_TAB_LABEL: &str = "Tokens";

/// Root shape of a token configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigShape {
    /// category-label -> token list
    Flat,
    /// tab-label -> category-label -> token list
    Nested,
    /// Empty, absent, or neither of the above
    Malformed,
}

impl ConfigShape {
    /// Classify the root of a configuration
    ///
    /// Every top-level entry must agree: all arrays is flat, all objects is
    /// nested. Mixed roots are malformed rather than guessed at.
    pub fn classify(config: &Value) -> Self {
        let Some(root) = config.as_object() else {
            return Self::Malformed;
        };
        if root.is_empty() {
            return Self::Malformed;
        }

        if root.values().all(Value::is_array) {
            Self::Flat
        } else if root.values().all(Value::is_object) {
            Self::Nested
        } else {
            Self::Malformed
        }
    }
}

/// Build the ordered tab list for a configuration
///
/// Pure and deterministic: entry order follows declaration order in the
/// source document.
pub fn build_tabs(config: &Value) -> Vec<Tab> {
    let shape = ConfigShape::classify(config);
    let Some(root) = config.as_object() else {
        tracing::debug!("Token config is not a mapping; no tabs built");
        return Vec::new();
    };

    let tabs = match shape {
        ConfigShape::Flat => vec![Tab {
            label: DEFAULT_TAB_LABEL.to_string(),
            categories: build_categories(root),
        }],
        ConfigShape::Nested => root
            .iter()
            .filter_map(|(label, categories)| {
                categories.as_object().map(|categories| Tab {
                    label: label.clone(),
                    categories: build_categories(categories),
                })
            })
            .collect(),
        ConfigShape::Malformed => {
            if !root.is_empty() {
                tracing::warn!("Token config mixes tab and category entries; ignoring it");
            }
            Vec::new()
        }
    };

    tracing::debug!(tabs = tabs.len(), ?shape, "Built token tabs");
    tabs
}

/// Look up a tab by its exact label
pub fn find_tab<'a>(tabs: &'a [Tab], label: &str) -> Option<&'a Tab> {
    tabs.iter().find(|tab| tab.label == label)
}

fn build_categories(entries: &Map<String, Value>) -> Vec<Category> {
    entries
        .iter()
        .filter_map(|(label, tokens)| match tokens.as_array() {
            Some(tokens) => Some(Category::new(label.clone(), build_tokens(label, tokens))),
            None => {
                tracing::warn!(category = %label, "Category is not a token list; skipping");
                None
            }
        })
        .collect()
}

fn build_tokens(category: &str, entries: &[Value]) -> Vec<Token> {
    let mut seen = HashSet::new();
    let mut tokens = Vec::with_capacity(entries.len());

    for entry in entries {
        let Some(token) = parse_token(entry) else {
            tracing::warn!(%category, "Skipping token entry without a name");
            continue;
        };

        // First declaration wins
        if !seen.insert(token.name.clone()) {
            tracing::warn!(%category, token = %token.name, "Duplicate token name; keeping first");
            continue;
        }
        tokens.push(token);
    }

    tokens
}

fn parse_token(entry: &Value) -> Option<Token> {
    let fields = entry.as_object()?;
    let name = fields.get("name")?.as_str()?.to_string();

    let value = fields.get("value").cloned().unwrap_or(Value::Null);
    let raw_value = fields.get("rawValue").cloned().unwrap_or_else(|| value.clone());
    let description = fields
        .get("description")
        .and_then(Value::as_str)
        .map(str::to_string);
    // "presenter" is accepted as an alias of "type"
    let token_type = fields
        .get("type")
        .or_else(|| fields.get("presenter"))
        .and_then(Value::as_str)
        .map(str::to_string);

    Some(Token {
        name,
        value,
        raw_value,
        description,
        token_type,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn names(category: &Category) -> Vec<&str> {
        category.tokens.iter().map(|t| t.name.as_str()).collect()
    }

    #[test]
    fn test_classify_shapes() {
        assert_eq!(ConfigShape::classify(&json!({"Color": []})), ConfigShape::Flat);
        assert_eq!(
            ConfigShape::classify(&json!({"Brand": {"Color": []}})),
            ConfigShape::Nested
        );
        assert_eq!(
            ConfigShape::classify(&json!({"Color": [], "Brand": {}})),
            ConfigShape::Malformed
        );
        assert_eq!(ConfigShape::classify(&json!({})), ConfigShape::Malformed);
        assert_eq!(ConfigShape::classify(&Value::Null), ConfigShape::Malformed);
        assert_eq!(ConfigShape::classify(&json!([1, 2])), ConfigShape::Malformed);
    }

    #[test]
    fn test_flat_config_gets_default_tab() {
        let config = json!({
            "Color": [{"name": "primary-500", "value": "#36f"}],
            "Spacing": [{"name": "space-sm", "value": "4px"}]
        });

        let tabs = build_tabs(&config);
        assert_eq!(tabs.len(), 1);
        assert_eq!(tabs[0].label, DEFAULT_TAB_LABEL);

        let labels: Vec<_> = tabs[0].categories.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Color", "Spacing"]);
    }

    #[test]
    fn test_nested_config_keeps_declaration_order() {
        let config = json!({
            "Layout": {"Spacing": [{"name": "space-lg"}, {"name": "space-sm"}]},
            "Brand": {
                "Typography": [{"name": "font-body"}],
                "Color": [{"name": "primary-500"}]
            }
        });

        let tabs = build_tabs(&config);
        let labels: Vec<_> = tabs.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["Layout", "Brand"]);
        assert_eq!(names(&tabs[0].categories[0]), vec!["space-lg", "space-sm"]);
        assert_eq!(tabs[1].categories[0].label, "Typography");
        assert_eq!(tabs[1].categories[1].label, "Color");
    }

    #[test]
    fn test_empty_and_malformed_configs_yield_no_tabs() {
        assert!(build_tabs(&Value::Null).is_empty());
        assert!(build_tabs(&json!({})).is_empty());
        assert!(build_tabs(&json!("tokens")).is_empty());
        assert!(build_tabs(&json!({"Color": [], "Brand": {}})).is_empty());
    }

    #[test]
    fn test_token_fields_parsed() {
        let config = json!({
            "Color": [{
                "name": "primary-500",
                "value": "#3366ff",
                "rawValue": "var(--blue-500)",
                "description": "Primary brand color",
                "type": "color"
            }]
        });

        let tabs = build_tabs(&config);
        let token = &tabs[0].categories[0].tokens[0];
        assert_eq!(token.value, json!("#3366ff"));
        assert_eq!(token.raw_value, json!("var(--blue-500)"));
        assert_eq!(token.description.as_deref(), Some("Primary brand color"));
        assert_eq!(token.token_type.as_deref(), Some("color"));
    }

    #[test]
    fn test_raw_value_defaults_to_value() {
        let tabs = build_tabs(&json!({"Spacing": [{"name": "space-sm", "value": 4}]}));
        let token = &tabs[0].categories[0].tokens[0];
        assert_eq!(token.raw_value, json!(4));
    }

    #[test]
    fn test_presenter_alias_for_type() {
        let tabs = build_tabs(&json!({"Color": [{"name": "a", "presenter": "color"}]}));
        assert_eq!(
            tabs[0].categories[0].tokens[0].token_type.as_deref(),
            Some("color")
        );
    }

    #[test]
    fn test_invalid_entries_skipped() {
        let config = json!({
            "Brand": {
                "Color": [{"name": "a"}, {"value": "#fff"}, 42, {"name": 7}, {"name": "b"}],
                "Notes": "not a list"
            }
        });

        let tabs = build_tabs(&config);
        assert_eq!(tabs[0].categories.len(), 1);
        assert_eq!(names(&tabs[0].categories[0]), vec!["a", "b"]);
    }

    #[test]
    fn test_duplicate_names_keep_first() {
        let config = json!({
            "Color": [
                {"name": "primary", "value": 1},
                {"name": "primary", "value": 2},
                {"name": "secondary", "value": 3}
            ]
        });

        let tabs = build_tabs(&config);
        let tokens = &tabs[0].categories[0].tokens;
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].value, json!(1));
    }

    #[test]
    fn test_find_tab_by_label() {
        let tabs = build_tabs(&json!({"Brand": {"Color": []}, "Layout": {"Spacing": []}}));
        assert_eq!(find_tab(&tabs, "Layout").map(|t| t.label.as_str()), Some("Layout"));
        assert!(find_tab(&tabs, "layout").is_none());
    }

    #[test]
    fn test_build_is_deterministic() {
        let config = json!({
            "Brand": {"Color": [{"name": "b"}, {"name": "a"}]},
            "Layout": {"Spacing": [{"name": "z"}]}
        });
        assert_eq!(build_tabs(&config), build_tabs(&config));
    }
}
