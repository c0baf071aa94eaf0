//! Token catalog data model
//!
//! Immutable shapes the rest of the crate operates on. Filtering and
//! pagination always produce new values; nothing here is mutated after
//! the tab builder constructs it.

use serde::Serialize;
use serde_json::Value;

/// A single named design value (color, spacing, font stack, ...)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    /// Identifier, unique within its category only
    pub name: String,

    /// Effective value handed to presenters (opaque to the catalog)
    pub value: Value,

    /// Value as declared in configuration
    #[serde(rename = "rawValue")]
    pub raw_value: Value,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Type tag used to pick a presenter ("color", "spacing", ...)
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
}

impl Token {
    /// Token whose raw value equals its effective value
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            raw_value: value.clone(),
            value,
            description: None,
            token_type: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_type(mut self, token_type: impl Into<String>) -> Self {
        self.token_type = Some(token_type.into());
        self
    }
}

/// Ordered group of tokens shown under one heading
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    pub label: String,
    pub tokens: Vec<Token>,
}

impl Category {
    pub fn new(label: impl Into<String>, tokens: Vec<Token>) -> Self {
        Self {
            label: label.into(),
            tokens,
        }
    }
}

/// Named group of categories; `label` is the lookup key for consumers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tab {
    pub label: String,
    pub categories: Vec<Category>,
}

impl Tab {
    /// Total number of tokens across all categories
    pub fn token_count(&self) -> usize {
        self.categories.iter().map(|c| c.tokens.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_token_mirrors_raw_value() {
        let token = Token::new("primary-500", json!("#3366ff"));
        assert_eq!(token.value, token.raw_value);
        assert!(token.description.is_none());
    }

    #[test]
    fn test_serialized_field_names() {
        let token = Token::new("space-sm", json!("4px")).with_type("spacing");
        let value = serde_json::to_value(&token).unwrap();

        assert_eq!(value["rawValue"], json!("4px"));
        assert_eq!(value["type"], json!("spacing"));
        assert!(value.get("description").is_none());
    }

    #[test]
    fn test_tab_token_count() {
        let tab = Tab {
            label: "Brand".to_string(),
            categories: vec![
                Category::new("Color", vec![Token::new("a", json!(1)), Token::new("b", json!(2))]),
                Category::new("Spacing", vec![Token::new("c", json!(3))]),
            ],
        };
        assert_eq!(tab.token_count(), 3);
    }
}
