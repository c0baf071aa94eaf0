//! Presenter lookup passthrough
//!
//! Rendering is owned by the caller. The catalog only carries the caller's
//! presenter table next to its output and resolves a token's type tag
//! against it; presenters themselves are never inspected.

use std::collections::HashMap;

use crate::model::Token;

/// Token type tag -> caller-defined presenter
#[derive(Debug, Clone)]
pub struct PresenterMap<P> {
    presenters: HashMap<String, P>,
}

impl<P> Default for PresenterMap<P> {
    fn default() -> Self {
        Self {
            presenters: HashMap::new(),
        }
    }
}

impl<P> PresenterMap<P> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, token_type: impl Into<String>, presenter: P) -> Option<P> {
        self.presenters.insert(token_type.into(), presenter)
    }

    /// Presenter registered for the token's type, if it has one
    pub fn presenter_for(&self, token: &Token) -> Option<&P> {
        token
            .token_type
            .as_deref()
            .and_then(|token_type| self.presenters.get(token_type))
    }

    pub fn len(&self) -> usize {
        self.presenters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presenters.is_empty()
    }
}

impl<P, K: Into<String>> FromIterator<(K, P)> for PresenterMap<P> {
    fn from_iter<I: IntoIterator<Item = (K, P)>>(iter: I) -> Self {
        Self {
            presenters: iter.into_iter().map(|(k, p)| (k.into(), p)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lookup_by_type() {
        let presenters: PresenterMap<&str> =
            [("color", "swatch"), ("spacing", "bar")].into_iter().collect();

        let color = Token::new("primary", json!("#fff")).with_type("color");
        let untyped = Token::new("misc", json!(1));
        let unknown = Token::new("shadow", json!("0 1px")).with_type("shadow");

        assert_eq!(presenters.presenter_for(&color), Some(&"swatch"));
        assert_eq!(presenters.presenter_for(&untyped), None);
        assert_eq!(presenters.presenter_for(&unknown), None);
    }
}
