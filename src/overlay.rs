//! Per-token value overrides
//!
//! A viewer may try out a different value for a token (e.g. a new hex
//! color) without touching the catalog. Overrides live in this overlay and
//! are composed with the canonical token only when handed to a presenter.

use std::collections::HashMap;

use serde_json::Value;

use crate::model::Token;

/// Mapping from token name to its overriding value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueOverlay {
    overrides: HashMap<String, Value>,
}

impl ValueOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an edited value for `token`
    ///
    /// Editing back to the declared raw value removes the override.
    pub fn set(&mut self, token: &Token, value: Value) {
        if value == token.raw_value {
            self.overrides.remove(&token.name);
        } else {
            self.overrides.insert(token.name.clone(), value);
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.overrides.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.overrides.get(name)
    }

    /// Override if one exists, otherwise the token's own value
    pub fn effective_value<'a>(&'a self, token: &'a Token) -> &'a Value {
        self.overrides.get(&token.name).unwrap_or(&token.value)
    }

    /// Copy of `token` with the effective value applied
    pub fn apply(&self, token: &Token) -> Token {
        Token {
            value: self.effective_value(token).clone(),
            ..token.clone()
        }
    }

    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }

    pub fn clear(&mut self) {
        self.overrides.clear();
    }
}
