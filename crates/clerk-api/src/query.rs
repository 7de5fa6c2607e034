//! Query-string construction.

use std::fmt::Display;

/// Ordered query parameters. `None` values are kept until encoding and then dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, Option<String>)>,
}

impl Query {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, replacing an earlier value for the same key.
    #[must_use]
    pub fn param(self, key: &str, value: impl Display) -> Self {
        self.insert(key, Some(value.to_string()))
    }

    /// Set `key` only when `value` is present.
    #[must_use]
    pub fn optional<V: Display>(self, key: &str, value: Option<V>) -> Self {
        self.insert(key, value.map(|v| v.to_string()))
    }

    fn insert(mut self, key: &str, value: Option<String>) -> Self {
        if let Some(slot) = self.pairs.iter_mut().find(|(k, _)| k == key) {
            slot.1 = value;
        } else {
            self.pairs.push((key.to_string(), value));
        }
        self
    }

    /// True when no parameter carries a value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.iter().all(|(_, v)| v.is_none())
    }

    /// URL-encode the present parameters as `k=v&k=v`, or `None` if there are none.
    #[must_use]
    pub fn encode(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        let encoded = self
            .pairs
            .iter()
            .filter_map(|(key, value)| {
                value.as_ref().map(|value| {
                    format!(
                        "{}={}",
                        urlencoding::encode(key),
                        urlencoding::encode(value)
                    )
                })
            })
            .collect::<Vec<_>>();
        Some(encoded.join("&"))
    }
}
