// src/sink.rs - Rendering-side token sink abstraction

use std::collections::HashMap;

/// Key/value store the resolver writes design tokens into. The rendering
/// layer consumes it however it likes (style variables, CSS custom
/// properties, a widget cache); this crate only guarantees what the keys
/// and values are.
pub trait TokenSink {
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
    fn get(&self, key: &str) -> Option<&str>;
}

/// HashMap-backed sink. The concrete sink for the CLI and the injectable
/// double for tests.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    tokens: HashMap<String, String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Sorted snapshot of all tokens, for display and assertions.
    pub fn entries(&self) -> Vec<(String, String)> {
        let mut entries: Vec<_> = self
            .tokens
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        entries.sort();
        entries
    }
}

impl TokenSink for MemorySink {
    fn set(&mut self, key: &str, value: &str) {
        self.tokens.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.tokens.remove(key);
    }

    fn get(&self, key: &str) -> Option<&str> {
        self.tokens.get(key).map(|s| s.as_str())
    }
}
