//! Display-name to ticker-symbol registry

use serde::{Deserialize, Serialize};

/// One registry entry: a company display name and its exchange symbol
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryEntry {
    pub name: String,
    pub symbol: String,
}

/// Mapping from company display name to ticker symbol
///
/// Entries keep insertion order for display, grow monotonically, and are
/// never removed. Each aggregator session owns its own registry so tests
/// and concurrent sessions stay isolated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickerRegistry {
    entries: Vec<RegistryEntry>,
}

/// The fixed set of companies offered before any user additions
const DEFAULT_COMPANIES: [(&str, &str); 10] = [
    ("Apple Inc.", "AAPL"),
    ("Microsoft Corp.", "MSFT"),
    ("Alphabet Inc. (Google)", "GOOGL"),
    ("Amazon.com Inc.", "AMZN"),
    ("NVIDIA Corporation", "NVDA"),
    ("Tesla Inc.", "TSLA"),
    ("Berkshire Hathaway Inc.", "BRK-B"),
    ("Meta Platforms Inc. (Facebook)", "META"),
    ("Taiwan Semiconductor Manufacturing Company", "TSM"),
    ("Johnson & Johnson", "JNJ"),
];

impl TickerRegistry {
    /// Create a registry seeded with the default company list
    pub fn new() -> Self {
        Self {
            entries: DEFAULT_COMPANIES
                .iter()
                .map(|(name, symbol)| RegistryEntry {
                    name: (*name).to_string(),
                    symbol: (*symbol).to_string(),
                })
                .collect(),
        }
    }

    /// Create a registry with no entries
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Resolve an identifier to a ticker symbol
    ///
    /// A known display name resolves to its symbol. Anything else is treated
    /// as already being a raw symbol and passes through unchanged; validation
    /// of unknown symbols happens at fetch time, not here.
    pub fn resolve<'a>(&'a self, identifier: &'a str) -> &'a str {
        self.entries
            .iter()
            .find(|entry| entry.name == identifier)
            .map_or(identifier, |entry| entry.symbol.as_str())
    }

    /// Display name registered for a symbol, if any
    pub fn name_for(&self, symbol: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.symbol == symbol)
            .map(|entry| entry.name.as_str())
    }

    /// Whether a symbol is already registered
    pub fn contains_symbol(&self, symbol: &str) -> bool {
        self.name_for(symbol).is_some()
    }

    /// Insert a new entry, keeping names and symbols unique
    ///
    /// Returns false (and leaves the registry unchanged) when either the
    /// name or the symbol is already present.
    pub fn insert(&mut self, name: impl Into<String>, symbol: impl Into<String>) -> bool {
        let name = name.into();
        let symbol = symbol.into();

        if self.contains_symbol(&symbol) || self.entries.iter().any(|entry| entry.name == name) {
            return false;
        }

        self.entries.push(RegistryEntry { name, symbol });
        true
    }

    /// Registered display names, in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    /// Registered symbols, in insertion order
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.symbol.as_str())
    }

    /// All entries, in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &RegistryEntry> {
        self.entries.iter()
    }

    /// Number of registered companies
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TickerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_seed() {
        let registry = TickerRegistry::new();
        assert_eq!(registry.len(), 10);
        assert_eq!(registry.resolve("Apple Inc."), "AAPL");
        assert_eq!(registry.resolve("Johnson & Johnson"), "JNJ");

        // Seed order is preserved for display
        let first: Vec<&str> = registry.names().take(2).collect();
        assert_eq!(first, vec!["Apple Inc.", "Microsoft Corp."]);
    }

    #[test]
    fn test_resolve_pass_through() {
        let registry = TickerRegistry::new();
        // Unknown identifiers pass through as raw symbols
        assert_eq!(registry.resolve("NFLX"), "NFLX");
    }

    #[test]
    fn test_resolve_idempotent_on_symbols() {
        let registry = TickerRegistry::new();
        let once = registry.resolve("AAPL");
        assert_eq!(registry.resolve(once), "AAPL");
    }

    #[test]
    fn test_insert_rejects_duplicates() {
        let mut registry = TickerRegistry::empty();
        assert!(registry.insert("Netflix Inc.", "NFLX"));
        assert!(!registry.insert("Netflix Inc.", "NFLX2"));
        assert!(!registry.insert("Netflix Duplicate", "NFLX"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_name_for() {
        let registry = TickerRegistry::new();
        assert_eq!(registry.name_for("MSFT"), Some("Microsoft Corp."));
        assert_eq!(registry.name_for("ZZZZ"), None);
    }
}
