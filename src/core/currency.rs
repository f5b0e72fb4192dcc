//! Currency metadata and the catalog loaded from the backend.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub symbol: String,
}

impl Currency {
    /// Label shown when this currency is selected, e.g. `USD - US Dollar`.
    pub fn label(&self) -> String {
        format!("{} - {}", self.code, self.name)
    }
}

/// The set of currencies returned by the most recent successful load.
///
/// A catalog is never mutated after construction. Reloading replaces the
/// whole catalog, so lookups always reflect a single backend response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrencyCatalog {
    currencies: Vec<Currency>,
}

impl CurrencyCatalog {
    pub fn new(currencies: Vec<Currency>) -> Self {
        Self { currencies }
    }

    pub fn find(&self, code: &str) -> Option<&Currency> {
        self.currencies
            .iter()
            .find(|c| c.code.eq_ignore_ascii_case(code))
    }

    /// Resolves the display symbol for `code`, falling back to the code itself
    /// when the currency is unknown or has no symbol.
    pub fn symbol_for<'a>(&'a self, code: &'a str) -> &'a str {
        self.find(code)
            .map(|c| c.symbol.as_str())
            .filter(|s| !s.is_empty())
            .unwrap_or(code)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Currency> {
        self.currencies.iter()
    }

    pub fn len(&self) -> usize {
        self.currencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.currencies.is_empty()
    }
}
