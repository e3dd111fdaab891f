//! # Currency Symbols
//!
//! Lookup table from ISO 4217 code to display glyph.
//!
//! ```text
//! ┌──────┬────────┐
//! │ Code │ Symbol │
//! ├──────┼────────┤
//! │ CZK  │  Kč    │
//! │ EUR  │  €     │
//! │ USD  │  $     │
//! │ GBP  │  £     │
//! └──────┴────────┘
//! ```
//!
//! The host application can add or replace entries before the registry is
//! shared; see [`CurrencySymbolTable::insert`].

use std::collections::BTreeMap;

use crate::types::CurrencyExpression;
use crate::validation::{validate_currency_code, validate_currency_symbol, ValidationResult};

/// Czech koruna.
pub const CURRENCY_CZK: &str = "CZK";
/// Euro.
pub const CURRENCY_EUR: &str = "EUR";
/// US dollar.
pub const CURRENCY_USD: &str = "USD";
/// Pound sterling.
pub const CURRENCY_GBP: &str = "GBP";

/// One table entry: the glyph and the ISO code it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencySymbol {
    code: String,
    symbol: String,
}

impl CurrencySymbol {
    /// ISO 4217 code (`EUR`).
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Display glyph (`€`).
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// The marker to display for `expression`, empty for `false`.
    pub fn marker(&self, expression: CurrencyExpression) -> &str {
        match expression {
            CurrencyExpression::Symbol => &self.symbol,
            CurrencyExpression::Code => &self.code,
            CurrencyExpression::None => "",
        }
    }
}

/// Currency code → symbol table.
#[derive(Debug, Clone, Default)]
pub struct CurrencySymbolTable {
    entries: BTreeMap<String, CurrencySymbol>,
}

impl CurrencySymbolTable {
    /// An empty table.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A table seeded with CZK, EUR, USD and GBP.
    pub fn with_defaults() -> Self {
        let mut table = Self::empty();
        for (code, symbol) in [
            (CURRENCY_CZK, "Kč"),
            (CURRENCY_EUR, "€"),
            (CURRENCY_USD, "$"),
            (CURRENCY_GBP, "£"),
        ] {
            table.entries.insert(
                code.to_string(),
                CurrencySymbol {
                    code: code.to_string(),
                    symbol: symbol.to_string(),
                },
            );
        }
        table
    }

    /// Adds or replaces the glyph for `code`.
    ///
    /// ## Example
    /// ```rust
    /// use currency_core::CurrencySymbolTable;
    ///
    /// let mut table = CurrencySymbolTable::with_defaults();
    /// table.insert("PLN", "zł").unwrap();
    /// assert_eq!(table.get("PLN").unwrap().symbol(), "zł");
    /// assert!(table.insert("pln", "zł").is_err());
    /// ```
    pub fn insert(&mut self, code: &str, symbol: &str) -> ValidationResult<()> {
        validate_currency_code(code)?;
        validate_currency_symbol(symbol)?;

        self.entries.insert(
            code.to_string(),
            CurrencySymbol {
                code: code.to_string(),
                symbol: symbol.to_string(),
            },
        );
        Ok(())
    }

    pub fn get(&self, code: &str) -> Option<&CurrencySymbol> {
        self.entries.get(code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.entries.contains_key(code)
    }

    /// Registered codes in alphabetical order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let table = CurrencySymbolTable::with_defaults();
        assert_eq!(table.len(), 4);
        assert_eq!(table.get("CZK").unwrap().symbol(), "Kč");
        assert_eq!(table.get("GBP").unwrap().symbol(), "£");
        assert_eq!(table.codes().collect::<Vec<_>>(), ["CZK", "EUR", "GBP", "USD"]);
        assert!(CurrencySymbolTable::empty().is_empty());
    }

    #[test]
    fn test_marker_per_expression() {
        let table = CurrencySymbolTable::with_defaults();
        let eur = table.get("EUR").unwrap();
        assert_eq!(eur.marker(CurrencyExpression::Symbol), "€");
        assert_eq!(eur.marker(CurrencyExpression::Code), "EUR");
        assert_eq!(eur.marker(CurrencyExpression::None), "");
    }

    #[test]
    fn test_insert_replaces() {
        let mut table = CurrencySymbolTable::with_defaults();
        table.insert("USD", "US$").unwrap();
        assert_eq!(table.get("USD").unwrap().symbol(), "US$");
        assert_eq!(table.len(), 4);

        assert!(table.insert("CHF", " ").is_err());
        assert!(!table.contains("CHF"));
    }
}
