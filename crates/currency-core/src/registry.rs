//! # Format Registry
//!
//! Owns the language → rule table and the currency symbol table, and
//! produces [`ResolvedFormat`]s on demand.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Startup (single owner, &mut)          Runtime (shared, &)              │
//! │  ────────────────────────────          ─────────────────────            │
//! │  FormatRegistry::with_defaults()                                        │
//! │       │                                                                 │
//! │       ├── register("de", options)                                       │
//! │       ├── insert_currency("PLN", "zł")                                  │
//! │       └── set_default_language("de")                                    │
//! │                 │                                                       │
//! │                 ▼                                                       │
//! │           Arc<FormatRegistry> ──────►  resolve(lang, cur, places)       │
//! │                                        (any number of fields)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no global table: every caller holds a handle to the registry it
//! was configured with. Mutation takes `&mut self`, so a registry shared
//! behind an `Arc` is read-only by construction.

use std::collections::BTreeMap;
use tracing::{debug, warn};

use crate::error::{CoreError, CoreResult};
use crate::resolved::ResolvedFormat;
use crate::symbols::{CurrencySymbol, CurrencySymbolTable, CURRENCY_CZK};
use crate::types::{FormatOptions, FormatRule, RoundingMethod, SymbolPlacement};
use crate::validation::{validate_decimal_places, validate_language_code};

/// Czech.
pub const LANGUAGE_CS: &str = "cs";
/// English.
pub const LANGUAGE_EN: &str = "en";
/// Slovak.
pub const LANGUAGE_SK: &str = "sk";

/// Built-in rule for Czech and Slovak: `1 234,56 Kč`.
fn central_european_options() -> FormatOptions {
    FormatOptions::new()
        .with_digit_group_separator(' ')
        .with_decimal_character(',')
        .with_decimal_alternative('.')
        .with_placement(SymbolPlacement::Suffix)
        .with_rounding(RoundingMethod::HalfUpSymmetric)
        .with_symbol_separator(" ")
}

/// Built-in rule for English: `$1,234.56`.
fn english_options() -> FormatOptions {
    FormatOptions::new()
        .with_digit_group_separator(',')
        .with_decimal_character('.')
        .with_placement(SymbolPlacement::Prefix)
        .with_rounding(RoundingMethod::HalfUpSymmetric)
}

/// Language and currency formatting tables.
#[derive(Debug, Clone, Default)]
pub struct FormatRegistry {
    formats: BTreeMap<String, FormatRule>,
    symbols: CurrencySymbolTable,
    default_language: Option<String>,
    default_currency: Option<String>,
}

impl FormatRegistry {
    /// A registry with no rules, no symbols and no defaults.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A registry with the built-in `cs`, `en`, `sk` rules, the default
    /// symbol table, and `cs` / `CZK` as defaults.
    pub fn with_defaults() -> Self {
        let mut formats = BTreeMap::new();
        for (language, options) in [
            (LANGUAGE_CS, central_european_options()),
            (LANGUAGE_EN, english_options()),
            (LANGUAGE_SK, central_european_options()),
        ] {
            if let Ok(rule) = FormatRule::from_options(&options) {
                formats.insert(language.to_string(), rule);
            }
        }

        FormatRegistry {
            formats,
            symbols: CurrencySymbolTable::with_defaults(),
            default_language: Some(LANGUAGE_CS.to_string()),
            default_currency: Some(CURRENCY_CZK.to_string()),
        }
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Registers (or updates) the rule for `language`.
    ///
    /// `options` are layered over the rule already stored for the language,
    /// then the merged result is validated. On failure the stored rule is
    /// left as it was.
    ///
    /// ## Example
    /// ```rust
    /// use currency_core::{CoreError, FormatOptions, FormatRegistry};
    ///
    /// let mut registry = FormatRegistry::empty();
    ///
    /// // Missing decimalCharacter
    /// let err = registry
    ///     .register("de", FormatOptions::new().with_digit_group_separator('.'))
    ///     .unwrap_err();
    /// assert!(matches!(err, CoreError::Configuration { .. }));
    ///
    /// registry
    ///     .register(
    ///         "de",
    ///         FormatOptions::new()
    ///             .with_digit_group_separator('.')
    ///             .with_decimal_character(','),
    ///     )
    ///     .unwrap();
    /// assert!(registry.rule("de").is_some());
    /// ```
    pub fn register(&mut self, language: &str, options: FormatOptions) -> CoreResult<()> {
        validate_language_code(language).map_err(|e| CoreError::configuration(language, e))?;

        let merged = match self.formats.get(language) {
            Some(existing) => options.merged_over(existing.to_options()),
            None => options,
        };

        let rule = FormatRule::from_options(&merged).map_err(|e| {
            warn!(language, error = %e, "Rejected format rule");
            CoreError::configuration(language, e)
        })?;

        debug!(
            language,
            group = %rule.digit_group_separator(),
            decimal = %rule.decimal_character(),
            placement = %rule.currency_symbol_placement(),
            "Registered format rule"
        );
        self.formats.insert(language.to_string(), rule);
        Ok(())
    }

    /// Adds or replaces a currency glyph.
    pub fn insert_currency(&mut self, code: &str, symbol: &str) -> CoreResult<()> {
        self.symbols.insert(code, symbol)?;
        debug!(code, symbol, "Registered currency symbol");
        Ok(())
    }

    /// Sets the language used when none is given or the given one is unknown.
    pub fn set_default_language(&mut self, language: &str) -> CoreResult<()> {
        if !self.formats.contains_key(language) {
            return Err(CoreError::UnknownLanguage(language.to_string()));
        }
        self.default_language = Some(language.to_string());
        Ok(())
    }

    /// Sets the currency used when none is given or the given one is unknown.
    pub fn set_default_currency(&mut self, currency: &str) -> CoreResult<()> {
        if !self.symbols.contains(currency) {
            return Err(CoreError::UnknownCurrency(currency.to_string()));
        }
        self.default_currency = Some(currency.to_string());
        Ok(())
    }

    pub fn clear_default_language(&mut self) {
        self.default_language = None;
    }

    pub fn clear_default_currency(&mut self) {
        self.default_currency = None;
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// Resolves the format for a (language, currency) pair.
    ///
    /// ## Fallbacks
    /// ```text
    /// language given & registered  → that rule
    /// language given & unknown     → default language (warns), else UnknownLanguage
    /// language not given          → default language, else UnknownLanguage
    /// (the same for currency       → UnknownCurrency)
    /// ```
    ///
    /// `decimal_places_override` replaces the rule's `decimalPlaces`.
    pub fn resolve(
        &self,
        language: Option<&str>,
        currency: Option<&str>,
        decimal_places_override: Option<u8>,
    ) -> CoreResult<ResolvedFormat> {
        if let Some(places) = decimal_places_override {
            validate_decimal_places(places)?;
        }

        let (language, rule) = self.lookup_rule(language)?;
        let symbol = self.lookup_symbol(currency)?;

        Ok(ResolvedFormat::new(
            language,
            rule,
            symbol,
            decimal_places_override,
        ))
    }

    fn lookup_rule<'a>(&'a self, language: Option<&'a str>) -> CoreResult<(&'a str, &'a FormatRule)> {
        if let Some(requested) = language {
            if let Some(rule) = self.formats.get(requested) {
                return Ok((requested, rule));
            }
        }

        let fallback = self
            .default_language
            .as_deref()
            .and_then(|default| self.formats.get_key_value(default));

        match (language, fallback) {
            (Some(requested), Some((default, rule))) => {
                warn!(requested, fallback = %default, "Unknown language, using default");
                Ok((default.as_str(), rule))
            }
            (None, Some((default, rule))) => Ok((default.as_str(), rule)),
            (requested, None) => Err(CoreError::UnknownLanguage(
                requested.unwrap_or("<none>").to_string(),
            )),
        }
    }

    fn lookup_symbol(&self, currency: Option<&str>) -> CoreResult<&CurrencySymbol> {
        if let Some(requested) = currency {
            if let Some(symbol) = self.symbols.get(requested) {
                return Ok(symbol);
            }
        }

        let fallback = self
            .default_currency
            .as_deref()
            .and_then(|default| self.symbols.get(default));

        match (currency, fallback) {
            (Some(requested), Some(symbol)) => {
                warn!(requested, fallback = %symbol.code(), "Unknown currency, using default");
                Ok(symbol)
            }
            (None, Some(symbol)) => Ok(symbol),
            (requested, None) => Err(CoreError::UnknownCurrency(
                requested.unwrap_or("<none>").to_string(),
            )),
        }
    }

    /// The stored rule for `language`, without fallback.
    pub fn rule(&self, language: &str) -> Option<&FormatRule> {
        self.formats.get(language)
    }

    /// Registered languages in alphabetical order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.formats.keys().map(String::as_str)
    }

    pub fn symbols(&self) -> &CurrencySymbolTable {
        &self.symbols
    }

    pub fn default_language(&self) -> Option<&str> {
        self.default_language.as_deref()
    }

    pub fn default_currency(&self) -> Option<&str> {
        self.default_currency.as_deref()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
