//! # Resolved Format
//!
//! The rule for one language combined with one currency.
//!
//! ## Symbol Composition
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  marker = symbol | code | ""          (per currencyExpression)         │
//! │                                                                         │
//! │  marker empty?  ──yes──► currencySymbol = ""                           │
//! │       │                                                                 │
//! │       no                                                                │
//! │       ├── prefix ──► marker + separator        "€ "                    │
//! │       └── suffix ──► separator + marker        " €"                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Composition happens once, here, so the client payload, the formatter and
//! the parser all see the same `currencySymbol`.

use crate::formatter::format_amount;
use crate::parser::parse_amount;
use crate::payload::{ClientOptions, PlacementEncoding};
use crate::symbols::CurrencySymbol;
use crate::types::{FormatRule, SymbolPlacement};

/// Library default for fractional digits when a rule leaves them unset.
pub const DEFAULT_DECIMAL_PLACES: u8 = 2;

/// Composes the displayed currency marker with its spacer.
///
/// ## Example
/// ```rust
/// use currency_core::resolved::compose_symbol;
/// use currency_core::SymbolPlacement;
///
/// assert_eq!(compose_symbol("€", " ", SymbolPlacement::Suffix), " €");
/// assert_eq!(compose_symbol("€", " ", SymbolPlacement::Prefix), "€ ");
/// assert_eq!(compose_symbol("", " ", SymbolPlacement::Prefix), "");
/// ```
pub fn compose_symbol(marker: &str, separator: &str, placement: SymbolPlacement) -> String {
    if marker.is_empty() {
        return String::new();
    }

    match placement {
        SymbolPlacement::Prefix => format!("{}{}", marker, separator),
        SymbolPlacement::Suffix => format!("{}{}", separator, marker),
    }
}

/// A format ready for display and parsing.
///
/// Computed fresh for each field; never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFormat {
    language: String,
    currency: String,
    rule: FormatRule,
    currency_symbol: String,
    decimal_places: Option<u8>,
}

impl ResolvedFormat {
    /// Combines `rule` with `currency`, applying an optional decimal places
    /// override. The override is expected to be validated by the caller.
    pub fn new(
        language: &str,
        rule: &FormatRule,
        currency: &CurrencySymbol,
        decimal_places_override: Option<u8>,
    ) -> Self {
        let marker = currency.marker(rule.currency_expression());
        let currency_symbol = compose_symbol(
            marker,
            rule.currency_symbol_separator(),
            rule.currency_symbol_placement(),
        );

        ResolvedFormat {
            language: language.to_string(),
            currency: currency.code().to_string(),
            rule: rule.clone(),
            currency_symbol,
            decimal_places: decimal_places_override.or(rule.decimal_places()),
        }
    }

    /// Language key the rule was resolved for.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// ISO code of the resolved currency.
    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn rule(&self) -> &FormatRule {
        &self.rule
    }

    /// Marker including its spacer, e.g. `" Kč"` or `"$"`.
    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    /// Fixed fractional digits; `None` means the library default.
    pub fn decimal_places(&self) -> Option<u8> {
        self.decimal_places
    }

    /// Fractional digits used for display formatting.
    pub fn effective_decimal_places(&self) -> u8 {
        self.decimal_places.unwrap_or(DEFAULT_DECIMAL_PLACES)
    }

    #[inline]
    pub fn digit_group_separator(&self) -> char {
        self.rule.digit_group_separator()
    }

    #[inline]
    pub fn decimal_character(&self) -> char {
        self.rule.decimal_character()
    }

    #[inline]
    pub fn decimal_character_alternative(&self) -> Option<char> {
        self.rule.decimal_character_alternative()
    }

    #[inline]
    pub fn placement(&self) -> SymbolPlacement {
        self.rule.currency_symbol_placement()
    }

    /// Parses user-typed text with this format. See [`parse_amount`].
    pub fn parse(&self, raw: &str) -> f64 {
        parse_amount(raw, self)
    }

    /// Formats an amount for redisplay. See [`format_amount`].
    pub fn format(&self, amount: f64) -> String {
        format_amount(amount, self)
    }

    /// Shapes the client-side library payload.
    pub fn client_options(&self, encoding: PlacementEncoding) -> ClientOptions {
        ClientOptions::from_format(self, encoding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::CurrencySymbolTable;
    use crate::types::{CurrencyExpression, FormatOptions};

    fn rule(placement: SymbolPlacement, expression: CurrencyExpression) -> FormatRule {
        FormatRule::from_options(
            &FormatOptions::new()
                .with_digit_group_separator(' ')
                .with_decimal_character(',')
                .with_placement(placement)
                .with_symbol_separator(" ")
                .with_expression(expression),
        )
        .unwrap()
    }

    #[test]
    fn test_compose_suffix_and_prefix() {
        let table = CurrencySymbolTable::with_defaults();
        let eur = table.get("EUR").unwrap();

        let suffix = ResolvedFormat::new(
            "cs",
            &rule(SymbolPlacement::Suffix, CurrencyExpression::Symbol),
            eur,
            None,
        );
        assert_eq!(suffix.currency_symbol(), " €");

        let prefix = ResolvedFormat::new(
            "cs",
            &rule(SymbolPlacement::Prefix, CurrencyExpression::Symbol),
            eur,
            None,
        );
        assert_eq!(prefix.currency_symbol(), "€ ");
    }

    #[test]
    fn test_code_and_hidden_expression() {
        let table = CurrencySymbolTable::with_defaults();
        let czk = table.get("CZK").unwrap();

        let code = ResolvedFormat::new(
            "cs",
            &rule(SymbolPlacement::Suffix, CurrencyExpression::Code),
            czk,
            None,
        );
        assert_eq!(code.currency_symbol(), " CZK");

        let hidden = ResolvedFormat::new(
            "cs",
            &rule(SymbolPlacement::Suffix, CurrencyExpression::None),
            czk,
            None,
        );
        assert_eq!(hidden.currency_symbol(), "");
    }

    #[test]
    fn test_decimal_places_override() {
        let table = CurrencySymbolTable::with_defaults();
        let czk = table.get("CZK").unwrap();
        let base = rule(SymbolPlacement::Suffix, CurrencyExpression::Symbol);

        let default = ResolvedFormat::new("cs", &base, czk, None);
        assert_eq!(default.decimal_places(), None);
        assert_eq!(default.effective_decimal_places(), DEFAULT_DECIMAL_PLACES);

        let overridden = ResolvedFormat::new("cs", &base, czk, Some(0));
        assert_eq!(overridden.decimal_places(), Some(0));
        assert_eq!(overridden.effective_decimal_places(), 0);
    }
}
