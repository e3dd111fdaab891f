//! # Amount Formatter
//!
//! Renders an amount the way the client-side library displays it, so that
//! server-rendered values and redisplayed submissions match what users see
//! while typing.
//!
//! ```text
//! 1234567.891  ──round(S, 2)──►  1234567.89
//!              ──group(" ")───►  "1 234 567" + "," + "89"
//!              ──symbol(s)────►  "1 234 567,89 Kč"
//! ```

use crate::resolved::ResolvedFormat;
use crate::types::SymbolPlacement;

/// Formats `amount` according to `format`.
///
/// ## Rules
/// - Rounded to the effective decimal places with the rule's rounding method
/// - Integer digits grouped by three with the group separator
/// - Trailing fractional zeros kept only when decimal padding is allowed
/// - A negative sign leads the output, before any prefix marker
///
/// ## Example
/// ```rust
/// use currency_core::{format_amount, FormatRegistry};
///
/// let registry = FormatRegistry::with_defaults();
///
/// let cs = registry.resolve(Some("cs"), Some("CZK"), None).unwrap();
/// assert_eq!(format_amount(1234.5, &cs), "1 234,50 Kč");
///
/// let en = registry.resolve(Some("en"), Some("USD"), None).unwrap();
/// assert_eq!(format_amount(-1234567.891, &en), "-$1,234,567.89");
/// ```
pub fn format_amount(amount: f64, format: &ResolvedFormat) -> String {
    let rule = format.rule();
    let places = format.effective_decimal_places();
    let rounded = rule.rounding_method().round(amount, places);

    let digits = format!("{:.*}", usize::from(places), rounded.abs());
    let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), ""));
    let fraction = if rule.allow_decimal_padding() {
        fraction
    } else {
        fraction.trim_end_matches('0')
    };

    let mut number = group_digits(integer, format.digit_group_separator());
    if !fraction.is_empty() {
        number.push(format.decimal_character());
        number.push_str(fraction);
    }

    let sign = if rounded < 0.0 { "-" } else { "" };
    match format.placement() {
        SymbolPlacement::Prefix => format!("{}{}{}", sign, format.currency_symbol(), number),
        SymbolPlacement::Suffix => format!("{}{}{}", sign, number, format.currency_symbol()),
    }
}

/// Inserts `separator` between every group of three integer digits.
fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * separator.len_utf8());

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }

    out
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::FormatRegistry;
    use crate::types::{CurrencyExpression, FormatOptions, RoundingMethod};

    fn format(language: &str, currency: &str, places: Option<u8>) -> ResolvedFormat {
        FormatRegistry::with_defaults()
            .resolve(Some(language), Some(currency), places)
            .unwrap()
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits("1", ' '), "1");
        assert_eq!(group_digits("123", ' '), "123");
        assert_eq!(group_digits("1234", ' '), "1 234");
        assert_eq!(group_digits("1234567", ','), "1,234,567");
        assert_eq!(group_digits("123456", ','), "123,456");
    }

    #[test]
    fn test_default_formats() {
        assert_eq!(format_amount(1234.56, &format("cs", "CZK", None)), "1 234,56 Kč");
        assert_eq!(format_amount(1234.56, &format("sk", "EUR", None)), "1 234,56 €");
        assert_eq!(format_amount(1234.56, &format("en", "GBP", None)), "£1,234.56");
        assert_eq!(format_amount(0.0, &format("en", "USD", None)), "$0.00");
    }

    #[test]
    fn test_decimal_places_and_rounding() {
        assert_eq!(format_amount(1234.5, &format("cs", "CZK", Some(0))), "1 235 Kč");
        assert_eq!(format_amount(2.345, &format("en", "USD", Some(2))), "$2.35");
        assert_eq!(format_amount(1.5, &format("en", "USD", Some(3))), "$1.500");
    }

    #[test]
    fn test_negative_amounts() {
        assert_eq!(format_amount(-5.5, &format("cs", "CZK", None)), "-5,50 Kč");
        assert_eq!(format_amount(-0.001, &format("en", "USD", None)), "$0.00");
    }

    #[test]
    fn test_rule_rounding_and_padding() {
        let mut registry = FormatRegistry::with_defaults();
        registry
            .register(
                "en",
                FormatOptions::new()
                    .with_rounding(RoundingMethod::Floor)
                    .with_decimal_padding(false)
                    .with_expression(CurrencyExpression::Code),
            )
            .unwrap();
        let en = registry.resolve(Some("en"), Some("USD"), None).unwrap();

        assert_eq!(format_amount(9.999, &en), "USD9.99");
        assert_eq!(format_amount(10.5, &en), "USD10.5");
        assert_eq!(format_amount(10.0, &en), "USD10");
    }

    #[test]
    fn test_parse_round_trip_for_every_default_language() {
        let samples = [0.0, 7.0, 999.0, 1000.0, 1234.0, 1234.5, 1234.56, 1234567.89, 1000000.0];
        for (language, currency) in [("cs", "CZK"), ("sk", "EUR"), ("en", "USD")] {
            for places in [None, Some(0), Some(2), Some(3)] {
                let resolved = format(language, currency, places);
                for &n in &samples {
                    let expected = RoundingMethod::HalfUpSymmetric
                        .round(n, resolved.effective_decimal_places());
                    let shown = resolved.format(n);
                    assert_eq!(
                        resolved.parse(&shown),
                        expected,
                        "{} {:?}: {} shown as {:?}",
                        language,
                        places,
                        n,
                        shown
                    );
                }
            }
        }
    }
}
