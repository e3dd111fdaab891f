//! # Amount Parser
//!
//! Turns a human-typed, locale-formatted amount back into a number.
//!
//! ## Algorithm
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  raw: "1.234.567,89 Kč"     (cs: group " ", decimal ",", alt ".")       │
//! │                                                                         │
//! │  1. keep [0-9.,]            → "1.234.567,89"                            │
//! │  2. keep [0-9]              → "123456789"                               │
//! │  3. separators - 1          → 3 - 1 = 2 group separators                │
//! │  4. drop first 2 separators → "1234567,89"                              │
//! │  5. drop group separator                                               │
//! │     before >= 3 final digits → "1234567,89"                             │
//! │  6. "," → "."               → "1234567.89"                              │
//! │  7. parse                   → 1234567.89                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The last separator typed is always taken as the decimal separator,
//! except in step 5: a lone group separator followed by three or more
//! digits (`"1,234"` in `en`) is a thousands marker.
//!
//! ## Leniency
//! Parsing never fails. Empty input, or input without digits, yields `0.0`.
//! Callers that need strict validation must check the result themselves.
//!
//! ## Known Limitations
//! - Step 1 keeps only `.` and `,` as separator candidates, whatever the
//!   rule configures. A rule whose separators are other characters (an
//!   apostrophe group separator, an Arabic decimal sign) has them stripped
//!   together with the currency marker.
//! - A leading minus sign is stripped with everything else; parsed amounts
//!   are never negative.

use tracing::trace;

use crate::resolved::ResolvedFormat;

/// Separator candidates kept by step 1.
fn is_kept(c: char) -> bool {
    c.is_ascii_digit() || c == '.' || c == ','
}

/// Parses `raw` according to `format`.
///
/// ## Example
/// ```rust
/// use currency_core::{parse_amount, FormatRegistry};
///
/// let registry = FormatRegistry::with_defaults();
///
/// let cs = registry.resolve(Some("cs"), Some("CZK"), None).unwrap();
/// assert_eq!(parse_amount("1 234,56 Kč", &cs), 1234.56);
///
/// let en = registry.resolve(Some("en"), Some("USD"), None).unwrap();
/// assert_eq!(parse_amount("$1,234.56", &en), 1234.56);
/// assert_eq!(parse_amount("", &en), 0.0);
/// ```
pub fn parse_amount(raw: &str, format: &ResolvedFormat) -> f64 {
    let clean: Vec<char> = raw.chars().filter(|c| is_kept(*c)).collect();
    let digit_count = clean.iter().filter(|c| c.is_ascii_digit()).count();

    // All separators but the last one are group separators.
    let mut to_erase = (clean.len() - digit_count).saturating_sub(1);

    let group = format.digit_group_separator();
    let decimal = format.decimal_character();
    let alternative = format.decimal_character_alternative();
    let is_separator = |c: char| c == decimal || c == group || Some(c) == alternative;

    let mut kept: Vec<char> = Vec::with_capacity(clean.len());
    for c in clean {
        if to_erase > 0 && is_separator(c) {
            to_erase -= 1;
            continue;
        }
        kept.push(c);
    }

    let normalized: String = strip_thousands_marker(&kept, group)
        .into_iter()
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    let amount = leading_number(&normalized);
    trace!(raw, %normalized, amount, "Parsed amount");
    amount
}

/// Drops every `group` character followed only by digits, at least three
/// of them, up to the end of the input.
fn strip_thousands_marker(chars: &[char], group: char) -> Vec<char> {
    let mut trailing_digits = 0usize;
    let mut only_digits_after = true;
    let mut drop = vec![false; chars.len()];

    for (i, &c) in chars.iter().enumerate().rev() {
        if c == group && only_digits_after && trailing_digits >= 3 {
            drop[i] = true;
        }
        if c.is_ascii_digit() {
            trailing_digits += 1;
        } else {
            only_digits_after = false;
        }
    }

    chars
        .iter()
        .zip(drop)
        .filter(|(_, dropped)| !dropped)
        .map(|(&c, _)| c)
        .collect()
}

/// Reads the longest numeric prefix, `0.0` when there is none.
fn leading_number(s: &str) -> f64 {
    let end = s.match_indices('.').nth(1).map_or(s.len(), |(i, _)| i);
    s[..end].parse().unwrap_or(0.0)
}

/// Parser bound to one resolved format.
///
/// Convenient when one format parses many submitted values.
#[derive(Debug, Clone, Copy)]
pub struct AmountParser<'a> {
    format: &'a ResolvedFormat,
}

impl<'a> AmountParser<'a> {
    pub fn new(format: &'a ResolvedFormat) -> Self {
        AmountParser { format }
    }

    pub fn format(&self) -> &'a ResolvedFormat {
        self.format
    }

    pub fn parse(&self, raw: &str) -> f64 {
        parse_amount(raw, self.format)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::FormatRegistry;

    fn format(language: &str, currency: &str) -> ResolvedFormat {
        FormatRegistry::with_defaults()
            .resolve(Some(language), Some(currency), None)
            .unwrap()
    }

    #[test]
    fn test_czech_grouping() {
        let cs = format("cs", "CZK");
        assert_eq!(parse_amount("1 234,56", &cs), 1234.56);
        assert_eq!(parse_amount("1 234 567,89 Kč", &cs), 1234567.89);
    }

    #[test]
    fn test_english_grouping() {
        let en = format("en", "USD");
        assert_eq!(parse_amount("1,234.56", &en), 1234.56);
        assert_eq!(parse_amount("$1,234,567.89", &en), 1234567.89);
    }

    #[test]
    fn test_no_separators_is_unchanged() {
        for (language, currency) in [("cs", "CZK"), ("en", "USD"), ("sk", "EUR")] {
            assert_eq!(parse_amount("1234", &format(language, currency)), 1234.0);
        }
    }

    #[test]
    fn test_empty_and_garbage_is_zero() {
        let cs = format("cs", "CZK");
        assert_eq!(parse_amount("", &cs), 0.0);
        assert_eq!(parse_amount("Kč", &cs), 0.0);
        assert_eq!(parse_amount("abc", &cs), 0.0);
        assert_eq!(parse_amount(",", &cs), 0.0);
    }

    #[test]
    fn test_alternative_decimal_character() {
        let cs = format("cs", "CZK");
        // "." typed as decimal separator
        assert_eq!(parse_amount("1 234.56", &cs), 1234.56);
        // "." typed as thousands separator, "," as decimal
        assert_eq!(parse_amount("1.234,56", &cs), 1234.56);
        assert_eq!(parse_amount("1,5", &cs), 1.5);
    }

    #[test]
    fn test_single_group_separator_before_three_digits() {
        let en = format("en", "USD");
        assert_eq!(parse_amount("1,234", &en), 1234.0);
        assert_eq!(parse_amount("1,23", &en), 1.23);
        assert_eq!(parse_amount("12,5", &en), 12.5);
    }

    #[test]
    fn test_last_separator_is_decimal() {
        let en = format("en", "USD");
        assert_eq!(parse_amount("1.234.567", &en), 1234.567);
    }

    #[test]
    fn test_sign_is_stripped() {
        let en = format("en", "USD");
        assert_eq!(parse_amount("-15.50", &en), 15.5);
    }

    #[test]
    fn test_bound_parser() {
        let cs = format("cs", "CZK");
        let parser = AmountParser::new(&cs);
        assert_eq!(parser.parse("2 000 Kč"), 2000.0);
        assert_eq!(parser.format().language(), "cs");
    }

    #[test]
    fn test_strip_thousands_marker() {
        let chars: Vec<char> = "1,234".chars().collect();
        assert_eq!(strip_thousands_marker(&chars, ','), vec!['1', '2', '3', '4']);

        let chars: Vec<char> = "1,23".chars().collect();
        assert_eq!(strip_thousands_marker(&chars, ','), chars);
    }

    #[test]
    fn test_leading_number() {
        assert_eq!(leading_number("12.5"), 12.5);
        assert_eq!(leading_number("1.2.3"), 1.2);
        assert_eq!(leading_number("."), 0.0);
        assert_eq!(leading_number(""), 0.0);
    }
}
