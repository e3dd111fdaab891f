//! # Validation Module
//!
//! Input validation for format rules and lookup codes.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Config file / host code                                      │
//! │  └── Loosely typed FormatOptions (strings, `false`)                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Codes: language tags, ISO 4217 currency codes                     │
//! │  └── Separators: single characters, pairwise distinct                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: FormatRule (strongly typed, always valid)                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use currency_core::validation::{validate_currency_code, validate_language_code};
//!
//! assert!(validate_language_code("cs").is_ok());
//! assert!(validate_currency_code("EUR").is_ok());
//! assert!(validate_currency_code("eur").is_err());
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest language tag accepted (BCP 47 practical limit).
const MAX_LANGUAGE_LEN: usize = 35;

/// Most fractional digits an `f64` amount can carry meaningfully.
pub const MAX_DECIMAL_PLACES: u8 = 15;

// =============================================================================
// Code Validators
// =============================================================================

/// Validates a language key (`cs`, `en`, `pt-BR`, ...).
///
/// ## Rules
/// - Must not be empty
/// - At most 35 characters
/// - ASCII letters, digits, hyphens and underscores only
pub fn validate_language_code(language: &str) -> ValidationResult<()> {
    if language.is_empty() {
        return Err(ValidationError::Required {
            field: "language".to_string(),
        });
    }

    if language.len() > MAX_LANGUAGE_LEN {
        return Err(ValidationError::InvalidFormat {
            field: "language".to_string(),
            reason: format!("must be at most {} characters", MAX_LANGUAGE_LEN),
        });
    }

    if !language
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "language".to_string(),
            reason: "must contain only ASCII letters, digits, hyphens, and underscores"
                .to_string(),
        });
    }

    Ok(())
}

/// Validates an ISO 4217 currency code.
///
/// ## Rules
/// - Exactly three ASCII uppercase letters (`CZK`, `EUR`)
pub fn validate_currency_code(code: &str) -> ValidationResult<()> {
    if code.is_empty() {
        return Err(ValidationError::Required {
            field: "currency".to_string(),
        });
    }

    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(ValidationError::InvalidFormat {
            field: "currency".to_string(),
            reason: format!("'{}' is not a three-letter uppercase ISO 4217 code", code),
        });
    }

    Ok(())
}

/// Validates a display glyph for a currency.
pub fn validate_currency_symbol(symbol: &str) -> ValidationResult<()> {
    if symbol.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "currencySymbol".to_string(),
        });
    }

    Ok(())
}

/// Validates a fixed fractional digit count.
///
/// ## Rules
/// - At most [`MAX_DECIMAL_PLACES`] (15)
pub fn validate_decimal_places(places: u8) -> ValidationResult<()> {
    if places > MAX_DECIMAL_PLACES {
        return Err(ValidationError::InvalidFormat {
            field: "decimalPlaces".to_string(),
            reason: format!("{} exceeds the maximum of {}", places, MAX_DECIMAL_PLACES),
        });
    }

    Ok(())
}

// =============================================================================
// Separator Validators
// =============================================================================

/// Extracts the single character of a separator option.
///
/// ## Example
/// ```rust
/// use currency_core::validation::single_char;
///
/// assert_eq!(single_char("decimalCharacter", ",").unwrap(), ',');
/// assert!(single_char("decimalCharacter", "").is_err());
/// assert!(single_char("decimalCharacter", ",,").is_err());
/// ```
pub fn single_char(field: &str, value: &str) -> ValidationResult<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        (None, _) => Err(ValidationError::Required {
            field: field.to_string(),
        }),
        (Some(_), Some(_)) => Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: format!("'{}' must be a single character", value),
        }),
    }
}

/// Validates the spacer placed between the amount and the currency glyph.
///
/// ## Rules
/// - Empty string (no spacer) or exactly one character
pub fn validate_symbol_separator(value: &str) -> ValidationResult<()> {
    if value.chars().count() > 1 {
        return Err(ValidationError::InvalidFormat {
            field: "currencySymbolSeparator".to_string(),
            reason: format!("'{}' must be empty or a single character", value),
        });
    }

    Ok(())
}

/// Checks that the group separator and both decimal characters are
/// pairwise distinct.
///
/// The amount parser tells group separators from decimal separators by
/// character, so a collision makes parsing ambiguous.
pub fn validate_distinct_separators(
    group: char,
    decimal: char,
    alternative: Option<char>,
) -> ValidationResult<()> {
    let conflict = |field: &str, other: &str, value: char| ValidationError::Conflict {
        field: field.to_string(),
        other: other.to_string(),
        value: value.to_string(),
    };

    if decimal == group {
        return Err(conflict("decimalCharacter", "digitGroupSeparator", decimal));
    }

    if let Some(alt) = alternative {
        if alt == group {
            return Err(conflict(
                "decimalCharacterAlternative",
                "digitGroupSeparator",
                alt,
            ));
        }
        if alt == decimal {
            return Err(conflict(
                "decimalCharacterAlternative",
                "decimalCharacter",
                alt,
            ));
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_language_code() {
        assert!(validate_language_code("cs").is_ok());
        assert!(validate_language_code("pt-BR").is_ok());
        assert!(validate_language_code("en_GB").is_ok());

        assert!(validate_language_code("").is_err());
        assert!(validate_language_code("c s").is_err());
        assert!(validate_language_code(&"a".repeat(36)).is_err());
    }

    #[test]
    fn test_validate_currency_code() {
        assert!(validate_currency_code("CZK").is_ok());
        assert!(validate_currency_code("GBP").is_ok());

        assert!(validate_currency_code("").is_err());
        assert!(validate_currency_code("czk").is_err());
        assert!(validate_currency_code("EURO").is_err());
        assert!(validate_currency_code("E1R").is_err());
    }

    #[test]
    fn test_validate_decimal_places() {
        assert!(validate_decimal_places(0).is_ok());
        assert!(validate_decimal_places(2).is_ok());
        assert!(validate_decimal_places(15).is_ok());
        assert!(validate_decimal_places(16).is_err());
    }

    #[test]
    fn test_single_char() {
        assert_eq!(single_char("digitGroupSeparator", " ").unwrap(), ' ');
        assert_eq!(single_char("decimalCharacter", "٫").unwrap(), '٫');
        assert_eq!(
            single_char("decimalCharacter", ""),
            Err(ValidationError::Required {
                field: "decimalCharacter".to_string()
            })
        );
        assert!(single_char("decimalCharacter", "..").is_err());
    }

    #[test]
    fn test_validate_symbol_separator() {
        assert!(validate_symbol_separator("").is_ok());
        assert!(validate_symbol_separator(" ").is_ok());
        assert!(validate_symbol_separator("  ").is_err());
    }

    #[test]
    fn test_validate_distinct_separators() {
        assert!(validate_distinct_separators(' ', ',', Some('.')).is_ok());
        assert!(validate_distinct_separators(',', '.', None).is_ok());

        assert!(validate_distinct_separators(',', ',', None).is_err());
        assert!(validate_distinct_separators(' ', ',', Some(' ')).is_err());
        assert!(validate_distinct_separators(' ', ',', Some(',')).is_err());
    }
}
