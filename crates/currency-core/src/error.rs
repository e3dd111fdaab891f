//! # Error Types
//!
//! Domain-specific error types for currency-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  currency-core errors (this file)                                      │
//! │  ├── CoreError        - Registration and lookup failures               │
//! │  └── ValidationError  - Single-field rule/code validation failures     │
//! │                                                                         │
//! │  currency-form errors (separate crate)                                 │
//! │  └── FormError        - Value coercion, config loading, fields         │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → FormError → caller                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What Never Errors
//! Amount parsing is lenient on purpose: malformed text degrades to `0.0`
//! instead of returning an error. See [`crate::parser`].

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Registry errors.
///
/// Raised when registering a format rule or resolving a format for a
/// (language, currency) pair.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A format rule failed validation at registration time.
    ///
    /// ## When This Occurs
    /// - `digitGroupSeparator` or `decimalCharacter` missing after merging
    /// - Unknown `currencyExpression` / `currencySymbolPlacement` / `roundingMethod`
    /// - Separators that are not single characters or collide with each other
    ///
    /// The previously stored rule for the language is left untouched.
    #[error("Invalid format configuration for language '{language}': {source}")]
    Configuration {
        language: String,
        #[source]
        source: ValidationError,
    },

    /// No rule is registered for the language and no default applies.
    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    /// No symbol is registered for the currency and no default applies.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Wraps a validation failure as a configuration error for `language`.
    pub fn configuration(language: impl Into<String>, source: ValidationError) -> Self {
        CoreError::Configuration {
            language: language.into(),
            source,
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These describe a single offending field; [`CoreError`] adds the context
/// (which language or which currency) they occurred in.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Invalid format (e.g., multi-character separator, lowercase currency code).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },

    /// Two fields share a value they must not share.
    #[error("{field} must differ from {other} (both are '{value}')")]
    Conflict {
        field: String,
        other: String,
        value: String,
    },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::UnknownCurrency("XYZ".to_string());
        assert_eq!(err.to_string(), "Unknown currency: XYZ");

        let err = CoreError::configuration(
            "cs",
            ValidationError::Required {
                field: "decimalCharacter".to_string(),
            },
        );
        assert_eq!(
            err.to_string(),
            "Invalid format configuration for language 'cs': decimalCharacter is required"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Conflict {
            field: "decimalCharacter".to_string(),
            other: "digitGroupSeparator".to_string(),
            value: ",".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "decimalCharacter must differ from digitGroupSeparator (both are ',')"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "currency".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
