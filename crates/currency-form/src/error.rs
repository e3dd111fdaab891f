//! # Form Error Types
//!
//! Errors raised by fields, containers and configuration loading.
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Form Error Categories                             │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Format         │  │   Field         │  │     Configuration       │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  Core(..)       │  │  InvalidValue   │  │  InvalidConfig          │ │
//! │  │                 │  │  DuplicateField │  │  Io / ConfigParse       │ │
//! │  │                 │  │  UnknownField   │  │  Serialization          │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use currency_core::CoreError;
use thiserror::Error;

/// Result type alias for form operations.
pub type FormResult<T> = Result<T, FormError>;

#[derive(Debug, Error)]
pub enum FormError {
    // =========================================================================
    // Format Errors
    // =========================================================================
    /// Registration or resolution failed in the format registry.
    #[error(transparent)]
    Core(#[from] CoreError),

    // =========================================================================
    // Field Errors
    // =========================================================================
    /// A value that has no text form was assigned to a field.
    #[error("Value must be scalar or null, {type_name} given in field '{field}'")]
    InvalidValue { field: String, type_name: String },

    /// Two fields with the same name in one container.
    #[error("Field '{0}' already exists")]
    DuplicateField(String),

    /// No field with this name.
    #[error("Field not found: {0}")]
    UnknownField(String),

    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Configuration values that cannot be applied.
    #[error("Invalid currency configuration: {0}")]
    InvalidConfig(String),

    /// Reading the config file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML for [`crate::config::CurrencyConfig`].
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Payload or value serialization failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = FormError::InvalidValue {
            field: "price".to_string(),
            type_name: "array".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Value must be scalar or null, array given in field 'price'"
        );

        let err: FormError = CoreError::UnknownCurrency("XYZ".to_string()).into();
        assert_eq!(err.to_string(), "Unknown currency: XYZ");
    }
}
