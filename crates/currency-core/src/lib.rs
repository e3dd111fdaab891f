//! # currency-core: Localized Amount Formatting and Parsing
//!
//! Pure logic behind the currency input widget: the per-language format
//! tables, the parser that turns typed amounts back into numbers, and the
//! payload for the client-side formatting library. No I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Currency Input Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │               Browser (autoNumeric)                             │   │
//! │  │    reads data-currency-input ──► formats while typing          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ form submit (raw text)                 │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    currency-form                                │   │
//! │  │    CurrencyField, FormContainer, config loading                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ currency-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ registry  │  │  parser   │  │ formatter │  │  payload  │  │   │
//! │  │   │  rules    │  │  raw→f64  │  │  f64→text │  │  → JSON   │  │   │
//! │  │   │  symbols  │  │           │  │           │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - FormatRule, FormatOptions and the enumerated options
//! - [`symbols`] - Currency code → glyph table
//! - [`registry`] - FormatRegistry: registration and resolution
//! - [`resolved`] - ResolvedFormat and symbol composition
//! - [`parser`] - Lenient amount parsing
//! - [`formatter`] - Display formatting
//! - [`payload`] - Client library options
//! - [`error`] / [`validation`] - Error types and rule validation
//!
//! ## Example Usage
//!
//! ```rust
//! use currency_core::{FormatRegistry, PlacementEncoding};
//!
//! let registry = FormatRegistry::with_defaults();
//! let format = registry.resolve(Some("cs"), Some("EUR"), None).unwrap();
//!
//! assert_eq!(format.format(1234.5), "1 234,50 €");
//! assert_eq!(format.parse("1 234,50 €"), 1234.5);
//!
//! let payload = format.client_options(PlacementEncoding::Letter);
//! assert_eq!(payload.currency_symbol, " €");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod formatter;
pub mod parser;
pub mod payload;
pub mod registry;
pub mod resolved;
pub mod symbols;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use formatter::format_amount;
pub use parser::{parse_amount, AmountParser};
pub use payload::{ClientOptions, PlacementEncoding};
pub use registry::{FormatRegistry, LANGUAGE_CS, LANGUAGE_EN, LANGUAGE_SK};
pub use resolved::{ResolvedFormat, DEFAULT_DECIMAL_PLACES};
pub use symbols::{
    CurrencySymbol, CurrencySymbolTable, CURRENCY_CZK, CURRENCY_EUR, CURRENCY_GBP, CURRENCY_USD,
};
pub use types::*;
