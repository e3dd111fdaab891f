//! # currency-form: Localized Currency Form Fields
//!
//! Binds the format registry from `currency-core` to form fields.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Currency Form Layer                              │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  CurrencyConfig (startup, once)                                  │  │
//! │  │  defaults → TOML file → CURRENCY_* env → build_registry()        │  │
//! │  └────────────────────────────┬─────────────────────────────────────┘  │
//! │                               │ Arc<FormatRegistry> (read-only)         │
//! │                               ▼                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  FormContainer                                                   │  │
//! │  │  add_currency_field()   submit()   controls()                    │  │
//! │  └────────────────────────────┬─────────────────────────────────────┘  │
//! │                               │                                         │
//! │                               ▼                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  CurrencyField                                                   │  │
//! │  │  raw text (redisplay)  ·  parsed amount  ·  client payload attr  │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//! - [`config`] - Startup configuration and registry construction
//! - [`container`] - Named field sets and submission
//! - [`error`] - Form error types
//! - [`field`] - The currency field and value coercion
//!
//! ## Usage
//!
//! ```rust
//! use currency_form::CurrencyConfig;
//! use serde_json::json;
//!
//! let config = CurrencyConfig::default();
//! let mut form = config.build_container().unwrap();
//! form.add_currency_field("price", Some("Price"), None, None).unwrap();
//!
//! let amounts = form
//!     .submit(json!({"price": "1 234,50 Kč"}).as_object().unwrap())
//!     .unwrap();
//! assert_eq!(amounts["price"], 1234.5);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod container;
pub mod error;
pub mod field;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::CurrencyConfig;
pub use container::{FormContainer, DEFAULT_ATTRIBUTE_NAME};
pub use error::{FormError, FormResult};
pub use field::{Control, CurrencyField};
