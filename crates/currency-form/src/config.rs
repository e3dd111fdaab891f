//! # Currency Configuration
//!
//! Builds the process-wide [`FormatRegistry`] once at startup.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     CURRENCY_DEFAULT_LANGUAGE=en                                       │
//! │     CURRENCY_DEFAULT_CURRENCY=USD                                      │
//! │     CURRENCY_ATTRIBUTE_NAME=data-options                               │
//! │     CURRENCY_PLACEMENT_ENCODING=word                                   │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     passed explicitly, e.g. --config currency.toml                     │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     built-in cs/en/sk rules, CZK/EUR/USD/GBP, cs + CZK defaults        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! default_language = "de"
//! default_currency = "EUR"
//! attribute_name = "data-currency-input"
//! placement_encoding = "letter"   # letter | word
//!
//! [symbols]
//! PLN = "zł"
//!
//! [formats.de]
//! digit_group_separator = "."
//! decimal_character = ","
//! currency_symbol_placement = "s"
//! currency_symbol_separator = " "
//! decimal_places = 2
//! ```
//!
//! Format entries are merged over the built-in rule of the same language
//! (when `include_builtin` is on), so `[formats.cs]` with only
//! `decimal_places = 0` keeps the rest of the Czech rule.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, warn};

use currency_core::validation::{validate_currency_code, validate_language_code};
use currency_core::{FormatOptions, FormatRegistry, PlacementEncoding, CURRENCY_CZK, LANGUAGE_CS};

use crate::container::{FormContainer, DEFAULT_ATTRIBUTE_NAME};
use crate::error::{FormError, FormResult};

fn default_language() -> String {
    LANGUAGE_CS.to_string()
}

fn default_currency() -> String {
    CURRENCY_CZK.to_string()
}

fn default_attribute_name() -> String {
    DEFAULT_ATTRIBUTE_NAME.to_string()
}

fn default_true() -> bool {
    true
}

/// Startup configuration for the format registry and form containers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyConfig {
    /// Language used when a field does not name one.
    #[serde(default = "default_language")]
    pub default_language: String,

    /// Currency used when a field does not name one.
    #[serde(default = "default_currency")]
    pub default_currency: String,

    /// Data attribute carrying the client payload.
    #[serde(default = "default_attribute_name")]
    pub attribute_name: String,

    /// `letter` (p/s) or `word` (prefix/suffix).
    #[serde(default)]
    pub placement_encoding: PlacementEncoding,

    /// Start from the built-in cs/en/sk rules and symbol table.
    #[serde(default = "default_true")]
    pub include_builtin: bool,

    /// Extra or replacement currency glyphs, keyed by ISO code.
    #[serde(default)]
    pub symbols: BTreeMap<String, String>,

    /// Extra or overriding format rules, keyed by language.
    #[serde(default)]
    pub formats: BTreeMap<String, FormatOptions>,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        CurrencyConfig {
            default_language: default_language(),
            default_currency: default_currency(),
            attribute_name: default_attribute_name(),
            placement_encoding: PlacementEncoding::default(),
            include_builtin: true,
            symbols: BTreeMap::new(),
            formats: BTreeMap::new(),
        }
    }
}

impl CurrencyConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file, if a path is given and exists
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> FormResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path {
            if path.exists() {
                info!(?path, "Loading currency config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = Self::from_toml_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load currency config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Parses a TOML document.
    pub fn from_toml_str(contents: &str) -> FormResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Applies `CURRENCY_*` environment variables.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from any key → value source.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(language) = lookup("CURRENCY_DEFAULT_LANGUAGE") {
            debug!(language = %language, "Overriding default language from environment");
            self.default_language = language;
        }

        if let Some(currency) = lookup("CURRENCY_DEFAULT_CURRENCY") {
            debug!(currency = %currency, "Overriding default currency from environment");
            self.default_currency = currency;
        }

        if let Some(name) = lookup("CURRENCY_ATTRIBUTE_NAME") {
            self.attribute_name = name;
        }

        if let Some(encoding) = lookup("CURRENCY_PLACEMENT_ENCODING") {
            match encoding.parse() {
                Ok(parsed) => self.placement_encoding = parsed,
                Err(e) => warn!(encoding = %encoding, error = %e, "Ignoring placement encoding"),
            }
        }
    }

    /// Validates the configuration.
    ///
    /// Format rules themselves are validated by [`Self::build_registry`],
    /// where they are merged over the built-in rules.
    pub fn validate(&self) -> FormResult<()> {
        validate_language_code(&self.default_language)
            .map_err(|e| FormError::InvalidConfig(format!("default_language: {}", e)))?;
        validate_currency_code(&self.default_currency)
            .map_err(|e| FormError::InvalidConfig(format!("default_currency: {}", e)))?;

        if !self.attribute_name.starts_with("data-") || self.attribute_name.len() == "data-".len()
        {
            return Err(FormError::InvalidConfig(format!(
                "attribute_name must be a data-* attribute, got: '{}'",
                self.attribute_name
            )));
        }

        Ok(())
    }

    /// Builds the registry this configuration describes.
    ///
    /// Meant to run once before any request is served; the result is then
    /// shared read-only.
    pub fn build_registry(&self) -> FormResult<FormatRegistry> {
        let mut registry = if self.include_builtin {
            FormatRegistry::with_defaults()
        } else {
            FormatRegistry::empty()
        };

        for (code, symbol) in &self.symbols {
            registry.insert_currency(code, symbol)?;
        }

        for (language, options) in &self.formats {
            registry.register(language, options.clone())?;
        }

        registry.set_default_language(&self.default_language)?;
        registry.set_default_currency(&self.default_currency)?;

        info!(
            languages = registry.languages().count(),
            currencies = registry.symbols().len(),
            default_language = %self.default_language,
            default_currency = %self.default_currency,
            "Currency format registry initialized"
        );
        Ok(registry)
    }

    /// Builds the registry and an empty container wired to it.
    pub fn build_container(&self) -> FormResult<FormContainer> {
        let registry = Arc::new(self.build_registry()?);
        Ok(FormContainer::new(registry)
            .with_attribute_name(self.attribute_name.clone())
            .with_encoding(self.placement_encoding))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use currency_core::CoreError;
    use std::collections::HashMap;
    use std::io::Write;

    const GERMAN: &str = r#"
default_language = "de"
default_currency = "EUR"
placement_encoding = "word"

[symbols]
PLN = "zł"

[formats.de]
digit_group_separator = "."
decimal_character = ","
currency_symbol_placement = "s"
currency_symbol_separator = " "

[formats.cs]
decimal_places = 0
"#;

    #[test]
    fn test_default_config() {
        let config = CurrencyConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.default_language, "cs");
        assert_eq!(config.attribute_name, "data-currency-input");

        let registry = config.build_registry().unwrap();
        assert_eq!(registry.languages().count(), 3);
    }

    #[test]
    fn test_parse_and_build() {
        let config = CurrencyConfig::from_toml_str(GERMAN).unwrap();
        assert_eq!(config.placement_encoding, PlacementEncoding::Word);

        let registry = config.build_registry().unwrap();
        let de = registry.resolve(None, None, None).unwrap();
        assert_eq!(de.language(), "de");
        assert_eq!(de.format(1234.5), "1.234,50 €");
        assert_eq!(de.parse("1.234,50 €"), 1234.5);

        // cs keeps its built-in separators, only decimal places change
        let cs = registry.resolve(Some("cs"), Some("PLN"), None).unwrap();
        assert_eq!(cs.decimal_places(), Some(0));
        assert_eq!(cs.format(1234.5), "1 235 zł");
    }

    #[test]
    fn test_invalid_format_in_file() {
        let config = CurrencyConfig::from_toml_str(
            r#"
[formats.fr]
digit_group_separator = " "
"#,
        )
        .unwrap();

        assert!(matches!(
            config.build_registry(),
            Err(FormError::Core(CoreError::Configuration { .. }))
        ));
    }

    #[test]
    fn test_default_must_be_registered() {
        let config = CurrencyConfig {
            default_language: "de".to_string(),
            ..CurrencyConfig::default()
        };
        assert!(config.validate().is_ok());
        assert!(matches!(
            config.build_registry(),
            Err(FormError::Core(CoreError::UnknownLanguage(_)))
        ));
    }

    #[test]
    fn test_validation() {
        let mut config = CurrencyConfig::default();
        config.attribute_name = "currency".to_string();
        assert!(config.validate().is_err());

        let mut config = CurrencyConfig::default();
        config.default_currency = "euro".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("CURRENCY_DEFAULT_LANGUAGE", "en"),
            ("CURRENCY_DEFAULT_CURRENCY", "USD"),
            ("CURRENCY_PLACEMENT_ENCODING", "bogus"),
        ]
        .into_iter()
        .collect();

        let mut config = CurrencyConfig::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.default_language, "en");
        assert_eq!(config.default_currency, "USD");
        // Unparseable encoding is ignored
        assert_eq!(config.placement_encoding, PlacementEncoding::Letter);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("currency.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(GERMAN.as_bytes()).unwrap();

        let config = CurrencyConfig::load(Some(path)).unwrap();
        assert!(config.formats.contains_key("de"));
        assert_eq!(config.symbols.get("PLN").map(String::as_str), Some("zł"));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = CurrencyConfig::load_or_default(Some(dir.path().join("absent.toml")));
        assert!(config.formats.is_empty());
    }

    #[test]
    fn test_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("currency.toml");
        std::fs::write(&path, "default_language = [").unwrap();

        assert!(matches!(
            CurrencyConfig::load(Some(path)),
            Err(FormError::ConfigParse(_))
        ));
    }

    #[test]
    fn test_build_container() {
        let config = CurrencyConfig::from_toml_str(GERMAN).unwrap();
        let mut form = config.build_container().unwrap();
        form.add_currency_field("price", None, None, None).unwrap();

        let controls = form.controls().unwrap();
        let payload = &controls[0].attributes["data-currency-input"];
        assert!(payload.contains(r#""currencySymbolPlacement":"suffix""#));
    }
}
