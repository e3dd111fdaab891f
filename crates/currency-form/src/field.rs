//! # Currency Field
//!
//! A single form field holding a localized amount.
//!
//! ## Value Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  submitted JSON value                                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  coerce_raw()  null → ""   string → as is   number → text              │
//! │       │        bool → "1"/""   array/object → InvalidValue             │
//! │       ▼                                                                 │
//! │  raw_value  ─────────────────────────────► redisplay as typed          │
//! │       │                                                                 │
//! │       ▼  resolve(language, currency, places) + parse                   │
//! │  amount (f64, 0.0 when empty) ───────────► business logic              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use currency_core::{FormatRegistry, PlacementEncoding, ResolvedFormat};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{FormError, FormResult};

/// Converts a submitted value into the raw text kept by a field.
///
/// ## Example
/// ```rust
/// use currency_form::field::coerce_raw;
/// use serde_json::json;
///
/// assert_eq!(coerce_raw("price", &json!(null)).unwrap(), "");
/// assert_eq!(coerce_raw("price", &json!("1 234,50")).unwrap(), "1 234,50");
/// assert_eq!(coerce_raw("price", &json!(12.5)).unwrap(), "12.5");
/// assert!(coerce_raw("price", &json!([1, 2])).is_err());
/// ```
pub fn coerce_raw(field: &str, value: &Value) -> FormResult<String> {
    let invalid = |type_name: &str| FormError::InvalidValue {
        field: field.to_string(),
        type_name: type_name.to_string(),
    };

    match value {
        Value::Null => Ok(String::new()),
        Value::String(text) => Ok(text.clone()),
        Value::Number(number) => Ok(number.to_string()),
        Value::Bool(true) => Ok("1".to_string()),
        Value::Bool(false) => Ok(String::new()),
        Value::Array(_) => Err(invalid("array")),
        Value::Object(_) => Err(invalid("object")),
    }
}

/// Renderable description of a field's input element.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Control {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// What the input shows: the raw text as the user typed it.
    pub value: String,

    /// Extra HTML attributes, including the client payload attribute.
    pub attributes: BTreeMap<String, String>,
}

/// A form field for a localized currency amount.
#[derive(Debug, Clone)]
pub struct CurrencyField {
    name: String,
    label: Option<String>,
    currency: Option<String>,
    language: Option<String>,
    decimal_places: Option<u8>,
    raw_value: String,
    amount: f64,
    registry: Arc<FormatRegistry>,
}

impl CurrencyField {
    /// Creates an empty field that resolves its format from `registry`.
    pub fn new(registry: Arc<FormatRegistry>, name: impl Into<String>) -> Self {
        CurrencyField {
            name: name.into(),
            label: None,
            currency: None,
            language: None,
            decimal_places: None,
            raw_value: String::new(),
            amount: 0.0,
            registry,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn set_label(&mut self, label: Option<&str>) -> &mut Self {
        self.label = label.map(str::to_string);
        self
    }

    pub fn currency(&self) -> Option<&str> {
        self.currency.as_deref()
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn decimal_places(&self) -> Option<u8> {
        self.decimal_places
    }

    // =========================================================================
    // Per-field overrides
    // =========================================================================
    // Each override re-resolves the format, so an unusable combination is
    // reported when it is configured.

    /// Overrides the currency; `None` means the registry default.
    pub fn set_currency(&mut self, currency: Option<&str>) -> FormResult<&mut Self> {
        self.reconfigure(|field| field.currency = currency.map(str::to_string))
    }

    /// Overrides the language; `None` means the registry default.
    pub fn set_language(&mut self, language: Option<&str>) -> FormResult<&mut Self> {
        self.reconfigure(|field| field.language = language.map(str::to_string))
    }

    /// Overrides the rule's decimal places; `None` restores the rule's own.
    pub fn set_decimal_places(&mut self, places: Option<u8>) -> FormResult<&mut Self> {
        self.reconfigure(|field| field.decimal_places = places)
    }

    /// Applies `change`, re-parsing the raw value; rolls back on failure.
    fn reconfigure(&mut self, change: impl FnOnce(&mut Self)) -> FormResult<&mut Self> {
        let snapshot = (
            self.currency.clone(),
            self.language.clone(),
            self.decimal_places,
        );
        change(self);

        match self.parse_raw(&self.raw_value) {
            Ok(amount) => {
                self.amount = amount;
                Ok(self)
            }
            Err(e) => {
                (self.currency, self.language, self.decimal_places) = snapshot;
                Err(e)
            }
        }
    }

    // =========================================================================
    // Value
    // =========================================================================

    /// Sets the field's value from a submitted or programmatic value.
    ///
    /// The raw text is kept verbatim for redisplay; the parsed amount is
    /// kept separately and is `0.0` when the text is empty.
    ///
    /// ## Example
    /// ```rust
    /// use std::sync::Arc;
    /// use currency_core::FormatRegistry;
    /// use currency_form::CurrencyField;
    ///
    /// let mut field = CurrencyField::new(Arc::new(FormatRegistry::with_defaults()), "price");
    /// field.set_value("1 234,50 Kč").unwrap();
    /// assert_eq!(field.amount(), 1234.5);
    /// assert_eq!(field.raw_value(), "1 234,50 Kč");
    /// ```
    pub fn set_value(&mut self, value: impl Into<Value>) -> FormResult<&mut Self> {
        let raw = coerce_raw(&self.name, &value.into())?;
        let amount = self.parse_raw(&raw)?;

        debug!(field = %self.name, raw = %raw, amount, "Currency field value set");
        self.raw_value = raw;
        self.amount = amount;
        Ok(self)
    }

    /// The text exactly as it was set.
    pub fn raw_value(&self) -> &str {
        &self.raw_value
    }

    /// The parsed amount; `0.0` for an empty field.
    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn is_filled(&self) -> bool {
        !self.raw_value.is_empty()
    }

    /// The format this field displays and parses with.
    pub fn resolved_format(&self) -> FormResult<ResolvedFormat> {
        Ok(self.registry.resolve(
            self.language.as_deref(),
            self.currency.as_deref(),
            self.decimal_places,
        )?)
    }

    /// The amount formatted for display, empty for an empty field.
    pub fn formatted_value(&self) -> FormResult<String> {
        if !self.is_filled() {
            return Ok(String::new());
        }
        Ok(self.resolved_format()?.format(self.amount))
    }

    /// Builds the input element description with the client payload
    /// serialized under `attribute_name`.
    pub fn control(&self, attribute_name: &str, encoding: PlacementEncoding) -> FormResult<Control> {
        let payload = self.resolved_format()?.client_options(encoding).to_json()?;

        let mut attributes = BTreeMap::new();
        attributes.insert(attribute_name.to_string(), payload);

        Ok(Control {
            name: self.name.clone(),
            label: self.label.clone(),
            value: self.raw_value.clone(),
            attributes,
        })
    }

    fn parse_raw(&self, raw: &str) -> FormResult<f64> {
        let format = self.resolved_format()?;
        if raw.is_empty() {
            return Ok(0.0);
        }
        Ok(format.parse(raw))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn field() -> CurrencyField {
        CurrencyField::new(Arc::new(FormatRegistry::with_defaults()), "price")
    }

    #[test]
    fn test_null_and_empty_are_zero() {
        let mut field = field();
        field.set_value(Value::Null).unwrap();
        assert_eq!(field.raw_value(), "");
        assert_eq!(field.amount(), 0.0);
        assert!(!field.is_filled());

        field.set_value("").unwrap();
        assert_eq!(field.amount(), 0.0);
        assert_eq!(field.formatted_value().unwrap(), "");
    }

    #[test]
    fn test_scalar_values() {
        let mut field = field();

        field.set_value(json!(1500)).unwrap();
        assert_eq!(field.raw_value(), "1500");
        assert_eq!(field.amount(), 1500.0);

        field.set_value(12.75).unwrap();
        assert_eq!(field.amount(), 12.75);

        field.set_value(true).unwrap();
        assert_eq!(field.raw_value(), "1");
        assert_eq!(field.amount(), 1.0);

        field.set_value(false).unwrap();
        assert_eq!(field.raw_value(), "");
    }

    #[test]
    fn test_non_scalar_values_are_rejected() {
        let mut field = field();
        field.set_value("10").unwrap();

        let err = field.set_value(json!({"amount": 5})).unwrap_err();
        assert!(matches!(err, FormError::InvalidValue { ref type_name, .. } if type_name == "object"));

        let err = field.set_value(json!(["1", "2"])).unwrap_err();
        assert!(matches!(err, FormError::InvalidValue { .. }));

        // Previous value survives the failed assignment
        assert_eq!(field.raw_value(), "10");
        assert_eq!(field.amount(), 10.0);
    }

    #[test]
    fn test_overrides_reparse_raw_value() {
        let mut field = field();
        field.set_value("1,234").unwrap();
        // cs: "," is the decimal character
        assert_eq!(field.amount(), 1.234);

        field.set_language(Some("en")).unwrap();
        // en: lone "," before three digits groups thousands
        assert_eq!(field.amount(), 1234.0);
        assert_eq!(field.raw_value(), "1,234");
    }

    #[test]
    fn test_formatted_value_uses_overrides() {
        let mut field = field();
        field
            .set_currency(Some("EUR"))
            .unwrap()
            .set_decimal_places(Some(0))
            .unwrap()
            .set_value("1234,6")
            .unwrap();

        assert_eq!(field.formatted_value().unwrap(), "1 235 €");
    }

    #[test]
    fn test_unknown_currency_without_default() {
        let mut registry = FormatRegistry::with_defaults();
        registry.clear_default_currency();
        let mut field = CurrencyField::new(Arc::new(registry), "price");

        assert!(field.set_currency(Some("XYZ")).is_err());
        assert_eq!(field.currency(), None);

        field.set_currency(Some("GBP")).unwrap();
        assert_eq!(field.currency(), Some("GBP"));
    }

    #[test]
    fn test_control_carries_payload() {
        let mut field = field();
        field.set_label(Some("Price")).set_value("99,90").unwrap();

        let control = field
            .control("data-currency-input", PlacementEncoding::Letter)
            .unwrap();
        assert_eq!(control.name, "price");
        assert_eq!(control.label.as_deref(), Some("Price"));
        assert_eq!(control.value, "99,90");

        let payload: Value =
            serde_json::from_str(&control.attributes["data-currency-input"]).unwrap();
        assert_eq!(payload["currencySymbol"], " Kč");
        assert_eq!(payload["currencySymbolPlacement"], "s");
    }
}
