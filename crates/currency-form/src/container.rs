//! # Form Container
//!
//! Groups currency fields that share one registry and one payload
//! attribute, and feeds submitted values through them.
//!
//! ## Submission Flow
//! ```text
//! POST {"price": "1 234,50 Kč", "fee": null}
//!      │
//!      ▼
//! submit()  ──► price.set_value("1 234,50 Kč") ──► 1234.5
//!           ──► fee.set_value(null)             ──► 0.0
//!      │
//!      ▼
//! {"fee": 0.0, "price": 1234.5}
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use currency_core::{FormatRegistry, PlacementEncoding};
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::error::{FormError, FormResult};
use crate::field::{Control, CurrencyField};

/// Attribute the client-side library reads its options from.
pub const DEFAULT_ATTRIBUTE_NAME: &str = "data-currency-input";

/// A set of named currency fields.
#[derive(Debug, Clone)]
pub struct FormContainer {
    registry: Arc<FormatRegistry>,
    attribute_name: String,
    encoding: PlacementEncoding,
    fields: Vec<CurrencyField>,
}

impl FormContainer {
    /// Creates a container using `data-currency-input` and letter placement codes.
    pub fn new(registry: Arc<FormatRegistry>) -> Self {
        FormContainer {
            registry,
            attribute_name: DEFAULT_ATTRIBUTE_NAME.to_string(),
            encoding: PlacementEncoding::default(),
            fields: Vec::new(),
        }
    }

    pub fn with_attribute_name(mut self, attribute_name: impl Into<String>) -> Self {
        self.attribute_name = attribute_name.into();
        self
    }

    pub fn with_encoding(mut self, encoding: PlacementEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn attribute_name(&self) -> &str {
        &self.attribute_name
    }

    pub fn registry(&self) -> &Arc<FormatRegistry> {
        &self.registry
    }

    /// Adds a currency field.
    ///
    /// `currency` and `language` are optional per-field overrides; when
    /// absent the registry defaults apply.
    ///
    /// ## Example
    /// ```rust
    /// use std::sync::Arc;
    /// use currency_core::FormatRegistry;
    /// use currency_form::FormContainer;
    ///
    /// let mut form = FormContainer::new(Arc::new(FormatRegistry::with_defaults()));
    /// form.add_currency_field("price", Some("Price"), Some("EUR"), None)
    ///     .unwrap()
    ///     .set_value("12,50 €")
    ///     .unwrap();
    ///
    /// assert_eq!(form.field("price").unwrap().amount(), 12.5);
    /// assert!(form.add_currency_field("price", None, None, None).is_err());
    /// ```
    pub fn add_currency_field(
        &mut self,
        name: &str,
        label: Option<&str>,
        currency: Option<&str>,
        language: Option<&str>,
    ) -> FormResult<&mut CurrencyField> {
        if name.trim().is_empty() {
            return Err(FormError::InvalidConfig("field name is required".to_string()));
        }
        if self.fields.iter().any(|field| field.name() == name) {
            return Err(FormError::DuplicateField(name.to_string()));
        }

        let mut field = CurrencyField::new(Arc::clone(&self.registry), name);
        field.set_label(label);
        field.set_currency(currency)?;
        field.set_language(language)?;

        debug!(field = name, ?currency, ?language, "Added currency field");
        self.fields.push(field);

        let last = self.fields.len() - 1;
        Ok(&mut self.fields[last])
    }

    pub fn field(&self, name: &str) -> FormResult<&CurrencyField> {
        self.fields
            .iter()
            .find(|field| field.name() == name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))
    }

    pub fn field_mut(&mut self, name: &str) -> FormResult<&mut CurrencyField> {
        self.fields
            .iter_mut()
            .find(|field| field.name() == name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))
    }

    /// Fields in the order they were added.
    pub fn fields(&self) -> impl Iterator<Item = &CurrencyField> {
        self.fields.iter()
    }

    /// Applies submitted values to every field and returns the parsed amounts.
    ///
    /// Fields missing from `values` are set to null (amount `0.0`). Keys
    /// with no matching field are ignored.
    pub fn submit(&mut self, values: &Map<String, Value>) -> FormResult<BTreeMap<String, f64>> {
        let mut amounts = BTreeMap::new();

        for field in &mut self.fields {
            let value = values.get(field.name()).cloned().unwrap_or(Value::Null);
            field.set_value(value)?;
            amounts.insert(field.name().to_string(), field.amount());
        }

        info!(fields = amounts.len(), "Currency form submitted");
        Ok(amounts)
    }

    /// Input element descriptions for every field.
    pub fn controls(&self) -> FormResult<Vec<Control>> {
        self.fields
            .iter()
            .map(|field| field.control(&self.attribute_name, self.encoding))
            .collect()
    }
}
