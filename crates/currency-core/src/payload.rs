//! # Client Payload
//!
//! The flat option object handed to the client-side numeric formatting
//! library (autoNumeric) through a data attribute.
//!
//! ## Wire Contract
//! Key names are fixed by the client library and must not change:
//! ```json
//! {
//!   "digitGroupSeparator": " ",
//!   "decimalCharacter": ",",
//!   "decimalCharacterAlternative": ".",
//!   "currencySymbol": " Kč",
//!   "currencySymbolPlacement": "s",
//!   "roundingMethod": "S",
//!   "allowDecimalPadding": true
//! }
//! ```
//! `decimalCharacterAlternative` and `decimalPlaces` are omitted when unset
//! so the library applies its own defaults.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::resolved::ResolvedFormat;

/// How `currencySymbolPlacement` is written in the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlacementEncoding {
    /// `p` / `s`, the form autoNumeric reads.
    #[default]
    Letter,
    /// `prefix` / `suffix`.
    Word,
}

impl fmt::Display for PlacementEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementEncoding::Letter => write!(f, "letter"),
            PlacementEncoding::Word => write!(f, "word"),
        }
    }
}

impl FromStr for PlacementEncoding {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "letter" => Ok(PlacementEncoding::Letter),
            "word" => Ok(PlacementEncoding::Word),
            _ => Err(ValidationError::NotAllowed {
                field: "placementEncoding".to_string(),
                allowed: vec!["letter".into(), "word".into()],
            }),
        }
    }
}

/// Options object for the client-side formatting library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ClientOptions {
    pub digit_group_separator: char,

    pub decimal_character: char,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub decimal_character_alternative: Option<char>,

    /// Marker with its spacer already applied.
    pub currency_symbol: String,

    pub currency_symbol_placement: String,

    pub rounding_method: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub decimal_places: Option<u8>,

    pub allow_decimal_padding: bool,
}

impl ClientOptions {
    /// Shapes the payload for `format`.
    pub fn from_format(format: &ResolvedFormat, encoding: PlacementEncoding) -> Self {
        let rule = format.rule();
        let placement = match encoding {
            PlacementEncoding::Letter => format.placement().letter(),
            PlacementEncoding::Word => format.placement().word(),
        };

        ClientOptions {
            digit_group_separator: format.digit_group_separator(),
            decimal_character: format.decimal_character(),
            decimal_character_alternative: format.decimal_character_alternative(),
            currency_symbol: format.currency_symbol().to_string(),
            currency_symbol_placement: placement.to_string(),
            rounding_method: rule.rounding_method().code().to_string(),
            decimal_places: format.decimal_places(),
            allow_decimal_padding: rule.allow_decimal_padding(),
        }
    }

    /// JSON text for the data attribute.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::FormatRegistry;

    #[test]
    fn test_czech_payload_wire_format() {
        let cs = FormatRegistry::with_defaults()
            .resolve(Some("cs"), Some("CZK"), None)
            .unwrap();
        let json = cs.client_options(PlacementEncoding::Letter).to_json().unwrap();

        assert_eq!(
            json,
            r#"{"digitGroupSeparator":" ","decimalCharacter":",","decimalCharacterAlternative":".","currencySymbol":" Kč","currencySymbolPlacement":"s","roundingMethod":"S","allowDecimalPadding":true}"#
        );
    }

    #[test]
    fn test_english_payload_with_words_and_places() {
        let en = FormatRegistry::with_defaults()
            .resolve(Some("en"), Some("USD"), Some(0))
            .unwrap();
        let value = serde_json::to_value(en.client_options(PlacementEncoding::Word)).unwrap();

        assert_eq!(value["currencySymbol"], "$");
        assert_eq!(value["currencySymbolPlacement"], "prefix");
        assert_eq!(value["decimalPlaces"], 0);
        assert!(value.get("decimalCharacterAlternative").is_none());
    }

    #[test]
    fn test_encoding_parsing() {
        assert_eq!("letter".parse::<PlacementEncoding>().unwrap(), PlacementEncoding::Letter);
        assert_eq!("WORD".parse::<PlacementEncoding>().unwrap(), PlacementEncoding::Word);
        assert!("emoji".parse::<PlacementEncoding>().is_err());
    }
}
