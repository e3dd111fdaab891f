//! # Domain Types
//!
//! Format rule types shared by the registry, parser and formatter.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Format Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐   validate   ┌─────────────────────┐          │
//! │  │   FormatOptions     │ ───────────► │     FormatRule      │          │
//! │  │  ─────────────────  │              │  ─────────────────  │          │
//! │  │  all fields Option  │              │  group: char        │          │
//! │  │  separators: String │              │  decimal: char      │          │
//! │  │  enums: raw strings │              │  enums: typed       │          │
//! │  └─────────────────────┘              └─────────────────────┘          │
//! │                                                                         │
//! │  ┌───────────────────┐ ┌─────────────────┐ ┌────────────────────┐      │
//! │  │ CurrencyExpression│ │ SymbolPlacement │ │  RoundingMethod    │      │
//! │  │  Symbol           │ │  Prefix  ("p")  │ │  S A s a B U D C F │      │
//! │  │  Code             │ │  Suffix  ("s")  │ │  (autoNumeric)     │      │
//! │  │  None (`false`)   │ └─────────────────┘ └────────────────────┘      │
//! │  └───────────────────┘                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `FormatOptions` is what arrives from host code or a config file;
//! `FormatRule` is what the registry stores. A `FormatRule` can only be
//! built through validation, so every stored rule satisfies the separator
//! invariants.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::validation::{
    single_char, validate_decimal_places, validate_distinct_separators,
    validate_symbol_separator, ValidationResult,
};

// =============================================================================
// Currency Expression
// =============================================================================

/// What to show next to the amount: the glyph, the ISO code, or nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurrencyExpression {
    /// Display glyph, e.g. `Kč`, `€`.
    #[default]
    Symbol,
    /// ISO 4217 code, e.g. `CZK`, `EUR`.
    Code,
    /// No currency marker at all.
    None,
}

impl fmt::Display for CurrencyExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurrencyExpression::Symbol => write!(f, "symbol"),
            CurrencyExpression::Code => write!(f, "code"),
            CurrencyExpression::None => write!(f, "false"),
        }
    }
}

impl FromStr for CurrencyExpression {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "symbol" => Ok(CurrencyExpression::Symbol),
            "code" => Ok(CurrencyExpression::Code),
            "false" | "none" => Ok(CurrencyExpression::None),
            _ => Err(ValidationError::NotAllowed {
                field: "currencyExpression".to_string(),
                allowed: vec!["symbol".into(), "code".into(), "false".into()],
            }),
        }
    }
}

/// Raw `currencyExpression` option: either a name or the literal `false`.
///
/// Config files write `currency_expression = false` to hide the marker,
/// so both shapes must deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExpressionOption {
    Flag(bool),
    Name(String),
}

impl ExpressionOption {
    /// Validates the raw option into a [`CurrencyExpression`].
    pub fn to_expression(&self) -> ValidationResult<CurrencyExpression> {
        match self {
            ExpressionOption::Flag(false) => Ok(CurrencyExpression::None),
            ExpressionOption::Flag(true) => "true".parse(),
            ExpressionOption::Name(name) => name.parse(),
        }
    }
}

impl From<CurrencyExpression> for ExpressionOption {
    fn from(expression: CurrencyExpression) -> Self {
        match expression {
            CurrencyExpression::None => ExpressionOption::Flag(false),
            other => ExpressionOption::Name(other.to_string()),
        }
    }
}

// =============================================================================
// Symbol Placement
// =============================================================================

/// Which side of the number the currency marker goes on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolPlacement {
    /// `$1,234.56`
    Prefix,
    /// `1 234,56 Kč`
    #[default]
    Suffix,
}

impl SymbolPlacement {
    /// Single-letter code understood by autoNumeric (`p` / `s`).
    pub fn letter(&self) -> &'static str {
        match self {
            SymbolPlacement::Prefix => "p",
            SymbolPlacement::Suffix => "s",
        }
    }

    /// Full word (`prefix` / `suffix`).
    pub fn word(&self) -> &'static str {
        match self {
            SymbolPlacement::Prefix => "prefix",
            SymbolPlacement::Suffix => "suffix",
        }
    }
}

impl fmt::Display for SymbolPlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.word())
    }
}

impl FromStr for SymbolPlacement {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "p" | "prefix" => Ok(SymbolPlacement::Prefix),
            "s" | "suffix" => Ok(SymbolPlacement::Suffix),
            _ => Err(ValidationError::NotAllowed {
                field: "currencySymbolPlacement".to_string(),
                allowed: vec!["prefix".into(), "suffix".into(), "p".into(), "s".into()],
            }),
        }
    }
}

// =============================================================================
// Rounding Method
// =============================================================================

/// Rounding applied when an amount is formatted to `decimalPlaces`.
///
/// Codes follow autoNumeric's `roundingMethod` option and are
/// case-sensitive (`S` and `s` are different methods).
///
/// ## Behaviour on ties (x.5) and non-ties
/// ```text
/// ┌──────┬──────────────────────────┬─────────┬─────────┬─────────┐
/// │ Code │ Method                   │  2.5    │  -2.5   │  2.4    │
/// ├──────┼──────────────────────────┼─────────┼─────────┼─────────┤
/// │  S   │ Half up, symmetric       │   3     │   -3    │   2     │
/// │  A   │ Half up, asymmetric      │   3     │   -2    │   2     │
/// │  s   │ Half down, symmetric     │   2     │   -2    │   2     │
/// │  a   │ Half down, asymmetric    │   2     │   -3    │   2     │
/// │  B   │ Half even (bankers)      │   2     │   -2    │   2     │
/// │  U   │ Up, away from zero       │   3     │   -3    │   3     │
/// │  D   │ Down, toward zero        │   2     │   -2    │   2     │
/// │  C   │ Ceiling                  │   3     │   -2    │   3     │
/// │  F   │ Floor                    │   2     │   -3    │   2     │
/// └──────┴──────────────────────────┴─────────┴─────────┴─────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundingMethod {
    #[default]
    HalfUpSymmetric,
    HalfUpAsymmetric,
    HalfDownSymmetric,
    HalfDownAsymmetric,
    HalfEven,
    UpAwayFromZero,
    DownTowardZero,
    Ceiling,
    Floor,
}

/// Tolerance for float noise when detecting exact ties and whole values.
const ROUNDING_EPSILON: f64 = 1e-9;

impl RoundingMethod {
    /// autoNumeric code for this method.
    pub fn code(&self) -> &'static str {
        match self {
            RoundingMethod::HalfUpSymmetric => "S",
            RoundingMethod::HalfUpAsymmetric => "A",
            RoundingMethod::HalfDownSymmetric => "s",
            RoundingMethod::HalfDownAsymmetric => "a",
            RoundingMethod::HalfEven => "B",
            RoundingMethod::UpAwayFromZero => "U",
            RoundingMethod::DownTowardZero => "D",
            RoundingMethod::Ceiling => "C",
            RoundingMethod::Floor => "F",
        }
    }

    /// Rounds `value` to `places` fractional digits.
    ///
    /// ## Example
    /// ```rust
    /// use currency_core::RoundingMethod;
    ///
    /// assert_eq!(RoundingMethod::HalfUpSymmetric.round(2.345, 2), 2.35);
    /// assert_eq!(RoundingMethod::HalfEven.round(0.125, 2), 0.12);
    /// assert_eq!(RoundingMethod::Floor.round(-1.001, 2), -1.01);
    /// ```
    pub fn round(&self, value: f64, places: u8) -> f64 {
        let factor = 10f64.powi(i32::from(places));
        let scaled = value * factor;
        let floor = scaled.floor();
        let frac = scaled - floor;

        // Already whole at this precision, modulo representation error.
        if frac < ROUNDING_EPSILON || frac > 1.0 - ROUNDING_EPSILON {
            return scaled.round() / factor;
        }

        let up = floor + 1.0;
        let positive = scaled > 0.0;
        let tie = (frac - 0.5).abs() < ROUNDING_EPSILON;
        let nearest = |on_tie: f64| {
            if tie {
                on_tie
            } else if frac > 0.5 {
                up
            } else {
                floor
            }
        };

        let rounded = match self {
            RoundingMethod::HalfUpSymmetric => nearest(if positive { up } else { floor }),
            RoundingMethod::HalfUpAsymmetric => nearest(up),
            RoundingMethod::HalfDownSymmetric => nearest(if positive { floor } else { up }),
            RoundingMethod::HalfDownAsymmetric => nearest(floor),
            RoundingMethod::HalfEven => nearest(if floor % 2.0 == 0.0 { floor } else { up }),
            RoundingMethod::UpAwayFromZero => {
                if positive {
                    up
                } else {
                    floor
                }
            }
            RoundingMethod::DownTowardZero => {
                if positive {
                    floor
                } else {
                    up
                }
            }
            RoundingMethod::Ceiling => up,
            RoundingMethod::Floor => floor,
        };

        rounded / factor
    }
}

impl fmt::Display for RoundingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for RoundingMethod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "S" => Ok(RoundingMethod::HalfUpSymmetric),
            "A" => Ok(RoundingMethod::HalfUpAsymmetric),
            "s" => Ok(RoundingMethod::HalfDownSymmetric),
            "a" => Ok(RoundingMethod::HalfDownAsymmetric),
            "B" => Ok(RoundingMethod::HalfEven),
            "U" => Ok(RoundingMethod::UpAwayFromZero),
            "D" => Ok(RoundingMethod::DownTowardZero),
            "C" => Ok(RoundingMethod::Ceiling),
            "F" => Ok(RoundingMethod::Floor),
            _ => Err(ValidationError::NotAllowed {
                field: "roundingMethod".to_string(),
                allowed: ["S", "A", "s", "a", "B", "U", "D", "C", "F"]
                    .iter()
                    .map(|c| c.to_string())
                    .collect(),
            }),
        }
    }
}

// =============================================================================
// Format Options (unvalidated)
// =============================================================================

/// A partial, unvalidated format rule.
///
/// Every field is optional so that options can be layered over an existing
/// rule. Keys deserialize from snake_case (TOML) and from the camelCase
/// names used by autoNumeric.
///
/// ## Example
/// ```rust
/// use currency_core::{FormatOptions, SymbolPlacement};
///
/// let options = FormatOptions::new()
///     .with_digit_group_separator('.')
///     .with_decimal_character(',')
///     .with_placement(SymbolPlacement::Suffix)
///     .with_symbol_separator(" ");
/// assert_eq!(options.decimal_character.as_deref(), Some(","));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    #[serde(alias = "digitGroupSeparator")]
    pub digit_group_separator: Option<String>,

    #[serde(alias = "decimalCharacter")]
    pub decimal_character: Option<String>,

    /// `Some("")` removes an alternative inherited from the existing rule.
    #[serde(alias = "decimalCharacterAlternative")]
    pub decimal_character_alternative: Option<String>,

    #[serde(alias = "currencyExpression")]
    pub currency_expression: Option<ExpressionOption>,

    #[serde(alias = "currencySymbolPlacement")]
    pub currency_symbol_placement: Option<String>,

    #[serde(alias = "currencySymbolSeparator")]
    pub currency_symbol_separator: Option<String>,

    #[serde(alias = "decimalPlaces")]
    pub decimal_places: Option<u8>,

    #[serde(alias = "roundingMethod")]
    pub rounding_method: Option<String>,

    #[serde(alias = "allowDecimalPadding")]
    pub allow_decimal_padding: Option<bool>,
}

impl FormatOptions {
    /// Creates empty options.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_digit_group_separator(mut self, separator: char) -> Self {
        self.digit_group_separator = Some(separator.to_string());
        self
    }

    pub fn with_decimal_character(mut self, decimal: char) -> Self {
        self.decimal_character = Some(decimal.to_string());
        self
    }

    pub fn with_decimal_alternative(mut self, alternative: char) -> Self {
        self.decimal_character_alternative = Some(alternative.to_string());
        self
    }

    pub fn with_expression(mut self, expression: CurrencyExpression) -> Self {
        self.currency_expression = Some(expression.into());
        self
    }

    pub fn with_placement(mut self, placement: SymbolPlacement) -> Self {
        self.currency_symbol_placement = Some(placement.letter().to_string());
        self
    }

    pub fn with_symbol_separator(mut self, separator: &str) -> Self {
        self.currency_symbol_separator = Some(separator.to_string());
        self
    }

    pub fn with_decimal_places(mut self, places: u8) -> Self {
        self.decimal_places = Some(places);
        self
    }

    pub fn with_rounding(mut self, method: RoundingMethod) -> Self {
        self.rounding_method = Some(method.code().to_string());
        self
    }

    pub fn with_decimal_padding(mut self, allow: bool) -> Self {
        self.allow_decimal_padding = Some(allow);
        self
    }

    /// Layers `self` over `base`: fields set here win, the rest come from `base`.
    pub fn merged_over(self, base: FormatOptions) -> FormatOptions {
        FormatOptions {
            digit_group_separator: self.digit_group_separator.or(base.digit_group_separator),
            decimal_character: self.decimal_character.or(base.decimal_character),
            decimal_character_alternative: self
                .decimal_character_alternative
                .or(base.decimal_character_alternative),
            currency_expression: self.currency_expression.or(base.currency_expression),
            currency_symbol_placement: self
                .currency_symbol_placement
                .or(base.currency_symbol_placement),
            currency_symbol_separator: self
                .currency_symbol_separator
                .or(base.currency_symbol_separator),
            decimal_places: self.decimal_places.or(base.decimal_places),
            rounding_method: self.rounding_method.or(base.rounding_method),
            allow_decimal_padding: self.allow_decimal_padding.or(base.allow_decimal_padding),
        }
    }
}

// =============================================================================
// Format Rule (validated)
// =============================================================================

/// A validated formatting rule for one language.
///
/// ## Invariants
/// - Group separator, decimal character and its alternative are pairwise distinct
/// - `currency_symbol_separator` is empty or a single character
/// - `decimal_places`, when set, is at most 15
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatRule {
    digit_group_separator: char,
    decimal_character: char,
    decimal_character_alternative: Option<char>,
    currency_expression: CurrencyExpression,
    currency_symbol_placement: SymbolPlacement,
    currency_symbol_separator: String,
    decimal_places: Option<u8>,
    rounding_method: RoundingMethod,
    allow_decimal_padding: bool,
}

impl FormatRule {
    /// Validates options into a rule.
    ///
    /// `digit_group_separator` and `decimal_character` are required; the
    /// other fields fall back to defaults (symbol expression, suffix
    /// placement, no spacer, library-default decimal places, `S` rounding,
    /// decimal padding on).
    pub fn from_options(options: &FormatOptions) -> ValidationResult<FormatRule> {
        let digit_group_separator = match options.digit_group_separator.as_deref() {
            Some(value) => single_char("digitGroupSeparator", value)?,
            None => {
                return Err(ValidationError::Required {
                    field: "digitGroupSeparator".to_string(),
                })
            }
        };

        let decimal_character = match options.decimal_character.as_deref() {
            Some(value) => single_char("decimalCharacter", value)?,
            None => {
                return Err(ValidationError::Required {
                    field: "decimalCharacter".to_string(),
                })
            }
        };

        let decimal_character_alternative = match options.decimal_character_alternative.as_deref()
        {
            None | Some("") => None,
            Some(value) => Some(single_char("decimalCharacterAlternative", value)?),
        };

        validate_distinct_separators(
            digit_group_separator,
            decimal_character,
            decimal_character_alternative,
        )?;

        let currency_expression = match &options.currency_expression {
            Some(option) => option.to_expression()?,
            None => CurrencyExpression::default(),
        };

        let currency_symbol_placement = match options.currency_symbol_placement.as_deref() {
            Some(value) => value.parse()?,
            None => SymbolPlacement::default(),
        };

        let currency_symbol_separator = options.currency_symbol_separator.clone().unwrap_or_default();
        validate_symbol_separator(&currency_symbol_separator)?;

        if let Some(places) = options.decimal_places {
            validate_decimal_places(places)?;
        }

        let rounding_method = match options.rounding_method.as_deref() {
            Some(value) => value.parse()?,
            None => RoundingMethod::default(),
        };

        Ok(FormatRule {
            digit_group_separator,
            decimal_character,
            decimal_character_alternative,
            currency_expression,
            currency_symbol_placement,
            currency_symbol_separator,
            decimal_places: options.decimal_places,
            rounding_method,
            allow_decimal_padding: options.allow_decimal_padding.unwrap_or(true),
        })
    }

    /// Converts the rule back into fully populated options (for merging).
    pub fn to_options(&self) -> FormatOptions {
        FormatOptions {
            digit_group_separator: Some(self.digit_group_separator.to_string()),
            decimal_character: Some(self.decimal_character.to_string()),
            decimal_character_alternative: self.decimal_character_alternative.map(String::from),
            currency_expression: Some(self.currency_expression.into()),
            currency_symbol_placement: Some(self.currency_symbol_placement.letter().to_string()),
            currency_symbol_separator: Some(self.currency_symbol_separator.clone()),
            decimal_places: self.decimal_places,
            rounding_method: Some(self.rounding_method.code().to_string()),
            allow_decimal_padding: Some(self.allow_decimal_padding),
        }
    }

    #[inline]
    pub fn digit_group_separator(&self) -> char {
        self.digit_group_separator
    }

    #[inline]
    pub fn decimal_character(&self) -> char {
        self.decimal_character
    }

    #[inline]
    pub fn decimal_character_alternative(&self) -> Option<char> {
        self.decimal_character_alternative
    }

    #[inline]
    pub fn currency_expression(&self) -> CurrencyExpression {
        self.currency_expression
    }

    #[inline]
    pub fn currency_symbol_placement(&self) -> SymbolPlacement {
        self.currency_symbol_placement
    }

    #[inline]
    pub fn currency_symbol_separator(&self) -> &str {
        &self.currency_symbol_separator
    }

    #[inline]
    pub fn decimal_places(&self) -> Option<u8> {
        self.decimal_places
    }

    #[inline]
    pub fn rounding_method(&self) -> RoundingMethod {
        self.rounding_method
    }

    #[inline]
    pub fn allow_decimal_padding(&self) -> bool {
        self.allow_decimal_padding
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
