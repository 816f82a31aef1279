//! Domain value objects with NewType wrappers for names and units.
//!
//! Names and units are validated once at construction so the entities that
//! hold them never carry blank strings. Name comparisons throughout the fridge
//! and cookbook are case-insensitive; [`ItemName::matches`] and
//! [`RecipeName::matches`] are the single place that rule lives.
//!
//! ```rust,ignore
//! let egg = ItemName::new("Egg")?;
//! assert!(egg.matches("EGG"));
//! let date = parse_date("24-12-2024")?;
//! assert_eq!(format_date(date), "24-12-2024");
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Input and output format for best-before dates (`dd-MM-yyyy`).
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Compares two names the way every lookup in the crate does.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

// ============================================================================
// ItemName - Name of a stock line or recipe requirement
// ============================================================================

/// Name of a food item, e.g. `"Egg"` or `"Baking soda"`.
///
/// # Validation
/// - Must not be blank
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemName(String);

impl ItemName {
    /// Creates a new ItemName with validation.
    ///
    /// # Errors
    /// Returns `Err` if the name is empty or whitespace-only.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::Empty("Name"));
        }
        Ok(Self(name))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against a user supplied name.
    pub fn matches(&self, other: &str) -> bool {
        eq_ignore_case(&self.0, other)
    }

    /// Lowercased form used for sorting.
    pub fn sort_key(&self) -> String {
        self.0.to_lowercase()
    }
}

impl fmt::Display for ItemName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ItemName> for String {
    fn from(name: ItemName) -> String {
        name.0
    }
}

impl TryFrom<String> for ItemName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for ItemName {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for ItemName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// Unit - Unit of measurement
// ============================================================================

/// Unit of measurement for a quantity (`"pcs"`, `"dL"`, `"grams"`).
///
/// Units are compared verbatim; the crate never converts between them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Unit(String);

impl Unit {
    /// # Errors
    /// Returns `Err` if the unit is empty or whitespace-only.
    pub fn new(unit: impl Into<String>) -> Result<Self, ValidationError> {
        let unit = unit.into();
        if unit.trim().is_empty() {
            return Err(ValidationError::Empty("Unit"));
        }
        Ok(Self(unit))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Unit> for String {
    fn from(unit: Unit) -> String {
        unit.0
    }
}

impl TryFrom<String> for Unit {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl AsRef<str> for Unit {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// RecipeName - Name of a recipe in the cookbook
// ============================================================================

/// Name of a recipe. Unique within a cookbook, ignoring case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecipeName(String);

impl RecipeName {
    /// # Errors
    /// Returns `Err` if the name is empty or whitespace-only.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::Empty("Recipe name"));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn matches(&self, other: &str) -> bool {
        eq_ignore_case(&self.0, other)
    }
}

impl fmt::Display for RecipeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<RecipeName> for String {
    fn from(name: RecipeName) -> String {
        name.0
    }
}

impl TryFrom<String> for RecipeName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl AsRef<str> for RecipeName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// Numeric and text guards
// ============================================================================

/// Validates a quantity that must be strictly positive.
pub fn positive_quantity(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite(field));
    }
    if value <= 0.0 {
        return Err(ValidationError::NotPositive(field));
    }
    Ok(value)
}

/// Validates an amount that may be zero but never negative.
pub fn non_negative(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite(field));
    }
    if value < 0.0 {
        return Err(ValidationError::Negative(field));
    }
    Ok(value)
}

/// Validates a number that may take any finite value, e.g. a price.
pub fn finite(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite(field));
    }
    Ok(value)
}

/// Validates free text such as a recipe description.
pub fn non_blank(field: &'static str, value: impl Into<String>) -> Result<String, ValidationError> {
    let value = value.into();
    if value.trim().is_empty() {
        return Err(ValidationError::Empty(field));
    }
    Ok(value)
}

/// Parses a `dd-MM-yyyy` date.
pub fn parse_date(input: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|_| ValidationError::InvalidDate {
        input: input.trim().to_string(),
    })
}

/// Formats a date as `dd-MM-yyyy`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

// ============================================================================
// ValidationError - Errors for value object validation
// ============================================================================

/// Validation errors for domain value objects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Field is blank but must not be.
    #[error("{0} cannot be empty")]
    Empty(&'static str),

    /// Field must be strictly greater than zero.
    #[error("{0} must be greater than zero")]
    NotPositive(&'static str),

    #[error("{0} cannot be negative")]
    Negative(&'static str),

    /// NaN or infinity.
    #[error("{0} must be a finite number")]
    NotFinite(&'static str),

    #[error("invalid date '{input}', expected dd-MM-yyyy")]
    InvalidDate { input: String },
}
