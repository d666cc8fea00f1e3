//! Strongly-typed value objects used by domain entities.
//!
//! Domain structs carry these wrappers instead of raw primitives so that
//! identifiers, text lengths and numeric ranges are enforced at the
//! boundary, not re-checked ad hoc throughout the codebase.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Maximum length of a product name.
pub const MAX_NAME_LENGTH: usize = 100;
/// Maximum length of a product description.
pub const MAX_DESCRIPTION_LENGTH: usize = 500;

/// Errors produced when attempting to construct constrained domain types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// An identifier was zero or negative.
    #[error("{0} must be a positive integer")]
    NonPositiveId(&'static str),
    /// A numeric value was NaN, infinite or otherwise unusable.
    #[error("{0} must be a valid number")]
    NotANumber(&'static str),
    /// A numeric value required to be non-negative was negative.
    #[error("{0} cannot be negative")]
    NegativeNumber(&'static str),
    /// A string was empty or whitespace-only after trimming.
    #[error("{0} is required and cannot be empty")]
    EmptyString(&'static str),
    /// A string exceeded its maximum length.
    #[error("{0} cannot exceed {1} characters")]
    TooLong(&'static str, usize),
}

/// Surrogate key assigned by the storage backend.
///
/// SQLite row ids start at one, so anything non-positive cannot name a
/// stored product and is rejected before a query is issued.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ProductId(i32);

impl ProductId {
    /// Creates a new identifier ensuring it is greater than zero.
    pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
        if value > 0 {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::NonPositiveId("product id"))
        }
    }

    /// Returns the raw `i32` backing this identifier.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i32> for ProductId {
    type Error = TypeConstraintError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProductId> for i32 {
    fn from(value: ProductId) -> Self {
        value.0
    }
}

impl PartialEq<i32> for ProductId {
    fn eq(&self, other: &i32) -> bool {
        self.0 == *other
    }
}

impl PartialEq<ProductId> for i32 {
    fn eq(&self, other: &ProductId) -> bool {
        *self == other.0
    }
}

/// Trimmed, non-empty product name of at most [`MAX_NAME_LENGTH`] characters.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ProductName(String);

impl ProductName {
    /// Trims whitespace and rejects empty or overlong inputs.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString("Product name"));
        }
        if trimmed.chars().count() > MAX_NAME_LENGTH {
            return Err(TypeConstraintError::TooLong("Product name", MAX_NAME_LENGTH));
        }
        Ok(Self(trimmed))
    }

    /// Borrow the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for ProductName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ProductName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<String> for ProductName {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for ProductName {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProductName> for String {
    fn from(value: ProductName) -> Self {
        value.0
    }
}

/// Trimmed product description of at most [`MAX_DESCRIPTION_LENGTH`] characters.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ProductDescription(String);

impl ProductDescription {
    /// Trims whitespace and rejects overlong inputs.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.chars().count() > MAX_DESCRIPTION_LENGTH {
            return Err(TypeConstraintError::TooLong(
                "Description",
                MAX_DESCRIPTION_LENGTH,
            ));
        }
        Ok(Self(trimmed))
    }

    /// Borrow the description as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for ProductDescription {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ProductDescription {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<String> for ProductDescription {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProductDescription> for String {
    fn from(value: ProductDescription) -> Self {
        value.0
    }
}

/// Non-negative product price.
///
/// Stored as a plain double, not a fixed-point type, matching the storage
/// column.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, PartialOrd)]
#[serde(transparent)]
pub struct ProductPrice(f64);

impl ProductPrice {
    /// Accepts finite values greater than or equal to zero.
    pub fn new(value: f64) -> Result<Self, TypeConstraintError> {
        if !value.is_finite() {
            return Err(TypeConstraintError::NotANumber("Product price"));
        }
        if value < 0.0 {
            return Err(TypeConstraintError::NegativeNumber("Product price"));
        }
        Ok(Self(value))
    }

    /// Returns the raw `f64` backing this price.
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl Display for ProductPrice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<f64> for ProductPrice {
    type Error = TypeConstraintError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProductPrice> for f64 {
    fn from(value: ProductPrice) -> Self {
        value.0
    }
}

/// Non-negative stock counter.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct StockCount(i32);

impl StockCount {
    /// Accepts values greater than or equal to zero.
    pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
        if value < 0 {
            return Err(TypeConstraintError::NegativeNumber("Stock"));
        }
        Ok(Self(value))
    }

    /// Returns the raw `i32` backing this counter.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl Default for StockCount {
    fn default() -> Self {
        Self(0)
    }
}

impl Display for StockCount {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i32> for StockCount {
    type Error = TypeConstraintError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StockCount> for i32 {
    fn from(value: StockCount) -> Self {
        value.0
    }
}
