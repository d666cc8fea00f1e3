use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{ProductDescription, ProductId, ProductName, ProductPrice, StockCount};

/// A catalog product as persisted by the storage backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: ProductName,
    pub price: ProductPrice,
    pub image_url: Option<String>,
    /// Free-form category label used for exact-match filtering.
    pub category: Option<String>,
    pub description: Option<ProductDescription>,
    pub stock: StockCount,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Product {
    /// Whether any stock remains.
    pub fn in_stock(&self) -> bool {
        self.stock.get() > 0
    }
}

/// Information required to create a new [`Product`].
///
/// Identifier and timestamps are assigned by the storage backend at insert
/// time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewProduct {
    pub name: ProductName,
    pub price: ProductPrice,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub description: Option<ProductDescription>,
    pub stock: StockCount,
}

/// A validated partial update.
///
/// The outer `Option` distinguishes "field not supplied" from "field
/// supplied"; for nullable text fields the inner `Option` carries an
/// explicit null that clears the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductChanges {
    pub name: Option<ProductName>,
    pub price: Option<ProductPrice>,
    pub image_url: Option<Option<String>>,
    pub category: Option<Option<String>>,
    pub description: Option<Option<ProductDescription>>,
    pub stock: Option<StockCount>,
}

impl ProductChanges {
    /// True when no field was supplied at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.price.is_none()
            && self.image_url.is_none()
            && self.category.is_none()
            && self.description.is_none()
            && self.stock.is_none()
    }
}

/// Summary of a product that was just removed.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DeletedProduct {
    pub id: ProductId,
    pub name: ProductName,
    pub deleted_at: NaiveDateTime,
}
