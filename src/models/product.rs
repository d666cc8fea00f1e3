use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product::{
    NewProduct as DomainNewProduct, Product as DomainProduct, ProductChanges,
};
use crate::domain::types::{
    ProductDescription, ProductId, ProductName, ProductPrice, StockCount, TypeConstraintError,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::products)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub stock: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Product> for DomainProduct {
    type Error = TypeConstraintError;

    fn try_from(product: Product) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ProductId::new(product.id)?,
            name: ProductName::new(product.name)?,
            price: ProductPrice::new(product.price)?,
            image_url: product.image_url,
            category: product.category,
            description: product
                .description
                .map(ProductDescription::new)
                .transpose()?,
            stock: StockCount::new(product.stock)?,
            created_at: product.created_at,
            updated_at: product.updated_at,
        })
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub stock: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl NewProduct {
    /// Flatten a validated domain payload into an insertable row.
    pub fn from_domain(product: &DomainNewProduct, now: NaiveDateTime) -> Self {
        Self {
            name: product.name.as_str().to_string(),
            price: product.price.get(),
            image_url: product.image_url.clone(),
            category: product.category.clone(),
            description: product.description.as_ref().map(|d| d.as_str().to_string()),
            stock: product.stock.get(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Changeset applying only the supplied subset of fields.
///
/// `None` skips a column entirely; `Some(None)` on a nullable column writes
/// an explicit NULL. `updated_at` is always bumped.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = crate::schema::products)]
pub struct ProductChangeset {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub image_url: Option<Option<String>>,
    pub category: Option<Option<String>>,
    pub description: Option<Option<String>>,
    pub stock: Option<i32>,
    pub updated_at: NaiveDateTime,
}

impl ProductChangeset {
    /// Flatten validated domain changes into a changeset.
    pub fn from_domain(changes: &ProductChanges, now: NaiveDateTime) -> Self {
        Self {
            name: changes.name.as_ref().map(|n| n.as_str().to_string()),
            price: changes.price.map(ProductPrice::get),
            image_url: changes.image_url.clone(),
            category: changes.category.clone(),
            description: changes
                .description
                .as_ref()
                .map(|d| d.as_ref().map(|d| d.as_str().to_string())),
            stock: changes.stock.map(StockCount::get),
            updated_at: now,
        }
    }
}
