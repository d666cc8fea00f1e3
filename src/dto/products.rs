use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::product::{DeletedProduct, Product};
use crate::pagination::PageInfo;

/// Product representation returned over the wire.
///
/// Field names are camelCase and `inStock` is derived from the stock
/// counter.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub stock: i32,
    pub in_stock: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        let in_stock = product.in_stock();
        Self {
            id: product.id.get(),
            name: product.name.into_inner(),
            price: product.price.get(),
            image_url: product.image_url,
            category: product.category,
            description: product.description.map(Into::into),
            stock: product.stock.get(),
            in_stock,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

/// Summary returned by a successful delete.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeletedProductDto {
    pub id: i32,
    pub name: String,
    pub deleted_at: NaiveDateTime,
}

impl From<DeletedProduct> for DeletedProductDto {
    fn from(deleted: DeletedProduct) -> Self {
        Self {
            id: deleted.id.get(),
            name: deleted.name.into_inner(),
            deleted_at: deleted.deleted_at,
        }
    }
}

/// Envelope for `GET /products`.
#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    pub success: bool,
    pub products: Vec<ProductDto>,
    pub pagination: PageInfo,
}

/// Envelope for `GET /products/{id}`.
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub success: bool,
    pub data: ProductDto,
}

/// Envelope for create and update responses.
#[derive(Debug, Serialize)]
pub struct ProductMessageResponse {
    pub success: bool,
    pub message: String,
    pub data: ProductDto,
}

/// Envelope for delete responses.
#[derive(Debug, Serialize)]
pub struct ProductDeletedResponse {
    pub success: bool,
    pub message: String,
    pub data: DeletedProductDto,
}
