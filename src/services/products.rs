use chrono::Utc;
use serde::Deserialize;

use crate::domain::product::{DeletedProduct, NewProduct, Product, ProductChanges};
use crate::domain::types::ProductId;
use crate::forms::products::{CreateProductForm, UpdateProductForm};
use crate::pagination::{self, PageInfo};
use crate::repository::errors::RepositoryError;
use crate::repository::{ProductListQuery, ProductReader, ProductWriter};

use super::{ServiceError, ServiceResult};

/// Raw listing parameters as they arrive on the query string.
///
/// `page` and `limit` stay strings here so that non-numeric values can fall
/// back to defaults instead of failing deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductListParams {
    /// Case-insensitive search over name and description.
    pub q: Option<String>,
    /// Exact category filter.
    pub category: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// Map a repository failure to the client-facing taxonomy.
///
/// Unique violations become conflicts; everything else is logged and
/// collapsed into an opaque internal error.
fn storage_error(operation: &str, err: RepositoryError) -> ServiceError {
    match err {
        RepositoryError::Duplicate => {
            ServiceError::Conflict("A product with this information already exists".to_string())
        }
        err => {
            log::error!("Failed to {operation}: {err}");
            ServiceError::Internal
        }
    }
}

/// Validate that a raw path segment names a storable product id.
///
/// Performed before any storage call so that malformed ids never reach the
/// backend and cannot leak storage-specific cast errors.
fn parse_product_id(raw: &str) -> ServiceResult<ProductId> {
    raw.trim()
        .parse::<i32>()
        .ok()
        .and_then(|value| ProductId::new(value).ok())
        .ok_or_else(|| {
            ServiceError::InvalidId("Product ID must be a positive integer".to_string())
        })
}

/// List products matching the optional search term and category, newest
/// first, with pagination metadata.
pub fn list_products<R>(params: &ProductListParams, repo: &R) -> ServiceResult<(Vec<Product>, PageInfo)>
where
    R: ProductReader,
{
    let pagination = pagination::resolve_params(params.page.as_deref(), params.limit.as_deref())
        .map_err(|err| ServiceError::Validation(err.to_string()))?;

    let mut query = ProductListQuery::default().paginate(pagination);
    if let Some(q) = params.q.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
        query = query.search(q);
    }
    if let Some(category) = params.category.as_deref().filter(|c| !c.is_empty()) {
        query = query.category(category);
    }

    match repo.list_products(&query) {
        Ok((total, products)) => Ok((products, PageInfo::new(pagination, total))),
        Err(err) => Err(storage_error("list products", err)),
    }
}

/// Fetch a single product by its raw id.
pub fn get_product<R>(id: &str, repo: &R) -> ServiceResult<Product>
where
    R: ProductReader,
{
    let id = parse_product_id(id)?;

    match repo.get_product_by_id(id) {
        Ok(Some(product)) => Ok(product),
        Ok(None) => Err(ServiceError::NotFound(format!(
            "No product found with ID: {id}"
        ))),
        Err(err) => Err(storage_error("get product", err)),
    }
}

/// Validate and persist a new product.
pub fn create_product<R>(form: CreateProductForm, repo: &R) -> ServiceResult<Product>
where
    R: ProductWriter,
{
    let new_product =
        NewProduct::try_from(form).map_err(|err| ServiceError::Validation(err.to_string()))?;

    repo.create_product(&new_product)
        .map_err(|err| storage_error("create product", err))
}

/// Validate and apply a partial update, returning the new product state.
pub fn update_product<R>(id: &str, form: UpdateProductForm, repo: &R) -> ServiceResult<Product>
where
    R: ProductWriter,
{
    let id = parse_product_id(id)?;
    let changes =
        ProductChanges::try_from(form).map_err(|err| ServiceError::Validation(err.to_string()))?;

    match repo.update_product(id, &changes) {
        Ok(Some(product)) => Ok(product),
        Ok(None) => Err(ServiceError::NotFound(format!(
            "No product found with ID: {id}"
        ))),
        Err(err) => Err(storage_error("update product", err)),
    }
}

/// Delete a product, returning a summary of the removed entity.
pub fn delete_product<R>(id: &str, repo: &R) -> ServiceResult<DeletedProduct>
where
    R: ProductWriter,
{
    let id = parse_product_id(id)?;

    match repo.delete_product(id) {
        Ok(Some(product)) => Ok(DeletedProduct {
            id: product.id,
            name: product.name,
            deleted_at: Utc::now().naive_utc(),
        }),
        Ok(None) => Err(ServiceError::NotFound(format!(
            "No product found with ID: {id}"
        ))),
        Err(err) => Err(storage_error("delete product", err)),
    }
}
