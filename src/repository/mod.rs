use crate::db::{DbConnection, DbPool};
use crate::domain::product::{NewProduct, Product, ProductChanges};
use crate::domain::types::ProductId;
use crate::pagination::Pagination;
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod product;

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Query parameters used when listing or searching products.
#[derive(Debug, Clone, Default)]
pub struct ProductListQuery {
    /// Case-insensitive substring matched against name and description.
    pub search: Option<String>,
    /// Exact, case-sensitive category filter.
    pub category: Option<String>,
    /// Pagination window; `None` returns everything.
    pub pagination: Option<Pagination>,
}

impl ProductListQuery {
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn paginate(mut self, pagination: Pagination) -> Self {
        self.pagination = Some(pagination);
        self
    }
}

/// Read-only operations for product entities.
pub trait ProductReader {
    /// List products matching the supplied query, newest first.
    ///
    /// Returns the total number of matches before pagination together with
    /// the requested page of items.
    fn list_products(&self, query: &ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)>;
    /// Retrieve a product by its identifier.
    fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>>;
}

/// Write operations for product entities.
///
/// Each mutation is a single atomic storage statement; implementations must
/// not read-modify-write across round trips.
pub trait ProductWriter {
    /// Persist a new product, returning it with its assigned id and
    /// timestamps.
    fn create_product(&self, product: &NewProduct) -> RepositoryResult<Product>;
    /// Apply a partial update and return the new row, or `None` when no
    /// product has this id.
    fn update_product(
        &self,
        id: ProductId,
        changes: &ProductChanges,
    ) -> RepositoryResult<Option<Product>>;
    /// Delete a product and return the removed row, or `None` when no
    /// product has this id.
    fn delete_product(&self, id: ProductId) -> RepositoryResult<Option<Product>>;
}
