//! Shared harness for integration tests: a throwaway SQLite catalog with
//! the schema migrated, optionally pre-stocked with products.

use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use grocery_catalog::db::{DbPool, establish_connection_pool};
use grocery_catalog::domain::product::NewProduct;
use grocery_catalog::repository::{DieselRepository, ProductWriter};
use tempfile::NamedTempFile;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Temporary product catalog backed by a tempfile SQLite database.
pub struct TestDb {
    _tempfile: NamedTempFile,
    pool: DbPool,
}

impl TestDb {
    /// An empty catalog.
    pub fn new() -> Self {
        let tempfile = NamedTempFile::new().expect("Failed to create temp file");
        let pool = establish_connection_pool(tempfile.path().to_str().unwrap())
            .expect("Failed to establish SQLite connection.");
        pool.get()
            .expect("Failed to get SQLite connection from pool.")
            .run_pending_migrations(MIGRATIONS)
            .expect("Migrations failed");
        TestDb {
            _tempfile: tempfile,
            pool,
        }
    }

    /// A catalog pre-stocked with `products`, inserted in order.
    #[allow(dead_code)]
    pub fn with_catalog(products: &[NewProduct]) -> (Self, DieselRepository) {
        let test_db = Self::new();
        let repo = DieselRepository::new(test_db.pool());
        for product in products {
            repo.create_product(product).expect("Failed to seed product");
        }
        (test_db, repo)
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}
