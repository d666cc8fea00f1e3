use chrono::Utc;
use diesel::prelude::*;

use crate::domain::product::{NewProduct, Product, ProductChanges};
use crate::domain::types::ProductId;
use crate::models::product::{
    NewProduct as DbNewProduct, Product as DbProduct, ProductChangeset,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, ProductListQuery, ProductReader, ProductWriter};

/// Neutralize LIKE wildcards in a user-supplied search term.
fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

impl ProductReader for DieselRepository {
    fn list_products(&self, query: &ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let query_builder = || {
            let mut items = products::table.into_boxed::<diesel::sqlite::Sqlite>();

            if let Some(search) = &query.search {
                // The search term is bound as a LIKE parameter; it can never
                // change the shape of the statement. Wildcards in the term
                // are escaped so `50%` matches only the literal substring.
                // SQLite LIKE is case-insensitive for ASCII.
                let pattern = format!("%{}%", escape_like(search));
                items = items.filter(
                    products::name
                        .like(pattern.clone())
                        .escape('\\')
                        .nullable()
                        .or(products::description.like(pattern).escape('\\')),
                );
            }

            if let Some(category) = &query.category {
                items = items.filter(products::category.eq(category.clone()));
            }

            items
        };

        let total = query_builder().count().get_result::<i64>(&mut conn)? as usize;

        let mut items = query_builder();
        if let Some(pagination) = &query.pagination {
            // A saturated offset must stay past the end rather than wrap to
            // a negative OFFSET, which SQLite reads as zero.
            let offset = i64::try_from(pagination.offset()).unwrap_or(i64::MAX);
            items = items.offset(offset).limit(pagination.per_page as i64);
        }

        // Newest first; id breaks ties between rows created in the same
        // timestamp tick.
        let items = items
            .order(products::created_at.desc())
            .then_order_by(products::id.desc())
            .load::<DbProduct>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Product>, _>>()?;

        Ok((total, items))
    }

    fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let product = products::table
            .find(id.get())
            .first::<DbProduct>(&mut conn)
            .optional()?;

        Ok(product.map(TryInto::try_into).transpose()?)
    }
}

impl ProductWriter for DieselRepository {
    fn create_product(&self, product: &NewProduct) -> RepositoryResult<Product> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let db_product = DbNewProduct::from_domain(product, Utc::now().naive_utc());

        let created = diesel::insert_into(products::table)
            .values(&db_product)
            .get_result::<DbProduct>(&mut conn)?;

        Ok(created.try_into()?)
    }

    fn update_product(
        &self,
        id: ProductId,
        changes: &ProductChanges,
    ) -> RepositoryResult<Option<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let changeset = ProductChangeset::from_domain(changes, Utc::now().naive_utc());

        // Single UPDATE ... RETURNING statement so concurrent requests
        // cannot interleave a read-modify-write.
        let updated = diesel::update(products::table.find(id.get()))
            .set(&changeset)
            .get_result::<DbProduct>(&mut conn)
            .optional()?;

        Ok(updated.map(TryInto::try_into).transpose()?)
    }

    fn delete_product(&self, id: ProductId) -> RepositoryResult<Option<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let deleted = diesel::delete(products::table.find(id.get()))
            .get_result::<DbProduct>(&mut conn)
            .optional()?;

        Ok(deleted.map(TryInto::try_into).transpose()?)
    }
}
