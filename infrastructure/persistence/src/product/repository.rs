use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{Product, ProductId};
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::ProductDraft;

use super::entity::ProductEntity;

const SELECT_COLUMNS: &str = "SELECT id, name, price, stock_quantity FROM products";

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Maps a failed write, singling out the unique constraint on `name`.
fn map_write_error(err: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(db_err) = &err
        && db_err.is_unique_violation()
    {
        return RepositoryError::Duplicated;
    }
    tracing::error!(error = %err, "Product write failed");
    RepositoryError::DatabaseError
}

fn map_read_error(err: sqlx::Error) -> RepositoryError {
    tracing::error!(error = %err, "Product query failed");
    RepositoryError::DatabaseError
}

fn stock_column(stock_quantity: u32) -> Result<i32, RepositoryError> {
    i32::try_from(stock_quantity).map_err(|_| RepositoryError::Persistence)
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn find_by_id(&self, id: ProductId) -> Result<Product, RepositoryError> {
        let entity =
            sqlx::query_as::<_, ProductEntity>(&format!("{SELECT_COLUMNS} WHERE id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(map_read_error)?
                .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, RepositoryError> {
        let entity =
            sqlx::query_as::<_, ProductEntity>(&format!("{SELECT_COLUMNS} WHERE name = $1"))
                .bind(name)
                .fetch_optional(&self.pool)
                .await
                .map_err(map_read_error)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(&format!("{SELECT_COLUMNS} ORDER BY id"))
            .fetch_all(&self.pool)
            .await
            .map_err(map_read_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn find_below_threshold(&self, threshold: u32) -> Result<Vec<Product>, RepositoryError> {
        let threshold = i32::try_from(threshold).unwrap_or(i32::MAX);
        let entities = sqlx::query_as::<_, ProductEntity>(&format!(
            "{SELECT_COLUMNS} WHERE stock_quantity < $1 ORDER BY id"
        ))
        .bind(threshold)
        .fetch_all(&self.pool)
        .await
        .map_err(map_read_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn insert(&self, draft: &ProductDraft) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            r#"INSERT INTO products (name, price, stock_quantity)
            VALUES ($1, $2, $3)
            RETURNING id, name, price, stock_quantity"#,
        )
        .bind(draft.name())
        .bind(draft.price())
        .bind(stock_column(draft.stock_quantity())?)
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(entity.into_domain())
    }

    async fn update(&self, product: &Product) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            r#"UPDATE products
            SET name = $2, price = $3, stock_quantity = $4
            WHERE id = $1
            RETURNING id, name, price, stock_quantity"#,
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(&product.price)
        .bind(stock_column(product.stock_quantity)?)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_write_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn delete(&self, id: ProductId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_write_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_non_database_errors_to_database_error() {
        assert_eq!(
            map_write_error(sqlx::Error::RowNotFound),
            RepositoryError::DatabaseError
        );
        assert_eq!(
            map_read_error(sqlx::Error::PoolTimedOut),
            RepositoryError::DatabaseError
        );
    }

    #[test]
    fn should_reject_stock_beyond_column_range() {
        assert_eq!(stock_column(42), Ok(42));
        assert_eq!(stock_column(u32::MAX), Err(RepositoryError::Persistence));
    }
}
