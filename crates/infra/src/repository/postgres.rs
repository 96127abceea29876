//! Postgres-backed product repository.
//!
//! Expects a `products` table:
//!
//! ```sql
//! CREATE TABLE products (
//!     id    BIGINT PRIMARY KEY,
//!     name  TEXT   NOT NULL,
//!     price BIGINT NOT NULL,
//!     stock BIGINT NOT NULL,
//!     color TEXT   NOT NULL
//! );
//! ```

use async_trait::async_trait;
use sqlx::{postgres::PgRow, PgPool, Row};

use shopfront_backoffice::{ProductRepository, RepositoryError, RepositoryResult};
use shopfront_catalog::Product;
use shopfront_core::ProductId;

/// Persistent product store on a SQLx connection pool.
///
/// Writes are upserts keyed on id, matching the in-memory adapter's
/// semantics; `fetch_all` orders by id so both adapters expose the same
/// repository order.
#[derive(Debug, Clone)]
pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn row_to_product(row: &PgRow) -> Product {
    Product {
        id: ProductId::new(row.get::<i64, _>("id")),
        name: row.get("name"),
        price: row.get("price"),
        stock: row.get("stock"),
        color: row.get("color"),
    }
}

fn storage_error(err: sqlx::Error) -> RepositoryError {
    RepositoryError::storage(err.to_string())
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn fetch_all(&self) -> RepositoryResult<Vec<Product>> {
        let rows = sqlx::query("SELECT id, name, price, stock, color FROM products ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error)?;

        Ok(rows.iter().map(row_to_product).collect())
    }

    async fn fetch_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>> {
        let row = sqlx::query("SELECT id, name, price, stock, color FROM products WHERE id = $1")
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error)?;

        Ok(row.as_ref().map(row_to_product))
    }

    async fn create(&self, product: &Product) -> RepositoryResult<()> {
        sqlx::query(
            "INSERT INTO products (id, name, price, stock, color) \
             VALUES ($1, $2, $3, $4, $5) \
             ON CONFLICT (id) DO UPDATE \
             SET name = EXCLUDED.name, price = EXCLUDED.price, \
                 stock = EXCLUDED.stock, color = EXCLUDED.color",
        )
        .bind(product.id.as_i64())
        .bind(&product.name)
        .bind(product.price)
        .bind(product.stock)
        .bind(&product.color)
        .execute(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(())
    }

    async fn update(&self, product: &Product) -> RepositoryResult<()> {
        self.create(product).await
    }

    async fn delete(&self, product: &Product) -> RepositoryResult<()> {
        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(product.id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;

        Ok(())
    }
}
