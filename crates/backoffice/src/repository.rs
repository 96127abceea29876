//! Persistence port consumed by the back-office service.

use async_trait::async_trait;
use thiserror::Error;

use shopfront_catalog::Product;
use shopfront_core::ProductId;

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Storage-layer failure.
///
/// Expected misses (an id with no record) are `Ok(None)`, not errors; this
/// type is reserved for the backend itself failing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("storage error: {0}")]
    Storage(String),
}

impl RepositoryError {
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}

/// Persistence capabilities the service depends on.
///
/// The store is owned by whoever implements this; the service only ever holds
/// a reference. `fetch_all` returns products in the store's own order, which
/// adapters keep as ascending id order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn fetch_all(&self) -> RepositoryResult<Vec<Product>>;

    async fn fetch_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>>;

    async fn create(&self, product: &Product) -> RepositoryResult<()>;

    async fn update(&self, product: &Product) -> RepositoryResult<()>;

    async fn delete(&self, product: &Product) -> RepositoryResult<()>;
}

#[async_trait]
impl<S> ProductRepository for std::sync::Arc<S>
where
    S: ProductRepository + ?Sized,
{
    async fn fetch_all(&self) -> RepositoryResult<Vec<Product>> {
        (**self).fetch_all().await
    }

    async fn fetch_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>> {
        (**self).fetch_by_id(id).await
    }

    async fn create(&self, product: &Product) -> RepositoryResult<()> {
        (**self).create(product).await
    }

    async fn update(&self, product: &Product) -> RepositoryResult<()> {
        (**self).update(product).await
    }

    async fn delete(&self, product: &Product) -> RepositoryResult<()> {
        (**self).delete(product).await
    }
}
