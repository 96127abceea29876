use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;

use shopfront_backoffice::{ProductRepository, RepositoryError, RepositoryResult};
use shopfront_catalog::Product;
use shopfront_core::ProductId;

/// In-memory product store.
///
/// Intended for tests/dev. Keyed by product id, so `fetch_all` iterates in
/// ascending id order; `create` and `update` are both upserts (last write
/// wins).
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    inner: RwLock<BTreeMap<ProductId, Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-seeded with `products`.
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        Self {
            inner: RwLock::new(products.into_iter().map(|p| (p.id, p)).collect()),
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn fetch_all(&self) -> RepositoryResult<Vec<Product>> {
        let map = self
            .inner
            .read()
            .map_err(|_| RepositoryError::storage("lock poisoned"))?;
        Ok(map.values().cloned().collect())
    }

    async fn fetch_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>> {
        let map = self
            .inner
            .read()
            .map_err(|_| RepositoryError::storage("lock poisoned"))?;
        Ok(map.get(&id).cloned())
    }

    async fn create(&self, product: &Product) -> RepositoryResult<()> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| RepositoryError::storage("lock poisoned"))?;
        map.insert(product.id, product.clone());
        Ok(())
    }

    async fn update(&self, product: &Product) -> RepositoryResult<()> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| RepositoryError::storage("lock poisoned"))?;
        map.insert(product.id, product.clone());
        Ok(())
    }

    async fn delete(&self, product: &Product) -> RepositoryResult<()> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| RepositoryError::storage("lock poisoned"))?;
        map.remove(&product.id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pen() -> Product {
        Product::new(ProductId::new(1), "Pen", 100, 50, "Red")
    }

    fn notebook() -> Product {
        Product::new(ProductId::new(2), "Notebook", 200, 500, "Blue")
    }

    #[tokio::test]
    async fn create_then_fetch_by_id_round_trips() {
        let repo = InMemoryProductRepository::new();

        repo.create(&pen()).await.unwrap();

        let found = repo.fetch_by_id(ProductId::new(1)).await.unwrap();
        assert_eq!(found, Some(pen()));
    }

    #[tokio::test]
    async fn fetch_by_id_with_unknown_id_is_none() {
        let repo = InMemoryProductRepository::new();

        let found = repo.fetch_by_id(ProductId::new(0)).await.unwrap();
        assert_eq!(found, None);
    }

    #[tokio::test]
    async fn fetch_all_returns_ascending_id_order() {
        // Insert out of order; the store iterates by id.
        let repo = InMemoryProductRepository::new();
        repo.create(&notebook()).await.unwrap();
        repo.create(&pen()).await.unwrap();

        let all = repo.fetch_all().await.unwrap();
        assert_eq!(all, vec![pen(), notebook()]);
    }

    #[tokio::test]
    async fn update_replaces_the_stored_record() {
        let repo = InMemoryProductRepository::with_products([pen()]);

        let mut renamed = pen();
        renamed.name = "Fountain Pen".to_string();
        repo.update(&renamed).await.unwrap();

        let found = repo.fetch_by_id(ProductId::new(1)).await.unwrap().unwrap();
        assert_eq!(found.name, "Fountain Pen");
    }

    #[tokio::test]
    async fn delete_removes_the_record() {
        let repo = InMemoryProductRepository::with_products([pen(), notebook()]);

        repo.delete(&pen()).await.unwrap();

        assert_eq!(repo.fetch_by_id(ProductId::new(1)).await.unwrap(), None);
        assert_eq!(repo.fetch_all().await.unwrap(), vec![notebook()]);
    }
}
