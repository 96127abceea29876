use std::sync::Arc;

use shopfront_backoffice::{Outcome, ProductService, RepositoryResult};
use shopfront_catalog::Product;
use shopfront_core::ProductId;
use shopfront_infra::InMemoryProductRepository;

#[cfg(feature = "postgres")]
use shopfront_infra::PostgresProductRepository;
#[cfg(feature = "postgres")]
use sqlx::PgPool;

/// Service wiring over the chosen storage backend.
pub enum AppServices {
    InMemory {
        products: ProductService<Arc<InMemoryProductRepository>>,
    },
    #[cfg(feature = "postgres")]
    Persistent {
        products: ProductService<Arc<PostgresProductRepository>>,
    },
}

pub async fn build_services() -> AppServices {
    let use_persistent = std::env::var("USE_PERSISTENT_STORES")
        .unwrap_or_else(|_| "false".to_string())
        .parse::<bool>()
        .unwrap_or(false);

    if use_persistent {
        #[cfg(feature = "postgres")]
        {
            return build_persistent_services().await;
        }
        #[cfg(not(feature = "postgres"))]
        {
            tracing::warn!(
                "USE_PERSISTENT_STORES=true but postgres feature not enabled, falling back to in-memory"
            );
            return build_in_memory_services();
        }
    }

    build_in_memory_services()
}

fn build_in_memory_services() -> AppServices {
    let repo = Arc::new(InMemoryProductRepository::new());
    AppServices::InMemory {
        products: ProductService::new(repo),
    }
}

#[cfg(feature = "postgres")]
async fn build_persistent_services() -> AppServices {
    let database_url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set when USE_PERSISTENT_STORES=true");

    let pool = PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to Postgres");

    let repo = Arc::new(PostgresProductRepository::new(pool));
    AppServices::Persistent {
        products: ProductService::new(repo),
    }
}

impl AppServices {
    pub async fn products_list(&self) -> RepositoryResult<Outcome> {
        match self {
            AppServices::InMemory { products } => products.list().await,
            #[cfg(feature = "postgres")]
            AppServices::Persistent { products } => products.list().await,
        }
    }

    pub async fn products_detail(&self, id: Option<ProductId>) -> RepositoryResult<Outcome> {
        match self {
            AppServices::InMemory { products } => products.detail(id).await,
            #[cfg(feature = "postgres")]
            AppServices::Persistent { products } => products.detail(id).await,
        }
    }

    pub fn products_create_form(&self) -> Outcome {
        match self {
            AppServices::InMemory { products } => products.create_form(),
            #[cfg(feature = "postgres")]
            AppServices::Persistent { products } => products.create_form(),
        }
    }

    pub async fn products_create(
        &self,
        candidate: Product,
        valid: bool,
    ) -> RepositoryResult<Outcome> {
        match self {
            AppServices::InMemory { products } => products.create(candidate, valid).await,
            #[cfg(feature = "postgres")]
            AppServices::Persistent { products } => products.create(candidate, valid).await,
        }
    }

    pub async fn products_edit_form(&self, id: Option<ProductId>) -> RepositoryResult<Outcome> {
        match self {
            AppServices::InMemory { products } => products.edit_form(id).await,
            #[cfg(feature = "postgres")]
            AppServices::Persistent { products } => products.edit_form(id).await,
        }
    }

    pub async fn products_edit(
        &self,
        route_id: ProductId,
        candidate: Product,
        valid: bool,
    ) -> RepositoryResult<Outcome> {
        match self {
            AppServices::InMemory { products } => products.edit(route_id, candidate, valid).await,
            #[cfg(feature = "postgres")]
            AppServices::Persistent { products } => products.edit(route_id, candidate, valid).await,
        }
    }

    pub async fn products_delete_form(&self, id: Option<ProductId>) -> RepositoryResult<Outcome> {
        match self {
            AppServices::InMemory { products } => products.delete_form(id).await,
            #[cfg(feature = "postgres")]
            AppServices::Persistent { products } => products.delete_form(id).await,
        }
    }

    pub async fn products_delete_confirmed(&self, id: ProductId) -> RepositoryResult<Outcome> {
        match self {
            AppServices::InMemory { products } => products.delete_confirmed(id).await,
            #[cfg(feature = "postgres")]
            AppServices::Persistent { products } => products.delete_confirmed(id).await,
        }
    }
}
