//! Infrastructure layer: storage adapters behind the repository port.

pub mod repository;

pub use repository::in_memory::InMemoryProductRepository;
#[cfg(feature = "postgres")]
pub use repository::postgres::PostgresProductRepository;
