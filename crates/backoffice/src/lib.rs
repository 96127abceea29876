//! Back-office request flows for the product catalog.
//!
//! The [`service::ProductService`] is the component under contract here: it
//! receives a logical request (list, detail, create, edit, delete), consults
//! the [`repository::ProductRepository`] port, and answers with an
//! [`outcome::Outcome`] the presentation layer renders. It holds no state of
//! its own between calls.

pub mod outcome;
pub mod repository;
pub mod service;

pub use outcome::{Outcome, RedirectTarget, ViewData};
pub use repository::{ProductRepository, RepositoryError, RepositoryResult};
pub use service::ProductService;
