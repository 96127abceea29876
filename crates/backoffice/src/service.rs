//! Product back-office flows.

use shopfront_catalog::Product;
use shopfront_core::ProductId;

use crate::outcome::Outcome;
use crate::repository::{ProductRepository, RepositoryResult};

/// Request handler for the product CRUD flows.
///
/// Stateless between calls: every decision is a function of the parameters
/// and the repository's current contents. Validation happens before the call
/// (the `valid` flag on the submit operations); storage failures propagate as
/// `Err` and are never folded into an [`Outcome`].
#[derive(Debug)]
pub struct ProductService<R> {
    repo: R,
}

impl<R> ProductService<R>
where
    R: ProductRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Listing view over everything in the repository, in repository order.
    pub async fn list(&self) -> RepositoryResult<Outcome> {
        let products = self.repo.fetch_all().await?;
        Ok(Outcome::listing(products))
    }

    /// Detail view for one product. A missing id bounces back to the listing;
    /// an unknown id is not-found.
    pub async fn detail(&self, id: Option<ProductId>) -> RepositoryResult<Outcome> {
        let Some(id) = id else {
            return Ok(Outcome::redirect_to_listing());
        };

        match self.repo.fetch_by_id(id).await? {
            Some(product) => Ok(Outcome::item(product)),
            None => Ok(Outcome::NotFound),
        }
    }

    /// Empty creation form. No repository involvement.
    pub fn create_form(&self) -> Outcome {
        Outcome::empty_form()
    }

    /// Create submission. An invalid candidate is re-rendered untouched and
    /// never reaches the repository.
    pub async fn create(&self, candidate: Product, valid: bool) -> RepositoryResult<Outcome> {
        if !valid {
            return Ok(Outcome::item(candidate));
        }

        self.repo.create(&candidate).await?;
        tracing::debug!(id = %candidate.id, "product created");
        Ok(Outcome::redirect_to_listing())
    }

    /// Edit form for one product. Same resolution rules as [`detail`].
    ///
    /// [`detail`]: ProductService::detail
    pub async fn edit_form(&self, id: Option<ProductId>) -> RepositoryResult<Outcome> {
        let Some(id) = id else {
            return Ok(Outcome::redirect_to_listing());
        };

        match self.repo.fetch_by_id(id).await? {
            Some(product) => Ok(Outcome::item(product)),
            None => Ok(Outcome::NotFound),
        }
    }

    /// Edit submission. The route id must match the candidate's own id; a
    /// mismatch is not-found before anything else is considered.
    pub async fn edit(
        &self,
        route_id: ProductId,
        candidate: Product,
        valid: bool,
    ) -> RepositoryResult<Outcome> {
        if route_id != candidate.id {
            return Ok(Outcome::NotFound);
        }

        if !valid {
            return Ok(Outcome::item(candidate));
        }

        self.repo.update(&candidate).await?;
        tracing::debug!(id = %candidate.id, "product updated");
        Ok(Outcome::redirect_to_listing())
    }

    /// Delete confirmation view. Unlike the other form flows a missing id is
    /// not-found here, not a redirect.
    pub async fn delete_form(&self, id: Option<ProductId>) -> RepositoryResult<Outcome> {
        let Some(id) = id else {
            return Ok(Outcome::NotFound);
        };

        match self.repo.fetch_by_id(id).await? {
            Some(product) => Ok(Outcome::item(product)),
            None => Ok(Outcome::NotFound),
        }
    }

    /// Confirmed deletion. Always redirects to the listing; the delete call
    /// happens only when the id still resolves to a record.
    pub async fn delete_confirmed(&self, id: ProductId) -> RepositoryResult<Outcome> {
        if let Some(product) = self.repo.fetch_by_id(id).await? {
            self.repo.delete(&product).await?;
            tracing::debug!(%id, "product deleted");
        }

        Ok(Outcome::redirect_to_listing())
    }
}
