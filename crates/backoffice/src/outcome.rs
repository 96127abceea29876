//! Request outcomes handed back to the presentation layer.

use shopfront_catalog::Product;

/// Data carried by a view outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewData {
    /// No data: the empty creation form context.
    Empty,
    /// A single product (detail, re-rendered submission, delete confirmation).
    Item(Product),
    /// The full listing, in repository order.
    Listing(Vec<Product>),
}

/// Where a redirect outcome points.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RedirectTarget {
    Listing,
}

/// Terminal result of a back-office request.
///
/// Closed over exactly three shapes; the caller matches on this, renders a
/// view, issues a redirect, or answers not-found. Nothing here knows about
/// HTTP beyond the equivalent status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    View(ViewData),
    Redirect(RedirectTarget),
    NotFound,
}

impl Outcome {
    pub fn empty_form() -> Self {
        Outcome::View(ViewData::Empty)
    }

    pub fn item(product: Product) -> Self {
        Outcome::View(ViewData::Item(product))
    }

    pub fn listing(products: Vec<Product>) -> Self {
        Outcome::View(ViewData::Listing(products))
    }

    pub fn redirect_to_listing() -> Self {
        Outcome::Redirect(RedirectTarget::Listing)
    }

    /// HTTP-equivalent status of this outcome.
    pub fn status_code(&self) -> u16 {
        match self {
            Outcome::View(_) => 200,
            Outcome::Redirect(_) => 303,
            Outcome::NotFound => 404,
        }
    }
}
