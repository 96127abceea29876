use serde::Deserialize;
use serde_json::json;

use shopfront_catalog::Product;
use shopfront_core::ProductId;

// -------------------------
// Request DTOs
// -------------------------

/// Full product form as submitted by the back-office client.
///
/// Everything except the id defaults when omitted, mirroring form binding: a
/// missing name binds as empty and fails validation downstream instead of
/// failing deserialization.
#[derive(Debug, Deserialize)]
pub struct ProductForm {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: i64,
    #[serde(default)]
    pub stock: i64,
    #[serde(default)]
    pub color: String,
}

impl ProductForm {
    pub fn into_product(self) -> Product {
        Product {
            id: ProductId::new(self.id),
            name: self.name,
            price: self.price,
            stock: self.stock,
            color: self.color,
        }
    }
}

// -------------------------
// Response mapping
// -------------------------

pub fn product_to_json(product: &Product) -> serde_json::Value {
    json!({
        "id": product.id.as_i64(),
        "name": product.name,
        "price": product.price,
        "stock": product.stock,
        "color": product.color,
    })
}
