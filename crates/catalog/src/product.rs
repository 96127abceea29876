use serde::{Deserialize, Serialize};

use shopfront_core::{DomainError, DomainResult, Entity, ProductId};

/// Catalog entry managed through the back-office flows.
///
/// The identifier is supplied by the client on creation and never changes
/// afterwards; everything else is mutable through explicit edit requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: i64, // smallest currency unit (e.g. cents)
    pub stock: i64,
    pub color: String,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: i64,
        stock: i64,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            stock,
            color: color.into(),
        }
    }

    /// Check the submission rules for this entity.
    ///
    /// The only rule in scope: `name` is required and must not be blank.
    /// Validity is computed at the boundary and handed to the service as a
    /// plain boolean, so this never runs inside the request flows themselves.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        Ok(())
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pen() -> Product {
        Product::new(ProductId::new(1), "Pen", 100, 50, "Red")
    }

    #[test]
    fn named_product_passes_validation() {
        assert!(pen().validate().is_ok());
    }

    #[test]
    fn empty_name_fails_validation() {
        let mut product = pen();
        product.name = String::new();

        let err = product.validate().unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for empty name"),
        }
    }

    #[test]
    fn blank_name_fails_validation() {
        let mut product = pen();
        product.name = "   ".to_string();

        assert!(product.validate().is_err());
    }

    #[test]
    fn entity_id_is_the_product_id() {
        let product = pen();
        assert_eq!(*Entity::id(&product), ProductId::new(1));
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: any name with at least one non-whitespace character
            /// passes validation.
            #[test]
            fn non_blank_names_validate(
                name in "[A-Za-z][A-Za-z0-9 ]{0,99}",
                price in 0i64..1_000_000,
                stock in 0i64..100_000
            ) {
                let product = Product::new(ProductId::new(1), name, price, stock, "Blue");
                prop_assert!(product.validate().is_ok());
            }

            /// Property: whitespace-only names always fail validation.
            #[test]
            fn whitespace_names_are_rejected(name in "[ \t]{0,20}") {
                let product = Product::new(ProductId::new(1), name, 100, 50, "Blue");
                prop_assert!(product.validate().is_err());
            }
        }
    }
}
