//! Carts Data

use crate::domain::{products::records::ProductId, validation::ValidationErrors};

pub const MAX_QUANTITY: i64 = 1000;

pub const PRODUCT_ID_REQUIRED: &str = "The product id cannot be null";
pub const QUANTITY_REQUIRED: &str = "The quantity cannot be null";
pub const QUANTITY_TOO_SMALL: &str = "The quantity must be at least 1";
pub const QUANTITY_TOO_LARGE: &str = "The quantity cannot exceed 1000";

/// Unvalidated request to add a product to a cart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewCartItem {
    pub product_id: Option<ProductId>,
    pub quantity: Option<i64>,
}

/// Validated product and number of units to add.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartItem {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Check a cart item request.
///
/// # Errors
///
/// Returns the field to message map when the product id is missing or the
/// quantity is missing or outside `1..=1000`.
pub fn validate_cart_item(item: NewCartItem) -> Result<CartItem, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if item.product_id.is_none() {
        errors.add("product_id", PRODUCT_ID_REQUIRED);
    }

    let quantity = match item.quantity {
        None => {
            errors.add("quantity", QUANTITY_REQUIRED);
            None
        }
        Some(quantity) if quantity < 1 => {
            errors.add("quantity", QUANTITY_TOO_SMALL);
            None
        }
        Some(quantity) if quantity > MAX_QUANTITY => {
            errors.add("quantity", QUANTITY_TOO_LARGE);
            None
        }
        Some(quantity) => u32::try_from(quantity).ok(),
    };

    match (item.product_id, quantity) {
        (Some(product_id), Some(quantity)) if errors.is_empty() => Ok(CartItem {
            product_id,
            quantity,
        }),
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn accepts_positive_quantity() -> TestResult {
        let item = validate_cart_item(NewCartItem {
            product_id: Some(ProductId::from_i64(3)),
            quantity: Some(2),
        })?;

        assert_eq!(item.product_id, ProductId::from_i64(3));
        assert_eq!(item.quantity, 2);

        Ok(())
    }

    #[test]
    fn rejects_missing_fields() {
        let Err(errors) = validate_cart_item(NewCartItem::default()) else {
            panic!("expected validation failure");
        };

        assert_eq!(errors.get("product_id"), Some(PRODUCT_ID_REQUIRED));
        assert_eq!(errors.get("quantity"), Some(QUANTITY_REQUIRED));
    }

    #[test]
    fn rejects_zero_and_negative_quantities() {
        for quantity in [0, -5] {
            let result = validate_cart_item(NewCartItem {
                product_id: Some(ProductId::from_i64(1)),
                quantity: Some(quantity),
            });

            assert_eq!(
                result.err().and_then(|e| e.get("quantity").map(str::to_string)),
                Some(QUANTITY_TOO_SMALL.to_string()),
                "quantity {quantity}"
            );
        }
    }

    #[test]
    fn rejects_quantity_above_limit() {
        let result = validate_cart_item(NewCartItem {
            product_id: Some(ProductId::from_i64(1)),
            quantity: Some(MAX_QUANTITY + 1),
        });

        assert_eq!(
            result.err().and_then(|e| e.get("quantity").map(str::to_string)),
            Some(QUANTITY_TOO_LARGE.to_string())
        );
    }
}
