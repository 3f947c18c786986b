//! Checkout Cart Handler

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use storefront_app::domain::carts::records::{CartId, CheckoutRecord};

use crate::{
    carts::errors::into_api_error, carts::get::CartResponse, errors::ApiError, extensions::*,
    state::State,
};

/// Checkout Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckoutResponse {
    /// The checked out cart
    pub cart: CartResponse,

    /// Sum of every unit price, rounded half-up to two decimal places
    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub total_cost: Decimal,
}

impl From<CheckoutRecord> for CheckoutResponse {
    fn from(checkout: CheckoutRecord) -> Self {
        Self {
            cart: checkout.cart.into(),
            total_cost: checkout.total_cost,
        }
    }
}

/// Checkout Cart Handler
///
/// Freezes the cart and returns its total.
#[endpoint(
    tags("carts"),
    summary = "Checkout Cart",
    responses(
        (status_code = StatusCode::OK, description = "Cart checked out"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart not found"),
        (status_code = StatusCode::CONFLICT, description = "Cart already checked out"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    cart: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<CheckoutResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let checkout = state
        .app
        .carts
        .checkout(CartId::from_i64(cart.into_inner()))
        .await
        .map_err(into_api_error)?;

    Ok(Json(checkout.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use storefront_app::domain::carts::{CartsServiceError, MockCartsService};

    use crate::test_helpers::{carts_service, make_cart};

    use super::*;

    fn make_service(repo: MockCartsService) -> Service {
        carts_service(repo, Router::with_path("carts/{cart}/checkout").post(handler))
    }

    #[tokio::test]
    async fn test_checkout_returns_cart_and_total() -> TestResult {
        let mut repo = MockCartsService::new();

        repo.expect_checkout()
            .once()
            .withf(|id| *id == CartId::from_i64(6))
            .return_once(|_| {
                let mut cart = make_cart(6, &[(1, 1), (2, 1)]);
                let total_cost = Decimal::new(1501, 2);

                cart.checked_out = true;
                cart.total_cost = Some(total_cost);

                Ok(CheckoutRecord { cart, total_cost })
            });

        let mut res = TestClient::post("http://example.com/carts/6/checkout")
            .send(&make_service(repo))
            .await;

        let body: serde_json::Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(
            body,
            serde_json::json!({
                "cart": {
                    "cart_id": 6,
                    "check_out": true,
                    "products": [
                        { "product_id": 1, "quantity": 1 },
                        { "product_id": 2, "quantity": 1 },
                    ],
                    "total_cost": 15.01,
                },
                "total_cost": 15.01,
            })
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_checkout_twice_returns_409() -> TestResult {
        let mut repo = MockCartsService::new();

        repo.expect_checkout()
            .once()
            .return_once(|_| Err(CartsServiceError::AlreadyCheckedOut));

        let res = TestClient::post("http://example.com/carts/6/checkout")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }

    #[tokio::test]
    async fn test_checkout_missing_cart_returns_404() -> TestResult {
        let mut repo = MockCartsService::new();

        repo.expect_checkout()
            .once()
            .return_once(|_| Err(CartsServiceError::NotFound));

        let res = TestClient::post("http://example.com/carts/6/checkout")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
