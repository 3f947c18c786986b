//! Create Cart Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, prelude::*};

use crate::{
    carts::errors::into_api_error, carts::get::CartResponse, errors::ApiError, extensions::*,
    state::State,
};

/// Create Cart Handler
///
/// Creates an empty cart.
#[endpoint(
    tags("carts"),
    summary = "Create Cart",
    responses(
        (status_code = StatusCode::CREATED, description = "Cart created"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let cart = state
        .app
        .carts
        .create_cart()
        .await
        .map_err(into_api_error)?;

    res.add_header(LOCATION, format!("/carts/{}", cart.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(cart.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use storefront_app::domain::carts::{CartsServiceError, MockCartsService};

    use crate::test_helpers::{carts_service, make_cart};

    use super::*;

    fn make_service(repo: MockCartsService) -> Service {
        carts_service(repo, Router::with_path("carts").post(handler))
    }

    #[tokio::test]
    async fn test_create_cart_success() -> TestResult {
        let mut repo = MockCartsService::new();

        repo.expect_create_cart()
            .once()
            .return_once(|| Ok(make_cart(21, &[])));

        let mut res = TestClient::post("http://example.com/carts")
            .send(&make_service(repo))
            .await;

        let body: CartResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some("/carts/21"));
        assert_eq!(body.cart_id, 21);
        assert!(!body.check_out);
        assert!(body.products.is_empty());
        assert_eq!(body.total_cost, None);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_cart_storage_error_returns_500() -> TestResult {
        let mut repo = MockCartsService::new();

        repo.expect_create_cart()
            .once()
            .return_once(|| Err(CartsServiceError::Sql(sqlx::Error::PoolTimedOut)));

        let res = TestClient::post("http://example.com/carts")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
