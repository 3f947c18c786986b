//! Get Product Handler

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use storefront_app::domain::products::records::{ProductId, ProductRecord};

use crate::{errors::ApiError, extensions::*, products::errors::into_api_error, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// The unique identifier of the product
    pub product_id: i64,

    /// The unique name of the product
    pub name: String,

    /// The unit price of the product
    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub price: Decimal,

    /// The date the product was added, as `yyyy/MM/dd`
    pub added_at: String,

    /// The product labels
    pub labels: Vec<String>,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        ProductResponse {
            product_id: product.id.into_i64(),
            name: product.name,
            price: product.price,
            added_at: product.added_at.strftime("%Y/%m/%d").to_string(),
            labels: product
                .labels
                .iter()
                .map(|label| label.as_str().to_string())
                .collect(),
        }
    }
}

/// Get Product Handler
///
/// Returns a product.
#[endpoint(
    tags("products"),
    summary = "Get Product",
    responses(
        (status_code = StatusCode::OK, description = "Product found"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    product: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = state
        .app
        .products
        .get_product(ProductId::from_i64(product.into_inner()))
        .await
        .map_err(into_api_error)?;

    Ok(Json(product.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use storefront_app::domain::products::{MockProductsService, ProductsServiceError};

    use crate::{
        errors::ErrorResponse,
        test_helpers::{make_product, products_service},
    };

    use super::*;

    fn make_service(repo: MockProductsService) -> Service {
        products_service(repo, Router::with_path("products/{product}").get(handler))
    }

    #[tokio::test]
    async fn test_get_returns_200_with_product() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_get_product()
            .once()
            .withf(|id| *id == ProductId::from_i64(7))
            .return_once(|_| Ok(make_product(7)));

        let mut res = TestClient::get("http://example.com/products/7")
            .send(&make_service(repo))
            .await;

        let body: serde_json::Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(
            body,
            serde_json::json!({
                "product_id": 7,
                "name": "Product 7",
                "price": 2.5,
                "added_at": "2026/03/01",
                "labels": ["drink"],
            })
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_product_returns_404() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_get_product()
            .once()
            .return_once(|_| Err(ProductsServiceError::NotFound));

        let mut res = TestClient::get("http://example.com/products/8")
            .send(&make_service(repo))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body.status, "NOT_FOUND");
        assert_eq!(body.code, 404);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_storage_error_returns_500() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_get_product()
            .once()
            .return_once(|_| Err(ProductsServiceError::Sql(sqlx::Error::PoolTimedOut)));

        let res = TestClient::get("http://example.com/products/8")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_non_numeric_id_returns_400() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_get_product().never();

        let res = TestClient::get("http://example.com/products/abc")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
