//! Create Product Handler

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use storefront_app::domain::products::data::NewProduct;

use crate::{
    errors::ApiError, extensions::*, products::errors::into_api_error,
    products::get::ProductResponse, state::State,
};

/// Create Product Request
///
/// Fields are optional here so that missing values are reported per field.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateProductRequest {
    /// Unique product name, at most 200 characters
    pub name: Option<String>,

    /// Non-negative unit price
    #[serde(default, with = "rust_decimal::serde::float_option")]
    #[salvo(schema(value_type = Option<f64>))]
    pub price: Option<Decimal>,

    /// Labels drawn from `drink`, `food`, `clothes` and `limited`
    pub labels: Option<Vec<String>>,
}

impl From<CreateProductRequest> for NewProduct {
    fn from(request: CreateProductRequest) -> Self {
        NewProduct {
            name: request.name,
            price: request.price,
            labels: request.labels,
        }
    }
}

/// Create Product Handler
#[endpoint(
    tags("products"),
    summary = "Create Product",
    responses(
        (status_code = StatusCode::CREATED, description = "Product created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid product"),
        (status_code = StatusCode::CONFLICT, description = "Product name already taken"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateProductRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = state
        .app
        .products
        .create_product(json.into_inner().into())
        .await
        .map_err(into_api_error)?;

    res.add_header(LOCATION, format!("/products/{}", product.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(product.into()))
}
