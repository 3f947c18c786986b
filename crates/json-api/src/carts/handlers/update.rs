//! Add Product To Cart Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use storefront_app::domain::{
    carts::{data::NewCartItem, records::CartId},
    products::records::ProductId,
};

use crate::{
    carts::errors::into_api_error, carts::get::CartResponse, errors::ApiError, extensions::*,
    state::State,
};

/// Add Product Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AddProductRequest {
    /// The product to add
    pub product_id: Option<i64>,

    /// Number of units to add, at least 1
    pub quantity: Option<i64>,
}

impl From<AddProductRequest> for NewCartItem {
    fn from(request: AddProductRequest) -> Self {
        NewCartItem {
            product_id: request.product_id.map(ProductId::from_i64),
            quantity: request.quantity,
        }
    }
}

/// Add Product To Cart Handler
///
/// Appends `quantity` units of a product to an open cart.
#[endpoint(
    tags("carts"),
    summary = "Add Product To Cart",
    responses(
        (status_code = StatusCode::OK, description = "Product added"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid cart item"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart or product not found"),
        (status_code = StatusCode::CONFLICT, description = "Cart already checked out"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    cart: PathParam<i64>,
    json: JsonBody<AddProductRequest>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let cart = state
        .app
        .carts
        .add_product(CartId::from_i64(cart.into_inner()), json.into_inner().into())
        .await
        .map_err(into_api_error)?;

    Ok(Json(cart.into()))
}
