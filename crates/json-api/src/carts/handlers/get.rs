//! Get Cart Handler

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use storefront_app::domain::carts::records::{CartId, CartLine, CartRecord};

use crate::{carts::errors::into_api_error, errors::ApiError, extensions::*, state::State};

/// Cart Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    /// The unique identifier of the cart
    pub cart_id: i64,

    /// Whether the cart has been checked out
    pub check_out: bool,

    /// Products in the cart with their quantities, in the order first added
    pub products: Vec<CartLineResponse>,

    /// Total cost, present once the cart has been checked out
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    #[salvo(schema(value_type = Option<f64>))]
    pub total_cost: Option<Decimal>,
}

impl From<CartRecord> for CartResponse {
    fn from(cart: CartRecord) -> Self {
        CartResponse {
            cart_id: cart.id.into_i64(),
            check_out: cart.checked_out,
            products: cart.lines.into_iter().map(CartLineResponse::from).collect(),
            total_cost: cart.total_cost,
        }
    }
}

/// Cart Line Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartLineResponse {
    /// The product identifier
    pub product_id: i64,

    /// Number of units of the product in the cart
    pub quantity: u64,
}

impl From<CartLine> for CartLineResponse {
    fn from(line: CartLine) -> Self {
        Self {
            product_id: line.product_id.into_i64(),
            quantity: line.quantity,
        }
    }
}

/// Get Cart Handler
///
/// Returns a cart.
#[endpoint(
    tags("carts"),
    summary = "Get Cart",
    responses(
        (status_code = StatusCode::OK, description = "Cart found"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    cart: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let cart = state
        .app
        .carts
        .get_cart(CartId::from_i64(cart.into_inner()))
        .await
        .map_err(into_api_error)?;

    Ok(Json(cart.into()))
}
