//! Delete Cart Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use storefront_app::domain::carts::records::CartId;

use crate::{carts::errors::into_api_error, errors::ApiError, extensions::*, state::State};

/// Delete Cart Handler
///
/// Deleting an unknown cart succeeds without effect.
#[endpoint(
    tags("carts"),
    summary = "Delete Cart",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Cart deleted"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    cart: PathParam<i64>,
    depot: &mut Depot,
) -> Result<StatusCode, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .carts
        .delete_cart(CartId::from_i64(cart.into_inner()))
        .await
        .map_err(into_api_error)?;

    Ok(StatusCode::NO_CONTENT)
}
