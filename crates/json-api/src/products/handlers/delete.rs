//! Delete Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use storefront_app::domain::products::records::ProductId;

use crate::{errors::ApiError, extensions::*, products::errors::into_api_error, state::State};

/// Delete Product Handler
///
/// Deleting an unknown product succeeds without effect.
#[endpoint(
    tags("products"),
    summary = "Delete Product",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Product deleted"),
        (status_code = StatusCode::CONFLICT, description = "Product is in a cart"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    product: PathParam<i64>,
    depot: &mut Depot,
) -> Result<StatusCode, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .products
        .delete_product(ProductId::from_i64(product.into_inner()))
        .await
        .map_err(into_api_error)?;

    Ok(StatusCode::NO_CONTENT)
}
