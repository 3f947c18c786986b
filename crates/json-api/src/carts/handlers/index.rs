//! Cart Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    carts::errors::into_api_error, carts::get::CartResponse, errors::ApiError, extensions::*,
    state::State,
};

/// Cart Index Handler
///
/// Returns every cart ordered by id.
#[endpoint(
    tags("carts"),
    summary = "List Carts",
    responses(
        (status_code = StatusCode::OK, description = "Carts listed"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<CartResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let carts = state
        .app
        .carts
        .list_carts()
        .await
        .map_err(into_api_error)?;

    Ok(Json(carts.into_iter().map(Into::into).collect()))
}
