//! Product Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    errors::ApiError, extensions::*, products::errors::into_api_error,
    products::get::ProductResponse, state::State,
};

/// Product Index Handler
///
/// Returns every product ordered by id; an empty catalogue yields `[]`.
#[endpoint(
    tags("products"),
    summary = "List Products",
    responses(
        (status_code = StatusCode::OK, description = "Products listed"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = state
        .app
        .products
        .list_products()
        .await
        .map_err(into_api_error)?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}
