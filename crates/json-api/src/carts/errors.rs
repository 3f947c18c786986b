//! Cart Errors

use tracing::error;

use storefront_app::domain::carts::CartsServiceError;

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: CartsServiceError) -> ApiError {
    match error {
        CartsServiceError::Validation(errors) => ApiError::Invalid(errors),
        CartsServiceError::NotFound => ApiError::not_found("Cart not found"),
        CartsServiceError::ProductNotFound => ApiError::not_found("Product not found"),
        CartsServiceError::AlreadyCheckedOut => {
            ApiError::conflict("Cart has already been checked out")
        }
        CartsServiceError::InvalidData => ApiError::bad_request("Invalid cart payload"),
        CartsServiceError::Sql(source) => {
            error!(error = ?source, "cart storage error: {source}");

            ApiError::internal()
        }
    }
}
