//! Product Errors

use tracing::error;

use storefront_app::domain::products::{ProductsServiceError, errors::DUPLICATE_NAME_MESSAGE};

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: ProductsServiceError) -> ApiError {
    match error {
        ProductsServiceError::Validation(errors) => ApiError::Invalid(errors),
        ProductsServiceError::DuplicateName => ApiError::conflict(DUPLICATE_NAME_MESSAGE),
        ProductsServiceError::NotFound => ApiError::not_found("Product not found"),
        ProductsServiceError::InUse => {
            ApiError::conflict("Product cannot be deleted while it is in a cart")
        }
        ProductsServiceError::InvalidData => ApiError::bad_request("Invalid product payload"),
        ProductsServiceError::Sql(source) => {
            error!(error = ?source, "product storage error: {source}");

            ApiError::internal()
        }
    }
}
