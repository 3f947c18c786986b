//! Carts service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::domain::validation::ValidationErrors;

/// SQLSTATE `numeric_value_out_of_range`.
const NUMERIC_VALUE_OUT_OF_RANGE: &str = "22003";

#[derive(Debug, Error)]
pub enum CartsServiceError {
    #[error("invalid cart item")]
    Validation(#[from] ValidationErrors),

    #[error("cart not found")]
    NotFound,

    #[error("product not found")]
    ProductNotFound,

    #[error("cart has already been checked out")]
    AlreadyCheckedOut,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for CartsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        if error
            .as_database_error()
            .and_then(|database_error| database_error.code())
            .is_some_and(|code| code == NUMERIC_VALUE_OUT_OF_RANGE)
        {
            return Self::InvalidData;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::ForeignKeyViolation) => Self::ProductNotFound,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::UniqueViolation | ErrorKind::NotNullViolation | ErrorKind::Other | _)
            | None => Self::Sql(error),
        }
    }
}
