//! Products service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::domain::validation::ValidationErrors;

pub const DUPLICATE_NAME_MESSAGE: &str =
    "It is not possible to insert 2 or more products with exactly the same name";

#[derive(Debug, Error)]
pub enum ProductsServiceError {
    #[error("invalid product")]
    Validation(#[from] ValidationErrors),

    #[error("{DUPLICATE_NAME_MESSAGE}")]
    DuplicateName,

    #[error("product not found")]
    NotFound,

    #[error("product is referenced by a cart")]
    InUse,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for ProductsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::DuplicateName,
            Some(ErrorKind::ForeignKeyViolation) => Self::InUse,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::NotNullViolation | ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_maps_to_not_found() {
        assert!(matches!(
            ProductsServiceError::from(Error::RowNotFound),
            ProductsServiceError::NotFound
        ));
    }

    #[test]
    fn other_errors_map_to_sql() {
        assert!(matches!(
            ProductsServiceError::from(Error::PoolTimedOut),
            ProductsServiceError::Sql(_)
        ));
    }
}
