//! Products Data

use rust_decimal::Decimal;

/// Unvalidated product input, as received from a caller.
///
/// Every field is optional so that missing values surface as field-level
/// validation errors rather than decoding failures.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewProduct {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub labels: Option<Vec<String>>,
}
