//! Product Records

use jiff::Timestamp;
use rust_decimal::Decimal;
use smallvec::SmallVec;

use crate::{domain::products::labels::Label, ids::TypedId};

/// Product ID
pub type ProductId = TypedId<ProductRecord>;

/// Product Record
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub added_at: Timestamp,
    pub labels: SmallVec<[Label; 4]>,
}
