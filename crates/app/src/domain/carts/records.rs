//! Cart Records

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::{domain::products::records::ProductId, ids::TypedId};

/// Cart ID
pub type CartId = TypedId<CartRecord>;

/// Cart Record
///
/// `lines` is the stored product multiset projected into per-product counts.
/// `total_cost` is only present once the cart has been checked out.
#[derive(Debug, Clone, PartialEq)]
pub struct CartRecord {
    pub id: CartId,
    pub checked_out: bool,
    pub total_cost: Option<Decimal>,
    pub lines: Vec<CartLine>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Number of units of one product in a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartLine {
    pub product_id: ProductId,
    pub quantity: u64,
}

/// Result of a checkout.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutRecord {
    pub cart: CartRecord,
    pub total_cost: Decimal,
}
