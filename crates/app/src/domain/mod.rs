//! Storefront Domain Concerns

pub mod carts;
pub mod products;
pub mod validation;
