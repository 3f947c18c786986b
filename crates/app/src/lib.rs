//! Storefront domain and persistence: products, carts and checkout pricing.

pub mod context;
pub mod database;
pub mod domain;
pub mod ids;

#[cfg(test)]
mod test;
