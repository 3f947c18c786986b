//! Cart Products Repository
//!
//! `cart_products` holds one row per unit, so quantity is the number of rows
//! sharing a `(cart_id, product_id)` pair.

use rust_decimal::Decimal;
use sqlx::{Postgres, Transaction, query, query_as, query_scalar};

use crate::domain::{
    carts::{data::CartItem, records::CartId},
    products::records::ProductId,
};

const ADD_CART_PRODUCTS_SQL: &str = include_str!("../sql/add_cart_products.sql");
const LIST_CART_PRODUCT_IDS_SQL: &str = include_str!("../sql/list_cart_product_ids.sql");
const LIST_ALL_CART_PRODUCT_IDS_SQL: &str = include_str!("../sql/list_all_cart_product_ids.sql");
const LIST_CART_PRICES_SQL: &str = include_str!("../sql/list_cart_prices.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCartProductsRepository;

impl PgCartProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Append `item.quantity` rows referencing `item.product_id`.
    pub(crate) async fn add_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartId,
        item: CartItem,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(ADD_CART_PRODUCTS_SQL)
            .bind(cart.into_i64())
            .bind(item.product_id.into_i64())
            .bind(i64::from(item.quantity))
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    /// Product references of one cart, in insertion order.
    pub(crate) async fn list_product_ids(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartId,
    ) -> Result<Vec<ProductId>, sqlx::Error> {
        let ids: Vec<i64> = query_scalar(LIST_CART_PRODUCT_IDS_SQL)
            .bind(cart.into_i64())
            .fetch_all(&mut **tx)
            .await?;

        Ok(ids.into_iter().map(ProductId::from_i64).collect())
    }

    /// `(cart, product)` pairs for every cart, grouped by cart in insertion order.
    pub(crate) async fn list_all_product_ids(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<(CartId, ProductId)>, sqlx::Error> {
        let pairs: Vec<(i64, i64)> = query_as(LIST_ALL_CART_PRODUCT_IDS_SQL)
            .fetch_all(&mut **tx)
            .await?;

        Ok(pairs
            .into_iter()
            .map(|(cart, product)| (CartId::from_i64(cart), ProductId::from_i64(product)))
            .collect())
    }

    /// Unit price of every product reference in the cart.
    pub(crate) async fn list_prices(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartId,
    ) -> Result<Vec<Decimal>, sqlx::Error> {
        query_scalar(LIST_CART_PRICES_SQL)
            .bind(cart.into_i64())
            .fetch_all(&mut **tx)
            .await
    }
}
