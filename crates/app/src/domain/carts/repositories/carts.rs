//! Carts Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use rust_decimal::Decimal;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::carts::records::{CartId, CartRecord};

const LIST_CARTS_SQL: &str = include_str!("../sql/list_carts.sql");
const GET_CART_SQL: &str = include_str!("../sql/get_cart.sql");
const LOCK_CART_SQL: &str = include_str!("../sql/lock_cart.sql");
const CREATE_CART_SQL: &str = include_str!("../sql/create_cart.sql");
const TOUCH_CART_SQL: &str = include_str!("../sql/touch_cart.sql");
const CHECKOUT_CART_SQL: &str = include_str!("../sql/checkout_cart.sql");
const DELETE_CART_SQL: &str = include_str!("../sql/delete_cart.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCartsRepository;

impl PgCartsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_carts(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<CartRecord>, sqlx::Error> {
        query_as::<Postgres, CartRecord>(LIST_CARTS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartId,
    ) -> Result<CartRecord, sqlx::Error> {
        query_as::<Postgres, CartRecord>(GET_CART_SQL)
            .bind(cart.into_i64())
            .fetch_one(&mut **tx)
            .await
    }

    /// Fetch the cart and hold its row lock until the transaction ends.
    pub(crate) async fn lock_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartId,
    ) -> Result<CartRecord, sqlx::Error> {
        query_as::<Postgres, CartRecord>(LOCK_CART_SQL)
            .bind(cart.into_i64())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<CartRecord, sqlx::Error> {
        query_as::<Postgres, CartRecord>(CREATE_CART_SQL)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn touch_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartId,
    ) -> Result<CartRecord, sqlx::Error> {
        query_as::<Postgres, CartRecord>(TOUCH_CART_SQL)
            .bind(cart.into_i64())
            .fetch_one(&mut **tx)
            .await
    }

    /// Mark the cart checked out with `total_cost`. Fails with
    /// [`sqlx::Error::RowNotFound`] if it is missing or already checked out.
    pub(crate) async fn checkout_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartId,
        total_cost: Decimal,
    ) -> Result<CartRecord, sqlx::Error> {
        query_as::<Postgres, CartRecord>(CHECKOUT_CART_SQL)
            .bind(cart.into_i64())
            .bind(total_cost)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartId,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_CART_SQL)
            .bind(cart.into_i64())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for CartRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: CartId::from_i64(row.try_get("id")?),
            checked_out: row.try_get("checked_out")?,
            total_cost: row.try_get("total_cost")?,
            lines: Vec::new(),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
