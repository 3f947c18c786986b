//! Products Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use smallvec::SmallVec;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};

use crate::domain::products::{
    labels::Label,
    records::{ProductId, ProductRecord},
    validation::ValidProduct,
};

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const CREATE_PRODUCT_LABELS_SQL: &str = include_str!("sql/create_product_labels.sql");
const DELETE_PRODUCT_SQL: &str = include_str!("sql/delete_product.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductsRepository;

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<ProductRecord>, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(LIST_PRODUCTS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductId,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(GET_PRODUCT_SQL)
            .bind(product.into_i64())
            .fetch_one(&mut **tx)
            .await
    }

    /// Insert the product row and its labels, returning the new id.
    pub(crate) async fn create_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: &ValidProduct,
    ) -> Result<ProductId, sqlx::Error> {
        let id: i64 = query_scalar(CREATE_PRODUCT_SQL)
            .bind(&product.name)
            .bind(product.price)
            .fetch_one(&mut **tx)
            .await?;

        if !product.labels.is_empty() {
            let labels: Vec<&str> = product.labels.iter().map(|l| l.as_str()).collect();

            query(CREATE_PRODUCT_LABELS_SQL)
                .bind(id)
                .bind(labels)
                .execute(&mut **tx)
                .await?;
        }

        Ok(ProductId::from_i64(id))
    }

    pub(crate) async fn delete_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductId,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_PRODUCT_SQL)
            .bind(product.into_i64())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for ProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let raw_labels: Vec<String> = row.try_get("labels")?;

        let labels = raw_labels
            .iter()
            .map(|label| label.parse::<Label>())
            .collect::<Result<SmallVec<[Label; 4]>, _>>()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "labels".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            id: ProductId::from_i64(row.try_get("id")?),
            name: row.try_get("name")?,
            price: row.try_get("price")?,
            added_at: row.try_get::<SqlxTimestamp, _>("added_at")?.to_jiff(),
            labels,
        })
    }
}
