//! Carts service.

use async_trait::async_trait;
use mockall::automock;
use rustc_hash::FxHashMap;
use tracing::{info, warn};

use crate::{
    database::Db,
    domain::{
        carts::{
            data::{NewCartItem, validate_cart_item},
            errors::CartsServiceError,
            pricing::{checkout_total, project_quantities},
            records::{CartId, CartRecord, CheckoutRecord},
            repositories::{PgCartProductsRepository, PgCartsRepository},
        },
        products::records::ProductId,
    },
};

#[derive(Debug, Clone)]
pub struct PgCartsService {
    db: Db,
    carts_repository: PgCartsRepository,
    products_repository: PgCartProductsRepository,
}

impl PgCartsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            carts_repository: PgCartsRepository::new(),
            products_repository: PgCartProductsRepository::new(),
        }
    }
}

#[async_trait]
impl CartsService for PgCartsService {
    #[tracing::instrument(name = "carts.service.list_carts", skip(self), err)]
    async fn list_carts(&self) -> Result<Vec<CartRecord>, CartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let mut carts = self.carts_repository.list_carts(&mut tx).await?;
        let pairs = self.products_repository.list_all_product_ids(&mut tx).await?;

        tx.commit().await?;

        let mut by_cart: FxHashMap<CartId, Vec<ProductId>> = FxHashMap::default();

        for (cart, product) in pairs {
            by_cart.entry(cart).or_default().push(product);
        }

        for cart in &mut carts {
            if let Some(products) = by_cart.remove(&cart.id) {
                cart.lines = project_quantities(products);
            }
        }

        Ok(carts)
    }

    #[tracing::instrument(
        name = "carts.service.get_cart",
        skip(self),
        fields(cart_id = %cart),
        err
    )]
    async fn get_cart(&self, cart: CartId) -> Result<CartRecord, CartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let mut record = self.carts_repository.get_cart(&mut tx, cart).await?;
        let products = self.products_repository.list_product_ids(&mut tx, cart).await?;

        tx.commit().await?;

        record.lines = project_quantities(products);

        Ok(record)
    }

    #[tracing::instrument(name = "carts.service.create_cart", skip(self), err)]
    async fn create_cart(&self) -> Result<CartRecord, CartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let created = self.carts_repository.create_cart(&mut tx).await?;

        tx.commit().await?;

        info!(cart_id = %created.id, "created cart");

        Ok(created)
    }

    #[tracing::instrument(
        name = "carts.service.add_product",
        skip(self, item),
        fields(cart_id = %cart),
        err
    )]
    async fn add_product(
        &self,
        cart: CartId,
        item: NewCartItem,
    ) -> Result<CartRecord, CartsServiceError> {
        let item = validate_cart_item(item)?;

        let mut tx = self.db.begin_transaction().await?;

        let locked = self.carts_repository.lock_cart(&mut tx, cart).await?;

        if locked.checked_out {
            return Err(CartsServiceError::AlreadyCheckedOut);
        }

        self.products_repository
            .add_products(&mut tx, cart, item)
            .await?;

        let mut updated = self.carts_repository.touch_cart(&mut tx, cart).await?;
        let products = self.products_repository.list_product_ids(&mut tx, cart).await?;

        tx.commit().await?;

        updated.lines = project_quantities(products);

        Ok(updated)
    }

    #[tracing::instrument(
        name = "carts.service.checkout",
        skip(self),
        fields(cart_id = %cart),
        err
    )]
    async fn checkout(&self, cart: CartId) -> Result<CheckoutRecord, CartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let locked = self.carts_repository.lock_cart(&mut tx, cart).await?;

        if locked.checked_out {
            return Err(CartsServiceError::AlreadyCheckedOut);
        }

        let prices = self.products_repository.list_prices(&mut tx, cart).await?;
        let total_cost = checkout_total(prices).ok_or(CartsServiceError::InvalidData)?;

        let mut checked_out = self
            .carts_repository
            .checkout_cart(&mut tx, cart, total_cost)
            .await?;
        let products = self.products_repository.list_product_ids(&mut tx, cart).await?;

        tx.commit().await?;

        checked_out.lines = project_quantities(products);

        info!(cart_id = %cart, %total_cost, "checked out cart");

        Ok(CheckoutRecord {
            cart: checked_out,
            total_cost,
        })
    }

    #[tracing::instrument(
        name = "carts.service.delete_cart",
        skip(self),
        fields(cart_id = %cart),
        err
    )]
    async fn delete_cart(&self, cart: CartId) -> Result<(), CartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let rows_affected = self.carts_repository.delete_cart(&mut tx, cart).await?;

        tx.commit().await?;

        if rows_affected == 0 {
            warn!(cart_id = %cart, "tried to delete a cart that does not exist");
        }

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Retrieves all carts with their product quantities, ordered by id.
    async fn list_carts(&self) -> Result<Vec<CartRecord>, CartsServiceError>;

    /// Retrieve a single cart.
    async fn get_cart(&self, cart: CartId) -> Result<CartRecord, CartsServiceError>;

    /// Creates an empty cart.
    async fn create_cart(&self) -> Result<CartRecord, CartsServiceError>;

    /// Adds `quantity` units of a product to an open cart.
    async fn add_product(
        &self,
        cart: CartId,
        item: NewCartItem,
    ) -> Result<CartRecord, CartsServiceError>;

    /// Freezes the cart and stores its rounded total.
    async fn checkout(&self, cart: CartId) -> Result<CheckoutRecord, CartsServiceError>;

    /// Deletes a cart and its product references. Missing carts are ignored.
    async fn delete_cart(&self, cart: CartId) -> Result<(), CartsServiceError>;
}
