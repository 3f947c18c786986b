//! Test Helpers

use rust_decimal::Decimal;

use crate::{
    domain::{
        carts::{
            CartsService, CartsServiceError,
            data::NewCartItem,
            records::{CartId, CartRecord},
        },
        products::{
            ProductsService, ProductsServiceError,
            data::NewProduct,
            records::{ProductId, ProductRecord},
        },
    },
    test::TestContext,
};

pub(crate) fn new_product(name: &str, price: Decimal, labels: &[&str]) -> NewProduct {
    NewProduct {
        name: Some(name.to_string()),
        price: Some(price),
        labels: Some(labels.iter().map(ToString::to_string).collect()),
    }
}

pub(crate) async fn create_product(
    ctx: &TestContext,
    name: &str,
    price: Decimal,
) -> Result<ProductRecord, ProductsServiceError> {
    ctx.products
        .create_product(new_product(name, price, &["food"]))
        .await
}

pub(crate) async fn add_product(
    ctx: &TestContext,
    cart: CartId,
    product: ProductId,
    quantity: i64,
) -> Result<CartRecord, CartsServiceError> {
    ctx.carts
        .add_product(
            cart,
            NewCartItem {
                product_id: Some(product),
                quantity: Some(quantity),
            },
        )
        .await
}
