//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use rust_decimal::Decimal;
use salvo::{affix_state::inject, catcher::Catcher, prelude::*};

use storefront_app::{
    context::AppContext,
    domain::{
        carts::{
            MockCartsService,
            records::{CartId, CartLine, CartRecord},
        },
        products::{
            MockProductsService,
            labels::Label,
            records::{ProductId, ProductRecord},
        },
    },
};

use crate::{errors::json_catcher, state::State};

/// A product dated 2026-03-01 priced 2.50 with the `drink` label.
pub(crate) fn make_product(id: i64) -> ProductRecord {
    ProductRecord {
        id: ProductId::from_i64(id),
        name: format!("Product {id}"),
        price: Decimal::new(250, 2),
        added_at: "2026-03-01T12:00:00Z"
            .parse::<Timestamp>()
            .unwrap_or(Timestamp::UNIX_EPOCH),
        labels: [Label::Drink].into_iter().collect(),
    }
}

/// An open cart holding the given `(product, quantity)` lines.
pub(crate) fn make_cart(id: i64, lines: &[(i64, u64)]) -> CartRecord {
    CartRecord {
        id: CartId::from_i64(id),
        checked_out: false,
        total_cost: None,
        lines: lines
            .iter()
            .map(|&(product_id, quantity)| CartLine {
                product_id: ProductId::from_i64(product_id),
                quantity,
            })
            .collect(),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_list_products().never();
    products.expect_get_product().never();
    products.expect_create_product().never();
    products.expect_delete_product().never();

    products
}

fn strict_carts_mock() -> MockCartsService {
    let mut carts = MockCartsService::new();

    carts.expect_list_carts().never();
    carts.expect_get_cart().never();
    carts.expect_create_cart().never();
    carts.expect_add_product().never();
    carts.expect_checkout().never();
    carts.expect_delete_cart().never();

    carts
}

fn state(products: MockProductsService, carts: MockCartsService) -> Arc<State> {
    State::from_app_context(AppContext {
        products: Arc::new(products),
        carts: Arc::new(carts),
    })
}

fn service(products: MockProductsService, carts: MockCartsService, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(state(products, carts))).push(route))
        .catcher(Catcher::default().hoop(json_catcher))
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    service(products, strict_carts_mock(), route)
}

pub(crate) fn carts_service(carts: MockCartsService, route: Router) -> Service {
    service(strict_products_mock(), carts, route)
}
