//! Storefront JSON API routes

use salvo::Router;

use crate::{carts, products};

/// Product and cart resources.
pub fn app_router() -> Router {
    Router::new()
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .post(products::create::handler)
                .push(
                    Router::with_path("{product}")
                        .get(products::get::handler)
                        .delete(products::delete::handler),
                ),
        )
        .push(
            Router::with_path("carts")
                .get(carts::index::handler)
                .post(carts::create::handler)
                .push(
                    Router::with_path("{cart}")
                        .get(carts::get::handler)
                        .put(carts::update::handler)
                        .delete(carts::delete::handler)
                        .push(Router::with_path("checkout").post(carts::checkout::handler)),
                ),
        )
}
