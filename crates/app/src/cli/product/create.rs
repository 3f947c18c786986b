use clap::Args;
use rust_decimal::Decimal;
use storefront_app::domain::products::{
    PgProductsService, ProductsService, ProductsServiceError, data::NewProduct,
};

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct CreateProductArgs {
    /// Product name, unique across the catalogue
    #[arg(long)]
    name: String,

    /// Unit price, e.g. 4.99
    #[arg(long)]
    price: Decimal,

    /// Label to attach; repeat for several (drink, food, clothes, limited)
    #[arg(long = "label")]
    labels: Vec<String>,

    #[command(flatten)]
    database: DatabaseArgs,
}

pub(crate) async fn run(args: CreateProductArgs) -> Result<(), String> {
    let service = PgProductsService::new(args.database.connect().await?);

    let product = service
        .create_product(NewProduct {
            name: Some(args.name),
            price: Some(args.price),
            labels: Some(args.labels),
        })
        .await
        .map_err(|error| match error {
            ProductsServiceError::Validation(errors) => format!("invalid product: {errors}"),
            other => format!("failed to create product: {other}"),
        })?;

    println!("product_id: {}", product.id);
    println!("name: {}", product.name);
    println!("price: {}", product.price);

    Ok(())
}
