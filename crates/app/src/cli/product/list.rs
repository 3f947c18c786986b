use clap::Args;
use storefront_app::domain::products::{PgProductsService, ProductsService};

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct ListProductsArgs {
    #[command(flatten)]
    database: DatabaseArgs,
}

pub(crate) async fn run(args: ListProductsArgs) -> Result<(), String> {
    let service = PgProductsService::new(args.database.connect().await?);

    let products = service
        .list_products()
        .await
        .map_err(|error| format!("failed to list products: {error}"))?;

    if products.is_empty() {
        println!("no products found");
        return Ok(());
    }

    for product in products {
        let labels: Vec<&str> = product.labels.iter().map(|label| label.as_str()).collect();

        println!("product_id: {}", product.id);
        println!("name: {}", product.name);
        println!("price: {}", product.price);
        println!("added_at: {}", product.added_at.strftime("%Y/%m/%d"));
        println!("labels: [{}]", labels.join(", "));
        println!();
    }

    Ok(())
}
