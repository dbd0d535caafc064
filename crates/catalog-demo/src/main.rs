//! # Catalog Demo
//!
//! Walks both mirrored collections through a full create/fetch/update/delete
//! cycle against a json-server-style backend (see the `config` module for
//! the endpoints; defaults target `localhost:5575`).

use catalog_demo::config::Config;
use catalog_demo::lifecycle::Catalog;
use catalog_demo::model::{Product, Review};
use collection_store::tracing::setup_tracing;
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting catalog demo");

    let config = Config::load();
    let mut catalog = Catalog::new(&config).map_err(|e| e.to_string())?;

    let span = tracing::info_span!("product_flow");
    let product_id = async {
        catalog
            .products
            .fetch_products()
            .await
            .map_err(|e| e.to_string())?;
        info!(count = catalog.products.products().len(), "Fetched products");

        let params = Product::new(
            "Mechanical Keyboard",
            "electronics",
            89.0,
            "Tenkeyless, brown switches",
        );
        let product_id = catalog
            .products
            .add_product(params)
            .await
            .map_err(|e| e.to_string())?;
        info!(product_id, "Product created");

        let mut discounted = catalog
            .products
            .products()
            .iter()
            .find(|p| p.id == Some(product_id))
            .cloned()
            .ok_or("created product missing from mirror")?;
        discounted.price = 79.0;
        catalog
            .products
            .update_product(product_id, discounted)
            .await
            .map_err(|e| e.to_string())?;
        info!(product_id, "Product price updated");

        Ok::<u64, String>(product_id)
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("review_flow");
    async {
        catalog
            .reviews
            .fetch_reviews()
            .await
            .map_err(|e| e.to_string())?;
        info!(count = catalog.reviews.reviews().len(), "Fetched reviews");

        let review_id = catalog
            .reviews
            .add_review(Review::new(5, "Clacky in the best way", product_id))
            .await
            .map_err(|e| e.to_string())?;
        info!(review_id, product_id, "Review created");

        catalog
            .reviews
            .remove_review(review_id)
            .await
            .map_err(|e| e.to_string())?;
        info!(review_id, "Review removed");

        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    catalog
        .products
        .remove_product(product_id)
        .await
        .map_err(|e| e.to_string())?;
    info!(product_id, "Product removed");

    info!("Catalog demo completed successfully");
    Ok(())
}
