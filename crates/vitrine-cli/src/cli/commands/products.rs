//! Product command handlers.

use anyhow::{Context, Result};
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};
use vitrine_core::api::{ApiErrorKind, NewProduct, Product, ShopClient, parse_price};
use vitrine_core::config::Config;
use vitrine_core::session;

/// Lists all products as a table.
pub async fn list(config: &Config) -> Result<()> {
    let client = ShopClient::new(config);
    let products = client.list_products().await.context("fetch products")?;

    if products.is_empty() {
        println!("No products found.");
        return Ok(());
    }

    println!("{}", render_table(&products));
    Ok(())
}

/// Adds a product. Requires a persisted session.
pub async fn add(config: &Config, name: &str, price: &str, description: &str) -> Result<()> {
    require_session()?;

    let price = parse_price(price)?;
    let product = NewProduct::new(name, price, description)?;

    let client = ShopClient::new(config);
    client.create_product(&product).await.map_err(|err| {
        if err.kind == ApiErrorKind::Validation {
            anyhow::Error::new(err)
        } else {
            tracing::warn!(error = %err, "product creation failed");
            anyhow::anyhow!("Failed to add product. Please try again.")
        }
    })?;
    println!("Added '{}' at ${:.2}", product.name, product.price);
    Ok(())
}

/// Deletes a product by id. Requires a persisted session.
pub async fn delete(config: &Config, id: &str) -> Result<()> {
    require_session()?;

    let client = ShopClient::new(config);
    client.delete_product(id).await.context("delete product")?;
    println!("Deleted {id}");
    Ok(())
}

/// The API trusts the client's asserted identity, so "logged in" means a
/// session file exists. Mirrors the route guard in the interactive app.
fn require_session() -> Result<String> {
    session::load()?.context("Not logged in. Run `vitrine login` first")
}

fn render_table(products: &[Product]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(["ID", "Name", "Price", "Description"]);
    for product in products {
        table.add_row([
            product.id.clone(),
            product.name.clone(),
            format!("${:.2}", product.price),
            product.description.clone(),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_formats_price_as_currency() {
        let products = vec![Product {
            id: "1".to_string(),
            name: "Mug".to_string(),
            price: 9.5,
            description: "Ceramic".to_string(),
        }];
        let rendered = render_table(&products).to_string();
        assert!(rendered.contains("$9.50"));
        assert!(rendered.contains("Mug"));
    }
}
