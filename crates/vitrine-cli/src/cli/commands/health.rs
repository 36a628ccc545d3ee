//! Health command handler.

use anyhow::Result;
use vitrine_core::api::ShopClient;
use vitrine_core::config::Config;

/// Prints the API health report, or fails if the API is unreachable.
pub async fn check(config: &Config) -> Result<()> {
    let client = ShopClient::new(config);
    let report = client.health().await?;
    match report.database {
        Some(database) => println!("{} (database: {database})", report.status),
        None => println!("{}", report.status),
    }
    Ok(())
}
