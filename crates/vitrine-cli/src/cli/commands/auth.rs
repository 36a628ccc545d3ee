//! Auth command handlers.

use anyhow::{Context, Result};
use vitrine_core::api::ShopClient;
use vitrine_core::config::Config;
use vitrine_core::session;

/// Verifies credentials and persists the session on success.
pub async fn login(config: &Config, username: &str, password: &str) -> Result<()> {
    let client = ShopClient::new(config);
    client.login(username, password).await?;
    session::save(username).context("persist session")?;
    println!("Logged in as {username}");
    Ok(())
}

/// Creates an account. Does not log in; that is a separate step.
pub async fn register(config: &Config, username: &str, password: &str) -> Result<()> {
    let client = ShopClient::new(config);
    client.register(username, password).await?;
    println!("Registered {username}. Run `vitrine login` to sign in.");
    Ok(())
}

/// Removes the persisted session. A no-op when none exists.
pub fn logout() -> Result<()> {
    session::clear().context("clear session")?;
    println!("Logged out.");
    Ok(())
}

/// Prints the persisted username, if any.
pub fn whoami() -> Result<()> {
    match session::load()? {
        Some(username) => println!("{username}"),
        None => println!("Not logged in."),
    }
    Ok(())
}
