//! Full-screen TUI for the Vitrine shop client.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod theme;
pub mod update;

use std::io::{IsTerminal, Write, stderr};

use anyhow::Result;
pub use runtime::TuiRuntime;
use vitrine_core::api::ShopClient;
use vitrine_core::config::Config;
use vitrine_core::session;

use crate::state::AppState;
use crate::theme::detect_dark_preference;

/// Runs the interactive shop TUI until the user quits.
pub async fn run_app(config: &Config) -> Result<()> {
    if !stderr().is_terminal() {
        anyhow::bail!(
            "The interactive shop requires a terminal.\n\
             Use `vitrine products list` for non-interactive output."
        );
    }

    let client = ShopClient::new(config);
    let stored_username = session::load()?;
    let dark_mode = detect_dark_preference();

    // Pre-TUI info goes to stderr; the alternate screen replaces it.
    let mut err = stderr();
    writeln!(err, "Vitrine Shop")?;
    writeln!(err, "API: {}", client.base_url())?;

    let state = AppState::new(client, stored_username, dark_mode);
    let mut runtime = TuiRuntime::new(state)?;
    runtime.run()?;

    writeln!(stderr(), "Goodbye.")?;
    Ok(())
}
