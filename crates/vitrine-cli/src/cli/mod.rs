//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use vitrine_core::config::Config;

mod commands;

#[derive(Parser)]
#[command(name = "vitrine")]
#[command(version)]
#[command(about = "Terminal client for the Vitrine shop API")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override the API base URL for this invocation
    #[arg(long, value_name = "URL", env = "VITRINE_API_URL")]
    api_url: Option<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Browse and manage products
    Products {
        #[command(subcommand)]
        command: ProductCommands,
    },

    /// Log in and persist the session
    Login {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        password: String,
    },

    /// Create a new account
    Register {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        password: String,
    },

    /// Remove the persisted session
    Logout,

    /// Show the logged-in username, if any
    Whoami,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Check that the API is reachable
    Health,
}

#[derive(clap::Subcommand)]
enum ProductCommands {
    /// List all products
    List,
    /// Add a product (requires login)
    Add {
        /// Product name
        #[arg(long)]
        name: String,
        /// Price, parsed as a decimal (e.g. 19.99)
        #[arg(long)]
        price: String,
        /// Optional description
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Delete a product by id (requires login)
    Delete {
        /// Server-assigned product id
        #[arg(value_name = "PRODUCT_ID")]
        id: String,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
    /// Set the API base URL in the config file
    SetUrl {
        #[arg(value_name = "URL")]
        url: String,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let mut config = Config::load().context("load config")?;

    if let Some(url) = cli.api_url {
        config.api_base_url = url;
    }

    // Default to the interactive TUI. Its logs go to a file; everything
    // else logs to stderr.
    let Some(command) = cli.command else {
        let _guard = crate::logging::init_file();
        return vitrine_tui::run_app(&config).await;
    };

    crate::logging::init_stderr();

    match command {
        Commands::Products { command } => match command {
            ProductCommands::List => commands::products::list(&config).await,
            ProductCommands::Add {
                name,
                price,
                description,
            } => commands::products::add(&config, &name, &price, &description).await,
            ProductCommands::Delete { id } => commands::products::delete(&config, &id).await,
        },

        Commands::Login { username, password } => {
            commands::auth::login(&config, &username, &password).await
        }
        Commands::Register { username, password } => {
            commands::auth::register(&config, &username, &password).await
        }
        Commands::Logout => commands::auth::logout(),
        Commands::Whoami => commands::auth::whoami(),

        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
            ConfigCommands::SetUrl { url } => commands::config::set_url(&url),
        },

        Commands::Health => commands::health::check(&config).await,
    }
}
