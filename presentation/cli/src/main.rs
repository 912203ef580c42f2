use std::path::PathBuf;

use clap::Parser;
use dotenvy::dotenv;

mod catalog;
mod commands;
mod config;
mod screens;
mod setup;

use commands::Command;
use config::app_config::AppConfig;
use setup::dependency_injection::DependencyContainer;

#[derive(Parser)]
#[command(name = "storefront")]
#[command(author, version, about = "Storefront catalog and shopping cart")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Directory holding the persisted cart (overrides STOREFRONT_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Catalog JSON file (overrides STOREFRONT_CATALOG_PATH)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Keep the cart in memory only
    #[arg(long, global = true)]
    ephemeral: bool,
}

/// Storefront CLI Entry Point
///
/// Restores the persisted cart, runs one screen or cart command and waits
/// for the cart to be written back before exiting.
/// - config/: Environment configuration (storage, persistence, catalog)
/// - setup/: Dependency injection and failure reporting
/// - catalog/: Product data source
/// - screens/: Catalog, product detail, cart and badge rendering
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter, on stderr so screens stay clean
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // 3. Load configuration, command line flags win
    let cli = Cli::parse();
    let mut config = AppConfig::from_env();
    if let Some(data_dir) = cli.data_dir {
        config.storage.data_dir = data_dir;
    }
    if let Some(path) = cli.catalog {
        config.catalog.path = Some(path);
    }
    config.storage.ephemeral |= cli.ephemeral;

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config).await?;

    // 5. Run command
    let output = commands::execute(
        &cli.command,
        container.cart.as_ref(),
        &container.catalog,
        &container.badge,
    );

    // 6. Wait for pending cart writes
    container.cart.flush().await;

    println!("{}", output?);
    Ok(())
}
