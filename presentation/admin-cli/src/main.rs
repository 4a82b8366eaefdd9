use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dotenvy::dotenv;

mod commands {
    pub mod auth;
    pub mod dashboard;
    pub mod products;
    pub mod users;
}
mod config {
    pub mod api_config;
    pub mod app_config;
    pub mod errors;
}
mod console {
    pub mod navigator;
    pub mod render;
}
mod setup {
    pub mod dependency_injection;
}

use commands::{
    auth::{LoginArgs, RegisterArgs},
    dashboard::DashboardArgs,
    products::ProductCommand,
    users::UserCommand,
};
use config::app_config::{AppConfig, ConfigOverrides};
use setup::dependency_injection::DependencyContainer;

#[derive(Parser)]
#[command(version, about = "Administer the product inventory", long_about = None)]
#[command(propagate_version = true)]
#[command(name = "inventory-admin")]
struct Cli {
    /// Inventory API base URL (overrides INVENTORY_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,
    /// Directory holding the saved session (overrides INVENTORY_TOKEN_DIR)
    #[arg(long, global = true)]
    token_dir: Option<PathBuf>,
    /// Keep the session in memory for this run only
    #[arg(long, global = true)]
    ephemeral: bool,
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and save the session
    Login(LoginArgs),
    /// Create an account and sign in with it
    Register(RegisterArgs),
    /// Forget the saved session
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Manage products
    #[command(subcommand)]
    Products(ProductCommand),
    /// Summary metrics and the first page of products
    Dashboard(DashboardArgs),
    /// Manage user accounts
    #[command(subcommand)]
    Users(UserCommand),
}

/// Inventory admin entry point
///
/// Loads configuration, wires the adapters into the state managers and runs
/// one subcommand. Any failure ends the process with a non-zero exit code.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 1. Initialize tracing with RUST_LOG env filter
    let default_level = if cli.verbose { "debug" } else { "info" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env(ConfigOverrides {
        api_url: cli.api_url,
        token_dir: cli.token_dir,
        ephemeral: cli.ephemeral,
    })?;
    tracing::debug!(api_url = %config.api.base_url, "Configuration loaded");

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config);

    // 5. Run the command
    match cli.command {
        Commands::Login(args) => args.run(&container).await,
        Commands::Register(args) => args.run(&container).await,
        Commands::Logout => commands::auth::logout(&container).await,
        Commands::Whoami => commands::auth::whoami(&container).await,
        Commands::Products(command) => command.run(&container).await,
        Commands::Dashboard(args) => args.run(&container).await,
        Commands::Users(command) => command.run(&container).await,
    }
}
