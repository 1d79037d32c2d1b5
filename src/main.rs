use api::ApiClient;
use clap::Parser;
use cli::Cli;
use config::Config;
use log::debug;
use tracing_subscriber::EnvFilter;

mod api;
mod cli;
mod config;
mod error;
mod http;
mod model;
mod template;
mod workflows;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match dotenvy::dotenv() {
        Ok(path) => debug!("Loaded .env from {}", path.display()),
        Err(e) => debug!("No .env loaded: {e}"),
    }

    let cli = Cli::parse();
    let config = Config::from_env()?;
    let api = ApiClient::new(&config)?;

    cli::run(cli.command, &api).await?;

    Ok(())
}
