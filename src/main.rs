use anyhow::Result;
use tracing_subscriber::EnvFilter;

use shorty::config;

#[tokio::main]
async fn main() -> Result<()> {
    // Optional .env file for local development
    let _ = dotenvy::dotenv();

    let config = config::load_from_env()?;

    let filter =
        EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if config.log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    config.print_summary();

    shorty::server::run(config).await
}
