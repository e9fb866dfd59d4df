mod cli;
mod commands;
mod config;
mod logger;
mod table;

use clap::Parser;

use crate::cli::Cli;
use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::from_env().with_api_url(cli.api_url.clone());
    logger::init_logger(&config.log_level, config.log_dir.as_deref());

    tracing::debug!(base_url = %config.client.base_url, "cafe-admin starting");
    commands::run(cli, config).await
}
