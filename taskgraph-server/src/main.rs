mod config;
mod domain;
mod inbound;
mod outbound;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, long_about = None)]
struct Args {
    /// Path to the YAML configuration file
    #[arg(short, long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Maximum level of the emitted logs
    #[arg(short, long, default_value_t = tracing::Level::DEBUG)]
    log_level: tracing::Level,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .init();

    let config = config::Config::from_file(&args.config)?;

    let repository = outbound::repositories::Neo4jRepository::connect(&config.db)
        .await
        .context("failed to create driver")?;
    if config.db.unique_keys {
        repository
            .ensure_unique_keys()
            .await
            .context("failed to create uniqueness constraints")?;
    }

    let graph_service = domain::service::Service::new(repository);

    let server_config = inbound::HttpServerConfig {
        addr: config.app.listen_addr(),
    };
    let http_server = inbound::HttpServer::new(graph_service, server_config).await?;

    http_server.run().await
}
