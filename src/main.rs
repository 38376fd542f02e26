use std::path::PathBuf;

use clap::Parser;
use clinked::{seed, server};
use clinked_core::config::Config;

#[derive(Parser)]
#[command(name = "clinked", about = "Paginated, filterable article listing service")]
struct Cli {
    /// Config file (defaults to ~/.config/clinked/config.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override `[server] host`.
    #[arg(long)]
    host: Option<String>,

    /// Override `[server] port`.
    #[arg(long)]
    port: Option<u16>,

    /// Load the sample articles before serving.
    #[arg(long)]
    seed: bool,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    tracing::debug!(?config, "configuration loaded");

    let repo = clinked_core::store::open(&config.store)?;
    if cli.seed || config.seed.enabled {
        seed::seed_articles(repo.as_ref(), config.seed.count)?;
    }

    server::serve(&config.server, repo).await
}
