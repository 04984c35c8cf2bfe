mod app;
mod ui;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use linkvault_core::{
    load_config, validate_config, AccessGate, ActivityStore, ApibaySearcher, CatalogFetcher,
    CatalogRepository, Config, HttpCatalogFetcher, SnapshotCache, SqliteActivityStore,
    TorrentSearcher, TrustScoringEngine,
};

use app::App;

#[derive(Parser)]
#[command(name = "linkvault", about = "Terminal browser for the published link catalog")]
struct Args {
    /// Path to the configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {}", e);
        eprintln!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Keep the screen clean by default; RUST_LOG opts into more.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    // A missing config file is fine; everything has a default.
    let config = if args.config.exists() {
        load_config(&args.config)
            .with_context(|| format!("Failed to load config from {:?}", args.config))?
    } else {
        info!(path = %args.config.display(), "no config file, using defaults");
        Config::default()
    };
    validate_config(&config).context("Configuration validation failed")?;

    let store: Arc<dyn ActivityStore> = Arc::new(
        SqliteActivityStore::new(&config.database.path)
            .context("Failed to open the activity store")?,
    );

    let fetcher: Arc<dyn CatalogFetcher> = Arc::new(
        HttpCatalogFetcher::new(&config.catalog).context("Failed to create the catalog fetcher")?,
    );
    let repository = CatalogRepository::new(fetcher, SnapshotCache::new(config.cache.path.clone()));

    let searcher: Arc<dyn TorrentSearcher> = Arc::new(
        ApibaySearcher::new(&config.search).context("Failed to create the torrent searcher")?,
    );

    let gate = AccessGate::new(config.access.passphrase.clone());

    let app = App::new(
        repository,
        searcher,
        TrustScoringEngine::new(),
        store,
        gate,
    );
    app.run().await
}
