use clap::Parser;
use sillage_api::RestApi;
use sillage_catalog::{CatalogConfig, CsvCatalog};
use sillage_core::{Engine, EngineConfig};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Perfume recommendations from scent-note overlap
#[derive(Parser, Debug)]
#[command(name = "sillage")]
#[command(about = "Recommend perfumes by shared notes", long_about = None)]
struct Args {
    /// Path to the semicolon-delimited catalog export
    #[arg(short, long, default_value = "fra_cleaned.csv")]
    catalog: PathBuf,

    /// HTTP API port
    #[arg(long, default_value_t = 5000)]
    http_port: u16,

    /// Drop perfumes with fewer reviews than this
    #[arg(long, default_value_t = 100)]
    min_rating_count: u32,

    /// Results returned when a request does not set top_n
    #[arg(long, default_value_t = 8)]
    top_n: usize,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting Sillage v{}", env!("CARGO_PKG_VERSION"));
    info!("Catalog: {:?}", args.catalog);

    let catalog = CsvCatalog::new(CatalogConfig {
        path: args.catalog.clone(),
        min_rating_count: args.min_rating_count,
        ..CatalogConfig::default()
    });
    let config = EngineConfig {
        default_top_n: args.top_n,
        ..EngineConfig::default()
    };
    let engine = Arc::new(Engine::with_config(catalog, config));

    // Build before accepting traffic so a broken catalog fails fast
    let stats = engine.warm_up()?;
    info!(
        "Loaded {} perfumes, {} notes, {} feature dims",
        stats.catalog_size, stats.vocabulary_size, stats.feature_dimension
    );

    let http_port = args.http_port;
    let http_handle = std::thread::spawn(move || {
        info!("Starting HTTP server on port {}", http_port);
        let sys = actix_web::rt::System::new();
        sys.block_on(async move {
            if let Err(e) = RestApi::start(engine, http_port).await {
                tracing::error!("HTTP server error: {}", e);
            }
        })
    });

    info!("Sillage ready at http://localhost:{}/", args.http_port);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
        _ = tokio::task::spawn_blocking(move || {
            http_handle.join().ok();
        }) => {
            info!("HTTP server stopped");
        }
    }

    info!("Shutting down...");
    Ok(())
}
