//! Actions API server
//!
//! HTTP surface for the PME action pipeline. Provides endpoints for:
//!
//! - Catalog summary (distinct actions per school)
//! - Fuzzy action search
//! - Filter preview (selected rows plus derived schools)
//! - Spreadsheet and merged-PDF export

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use clap::Parser;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use action_catalog::Catalog;

mod error;
mod handlers;
mod models;
mod state;

use handlers::{
    handle_export_pdf, handle_export_spreadsheet, handle_health, handle_preview, handle_search,
    handle_summary,
};
use state::AppState;

/// Command-line arguments for the actions API server
#[derive(Parser, Debug)]
#[command(name = "actions-api")]
#[command(about = "Search and export server for the PME action catalog")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Path to the indexed action catalog (CSV)
    #[arg(long, default_value = "acciones_indexadas.csv")]
    catalog: PathBuf,

    /// Directory holding the source PDF documents
    #[arg(long, default_value = ".")]
    documents_dir: PathBuf,

    /// Directory the export artifacts are written to
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Without the catalog there is nothing to serve
    let catalog = match Catalog::load(&args.catalog) {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!("Failed to load catalog {}: {}", args.catalog.display(), e);
            anyhow::bail!("catalog load failed: {e}");
        }
    };
    info!(
        "Loaded {} catalog row(s), {} distinct action(s) from {}",
        catalog.len(),
        catalog.distinct_actions().len(),
        args.catalog.display()
    );

    // Create shared state
    let state = AppState {
        catalog: Arc::new(catalog),
        documents_dir: args.documents_dir,
        output_dir: args.output_dir,
    };

    // CORS configuration for web clients
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = Router::new()
        // Health check
        .route("/health", get(handle_health))
        // Catalog endpoints
        .route("/api/summary", get(handle_summary))
        .route("/api/search", post(handle_search))
        .route("/api/preview", post(handle_preview))
        // Export endpoints
        .route("/api/export/spreadsheet", post(handle_export_spreadsheet))
        .route("/api/export/pdf", post(handle_export_pdf))
        // Add middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Actions API listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
