//! chromaview-ui - Total Ion Chromatogram Viewer
//!
//! Serves the web UI and JSON API: login/signup, mzXML upload, TIC
//! extraction and rendering, and the metabolite lookup table.

use anyhow::Result;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use chromaview_ui::parser::MzxmlParser;
use chromaview_ui::render::SvgRenderer;
use chromaview_ui::services::{ArtifactIngestor, MetaboliteClient};
use chromaview_ui::AppState;

const BIND_ADDR: &str = "127.0.0.1:5870";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting chromaview-ui");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    // Step 1: Resolve root folder (CLI arg > env var > config file > default)
    let cli_root = std::env::args().nth(1);
    let root_folder =
        chromaview_common::config::resolve_root_folder(cli_root.as_deref(), "CHROMAVIEW_ROOT");
    info!("Root folder: {}", root_folder.display());

    // Step 2: Create root folder and staging area if missing
    let initializer = chromaview_common::config::RootFolderInitializer::new(root_folder);
    initializer
        .ensure_directories_exist()
        .map_err(|e| anyhow::anyhow!("Failed to initialize root folder: {}", e))?;

    // Step 3: Open or create the credential database
    let db_path = initializer.database_path();
    info!("Database: {}", db_path.display());
    let db_pool = chromaview_common::db::init_database(&db_path).await?;
    info!("Database connection established");

    // Step 4: Wire up the pipeline and its collaborators
    let ingestor = ArtifactIngestor::new(initializer.staging_dir());
    let metabolites = MetaboliteClient::new().map_err(|e| anyhow::anyhow!("{}", e))?;
    let state = AppState::new(
        db_pool,
        ingestor,
        Arc::new(MzxmlParser::new()),
        Arc::new(SvgRenderer::new()),
        metabolites,
    );

    // Build router and serve
    let app = chromaview_ui::build_router(state);

    let listener = tokio::net::TcpListener::bind(BIND_ADDR).await?;
    info!("Listening on http://{}", BIND_ADDR);
    info!("Health check: http://{}/health", BIND_ADDR);

    axum::serve(listener, app).await?;

    Ok(())
}
