//! RANI API Server - JSON endpoint for the PA Medan information assistant
//!
//! `POST /api/rani` with `{"pertanyaan": "..."}` returns the answer, the
//! retrieved context, and a timestamp.

use anyhow::Result;
use rani_api::state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("rani_api=info".parse()?)
                .add_directive("rani_core=info".parse()?)
                .add_directive("tower_http=debug".parse()?),
        )
        .init();

    // Build the corpus index and engine; any failure here is fatal
    info!("Menyiapkan RANI...");
    let state = AppState::new().await?;
    let state = Arc::new(state);

    let app = rani_api::router(state);

    // Parse bind address
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(5000);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Menjalankan RANI API di http://{}/api/rani", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
