//! RANI API - HTTP front-end for the PA Medan information assistant
//!
//! A thin adapter: one JSON endpoint translated onto the core's
//! retrieve/generate capability. Each request is its own session.

pub mod error;
pub mod handlers;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use rani_core::embeddings::Embedder;
use rani_core::generate::Generator;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use state::AppState;

/// Build the application router
pub fn router<P>(state: Arc<AppState<P>>) -> Router
where
    P: Embedder + Generator + 'static,
{
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/rani", post(handlers::ask))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
