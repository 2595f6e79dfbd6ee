//! Application state for the RANI API
//!
//! Holds the chat engine, built exactly once at startup. The corpus index
//! inside it is immutable and safely shared across concurrent requests.

use anyhow::Result;
use rani_core::embeddings::Embedder;
use rani_core::generate::Generator;
use rani_core::{ChatEngine, GeminiClient, RaniConfig};
use std::sync::Arc;
use tracing::info;

/// Shared application state
pub struct AppState<P: Embedder + Generator> {
    /// The retrieval/generation core
    pub engine: ChatEngine<P>,
}

impl AppState<GeminiClient> {
    /// Initialize application state from environment configuration
    ///
    /// Fatal on missing credentials, missing source, empty corpus, or
    /// total embedding failure; no partial service is offered.
    pub async fn new() -> Result<Self> {
        let config = RaniConfig::from_env()?;
        info!("Loading source document from {:?}", config.source_path);

        let provider = Arc::new(GeminiClient::new(&config.api_key));
        let engine = ChatEngine::from_config(provider, &config).await?;

        Ok(Self { engine })
    }
}

impl<P: Embedder + Generator> AppState<P> {
    /// State with an explicit engine, used by tests
    pub fn with_engine(engine: ChatEngine<P>) -> Self {
        Self { engine }
    }
}
