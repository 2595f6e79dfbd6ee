//! Chat engine - the single capability every front-end calls
//!
//! One turn: retrieve context for the question, then generate a reply
//! against the caller-supplied history. The engine owns the immutable
//! corpus index and the provider client; it never owns a session.

use std::sync::Arc;

use crate::config::RaniConfig;
use crate::embeddings::Embedder;
use crate::generate::{self, Generator};
use crate::history::Turn;
use crate::index::{BuildError, CorpusIndex};
use crate::search::{self, DEFAULT_TOP_K};

/// Context and reply produced by one turn
#[derive(Debug, Clone)]
pub struct TurnReply {
    /// The joined retrieved paragraphs (or a placeholder on failure)
    pub konteks: String,
    /// The assistant's reply text (always present)
    pub jawaban: String,
}

/// One retrieval/generation core shared by all front-ends
pub struct ChatEngine<P: Embedder + Generator> {
    provider: Arc<P>,
    index: Arc<CorpusIndex>,
    temperature: f32,
    max_output_tokens: u32,
}

impl<P: Embedder + Generator> ChatEngine<P> {
    pub fn new(provider: Arc<P>, index: Arc<CorpusIndex>, config: &RaniConfig) -> Self {
        Self {
            provider,
            index,
            temperature: config.temperature,
            max_output_tokens: config.max_output_tokens,
        }
    }

    /// Load the corpus, build the index, and assemble the engine
    ///
    /// Any failure here is fatal: no partial service is offered.
    pub async fn from_config(provider: Arc<P>, config: &RaniConfig) -> Result<Self, BuildError> {
        let index = CorpusIndex::from_source(provider.as_ref(), &config.source_path).await?;
        tracing::info!(
            "Corpus index built: {} paragraf, {} gagal",
            index.len(),
            index.failed_count()
        );
        Ok(Self::new(provider, Arc::new(index), config))
    }

    pub fn index(&self) -> &CorpusIndex {
        &self.index
    }

    /// Answer one question against the supplied history
    ///
    /// Never fails: retrieval degrades to a placeholder context and
    /// generation degrades to a persona-consistent error message.
    pub async fn answer(&self, question: &str, history: &[Turn]) -> TurnReply {
        let konteks = search::retrieve(
            self.provider.as_ref(),
            &self.index,
            question,
            DEFAULT_TOP_K,
        )
        .await;

        let jawaban = generate::answer_with(
            self.provider.as_ref(),
            question,
            &konteks,
            history,
            self.temperature,
            self.max_output_tokens,
        )
        .await;

        TurnReply { konteks, jawaban }
    }
}
