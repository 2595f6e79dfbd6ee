//! Embedding provider boundary
//!
//! Any embedding service that produces fixed 768-dimensional vectors and
//! distinguishes document embedding from query embedding can stand behind
//! the [`Embedder`] trait. The production implementation is
//! [`crate::GeminiClient`].

use async_trait::async_trait;

use crate::error::EmbedError;

/// Embedding dimension requested from the provider
pub const EMBEDDING_DIM: usize = 768;

/// Retrieval intent for an embedding request
///
/// Some embedding models encode corpus passages and incoming questions
/// asymmetrically; the intent tag selects which representation to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    /// A corpus passage, embedded once at index build time
    Document,
    /// An incoming question, embedded per turn
    Query,
}

/// Trait for embedding providers
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Embed a single text with the given retrieval intent
    ///
    /// Returns an `EMBEDDING_DIM`-length vector.
    async fn embed(&self, text: &str, task: TaskKind) -> Result<Vec<f32>, EmbedError>;
}
