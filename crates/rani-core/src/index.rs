//! Embedding index construction
//!
//! Every paragraph is embedded exactly once at startup. The resulting
//! index is immutable for the process lifetime and is shared across
//! request handlers behind an `Arc` without locking.

use crate::corpus;
use crate::embeddings::{Embedder, TaskKind, EMBEDDING_DIM};
use crate::error::{CorpusError, IndexError};
use std::path::Path;

/// The ordered paragraph corpus paired with its embedding vectors
///
/// Invariant: `paragraphs.len() == vectors.len()`. A paragraph whose
/// embedding call failed keeps a zero vector; normalization in the
/// retriever guards the zero norm, so such a paragraph simply never
/// matches.
#[derive(Debug)]
pub struct CorpusIndex {
    paragraphs: Vec<String>,
    vectors: Vec<Vec<f32>>,
    failed: usize,
}

impl CorpusIndex {
    /// Embed every paragraph and build the index
    ///
    /// A single paragraph's failure is non-fatal: the paragraph keeps a
    /// zero vector and stays in the corpus. If every paragraph fails the
    /// build fails with `AllEmbeddingsFailed`, which signals a systemic
    /// problem (bad key, no connectivity) and must abort startup.
    pub async fn build(
        embedder: &dyn Embedder,
        paragraphs: Vec<String>,
    ) -> Result<Self, IndexError> {
        let mut vectors = Vec::with_capacity(paragraphs.len());
        let mut failed = 0;

        for para in &paragraphs {
            match embedder.embed(para, TaskKind::Document).await {
                Ok(vector) => vectors.push(vector),
                Err(e) => {
                    tracing::warn!("Gagal embedding paragraf: {}", e);
                    failed += 1;
                    vectors.push(vec![0.0; EMBEDDING_DIM]);
                }
            }
        }

        if !paragraphs.is_empty() && failed == paragraphs.len() {
            return Err(IndexError::AllEmbeddingsFailed);
        }
        if failed > 0 {
            tracing::warn!("{}/{} paragraf gagal di-embed", failed, paragraphs.len());
        }

        Ok(Self {
            paragraphs,
            vectors,
            failed,
        })
    }

    /// Load the source document and build the index in one step
    pub async fn from_source(
        embedder: &dyn Embedder,
        path: &Path,
    ) -> Result<Self, BuildError> {
        let paragraphs = corpus::load(path)?;
        Ok(Self::build(embedder, paragraphs).await?)
    }

    pub fn paragraphs(&self) -> &[String] {
        &self.paragraphs
    }

    pub fn vectors(&self) -> &[Vec<f32>] {
        &self.vectors
    }

    /// Number of paragraphs in the corpus
    pub fn len(&self) -> usize {
        self.paragraphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// Number of paragraphs whose embedding call failed
    pub fn failed_count(&self) -> usize {
        self.failed
    }
}

/// Startup error covering both corpus loading and index construction
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error(transparent)]
    Corpus(#[from] CorpusError),

    #[error(transparent)]
    Index(#[from] IndexError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EmbedError;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;

    /// Embedder that fails for paragraphs listed in `fail_on`
    struct FakeEmbedder {
        fail_on: Vec<usize>,
        calls: std::sync::Mutex<usize>,
    }

    impl FakeEmbedder {
        fn new(fail_on: Vec<usize>) -> Self {
            Self {
                fail_on,
                calls: std::sync::Mutex::new(0),
            }
        }
    }

    #[async_trait]
    impl Embedder for FakeEmbedder {
        async fn embed(&self, _text: &str, _task: TaskKind) -> Result<Vec<f32>, EmbedError> {
            let mut calls = self.calls.lock().unwrap();
            let i = *calls;
            *calls += 1;
            if self.fail_on.contains(&i) {
                return Err(EmbedError::Api {
                    status: 503,
                    body: "unavailable".to_string(),
                });
            }
            let mut v = vec![0.0; EMBEDDING_DIM];
            v[i % EMBEDDING_DIM] = 1.0;
            Ok(v)
        }
    }

    fn paragraphs(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("Paragraf {}", i)).collect()
    }

    #[tokio::test]
    async fn test_vectors_parallel_to_paragraphs() {
        let embedder = FakeEmbedder::new(vec![]);
        let index = CorpusIndex::build(&embedder, paragraphs(4)).await.unwrap();
        assert_eq!(index.paragraphs().len(), index.vectors().len());
        assert_eq!(index.len(), 4);
        assert_eq!(index.failed_count(), 0);
    }

    #[tokio::test]
    async fn test_partial_failure_substitutes_zero_vector() {
        let embedder = FakeEmbedder::new(vec![1]);
        let index = CorpusIndex::build(&embedder, paragraphs(3)).await.unwrap();
        assert_eq!(index.failed_count(), 1);
        assert_eq!(index.len(), 3);
        assert!(index.vectors()[1].iter().all(|&x| x == 0.0));
        assert!(index.vectors()[0].iter().any(|&x| x != 0.0));
    }

    #[tokio::test]
    async fn test_all_failures_are_fatal() {
        let embedder = FakeEmbedder::new(vec![0, 1, 2]);
        let err = CorpusIndex::build(&embedder, paragraphs(3)).await.unwrap_err();
        assert!(matches!(err, IndexError::AllEmbeddingsFailed));
    }

    #[tokio::test]
    async fn test_failure_count_matches_failed_calls() {
        let embedder = FakeEmbedder::new(vec![0, 3]);
        let index = CorpusIndex::build(&embedder, paragraphs(5)).await.unwrap();
        assert_eq!(index.failed_count(), 2);
    }
}
