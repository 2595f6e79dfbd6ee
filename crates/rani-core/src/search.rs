//! Semantic retrieval by cosine similarity
//!
//! The query is embedded with the query retrieval intent, scored against
//! every document vector, and the top-k paragraphs are joined into a
//! single context blob. Retrieval failure never aborts a turn: an
//! embedding error degrades the context to a diagnostic placeholder.

use crate::embeddings::{Embedder, TaskKind};
use crate::index::CorpusIndex;

/// Default number of paragraphs supplied as context
pub const DEFAULT_TOP_K: usize = 3;

/// Cosine similarity of two vectors
///
/// Both vectors are normalized with a zero-norm guard (a zero norm is
/// replaced by 1), so a degenerate zero vector scores 0 against
/// everything instead of producing a division fault.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let norm_a = guard_norm(norm(a));
    let norm_b = guard_norm(norm(b));
    dot(a, b) / (norm_a * norm_b)
}

fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

fn norm(v: &[f32]) -> f32 {
    dot(v, v).sqrt()
}

fn guard_norm(n: f32) -> f32 {
    if n == 0.0 {
        1.0
    } else {
        n
    }
}

/// Indices of the `top_k` highest scores, descending
///
/// Ties break toward the lower original index. `top_k` larger than the
/// score count clamps to the count.
pub fn top_k_indices(scores: &[f32], top_k: usize) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..scores.len()).collect();
    indices.sort_by(|&a, &b| {
        scores[b]
            .partial_cmp(&scores[a])
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.cmp(&b))
    });
    indices.truncate(top_k.min(scores.len()));
    indices
}

/// Score the query against every indexed paragraph and join the top-k
/// matches with a blank-line separator
///
/// On embedding failure this returns a placeholder string instead of an
/// error; a transient retrieval failure must only degrade the context,
/// never break the turn.
pub async fn retrieve(
    embedder: &dyn Embedder,
    index: &CorpusIndex,
    query: &str,
    top_k: usize,
) -> String {
    let query_vec = match embedder.embed(query, TaskKind::Query).await {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!("Gagal mencari konteks: {}", e);
            return format!("(Gagal mencari konteks: {})", e);
        }
    };

    let scores: Vec<f32> = index
        .vectors()
        .iter()
        .map(|doc| cosine_similarity(doc, &query_vec))
        .collect();

    let selected = top_k_indices(&scores, top_k);
    selected
        .iter()
        .map(|&i| index.paragraphs()[i].as_str())
        .collect::<Vec<_>>()
        .join("\n\n")
}
