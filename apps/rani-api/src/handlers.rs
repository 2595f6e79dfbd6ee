//! HTTP request handlers for the RANI API

use axum::{extract::State, Json};
use rani_core::embeddings::Embedder;
use rani_core::generate::Generator;
use rani_core::ConversationLog;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;

/// Maximum length of the context echoed back in a response
const KONTEKS_PREVIEW_CHARS: usize = 1000;

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub pertanyaan: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub pertanyaan: String,
    pub jawaban: String,
    pub konteks: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub paragraf: usize,
}

/// Health check endpoint
pub async fn health<P>(State(state): State<Arc<AppState<P>>>) -> Json<HealthResponse>
where
    P: Embedder + Generator,
{
    Json(HealthResponse {
        status: "ok".to_string(),
        paragraf: state.engine.index().len(),
    })
}

/// Answer one question
///
/// Each request is its own session: the history handed to the generator
/// holds only the incoming user turn.
pub async fn ask<P>(
    State(state): State<Arc<AppState<P>>>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AskResponse>, ApiError>
where
    P: Embedder + Generator,
{
    let pertanyaan = request
        .pertanyaan
        .ok_or_else(|| {
            ApiError::InvalidRequest("Body JSON harus berisi field 'pertanyaan'".to_string())
        })?
        .trim()
        .to_string();

    if pertanyaan.is_empty() {
        return Err(ApiError::InvalidRequest(
            "Pertanyaan tidak boleh kosong".to_string(),
        ));
    }

    info!("Pertanyaan baru: '{}'", pertanyaan);

    let mut log = ConversationLog::new();
    log.push_user(&pertanyaan);

    let reply = state.engine.answer(&pertanyaan, log.turns()).await;

    Ok(Json(AskResponse {
        pertanyaan,
        jawaban: reply.jawaban,
        konteks: truncate_chars(&reply.konteks, KONTEKS_PREVIEW_CHARS),
        timestamp: chrono::Local::now().to_rfc3339(),
    }))
}

/// Truncate to at most `max` characters on a char boundary
fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate_chars("halo", 1000), "halo");
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        let text = "paragraf \u{1F634}".repeat(200);
        let truncated = truncate_chars(&text, 1000);
        assert_eq!(truncated.chars().count(), 1000);
    }
}
