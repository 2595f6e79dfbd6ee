//! Gemini REST client
//!
//! Implements both provider boundaries against the Generative Language
//! API: `embedContent` for embeddings and `generateContent` for answers.
//! No retry is attempted; a failed call degrades the turn at the caller's
//! fail-soft boundary instead.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::{Deserialize, Serialize};

use crate::embeddings::{Embedder, TaskKind, EMBEDDING_DIM};
use crate::error::{EmbedError, GenerateError};
use crate::generate::Generator;

/// Embedding model identifier
pub const EMBED_MODEL: &str = "gemini-embedding-001";

/// Generation model identifier
pub const CHAT_MODEL: &str = "gemini-2.5-flash";

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// HTTP client for the Gemini API
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: &str) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Client pointed at a custom endpoint, used by tests
    pub fn with_base_url(api_key: &str, base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Ok(key) = HeaderValue::from_str(&self.api_key) {
            headers.insert("x-goog-api-key", key);
        }
        headers
    }
}

#[async_trait]
impl Embedder for GeminiClient {
    async fn embed(&self, text: &str, task: TaskKind) -> Result<Vec<f32>, EmbedError> {
        let url = format!("{}/models/{}:embedContent", self.base_url, EMBED_MODEL);
        let model = format!("models/{}", EMBED_MODEL);
        let body = EmbedRequest {
            model: &model,
            content: Content::from_text(text),
            task_type: match task {
                TaskKind::Document => "RETRIEVAL_DOCUMENT",
                TaskKind::Query => "RETRIEVAL_QUERY",
            },
            output_dimensionality: EMBEDDING_DIM,
        };

        let resp = self
            .client
            .post(&url)
            .headers(self.headers())
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(EmbedError::Api { status, body });
        }

        let parsed: EmbedResponse = resp.json().await?;
        let values = parsed.embedding.values;
        if values.len() != EMBEDDING_DIM {
            return Err(EmbedError::DimensionMismatch {
                expected: EMBEDDING_DIM,
                actual: values.len(),
            });
        }
        Ok(values)
    }
}

#[async_trait]
impl Generator for GeminiClient {
    async fn generate(
        &self,
        prompt: &str,
        temperature: f32,
        max_output_tokens: u32,
    ) -> Result<String, GenerateError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, CHAT_MODEL);
        let body = GenerateRequest {
            contents: vec![Content::from_text(prompt)],
            generation_config: GenerationConfig {
                temperature,
                max_output_tokens,
            },
        };

        let resp = self
            .client
            .post(&url)
            .headers(self.headers())
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(GenerateError::Api { status, body });
        }

        let parsed: GenerateResponse = resp.json().await?;
        let text = parsed
            .candidates
            .into_iter()
            .flat_map(|c| c.content.parts)
            .filter_map(|p| p.text)
            .collect::<Vec<_>>()
            .join("");

        if text.trim().is_empty() {
            return Err(GenerateError::EmptyResponse);
        }
        Ok(text)
    }
}

// ============================================================================
// Wire types
// ============================================================================

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

impl Content {
    fn from_text(text: &str) -> Self {
        Self {
            parts: vec![Part {
                text: text.to_string(),
            }],
        }
    }
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EmbedRequest<'a> {
    model: &'a str,
    content: Content,
    task_type: &'a str,
    output_dimensionality: usize,
}

#[derive(Deserialize)]
struct EmbedResponse {
    embedding: EmbeddingValues,
}

#[derive(Deserialize)]
struct EmbeddingValues {
    values: Vec<f32>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}
