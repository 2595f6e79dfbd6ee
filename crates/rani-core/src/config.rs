//! Configuration for the RANI assistant
//!
//! All settings come from environment variables. Binaries call
//! `dotenvy::dotenv()` before `RaniConfig::from_env()` so a local `.env`
//! file works the same as real environment variables.

use std::path::PathBuf;

use crate::error::ConfigError;

/// Default source document, next to the working directory
pub const DEFAULT_SOURCE_PATH: &str = "sumber.txt";

/// Default sampling temperature (biased toward personable phrasing)
pub const DEFAULT_TEMPERATURE: f32 = 0.9;

/// Default bound on generated output
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 4096;

/// Runtime configuration shared by every front-end
#[derive(Debug, Clone)]
pub struct RaniConfig {
    /// Gemini API key (required)
    pub api_key: String,
    /// Path to the source document
    pub source_path: PathBuf,
    /// Sampling temperature for generation
    pub temperature: f32,
    /// Maximum output tokens for generation
    pub max_output_tokens: u32,
}

impl RaniConfig {
    /// Load configuration from environment variables
    ///
    /// Expected variables:
    /// - GEMINI_API_KEY: API key for the Gemini provider (required)
    /// - RANI_SOURCE_PATH: path to the source document (default: "sumber.txt")
    /// - RANI_TEMPERATURE: sampling temperature (default: 0.9)
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .unwrap_or_default()
            .trim()
            .to_string();
        if api_key.is_empty() {
            return Err(ConfigError::MissingApiKey);
        }

        let source_path = std::env::var("RANI_SOURCE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_SOURCE_PATH));

        let temperature = std::env::var("RANI_TEMPERATURE")
            .ok()
            .and_then(|t| t.parse().ok())
            .unwrap_or(DEFAULT_TEMPERATURE);

        Ok(Self {
            api_key,
            source_path,
            temperature,
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
        })
    }

    /// Configuration with explicit values, used by tests
    pub fn new(api_key: &str, source_path: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            source_path: PathBuf::from(source_path),
            temperature: DEFAULT_TEMPERATURE,
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
        }
    }
}
