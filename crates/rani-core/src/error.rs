//! Error types for the RANI core
//!
//! Startup-level errors (config, corpus, index) are fatal and propagate
//! with `?`. Turn-level failures (retrieval, generation) never surface as
//! errors to the front-ends; they are absorbed into reply text at the
//! fail-soft boundaries in `search` and `generate`.

use thiserror::Error;

/// Configuration errors, all fatal at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("GEMINI_API_KEY belum diisi. Isi GEMINI_API_KEY di file .env")]
    MissingApiKey,
}

/// Corpus loading errors, all fatal at startup
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("File '{0}' tidak ditemukan")]
    MissingSource(String),

    #[error("Tidak ada paragraf di '{0}'. Pastikan file berisi teks dengan pemisah baris kosong")]
    EmptyCorpus(String),

    #[error("Gagal membaca '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Embedding service errors
#[derive(Debug, Error)]
pub enum EmbedError {
    #[error("Embedding request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Embedding service returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Embedding dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

/// Index construction errors
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("Semua embedding gagal. Pastikan GEMINI_API_KEY valid dan koneksi stabil")]
    AllEmbeddingsFailed,
}

/// Generation service errors
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Generation request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Generation service returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Generation response contained no text")]
    EmptyResponse,
}
