//! RANI Core - Retrieval-augmented generation for a single institutional document
//!
//! This crate provides:
//! - Corpus loading and paragraph segmentation
//! - Embedding index construction (Gemini embeddings)
//! - Semantic top-k retrieval by cosine similarity
//! - Prompt assembly and answer generation
//! - Conversation history types
//! - Input guard shared by the front-ends

pub mod config;
pub mod corpus;
pub mod embeddings;
pub mod engine;
pub mod error;
pub mod generate;
pub mod gemini;
pub mod guard;
pub mod history;
pub mod index;
pub mod search;

// Re-export commonly used types
pub use config::RaniConfig;
pub use embeddings::{Embedder, TaskKind, EMBEDDING_DIM};
pub use engine::{ChatEngine, TurnReply};
pub use error::{ConfigError, CorpusError, EmbedError, GenerateError, IndexError};
pub use generate::Generator;
pub use gemini::GeminiClient;
pub use history::{ConversationLog, Speaker, Turn};
pub use index::CorpusIndex;
