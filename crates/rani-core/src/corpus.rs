//! Corpus loading and paragraph segmentation
//!
//! The source document is plain UTF-8 text with paragraphs separated by
//! one or more blank lines. Segmentation is a pure one-shot transformation;
//! any change to the source requires a restart and full re-embedding.

use std::path::Path;

use crate::error::CorpusError;

/// Split raw source text into trimmed, non-empty paragraphs
///
/// Paragraph identity is its index in the returned sequence; order follows
/// the source document.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    text.split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

/// Load the source document and segment it into paragraphs
///
/// Fails with `MissingSource` if the file does not exist and `EmptyCorpus`
/// if segmentation yields zero paragraphs.
pub fn load(path: &Path) -> Result<Vec<String>, CorpusError> {
    if !path.exists() {
        return Err(CorpusError::MissingSource(path.display().to_string()));
    }

    let text = std::fs::read_to_string(path).map_err(|source| CorpusError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let paragraphs = split_paragraphs(&text);
    if paragraphs.is_empty() {
        return Err(CorpusError::EmptyCorpus(path.display().to_string()));
    }

    Ok(paragraphs)
}
