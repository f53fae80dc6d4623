//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::index::ChunkIndex;
use crate::types::ChunkIndexConfig;

/// Build a sentence of `words` repetitions of `word`, terminated by a period.
pub fn sentence(word: &str, words: usize) -> String {
    let mut out = vec![word; words].join(" ");
    out.push('.');
    out
}

/// Join sentences into a document with single-space separators.
pub fn prose(sentences: &[String]) -> String {
    sentences.join(" ")
}

/// A multi-sentence paragraph about `topic`, long enough to span several
/// chunks at small chunk sizes.
pub fn paragraph(topic: &str, sentences: usize) -> String {
    let lines: Vec<String> = (0..sentences)
        .map(|i| format!("The {topic} fact number {i} concerns {topic} habitats and diet."))
        .collect();
    prose(&lines)
}

/// An index over `document` with the given chunk size and default `top_k`.
pub fn indexed(document: &str, chunk_size: usize) -> ChunkIndex {
    let mut index = ChunkIndex::with_chunk_size(chunk_size);
    index.add_document(document);
    index
}

/// An index with fully explicit tuning.
pub fn indexed_with(document: &str, chunk_size: usize, top_k: usize) -> ChunkIndex {
    let mut index = ChunkIndex::new(ChunkIndexConfig { chunk_size, top_k });
    index.add_document(document);
    index
}
