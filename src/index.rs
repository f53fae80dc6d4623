//! The chunk index: ingestion, retrieval, and RAG structure assembly.
//!
//! A `ChunkIndex` owns everything it is given - documents, prompts, and the
//! chunk set derived from the most recent document. Retrieval is read-only
//! and may run any number of times; there is no teardown beyond drop.
//!
//! # Invariants
//!
//! - `chunks` always reflects the most recently added document, chunked with
//!   the configured `chunk_size`.
//! - Retrieval order is deterministic: stable descending sort by score, with
//!   ties keeping document order.
//! - No operation here can fail or panic; "no data" cases return empty
//!   sequences or the fixed sentinel message.

use std::cmp::Ordering;

use crate::chunking::split_into_chunks;
use crate::scoring::{score_chunk, QueryTerms};
use crate::types::{ChunkIndexConfig, RagChunk, ScoredChunk};

/// Fixed response when generation is asked for and no chunks exist.
pub const NO_RESULTS_MESSAGE: &str = "No relevant documents found.";

/// An in-memory lexical retrieval index over one document's passages.
///
/// Documents and prompts accumulate across calls, but only the most recently
/// added document's chunk set is active - re-adding a document replaces the
/// chunks while the raw document strings are retained. Batch prompt
/// association therefore always runs against the latest document.
#[derive(Debug, Clone, Default)]
pub struct ChunkIndex {
    config: ChunkIndexConfig,
    documents: Vec<String>,
    prompts: Vec<String>,
    chunks: Vec<String>,
}

impl ChunkIndex {
    /// Create an index with explicit configuration.
    pub fn new(config: ChunkIndexConfig) -> Self {
        ChunkIndex {
            config,
            ..ChunkIndex::default()
        }
    }

    /// Create an index with the given chunk size and default `top_k`.
    pub fn with_chunk_size(chunk_size: usize) -> Self {
        ChunkIndex::new(ChunkIndexConfig {
            chunk_size,
            ..ChunkIndexConfig::default()
        })
    }

    /// The configuration this index was built with.
    pub fn config(&self) -> &ChunkIndexConfig {
        &self.config
    }

    /// Store a document and chunk it immediately, replacing any previously
    /// active chunk set. An empty document yields an empty chunk set.
    pub fn add_document(&mut self, document: impl Into<String>) {
        let document = document.into();
        self.chunks = split_into_chunks(&document, self.config.chunk_size);
        tracing::debug!(
            document_chars = document.chars().count(),
            chunk_count = self.chunks.len(),
            "chunked document"
        );
        self.documents.push(document);
    }

    /// Store a prompt for later batch association. No deduplication.
    pub fn add_prompt(&mut self, prompt: impl Into<String>) {
        self.prompts.push(prompt.into());
    }

    /// The active chunk set, in document order.
    pub fn chunks(&self) -> &[String] {
        &self.chunks
    }

    /// Every document ever added, in insertion order.
    pub fn documents(&self) -> &[String] {
        &self.documents
    }

    /// Every prompt ever added, in insertion order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Number of active chunks.
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// `true` when no chunks are active (nothing to retrieve from).
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Score every active chunk against `query` and return the full ranked
    /// sequence, highest score first, ties in document order.
    ///
    /// This is the diagnostic view of the retrieval pipeline; most callers
    /// want [`retrieve_relevant_chunks`](Self::retrieve_relevant_chunks).
    pub fn score_chunks(&self, query: &str) -> Vec<ScoredChunk> {
        let terms = QueryTerms::new(query);
        let mut scored: Vec<ScoredChunk> = self
            .chunks
            .iter()
            .map(|chunk| ScoredChunk {
                score: score_chunk(chunk, &terms),
                chunk: chunk.clone(),
            })
            .collect();

        // Stable sort: equal scores keep document order, which makes the
        // empty-query ordering well defined.
        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        scored
    }

    /// Return the `top_k` highest-scoring chunks for `query`, best first.
    ///
    /// An index with no active chunks returns an empty sequence.
    pub fn retrieve_relevant_chunks(&self, query: &str, top_k: usize) -> Vec<String> {
        if self.chunks.is_empty() {
            return Vec::new();
        }
        let mut ranked = self.score_chunks(query);
        ranked.truncate(top_k);
        ranked.into_iter().map(|scored| scored.chunk).collect()
    }

    /// Retrieve with the configured `top_k`.
    pub fn retrieve(&self, query: &str) -> Vec<String> {
        self.retrieve_relevant_chunks(query, self.config.top_k)
    }

    /// Pair every stored prompt with its most relevant chunks.
    ///
    /// Prompts are processed in insertion order; within each prompt, pairs
    /// follow rank order. Each prompt contributes up to the configured
    /// `top_k` pairs.
    pub fn create_rag_structure(&self) -> Vec<RagChunk> {
        let mut structure = Vec::new();
        for prompt in &self.prompts {
            for chunk in self.retrieve_relevant_chunks(prompt, self.config.top_k) {
                structure.push(RagChunk {
                    prompt: prompt.clone(),
                    document: chunk,
                });
            }
        }
        tracing::debug!(
            prompt_count = self.prompts.len(),
            pair_count = structure.len(),
            "assembled rag structure"
        );
        structure
    }

    /// Produce a deterministic diagnostic response for `query`: the sentinel
    /// message when no chunks exist, otherwise the retrieved chunks embedded
    /// as a JSON array.
    pub fn generate_response(&self, query: &str) -> String {
        let relevant = self.retrieve(query);
        if relevant.is_empty() {
            return NO_RESULTS_MESSAGE.to_string();
        }
        // Serializing a Vec<String> cannot fail; the fallback is defensive
        // plumbing for the type signature, not a reachable path.
        let payload = serde_json::to_string(&relevant).unwrap_or_default();
        format!("Generated response based on: {payload}")
    }
}

/// One-shot convenience: chunk `text` with the default configuration and pair
/// `prompt` with its most relevant chunks. No index survives the call.
pub fn create_rag_structure(text: &str, prompt: &str) -> Vec<RagChunk> {
    let mut index = ChunkIndex::default();
    index.add_document(text);
    index.add_prompt(prompt);
    index.create_rag_structure()
}
