//! In-memory lexical retrieval for RAG prompt assembly.
//!
//! This crate splits a source document into bounded-size passages and ranks
//! those passages against query strings with a multi-signal lexical score.
//! It is synchronous, allocation-only (no I/O, no persistence, no network),
//! and designed to be called once per document/query pair - the collaborator
//! upstream extracts plain text, the collaborator downstream folds the ranked
//! passages into a generation prompt.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ chunking.rs  │────▶│   index.rs   │◀────│  scoring.rs  │
//! │ (sentences,  │     │ (ChunkIndex, │     │ (QueryTerms, │
//! │  passages)   │     │  RAG pairs)  │     │ score_chunk) │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!         │                    │                    │
//!         ▼                    ▼                    ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │                        utils.rs                          │
//! │        (normalize, word_tokens, char_len)                │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use chunkrank::ChunkIndex;
//!
//! let mut index = ChunkIndex::default();
//! index.add_document("Cats are mammals. Dogs are mammals too. Birds lay eggs.");
//!
//! let top = index.retrieve_relevant_chunks("which animals are mammals?", 3);
//! assert!(!top.is_empty());
//! ```

// Module declarations
pub mod chunking;
mod index;
mod scoring;
#[doc(hidden)]
pub mod testing;
mod types;
mod utils;

// Re-exports for public API
pub use chunking::{split_into_chunks, split_sentences};
pub use index::{create_rag_structure, ChunkIndex, NO_RESULTS_MESSAGE};
pub use scoring::{
    score_chunk, QueryTerms, BASE_SCORE, CONTAINMENT_MIN_CHARS, CONTAINMENT_WEIGHT,
    EXACT_MATCH_WEIGHT, PARTIAL_MATCH_WEIGHT, PARTIAL_MIN_CHARS,
};
pub use types::{ChunkIndexConfig, RagChunk, ScoredChunk, DEFAULT_CHUNK_SIZE, DEFAULT_TOP_K};
pub use utils::{char_len, normalize, word_tokens};
