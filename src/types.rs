//! The building blocks of a chunk index.
//!
//! These types define how documents, passages, and prompts fit together.
//! The index itself lives in `index.rs`; everything here is plain data.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **ChunkIndexConfig**: `chunk_size` is a soft bound measured in Unicode
//!   scalar values. A single word longer than `chunk_size` still becomes its
//!   own chunk - the splitter never breaks inside a word.
//!
//! - **RagChunk**: `document` is always one of the chunks the index held when
//!   the pair was built, never raw document text.
//!
//! - **ScoredChunk**: `score` is strictly positive. Every chunk carries at
//!   least the base score, so ranking is total even with zero lexical overlap.

use serde::{Deserialize, Serialize};

/// Default target chunk length, in characters.
pub const DEFAULT_CHUNK_SIZE: usize = 500;

/// Default number of chunks returned per retrieval.
pub const DEFAULT_TOP_K: usize = 3;

/// Tuning knobs for a [`ChunkIndex`](crate::ChunkIndex).
///
/// Defaults live here as fields rather than module constants so that
/// differently tuned indices can coexist in one process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkIndexConfig {
    /// Target passage length in characters (soft bound, default 500).
    pub chunk_size: usize,
    /// How many passages a retrieval returns (default 3).
    pub top_k: usize,
}

impl Default for ChunkIndexConfig {
    fn default() -> Self {
        ChunkIndexConfig {
            chunk_size: DEFAULT_CHUNK_SIZE,
            top_k: DEFAULT_TOP_K,
        }
    }
}

/// A prompt paired with one passage judged relevant to it.
///
/// This is the unit the batch association step emits: one pair per
/// (prompt, retrieved chunk) combination. Field names serialize in
/// camelCase to match the JSON shape the surrounding application exchanges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RagChunk {
    pub prompt: String,
    pub document: String,
}

/// Transient pairing of a relevance score with the chunk that earned it.
///
/// Produced during retrieval and normally discarded after ranking; the
/// diagnostic [`score_chunks`](crate::ChunkIndex::score_chunks) surface
/// exposes the full ranked sequence for callers that want to inspect or
/// re-threshold scores.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredChunk {
    pub score: f64,
    pub chunk: String,
}
