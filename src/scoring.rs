//! The math behind chunk ranking.
//!
//! Three lexical signals, summed: exact token matches dominate, substring
//! containment refines, and partial token overlap catches morphological
//! variants ("retriev" in "retrieval"). A constant base score keeps every
//! chunk rankable even with zero overlap.
//!
//! # Key Invariant: Signal Dominance
//!
//! One exact match outweighs one containment hit outweighs one partial hit:
//!
//! ```text
//! EXACT (10) > CONTAINMENT (5) > PARTIAL (2) > BASE (0.1)
//! ```
//!
//! The base score is deliberately far below a single hit of any signal, so
//! "matched nothing" can never outrank "matched something".
//!
//! # Constants
//!
//! | Signal      | Weight | Counted over                                    |
//! |-------------|--------|-------------------------------------------------|
//! | Exact       | 10.0   | distinct query tokens present as chunk tokens   |
//! | Containment | 5.0    | query token sequence (duplicates count), len > 3|
//! | Partial     | 2.0    | query token x chunk token pairs, both len > 4   |
//! | Base        | 0.1    | once per chunk, unconditionally                 |
//!
//! Containment and partial both use plain substring tests; an exact match is
//! therefore also a containment and a partial hit for long enough tokens.
//! That stacking is intentional - it widens the gap between strong and weak
//! matches.

use std::collections::HashSet;

use crate::utils::{char_len, normalize, word_tokens};

/// Weight per distinct query token that appears verbatim among the chunk's
/// tokens.
pub const EXACT_MATCH_WEIGHT: f64 = 10.0;

/// Weight per query-sequence token found as a substring of the chunk text.
pub const CONTAINMENT_WEIGHT: f64 = 5.0;

/// Weight per (query token, chunk token) pair where either contains the other.
pub const PARTIAL_MATCH_WEIGHT: f64 = 2.0;

/// Unconditional per-chunk score so ranking stays total and order-stable.
pub const BASE_SCORE: f64 = 0.1;

/// Containment only considers query tokens longer than this many characters;
/// shorter tokens ("the", "a") are substring noise.
pub const CONTAINMENT_MIN_CHARS: usize = 3;

/// Partial matching only compares tokens longer than this many characters on
/// both sides.
pub const PARTIAL_MIN_CHARS: usize = 4;

/// A query, tokenized once and reused across every chunk it scores.
///
/// Keeps both views the signals need: the raw token sequence (duplicates
/// preserved, for containment and partial matching) and the deduplicated set
/// (for exact matching).
#[derive(Debug, Clone)]
pub struct QueryTerms {
    tokens: Vec<String>,
    unique: HashSet<String>,
}

impl QueryTerms {
    /// Normalize and tokenize a query string.
    pub fn new(query: &str) -> Self {
        let tokens = word_tokens(&normalize(query));
        let unique = tokens.iter().cloned().collect();
        QueryTerms { tokens, unique }
    }

    /// The token sequence in query order, duplicates preserved.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// `true` when the query produced no tokens at all.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Score one chunk against a tokenized query.
///
/// Hit counts are integers multiplied by their weights at the end, so the
/// result is independent of iteration order and exactly reproducible.
pub fn score_chunk(chunk: &str, terms: &QueryTerms) -> f64 {
    let chunk_text = normalize(chunk);
    let chunk_tokens = word_tokens(&chunk_text);
    let chunk_token_set: HashSet<&str> = chunk_tokens.iter().map(String::as_str).collect();

    let exact_hits = terms
        .unique
        .iter()
        .filter(|token| chunk_token_set.contains(token.as_str()))
        .count();

    let containment_hits = terms
        .tokens
        .iter()
        .filter(|token| char_len(token) > CONTAINMENT_MIN_CHARS && chunk_text.contains(token.as_str()))
        .count();

    // Every query token against every chunk token. Quadratic per chunk, but
    // queries are a handful of tokens and chunks a few hundred characters.
    let mut partial_hits = 0usize;
    for query_token in &terms.tokens {
        if char_len(query_token) <= PARTIAL_MIN_CHARS {
            continue;
        }
        for chunk_token in &chunk_tokens {
            if char_len(chunk_token) > PARTIAL_MIN_CHARS
                && (chunk_token.contains(query_token.as_str())
                    || query_token.contains(chunk_token.as_str()))
            {
                partial_hits += 1;
            }
        }
    }

    exact_hits as f64 * EXACT_MATCH_WEIGHT
        + containment_hits as f64 * CONTAINMENT_WEIGHT
        + partial_hits as f64 * PARTIAL_MATCH_WEIGHT
        + BASE_SCORE
}
