//! Defined non-error behaviors: empty inputs, degenerate sizes, Unicode.

use chunkrank::{ChunkIndex, NO_RESULTS_MESSAGE};

use crate::common;

#[test]
fn retrieval_before_any_document_is_empty() {
    let index = ChunkIndex::default();
    assert!(index.retrieve_relevant_chunks("query", 3).is_empty());
    assert!(index.score_chunks("query").is_empty());
    assert_eq!(index.generate_response("query"), NO_RESULTS_MESSAGE);
}

#[test]
fn empty_document_behaves_like_no_document() {
    let mut index = ChunkIndex::default();
    index.add_document("");
    assert!(index.is_empty());
    assert!(index.retrieve_relevant_chunks("query", 3).is_empty());
    assert_eq!(index.documents().len(), 1);
}

#[test]
fn whitespace_document_yields_no_chunks() {
    let mut index = ChunkIndex::default();
    index.add_document("  \n\t   ");
    assert!(index.is_empty());
}

#[test]
fn empty_query_still_returns_chunks() {
    let index = common::facts_index(25);
    let results = index.retrieve_relevant_chunks("", 2);
    assert_eq!(results.len(), 2);
    assert_eq!(results[0], "Cats are mammals.");
}

#[test]
fn punctuation_only_query_scores_base_only() {
    let index = common::facts_index(25);
    let scored = index.score_chunks("?!... --- ,,,");
    assert!(scored.iter().all(|entry| (entry.score - 0.1).abs() < 1e-9));
}

#[test]
fn top_k_zero_returns_nothing() {
    let index = common::facts_index(25);
    assert!(index.retrieve_relevant_chunks("mammals", 0).is_empty());
}

#[test]
fn degenerate_chunk_sizes_do_not_panic() {
    for size in [0, 1, 2] {
        let mut index = ChunkIndex::with_chunk_size(size);
        index.add_document(common::THREE_FACTS);
        assert!(!index.is_empty());
        let results = index.retrieve(common::THREE_FACTS);
        assert!(results.len() <= index.config().top_k);
    }
}

#[test]
fn unicode_documents_chunk_and_retrieve() {
    let mut index = ChunkIndex::with_chunk_size(40);
    index.add_document("Les chats sont des mammifères. Les oiseaux pondent des œufs.");
    assert_eq!(index.chunk_count(), 2);
    let top = index.retrieve_relevant_chunks("mammifères", 1);
    assert_eq!(top, vec!["Les chats sont des mammifères.".to_string()]);
}

#[test]
fn oversized_single_token_document_is_one_chunk() {
    let token = "x".repeat(2000);
    let mut index = ChunkIndex::default();
    index.add_document(token.clone());
    assert_eq!(index.chunks(), &[token]);
}
