//! Chunking algorithm coverage beyond the inline module tests.

use chunkrank::{char_len, split_into_chunks, split_sentences};

use crate::common;

#[test]
fn sentence_scan_handles_mixed_terminators() {
    assert_eq!(
        split_sentences("Really? Yes! Good. Then we agree"),
        vec!["Really?", "Yes!", "Good.", "Then we agree"]
    );
}

#[test]
fn sentence_scan_without_terminators_returns_whole_text() {
    assert_eq!(split_sentences("no terminators here at all"), vec![
        "no terminators here at all"
    ]);
}

#[test]
fn sentence_scan_ignores_whitespace_not_after_terminator() {
    // Plain spaces between words never split.
    assert_eq!(split_sentences("a b c"), vec!["a b c"]);
}

#[test]
fn decimal_numbers_mis_split_as_documented() {
    // The boundary rule is a heuristic: "3. 14" style text splits, and a
    // period followed by whitespace inside an abbreviation splits too.
    assert_eq!(split_sentences("Pi is 3. 14 more or less"), vec![
        "Pi is 3.",
        "14 more or less"
    ]);
}

#[test]
fn three_facts_split_per_sentence_at_small_size() {
    let index = common::facts_index(25);
    assert_eq!(
        index.chunks(),
        &[
            "Cats are mammals.".to_string(),
            "Dogs are mammals too.".to_string(),
            "Birds lay eggs.".to_string(),
        ]
    );
}

#[test]
fn words_survive_chunking_in_order() {
    let text = "alpha beta gamma. delta epsilon zeta eta theta iota kappa! mu nu";
    for size in [1, 4, 9, 16, 30, 100] {
        let chunks = split_into_chunks(text, size);
        let rejoined: Vec<&str> = chunks
            .iter()
            .flat_map(|chunk| chunk.split_whitespace())
            .collect();
        let original: Vec<&str> = text.split_whitespace().collect();
        assert_eq!(rejoined, original, "words lost or reordered at size {size}");
    }
}

#[test]
fn chunk_lengths_respect_soft_bound() {
    let text = "one two three four five. six seven eight nine ten eleven twelve.";
    for size in [8, 12, 20, 40] {
        for chunk in split_into_chunks(text, size) {
            assert!(
                char_len(&chunk) <= size || !chunk.contains(' '),
                "multi-word chunk {chunk:?} exceeds {size}"
            );
        }
    }
}

#[test]
fn accumulated_chunk_may_reach_exactly_chunk_size() {
    // "abc." (4) + space + "defg." (5) joins to 10 characters: the
    // accumulation bound ignores the joining space.
    let chunks = split_into_chunks("abc. defg. next one arrives here.", 10);
    assert_eq!(chunks[0], "abc. defg.");
    assert_eq!(char_len(&chunks[0]), 10);
}

#[test]
fn chunk_size_one_isolates_every_word() {
    let chunks = split_into_chunks("tiny words go solo. always.", 1);
    assert_eq!(
        chunks,
        vec!["tiny", "words", "go", "solo.", "always."]
    );
}
