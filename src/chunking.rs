//! Splitting documents into bounded-size passages.
//!
//! The splitter prefers sentence boundaries and falls back to word boundaries
//! for sentences that are themselves longer than the target size. It is a
//! heuristic, not a sentence tokenizer: abbreviations and decimal numbers
//! mis-split, and that is accepted.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **NO_EMPTY_CHUNKS**: every emitted chunk is non-empty after trimming.
//! 2. **DETERMINISTIC**: identical `(text, chunk_size)` always yields the
//!    identical chunk sequence.
//! 3. **WORDS_PRESERVED**: the concatenated words of the output equal the
//!    words of the input, in order. Nothing is dropped or duplicated.
//! 4. **SOFT_BOUND**: a chunk longer than `chunk_size` characters is always a
//!    single word - the splitter never breaks inside a word, so an over-long
//!    word becomes an over-long chunk.
//!
//! # Size accounting
//!
//! All thresholds count characters (Unicode scalar values), with strict `<`
//! comparisons: a sentence that would bring the accumulator to exactly
//! `chunk_size` triggers overflow handling instead of being appended. The
//! sentence-level bound ignores the joining space, so a finished chunk can
//! reach exactly `chunk_size` characters; the word-level bound reserves one
//! character for the separator (`+ 1`).

use crate::utils::char_len;

/// Split text into sentences: a break occurs after `.`, `!`, or `?` followed
/// by whitespace, with the terminator staying on the preceding sentence and
/// the whole whitespace run consumed.
///
/// An explicit scan rather than a regex - the lookbehind pattern this
/// replaces needs nothing more than "was the previous character a
/// terminator". A trailing terminator+whitespace yields a final empty
/// sentence; `split_into_chunks` tolerates it.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0usize;
    let mut after_terminator = false;
    let mut iter = text.char_indices().peekable();

    while let Some((idx, ch)) = iter.next() {
        if after_terminator && ch.is_whitespace() {
            sentences.push(&text[start..idx]);
            // Consume the whole whitespace run as the separator.
            start = idx + ch.len_utf8();
            while let Some(&(next_idx, next_ch)) = iter.peek() {
                if next_ch.is_whitespace() {
                    start = next_idx + next_ch.len_utf8();
                    iter.next();
                } else {
                    break;
                }
            }
            after_terminator = false;
        } else {
            after_terminator = matches!(ch, '.' | '!' | '?');
        }
    }

    sentences.push(&text[start..]);
    sentences
}

/// Split `text` into passages of roughly `chunk_size` characters.
///
/// Sentences accumulate into the current passage while they fit. A sentence
/// that overflows closes the passage; if the sentence alone reaches
/// `chunk_size` it is sub-split on word boundaries, and the final partial
/// word group carries over as the seed of the next passage rather than being
/// emitted short.
pub fn split_into_chunks(text: &str, chunk_size: usize) -> Vec<String> {
    let mut chunks: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_chars = 0usize;

    for sentence in split_sentences(text) {
        let sentence_chars = char_len(sentence);

        if current_chars + sentence_chars < chunk_size {
            if !current.is_empty() {
                current.push(' ');
                current_chars += 1;
            }
            current.push_str(sentence);
            current_chars += sentence_chars;
            continue;
        }

        if !current.is_empty() {
            push_trimmed(&mut chunks, &current);
            current.clear();
            current_chars = 0;
        }

        if sentence_chars >= chunk_size {
            // The sentence alone overflows: sub-split on word boundaries.
            let mut word_chunk = String::new();
            let mut word_chunk_chars = 0usize;
            for word in sentence.split_whitespace() {
                let word_chars = char_len(word);
                if word_chunk_chars + word_chars + 1 < chunk_size {
                    if !word_chunk.is_empty() {
                        word_chunk.push(' ');
                        word_chunk_chars += 1;
                    }
                    word_chunk.push_str(word);
                    word_chunk_chars += word_chars;
                } else {
                    push_trimmed(&mut chunks, &word_chunk);
                    word_chunk.clear();
                    word_chunk.push_str(word);
                    word_chunk_chars = word_chars;
                }
            }
            // The remainder seeds the next passage; it is NOT emitted here,
            // so following sentences keep accumulating onto it.
            current = word_chunk;
            current_chars = word_chunk_chars;
        } else {
            current.push_str(sentence);
            current_chars = sentence_chars;
        }
    }

    push_trimmed(&mut chunks, &current);
    chunks
}

// INVARIANT: NO_EMPTY_CHUNKS - the single emission point drops empties.
fn push_trimmed(chunks: &mut Vec<String>, chunk: &str) {
    let trimmed = chunk.trim();
    if !trimmed.is_empty() {
        chunks.push(trimmed.to_string());
    }
}
