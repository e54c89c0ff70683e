//! Sentence-aware text chunking.
//!
//! Translation services cap request sizes, so a line of text is split into
//! chunks that stay under a configured character limit. Splits prefer
//! sentence boundaries; a sentence that cannot fit on its own degrades to
//! word-level packing. The limit is a soft cap on packing: a single word
//! longer than the limit becomes a chunk of its own rather than being cut.

use std::sync::LazyLock;

use regex::Regex;

/// End punctuation followed by whitespace marks a sentence boundary.
#[allow(clippy::unwrap_used)] // pattern is a compile-time constant
static SENTENCE_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]\s+").unwrap());

/// Splits one line into translation-sized chunks of at most `max_chars`
/// characters, except when a single word alone exceeds the limit.
///
/// Joining the returned chunks with single spaces reproduces the line's
/// words in their original order. Empty and whitespace-only lines produce
/// no chunks.
pub fn split_into_chunks(line: &str, max_chars: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut pending: Vec<&str> = Vec::new();
    let mut pending_len = 0usize;

    for sentence in split_sentences(line.trim()) {
        let len = char_len(sentence);

        if len > max_chars {
            // The sentence cannot fit whole; flush and pack word by word.
            if !pending.is_empty() {
                chunks.push(pending.join(" "));
                pending.clear();
                pending_len = 0;
            }
            pack_words(sentence, max_chars, &mut chunks);
        } else if !pending.is_empty() && pending_len + len + 1 > max_chars {
            chunks.push(pending.join(" "));
            pending = vec![sentence];
            pending_len = len;
        } else {
            pending_len += if pending.is_empty() { len } else { len + 1 };
            pending.push(sentence);
        }
    }

    if !pending.is_empty() {
        chunks.push(pending.join(" "));
    }

    chunks
}

/// Splits text into sentences at end punctuation (`.`, `!`, `?`) followed by
/// whitespace. The punctuation stays with the preceding sentence.
fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for boundary in SENTENCE_BOUNDARY.find_iter(text) {
        // The match covers one punctuation character plus the whitespace run;
        // the sentence ends right after the punctuation.
        let end = boundary.start() + 1;
        let sentence = text[start..end].trim();
        if !sentence.is_empty() {
            sentences.push(sentence);
        }
        start = boundary.end();
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail);
    }

    sentences
}

/// Packs the words of an oversized sentence into chunks of at most
/// `max_chars`. A word longer than the limit is emitted as its own chunk.
fn pack_words(sentence: &str, max_chars: usize, chunks: &mut Vec<String>) {
    let mut words: Vec<&str> = Vec::new();
    let mut size = 0usize;

    for word in sentence.split_whitespace() {
        let len = char_len(word);
        if !words.is_empty() && size + len + 1 > max_chars {
            chunks.push(words.join(" "));
            words = vec![word];
            size = len;
        } else {
            size += if words.is_empty() { len } else { len + 1 };
            words.push(word);
        }
    }

    if !words.is_empty() {
        chunks.push(words.join(" "));
    }
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}
