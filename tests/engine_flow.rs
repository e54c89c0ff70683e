#![allow(clippy::unwrap_used)]
//! End-to-end contract tests for the translation engine.
//!
//! Everything runs against the in-process mock provider, so these tests
//! exercise chunking, dispatch ordering, memoization, eviction, and the
//! failure surfaces without any network access.

use std::sync::Arc;

use linguate::cache::{EVICTION_BATCH, MAX_ENTRIES};
use linguate::chunk::split_into_chunks;
use linguate::config::Settings;
use linguate::engine::TranslationEngine;
use linguate::translation::{MockBehavior, MockTranslator, TranslationProvider};

fn settings(max_threads: usize, max_chunk_size: usize) -> Settings {
    Settings {
        source_lang: "auto".to_string(),
        target_lang: "en".to_string(),
        max_threads,
        max_chunk_size,
    }
}

fn engine(
    behavior: MockBehavior,
    max_threads: usize,
    max_chunk_size: usize,
) -> (Arc<MockTranslator>, TranslationEngine) {
    let provider = Arc::new(MockTranslator::new(behavior));
    let dyn_provider: Arc<dyn TranslationProvider> = provider.clone();
    let engine = TranslationEngine::new(
        dyn_provider,
        &settings(max_threads, max_chunk_size),
    );
    (provider, engine)
}

#[tokio::test]
async fn test_uppercase_scenario_end_to_end() {
    let line = "Hello world. This is great!";

    // The chunker prefers the sentence boundary under a 15-character cap.
    assert_eq!(
        split_into_chunks(line, 15),
        vec!["Hello world.", "This is great!"]
    );

    let (_, engine) = engine(MockBehavior::Uppercase, 4, 15);
    let translated = engine.translate_text(line).await.unwrap();
    assert_eq!(translated, "HELLO WORLD. THIS IS GREAT!");
}

#[tokio::test]
async fn test_blank_lines_preserved_in_position() {
    let (_, engine) = engine(MockBehavior::Uppercase, 4, 1000);

    let text = "first line.\n\nthird line.";
    let translated = engine.translate_text(text).await.unwrap();

    let lines: Vec<&str> = translated.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "FIRST LINE.");
    assert_eq!(lines[1], "");
    assert_eq!(lines[2], "THIRD LINE.");
}

#[tokio::test]
async fn test_oversized_word_translated_as_single_chunk() {
    let word = "x".repeat(2000);
    assert_eq!(split_into_chunks(&word, 1000), vec![word.clone()]);

    let (provider, engine) = engine(MockBehavior::Uppercase, 4, 1000);
    let translated = engine.translate_text(&word).await.unwrap();

    assert_eq!(translated, word.to_uppercase());
    assert_eq!(provider.invocation_count(), 1);
}

#[tokio::test]
async fn test_repeated_chunks_hit_the_cache_across_calls() {
    let (provider, engine) = engine(MockBehavior::Uppercase, 4, 1000);

    let first = engine.translate_text("same sentence here.").await.unwrap();
    let second = engine.translate_text("same sentence here.").await.unwrap();

    assert_eq!(first, second);
    assert_eq!(provider.invocation_count(), 1);
}

#[tokio::test]
async fn test_failed_chunk_marker_leaves_siblings_intact() {
    let (_, engine) = engine(
        MockBehavior::FailMatching {
            needle: "broken".to_string(),
            message: "rejected".to_string(),
        },
        4,
        // Small cap so each sentence becomes its own chunk.
        20,
    );

    let translated = engine
        .translate_text("This part works. A broken piece here. Works again.")
        .await
        .unwrap();

    assert!(translated.contains("THIS PART WORKS."));
    assert!(translated.contains("WORKS AGAIN."));
    assert!(translated.contains("[translation failed: "));
    assert!(translated.contains("rejected"));
}

#[tokio::test]
async fn test_connectivity_failure_yields_no_partial_output() {
    let (_, engine) = engine(MockBehavior::Offline("dns failure".to_string()), 4, 1000);

    let result = engine.translate_text("One line.\nAnother line.").await;
    let err = result.unwrap_err().to_string();

    assert!(err.contains("dns failure"));
    assert!(err.contains("Check your network connection"));
}

#[tokio::test]
async fn test_housekeeping_eviction_after_batch() {
    let (_, engine) = engine(MockBehavior::Uppercase, 8, 1000);

    // One call translating more distinct chunks than the cache threshold;
    // the post-batch maintenance pass evicts one batch of the oldest.
    let overshoot = 50;
    let text = (0..MAX_ENTRIES + overshoot)
        .map(|i| format!("chunk number {i}"))
        .collect::<Vec<_>>()
        .join("\n");

    engine.translate_text(&text).await.unwrap();

    assert_eq!(
        engine.cached_chunks(),
        MAX_ENTRIES + overshoot - EVICTION_BATCH
    );
}

#[tokio::test]
async fn test_parallel_results_keep_submission_order() {
    let (_, engine) = engine(MockBehavior::Suffix, 8, 8);

    // Every word becomes its own chunk; the suffix mock tags each one, and
    // the assembled line must keep the original word order.
    let translated = engine
        .translate_text("alpha beta gamma delta epsilon")
        .await
        .unwrap();

    assert_eq!(translated, "alpha_en beta_en gamma_en delta_en epsilon_en");
}
