//! Cache-backed translation dispatcher.
//!
//! The engine owns the translation cache and a provider, chunks each line
//! (see [`crate::chunk`]), translates the chunks of a line through a bounded
//! ordered map-over, and reassembles lines and text. Chunk-level service
//! failures degrade to inline markers; connectivity failures abort the whole
//! call with no partial result.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures_util::{StreamExt, stream};
use tokio::task::JoinHandle;

use crate::cache::TranslationCache;
use crate::chunk::split_into_chunks;
use crate::config::Settings;
use crate::translation::{ProviderError, TranslationProvider};

/// Failure of a whole-text translation. No partial output accompanies it.
#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error(
        "translation failed: {source}\n\
         Check your network connection and translation settings."
    )]
    Provider {
        #[from]
        source: ProviderError,
    },
}

/// Outcome of translating one chunk.
///
/// A failed chunk carries the failure description instead of masquerading as
/// translated text; callers that need the distinction can match on it, and
/// line assembly renders failures as inline markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChunkTranslation {
    Translated(String),
    Failed(String),
}

impl ChunkTranslation {
    /// Text that stands in for this chunk in the assembled line.
    pub fn into_line_text(self) -> String {
        match self {
            Self::Translated(text) => text,
            Self::Failed(reason) => format!("[translation failed: {reason}]"),
        }
    }

    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Translates text chunk by chunk, memoizing results by exact chunk text.
///
/// Lines are processed sequentially; the chunks of one line are mapped over
/// a pool of at most `max_threads` concurrent provider calls, with results
/// collected in submission order. The cache is owned by the engine and
/// shared across worker tasks behind a mutex.
///
/// There is no timeout, retry, or cancellation here: a hanging provider call
/// stalls its line. Concurrent misses for the same chunk may each invoke the
/// provider; the last result wins.
pub struct TranslationEngine {
    provider: Arc<dyn TranslationProvider>,
    cache: Mutex<TranslationCache>,
    source_lang: String,
    target_lang: String,
    max_chunk_size: usize,
    max_threads: usize,
}

impl TranslationEngine {
    pub fn new(provider: Arc<dyn TranslationProvider>, settings: &Settings) -> Self {
        Self {
            provider,
            cache: Mutex::new(TranslationCache::new()),
            source_lang: settings.source_lang.clone(),
            target_lang: settings.target_lang.clone(),
            max_chunk_size: settings.max_chunk_size,
            max_threads: settings.max_threads,
        }
    }

    /// Translates multi-line text, preserving line structure.
    ///
    /// Blank lines pass through as blank. After the batch, a cache
    /// housekeeping pass evicts the oldest entries if the cache has grown
    /// past its threshold.
    ///
    /// # Errors
    ///
    /// Returns a single aggregated [`TranslateError`] if the translation
    /// service is unreachable; no partial result is produced.
    pub async fn translate_text(&self, text: &str) -> Result<String, TranslateError> {
        let mut translated_lines = Vec::new();

        for line in text.lines() {
            if line.trim().is_empty() {
                translated_lines.push(String::new());
            } else {
                translated_lines.push(self.translate_line(line).await?);
            }
        }

        self.cache().maintain();

        Ok(translated_lines.join("\n"))
    }

    /// Translates one line: chunk, map over the worker pool in order, join
    /// the rendered results with single spaces.
    pub async fn translate_line(&self, line: &str) -> Result<String, TranslateError> {
        let chunks = split_into_chunks(line, self.max_chunk_size);

        let outcomes: Vec<Result<ChunkTranslation, ProviderError>> = stream::iter(chunks)
            .map(|chunk| async move { self.translate_chunk(&chunk).await })
            .buffered(self.max_threads)
            .collect()
            .await;

        let mut parts = Vec::with_capacity(outcomes.len());
        for outcome in outcomes {
            parts.push(outcome?.into_line_text());
        }

        Ok(parts.join(" "))
    }

    /// Translates a single chunk, consulting the cache first.
    ///
    /// Service-level failures are recovered into [`ChunkTranslation::Failed`]
    /// so sibling chunks proceed; connectivity failures propagate.
    pub async fn translate_chunk(&self, chunk: &str) -> Result<ChunkTranslation, ProviderError> {
        if let Some(hit) = self.cache().get(chunk).map(str::to_string) {
            tracing::trace!(len = chunk.len(), "translation cache hit");
            return Ok(ChunkTranslation::Translated(hit));
        }

        match self
            .provider
            .translate(chunk, &self.source_lang, &self.target_lang)
            .await
        {
            Ok(translated) => {
                self.cache().insert(chunk.to_string(), translated.clone());
                Ok(ChunkTranslation::Translated(translated))
            }
            Err(err @ ProviderError::Connectivity(_)) => Err(err),
            Err(err) => {
                tracing::warn!(provider = self.provider.name(), error = %err, "chunk failed");
                Ok(ChunkTranslation::Failed(err.to_string()))
            }
        }
    }

    /// Spawns a whole-text translation onto the runtime and returns its
    /// handle, so the caller can await, abort, or drop the operation.
    pub fn translate_in_background(
        self: &Arc<Self>,
        text: String,
    ) -> JoinHandle<Result<String, TranslateError>> {
        let engine = Arc::clone(self);
        tokio::spawn(async move { engine.translate_text(&text).await })
    }

    /// Current number of memoized chunks.
    pub fn cached_chunks(&self) -> usize {
        self.cache().len()
    }

    fn cache(&self) -> MutexGuard<'_, TranslationCache> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for TranslationEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslationEngine")
            .field("provider", &self.provider.name())
            .field("source_lang", &self.source_lang)
            .field("target_lang", &self.target_lang)
            .field("max_chunk_size", &self.max_chunk_size)
            .field("max_threads", &self.max_threads)
            .finish_non_exhaustive()
    }
}
