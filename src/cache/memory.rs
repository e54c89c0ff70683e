use std::collections::{HashMap, VecDeque};

/// Entry count above which a maintenance pass evicts a batch.
pub const MAX_ENTRIES: usize = 1000;

/// Number of oldest entries removed per maintenance pass.
pub const EVICTION_BATCH: usize = 100;

/// Maps exact chunk text to its translation.
///
/// Insertion order is the only ordering signal: a cache hit does not refresh
/// an entry's position, and overwriting an existing key keeps its original
/// position in the eviction queue. Growth is bounded by [`maintain`], a
/// periodic housekeeping step rather than a per-insert invariant, so the
/// entry count can temporarily exceed [`MAX_ENTRIES`] between passes.
///
/// [`maintain`]: TranslationCache::maintain
#[derive(Debug, Default)]
pub struct TranslationCache {
    entries: HashMap<String, String>,
    insertion_order: VecDeque<String>,
}

impl TranslationCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the memoized translation for `chunk`, if any.
    pub fn get(&self, chunk: &str) -> Option<&str> {
        self.entries.get(chunk).map(String::as_str)
    }

    /// Memoizes a translation keyed by exact chunk text.
    ///
    /// A repeated key updates the stored translation without re-queuing it,
    /// so the entry keeps its original eviction position.
    pub fn insert(&mut self, chunk: String, translation: String) {
        if self.entries.insert(chunk.clone(), translation).is_none() {
            self.insertion_order.push_back(chunk);
        }
    }

    /// Runs a housekeeping pass: when the cache holds more than
    /// [`MAX_ENTRIES`] entries, the [`EVICTION_BATCH`] earliest-inserted
    /// entries are removed. Returns the number of evicted entries.
    pub fn maintain(&mut self) -> usize {
        if self.entries.len() <= MAX_ENTRIES {
            return 0;
        }

        let mut evicted = 0;
        while evicted < EVICTION_BATCH {
            let Some(oldest) = self.insertion_order.pop_front() else {
                break;
            };
            self.entries.remove(&oldest);
            evicted += 1;
        }

        tracing::debug!(evicted, remaining = self.entries.len(), "cache eviction");
        evicted
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
