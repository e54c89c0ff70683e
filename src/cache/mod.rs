//! In-memory translation cache.

mod memory;

pub use memory::{TranslationCache, EVICTION_BATCH, MAX_ENTRIES};
