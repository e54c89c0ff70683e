//! Settings file management.

mod manager;

pub use manager::{
    DEFAULT_MAX_CHUNK_SIZE, DEFAULT_MAX_THREADS, MAX_CHUNK_SIZE_RANGE, MAX_THREADS_RANGE,
    Settings, SettingsManager,
};
