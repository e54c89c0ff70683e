//! # linguate - Selection Translation Engine
//!
//! `linguate` is the core of a text-editor translation plugin: select text,
//! translate it through an external machine-translation service, and
//! optionally replace the selection with the result. It ships with a small
//! CLI binary that runs the same pipeline over a file or stdin.
//!
//! ## Features
//!
//! - **Sentence-aware chunking**: long lines are split at sentence
//!   boundaries (word boundaries as a fallback) to stay under the provider's
//!   character limit
//! - **Caching**: chunk translations are memoized by exact text, with
//!   periodic eviction of the oldest entries
//! - **Bounded parallelism**: the chunks of a line are translated through a
//!   configurable worker pool, results collected in order
//! - **Host-agnostic**: editors integrate through small capability traits;
//!   no GUI code lives in this crate
//!
//! ## Quick Start
//!
//! ```bash
//! # Translate a file to English
//! linguate --to en ./notes.txt
//!
//! # Translate from stdin
//! cat notes.txt | linguate --to ja
//!
//! # Persist defaults
//! linguate settings --set-target ja --set-threads 4
//! ```
//!
//! ## Settings
//!
//! Settings are stored in `~/.config/linguate/settings.json`:
//!
//! ```json
//! {
//!   "source_lang": "auto",
//!   "target_lang": "en",
//!   "max_threads": 4,
//!   "max_chunk_size": 1000
//! }
//! ```

/// In-memory translation cache with insertion-order eviction.
pub mod cache;

/// Sentence-aware text chunking.
pub mod chunk;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Settings file management.
pub mod config;

/// Host editor capability contract and the plugin controller.
pub mod editor;

/// Cache-backed translation dispatcher.
pub mod engine;

/// File system utilities.
pub mod fs;

/// Input reading from files and stdin.
pub mod input;

/// XDG-style path utilities for the settings file.
pub mod paths;

/// Translation providers and language codes.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;
