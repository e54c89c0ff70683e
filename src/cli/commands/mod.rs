//! Subcommand implementations.

/// Settings inspection and persistence handler.
pub mod settings;

/// Translation command handler.
pub mod translate;
