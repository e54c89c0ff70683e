use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::ops::RangeInclusive;
use std::path::PathBuf;

use crate::fs::atomic_write;
use crate::paths;

pub const DEFAULT_MAX_THREADS: usize = 4;
pub const DEFAULT_MAX_CHUNK_SIZE: usize = 1000;

/// Allowed worker pool sizes.
pub const MAX_THREADS_RANGE: RangeInclusive<usize> = 1..=10;

/// Allowed per-chunk character limits.
pub const MAX_CHUNK_SIZE_RANGE: RangeInclusive<usize> = 100..=5000;

/// Plugin settings, persisted as a flat JSON object.
///
/// Every field carries a default so a hand-edited file may omit any of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Source language code, or `auto` for detection.
    #[serde(default = "default_source_lang")]
    pub source_lang: String,

    /// Target language code.
    #[serde(default = "default_target_lang")]
    pub target_lang: String,

    /// Worker pool size for parallel chunk translation, bounded 1–10.
    #[serde(default = "default_max_threads")]
    pub max_threads: usize,

    /// Maximum characters per translation chunk, bounded 100–5000.
    #[serde(default = "default_max_chunk_size")]
    pub max_chunk_size: usize,
}

fn default_source_lang() -> String {
    "auto".to_string()
}

fn default_target_lang() -> String {
    "en".to_string()
}

const fn default_max_threads() -> usize {
    DEFAULT_MAX_THREADS
}

const fn default_max_chunk_size() -> usize {
    DEFAULT_MAX_CHUNK_SIZE
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source_lang: default_source_lang(),
            target_lang: default_target_lang(),
            max_threads: DEFAULT_MAX_THREADS,
            max_chunk_size: DEFAULT_MAX_CHUNK_SIZE,
        }
    }
}

impl Settings {
    /// Forces the numeric fields into their allowed ranges.
    pub fn clamp(&mut self) {
        self.max_threads = self
            .max_threads
            .clamp(*MAX_THREADS_RANGE.start(), *MAX_THREADS_RANGE.end());
        self.max_chunk_size = self
            .max_chunk_size
            .clamp(*MAX_CHUNK_SIZE_RANGE.start(), *MAX_CHUNK_SIZE_RANGE.end());
    }
}

/// Loads and saves the settings file.
pub struct SettingsManager {
    settings_path: PathBuf,
}

impl SettingsManager {
    /// Creates a manager for the default settings location,
    /// `$XDG_CONFIG_HOME/linguate/settings.json` (or the `~/.config`
    /// equivalent).
    pub fn new() -> Self {
        Self {
            settings_path: paths::config_dir().join("settings.json"),
        }
    }

    /// Creates a manager for an explicit settings file path.
    pub fn with_path(settings_path: PathBuf) -> Self {
        Self { settings_path }
    }

    pub const fn settings_path(&self) -> &PathBuf {
        &self.settings_path
    }

    /// Reads and parses the settings file, clamping numeric fields.
    pub fn load(&self) -> Result<Settings> {
        let contents = fs::read_to_string(&self.settings_path).with_context(|| {
            format!(
                "Failed to read settings file: {}",
                self.settings_path.display()
            )
        })?;

        let mut settings: Settings =
            serde_json::from_str(&contents).with_context(|| "Failed to parse settings file")?;
        settings.clamp();

        Ok(settings)
    }

    /// Like [`load`](Self::load), but a missing or unreadable file yields
    /// the defaults.
    pub fn load_or_default(&self) -> Settings {
        self.load().unwrap_or_default()
    }

    /// Persists settings as pretty-printed JSON via an atomic
    /// write-and-rename, creating parent directories as needed.
    pub fn save(&self, settings: &Settings) -> Result<()> {
        let mut settings = settings.clone();
        settings.clamp();

        if let Some(parent) = self.settings_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create settings directory: {}", parent.display())
            })?;
        }

        let contents =
            serde_json::to_string_pretty(&settings).context("Failed to serialize settings")?;

        atomic_write(&self.settings_path, &contents).with_context(|| {
            format!(
                "Failed to write settings file: {}",
                self.settings_path.display()
            )
        })?;

        Ok(())
    }
}

impl Default for SettingsManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_manager(temp_dir: &TempDir) -> SettingsManager {
        SettingsManager::with_path(temp_dir.path().join("settings.json"))
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        let settings = Settings {
            source_lang: "ar".to_string(),
            target_lang: "fr".to_string(),
            max_threads: 8,
            max_chunk_size: 2500,
        };

        manager.save(&settings).unwrap();
        let loaded = manager.load().unwrap();

        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_load_missing_file_errors() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        assert!(manager.load().is_err());
    }

    #[test]
    fn test_load_or_default_falls_back() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        let settings = manager.load_or_default();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.source_lang, "auto");
        assert_eq!(settings.target_lang, "en");
        assert_eq!(settings.max_threads, 4);
        assert_eq!(settings.max_chunk_size, 1000);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        fs::write(
            manager.settings_path(),
            r#"{ "target_lang": "ja" }"#,
        )
        .unwrap();

        let loaded = manager.load().unwrap();
        assert_eq!(loaded.target_lang, "ja");
        assert_eq!(loaded.source_lang, "auto");
        assert_eq!(loaded.max_threads, DEFAULT_MAX_THREADS);
        assert_eq!(loaded.max_chunk_size, DEFAULT_MAX_CHUNK_SIZE);
    }

    #[test]
    fn test_out_of_range_values_are_clamped_on_load() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        fs::write(
            manager.settings_path(),
            r#"{ "max_threads": 99, "max_chunk_size": 7 }"#,
        )
        .unwrap();

        let loaded = manager.load().unwrap();
        assert_eq!(loaded.max_threads, 10);
        assert_eq!(loaded.max_chunk_size, 100);
    }

    #[test]
    fn test_save_clamps_before_writing() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        let settings = Settings {
            max_threads: 0,
            max_chunk_size: 100_000,
            ..Settings::default()
        };
        manager.save(&settings).unwrap();

        let loaded = manager.load().unwrap();
        assert_eq!(loaded.max_threads, 1);
        assert_eq!(loaded.max_chunk_size, 5000);
    }

    #[test]
    fn test_file_is_human_editable_json() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        manager.save(&Settings::default()).unwrap();
        let raw = fs::read_to_string(manager.settings_path()).unwrap();

        assert!(raw.contains("\"source_lang\""));
        assert!(raw.contains("\"target_lang\""));
        assert!(raw.contains("\"max_threads\""));
        assert!(raw.contains("\"max_chunk_size\""));
    }
}
