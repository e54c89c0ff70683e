use anyhow::{Result, bail};
use std::sync::Arc;

use crate::config::{Settings, SettingsManager};
use crate::engine::TranslationEngine;
use crate::input::read_input;
use crate::translation::{GoogleWebTranslator, validate_language, validate_target_language};
use crate::ui::Spinner;

pub struct TranslateOptions {
    pub file: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub threads: Option<usize>,
    pub chunk_size: Option<usize>,
}

pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    let settings = load_merged_settings(&options);

    validate_language(&settings.source_lang)?;
    validate_target_language(&settings.target_lang)?;

    let source_text = read_input(options.file.as_deref())?;
    if source_text.trim().is_empty() {
        bail!("Error: Input is empty");
    }

    let provider = Arc::new(GoogleWebTranslator::new()?);
    let engine = TranslationEngine::new(provider, &settings);

    let spinner = Spinner::new("Translating...");
    let translated = engine.translate_text(&source_text).await;
    spinner.stop();

    println!("{}", translated?);

    Ok(())
}

/// CLI flags override persisted settings for this invocation only.
fn load_merged_settings(options: &TranslateOptions) -> Settings {
    let mut settings = SettingsManager::new().load_or_default();

    if let Some(from) = &options.from {
        settings.source_lang = from.clone();
    }
    if let Some(to) = &options.to {
        settings.target_lang = to.clone();
    }
    if let Some(threads) = options.threads {
        settings.max_threads = threads;
    }
    if let Some(chunk_size) = options.chunk_size {
        settings.max_chunk_size = chunk_size;
    }
    settings.clamp();

    settings
}
