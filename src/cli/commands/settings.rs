use anyhow::Result;

use crate::config::SettingsManager;
use crate::translation::{validate_language, validate_target_language};
use crate::ui::Style;

#[derive(Default)]
pub struct SettingsOptions {
    pub set_source: Option<String>,
    pub set_target: Option<String>,
    pub set_threads: Option<usize>,
    pub set_chunk_size: Option<usize>,
}

/// Shows the persisted settings; with any `set_*` option, validates,
/// persists, and then shows the updated values.
pub fn run_settings(options: SettingsOptions) -> Result<()> {
    let manager = SettingsManager::new();
    let mut settings = manager.load_or_default();
    let mut changed = false;

    if let Some(source) = options.set_source {
        validate_language(&source)?;
        settings.source_lang = source;
        changed = true;
    }
    if let Some(target) = options.set_target {
        validate_target_language(&target)?;
        settings.target_lang = target;
        changed = true;
    }
    if let Some(threads) = options.set_threads {
        settings.max_threads = threads;
        changed = true;
    }
    if let Some(chunk_size) = options.set_chunk_size {
        settings.max_chunk_size = chunk_size;
        changed = true;
    }

    if changed {
        settings.clamp();
        manager.save(&settings)?;
        println!("{}", Style::success("Settings saved."));
        println!();
    }

    println!("{}", Style::header("Translation settings"));
    println!(
        "  {} {}",
        Style::label("source language:"),
        Style::value(&settings.source_lang)
    );
    println!(
        "  {} {}",
        Style::label("target language:"),
        Style::value(&settings.target_lang)
    );
    println!(
        "  {} {}",
        Style::label("max threads:    "),
        Style::value(settings.max_threads)
    );
    println!(
        "  {} {}",
        Style::label("max chunk size: "),
        Style::value(settings.max_chunk_size)
    );
    println!(
        "  {} {}",
        Style::label("settings file:  "),
        Style::secondary(manager.settings_path().display())
    );

    Ok(())
}
