//! Language code validation and supported languages.

use anyhow::Result;

use crate::ui::Style;

/// Language code used for automatic source detection.
pub const AUTO_DETECT: &str = "auto";

/// Supported language codes and their names.
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("auto", "Detect automatically (source only)"),
    ("ar", "Arabic"),
    ("de", "German"),
    ("en", "English"),
    ("es", "Spanish"),
    ("fa", "Persian"),
    ("fr", "French"),
    ("hi", "Hindi"),
    ("id", "Indonesian"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("ms", "Malay"),
    ("ru", "Russian"),
    ("th", "Thai"),
    ("tr", "Turkish"),
    ("ur", "Urdu"),
    ("vi", "Vietnamese"),
    ("zh", "Chinese"),
];

/// Prints all supported language codes to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Supported language codes"));
    for (code, name) in SUPPORTED_LANGUAGES {
        println!("  {:5} {}", Style::code(code), Style::secondary(name));
    }
}

/// Validates that the given language code is supported.
///
/// # Errors
///
/// Returns an error if the language code is not in the supported list.
pub fn validate_language(lang: &str) -> Result<()> {
    if SUPPORTED_LANGUAGES.iter().any(|(code, _)| *code == lang) {
        Ok(())
    } else {
        anyhow::bail!(
            "Invalid language code: '{lang}'\n\n\
             Run 'linguate languages' to see all supported codes."
        )
    }
}

/// Validates a translation target, which additionally must not be `auto`.
///
/// # Errors
///
/// Returns an error if the code is unsupported or is `auto`.
pub fn validate_target_language(lang: &str) -> Result<()> {
    if lang == AUTO_DETECT {
        anyhow::bail!(
            "Invalid target language: 'auto' can only be used as the source language"
        );
    }
    validate_language(lang)
}
