//! Translation providers and language codes.

mod google;
mod language;
mod mock;
mod provider;

pub use google::GoogleWebTranslator;
pub use language::{
    AUTO_DETECT, SUPPORTED_LANGUAGES, print_languages, validate_language,
    validate_target_language,
};
pub use mock::{MockBehavior, MockTranslator};
pub use provider::{ProviderError, TranslationProvider};
