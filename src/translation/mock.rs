//! Deterministic in-process translator for tests and host-app development.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::provider::{ProviderError, TranslationProvider};

/// What the mock does with each translation request.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Uppercase the input.
    Uppercase,
    /// Append `_<target_lang>` to the input.
    Suffix,
    /// Return the input unchanged.
    Echo,
    /// Fail every request with a service error.
    Fail(String),
    /// Fail requests whose text contains `needle` with a service error;
    /// uppercase the rest.
    FailMatching { needle: String, message: String },
    /// Fail every request with a connectivity error.
    Offline(String),
}

/// Translator that never leaves the process.
///
/// Counts invocations so tests can assert that the cache short-circuits
/// repeated requests for the same chunk.
#[derive(Debug)]
pub struct MockTranslator {
    behavior: MockBehavior,
    invocations: AtomicUsize,
}

impl MockTranslator {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            invocations: AtomicUsize::new(0),
        }
    }

    /// Number of times [`translate`] has been called.
    ///
    /// [`translate`]: TranslationProvider::translate
    pub fn invocation_count(&self) -> usize {
        self.invocations.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TranslationProvider for MockTranslator {
    async fn translate(
        &self,
        text: &str,
        _source_lang: &str,
        target_lang: &str,
    ) -> Result<String, ProviderError> {
        self.invocations.fetch_add(1, Ordering::SeqCst);

        match &self.behavior {
            MockBehavior::Uppercase => Ok(text.to_uppercase()),
            MockBehavior::Suffix => Ok(format!("{text}_{target_lang}")),
            MockBehavior::Echo => Ok(text.to_string()),
            MockBehavior::Fail(message) => Err(ProviderError::Service(message.clone())),
            MockBehavior::FailMatching { needle, message } => {
                if text.contains(needle.as_str()) {
                    Err(ProviderError::Service(message.clone()))
                } else {
                    Ok(text.to_uppercase())
                }
            }
            MockBehavior::Offline(message) => Err(ProviderError::Connectivity(message.clone())),
        }
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_uppercase_behavior() {
        let mock = MockTranslator::new(MockBehavior::Uppercase);
        let result = mock.translate("hello", "auto", "en").await.unwrap();
        assert_eq!(result, "HELLO");
    }

    #[tokio::test]
    async fn test_suffix_behavior() {
        let mock = MockTranslator::new(MockBehavior::Suffix);
        let result = mock.translate("hello", "en", "fr").await.unwrap();
        assert_eq!(result, "hello_fr");
    }

    #[tokio::test]
    async fn test_fail_behavior_is_service_error() {
        let mock = MockTranslator::new(MockBehavior::Fail("quota exceeded".to_string()));
        let result = mock.translate("hello", "en", "fr").await;
        assert!(matches!(result, Err(ProviderError::Service(_))));
    }

    #[tokio::test]
    async fn test_fail_matching_only_hits_needle() {
        let mock = MockTranslator::new(MockBehavior::FailMatching {
            needle: "bad".to_string(),
            message: "boom".to_string(),
        });

        assert_eq!(mock.translate("good", "en", "fr").await.unwrap(), "GOOD");
        assert!(mock.translate("a bad one", "en", "fr").await.is_err());
    }

    #[tokio::test]
    async fn test_offline_behavior_is_connectivity_error() {
        let mock = MockTranslator::new(MockBehavior::Offline("no route".to_string()));
        let result = mock.translate("hello", "en", "fr").await;
        assert!(matches!(result, Err(ProviderError::Connectivity(_))));
    }

    #[tokio::test]
    async fn test_invocation_count() {
        let mock = MockTranslator::new(MockBehavior::Echo);
        assert_eq!(mock.invocation_count(), 0);

        mock.translate("one", "en", "fr").await.unwrap();
        mock.translate("two", "en", "fr").await.unwrap();
        assert_eq!(mock.invocation_count(), 2);
    }
}
