use async_trait::async_trait;

/// Failure modes of an external translation call.
///
/// The distinction matters to the dispatcher: a [`Connectivity`] failure
/// aborts a whole-text translation, while [`Service`] and
/// [`InvalidResponse`] failures degrade to an inline marker for the affected
/// chunk only.
///
/// [`Connectivity`]: ProviderError::Connectivity
/// [`Service`]: ProviderError::Service
/// [`InvalidResponse`]: ProviderError::InvalidResponse
#[derive(Debug, Clone, thiserror::Error)]
pub enum ProviderError {
    /// The translation service could not be reached at all.
    #[error("translation service unreachable: {0}")]
    Connectivity(String),

    /// The service was reached but rejected or failed this request.
    #[error("translation service error: {0}")]
    Service(String),

    /// The service replied with something that could not be interpreted.
    #[error("unexpected translation service response: {0}")]
    InvalidResponse(String),
}

/// An external machine-translation backend.
///
/// The engine treats the call as opaque: text in, translated text out.
/// Implementations must be shareable across worker tasks.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Translates `text` from `source_lang` to `target_lang`.
    ///
    /// `source_lang` may be `"auto"` where the backend supports detection.
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, ProviderError>;

    /// Backend name, for logs.
    fn name(&self) -> &'static str;
}
