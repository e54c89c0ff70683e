use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

use super::provider::{ProviderError, TranslationProvider};

const ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Translator backed by the keyless Google web endpoint.
///
/// This is the same endpoint the browser widget uses (`client=gtx`); it
/// needs no API key and returns a nested JSON array in which the first
/// element lists `[translated, original, ..]` segment pairs.
pub struct GoogleWebTranslator {
    client: reqwest::Client,
    endpoint: String,
}

impl GoogleWebTranslator {
    pub fn new() -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ProviderError::Connectivity(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: ENDPOINT.to_string(),
        })
    }

    /// Points the translator at a different endpoint, e.g. a mirror.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Concatenates the translated segments out of the response array.
    fn extract_translation(body: &Value) -> Result<String, ProviderError> {
        let segments = body
            .get(0)
            .and_then(Value::as_array)
            .ok_or_else(|| ProviderError::InvalidResponse("missing segment array".to_string()))?;

        let mut translated = String::new();
        for segment in segments {
            if let Some(text) = segment.get(0).and_then(Value::as_str) {
                translated.push_str(text);
            }
        }

        if translated.is_empty() && !segments.is_empty() {
            return Err(ProviderError::InvalidResponse(
                "segments carried no translated text".to_string(),
            ));
        }

        Ok(translated)
    }
}

impl std::fmt::Debug for GoogleWebTranslator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleWebTranslator")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl TranslationProvider for GoogleWebTranslator {
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, ProviderError> {
        if text.is_empty() {
            return Ok(String::new());
        }

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("client", "gtx"),
                ("sl", source_lang),
                ("tl", target_lang),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    ProviderError::Connectivity(e.to_string())
                } else {
                    ProviderError::Service(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Service(format!(
                "HTTP {status}: {}",
                body.chars().take(200).collect::<String>()
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

        Self::extract_translation(&body)
    }

    fn name(&self) -> &'static str {
        "Google Translate (web)"
    }
}
