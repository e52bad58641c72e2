//! External content-generation API.
//!
//! Long-form bodies come from a third-party text endpoint reached over plain
//! HTTP GET with the prompt in the path. The endpoint is flaky, so blocking
//! callers retry with a fixed delay while best-effort callers degrade to
//! nothing.

use crate::config::ContentConfig;
use crate::error::ContentError;
use async_trait::async_trait;
use reqwest::Url;
use std::time::Duration;
use tokio::time::sleep;
use tracing::warn;

/// Capability for turning a prompt into text
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, ContentError>;
}

/// HTTP implementation appending the URL-encoded prompt to a fixed endpoint
pub struct HttpContentSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpContentSource {
    pub fn new(config: &ContentConfig) -> Result<Self, ContentError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ContentError::Request(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }
}

#[async_trait]
impl ContentSource for HttpContentSource {
    async fn generate(&self, prompt: &str) -> Result<String, ContentError> {
        // Url parsing percent-encodes characters the path cannot carry.
        let url = Url::parse(&format!("{}{}", self.endpoint, prompt))
            .map_err(|e| ContentError::Request(e.to_string()))?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ContentError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ContentError::Status(status.as_u16()));
        }

        let text = response
            .text()
            .await
            .map_err(|e| ContentError::Request(e.to_string()))?;
        let text = text.trim().to_string();
        if text.is_empty() {
            return Err(ContentError::Empty);
        }
        Ok(text)
    }
}

/// Fetch content that the caller cannot proceed without.
///
/// Retries with a fixed delay; `max_attempts = None` retries until the
/// endpoint answers.
pub async fn require_content(
    source: &dyn ContentSource,
    prompt: &str,
    retry_delay: Duration,
    max_attempts: Option<u32>,
) -> Result<String, ContentError> {
    let mut attempt: u32 = 0;
    loop {
        attempt += 1;
        match source.generate(prompt).await {
            Ok(text) => return Ok(text),
            Err(e) => {
                warn!(attempt, error = %e, "content generation failed");
                if let Some(cap) = max_attempts {
                    if attempt >= cap {
                        return Err(ContentError::Exhausted(attempt));
                    }
                }
                sleep(retry_delay).await;
            }
        }
    }
}

/// Fetch best-effort content, degrading to `None` on any failure.
pub async fn optional_content(source: &dyn ContentSource, prompt: &str) -> Option<String> {
    match source.generate(prompt).await {
        Ok(text) => Some(text),
        Err(e) => {
            warn!(error = %e, "best-effort content unavailable, continuing without it");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    struct FlakySource {
        failures_before_success: u32,
        calls: AtomicU32,
    }

    #[async_trait]
    impl ContentSource for FlakySource {
        async fn generate(&self, _prompt: &str) -> Result<String, ContentError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call < self.failures_before_success {
                Err(ContentError::Empty)
            } else {
                Ok("generated".to_string())
            }
        }
    }

    #[tokio::test]
    async fn test_require_content_retries_until_success() {
        let source = FlakySource {
            failures_before_success: 2,
            calls: AtomicU32::new(0),
        };
        let text = require_content(&source, "p", Duration::from_millis(1), Some(5))
            .await
            .unwrap();
        assert_eq!(text, "generated");
        assert_eq!(source.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_require_content_gives_up_at_attempt_cap() {
        let source = FlakySource {
            failures_before_success: u32::MAX,
            calls: AtomicU32::new(0),
        };
        let result = require_content(&source, "p", Duration::from_millis(1), Some(3)).await;
        assert!(matches!(result, Err(ContentError::Exhausted(3))));
    }

    #[tokio::test]
    async fn test_optional_content_degrades_to_none() {
        let source = FlakySource {
            failures_before_success: u32::MAX,
            calls: AtomicU32::new(0),
        };
        assert!(optional_content(&source, "p").await.is_none());
    }
}
