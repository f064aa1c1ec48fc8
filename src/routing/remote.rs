use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

use crate::error::{FilterEngineError, Result};
use crate::routing::{Intent, IntentClassifier};

/// HTTP client for an externally hosted intent classifier.
///
/// `POST {base_url}/v1/classify` with `{"message": ...}` must answer with a
/// JSON [`Intent`].
pub struct RemoteClassifier {
    client: Client,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct ClassifyRequest<'a> {
    message: &'a str,
}

impl RemoteClassifier {
    /// Create a classifier client and check the service is reachable
    pub async fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        let health_url = format!("{}/health", base_url);
        client
            .get(&health_url)
            .send()
            .await
            .map_err(|e| FilterEngineError::Classifier(format!("Health check failed: {}", e)))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl IntentClassifier for RemoteClassifier {
    async fn classify(&self, message: &str) -> Result<Intent> {
        let url = format!("{}/v1/classify", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&ClassifyRequest { message })
            .send()
            .await
            .map_err(|e| FilterEngineError::Classifier(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(FilterEngineError::Classifier(format!(
                "HTTP {}: {}",
                response.status(),
                response.text().await.unwrap_or_default()
            )));
        }

        response
            .json::<Intent>()
            .await
            .map_err(|e| FilterEngineError::Classifier(format!("Invalid JSON: {}", e)))
    }

    fn name(&self) -> &str {
        "remote"
    }
}
