//! HTTP embedder. Talks to an OpenAI-compatible `/embeddings` endpoint
//! (text-embeddings-inference, Ollama, vLLM, OpenAI itself).
//!
//! Retries on 429 and 5xx live here, at the transport. The scoring core never
//! retries and never substitutes a score when this returns an error.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{Embedder, EmbeddingError};

const MAX_ATTEMPTS: u32 = 3;
/// First retry waits this long; each further retry doubles it.
const BASE_RETRY_DELAY: Duration = Duration::from_secs(1);

#[derive(Debug, Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: &'a str,
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

#[derive(Clone)]
pub struct HttpEmbedder {
    client: Client,
    url: Url,
    api_key: Option<String>,
    model: String,
    base_delay: Duration,
}

impl HttpEmbedder {
    pub fn new(
        url: String,
        api_key: Option<String>,
        model: String,
        timeout: Duration,
    ) -> Result<Self> {
        let url = Url::parse(&url)
            .with_context(|| format!("EMBEDDING_API_URL '{url}' is not a valid absolute URL"))?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            client,
            url,
            api_key,
            model,
            base_delay: BASE_RETRY_DELAY,
        })
    }

    #[cfg(test)]
    fn with_base_delay(mut self, base_delay: Duration) -> Self {
        self.base_delay = base_delay;
        self
    }
}

#[async_trait]
impl Embedder for HttpEmbedder {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn vectorize(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let body = EmbeddingRequest {
            model: &self.model,
            input: text,
        };

        let mut last_error: Option<EmbeddingError> = None;

        for attempt in 0..MAX_ATTEMPTS {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s
                let delay = self.base_delay * (1 << (attempt - 1));
                warn!(
                    "Embedding attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let mut request = self.client.post(self.url.clone()).json(&body);
            if let Some(key) = &self.api_key {
                request = request.bearer_auth(key);
            }

            let response = match request.send().await {
                Ok(r) => r,
                // Only transport faults are worth another attempt.
                Err(e) if e.is_connect() || e.is_timeout() || e.is_request() => {
                    last_error = Some(EmbeddingError::Http(e));
                    continue;
                }
                Err(e) => return Err(EmbeddingError::Http(e)),
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("Embedding API returned {}: {}", status, body);
                last_error = Some(EmbeddingError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(EmbeddingError::Api {
                    status: status.as_u16(),
                    message: api_error_message(body),
                });
            }

            let parsed: EmbeddingResponse = response.json().await?;
            let vector = first_vector(parsed)?;
            debug!(model = %self.model, dimension = vector.len(), "embedding received");
            return Ok(vector);
        }

        Err(last_error.unwrap_or(EmbeddingError::EmptyResponse))
    }
}

/// Pulls the provider's error message out of a JSON error body, if there is one.
fn api_error_message(body: String) -> String {
    serde_json::from_str::<ApiError>(&body)
        .map(|e| e.error.message)
        .unwrap_or(body)
}

fn first_vector(response: EmbeddingResponse) -> Result<Vec<f32>, EmbeddingError> {
    response
        .data
        .into_iter()
        .next()
        .map(|d| d.embedding)
        .filter(|v| !v.is_empty())
        .ok_or(EmbeddingError::EmptyResponse)
}
