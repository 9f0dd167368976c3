use std::sync::Arc;

use async_trait::async_trait;
use bhasha_core::error::TranslateError;

/// Raw request/response leg of the pipeline. The engine talks to the
/// endpoint only through this trait, which keeps chunking and decoding
/// testable without a network.
#[async_trait]
pub trait TranslateTransport: Send + Sync {
    /// Issues one request for one text/language pair and returns the raw
    /// response body. No retries at this layer.
    async fn fetch(
        &self,
        text: &str,
        source_code: &str,
        target_code: &str,
    ) -> Result<String, TranslateError>;
}

#[async_trait]
impl<T: TranslateTransport + ?Sized> TranslateTransport for Arc<T> {
    async fn fetch(
        &self,
        text: &str,
        source_code: &str,
        target_code: &str,
    ) -> Result<String, TranslateError> {
        (**self).fetch(text, source_code, target_code).await
    }
}

/// Client for the free `translate_a/single` endpoint.
pub struct GtxClient {
    http: reqwest::Client,
    endpoint: String,
}

impl GtxClient {
    /// The `reqwest::Client` is constructed once at startup and injected
    /// here so every attempt shares one connection pool.
    pub fn new(http: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl TranslateTransport for GtxClient {
    async fn fetch(
        &self,
        text: &str,
        source_code: &str,
        target_code: &str,
    ) -> Result<String, TranslateError> {
        let url = format!("{}/translate_a/single", self.endpoint.trim_end_matches('/'));

        let response = self
            .http
            .get(&url)
            .query(&[
                ("client", "gtx"),
                ("sl", source_code),
                ("tl", target_code),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| TranslateError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(TranslateError::Network(format!(
                "endpoint returned status {}",
                response.status()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| TranslateError::Network(e.to_string()))?;

        if body.trim().is_empty() {
            return Err(TranslateError::EmptyResponse);
        }

        Ok(body)
    }
}
