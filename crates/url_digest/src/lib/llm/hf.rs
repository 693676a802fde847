use reqwest::Client;
use serde::Deserialize;

use crate::{Summarizer, SummaryResponse};

/// Client for the Hugging Face Inference API text-generation endpoint.
pub struct HfEndpointClient {
    client: Client,
    api_token: String,
    base_url: String,
    max_new_tokens: u32,
    temperature: f32,
}

#[derive(Debug, thiserror::Error)]
pub enum HfError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("Empty response from text generation endpoint")]
    EmptyResponse,
}

impl HfEndpointClient {
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_token: api_token.into(),
            base_url: "https://api-inference.huggingface.co".into(),
            max_new_tokens: 150,
            temperature: 0.7,
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_max_new_tokens(mut self, max_new_tokens: u32) -> Self {
        self.max_new_tokens = max_new_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub async fn send_generation_request(
        &self,
        model_name: impl Into<String>,
        inputs: impl Into<String>,
    ) -> Result<Vec<TextGeneration>, HfError> {
        let body = serde_json::json!({
            "inputs": inputs.into(),
            "parameters": {
                "max_new_tokens": self.max_new_tokens,
                "temperature": self.temperature,
                "return_full_text": false
            }
        });

        let resp = self
            .client
            .post(format!("{}/models/{}", self.base_url, model_name.into()))
            .bearer_auth(&self.api_token)
            .json(&body)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(HfError::Api { status, message });
        }

        Ok(resp.json::<Vec<TextGeneration>>().await?)
    }
}

#[derive(Debug, Deserialize)]
pub struct TextGeneration {
    pub generated_text: String,
}

impl Summarizer for HfEndpointClient {
    const SUMMARIZER_MODEL: &'static str = "mistralai/Mistral-7B-Instruct-v0.3";
    const CONTEXT_WINDOW_LIMIT: usize = 32_768;

    type Error = HfError;

    async fn summarize(&self, content: &str) -> Result<SummaryResponse, Self::Error> {
        let response = self
            .send_generation_request(Self::SUMMARIZER_MODEL, content)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to summarize content"))?;

        let summary = response
            .into_iter()
            .next()
            .map(|generation| generation.generated_text)
            .ok_or(HfError::EmptyResponse)?;

        Ok(SummaryResponse { summary })
    }
}
