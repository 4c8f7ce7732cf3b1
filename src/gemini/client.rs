use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};

use super::envelope::{GenerateContentResponse, ShapeError};
use super::request::GenerateContentRequest;
use crate::config::Config;

const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(thiserror::Error, Debug)]
pub enum GeminiError {
    #[error("API key not configured")]
    MissingApiKey,

    #[error("upstream returned {status}: {body}")]
    Http { status: StatusCode, body: String },

    #[error("unexpected response structure: {0}")]
    Shape(#[from] ShapeError),

    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<SecretString>,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }

    pub async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GeminiError> {
        // No key, no call
        let api_key = self.api_key.as_ref().ok_or(GeminiError::MissingApiKey)?;

        let url = self.endpoint(model);
        tracing::debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, api_key.expose_secret().as_str())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeminiError::Http { status, body });
        }

        let body = response.text().await?;
        Ok(GenerateContentResponse::parse(&body)?)
    }
}
