pub mod handlers;
pub mod routes;

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::tts::VoiceInfo;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateRequest {
    #[serde(default)]
    pub input_text: Option<String>,
    #[serde(default)]
    pub target_language: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResponse {
    pub translated_text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub target_language: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechResponse {
    pub audio_data: String,
    pub mime_type: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoicesResponse {
    pub default_voice: &'static str,
    pub voices: Vec<VoiceInfo>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub upstream_configured: bool,
}

fn required(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

impl TranslateRequest {
    pub fn validate(&self) -> Result<(&str, &str), AppError> {
        match (required(&self.input_text), required(&self.target_language)) {
            (Some(input_text), Some(target_language)) => Ok((input_text, target_language)),
            _ => Err(AppError::BadRequest(
                "Missing required fields: inputText and targetLanguage".into(),
            )),
        }
    }
}

impl SpeechRequest {
    pub fn validate(&self) -> Result<(&str, &str), AppError> {
        match (required(&self.text), required(&self.target_language)) {
            (Some(text), Some(target_language)) => Ok((text, target_language)),
            _ => Err(AppError::BadRequest(
                "Missing required fields: text and targetLanguage".into(),
            )),
        }
    }
}
