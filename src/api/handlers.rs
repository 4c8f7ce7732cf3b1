use axum::{extract::rejection::JsonRejection, extract::State, Json};
use std::sync::Arc;

use super::{
    HealthResponse, SpeechRequest, SpeechResponse, TranslateRequest, TranslateResponse,
    VoicesResponse,
};
use crate::api::routes::AppState;
use crate::error::AppError;
use crate::tts::voice;

pub async fn translate(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<TranslateRequest>, JsonRejection>,
) -> Result<Json<TranslateResponse>, AppError> {
    let Json(request) = payload?;

    // Validate input
    let (input_text, target_language) = request.validate()?;

    let translated_text = state.translator.translate(input_text, target_language).await?;

    Ok(Json(TranslateResponse { translated_text }))
}

pub async fn speak(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SpeechRequest>, JsonRejection>,
) -> Result<Json<SpeechResponse>, AppError> {
    let Json(request) = payload?;

    // Validate input
    let (text, target_language) = request.validate()?;

    let audio = state.speech.synthesize(text, target_language).await?;

    Ok(Json(SpeechResponse {
        audio_data: audio.data,
        mime_type: audio.mime_type,
    }))
}

pub async fn list_voices() -> Json<VoicesResponse> {
    Json(VoicesResponse {
        default_voice: voice::DEFAULT_VOICE,
        voices: voice::list_voices(),
    })
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        upstream_configured: state.upstream_configured,
    })
}
