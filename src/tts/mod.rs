pub mod voice;

use crate::config::Config;
use crate::error::{AppError, Service};
use crate::gemini::{GeminiClient, GeminiError, GenerateContentRequest, InlineAudio};

pub use voice::{voice_for, VoiceInfo};

pub struct SpeechService {
    gemini: GeminiClient,
    model: String,
}

impl SpeechService {
    pub fn new(gemini: GeminiClient, config: &Config) -> Self {
        Self {
            gemini,
            model: config.tts_model.clone(),
        }
    }

    pub async fn synthesize(&self, text: &str, target_language: &str) -> Result<InlineAudio, AppError> {
        // 1. Pick voice
        let voice = voice_for(target_language);
        tracing::debug!("Synthesizing {} chars for {} with voice {}", text.len(), target_language, voice);

        // 2. Call upstream
        let request = GenerateContentRequest::speech(text, voice, &self.model);
        let response = match self.gemini.generate_content(&self.model, &request).await {
            Ok(response) => response,
            Err(GeminiError::Shape(e)) => {
                tracing::error!("TTS response did not contain audio data: {}", e);
                return Err(AppError::upstream(Service::Speech)(e.into()));
            }
            Err(e) => return Err(AppError::upstream(Service::Speech)(e)),
        };

        // 3. Pull the audio part
        response.first_audio().map_err(|e| {
            tracing::error!("TTS response did not contain audio data: {} in {:?}", e, response);
            AppError::upstream(Service::Speech)(e.into())
        })
    }
}
