use crate::config::Config;
use crate::error::{AppError, Service};
use crate::gemini::{GeminiClient, GeminiError, GenerateContentRequest};

pub struct TranslationService {
    gemini: GeminiClient,
    model: String,
    source_language: String,
    source_script: String,
}

impl TranslationService {
    pub fn new(gemini: GeminiClient, config: &Config) -> Self {
        Self {
            gemini,
            model: config.translation_model.clone(),
            source_language: config.source_language.clone(),
            source_script: config.source_script.clone(),
        }
    }

    pub fn build_prompt(&self, input_text: &str, target_language: &str) -> String {
        let source = &self.source_language;
        let script = &self.source_script;
        format!(
            "Translate the following {source} text to {target_language}. \
             Only output the translated text without any prefixes, conversational phrases, or extra information. \
             If the input is Romanized {source}, process it as such. \
             If it's {script}, process it as {script}.\n\
             \n\
             {source} Text: {input_text}"
        )
    }

    pub async fn translate(&self, input_text: &str, target_language: &str) -> Result<String, AppError> {
        let request = GenerateContentRequest::user_prompt(self.build_prompt(input_text, target_language));
        let response = match self.gemini.generate_content(&self.model, &request).await {
            Ok(response) => response,
            Err(GeminiError::Shape(e)) => {
                tracing::error!("Unexpected translation response structure: {}", e);
                return Err(AppError::upstream(Service::Translation)(e.into()));
            }
            Err(e) => return Err(AppError::upstream(Service::Translation)(e)),
        };

        match response.first_text() {
            Ok(text) => Ok(text.to_string()),
            Err(e) => {
                tracing::error!("Unexpected translation response structure: {} in {:?}", e, response);
                Err(AppError::upstream(Service::Translation)(e.into()))
            }
        }
    }
}
