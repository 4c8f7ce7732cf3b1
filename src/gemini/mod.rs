pub mod client;
pub mod envelope;
pub mod request;

pub use client::{GeminiClient, GeminiError};
pub use envelope::InlineAudio;
pub use request::GenerateContentRequest;
