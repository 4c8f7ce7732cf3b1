use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use secrecy::SecretString;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TRANSLATION_MODEL: &str = "gemini-2.5-flash-preview-05-20";
pub const DEFAULT_TTS_MODEL: &str = "gemini-2.5-flash-preview-tts";

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("PORT must be a number, got '{0}'")]
    InvalidPort(String),

    #[error("HOST must be an IP address, got '{0}'")]
    InvalidHost(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<SecretString>,
    pub host: IpAddr,
    pub port: u16,
    pub base_url: String,
    pub translation_model: String,
    pub tts_model: String,
    pub source_language: String,
    pub source_script: String,
    pub static_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let or = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());

        let host_raw = or("HOST", "0.0.0.0");
        let host: IpAddr = host_raw
            .parse()
            .map_err(|_| ConfigError::InvalidHost(host_raw.clone()))?;

        let port_raw = or("PORT", "3000");
        let port: u16 = port_raw
            .parse()
            .map_err(|_| ConfigError::InvalidPort(port_raw.clone()))?;

        Ok(Self {
            api_key: get("GOOGLE_API_KEY").map(SecretString::new),
            host,
            port,
            base_url: or("GEMINI_BASE_URL", DEFAULT_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
            translation_model: or("TRANSLATION_MODEL", DEFAULT_TRANSLATION_MODEL),
            tts_model: or("TTS_MODEL", DEFAULT_TTS_MODEL),
            source_language: or("SOURCE_LANGUAGE", "Manipuri"),
            source_script: or("SOURCE_SCRIPT", "Meitei Mayek"),
            static_dir: or("STATIC_DIR", "static").into(),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
