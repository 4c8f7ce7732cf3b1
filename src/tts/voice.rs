use lazy_static::lazy_static;
use serde::Serialize;
use std::collections::HashMap;

/// Voice used for any language not listed in [`VOICES`].
pub const DEFAULT_VOICE: &str = "Kore";

pub const VOICES: [(&str, &str); 17] = [
    ("English", "Zephyr"),
    ("Hindi", "Rasalgethi"),
    ("Bengali", "Sadachbia"),
    ("Spanish", "Autonoe"),
    ("French", "Charon"),
    ("German", "Fenrir"),
    ("Japanese", "Leda"),
    ("Korean", "Orus"),
    ("Italian", "Aoede"),
    ("Portuguese", "Callirrhoe"),
    ("Russian", "Enceladus"),
    ("Dutch", "Iapetus"),
    ("Polish", "Umbriel"),
    ("Thai", "Algenib"),
    ("Turkish", "Rasalgethi"),
    ("Vietnamese", "Laomedeia"),
    ("Assamese", "Achernar"),
];

lazy_static! {
    static ref VOICE_TABLE: HashMap<&'static str, &'static str> = VOICES.into_iter().collect();
}

pub fn voice_for(language: &str) -> &'static str {
    VOICE_TABLE.get(language).copied().unwrap_or(DEFAULT_VOICE)
}

#[derive(Debug, Clone, Serialize)]
pub struct VoiceInfo {
    pub language: String,
    pub voice: String,
}

pub fn list_voices() -> Vec<VoiceInfo> {
    let mut voices: Vec<VoiceInfo> = VOICES
        .iter()
        .map(|(language, voice)| VoiceInfo {
            language: language.to_string(),
            voice: voice.to_string(),
        })
        .collect();
    voices.sort_by(|a, b| a.language.cmp(&b.language));
    voices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_listed_languages() {
        let expected = [
            ("English", "Zephyr"),
            ("Hindi", "Rasalgethi"),
            ("Bengali", "Sadachbia"),
            ("Spanish", "Autonoe"),
            ("French", "Charon"),
            ("German", "Fenrir"),
            ("Japanese", "Leda"),
            ("Korean", "Orus"),
            ("Italian", "Aoede"),
            ("Portuguese", "Callirrhoe"),
            ("Russian", "Enceladus"),
            ("Dutch", "Iapetus"),
            ("Polish", "Umbriel"),
            ("Thai", "Algenib"),
            ("Turkish", "Rasalgethi"),
            ("Vietnamese", "Laomedeia"),
            ("Assamese", "Achernar"),
        ];
        for (language, voice) in expected {
            assert_eq!(voice_for(language), voice, "language: {}", language);
        }
    }

    #[test]
    fn test_unknown_falls_back_to_default() {
        for language in ["", "english", "ENGLISH", " English", "Englsh", "Manipuri", "Klingon"] {
            assert_eq!(voice_for(language), DEFAULT_VOICE, "language: {:?}", language);
        }
    }

    #[test]
    fn test_list_voices_sorted() {
        let voices = list_voices();
        assert_eq!(voices.len(), 17);
        assert_eq!(voices[0].language, "Assamese");
        assert!(voices.windows(2).all(|w| w[0].language < w[1].language));
    }
}
