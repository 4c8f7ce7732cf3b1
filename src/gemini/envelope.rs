use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    pub candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CandidateContent {
    pub parts: Option<Vec<Part>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<Blob>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blob {
    pub data: Option<String>,
    pub mime_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineAudio {
    pub data: String,
    pub mime_type: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Link {
    Candidates,
    Content,
    Parts,
    Text,
    InlineData,
    Data,
    MimeType,
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Link::Candidates => "candidates",
            Link::Content => "content",
            Link::Parts => "parts",
            Link::Text => "text",
            Link::InlineData => "inlineData",
            Link::Data => "data",
            Link::MimeType => "mimeType",
        };
        f.write_str(name)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ShapeError {
    #[error("missing {0}")]
    Missing(Link),

    #[error("expected audio, got mime type '{0}'")]
    NotAudio(String),

    #[error("body is not a generation envelope: {source}; body: {body}")]
    Undecodable {
        #[source]
        source: serde_json::Error,
        body: String,
    },
}

impl GenerateContentResponse {
    pub fn parse(body: &str) -> Result<Self, ShapeError> {
        serde_json::from_str(body).map_err(|source| ShapeError::Undecodable {
            source,
            body: body.to_string(),
        })
    }

    /// `candidates[0].content.parts[0]`, or the first link that is missing.
    pub fn first_part(&self) -> Result<&Part, ShapeError> {
        let candidate = self
            .candidates
            .as_deref()
            .and_then(|candidates| candidates.first())
            .ok_or(ShapeError::Missing(Link::Candidates))?;
        let content = candidate
            .content
            .as_ref()
            .ok_or(ShapeError::Missing(Link::Content))?;
        content
            .parts
            .as_deref()
            .and_then(|parts| parts.first())
            .ok_or(ShapeError::Missing(Link::Parts))
    }

    pub fn first_text(&self) -> Result<&str, ShapeError> {
        self.first_part()?
            .text
            .as_deref()
            .ok_or(ShapeError::Missing(Link::Text))
    }

    /// Any non-`audio/` MIME type (a text refusal, for instance) is a shape error.
    pub fn first_audio(&self) -> Result<InlineAudio, ShapeError> {
        let blob = self
            .first_part()?
            .inline_data
            .as_ref()
            .ok_or(ShapeError::Missing(Link::InlineData))?;
        let data = blob
            .data
            .as_deref()
            .filter(|d| !d.is_empty())
            .ok_or(ShapeError::Missing(Link::Data))?;
        let mime_type = blob
            .mime_type
            .as_deref()
            .ok_or(ShapeError::Missing(Link::MimeType))?;

        if !mime_type.starts_with("audio/") {
            return Err(ShapeError::NotAudio(mime_type.to_string()));
        }

        Ok(InlineAudio {
            data: data.to_string(),
            mime_type: mime_type.to_string(),
        })
    }
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            inline_data: None,
        }
    }
}
