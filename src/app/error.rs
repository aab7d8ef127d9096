use thiserror::Error;

use crate::i18n::Translations;

#[derive(Error, Debug)]
pub enum RukuError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("API error {code}: {status}")]
    Api { code: u16, status: String },

    #[error("Response is missing field: {0}")]
    MissingField(&'static str),

    #[error("Unexpected value for field {field}: {value}")]
    UnexpectedValue { field: &'static str, value: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    #[error("Surah not found: {0}")]
    SurahNotFound(String),

    #[error("Invalid ayah reference: {0}")]
    InvalidReference(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RukuError {
    /// Short message suitable for the status bar or stderr. Input errors are
    /// localized.
    pub fn user_message(&self, t: &Translations) -> String {
        match self {
            RukuError::Http(e) if e.is_timeout() => {
                "The request timed out. The API might be slow right now.".to_string()
            }
            RukuError::Http(e) if e.is_connect() || e.is_request() => {
                "Connection error. Check your internet connection and try again.".to_string()
            }
            RukuError::Http(e) if e.is_status() => match e.status() {
                Some(status) => format!("The API answered with HTTP {}", status.as_u16()),
                None => "The API rejected the request.".to_string(),
            },
            RukuError::Json(_) | RukuError::MissingField(_) | RukuError::UnexpectedValue { .. } => {
                "Received an unexpected response format from the API.".to_string()
            }
            RukuError::SurahNotFound(query) => {
                format!("{} {}", t.text("errors.invalidSurah"), query)
            }
            RukuError::InvalidReference(input) => {
                format!("{} {:?}", t.text("errors.invalidReference"), input)
            }
            RukuError::InvalidRange(reason) => {
                format!("{} {}", t.text("errors.invalidRange"), reason)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RukuError>;
