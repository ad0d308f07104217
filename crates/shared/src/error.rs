use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    LoadFailure,
    EmptyCollection,
    NoMatchForToday,
    InvalidColorFormat,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LoadFailure => "load_failure",
            Self::EmptyCollection => "empty_collection",
            Self::NoMatchForToday => "no_match_for_today",
            Self::InvalidColorFormat => "invalid_color_format",
        }
    }
}

#[derive(Debug, Error)]
pub enum WordError {
    #[error("failed to load words from {source_name}: {reason}")]
    Load { source_name: String, reason: String },
    #[error("failed to parse words from {source_name}: {reason}")]
    Parse { source_name: String, reason: String },
    #[error("invalid color format '{0}': expected six hex digits with an optional leading '#'")]
    InvalidColorFormat(String),
}

impl WordError {
    pub fn load(source_name: impl Into<String>, reason: impl ToString) -> Self {
        Self::Load {
            source_name: source_name.into(),
            reason: reason.to_string(),
        }
    }

    pub fn parse(source_name: impl Into<String>, reason: impl ToString) -> Self {
        Self::Parse {
            source_name: source_name.into(),
            reason: reason.to_string(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Load { .. } | Self::Parse { .. } => ErrorCode::LoadFailure,
            Self::InvalidColorFormat(_) => ErrorCode::InvalidColorFormat,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub code: ErrorCode,
    pub message: String,
}

impl ErrorReport {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl From<&WordError> for ErrorReport {
    fn from(value: &WordError) -> Self {
        Self::new(value.code(), value.to_string())
    }
}
