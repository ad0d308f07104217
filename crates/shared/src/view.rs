//! Immutable view-state values handed from the word engine to the renderer.

use chrono::NaiveDate;
use serde::Serialize;

use crate::{
    domain::HexColor,
    error::{ErrorCode, ErrorReport},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ForegroundPalette {
    pub primary_text: &'static str,
    pub secondary_text: &'static str,
    pub tertiary_text: &'static str,
    pub border: &'static str,
    pub hex_chip_background: &'static str,
    pub button_background: &'static str,
    pub button_border: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordOfTheDay {
    pub word: String,
    pub definition: String,
    pub date: NaiveDate,
    pub background: HexColor,
    pub tone: Tone,
    pub foreground: ForegroundPalette,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DailyView {
    Word(WordOfTheDay),
    NoWordToday { date: NaiveDate },
    Empty,
    LoadError(ErrorReport),
}

impl DailyView {
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            Self::Word(_) => None,
            Self::NoWordToday { .. } => Some(ErrorCode::NoMatchForToday),
            Self::Empty => Some(ErrorCode::EmptyCollection),
            Self::LoadError(report) => Some(report.code),
        }
    }

    pub fn headline(&self) -> &str {
        match self {
            Self::Word(word) => &word.word,
            Self::NoWordToday { .. } => "No word for today",
            Self::Empty => "No words found",
            Self::LoadError(_) => "Error loading words",
        }
    }

    pub fn detail(&self) -> &str {
        match self {
            Self::Word(word) => &word.definition,
            Self::NoWordToday { .. } => "Please add a word with today's date to words.yaml",
            Self::Empty => "Please add words to words.yaml",
            Self::LoadError(_) => "Please check the words.yaml file",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchiveEntry {
    pub word: String,
    pub definition: String,
    pub date: NaiveDate,
    pub formatted_date: String,
    pub color: HexColor,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ArchiveView {
    Entries { entries: Vec<ArchiveEntry> },
    Empty,
    LoadError(ErrorReport),
}

impl ArchiveView {
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            Self::Entries { .. } => None,
            Self::Empty => Some(ErrorCode::EmptyCollection),
            Self::LoadError(report) => Some(report.code),
        }
    }

    pub fn empty_state_message(&self) -> Option<&'static str> {
        match self {
            Self::Entries { .. } => None,
            Self::Empty => Some("No words found in words.yaml"),
            Self::LoadError(_) => Some("Error loading words. Please check the words.yaml file."),
        }
    }
}
