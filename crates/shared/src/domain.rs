use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::WordError;

/// A six digit hex color, kept as written plus its decoded channels.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    raw: String,
    rgb: [u8; 3],
}

impl HexColor {
    pub fn parse(input: &str) -> Result<Self, WordError> {
        let raw = input.trim();
        let digits = raw.strip_prefix('#').unwrap_or(raw);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(WordError::InvalidColorFormat(input.to_string()));
        }

        let mut rgb = [0u8; 3];
        for (i, channel) in rgb.iter_mut().enumerate() {
            *channel = u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16)
                .map_err(|_| WordError::InvalidColorFormat(input.to_string()))?;
        }

        Ok(Self {
            raw: raw.to_string(),
            rgb,
        })
    }

    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            raw: format!("#{r:02X}{g:02X}{b:02X}"),
            rgb: [r, g, b],
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        (self.rgb[0], self.rgb[1], self.rgb[2])
    }

    pub fn css(&self) -> String {
        let (r, g, b) = self.rgb();
        format!("#{r:02X}{g:02X}{b:02X}")
    }

    pub fn with_alpha(&self, alpha: u8) -> String {
        format!("{}{alpha:02X}", self.css())
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for HexColor {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = WordError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(value: HexColor) -> Self {
        value.raw
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    pub word: String,
    #[serde(default)]
    pub definition: String,
    pub date: NaiveDate,
    #[serde(
        default,
        deserialize_with = "blank_color_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub color: Option<HexColor>,
}

/// A blank `color:` means "no color", so the record takes its palette color.
fn blank_color_as_none<'de, D>(deserializer: D) -> Result<Option<HexColor>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.trim().is_empty() => HexColor::parse(&raw)
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

impl WordRecord {
    pub fn new(word: impl Into<String>, definition: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            word: word.into(),
            definition: definition.into(),
            date,
            color: None,
        }
    }

    pub fn with_color(mut self, color: HexColor) -> Self {
        self.color = Some(color);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordCollection {
    records: Vec<WordRecord>,
}

impl WordCollection {
    pub fn new(records: Vec<WordRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[WordRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WordRecord> {
        self.records.iter()
    }
}

impl FromIterator<WordRecord> for WordCollection {
    fn from_iter<T: IntoIterator<Item = WordRecord>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a WordCollection {
    type Item = &'a WordRecord;
    type IntoIter = std::slice::Iter<'a, WordRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
