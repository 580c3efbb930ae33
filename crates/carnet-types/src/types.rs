use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry of the personal word list.
///
/// `source` and `target` are never empty once a record has been built;
/// `target` may carry several accepted senses joined by `/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyRecord {
    pub id: String,
    #[serde(rename = "english")]
    pub source: String,
    #[serde(rename = "french")]
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    pub date_added: DateTime<Utc>,
    #[serde(default)]
    pub correct_count: u32,
    #[serde(default)]
    pub error_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_tested: Option<DateTime<Utc>>,
}

impl VocabularyRecord {
    /// Build a fresh record from user supplied text.
    ///
    /// All inputs are trimmed, a blank example becomes `None`.
    pub fn new(
        id: impl Into<String>,
        source: &str,
        target: &str,
        example: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<Self, RecordError> {
        let source = source.trim();
        let target = target.trim();

        if source.is_empty() {
            return Err(RecordError::MissingField("source"));
        }
        if target.is_empty() {
            return Err(RecordError::MissingField("target"));
        }

        let example = example
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .map(str::to_string);

        Ok(Self {
            id: id.into(),
            source: source.to_string(),
            target: target.to_string(),
            example,
            date_added: now,
            correct_count: 0,
            error_count: 0,
            last_tested: None,
        })
    }

    /// Example sentence, or an empty string
    pub fn example_or_empty(&self) -> &str {
        self.example.as_deref().unwrap_or("")
    }

    /// Bump the matching counter and stamp the attempt time
    pub fn record_attempt(&mut self, correct: bool, at: DateTime<Utc>) {
        if correct {
            self.correct_count = self.correct_count.saturating_add(1);
        } else {
            self.error_count = self.error_count.saturating_add(1);
        }
        self.last_tested = Some(at);
    }
}

/// Which side of a record is shown during a self-test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    #[serde(rename = "EN_FR")]
    SourceToTarget,
    #[serde(rename = "FR_EN")]
    TargetToSource,
}

impl Direction {
    pub fn prompt<'a>(&self, record: &'a VocabularyRecord) -> &'a str {
        match self {
            Direction::SourceToTarget => &record.source,
            Direction::TargetToSource => &record.target,
        }
    }

    pub fn expected<'a>(&self, record: &'a VocabularyRecord) -> &'a str {
        match self {
            Direction::SourceToTarget => &record.target,
            Direction::TargetToSource => &record.source,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Direction::SourceToTarget => Direction::TargetToSource,
            Direction::TargetToSource => Direction::SourceToTarget,
        }
    }

    /// Parse `EN_FR` / `FR_EN` style codes, case-insensitive
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "EN_FR" => Some(Direction::SourceToTarget),
            "FR_EN" => Some(Direction::TargetToSource),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}
