use thiserror::Error;

use crate::model::ContentId;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid content ID: {0}")]
    InvalidId(String),

    #[error("Module '{module}' exports no content records")]
    EmptyModule { module: String },

    #[error("Export '{export}' does not match the content record shape: {issues:?}")]
    MalformedExport {
        export: String,
        issues: Vec<ValidationIssue>,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// One problem found while validating a candidate record.
///
/// Issues are collected into a list rather than raised one at a time, so a
/// batch lint pass can report everything wrong with the corpus at once.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    #[error("missing required field '{field}'")]
    MissingField { field: String },

    #[error("field '{field}' holds '{value}', expected one of {allowed:?}")]
    InvalidEnum {
        field: String,
        value: String,
        allowed: &'static [&'static str],
    },

    #[error("duplicate record ID '{id}'")]
    DuplicateId { id: ContentId },

    #[error("record ID is empty")]
    EmptyId,

    #[error("record '{id}' has an empty name")]
    EmptyName { id: ContentId },

    #[error("record '{id}' defines no levels")]
    EmptyLevels { id: ContentId },

    #[error("record '{id}' defines level {level}, outside 1-5")]
    LevelOutOfRange { id: ContentId, level: u8 },

    #[error("record '{id}' maps key {key} to a payload labeled level {level}")]
    LevelMismatch { id: ContentId, key: u8, level: u8 },

    #[error("record '{id}' level {level} has an empty summary")]
    EmptySummary { id: ContentId, level: u8 },

    #[error("record '{id}' has a cross-reference with an empty target ID")]
    EmptyTargetId { id: ContentId },

    #[error("record '{id}' has a citation with an empty ID")]
    EmptyCitationId { id: ContentId },

    #[error("record '{id}' has a media reference with an empty ID")]
    EmptyMediaId { id: ContentId },

    #[error("value cannot be coerced to the record shape: {detail}")]
    Uncoercible { detail: String },
}

impl ValidationIssue {
    /// Duplicate IDs corrupt the corpus join key; everything else is a
    /// per-record defect that only keeps that record out of the index.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ValidationIssue::DuplicateId { .. })
    }
}
