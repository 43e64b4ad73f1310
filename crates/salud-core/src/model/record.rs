use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::citation::Citation;
use super::crossref::CrossReference;
use super::level::LevelContent;
use super::media::MediaRef;
use super::tags::ContentTags;
use crate::error::CoreError;

/// A unique identifier for a content record.
/// Authored as a stable kebab-case slug (e.g. `condition-dialisis-dialysis`),
/// used as the join key for cross-references across the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ContentId(pub String);

impl ContentId {
    /// Parse and validate an ID string. Must be non-empty after trimming.
    pub fn parse(s: impl Into<String>) -> Result<Self, CoreError> {
        let s = s.into();
        if s.trim().is_empty() {
            return Err(CoreError::InvalidId(
                "content ID must be non-empty".to_string(),
            ));
        }
        Ok(Self(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ContentId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ContentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Role of a record within the corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Structure,
    System,
    Pathway,
    Process,
    Condition,
    Concept,
    Topic,
}

impl ContentType {
    /// Wire values of the closed set, for validation diagnostics.
    pub const ALLOWED: &'static [&'static str] = &[
        "structure",
        "system",
        "pathway",
        "process",
        "condition",
        "concept",
        "topic",
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Structure => "structure",
            ContentType::System => "system",
            ContentType::Pathway => "pathway",
            ContentType::Process => "process",
            ContentType::Condition => "condition",
            ContentType::Concept => "concept",
            ContentType::Topic => "topic",
        }
    }
}

/// Editorial status of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Draft,
    Review,
    Published,
}

impl Status {
    pub const ALLOWED: &'static [&'static str] = &["draft", "review", "published"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Draft => "draft",
            Status::Review => "review",
            Status::Published => "published",
        }
    }
}

/// One educational topic: multilevel bilingual explanations plus metadata,
/// citations, media pointers, and soft links to other records.
///
/// Records are immutable after authoring. A content revision is a source-level
/// edit that bumps `version` and touches `updated_at`; there is no runtime
/// mutation anywhere in the corpus.
///
/// The serde representation (camelCase keys, string-keyed `levels` map) is the
/// interchange format for any external consumer, so it round-trips through
/// JSON without loss.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    pub id: ContentId,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_es: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternate_names: Vec<String>,
    /// Reading levels 1-5 (increasing depth). A record defines a subset;
    /// higher levels assume the lower ones by authoring convention only.
    pub levels: BTreeMap<u8, LevelContent>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub media: Vec<MediaRef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub citations: Vec<Citation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cross_references: Vec<CrossReference>,
    pub tags: ContentTags,
    pub created_at: NaiveDate,
    pub updated_at: NaiveDate,
    pub version: u32,
    pub status: Status,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contributors: Vec<String>,
}

impl ContentRecord {
    /// Level lookup is not total: absence of a level is an expected outcome,
    /// reported with the levels that are present so a consumer can pick a
    /// fallback policy.
    pub fn level(&self, level: u8) -> Result<&LevelContent, LevelNotPresent> {
        self.levels.get(&level).ok_or_else(|| LevelNotPresent {
            id: self.id.clone(),
            level,
            available: self.levels.keys().copied().collect(),
        })
    }

    /// Nearest-lower fallback: the requested level if present, otherwise the
    /// closest level below it.
    pub fn level_or_lower(&self, level: u8) -> Result<&LevelContent, LevelNotPresent> {
        self.levels
            .range(..=level)
            .next_back()
            .map(|(_, content)| content)
            .ok_or_else(|| LevelNotPresent {
                id: self.id.clone(),
                level,
                available: self.levels.keys().copied().collect(),
            })
    }
}

/// The requested reading level is not authored for this record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("record '{id}' has no level {level} (available: {available:?})")]
pub struct LevelNotPresent {
    pub id: ContentId,
    pub level: u8,
    pub available: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::tests::sample_record;

    #[test]
    fn test_content_id_parse_validation() {
        assert!(ContentId::parse("condition-dialisis-dialysis").is_ok());
        assert!(ContentId::parse("").is_err());
        assert!(ContentId::parse("   ").is_err());
    }

    #[test]
    fn test_content_id_display() {
        let id = ContentId::from("ent-throat");
        assert_eq!(format!("{id}"), "ent-throat");
        assert_eq!(id.as_str(), "ent-throat");
    }

    #[test]
    fn test_level_lookup_sparse() {
        let mut record = sample_record("condition-test");
        let level_one = record.levels[&1].clone();
        record.levels.insert(3, LevelContent { level: 3, ..level_one });

        assert!(record.level(1).is_ok());
        assert!(record.level(3).is_ok());
        let err = record.level(2).unwrap_err();
        assert_eq!(err.level, 2);
        assert_eq!(err.available, vec![1, 3]);
    }

    #[test]
    fn test_level_or_lower_falls_back() {
        let mut record = sample_record("condition-test");
        let level_one = record.levels[&1].clone();
        record.levels.insert(3, LevelContent { level: 3, ..level_one });

        assert_eq!(record.level_or_lower(2).unwrap().level, 1);
        assert_eq!(record.level_or_lower(5).unwrap().level, 3);
        assert_eq!(record.level_or_lower(1).unwrap().level, 1);
    }

    #[test]
    fn test_level_or_lower_below_all_available() {
        let mut record = sample_record("condition-test");
        let level_one = record.levels.remove(&1).unwrap();
        record.levels.insert(2, LevelContent { level: 2, ..level_one });

        assert!(record.level_or_lower(1).is_err());
    }

    #[test]
    fn test_record_json_roundtrip() {
        let record = sample_record("condition-roundtrip");
        let json = serde_json::to_string_pretty(&record).unwrap();
        let parsed: ContentRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, parsed);
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let record = sample_record("condition-wire");
        let json = serde_json::to_value(&record).unwrap();
        let obj = json.as_object().unwrap();
        assert!(obj.contains_key("type"));
        assert!(obj.contains_key("crossReferences"));
        assert!(obj.contains_key("createdAt"));
        assert!(!obj.contains_key("cross_references"));
        // Level keys serialize as JSON object keys "1".."5".
        assert!(json["levels"].as_object().unwrap().contains_key("1"));
    }
}
