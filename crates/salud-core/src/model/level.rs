use serde::{Deserialize, Serialize};

/// Lowest reading level authored anywhere in the corpus.
pub const MIN_LEVEL: u8 = 1;
/// Highest reading level authored anywhere in the corpus.
pub const MAX_LEVEL: u8 = 5;

/// The payload of one reading level: a one-paragraph summary plus the
/// long-form explanation and its teaching aids. Bilingual records follow the
/// original corpus convention of `"espanol | english"` paired strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelContent {
    /// Redundant copy of the map key, kept for wire-format fidelity.
    pub level: u8,
    pub summary: String,
    pub explanation: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub key_terms: Vec<KeyTerm>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub analogies: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub clinical_notes: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub patient_counseling_points: Vec<String>,
}

/// A term/definition pair surfaced alongside a level's explanation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyTerm {
    pub term: String,
    pub definition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,
}
