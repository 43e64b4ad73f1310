use serde::{Deserialize, Serialize};

/// Structured metadata used for querying and categorization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentTags {
    /// Body systems the record touches (e.g. "renal", "cardiovascular").
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub systems: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub topics: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    pub clinical_relevance: ClinicalRelevance,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exam_relevance: Option<ExamRelevance>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClinicalRelevance {
    Low,
    Medium,
    High,
    Critical,
}

impl ClinicalRelevance {
    pub const ALLOWED: &'static [&'static str] = &["low", "medium", "high", "critical"];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClinicalRelevance::Low => "low",
            ClinicalRelevance::Medium => "medium",
            ClinicalRelevance::High => "high",
            ClinicalRelevance::Critical => "critical",
        }
    }
}

/// Relevance to licensing exams, carried only on records authored for
/// clinician-facing levels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamRelevance {
    #[serde(default)]
    pub usmle: bool,
    #[serde(default)]
    pub nbme: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub shelf: Vec<String>,
}
