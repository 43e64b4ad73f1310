use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A bibliographic entry backing a record's content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Citation {
    pub id: String,
    #[serde(rename = "type")]
    pub citation_type: CitationType,
    pub title: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<String>,
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chapter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessed_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CitationType {
    Textbook,
    Article,
    Journal,
    Guideline,
    Website,
}

impl CitationType {
    pub const ALLOWED: &'static [&'static str] =
        &["textbook", "article", "journal", "guideline", "website"];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_citation_roundtrip() {
        let citation = Citation {
            id: "ref-1".into(),
            citation_type: CitationType::Guideline,
            title: "KDIGO Clinical Practice Guideline for Acute Kidney Injury".into(),
            authors: vec!["KDIGO AKI Work Group".into()],
            source: "Kidney International Supplements 2012; 2:1-138".into(),
            url: None,
            chapter: None,
            accessed_date: None,
            license: Some("CC BY 4.0".into()),
        };
        let json = serde_json::to_value(&citation).unwrap();
        assert_eq!(json["type"], "guideline");
        assert!(json.get("url").is_none());
        let parsed: Citation = serde_json::from_value(json).unwrap();
        assert_eq!(citation, parsed);
    }
}
