//! Schema validation for candidate content records.
//!
//! Two entry points cover the two trust boundaries. `validate_value` checks an
//! untyped JSON value before serde coercion, so missing fields and bad enum
//! values surface as diagnostics instead of opaque deserialization failures.
//! `validate_record` checks invariants the type system cannot express on an
//! already-typed record (level keys in range, non-empty summaries, and so on).
//! Both are pure and collect every issue found rather than stopping at the
//! first.

use std::collections::HashSet;

use serde_json::Value;

use crate::error::ValidationIssue;
use crate::model::{
    CitationType, ClinicalRelevance, ContentRecord, ContentType, MediaType, Relationship, Status,
    MAX_LEVEL, MIN_LEVEL,
};

/// Fields a record value must carry to be coercible at all.
const REQUIRED_FIELDS: &[&str] = &[
    "id",
    "type",
    "name",
    "levels",
    "tags",
    "createdAt",
    "updatedAt",
    "version",
    "status",
];

/// Validate a typed record against the invariants serde cannot enforce.
/// Returns every issue found; an empty vec means the record is accepted.
pub fn validate_record(record: &ContentRecord) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let id = &record.id;

    if id.as_str().trim().is_empty() {
        issues.push(ValidationIssue::EmptyId);
    }
    if record.name.trim().is_empty() {
        issues.push(ValidationIssue::EmptyName { id: id.clone() });
    }

    if record.levels.is_empty() {
        issues.push(ValidationIssue::EmptyLevels { id: id.clone() });
    }
    for (&key, content) in &record.levels {
        if !(MIN_LEVEL..=MAX_LEVEL).contains(&key) {
            issues.push(ValidationIssue::LevelOutOfRange {
                id: id.clone(),
                level: key,
            });
        }
        if content.level != key {
            issues.push(ValidationIssue::LevelMismatch {
                id: id.clone(),
                key,
                level: content.level,
            });
        }
        if content.summary.trim().is_empty() {
            issues.push(ValidationIssue::EmptySummary {
                id: id.clone(),
                level: key,
            });
        }
    }

    for xref in &record.cross_references {
        if xref.target_id.as_str().trim().is_empty() {
            issues.push(ValidationIssue::EmptyTargetId { id: id.clone() });
        }
    }
    for citation in &record.citations {
        if citation.id.trim().is_empty() {
            issues.push(ValidationIssue::EmptyCitationId { id: id.clone() });
        }
    }
    for media in &record.media {
        if media.id.trim().is_empty() {
            issues.push(ValidationIssue::EmptyMediaId { id: id.clone() });
        }
    }

    issues
}

/// Validate an untyped JSON value against the record shape: required fields
/// present, closed-set fields within their enums. Runs before coercion so a
/// lint pass can name the offending field instead of echoing a serde error.
pub fn validate_value(value: &Value) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    let Some(obj) = value.as_object() else {
        issues.push(ValidationIssue::Uncoercible {
            detail: "expected a JSON object".into(),
        });
        return issues;
    };

    for field in REQUIRED_FIELDS {
        if !obj.contains_key(*field) {
            issues.push(ValidationIssue::MissingField {
                field: (*field).to_string(),
            });
        }
    }

    check_enum(obj.get("type"), "type", ContentType::ALLOWED, &mut issues);
    check_enum(obj.get("status"), "status", Status::ALLOWED, &mut issues);
    if let Some(tags) = obj.get("tags").and_then(Value::as_object) {
        check_enum(
            tags.get("clinicalRelevance"),
            "tags.clinicalRelevance",
            ClinicalRelevance::ALLOWED,
            &mut issues,
        );
    }
    if let Some(xrefs) = obj.get("crossReferences").and_then(Value::as_array) {
        for xref in xrefs {
            check_enum(
                xref.get("relationship"),
                "crossReferences.relationship",
                Relationship::ALLOWED,
                &mut issues,
            );
            check_enum(
                xref.get("targetType"),
                "crossReferences.targetType",
                ContentType::ALLOWED,
                &mut issues,
            );
        }
    }
    if let Some(citations) = obj.get("citations").and_then(Value::as_array) {
        for citation in citations {
            check_enum(
                citation.get("type"),
                "citations.type",
                CitationType::ALLOWED,
                &mut issues,
            );
        }
    }
    if let Some(media) = obj.get("media").and_then(Value::as_array) {
        for item in media {
            check_enum(item.get("type"), "media.type", MediaType::ALLOWED, &mut issues);
        }
    }

    issues
}

fn check_enum(
    value: Option<&Value>,
    field: &str,
    allowed: &'static [&'static str],
    issues: &mut Vec<ValidationIssue>,
) {
    if let Some(s) = value.and_then(Value::as_str) {
        if !allowed.contains(&s) {
            issues.push(ValidationIssue::InvalidEnum {
                field: field.to_string(),
                value: s.to_string(),
                allowed,
            });
        }
    }
}

/// Coerce an untyped value into a `ContentRecord`, reporting the full issue
/// list on failure. Records that pass shape checks but fail typed invariants
/// are rejected too: a record failing validation must never reach an index.
pub fn coerce_record(value: &Value) -> Result<ContentRecord, Vec<ValidationIssue>> {
    let shape_issues = validate_value(value);
    if !shape_issues.is_empty() {
        return Err(shape_issues);
    }
    let record: ContentRecord = serde_json::from_value(value.clone()).map_err(|e| {
        vec![ValidationIssue::Uncoercible {
            detail: e.to_string(),
        }]
    })?;
    let issues = validate_record(&record);
    if issues.is_empty() {
        Ok(record)
    } else {
        Err(issues)
    }
}

/// Validate a batch of typed records, adding in-batch duplicate detection on
/// top of the per-record checks. Order of reported issues follows input order.
pub fn validate_batch(records: &[ContentRecord]) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let mut seen = HashSet::new();
    for record in records {
        issues.extend(validate_record(record));
        if !seen.insert(record.id.clone()) {
            issues.push(ValidationIssue::DuplicateId {
                id: record.id.clone(),
            });
        }
    }
    issues
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::model::tests::sample_record;
    use crate::model::{CrossReference, LevelContent};

    #[test]
    fn test_valid_record_has_no_issues() {
        assert!(validate_record(&sample_record("condition-ok")).is_empty());
    }

    #[test]
    fn test_empty_levels_rejected() {
        let mut record = sample_record("condition-bare");
        record.levels.clear();
        let issues = validate_record(&record);
        assert!(issues.contains(&ValidationIssue::EmptyLevels {
            id: "condition-bare".into()
        }));
    }

    #[test]
    fn test_level_out_of_range_and_mismatch() {
        let mut record = sample_record("condition-levels");
        let payload = record.levels[&1].clone();
        record.levels.insert(7, LevelContent { level: 2, ..payload });
        let issues = validate_record(&record);
        assert!(issues.iter().any(|i| matches!(
            i,
            ValidationIssue::LevelOutOfRange { level: 7, .. }
        )));
        assert!(issues.iter().any(|i| matches!(
            i,
            ValidationIssue::LevelMismatch { key: 7, level: 2, .. }
        )));
    }

    #[test]
    fn test_empty_summary_rejected() {
        let mut record = sample_record("condition-summary");
        record.levels.get_mut(&1).unwrap().summary = "   ".into();
        let issues = validate_record(&record);
        assert!(issues.iter().any(|i| matches!(
            i,
            ValidationIssue::EmptySummary { level: 1, .. }
        )));
    }

    #[test]
    fn test_empty_target_id_rejected() {
        let mut record = sample_record("condition-xref");
        record.cross_references.push(CrossReference {
            target_id: "".into(),
            target_type: crate::model::ContentType::Condition,
            relationship: crate::model::Relationship::Related,
            label: "broken".into(),
        });
        let issues = validate_record(&record);
        assert!(issues.contains(&ValidationIssue::EmptyTargetId {
            id: "condition-xref".into()
        }));
    }

    #[test]
    fn test_issues_are_collected_not_first_only() {
        let mut record = sample_record("condition-multi");
        record.name = "".into();
        record.levels.get_mut(&1).unwrap().summary = "".into();
        let issues = validate_record(&record);
        assert!(issues.len() >= 2);
    }

    #[test]
    fn test_validate_value_missing_fields() {
        let issues = validate_value(&json!({ "id": "x" }));
        assert!(issues.contains(&ValidationIssue::MissingField {
            field: "name".into()
        }));
        assert!(issues.contains(&ValidationIssue::MissingField {
            field: "levels".into()
        }));
    }

    #[test]
    fn test_validate_value_invalid_enum() {
        let mut value = serde_json::to_value(sample_record("condition-enum")).unwrap();
        value["status"] = json!("retired");
        let issues = validate_value(&value);
        assert!(issues.iter().any(|i| matches!(
            i,
            ValidationIssue::InvalidEnum { field, value, .. }
                if field == "status" && value == "retired"
        )));
    }

    #[test]
    fn test_coerce_record_roundtrip() {
        let record = sample_record("condition-coerce");
        let value = serde_json::to_value(&record).unwrap();
        let coerced = coerce_record(&value).unwrap();
        assert_eq!(record, coerced);
    }

    #[test]
    fn test_coerce_rejects_bad_relationship() {
        let mut value = serde_json::to_value(sample_record("condition-rel")).unwrap();
        value["crossReferences"] = json!([{
            "targetId": "condition-other",
            "targetType": "condition",
            "relationship": "friendly",
            "label": "nope"
        }]);
        let issues = coerce_record(&value).unwrap_err();
        assert!(issues.iter().any(|i| matches!(
            i,
            ValidationIssue::InvalidEnum { field, .. } if field == "crossReferences.relationship"
        )));
    }

    #[test]
    fn test_batch_duplicate_detection() {
        let records = vec![
            sample_record("heart-disease-x"),
            sample_record("condition-fine"),
            sample_record("heart-disease-x"),
        ];
        let issues = validate_batch(&records);
        assert!(issues.contains(&ValidationIssue::DuplicateId {
            id: "heart-disease-x".into()
        }));
        assert!(issues.iter().filter(|i| i.is_fatal()).count() == 1);
    }
}
