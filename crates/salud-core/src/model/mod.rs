pub mod citation;
pub mod crossref;
pub mod level;
pub mod media;
pub mod record;
pub mod tags;

pub use citation::{Citation, CitationType};
pub use crossref::{CrossReference, Relationship};
pub use level::{KeyTerm, LevelContent, MAX_LEVEL, MIN_LEVEL};
pub use media::{MediaRef, MediaType};
pub use record::{ContentId, ContentRecord, ContentType, LevelNotPresent, Status};
pub use tags::{ClinicalRelevance, ContentTags, ExamRelevance};

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::BTreeMap;

    use chrono::NaiveDate;

    use super::*;

    /// A minimal published record with one level-1 payload, used across the
    /// crate's unit tests.
    pub(crate) fn sample_record(id: &str) -> ContentRecord {
        let mut levels = BTreeMap::new();
        levels.insert(
            1,
            LevelContent {
                level: 1,
                summary: "Resumen breve. | Short summary.".into(),
                explanation: "## Explicación\n\nTexto.\n\n## Explanation\n\nText.".into(),
                key_terms: vec![KeyTerm {
                    term: "término / term".into(),
                    definition: "Definición. | Definition.".into(),
                    pronunciation: None,
                }],
                analogies: vec![],
                examples: vec![],
                clinical_notes: vec![],
                patient_counseling_points: vec![],
            },
        );
        ContentRecord {
            id: id.into(),
            content_type: ContentType::Condition,
            name: "Sample Condition".into(),
            name_es: Some("Condición de Ejemplo".into()),
            alternate_names: vec![],
            levels,
            media: vec![],
            citations: vec![],
            cross_references: vec![CrossReference {
                target_id: "condition-enfermedad-renal-cronica-ckd".into(),
                target_type: ContentType::Condition,
                relationship: Relationship::Related,
                label: "Condición relacionada / Related condition".into(),
            }],
            tags: ContentTags {
                systems: vec!["renal".into()],
                topics: vec!["nephrology".into()],
                keywords: vec![],
                clinical_relevance: ClinicalRelevance::High,
                exam_relevance: None,
            },
            created_at: NaiveDate::from_ymd_opt(2026, 2, 5).unwrap(),
            updated_at: NaiveDate::from_ymd_opt(2026, 2, 5).unwrap(),
            version: 1,
            status: Status::Published,
            contributors: vec![],
        }
    }
}
