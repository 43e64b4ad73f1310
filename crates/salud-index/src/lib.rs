pub mod error;
pub mod graph;
pub mod index;
pub mod registry;

pub use error::{DanglingReference, IndexError};
pub use graph::{build_graph, ReferenceGraph};
pub use index::{CorpusIndex, CorpusStats};
pub use registry::Registry;

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::BTreeMap;

    use chrono::NaiveDate;
    use salud_core::model::{
        ClinicalRelevance, ContentRecord, ContentTags, ContentType, LevelContent, Status,
    };

    /// A minimal published record with one level, shared by this crate's
    /// unit tests.
    pub(crate) fn sample_record(id: &str) -> ContentRecord {
        let mut levels = BTreeMap::new();
        levels.insert(
            1,
            LevelContent {
                level: 1,
                summary: "Resumen breve. | Short summary.".into(),
                explanation: "Texto. | Text.".into(),
                key_terms: vec![],
                analogies: vec![],
                examples: vec![],
                clinical_notes: vec![],
                patient_counseling_points: vec![],
            },
        );
        ContentRecord {
            id: id.into(),
            content_type: ContentType::Condition,
            name: format!("Record {id}"),
            name_es: None,
            alternate_names: vec![],
            levels,
            media: vec![],
            citations: vec![],
            cross_references: vec![],
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
