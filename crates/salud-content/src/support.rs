//! Shared constructors for authored content, so record literals stay close to
//! the prose instead of drowning in struct plumbing.

use chrono::NaiveDate;
use salud_core::model::{
    Citation, CitationType, ClinicalRelevance, ContentId, ContentRecord, ContentTags, ContentType,
    CrossReference, KeyTerm, LevelContent, Relationship, Status,
};
use std::collections::BTreeMap;

pub(crate) fn key_term(term: &str, definition: &str) -> KeyTerm {
    KeyTerm {
        term: term.into(),
        definition: definition.into(),
        pronunciation: None,
    }
}

pub(crate) fn level(number: u8, summary: &str, explanation: &str) -> LevelContent {
    LevelContent {
        level: number,
        summary: summary.into(),
        explanation: explanation.into(),
        key_terms: vec![],
        analogies: vec![],
        examples: vec![],
        clinical_notes: vec![],
        patient_counseling_points: vec![],
    }
}

pub(crate) fn related(target: &str, label: &str) -> CrossReference {
    CrossReference {
        target_id: ContentId::from(target),
        target_type: ContentType::Condition,
        relationship: Relationship::Related,
        label: label.into(),
    }
}

pub(crate) fn see_also(target: &str, label: &str) -> CrossReference {
    CrossReference {
        target_id: ContentId::from(target),
        target_type: ContentType::Condition,
        relationship: Relationship::SeeAlso,
        label: label.into(),
    }
}

pub(crate) fn guideline(id: &str, title: &str, authors: &[&str], source: &str) -> Citation {
    Citation {
        id: id.into(),
        citation_type: CitationType::Guideline,
        title: title.into(),
        authors: authors.iter().map(|a| a.to_string()).collect(),
        source: source.into(),
        url: None,
        chapter: None,
        accessed_date: None,
        license: Some("CC BY 4.0".into()),
    }
}

pub(crate) fn textbook(id: &str, title: &str, authors: &[&str], source: &str) -> Citation {
    Citation {
        id: id.into(),
        citation_type: CitationType::Textbook,
        title: title.into(),
        authors: authors.iter().map(|a| a.to_string()).collect(),
        source: source.into(),
        url: None,
        chapter: None,
        accessed_date: None,
        license: None,
    }
}

/// A published bilingual condition record. Levels, references, citations, and
/// tags are filled in by the caller.
#[allow(clippy::too_many_arguments)]
pub(crate) fn condition(
    id: &str,
    name: &str,
    name_es: &str,
    alternate_names: &[&str],
    levels: Vec<LevelContent>,
    cross_references: Vec<CrossReference>,
    citations: Vec<Citation>,
    tags: ContentTags,
) -> ContentRecord {
    ContentRecord {
        id: ContentId::from(id),
        content_type: ContentType::Condition,
        name: name.into(),
        name_es: Some(name_es.into()),
        alternate_names: alternate_names.iter().map(|n| n.to_string()).collect(),
        levels: levels.into_iter().map(|l| (l.level, l)).collect::<BTreeMap<_, _>>(),
        media: vec![],
        citations,
        cross_references,
        tags,
        created_at: NaiveDate::from_ymd_opt(2026, 2, 5).expect("valid date"),
        updated_at: NaiveDate::from_ymd_opt(2026, 8, 20).expect("valid date"),
        version: 2,
        status: Status::Published,
        contributors: vec!["Salud Content Team".into()],
    }
}

pub(crate) fn tags(
    systems: &[&str],
    topics: &[&str],
    keywords: &[&str],
    clinical_relevance: ClinicalRelevance,
) -> ContentTags {
    ContentTags {
        systems: systems.iter().map(|s| s.to_string()).collect(),
        topics: topics.iter().map(|t| t.to_string()).collect(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        clinical_relevance,
        exam_relevance: None,
    }
}
