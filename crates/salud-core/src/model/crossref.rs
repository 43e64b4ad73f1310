use serde::{Deserialize, Serialize};

use super::record::{ContentId, ContentType};

/// A directed, non-owning link to another record, joined by ID.
///
/// Cross-references are soft: the target may legitimately not exist in the
/// assembled corpus (authored independently of target existence), so nothing
/// here guarantees referential integrity. Resolution happens against a built
/// index, where a miss is a typed outcome rather than a failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossReference {
    pub target_id: ContentId,
    pub target_type: ContentType,
    pub relationship: Relationship,
    pub label: String,
}

/// How the target relates to the record holding the reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Relationship {
    Parent,
    Child,
    Sibling,
    Related,
    SeeAlso,
}

impl Relationship {
    pub const ALLOWED: &'static [&'static str] =
        &["parent", "child", "sibling", "related", "see-also"];
}
