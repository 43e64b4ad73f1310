use salud_core::error::CoreError;
use salud_core::model::ContentId;

#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("Duplicate record ID '{id}' across the corpus")]
    DuplicateId { id: ContentId },

    #[error("Core error: {0}")]
    Core(#[from] CoreError),
}

/// A cross-reference whose target does not exist in the built index.
///
/// Dangling references are an expected authoring state, not a failure: the
/// source record stays indexed and renders normally, and the consumer decides
/// whether to omit, flag, or placeholder the broken link. This type is an
/// ordinary value so resolution stays total.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("record '{source_id}' references '{target_id}', which is not in the corpus")]
pub struct DanglingReference {
    pub source_id: ContentId,
    pub target_id: ContentId,
}
