pub mod error;
pub mod model;
pub mod module;
pub mod schema;

pub use error::{CoreError, ValidationIssue};
pub use model::{
    Citation, CitationType, ClinicalRelevance, ContentId, ContentRecord, ContentTags, ContentType,
    CrossReference, ExamRelevance, KeyTerm, LevelContent, LevelNotPresent, MediaRef, MediaType,
    Relationship, Status, MAX_LEVEL, MIN_LEVEL,
};
pub use module::{load_module, ContentModule, ModuleSource};
pub use schema::{coerce_record, validate_batch, validate_record, validate_value};
