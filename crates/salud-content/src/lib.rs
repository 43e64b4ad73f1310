//! Built-in bilingual patient-education content.
//!
//! Each module groups related records for one specialty and exposes its
//! record IDs alongside the records themselves. `builtin_registry` is the
//! initialization routine that enumerates every module explicitly, so corpus
//! assembly is a plain function call rather than a re-export convention.

pub mod cardiology;
pub mod mental_health;
pub mod nephrology;

mod support;

pub use cardiology::{cardiology_module, CARDIOLOGY_IDS};
pub use mental_health::{mental_health_module, MENTAL_HEALTH_IDS};
pub use nephrology::{nephrology_module, NEPHROLOGY_IDS};

use salud_index::{CorpusIndex, IndexError, Registry};

/// Category tags of the built-in modules, in corpus order.
pub const CATEGORIES: &[&str] = &["nephrology", "cardiology", "mental-health"];

/// A registry preloaded with every built-in content module.
pub fn builtin_registry() -> Registry {
    let mut registry = Registry::new();
    registry
        .register(nephrology_module())
        .register(cardiology_module())
        .register(mental_health_module());
    registry
}

/// The built-in corpus, assembled and indexed.
pub fn builtin_corpus() -> Result<CorpusIndex, IndexError> {
    builtin_registry().build()
}

#[cfg(test)]
mod tests {
    use salud_core::schema::validate_batch;
    use salud_index::build_graph;

    use super::*;

    #[test]
    fn test_builtin_corpus_builds() {
        let corpus = builtin_corpus().unwrap();
        let expected = NEPHROLOGY_IDS.len() + CARDIOLOGY_IDS.len() + MENTAL_HEALTH_IDS.len();
        assert_eq!(corpus.len(), expected);
    }

    #[test]
    fn test_id_constants_mirror_records() {
        for (module, ids) in [
            (nephrology_module(), NEPHROLOGY_IDS),
            (cardiology_module(), CARDIOLOGY_IDS),
            (mental_health_module(), MENTAL_HEALTH_IDS),
        ] {
            let actual: Vec<_> = module.ids().iter().map(|i| i.to_string()).collect();
            assert_eq!(actual, *ids, "module {}", module.name);
        }
    }

    #[test]
    fn test_builtin_corpus_passes_validation() {
        let corpus = builtin_corpus().unwrap();
        let issues = validate_batch(corpus.records());
        assert!(issues.is_empty(), "validation issues: {issues:?}");
    }

    #[test]
    fn test_builtin_corpus_has_no_dangling_references() {
        let corpus = builtin_corpus().unwrap();
        let dangling = corpus.check_references();
        assert!(dangling.is_empty(), "dangling references: {dangling:?}");
    }

    #[test]
    fn test_every_record_round_trips_through_json() {
        let corpus = builtin_corpus().unwrap();
        for record in corpus.records() {
            let json = serde_json::to_string(record).unwrap();
            let parsed: salud_core::model::ContentRecord = serde_json::from_str(&json).unwrap();
            assert_eq!(record, &parsed, "record {}", record.id);
        }
    }

    #[test]
    fn test_graph_covers_all_records() {
        let corpus = builtin_corpus().unwrap();
        let graph = build_graph(&corpus);
        let record_nodes = graph
            .nodes
            .iter()
            .filter(|n| n.kind == salud_index::graph::NodeKind::Record)
            .count();
        assert_eq!(record_nodes, corpus.len());
    }

    #[test]
    fn test_bilingual_summaries_follow_paired_convention() {
        let corpus = builtin_corpus().unwrap();
        for record in corpus.records() {
            for level in record.levels.values() {
                assert!(
                    level.summary.contains(" | "),
                    "record {} level {} summary is not bilingual",
                    record.id,
                    level.level
                );
            }
        }
    }
}
