//! The built corpus index: an arena of records with an ID lookup table.
//!
//! Construction is the only transition this type has. Once built it is never
//! mutated, so any number of readers may share it across threads without
//! locking. Cross-references are resolved as lookups into the arena that may
//! legitimately miss; they are never owning pointers.

use std::collections::{BTreeMap, HashMap};

use salud_core::model::{ContentId, ContentRecord, CrossReference};

use crate::error::{DanglingReference, IndexError};

#[derive(Debug, Clone)]
pub struct CorpusIndex {
    records: Vec<ContentRecord>,
    by_id: HashMap<ContentId, usize>,
}

impl CorpusIndex {
    /// Build the index from a flat record sequence, preserving corpus order.
    ///
    /// A duplicate ID anywhere in the input is fatal: the index must never be
    /// published partially built, so the first collision aborts construction.
    pub fn build(records: Vec<ContentRecord>) -> Result<Self, IndexError> {
        let mut by_id = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            if by_id.insert(record.id.clone(), position).is_some() {
                return Err(IndexError::DuplicateId {
                    id: record.id.clone(),
                });
            }
        }
        tracing::debug!(records = records.len(), "corpus index built");
        Ok(Self { records, by_id })
    }

    /// O(1) lookup by ID.
    pub fn get(&self, id: &ContentId) -> Option<&ContentRecord> {
        self.by_id.get(id).map(|&i| &self.records[i])
    }

    /// Resolve a cross-reference against the arena.
    ///
    /// Total by contract: always a record or a typed `DanglingReference`,
    /// never a panic or an unchecked null. `source_id` names the record that
    /// holds the reference, for reporting.
    pub fn resolve(
        &self,
        source_id: &ContentId,
        xref: &CrossReference,
    ) -> Result<&ContentRecord, DanglingReference> {
        self.get(&xref.target_id).ok_or_else(|| DanglingReference {
            source_id: source_id.clone(),
            target_id: xref.target_id.clone(),
        })
    }

    /// Filter the corpus by predicate. Lazy, finite, and restartable: the
    /// iterator borrows the index, walks corpus order, and re-running the
    /// same predicate yields an equal sequence.
    pub fn query<'a, P>(&'a self, predicate: P) -> impl Iterator<Item = &'a ContentRecord>
    where
        P: Fn(&ContentRecord) -> bool + 'a,
    {
        self.records.iter().filter(move |r| predicate(r))
    }

    /// Sweep every cross-reference in the corpus and report the ones that do
    /// not resolve. Non-fatal: dangling links degrade gracefully, but they
    /// are surfaced here so authors can fix or hide them.
    pub fn check_references(&self) -> Vec<DanglingReference> {
        let mut dangling = Vec::new();
        for record in &self.records {
            for xref in &record.cross_references {
                if let Err(miss) = self.resolve(&record.id, xref) {
                    dangling.push(miss);
                }
            }
        }
        dangling
    }

    /// All records in corpus order.
    pub fn records(&self) -> &[ContentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Aggregate counts for reporting.
    pub fn stats(&self) -> CorpusStats {
        let mut by_type = BTreeMap::new();
        let mut by_status = BTreeMap::new();
        let mut by_relevance = BTreeMap::new();
        let mut level_coverage = BTreeMap::new();
        let mut cross_references = 0usize;

        for record in &self.records {
            *by_type
                .entry(record.content_type.as_str().to_string())
                .or_default() += 1;
            *by_status
                .entry(record.status.as_str().to_string())
                .or_default() += 1;
            *by_relevance
                .entry(record.tags.clinical_relevance.as_str().to_string())
                .or_default() += 1;
            for &level in record.levels.keys() {
                *level_coverage.entry(level).or_default() += 1;
            }
            cross_references += record.cross_references.len();
        }

        CorpusStats {
            records: self.records.len(),
            by_type,
            by_status,
            by_relevance,
            level_coverage,
            cross_references,
            dangling_references: self.check_references().len(),
        }
    }
}

/// Aggregate corpus statistics, JSON-serializable for tooling output.
#[derive(Debug, Clone, serde::Serialize)]
pub struct CorpusStats {
    pub records: usize,
    pub by_type: BTreeMap<String, usize>,
    pub by_status: BTreeMap<String, usize>,
    pub by_relevance: BTreeMap<String, usize>,
    pub level_coverage: BTreeMap<u8, usize>,
    pub cross_references: usize,
    pub dangling_references: usize,
}

#[cfg(test)]
mod tests {
    use salud_core::model::{ClinicalRelevance, ContentType, CrossReference, Relationship};

    use super::*;
    use crate::tests::sample_record;

    fn xref(target: &str) -> CrossReference {
        CrossReference {
            target_id: target.into(),
            target_type: ContentType::Condition,
            relationship: Relationship::Related,
            label: format!("see {target}"),
        }
    }

    #[test]
    fn test_build_and_get() {
        let index = CorpusIndex::build(vec![
            sample_record("condition-a"),
            sample_record("condition-b"),
        ])
        .unwrap();
        assert_eq!(index.len(), 2);
        assert!(index.get(&"condition-a".into()).is_some());
        assert!(index.get(&"condition-z".into()).is_none());
    }

    #[test]
    fn test_duplicate_id_is_fatal() {
        let err = CorpusIndex::build(vec![
            sample_record("heart-disease-x"),
            sample_record("heart-disease-x"),
        ])
        .unwrap_err();
        assert!(matches!(
            err,
            IndexError::DuplicateId { id } if id.as_str() == "heart-disease-x"
        ));
    }

    #[test]
    fn test_resolution_is_total() {
        let mut source = sample_record("condition-src");
        source.cross_references.push(xref("condition-dst"));
        source.cross_references.push(xref("nonexistent-id"));
        let index =
            CorpusIndex::build(vec![source, sample_record("condition-dst")]).unwrap();

        let record = index.get(&"condition-src".into()).unwrap();
        let resolved = index.resolve(&record.id, &record.cross_references[0]);
        assert_eq!(resolved.unwrap().id.as_str(), "condition-dst");

        let miss = index
            .resolve(&record.id, &record.cross_references[1])
            .unwrap_err();
        assert_eq!(miss.target_id.as_str(), "nonexistent-id");
        assert_eq!(miss.source_id.as_str(), "condition-src");
    }

    #[test]
    fn test_dangling_source_record_stays_indexed() {
        let mut source = sample_record("condition-src");
        source.cross_references.push(xref("nonexistent-id"));
        let index = CorpusIndex::build(vec![source]).unwrap();

        assert!(index.get(&"condition-src".into()).is_some());
        let dangling = index.check_references();
        assert_eq!(dangling.len(), 1);
        assert_eq!(dangling[0].target_id.as_str(), "nonexistent-id");
    }

    #[test]
    fn test_query_preserves_order_and_restarts() {
        let mut critical = sample_record("condition-critical");
        critical.tags.clinical_relevance = ClinicalRelevance::Critical;
        let mut also_critical = sample_record("condition-critical-2");
        also_critical.tags.clinical_relevance = ClinicalRelevance::Critical;
        let index = CorpusIndex::build(vec![
            critical,
            sample_record("condition-high"),
            also_critical,
        ])
        .unwrap();

        let pick =
            |r: &ContentRecord| r.tags.clinical_relevance == ClinicalRelevance::Critical;
        let first: Vec<_> = index.query(pick).map(|r| r.id.as_str()).collect();
        assert_eq!(first, ["condition-critical", "condition-critical-2"]);

        // Re-running the same predicate is side-effect-free and equal.
        let second: Vec<_> = index.query(pick).map(|r| r.id.as_str()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_build_is_idempotent() {
        let records = vec![sample_record("condition-a"), sample_record("condition-b")];
        let first = CorpusIndex::build(records.clone()).unwrap();
        let second = CorpusIndex::build(records).unwrap();
        assert_eq!(first.records(), second.records());
        assert_eq!(
            first.get(&"condition-a".into()),
            second.get(&"condition-a".into())
        );
    }

    #[test]
    fn test_stats_tallies() {
        let mut draft = sample_record("condition-draft");
        draft.status = salud_core::model::Status::Draft;
        draft.cross_references.push(xref("nonexistent-id"));
        let index = CorpusIndex::build(vec![sample_record("condition-a"), draft]).unwrap();

        let stats = index.stats();
        assert_eq!(stats.records, 2);
        assert_eq!(stats.by_status["published"], 1);
        assert_eq!(stats.by_status["draft"], 1);
        assert_eq!(stats.level_coverage[&1], 2);
        assert_eq!(stats.cross_references, 1);
        assert_eq!(stats.dangling_references, 1);
    }
}
