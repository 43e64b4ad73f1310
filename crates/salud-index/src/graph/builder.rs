use std::collections::HashSet;

use salud_core::model::Relationship;

use super::model::*;
use crate::index::CorpusIndex;

/// Build the reference graph for a built corpus.
///
/// Every record becomes a node, every cross-reference an edge. Targets absent
/// from the corpus become synthetic `Missing` nodes with a dashed edge, so the
/// rendered graph shows broken links instead of hiding them. System and topic
/// tags become grouping nodes.
pub fn build_graph(index: &CorpusIndex) -> ReferenceGraph {
    let mut graph = ReferenceGraph::default();
    let mut seen_missing = HashSet::new();
    let mut seen_systems = HashSet::new();
    let mut seen_topics = HashSet::new();

    for record in index.records() {
        graph.nodes.push(GraphNode {
            id: record.id.to_string(),
            kind: NodeKind::Record,
            label: record.name.clone(),
        });
    }

    for record in index.records() {
        for xref in &record.cross_references {
            let dangling = index.resolve(&record.id, xref).is_err();
            if dangling {
                tracing::warn!(
                    source = %record.id,
                    target = %xref.target_id,
                    "dangling cross-reference"
                );
                if seen_missing.insert(xref.target_id.clone()) {
                    graph.nodes.push(GraphNode {
                        id: xref.target_id.to_string(),
                        kind: NodeKind::Missing,
                        label: format!("{} (missing)", xref.target_id),
                    });
                }
            }
            graph.edges.push(GraphEdge {
                from: record.id.to_string(),
                to: xref.target_id.to_string(),
                kind: edge_kind(xref.relationship),
                dangling,
            });
        }

        for system in &record.tags.systems {
            let system_id = format!("system:{system}");
            if seen_systems.insert(system_id.clone()) {
                graph.nodes.push(GraphNode {
                    id: system_id.clone(),
                    kind: NodeKind::System,
                    label: system.clone(),
                });
            }
            graph.edges.push(GraphEdge {
                from: record.id.to_string(),
                to: system_id,
                kind: EdgeKind::InSystem,
                dangling: false,
            });
        }

        for topic in &record.tags.topics {
            let topic_id = format!("topic:{topic}");
            if seen_topics.insert(topic_id.clone()) {
                graph.nodes.push(GraphNode {
                    id: topic_id.clone(),
                    kind: NodeKind::Topic,
                    label: topic.clone(),
                });
            }
            graph.edges.push(GraphEdge {
                from: record.id.to_string(),
                to: topic_id,
                kind: EdgeKind::InTopic,
                dangling: false,
            });
        }
    }

    graph
}

fn edge_kind(relationship: Relationship) -> EdgeKind {
    match relationship {
        Relationship::Parent => EdgeKind::Parent,
        Relationship::Child => EdgeKind::Child,
        Relationship::Sibling => EdgeKind::Sibling,
        Relationship::Related => EdgeKind::Related,
        Relationship::SeeAlso => EdgeKind::SeeAlso,
    }
}

#[cfg(test)]
mod tests {
    use salud_core::model::{ContentType, CrossReference, Relationship};

    use super::*;
    use crate::index::CorpusIndex;
    use crate::tests::sample_record;

    #[test]
    fn test_graph_has_record_nodes_and_reference_edges() {
        let mut a = sample_record("condition-a");
        a.cross_references.push(CrossReference {
            target_id: "condition-b".into(),
            target_type: ContentType::Condition,
            relationship: Relationship::SeeAlso,
            label: "see b".into(),
        });
        let index = CorpusIndex::build(vec![a, sample_record("condition-b")]).unwrap();

        let graph = build_graph(&index);
        let record_nodes = graph
            .nodes
            .iter()
            .filter(|n| n.kind == NodeKind::Record)
            .count();
        assert_eq!(record_nodes, 2);

        let xref_edges: Vec<_> = graph
            .edges
            .iter()
            .filter(|e| e.kind == EdgeKind::SeeAlso)
            .collect();
        assert_eq!(xref_edges.len(), 1);
        assert!(!xref_edges[0].dangling);
    }

    #[test]
    fn test_missing_target_becomes_synthetic_node() {
        let mut a = sample_record("condition-a");
        a.cross_references.push(CrossReference {
            target_id: "nonexistent-id".into(),
            target_type: ContentType::Condition,
            relationship: Relationship::Related,
            label: "gone".into(),
        });
        let index = CorpusIndex::build(vec![a]).unwrap();

        let graph = build_graph(&index);
        let missing: Vec<_> = graph
            .nodes
            .iter()
            .filter(|n| n.kind == NodeKind::Missing)
            .collect();
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].id, "nonexistent-id");
        assert!(graph.edges.iter().any(|e| e.dangling));
    }

    #[test]
    fn test_system_nodes_are_deduplicated() {
        // Both sample records carry the "renal" system tag.
        let index = CorpusIndex::build(vec![
            sample_record("condition-a"),
            sample_record("condition-b"),
        ])
        .unwrap();
        let graph = build_graph(&index);
        let systems = graph
            .nodes
            .iter()
            .filter(|n| n.kind == NodeKind::System)
            .count();
        assert_eq!(systems, 1);
        let in_system = graph
            .edges
            .iter()
            .filter(|e| e.kind == EdgeKind::InSystem)
            .count();
        assert_eq!(in_system, 2);
    }
}
