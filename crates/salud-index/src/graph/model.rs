use serde::{Deserialize, Serialize};

/// Type of node in the reference graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    Record,
    /// A cross-reference target absent from the corpus.
    Missing,
    System,
    Topic,
}

/// A node in the reference graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    pub kind: NodeKind,
    pub label: String,
}

/// Type of edge in the reference graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgeKind {
    Parent,
    Child,
    Sibling,
    Related,
    SeeAlso,
    InSystem,
    InTopic,
}

/// An edge in the reference graph. `dangling` marks cross-reference edges
/// whose target node is synthetic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphEdge {
    pub from: String,
    pub to: String,
    pub kind: EdgeKind,
    #[serde(default)]
    pub dangling: bool,
}

/// The full reference graph over a built corpus.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReferenceGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl ReferenceGraph {
    /// Extract a subgraph centered on a node, up to a given depth.
    pub fn subgraph(&self, center_id: &str, depth: usize) -> ReferenceGraph {
        use std::collections::{HashSet, VecDeque};

        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();
        queue.push_back((center_id.to_string(), 0));
        visited.insert(center_id.to_string());

        while let Some((current, d)) = queue.pop_front() {
            if d >= depth {
                continue;
            }
            for edge in &self.edges {
                let neighbor = if edge.from == current {
                    &edge.to
                } else if edge.to == current {
                    &edge.from
                } else {
                    continue;
                };
                if visited.insert(neighbor.clone()) {
                    queue.push_back((neighbor.clone(), d + 1));
                }
            }
        }

        let nodes: Vec<GraphNode> = self
            .nodes
            .iter()
            .filter(|n| visited.contains(&n.id))
            .cloned()
            .collect();
        let edges: Vec<GraphEdge> = self
            .edges
            .iter()
            .filter(|e| visited.contains(&e.from) && visited.contains(&e.to))
            .cloned()
            .collect();

        ReferenceGraph { nodes, edges }
    }

    /// Render as DOT format for Graphviz.
    pub fn to_dot(&self) -> String {
        let mut dot = String::from("digraph salud {\n  rankdir=LR;\n");

        for node in &self.nodes {
            let shape = match node.kind {
                NodeKind::Record => "box",
                NodeKind::Missing => "box",
                NodeKind::System => "ellipse",
                NodeKind::Topic => "note",
            };
            let style = if node.kind == NodeKind::Missing {
                " style=dashed color=red"
            } else {
                ""
            };
            dot.push_str(&format!(
                "  \"{}\" [label=\"{}\" shape={}{}];\n",
                node.id, node.label, shape, style
            ));
        }

        for edge in &self.edges {
            let label = match edge.kind {
                EdgeKind::Parent => "parent",
                EdgeKind::Child => "child",
                EdgeKind::Sibling => "sibling",
                EdgeKind::Related => "related",
                EdgeKind::SeeAlso => "see_also",
                EdgeKind::InSystem => "in_system",
                EdgeKind::InTopic => "in_topic",
            };
            let style = if edge.dangling { " style=dashed" } else { "" };
            dot.push_str(&format!(
                "  \"{}\" -> \"{}\" [label=\"{}\"{}];\n",
                edge.from, edge.to, label, style
            ));
        }

        dot.push_str("}\n");
        dot
    }
}
