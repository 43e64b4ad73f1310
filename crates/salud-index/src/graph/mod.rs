pub mod builder;
pub mod model;

pub use builder::build_graph;
pub use model::{EdgeKind, GraphEdge, GraphNode, NodeKind, ReferenceGraph};
