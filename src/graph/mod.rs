//! Weighted graphs and their displayable versions.

mod complete_graph;
pub use complete_graph::complete_graph;
pub use complete_graph::complete_graph_edges;
pub use complete_graph::COMPLETE_GRAPH_EDGE_WEIGHT;

mod edge_ids;
pub use edge_ids::display_edges;
pub use edge_ids::DisplayEdge;
pub use edge_ids::EdgeIdMap;
pub use edge_ids::EdgeKind;

mod graph_builder;
pub use graph_builder::BuiltGraph;
pub use graph_builder::GraphBuilder;
pub use graph_builder::PlacedNode;
pub use graph_builder::LAYOUT_SCALE;

mod weighted_graph;
pub use weighted_graph::Weight;
pub use weighted_graph::WeightedEdge;
pub use weighted_graph::WeightedGraph;
