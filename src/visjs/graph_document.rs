use crate::graph::{BuiltGraph, DisplayEdge, EdgeKind, PlacedNode, Weight};
use serde::Serialize;

/// The style given to one-way edges.
pub const ONE_WAY_EDGE_STYLE: &str = "arrow";

/// A node of a [`GraphDocument`].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeEntry {
    /// The node name.
    pub id: String,
    /// The displayed label.
    pub label: String,
    /// The abscissa.
    pub x: f64,
    /// The ordinate.
    pub y: f64,
    /// Whether the user may move the node horizontally.
    pub allowed_to_move_x: bool,
    /// Whether the user may move the node vertically.
    pub allowed_to_move_y: bool,
}

impl From<&PlacedNode> for NodeEntry {
    fn from(node: &PlacedNode) -> Self {
        NodeEntry {
            id: node.name().to_string(),
            label: format!("n{}", node.name()),
            x: node.position().x,
            y: node.position().y,
            allowed_to_move_x: true,
            allowed_to_move_y: true,
        }
    }
}

/// An edge of a [`GraphDocument`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EdgeEntry {
    /// The edge identifier.
    pub id: String,
    /// The source node name.
    pub from: String,
    /// The target node name.
    pub to: String,
    /// The edge width, i.e. its weight.
    pub width: Weight,
    /// The displayed label, i.e. the weight.
    pub label: String,
    /// The style of one-way edges.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

impl From<&DisplayEdge> for EdgeEntry {
    fn from(edge: &DisplayEdge) -> Self {
        EdgeEntry {
            id: edge.id().to_string(),
            from: edge.from().to_string(),
            to: edge.to().to_string(),
            width: edge.weight(),
            label: edge.weight().to_string(),
            style: match edge.kind() {
                EdgeKind::TwoWay => None,
                EdgeKind::OneWay => Some(ONE_WAY_EDGE_STYLE.to_string()),
            },
        }
    }
}

/// The graph document, as expected by the vis.js network library.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct GraphDocument {
    /// The nodes.
    pub nodes: Vec<NodeEntry>,
    /// The edges, ordered by identifier.
    pub edges: Vec<EdgeEntry>,
}

impl From<&BuiltGraph> for GraphDocument {
    fn from(graph: &BuiltGraph) -> Self {
        GraphDocument {
            nodes: graph.nodes().iter().map(NodeEntry::from).collect(),
            edges: graph.edges().iter().map(EdgeEntry::from).collect(),
        }
    }
}

impl GraphDocument {
    /// Returns `true` iff the document has an edge with this identifier.
    pub fn has_edge_id(&self, id: usize) -> bool {
        let str_id = id.to_string();
        self.edges.iter().any(|e| e.id == str_id)
    }
}
