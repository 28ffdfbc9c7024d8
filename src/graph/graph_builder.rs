use super::{display_edges, DisplayEdge, EdgeIdMap, EdgeKind, WeightedGraph};
use crate::layout::{LayoutComputer, Position};
use log::info;

/// The factor applied to the positions computed by the layout.
pub const LAYOUT_SCALE: f64 = 10.0;

/// A node with its display position.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedNode {
    name: String,
    position: Position,
}

impl PlacedNode {
    /// Returns the node name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the display position.
    pub fn position(&self) -> Position {
        self.position
    }
}

/// A graph ready to be displayed: placed nodes, display edges and their identifiers.
pub struct BuiltGraph {
    nodes: Vec<PlacedNode>,
    edges: Vec<DisplayEdge>,
    edge_ids: EdgeIdMap,
}

impl BuiltGraph {
    /// Returns the placed nodes, in graph order.
    pub fn nodes(&self) -> &[PlacedNode] {
        &self.nodes
    }

    /// Returns the display edges, ordered by identifier.
    pub fn edges(&self) -> &[DisplayEdge] {
        &self.edges
    }

    /// Returns the map from edges to identifiers.
    pub fn edge_ids(&self) -> &EdgeIdMap {
        &self.edge_ids
    }

    /// Returns the number of two-way edges.
    pub fn n_two_way_edges(&self) -> usize {
        self.edges
            .iter()
            .filter(|e| e.kind() == EdgeKind::TwoWay)
            .count()
    }

    /// Returns the number of one-way edges.
    pub fn n_one_way_edges(&self) -> usize {
        self.edges.len() - self.n_two_way_edges()
    }
}

/// Turns weighted graphs into displayable ones.
///
/// The node positions are given by a [`LayoutComputer`] and multiplied by [`LAYOUT_SCALE`].
/// Edge identifiers are computed once by [`display_edges`].
pub struct GraphBuilder<'a> {
    layout: &'a dyn LayoutComputer,
}

impl<'a> GraphBuilder<'a> {
    /// Builds a new graph builder using the given layout.
    pub fn new(layout: &'a dyn LayoutComputer) -> Self {
        GraphBuilder { layout }
    }

    /// Builds the displayable version of a graph.
    pub fn build(&self, graph: &WeightedGraph) -> BuiltGraph {
        let positions = self.layout.compute_positions(graph);
        let nodes = graph
            .iter_nodes()
            .zip(positions)
            .map(|(name, position)| PlacedNode {
                name: name.to_string(),
                position: position.scaled(LAYOUT_SCALE),
            })
            .collect::<Vec<PlacedNode>>();
        let edges = display_edges(graph);
        let edge_ids = EdgeIdMap::new_with_display_edges(&edges);
        let built = BuiltGraph {
            nodes,
            edges,
            edge_ids,
        };
        info!(
            "the {} graph has {} node(s), {} two-way edge(s) and {} one-way edge(s)",
            if graph.is_directed() { "directed" } else { "undirected" },
            built.nodes.len(),
            built.n_two_way_edges(),
            built.n_one_way_edges(),
        );
        built
    }
}
