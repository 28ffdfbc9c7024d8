use super::{WeightedEdge, WeightedGraph};

/// The weight given to the edges of complete graphs.
pub const COMPLETE_GRAPH_EDGE_WEIGHT: u64 = 1;

/// Returns the edges of the complete graph on the given nodes.
///
/// Each ordered couple of distinct nodes gives an edge of weight [`COMPLETE_GRAPH_EDGE_WEIGHT`],
/// so `n*(n-1)` edges are returned for `n` distinct nodes.
pub fn complete_graph_edges<S>(nodes: &[S]) -> Vec<WeightedEdge>
where
    S: AsRef<str>,
{
    nodes
        .iter()
        .flat_map(|n1| {
            nodes
                .iter()
                .filter(move |n2| n1.as_ref() != n2.as_ref())
                .map(move |n2| {
                    WeightedEdge::new(n1.as_ref(), n2.as_ref(), COMPLETE_GRAPH_EDGE_WEIGHT)
                })
        })
        .collect()
}

/// Builds the complete graph on the given nodes.
///
/// Complete graphs are always undirected: each couple of opposite edges returned by [`complete_graph_edges`] collapses into a single one.
pub fn complete_graph<S>(nodes: &[S]) -> WeightedGraph
where
    S: AsRef<str>,
{
    WeightedGraph::new_with_edges(&complete_graph_edges(nodes), false)
}
