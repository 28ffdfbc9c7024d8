use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::HashMap;

/// The type of edge weights.
pub type Weight = u64;

/// A weighted edge, as read from a cost fact or synthesized for a complete graph.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct WeightedEdge {
    from: String,
    to: String,
    weight: Weight,
}

impl WeightedEdge {
    /// Builds a new weighted edge.
    pub fn new<S, T>(from: S, to: T, weight: Weight) -> Self
    where
        S: Into<String>,
        T: Into<String>,
    {
        WeightedEdge {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }

    /// Returns the source node name.
    pub fn from(&self) -> &str {
        &self.from
    }

    /// Returns the target node name.
    pub fn to(&self) -> &str {
        &self.to
    }

    /// Returns the weight.
    pub fn weight(&self) -> Weight {
        self.weight
    }
}

/// A weighted graph, directed or not, whose nodes are identified by their names.
///
/// Nodes and edges keep the order in which they were first added.
/// Adding an edge that is already present (in both orientations, for undirected graphs) replaces its weight.
///
/// # Example
///
/// ```
/// # use aspgv::graph::WeightedGraph;
/// let mut graph = WeightedGraph::new(false);
/// graph.add_edge("a", "b", 3);
/// assert_eq!(Some(3), graph.add_edge("b", "a", 5));
/// assert_eq!(1, graph.n_edges());
/// assert_eq!(Some(5), graph.edge_weight("a", "b"));
/// ```
pub struct WeightedGraph {
    graph: DiGraph<String, Weight>,
    node_indices: HashMap<String, NodeIndex>,
    directed: bool,
}

impl WeightedGraph {
    /// Builds an empty graph.
    pub fn new(directed: bool) -> Self {
        WeightedGraph {
            graph: DiGraph::new(),
            node_indices: HashMap::new(),
            directed,
        }
    }

    /// Builds a graph from a list of weighted edges.
    pub fn new_with_edges(edges: &[WeightedEdge], directed: bool) -> Self {
        let mut graph = WeightedGraph::new(directed);
        edges.iter().for_each(|e| {
            graph.add_edge(e.from(), e.to(), e.weight());
        });
        graph
    }

    /// Returns `true` iff the graph is directed.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Returns the number of nodes.
    pub fn n_nodes(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of edges.
    pub fn n_edges(&self) -> usize {
        self.graph.edge_count()
    }

    /// Adds an edge, and its endpoints if they are new.
    ///
    /// If the edge was already present, its weight is replaced and the previous one is returned.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: Weight) -> Option<Weight> {
        let from_index = self.get_or_add_node(from);
        let to_index = self.get_or_add_node(to);
        match self.find_edge(from_index, to_index) {
            Some(e) => Some(std::mem::replace(&mut self.graph[e], weight)),
            None => {
                self.graph.add_edge(from_index, to_index, weight);
                None
            }
        }
    }

    fn get_or_add_node(&mut self, name: &str) -> NodeIndex {
        if let Some(i) = self.node_indices.get(name) {
            return *i;
        }
        let i = self.graph.add_node(name.to_string());
        self.node_indices.insert(name.to_string(), i);
        i
    }

    fn find_edge(&self, from: NodeIndex, to: NodeIndex) -> Option<EdgeIndex> {
        self.graph.find_edge(from, to).or_else(|| {
            if self.directed {
                None
            } else {
                self.graph.find_edge(to, from)
            }
        })
    }

    /// Returns the index of a node, as used by [`iter_nodes`](Self::iter_nodes) and [`iter_edge_indices`](Self::iter_edge_indices).
    pub fn node_index(&self, name: &str) -> Option<usize> {
        self.node_indices.get(name).map(|i| i.index())
    }

    /// Returns `true` iff the graph contains the edge.
    ///
    /// For undirected graphs, the orientation is not taken into account.
    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        self.edge_weight(from, to).is_some()
    }

    /// Returns the weight of an edge, if it is present.
    ///
    /// For undirected graphs, the orientation is not taken into account.
    pub fn edge_weight(&self, from: &str, to: &str) -> Option<Weight> {
        let from_index = self.node_indices.get(from)?;
        let to_index = self.node_indices.get(to)?;
        self.find_edge(*from_index, *to_index)
            .map(|e| self.graph[e])
    }

    /// Iterates over the node names, in insertion order.
    pub fn iter_nodes(&self) -> impl Iterator<Item = &str> + '_ {
        self.graph.node_indices().map(move |i| self.graph[i].as_str())
    }

    /// Iterates over the edges, in insertion order.
    pub fn iter_edges(&self) -> impl Iterator<Item = (&str, &str, Weight)> + '_ {
        self.graph.edge_references().map(move |e| {
            (
                self.graph[e.source()].as_str(),
                self.graph[e.target()].as_str(),
                *e.weight(),
            )
        })
    }

    /// Iterates over the edges as couples of node indices, in insertion order.
    pub fn iter_edge_indices(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.graph
            .edge_references()
            .map(|e| (e.source().index(), e.target().index()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directed() {
        let mut graph = WeightedGraph::new(true);
        assert!(graph.is_directed());
        assert_eq!(None, graph.add_edge("a", "b", 1));
        assert_eq!(None, graph.add_edge("b", "a", 2));
        assert_eq!(None, graph.add_edge("b", "c", 3));
        assert_eq!(3, graph.n_nodes());
        assert_eq!(3, graph.n_edges());
        assert_eq!(Some(1), graph.edge_weight("a", "b"));
        assert_eq!(Some(2), graph.edge_weight("b", "a"));
        assert!(graph.has_edge("b", "c"));
        assert!(!graph.has_edge("c", "b"));
        assert!(!graph.has_edge("a", "z"));
    }

    #[test]
    fn test_undirected() {
        let mut graph = WeightedGraph::new(false);
        assert!(!graph.is_directed());
        graph.add_edge("a", "b", 1);
        assert_eq!(Some(1), graph.add_edge("b", "a", 2));
        graph.add_edge("b", "c", 3);
        assert_eq!(3, graph.n_nodes());
        assert_eq!(2, graph.n_edges());
        assert_eq!(Some(2), graph.edge_weight("a", "b"));
        assert_eq!(Some(2), graph.edge_weight("b", "a"));
        assert!(graph.has_edge("c", "b"));
    }

    #[test]
    fn test_insertion_order() {
        let edges = vec![
            WeightedEdge::new("c", "a", 1),
            WeightedEdge::new("a", "b", 2),
            WeightedEdge::new("b", "c", 3),
        ];
        let graph = WeightedGraph::new_with_edges(&edges, true);
        assert_eq!(vec!["c", "a", "b"], graph.iter_nodes().collect::<Vec<&str>>());
        assert_eq!(
            vec![("c", "a", 1), ("a", "b", 2), ("b", "c", 3)],
            graph.iter_edges().collect::<Vec<_>>()
        );
        assert_eq!(
            vec![(0, 1), (1, 2), (2, 0)],
            graph.iter_edge_indices().collect::<Vec<_>>()
        );
        assert_eq!(Some(2), graph.node_index("b"));
        assert_eq!(None, graph.node_index("z"));
    }

    #[test]
    fn test_self_loop() {
        let mut graph = WeightedGraph::new(true);
        graph.add_edge("a", "a", 1);
        assert_eq!(1, graph.n_nodes());
        assert!(graph.has_edge("a", "a"));
    }
}
