use super::{Weight, WeightedGraph};
use crate::ConversionError;
use anyhow::Result;
use std::collections::HashMap;

/// The way an edge is displayed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeKind {
    /// Edges of undirected graphs, and directed edges present in both directions.
    TwoWay,
    /// Directed edges present in a single direction; they are displayed as arrows.
    OneWay,
}

/// An edge as it is displayed, with its identifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayEdge {
    id: usize,
    from: String,
    to: String,
    weight: Weight,
    kind: EdgeKind,
}

impl DisplayEdge {
    /// Returns the identifier of the edge.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Returns the source node name.
    pub fn from(&self) -> &str {
        &self.from
    }

    /// Returns the target node name.
    pub fn to(&self) -> &str {
        &self.to
    }

    /// Returns the weight of the edge.
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// Returns the kind of the edge.
    pub fn kind(&self) -> EdgeKind {
        self.kind
    }
}

/// Computes the display edges of a graph and assigns their identifiers.
///
/// Two-way edges come first and get the identifiers `1..=t`; one-way edges follow with `t+1..=n`.
/// Inside each group, edges keep the graph insertion order.
/// In directed graphs, a couple of opposite edges gives a single two-way edge, whose source is the lowest node name.
pub fn display_edges(graph: &WeightedGraph) -> Vec<DisplayEdge> {
    let mut two_way = Vec::new();
    let mut one_way = Vec::new();
    for (from, to, weight) in graph.iter_edges() {
        if !graph.is_directed() {
            two_way.push((from, to, weight));
        } else if graph.has_edge(to, from) {
            if from <= to {
                two_way.push((from, to, weight));
            }
        } else {
            one_way.push((from, to, weight));
        }
    }
    let kinds = std::iter::repeat(EdgeKind::TwoWay)
        .take(two_way.len())
        .chain(std::iter::repeat(EdgeKind::OneWay).take(one_way.len()));
    two_way
        .into_iter()
        .chain(one_way)
        .zip(kinds)
        .enumerate()
        .map(|(i, ((from, to, weight), kind))| DisplayEdge {
            id: 1 + i,
            from: from.to_string(),
            to: to.to_string(),
            weight,
            kind,
        })
        .collect()
}

/// A map from edges to their identifiers.
///
/// Identifiers can be queried in both orientations of an edge.
#[derive(Default, Debug)]
pub struct EdgeIdMap {
    ids: HashMap<(String, String), usize>,
}

impl EdgeIdMap {
    /// Builds the map associated with the given display edges.
    pub fn new_with_display_edges(edges: &[DisplayEdge]) -> Self {
        EdgeIdMap {
            ids: edges
                .iter()
                .map(|e| ((e.from.clone(), e.to.clone()), e.id))
                .collect(),
        }
    }

    /// Returns the identifier of an edge, trying both its orientations.
    pub fn get(&self, from: &str, to: &str) -> Option<usize> {
        self.get_oriented(from, to)
            .or_else(|| self.get_oriented(to, from))
    }

    fn get_oriented(&self, from: &str, to: &str) -> Option<usize> {
        self.ids.get(&(from.to_string(), to.to_string())).copied()
    }

    /// Returns the identifier of an edge, or an [`ConversionError::EdgeIdLookupFailure`] error if there is none.
    pub fn lookup(&self, from: &str, to: &str) -> Result<usize> {
        self.get(from, to).ok_or_else(|| {
            ConversionError::EdgeIdLookupFailure {
                from: from.to_string(),
                to: to.to_string(),
            }
            .into()
        })
    }

    /// Returns the number of identifiers.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` iff the map contains no identifier.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{complete_graph, WeightedEdge};
    use std::collections::BTreeSet;

    fn directed_graph() -> WeightedGraph {
        WeightedGraph::new_with_edges(
            &[
                WeightedEdge::new("b", "a", 4),
                WeightedEdge::new("b", "c", 2),
                WeightedEdge::new("a", "b", 4),
                WeightedEdge::new("c", "d", 7),
            ],
            true,
        )
    }

    #[test]
    fn test_directed_partition() {
        let edges = display_edges(&directed_graph());
        assert_eq!(3, edges.len());
        assert_eq!(
            (1, "a", "b", 4, EdgeKind::TwoWay),
            (edges[0].id(), edges[0].from(), edges[0].to(), edges[0].weight(), edges[0].kind())
        );
        assert_eq!(
            (2, "b", "c", 2, EdgeKind::OneWay),
            (edges[1].id(), edges[1].from(), edges[1].to(), edges[1].weight(), edges[1].kind())
        );
        assert_eq!(
            (3, "c", "d", 7, EdgeKind::OneWay),
            (edges[2].id(), edges[2].from(), edges[2].to(), edges[2].weight(), edges[2].kind())
        );
    }

    #[test]
    fn test_undirected_all_two_way() {
        let graph = WeightedGraph::new_with_edges(
            &[WeightedEdge::new("b", "a", 1), WeightedEdge::new("c", "b", 1)],
            false,
        );
        let edges = display_edges(&graph);
        assert!(edges.iter().all(|e| e.kind() == EdgeKind::TwoWay));
        assert_eq!(("b", "a"), (edges[0].from(), edges[0].to()));
    }

    #[test]
    fn test_ids_are_a_bijection() {
        let nodes = ["a", "b", "c", "d", "e"];
        let edges = display_edges(&complete_graph(&nodes));
        assert_eq!(10, edges.len());
        let ids = edges.iter().map(|e| e.id()).collect::<BTreeSet<usize>>();
        assert_eq!((1..=10).collect::<BTreeSet<usize>>(), ids);
        let map = EdgeIdMap::new_with_display_edges(&edges);
        assert_eq!(10, map.len());
        for n1 in nodes.iter() {
            for n2 in nodes.iter().filter(|n| *n != n1) {
                assert_eq!(map.get(n1, n2), map.get(n2, n1));
                assert!(map.get(n1, n2).is_some());
            }
        }
    }

    #[test]
    fn test_lookup_both_orientations() {
        let map = EdgeIdMap::new_with_display_edges(&display_edges(&directed_graph()));
        assert_eq!(1, map.lookup("a", "b").unwrap());
        assert_eq!(1, map.lookup("b", "a").unwrap());
        assert_eq!(2, map.lookup("c", "b").unwrap());
        let err = map.lookup("a", "d").unwrap_err();
        assert_eq!(
            Some(&ConversionError::EdgeIdLookupFailure {
                from: "a".to_string(),
                to: "d".to_string()
            }),
            err.downcast_ref::<ConversionError>()
        );
    }

    #[test]
    fn test_empty() {
        let map = EdgeIdMap::default();
        assert!(map.is_empty());
        assert_eq!(None, map.get("a", "b"));
    }
}
