use super::{LayoutComputer, Position, LAYOUT_EXTENT};
use crate::graph::WeightedGraph;
use std::f64::consts::PI;

/// A layout placing the nodes on a circle, in the graph node order.
#[derive(Default)]
pub struct CircularLayoutComputer;

impl LayoutComputer for CircularLayoutComputer {
    fn compute_positions(&self, graph: &WeightedGraph) -> Vec<Position> {
        circle_positions(graph.n_nodes(), LAYOUT_EXTENT)
    }
}

pub(crate) fn circle_positions(n_nodes: usize, radius: f64) -> Vec<Position> {
    if n_nodes == 1 {
        return vec![Position::default()];
    }
    (0..n_nodes)
        .map(|i| {
            let angle = 2. * PI * i as f64 / n_nodes as f64;
            Position::new(radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}
