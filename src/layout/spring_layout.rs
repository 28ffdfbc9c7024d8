use super::{circular_layout::circle_positions, LayoutComputer, Position, LAYOUT_EXTENT};
use crate::graph::WeightedGraph;

const DEFAULT_ITERATIONS: usize = 50;

const MIN_DISTANCE: f64 = 0.01;

/// A force-directed layout following the Fruchterman-Reingold algorithm.
///
/// Nodes repulse each other while edges attract their endpoints.
/// The initial positions lie on a slightly perturbed circle, so the result only depends on the graph.
/// The final positions are rescaled to fit the layout square.
pub struct SpringLayoutComputer {
    iterations: usize,
}

impl Default for SpringLayoutComputer {
    fn default() -> Self {
        SpringLayoutComputer {
            iterations: DEFAULT_ITERATIONS,
        }
    }
}

impl SpringLayoutComputer {
    /// Builds a new layout computer running the given number of iterations.
    pub fn new_with_iterations(iterations: usize) -> Self {
        SpringLayoutComputer { iterations }
    }
}

impl LayoutComputer for SpringLayoutComputer {
    fn compute_positions(&self, graph: &WeightedGraph) -> Vec<Position> {
        let n_nodes = graph.n_nodes();
        if n_nodes <= 1 {
            return vec![Position::default(); n_nodes];
        }
        let mut positions = initial_positions(n_nodes);
        let edges = graph
            .iter_edge_indices()
            .filter(|(i, j)| i != j)
            .collect::<Vec<(usize, usize)>>();
        let k = (1. / n_nodes as f64).sqrt();
        let mut temperature = 0.1;
        let cooling = temperature / (self.iterations + 1) as f64;
        for _ in 0..self.iterations {
            let mut displacements = vec![Position::default(); n_nodes];
            for i in 0..n_nodes {
                for j in 0..n_nodes {
                    if i == j {
                        continue;
                    }
                    let (dx, dy, d) = delta(&positions[i], &positions[j]);
                    let force = k * k / d;
                    displacements[i].x += dx / d * force;
                    displacements[i].y += dy / d * force;
                }
            }
            for (i, j) in edges.iter() {
                let (dx, dy, d) = delta(&positions[*i], &positions[*j]);
                let force = d * d / k;
                displacements[*i].x -= dx / d * force;
                displacements[*i].y -= dy / d * force;
                displacements[*j].x += dx / d * force;
                displacements[*j].y += dy / d * force;
            }
            for (p, disp) in positions.iter_mut().zip(displacements.iter()) {
                let length = (disp.x * disp.x + disp.y * disp.y).sqrt().max(MIN_DISTANCE);
                let step = length.min(temperature);
                p.x += disp.x / length * step;
                p.y += disp.y / length * step;
            }
            temperature -= cooling;
        }
        rescale(&mut positions);
        positions
    }
}

fn initial_positions(n_nodes: usize) -> Vec<Position> {
    circle_positions(n_nodes, 1.)
        .into_iter()
        .enumerate()
        .map(|(i, p)| p.scaled(1. + 0.1 * ((i * 7919) % 13) as f64 / 13.))
        .collect()
}

fn delta(p: &Position, q: &Position) -> (f64, f64, f64) {
    let dx = p.x - q.x;
    let dy = p.y - q.y;
    let d = (dx * dx + dy * dy).sqrt().max(MIN_DISTANCE);
    (dx, dy, d)
}

fn rescale(positions: &mut [Position]) {
    let n = positions.len() as f64;
    let center_x = positions.iter().map(|p| p.x).sum::<f64>() / n;
    let center_y = positions.iter().map(|p| p.y).sum::<f64>() / n;
    positions.iter_mut().for_each(|p| {
        p.x -= center_x;
        p.y -= center_y;
    });
    let max = positions
        .iter()
        .map(|p| p.x.abs().max(p.y.abs()))
        .fold(0., f64::max);
    if max > 0. {
        let factor = LAYOUT_EXTENT / max;
        positions.iter_mut().for_each(|p| *p = p.scaled(factor));
    }
}
