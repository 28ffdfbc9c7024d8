use super::{CircularLayoutComputer, SpringLayoutComputer};
use crate::graph::WeightedGraph;
use strum_macros::{AsRefStr, EnumIter, EnumString, IntoStaticStr};

/// The half-width of the square the layouts place the nodes into.
pub const LAYOUT_EXTENT: f64 = 100.0;

/// A position in the plane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
    /// The abscissa.
    pub x: f64,
    /// The ordinate.
    pub y: f64,
}

impl Position {
    /// Builds a new position.
    pub fn new(x: f64, y: f64) -> Self {
        Position { x, y }
    }

    /// Returns this position with both coordinates multiplied by a factor.
    pub fn scaled(&self, factor: f64) -> Self {
        Position::new(self.x * factor, self.y * factor)
    }
}

/// A trait for objects that compute 2D positions for the nodes of a graph.
///
/// The returned vector has one position per node, in the graph node order.
/// Positions are opaque display coordinates inside the square of half-width [`LAYOUT_EXTENT`].
pub trait LayoutComputer {
    /// Computes the node positions.
    fn compute_positions(&self, graph: &WeightedGraph) -> Vec<Position>;
}

/// The available layout computers.
#[derive(AsRefStr, Clone, Copy, Debug, EnumIter, EnumString, IntoStaticStr, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum LayoutKind {
    /// See [`SpringLayoutComputer`].
    Spring,
    /// See [`CircularLayoutComputer`].
    Circular,
}

impl LayoutKind {
    /// Builds a layout computer of this kind.
    pub fn new_layout_computer(&self) -> Box<dyn LayoutComputer> {
        match self {
            LayoutKind::Spring => Box::<SpringLayoutComputer>::default(),
            LayoutKind::Circular => Box::new(CircularLayoutComputer),
        }
    }
}

impl Default for LayoutKind {
    fn default() -> Self {
        LayoutKind::Spring
    }
}
