//! Layout computers giving 2D positions to the nodes of graphs.

mod circular_layout;
pub use circular_layout::CircularLayoutComputer;

mod specs;
pub use specs::LayoutComputer;
pub use specs::LayoutKind;
pub use specs::Position;
pub use specs::LAYOUT_EXTENT;

mod spring_layout;
pub use spring_layout::SpringLayoutComputer;
