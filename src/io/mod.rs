//! Objects used to read solver and grounder outputs.

mod cost_reader;
pub use cost_reader::GrounderCostReader;

mod node_reader;
pub use node_reader::SolutionNodeReader;

mod specs;
pub(crate) use specs::notify_warning;
pub use specs::WarningHandler;
