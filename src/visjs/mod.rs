//! The JSON documents read by the visualization front end.

mod answer_tables;
pub use answer_tables::AnswerIndex;
pub use answer_tables::SolutionDocument;
pub use answer_tables::TimingDocument;

mod graph_document;
pub use graph_document::EdgeEntry;
pub use graph_document::GraphDocument;
pub use graph_document::NodeEntry;
pub use graph_document::ONE_WAY_EDGE_STYLE;
