//! The conversion of solver and grounder outputs into visualization documents.

mod converter;
pub use converter::Conversion;
pub use converter::Converter;
pub use converter::GraphSource;

mod options;
pub use options::ConversionOptions;
pub use options::OutputPaths;
