//! Aspgv converts the outputs of answer set solvers into the JSON documents of a graph visualization.
//!
//! The solver output (and optionally the text output of the grounder) is read to build a weighted graph,
//! whose edges receive identifiers, and a sequence of answers, each one being a set of edges.
//! Three documents are produced: the graph with its layout, the timing of the answers and their edges.
//!
//! The entry point of the conversion is the [`Converter`](convert::Converter).

#![warn(missing_docs)]

pub mod convert;

mod errors;
pub use errors::ConversionError;

pub mod facts;

pub mod graph;

pub mod io;

pub mod layout;

pub mod solutions;

pub mod visjs;
