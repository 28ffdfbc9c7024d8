use crate::layout::LayoutKind;
use std::path::{Path, PathBuf};

/// The paths of the three documents produced by a conversion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPaths {
    /// The path of the graph document.
    pub graph: PathBuf,
    /// The path of the timing document.
    pub timing: PathBuf,
    /// The path of the solution document.
    pub solution: PathBuf,
}

impl OutputPaths {
    /// Builds a new set of output paths.
    pub fn new<P, Q, R>(graph: P, timing: Q, solution: R) -> Self
    where
        P: Into<PathBuf>,
        Q: Into<PathBuf>,
        R: Into<PathBuf>,
    {
        OutputPaths {
            graph: graph.into(),
            timing: timing.into(),
            solution: solution.into(),
        }
    }
}

/// The options of a conversion.
///
/// The mandatory options are given to [`new`](Self::new); the other ones are set by the chaining methods.
/// The paths of the produced documents are given when they are written (see [`OutputPaths`]).
/// By default, the solver output is considered as timestamped and optimizing, no cost source is given,
/// the graph is undirected and the spring layout is used.
///
/// # Example
///
/// ```
/// # use aspgv::convert::ConversionOptions;
/// let options = ConversionOptions::new("cycle", "results/tsp-1.out")
///     .with_costs("cost", "ground-text/tsp-1.out")
///     .directed(true);
/// assert!(options.cost_source().is_some());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ConversionOptions {
    edge_predicate: String,
    solver_output: PathBuf,
    is_timestamped: bool,
    is_optimizing: bool,
    cost_predicate: Option<String>,
    grounder_output: Option<PathBuf>,
    is_directed: bool,
    layout: LayoutKind,
}

impl ConversionOptions {
    /// Builds the options given the chosen edge predicate and the solver output path.
    pub fn new<P>(edge_predicate: &str, solver_output: P) -> Self
    where
        P: Into<PathBuf>,
    {
        ConversionOptions {
            edge_predicate: edge_predicate.to_string(),
            solver_output: solver_output.into(),
            is_timestamped: true,
            is_optimizing: true,
            cost_predicate: None,
            grounder_output: None,
            is_directed: false,
            layout: LayoutKind::default(),
        }
    }

    /// Sets whether the solver output lines begin with timestamps.
    pub fn timestamped(mut self, is_timestamped: bool) -> Self {
        self.is_timestamped = is_timestamped;
        self
    }

    /// Sets whether the solver output comes from an optimization.
    pub fn optimizing(mut self, is_optimizing: bool) -> Self {
        self.is_optimizing = is_optimizing;
        self
    }

    /// Sets the cost predicate name and the path of the grounder text output containing the cost facts.
    pub fn with_costs<P>(self, cost_predicate: &str, grounder_output: P) -> Self
    where
        P: Into<PathBuf>,
    {
        self.with_cost_predicate(Some(cost_predicate))
            .with_grounder_output(Some(grounder_output))
    }

    /// Sets the cost predicate name.
    pub fn with_cost_predicate(mut self, cost_predicate: Option<&str>) -> Self {
        self.cost_predicate = cost_predicate.map(|s| s.to_string());
        self
    }

    /// Sets the path of the grounder text output.
    pub fn with_grounder_output<P>(mut self, grounder_output: Option<P>) -> Self
    where
        P: Into<PathBuf>,
    {
        self.grounder_output = grounder_output.map(|p| p.into());
        self
    }

    /// Sets whether the graph is directed.
    ///
    /// This option is ignored when no cost source is given, since complete graphs are undirected.
    pub fn directed(mut self, is_directed: bool) -> Self {
        self.is_directed = is_directed;
        self
    }

    /// Sets the layout used to place the nodes.
    pub fn with_layout(mut self, layout: LayoutKind) -> Self {
        self.layout = layout;
        self
    }

    /// Returns the chosen edge predicate name.
    pub fn edge_predicate(&self) -> &str {
        &self.edge_predicate
    }

    /// Returns the solver output path.
    pub fn solver_output(&self) -> &Path {
        &self.solver_output
    }

    /// Returns `true` iff the solver output lines begin with timestamps.
    pub fn is_timestamped(&self) -> bool {
        self.is_timestamped
    }

    /// Returns `true` iff the solver output comes from an optimization.
    pub fn is_optimizing(&self) -> bool {
        self.is_optimizing
    }

    /// Returns the cost predicate and the grounder output path, if both are set.
    pub fn cost_source(&self) -> Option<(&str, &Path)> {
        match (&self.cost_predicate, &self.grounder_output) {
            (Some(p), Some(g)) => Some((p.as_str(), g.as_path())),
            _ => None,
        }
    }

    /// Returns `true` iff a directed graph was requested.
    pub fn is_directed(&self) -> bool {
        self.is_directed
    }

    /// Returns the layout kind.
    pub fn layout(&self) -> LayoutKind {
        self.layout
    }
}
