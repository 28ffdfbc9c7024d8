use super::{ConversionOptions, OutputPaths};
use crate::graph::{complete_graph, BuiltGraph, GraphBuilder, WeightedGraph};
use crate::io::{GrounderCostReader, SolutionNodeReader, WarningHandler};
use crate::solutions::{Answer, SolutionScanner};
use crate::visjs::{GraphDocument, SolutionDocument, TimingDocument};
use crate::ConversionError;
use anyhow::{Context, Result};
use log::{info, warn};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufReader, Read, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// The way the graph of a conversion is obtained.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GraphSource {
    /// The graph is given by the cost facts of a grounder output.
    Costs,
    /// The graph is the complete graph on the nodes found in the solver output.
    CompleteGraph,
}

/// The result of a conversion, kept in memory until it is written.
pub struct Conversion {
    graph_source: GraphSource,
    built_graph: BuiltGraph,
    answers: Vec<Answer>,
    graph_document: GraphDocument,
    timing_document: TimingDocument,
    solution_document: SolutionDocument,
}

impl Conversion {
    /// Returns the way the graph was obtained.
    pub fn graph_source(&self) -> GraphSource {
        self.graph_source
    }

    /// Returns the displayable graph.
    pub fn built_graph(&self) -> &BuiltGraph {
        &self.built_graph
    }

    /// Returns the committed answers, in order.
    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    /// Returns the graph document.
    pub fn graph_document(&self) -> &GraphDocument {
        &self.graph_document
    }

    /// Returns the timing document.
    pub fn timing_document(&self) -> &TimingDocument {
        &self.timing_document
    }

    /// Returns the solution document.
    pub fn solution_document(&self) -> &SolutionDocument {
        &self.solution_document
    }

    /// Writes the three documents as indented JSON files, creating the missing directories.
    ///
    /// All the documents are serialized and written to temporary files next to their targets before any target is replaced.
    /// If one of them can not be written, the temporary files are removed and no target is created.
    pub fn write(&self, outputs: &OutputPaths) -> Result<()> {
        let contents = [
            (outputs.graph.as_path(), to_json_string(&self.graph_document)?),
            (outputs.timing.as_path(), to_json_string(&self.timing_document)?),
            (outputs.solution.as_path(), to_json_string(&self.solution_document)?),
        ];
        for (path, _) in contents.iter() {
            create_parent_dir(path)?;
        }
        let mut written = Vec::with_capacity(contents.len());
        for (path, content) in contents.iter() {
            let temp = temp_path(path);
            if let Err(e) = write_file(&temp, content) {
                remove_files(&written);
                return Err(e);
            }
            written.push(temp);
        }
        for ((path, _), temp) in contents.iter().zip(written.iter()) {
            info!("writing {:?}", path);
            fs::rename(temp, path).with_context(|| {
                format!(
                    r#"while moving "{}" to "{}""#,
                    temp.display(),
                    path.display()
                )
            })?;
        }
        Ok(())
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut file_name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    file_name.push(".tmp");
    path.with_file_name(file_name)
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    let mut file = File::create(path)
        .with_context(|| format!(r#"while creating file "{}""#, path.display()))?;
    writeln!(file, "{}", content)
        .and_then(|_| file.flush())
        .with_context(|| format!(r#"while writing file "{}""#, path.display()))
}

fn remove_files(paths: &[PathBuf]) {
    paths.iter().for_each(|p| {
        if let Err(e) = fs::remove_file(p) {
            warn!("could not remove temporary file {:?}: {}", p, e);
        }
    });
}

fn to_json_string<T>(document: &T) -> Result<String>
where
    T: Serialize,
{
    serde_json::to_string_pretty(document).context("while serializing a JSON document")
}

fn create_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => fs::create_dir_all(p)
            .with_context(|| format!(r#"while creating directory "{}""#, p.display())),
        _ => Ok(()),
    }
}

/// Converts solver and grounder outputs into the documents read by the visualization front end.
///
/// If a cost predicate and a grounder output are given, the graph is built from the cost facts.
/// Otherwise, the graph is the complete graph on the nodes found in the edge facts of the solver output;
/// such graphs are always undirected, even if a directed graph was requested.
///
/// The conversion fails if the graph has no edge.
pub struct Converter {
    options: ConversionOptions,
    warning_handlers: Vec<Rc<dyn Fn(usize, String)>>,
}

impl Converter {
    /// Builds a new converter.
    pub fn new(options: ConversionOptions) -> Self {
        Converter {
            options,
            warning_handlers: vec![],
        }
    }

    /// Returns the conversion options.
    pub fn options(&self) -> &ConversionOptions {
        &self.options
    }

    /// Adds a callback function to call when warnings are raised while reading the inputs.
    pub fn add_warning_handler(&mut self, h: WarningHandler) {
        self.warning_handlers.push(Rc::from(h));
    }

    fn forwarded_warning_handlers(&self) -> Vec<WarningHandler> {
        self.warning_handlers
            .iter()
            .map(|h| {
                let handler = Rc::clone(h);
                Box::new(move |line: usize, message: String| (handler)(line, message))
                    as WarningHandler
            })
            .collect()
    }

    /// Runs the conversion and keeps the documents in memory.
    pub fn convert(&self) -> Result<Conversion> {
        let (graph_source, graph) = self.read_graph()?;
        if graph.n_edges() == 0 {
            return Err(ConversionError::EmptyOrMissingCosts.into());
        }
        let layout = self.options.layout().new_layout_computer();
        info!("computing the {} layout", self.options.layout().as_ref());
        let built_graph = GraphBuilder::new(layout.as_ref()).build(&graph);
        let answers = self.read_answers(&built_graph)?;
        let timing_document = TimingDocument::new_with_answers(&answers);
        info!(
            "read {} committed answer block(s) for {} distinct index(es)",
            answers.len(),
            timing_document.len()
        );
        Ok(Conversion {
            graph_source,
            graph_document: GraphDocument::from(&built_graph),
            timing_document,
            solution_document: SolutionDocument::new_with_answers(&answers),
            built_graph,
            answers,
        })
    }

    /// Runs the conversion and writes the documents to the output paths.
    ///
    /// Nothing is written if the conversion fails.
    pub fn convert_and_write(&self, outputs: &OutputPaths) -> Result<Conversion> {
        let conversion = self.convert()?;
        conversion.write(outputs)?;
        Ok(conversion)
    }

    fn read_graph(&self) -> Result<(GraphSource, WeightedGraph)> {
        match self.options.cost_source() {
            Some((cost_predicate, grounder_output)) => {
                let mut reader = GrounderCostReader::new(cost_predicate)?;
                self.forwarded_warning_handlers()
                    .into_iter()
                    .for_each(|h| reader.add_warning_handler(h));
                let costs = read_file_path_with(grounder_output, &|r| reader.read(r))?;
                info!("read {} cost fact(s)", costs.len());
                let graph = WeightedGraph::new_with_edges(&costs, self.options.is_directed());
                Ok((GraphSource::Costs, graph))
            }
            None => {
                let reader = SolutionNodeReader::new(
                    self.options.edge_predicate(),
                    self.options.is_timestamped(),
                )?;
                let nodes = read_file_path_with(self.options.solver_output(), &|r| reader.read(r))?;
                info!(
                    "no cost source given, using the complete graph on the {} node(s) of the solver output",
                    nodes.len()
                );
                if self.options.is_directed() {
                    warn!("complete graphs are undirected; ignoring the request for a directed graph");
                }
                Ok((GraphSource::CompleteGraph, complete_graph(&nodes)))
            }
        }
    }

    fn read_answers(&self, built_graph: &BuiltGraph) -> Result<Vec<Answer>> {
        let mut scanner = SolutionScanner::new(
            self.options.edge_predicate(),
            built_graph.edge_ids(),
            self.options.is_timestamped(),
            self.options.is_optimizing(),
        )?;
        self.forwarded_warning_handlers()
            .into_iter()
            .for_each(|h| scanner.add_warning_handler(h));
        read_file_path_with(self.options.solver_output(), &|r| scanner.scan(r))
    }
}

fn read_file_path_with<F, R>(file_path: &Path, reader: &F) -> Result<R>
where
    F: Fn(&mut dyn Read) -> Result<R>,
{
    let context = || format!(r#"while reading file "{}""#, file_path.display());
    info!("reading input file {:?}", file_path);
    let mut file_reader = BufReader::new(
        File::open(file_path)
            .with_context(|| format!(r#"while opening file "{}""#, file_path.display()))?,
    );
    (reader)(&mut file_reader).with_context(context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::EdgeKind;
    use crate::layout::LayoutKind;
    use assert_fs::{prelude::*, TempDir};

    const TIMESTAMPED_LOG: &str = r#"0.000 clasp version 3.3.5
0.001 Reading from stdin
0.500 Solving...
1.000 Answer: 1
1.000 cycle(1,2) cycle(2,3) cycle(3,1)
1.000 Optimization: 16
2.500 Answer: 2
2.500 cycle(1,3) cycle(3,2) cycle(2,1)
2.500 Optimization: 11
3.000 OPTIMUM FOUND
"#;

    const GRINGO_TEXT: &str = r#"node(1).
node(2).
node(3).
cost(1,2,3).
cost(2,1,3).
cost(2,3,5).
cost(3,2,5).
cost(3,1,8).
cost(1,3,3).
"#;

    fn outputs(dir: &TempDir) -> OutputPaths {
        OutputPaths::new(
            dir.child("out/data.json").path(),
            dir.child("out/time.json").path(),
            dir.child("soln.json").path(),
        )
    }

    #[test]
    fn test_explicit_costs_directed() {
        let dir = TempDir::new().unwrap();
        dir.child("clasp.out").write_str(TIMESTAMPED_LOG).unwrap();
        dir.child("gringo.out").write_str(GRINGO_TEXT).unwrap();
        let options = ConversionOptions::new("cycle", dir.child("clasp.out").path())
            .with_costs("cost", dir.child("gringo.out").path())
            .directed(true);
        let conversion = Converter::new(options).convert().unwrap();
        assert_eq!(GraphSource::Costs, conversion.graph_source());
        let graph = conversion.built_graph();
        assert_eq!(3, graph.nodes().len());
        assert_eq!(3, graph.edges().len());
        assert!(graph.edges().iter().all(|e| e.kind() == EdgeKind::TwoWay));
        assert_eq!(
            vec![(1, "1", "2", 3), (2, "2", "3", 5), (3, "1", "3", 3)],
            graph
                .edges()
                .iter()
                .map(|e| (e.id(), e.from(), e.to(), e.weight()))
                .collect::<Vec<_>>()
        );
        assert_eq!(
            Some(&(0.5, "16".to_string())),
            conversion.timing_document().get("1")
        );
        assert_eq!(
            Some(&(2.0, "11".to_string())),
            conversion.timing_document().get("2")
        );
        assert_eq!(Some(&[1, 2, 3][..]), conversion.solution_document().get("1"));
        assert_eq!(Some(&[3, 2, 1][..]), conversion.solution_document().get("2"));
        conversion
            .solution_document()
            .iter_edge_ids()
            .for_each(|id| assert!(conversion.graph_document().has_edge_id(id)));
    }

    #[test]
    fn test_complete_graph_ignores_directed() {
        let dir = TempDir::new().unwrap();
        dir.child("clasp.out").write_str(TIMESTAMPED_LOG).unwrap();
        let options = ConversionOptions::new("cycle", dir.child("clasp.out").path())
            .directed(true)
            .with_layout(LayoutKind::Circular);
        let conversion = Converter::new(options).convert().unwrap();
        assert_eq!(GraphSource::CompleteGraph, conversion.graph_source());
        assert_eq!(3, conversion.built_graph().edges().len());
        assert_eq!(3, conversion.built_graph().n_two_way_edges());
        assert!(conversion
            .graph_document()
            .edges
            .iter()
            .all(|e| e.style.is_none() && e.width == 1));
        assert_eq!(2, conversion.answers().len());
    }

    #[test]
    fn test_cost_predicate_without_grounder_output() {
        let dir = TempDir::new().unwrap();
        dir.child("clasp.out").write_str(TIMESTAMPED_LOG).unwrap();
        let options = ConversionOptions::new("cycle", dir.child("clasp.out").path())
            .with_cost_predicate(Some("cost"));
        let conversion = Converter::new(options).convert().unwrap();
        assert_eq!(GraphSource::CompleteGraph, conversion.graph_source());
    }

    #[test]
    fn test_empty_costs() {
        let dir = TempDir::new().unwrap();
        dir.child("clasp.out").write_str("Answer: 1\nSATISFIABLE\n").unwrap();
        let options = ConversionOptions::new("cycle", dir.child("clasp.out").path())
            .timestamped(false);
        let err = Converter::new(options).convert_and_write(&outputs(&dir)).err().unwrap();
        assert_eq!(
            Some(&ConversionError::EmptyOrMissingCosts),
            err.downcast_ref::<ConversionError>()
        );
        dir.child("out").assert(predicates::path::missing());
        dir.child("soln.json").assert(predicates::path::missing());
    }

    #[test]
    fn test_empty_grounder_costs() {
        let dir = TempDir::new().unwrap();
        dir.child("clasp.out").write_str(TIMESTAMPED_LOG).unwrap();
        dir.child("gringo.out").write_str("node(1).\n").unwrap();
        let options = ConversionOptions::new("cycle", dir.child("clasp.out").path())
            .with_costs("cost", dir.child("gringo.out").path());
        let err = Converter::new(options).convert().err().unwrap();
        assert_eq!(
            Some(&ConversionError::EmptyOrMissingCosts),
            err.downcast_ref::<ConversionError>()
        );
    }

    #[test]
    fn test_unknown_edge_writes_nothing() {
        let dir = TempDir::new().unwrap();
        dir.child("clasp.out")
            .write_str("0.1 Answer: 1\n0.1 cycle(1,4)\n0.1 Optimization: 3\n")
            .unwrap();
        dir.child("gringo.out").write_str(GRINGO_TEXT).unwrap();
        let options = ConversionOptions::new("cycle", dir.child("clasp.out").path())
            .with_costs("cost", dir.child("gringo.out").path());
        let err = Converter::new(options).convert_and_write(&outputs(&dir)).err().unwrap();
        assert!(matches!(
            err.downcast_ref::<ConversionError>(),
            Some(ConversionError::EdgeIdLookupFailure { .. })
        ));
        dir.child("out").assert(predicates::path::missing());
    }

    #[test]
    fn test_missing_input_file() {
        let dir = TempDir::new().unwrap();
        let options = ConversionOptions::new("cycle", dir.child("clasp.out").path());
        assert!(Converter::new(options).convert().is_err());
    }

    #[test]
    fn test_write() {
        let dir = TempDir::new().unwrap();
        dir.child("clasp.out").write_str(TIMESTAMPED_LOG).unwrap();
        dir.child("gringo.out").write_str(GRINGO_TEXT).unwrap();
        let options = ConversionOptions::new("cycle", dir.child("clasp.out").path())
            .with_costs("cost", dir.child("gringo.out").path());
        Converter::new(options).convert_and_write(&outputs(&dir)).unwrap();
        dir.child("out/data.json").assert(predicates::path::exists());
        let timing: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(dir.child("out/time.json").path()).unwrap())
                .unwrap();
        assert_eq!(serde_json::json!({"1": [0.5, "16"], "2": [2.0, "11"]}), timing);
        let solutions: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(dir.child("soln.json").path()).unwrap())
                .unwrap();
        assert_eq!(serde_json::json!({"1": [1, 2, 3], "2": [3, 2, 1]}), solutions);
    }

    #[test]
    fn test_failed_write_leaves_no_document() {
        let dir = TempDir::new().unwrap();
        dir.child("clasp.out").write_str(TIMESTAMPED_LOG).unwrap();
        dir.child("gringo.out").write_str(GRINGO_TEXT).unwrap();
        let outputs = outputs(&dir);
        fs::create_dir_all(temp_path(&outputs.solution)).unwrap();
        let options = ConversionOptions::new("cycle", dir.child("clasp.out").path())
            .with_costs("cost", dir.child("gringo.out").path());
        assert!(Converter::new(options).convert_and_write(&outputs).is_err());
        dir.child("out/data.json").assert(predicates::path::missing());
        dir.child("out/time.json").assert(predicates::path::missing());
        dir.child("soln.json").assert(predicates::path::missing());
        assert!(!temp_path(&outputs.graph).exists());
        assert!(!temp_path(&outputs.timing).exists());
    }

    #[test]
    fn test_temp_path_is_a_sibling() {
        assert_eq!(
            PathBuf::from("json/data.json.tmp"),
            temp_path(Path::new("json/data.json"))
        );
    }

    #[test]
    fn test_warnings_are_forwarded() {
        let dir = TempDir::new().unwrap();
        dir.child("clasp.out").write_str(TIMESTAMPED_LOG).unwrap();
        dir.child("gringo.out")
            .write_str("cost(1,2,3).\ncost(2,3,1).\ncost(3,1,x).\ncost(1,3,1).\n")
            .unwrap();
        let options = ConversionOptions::new("cycle", dir.child("clasp.out").path())
            .with_costs("cost", dir.child("gringo.out").path());
        let mut converter = Converter::new(options);
        let warnings = Rc::new(std::cell::RefCell::new(vec![]));
        let warnings_clone = Rc::clone(&warnings);
        converter.add_warning_handler(Box::new(move |l, w| {
            warnings_clone.borrow_mut().push((l, w))
        }));
        converter.convert().unwrap();
        assert_eq!(1, warnings.borrow().len());
        assert_eq!(3, warnings.borrow()[0].0);
    }
}
