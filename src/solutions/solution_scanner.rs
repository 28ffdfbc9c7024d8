use super::{Answer, LineClassifier, ScanContext, ScannerState, Transition};
use crate::graph::EdgeIdMap;
use crate::io::{notify_warning, WarningHandler};
use anyhow::{Context, Result};
use log::debug;
use std::collections::HashSet;
use std::io::{BufRead, BufReader, Read};

/// A scanner reading the answers of a solver output.
///
/// The scanner reads the output line by line and threads a [`ScannerState`] through them.
/// Answers are committed at each edge fact line for non-optimizing runs, and at each optimization line otherwise.
/// For non-optimizing runs, several edge fact lines after the same answer header give several answers with the same index.
/// An answer still in progress when the input ends is discarded.
///
/// Warnings are raised when edges are read outside of an answer, and when an answer index is repeated.
///
/// # Example
///
/// ```
/// # use aspgv::graph::{complete_graph, display_edges, EdgeIdMap};
/// # use aspgv::solutions::SolutionScanner;
/// let edge_ids = EdgeIdMap::new_with_display_edges(&display_edges(&complete_graph(&["a", "b", "c"])));
/// let scanner = SolutionScanner::new("chosen", &edge_ids, true, true).unwrap();
/// let log = "0.0 Solving...\n1.0 Answer: 1\n1.0 chosen(a,b) chosen(b,c)\n1.5 Optimization: 5\n";
/// let answers = scanner.scan(&mut log.as_bytes()).unwrap();
/// assert_eq!(1, answers.len());
/// assert_eq!(1.0, answers[0].elapsed_time());
/// assert_eq!("5", answers[0].optimization());
/// assert_eq!(&[1, 3], answers[0].edge_ids());
/// ```
pub struct SolutionScanner<'a> {
    classifier: LineClassifier,
    edge_ids: &'a EdgeIdMap,
    is_timestamped: bool,
    is_optimizing: bool,
    warning_handlers: Vec<WarningHandler>,
}

impl<'a> SolutionScanner<'a> {
    /// Builds a new scanner.
    ///
    /// The edge facts are read using the given predicate name, and translated to identifiers using the given map.
    pub fn new(
        edge_predicate: &str,
        edge_ids: &'a EdgeIdMap,
        is_timestamped: bool,
        is_optimizing: bool,
    ) -> Result<Self> {
        Ok(SolutionScanner {
            classifier: LineClassifier::new(edge_predicate, is_timestamped)?,
            edge_ids,
            is_timestamped,
            is_optimizing,
            warning_handlers: vec![],
        })
    }

    /// Adds a callback function to call when warnings are raised while scanning.
    pub fn add_warning_handler(&mut self, h: WarningHandler) {
        self.warning_handlers.push(h);
    }

    /// Scans a solver output and returns the committed answers, in order.
    pub fn scan(&self, reader: &mut dyn Read) -> Result<Vec<Answer>> {
        let context = ScanContext {
            edge_ids: self.edge_ids,
            is_timestamped: self.is_timestamped,
            is_optimizing: self.is_optimizing,
        };
        let mut state = ScannerState::default();
        let mut answers = vec![];
        let mut known_indices = HashSet::new();
        let br = BufReader::new(reader);
        for (i, line) in br.lines().enumerate() {
            let line_context = || format!("while reading line with index {}", i);
            let l = line.with_context(line_context)?;
            let log_line = self.classifier.classify(&l).with_context(line_context)?;
            let (next_state, transition) =
                state.next(log_line, &context).with_context(line_context)?;
            state = next_state;
            match transition {
                Transition::Continue => {}
                Transition::Committed(answer) => {
                    if !known_indices.insert(answer.index().to_string()) {
                        notify_warning(
                            &self.warning_handlers,
                            1 + i,
                            &format!("answer {} is defined more than once", answer.index()),
                        );
                    }
                    answers.push(answer);
                }
                Transition::Discarded(edge_ids) => notify_warning(
                    &self.warning_handlers,
                    1 + i,
                    &format!(
                        "ignoring {} edge(s) found outside of an answer",
                        edge_ids.len()
                    ),
                ),
            }
        }
        if state.has_pending_answer() {
            debug!("discarding the last answer since it is incomplete");
        }
        Ok(answers)
    }
}
