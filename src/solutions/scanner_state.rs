use super::LogLine;
use crate::graph::EdgeIdMap;
use anyhow::Result;

/// The elapsed time given to answers of logs that are not timestamped.
pub const NOT_TIMESTAMPED_ANSWER_TIME: f64 = 4.0;

/// The optimization value given to answers of runs that are not optimizing.
pub const NOT_OPTIMIZING_VALUE: &str = "1";

/// An answer set, as committed by the scanner.
#[derive(Clone, Debug, PartialEq)]
pub struct Answer {
    index: String,
    elapsed_time: f64,
    optimization: String,
    edge_ids: Vec<usize>,
}

impl Answer {
    /// Returns the index of the answer, as written by the solver.
    pub fn index(&self) -> &str {
        &self.index
    }

    /// Returns the time elapsed between the beginning of the solving process and this answer, in seconds.
    pub fn elapsed_time(&self) -> f64 {
        self.elapsed_time
    }

    /// Returns the optimization value of this answer.
    pub fn optimization(&self) -> &str {
        &self.optimization
    }

    /// Returns the identifiers of the edges of this answer, in order of appearance.
    pub fn edge_ids(&self) -> &[usize] {
        &self.edge_ids
    }
}

/// The parameters of a scan that do not change from a line to another.
pub struct ScanContext<'a> {
    /// The identifiers of the edges.
    pub edge_ids: &'a EdgeIdMap,
    /// Whether the lines begin with a timestamp.
    pub is_timestamped: bool,
    /// Whether the answers end with an optimization line.
    pub is_optimizing: bool,
}

/// The outcome of a transition.
#[derive(Clone, Debug, PartialEq)]
pub enum Transition {
    /// No answer was completed.
    Continue,
    /// An answer was completed.
    Committed(Answer),
    /// An answer was completed, but no answer header was read before; its edges are discarded.
    Discarded(Vec<usize>),
}

#[derive(Clone, Debug, Default, PartialEq)]
struct PendingAnswer {
    header: Option<(String, f64)>,
    edge_ids: Vec<usize>,
}

/// The state of the solver output scanner.
///
/// The state is threaded through the lines by [`next`](Self::next), which consumes it and returns the new one.
///
/// # Example
///
/// ```
/// # use aspgv::graph::{display_edges, complete_graph, EdgeIdMap};
/// # use aspgv::solutions::{LogLine, ScanContext, ScannerState, Transition};
/// let edge_ids = EdgeIdMap::new_with_display_edges(&display_edges(&complete_graph(&["a", "b"])));
/// let context = ScanContext { edge_ids: &edge_ids, is_timestamped: false, is_optimizing: false };
/// let state = ScannerState::default();
/// let (state, _) = state.next(LogLine::AnswerHeader("1", 0.), &context).unwrap();
/// let (state, transition) = state.next(LogLine::EdgeFacts(vec![("b", "a")]), &context).unwrap();
/// match transition {
///     Transition::Committed(answer) => assert_eq!(&[1], answer.edge_ids()),
///     _ => panic!(),
/// }
/// assert!(!state.has_pending_answer());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScannerState {
    start_time: f64,
    pending: PendingAnswer,
}

impl ScannerState {
    /// Returns the time at which the solving process began.
    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    /// Returns `true` iff some edges were read since the last commit.
    pub fn has_pending_answer(&self) -> bool {
        !self.pending.edge_ids.is_empty()
    }

    /// Computes the state following the given line.
    ///
    /// For runs that are not optimizing, each edge fact line commits an answer and the answer header is kept,
    /// so that the following edge fact lines commit other answers with the same index.
    /// Optimization lines are ignored for such runs.
    ///
    /// An error is returned if an edge fact has no identifier.
    pub fn next(mut self, line: LogLine, context: &ScanContext) -> Result<(Self, Transition)> {
        match line {
            LogLine::SolvingStart(time) => {
                self.start_time = time;
                Ok((self, Transition::Continue))
            }
            LogLine::AnswerHeader(index, time) => {
                let elapsed_time = if context.is_timestamped {
                    time - self.start_time
                } else {
                    NOT_TIMESTAMPED_ANSWER_TIME
                };
                self.pending.header = Some((index.to_string(), elapsed_time));
                Ok((self, Transition::Continue))
            }
            LogLine::EdgeFacts(facts) => {
                for (from, to) in facts {
                    let id = context.edge_ids.lookup(from, to)?;
                    self.pending.edge_ids.push(id);
                }
                if context.is_optimizing {
                    return Ok((self, Transition::Continue));
                }
                let header = self.pending.header.clone();
                let (mut state, transition) = self.commit(NOT_OPTIMIZING_VALUE);
                state.pending.header = header;
                Ok((state, transition))
            }
            LogLine::Optimization(value) if context.is_optimizing => Ok(self.commit(value)),
            LogLine::Optimization(_) => Ok((self, Transition::Continue)),
            LogLine::Unrecognized => Ok((self, Transition::Continue)),
        }
    }

    fn commit(mut self, optimization: &str) -> (Self, Transition) {
        let pending = std::mem::take(&mut self.pending);
        let transition = match pending.header {
            Some((index, elapsed_time)) => Transition::Committed(Answer {
                index,
                elapsed_time,
                optimization: optimization.to_string(),
                edge_ids: pending.edge_ids,
            }),
            None => Transition::Discarded(pending.edge_ids),
        };
        (self, transition)
    }
}
