use crate::solutions::Answer;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// The index of an answer, as written by the solver.
///
/// Indices are ordered by length first, so that indices made of digits follow the numeric order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AnswerIndex(String);

impl AnswerIndex {
    /// Returns the index as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AnswerIndex {
    fn from(s: &str) -> Self {
        AnswerIndex(s.to_string())
    }
}

impl Ord for AnswerIndex {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for AnswerIndex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The timing document: for each answer, its elapsed time and its optimization value.
///
/// An answer committed twice keeps its last values.
#[derive(Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TimingDocument(BTreeMap<AnswerIndex, (f64, String)>);

impl TimingDocument {
    /// Builds the timing document of a sequence of answers.
    pub fn new_with_answers(answers: &[Answer]) -> Self {
        TimingDocument(
            answers
                .iter()
                .map(|a| {
                    (
                        AnswerIndex::from(a.index()),
                        (a.elapsed_time(), a.optimization().to_string()),
                    )
                })
                .collect(),
        )
    }

    /// Returns the number of answers.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` iff the document contains no answer.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the elapsed time and the optimization value of an answer.
    pub fn get(&self, index: &str) -> Option<&(f64, String)> {
        self.0.get(&AnswerIndex::from(index))
    }

    /// Iterates over the answer indices, in order.
    pub fn iter_indices(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.keys().map(|k| k.as_str())
    }
}

/// The solution document: for each answer, the identifiers of its edges.
///
/// An answer committed twice keeps its last edges.
#[derive(Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SolutionDocument(BTreeMap<AnswerIndex, Vec<usize>>);

impl SolutionDocument {
    /// Builds the solution document of a sequence of answers.
    pub fn new_with_answers(answers: &[Answer]) -> Self {
        SolutionDocument(
            answers
                .iter()
                .map(|a| (AnswerIndex::from(a.index()), a.edge_ids().to_vec()))
                .collect(),
        )
    }

    /// Returns the number of answers.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` iff the document contains no answer.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the edge identifiers of an answer.
    pub fn get(&self, index: &str) -> Option<&[usize]> {
        self.0.get(&AnswerIndex::from(index)).map(|v| v.as_slice())
    }

    /// Iterates over the answer indices, in order.
    pub fn iter_indices(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.keys().map(|k| k.as_str())
    }

    /// Iterates over all the edge identifiers of all the answers.
    pub fn iter_edge_ids(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.values().flat_map(|v| v.iter().copied())
    }
}
