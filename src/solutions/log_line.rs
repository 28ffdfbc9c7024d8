use crate::facts::{split_timestamp, PredicateMatcher};
use anyhow::{Context, Result};
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

/// The text marking the beginning of the solving process.
pub const SOLVING_START_MARKER: &str = "Solving...";

lazy_static! {
    static ref ANSWER_PATTERN: Regex = Regex::new(r"^Answer: (\d+)").unwrap();
    static ref OPTIMIZATION_PATTERN: Regex = Regex::new(r"^Optimization: (\d+)").unwrap();
}

/// The kinds of solver output lines.
#[derive(Clone, Debug, PartialEq)]
pub enum LogLine<'a> {
    /// The solving process begins at the given time.
    SolvingStart(f64),
    /// A new answer begins, with its index, at the given time.
    AnswerHeader(&'a str, f64),
    /// A line of chosen edges.
    EdgeFacts(Vec<(&'a str, &'a str)>),
    /// The optimization value of the current answer.
    Optimization(&'a str),
    /// Any other line.
    Unrecognized,
}

/// Classifies the lines of a solver output.
///
/// If the output is timestamped, lines that do not begin with a timestamp are [`LogLine::Unrecognized`].
pub struct LineClassifier {
    edge_matcher: PredicateMatcher,
    is_timestamped: bool,
}

impl LineClassifier {
    /// Builds a new classifier given the name of the chosen edge predicate.
    pub fn new(edge_predicate: &str, is_timestamped: bool) -> Result<Self> {
        Ok(LineClassifier {
            edge_matcher: PredicateMatcher::new(edge_predicate, 2)?,
            is_timestamped,
        })
    }

    /// Classifies a line.
    pub fn classify<'a>(&self, line: &'a str) -> Result<LogLine<'a>> {
        let (str_time, text) = match split_timestamp(line, self.is_timestamped) {
            Some(split) => split,
            None => {
                debug!("skipping line without timestamp: {}", line);
                return Ok(LogLine::Unrecognized);
            }
        };
        let time = || {
            str_time
                .parse::<f64>()
                .with_context(|| format!(r#"while parsing timestamp "{}""#, str_time))
        };
        if text.starts_with(SOLVING_START_MARKER) {
            return Ok(LogLine::SolvingStart(time()?));
        }
        if let Some(c) = ANSWER_PATTERN.captures(text) {
            return Ok(LogLine::AnswerHeader(c.get(1).unwrap().as_str(), time()?));
        }
        if let Some(facts) = self.edge_matcher.match_fact_line(text) {
            return Ok(LogLine::EdgeFacts(
                facts.into_iter().map(|args| (args[0], args[1])).collect(),
            ));
        }
        if let Some(c) = OPTIMIZATION_PATTERN.captures(text) {
            return Ok(LogLine::Optimization(c.get(1).unwrap().as_str()));
        }
        Ok(LogLine::Unrecognized)
    }
}
