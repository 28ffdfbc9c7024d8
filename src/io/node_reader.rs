use crate::facts::{split_timestamp, PredicateMatcher};
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::io::{BufRead, BufReader, Read};

/// A reader collecting the node names that appear in the edge facts of a solver output.
///
/// Every edge fact line is taken into account, whatever the answer it belongs to.
/// Nodes are returned in the order of their first occurrence.
///
/// # Example
///
/// ```
/// # use aspgv::io::SolutionNodeReader;
/// let reader = SolutionNodeReader::new("chosen", false).unwrap();
/// let log = "Answer: 1\nchosen(a,b) chosen(b,c)\nAnswer: 2\nchosen(c,d)\n";
/// assert_eq!(vec!["a", "b", "c", "d"], reader.read(&mut log.as_bytes()).unwrap());
/// ```
pub struct SolutionNodeReader {
    matcher: PredicateMatcher,
    is_timestamped: bool,
}

impl SolutionNodeReader {
    /// Builds a reader for the edge facts with the given predicate name.
    pub fn new(edge_predicate: &str, is_timestamped: bool) -> Result<Self> {
        Ok(SolutionNodeReader {
            matcher: PredicateMatcher::new(edge_predicate, 2)?,
            is_timestamped,
        })
    }

    /// Reads the node names.
    pub fn read(&self, reader: &mut dyn Read) -> Result<Vec<String>> {
        let mut nodes = vec![];
        let mut known_nodes = HashSet::new();
        let br = BufReader::new(reader);
        for (i, line) in br.lines().enumerate() {
            let l = line.with_context(|| format!("while reading line with index {}", i))?;
            let remainder = match split_timestamp(&l, self.is_timestamped) {
                Some((_, r)) => r,
                None => continue,
            };
            for args in self.matcher.match_fact_line(remainder).unwrap_or_default() {
                for name in args {
                    if known_nodes.insert(name.to_string()) {
                        nodes.push(name.to_string());
                    }
                }
            }
        }
        Ok(nodes)
    }
}
