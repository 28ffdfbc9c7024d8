use super::{specs::notify_warning, WarningHandler};
use crate::facts::PredicateMatcher;
use crate::graph::{Weight, WeightedEdge};
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::io::{BufRead, BufReader, Read};

/// A reader for the weighted edges given by the cost facts of a grounder text output (`gringo -t`).
///
/// Each line beginning with a `cost(from,to,weight)` fact gives a weighted edge; the other lines are ignored.
/// Duplicated facts are read once.
/// If an edge is given several weights, the last one is kept and a warning is raised.
///
/// # Example
///
/// ```
/// # use aspgv::io::GrounderCostReader;
/// let reader = GrounderCostReader::new("cost").unwrap();
/// let edges = reader.read(&mut "cost(a,b,3).\nnode(a).\ncost(b,c,1).\n".as_bytes()).unwrap();
/// assert_eq!(2, edges.len());
/// assert_eq!(("a", "b", 3), (edges[0].from(), edges[0].to(), edges[0].weight()));
/// ```
pub struct GrounderCostReader {
    matcher: PredicateMatcher,
    warning_handlers: Vec<WarningHandler>,
}

impl GrounderCostReader {
    /// Builds a reader for the cost facts with the given predicate name.
    pub fn new(cost_predicate: &str) -> Result<Self> {
        Ok(GrounderCostReader {
            matcher: PredicateMatcher::new(cost_predicate, 3)?,
            warning_handlers: vec![],
        })
    }

    /// Adds a callback function to call when warnings are raised while reading costs.
    pub fn add_warning_handler(&mut self, h: WarningHandler) {
        self.warning_handlers.push(h);
    }

    /// Reads the weighted edges, in the order of their first occurrence.
    pub fn read(&self, reader: &mut dyn Read) -> Result<Vec<WeightedEdge>> {
        let mut edges: Vec<WeightedEdge> = vec![];
        let mut edge_positions: HashMap<(String, String), usize> = HashMap::new();
        let br = BufReader::new(reader);
        for (i, line) in br.lines().enumerate() {
            let l = line.with_context(|| format!("while reading line with index {}", i))?;
            let args = match self.matcher.match_fact(&l) {
                Some(a) => a,
                None => continue,
            };
            let weight = match args[2].parse::<Weight>() {
                Ok(w) => w,
                Err(_) => {
                    notify_warning(
                        &self.warning_handlers,
                        1 + i,
                        &format!(r#"ignoring fact with non-integer weight "{}""#, args[2]),
                    );
                    continue;
                }
            };
            let key = (args[0].to_string(), args[1].to_string());
            match edge_positions.get(&key) {
                Some(p) if edges[*p].weight() == weight => {}
                Some(p) => {
                    notify_warning(
                        &self.warning_handlers,
                        1 + i,
                        &format!(
                            "edge ({},{}) redefined with weight {} (was {})",
                            args[0],
                            args[1],
                            weight,
                            edges[*p].weight()
                        ),
                    );
                    edges[*p] = WeightedEdge::new(args[0], args[1], weight);
                }
                None => {
                    edge_positions.insert(key, edges.len());
                    edges.push(WeightedEdge::new(args[0], args[1], weight));
                }
            }
        }
        Ok(edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, rc::Rc};

    fn read_with_warnings(instance: &str) -> (Vec<WeightedEdge>, Vec<(usize, String)>) {
        let mut reader = GrounderCostReader::new("cost").unwrap();
        let warnings = Rc::new(RefCell::new(vec![]));
        let warnings_clone = Rc::clone(&warnings);
        reader.add_warning_handler(Box::new(move |l, w| {
            warnings_clone.borrow_mut().push((l, w))
        }));
        let edges = reader.read(&mut instance.as_bytes()).unwrap();
        let w = warnings.borrow().clone();
        (edges, w)
    }

    #[test]
    fn test_read_ok() {
        let instance = "node(a).\ncost(a,b,3).\ncost(b,a,2).\n edge(a,b).\ncost(b,c,10).\n";
        let (edges, warnings) = read_with_warnings(instance);
        assert_eq!(
            vec![
                WeightedEdge::new("a", "b", 3),
                WeightedEdge::new("b", "a", 2),
                WeightedEdge::new("b", "c", 10),
            ],
            edges
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_duplicates() {
        let instance = "cost(a,b,3).\ncost(a,b,3).\n";
        let (edges, warnings) = read_with_warnings(instance);
        assert_eq!(vec![WeightedEdge::new("a", "b", 3)], edges);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_redefined_weight() {
        let instance = "cost(a,b,3).\ncost(b,c,1).\ncost(a,b,4).\n";
        let (edges, warnings) = read_with_warnings(instance);
        assert_eq!(
            vec![WeightedEdge::new("a", "b", 4), WeightedEdge::new("b", "c", 1)],
            edges
        );
        assert_eq!(1, warnings.len());
        assert_eq!(3, warnings[0].0);
    }

    #[test]
    fn test_non_integer_weight() {
        let instance = "cost(a,b,x).\ncost(b,c,1).\n";
        let (edges, warnings) = read_with_warnings(instance);
        assert_eq!(vec![WeightedEdge::new("b", "c", 1)], edges);
        assert_eq!(vec![(1, r#"ignoring fact with non-integer weight "x""#.to_string())], warnings);
    }

    #[test]
    fn test_not_anchored_facts_are_ignored() {
        let (edges, _) = read_with_warnings(" cost(a,b,3).\nfoo cost(a,b,3).\n");
        assert!(edges.is_empty());
    }

    #[test]
    fn test_empty() {
        let (edges, _) = read_with_warnings("");
        assert!(edges.is_empty());
    }
}
