use crate::ConversionError;
use anyhow::{anyhow, Result};
use lazy_static::lazy_static;
use regex::Regex;

const FACT_ARG_PATTERN: &str = r"(\w+)";

lazy_static! {
    static ref PREDICATE_NAME_PATTERN: Regex = Regex::new(r"^\w+$").unwrap();
}

/// A matcher for the facts of a single predicate with a fixed arity.
///
/// Facts are written `name(arg1,arg2)` or `name(arg1,arg2,arg3)`, where each argument is made of word characters.
/// All the matches are anchored at the beginning of the input; a malformed fact just does not match.
///
/// # Example
///
/// ```
/// # use aspgv::facts::PredicateMatcher;
/// let matcher = PredicateMatcher::new("cost", 3).unwrap();
/// assert_eq!(Some(vec!["a", "b", "4"]), matcher.match_fact("cost(a,b,4)."));
/// assert_eq!(None, matcher.match_fact("edge(a,b)."));
/// ```
pub struct PredicateMatcher {
    name: String,
    arity: usize,
    fact_pattern: Regex,
    line_pattern: Regex,
}

impl PredicateMatcher {
    /// Builds a new matcher for the predicate with the given name and arity.
    ///
    /// Only arities 2 and 3 are supported; any other arity returns a [`ConversionError::UnsupportedArity`] error.
    pub fn new(name: &str, arity: usize) -> Result<Self> {
        if arity != 2 && arity != 3 {
            return Err(ConversionError::UnsupportedArity(arity).into());
        }
        if !PREDICATE_NAME_PATTERN.is_match(name) {
            return Err(anyhow!(r#"invalid predicate name "{}""#, name));
        }
        let args = vec![FACT_ARG_PATTERN; arity].join(",");
        let fact = format!(r"{}\({}\)", regex::escape(name), args);
        let fact_pattern = Regex::new(&format!("^{}", fact))?;
        let uncaptured_fact = fact.replace(FACT_ARG_PATTERN, r"\w+");
        let line_pattern = Regex::new(&format!(
            r"^{}(?:\s+{})*\s*$",
            uncaptured_fact, uncaptured_fact
        ))?;
        Ok(PredicateMatcher {
            name: name.to_string(),
            arity,
            fact_pattern,
            line_pattern,
        })
    }

    /// Returns the name of the predicate.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the arity of the predicate.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Matches a fact at the beginning of the input and returns its arguments.
    pub fn match_fact<'a>(&self, input: &'a str) -> Option<Vec<&'a str>> {
        self.fact_pattern.captures(input).map(|c| {
            c.iter()
                .skip(1)
                .flatten()
                .map(|m| m.as_str())
                .collect()
        })
    }

    /// Returns `true` iff the line is made of one or more space-separated facts of this predicate.
    pub fn is_fact_line(&self, line: &str) -> bool {
        self.line_pattern.is_match(line)
    }

    /// Returns the arguments of all the facts of a fact line, in order.
    ///
    /// If the line is not a fact line (see [`is_fact_line`](Self::is_fact_line)), `None` is returned.
    pub fn match_fact_line<'a>(&self, line: &'a str) -> Option<Vec<Vec<&'a str>>> {
        if !self.is_fact_line(line) {
            return None;
        }
        Some(
            line.split_whitespace()
                .filter_map(|token| self.match_fact(token))
                .collect(),
        )
    }
}
