//! Matchers for the facts and the timestamps found in solver and grounder outputs.

mod predicate_matcher;
pub use predicate_matcher::PredicateMatcher;

mod timestamp;
pub use timestamp::split_timestamp;
pub use timestamp::DUMMY_ELAPSED_TIME;
