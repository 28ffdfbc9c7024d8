use lazy_static::lazy_static;
use regex::Regex;

/// The elapsed time returned for lines of logs that are not timestamped.
pub const DUMMY_ELAPSED_TIME: &str = "0.0";

lazy_static! {
    static ref TIMESTAMPED_LINE_PATTERN: Regex = Regex::new(r"^(\d+\.\d+)\s+(.*)$").unwrap();
}

/// Splits a line of a solver log into its elapsed time and the remaining text.
///
/// If the log is timestamped, the line must begin with a floating-point number of seconds followed by whitespaces.
/// If it does not, `None` is returned and the line must be considered as a non-data line.
///
/// If the log is not timestamped, the elapsed time is [`DUMMY_ELAPSED_TIME`] and the whole line is returned.
///
/// # Example
///
/// ```
/// # use aspgv::facts::split_timestamp;
/// assert_eq!(Some(("1.25", "Answer: 1")), split_timestamp("1.25 Answer: 1", true));
/// assert_eq!(None, split_timestamp("Answer: 1", true));
/// assert_eq!(Some(("0.0", "Answer: 1")), split_timestamp("Answer: 1", false));
/// ```
pub fn split_timestamp(line: &str, is_timestamped: bool) -> Option<(&str, &str)> {
    if !is_timestamped {
        return Some((DUMMY_ELAPSED_TIME, line));
    }
    TIMESTAMPED_LINE_PATTERN.captures(line).and_then(|c| {
        let time = c.get(1)?.as_str();
        let remainder = c.get(2)?.as_str();
        Some((time, remainder))
    })
}
