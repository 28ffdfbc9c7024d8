//! Scanning of solver outputs into sequences of answers.

mod log_line;
pub use log_line::LineClassifier;
pub use log_line::LogLine;
pub use log_line::SOLVING_START_MARKER;

mod scanner_state;
pub use scanner_state::Answer;
pub use scanner_state::ScanContext;
pub use scanner_state::ScannerState;
pub use scanner_state::Transition;
pub use scanner_state::NOT_OPTIMIZING_VALUE;
pub use scanner_state::NOT_TIMESTAMPED_ANSWER_TIME;

mod solution_scanner;
pub use solution_scanner::SolutionScanner;
