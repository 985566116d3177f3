//! Everything around the evaluator: reading test decks and building the
//! report that gets printed.

/// Reading hands from text.
mod input;
pub use self::input::{parse_hands, read_hands_file};

/// Evaluated and ordered hands, ready to print.
mod report;
pub use self::report::{AnalysisReport, HandReport};
