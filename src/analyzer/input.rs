use std::path::Path;

use tracing::{debug, instrument};

use crate::core::{Hand, PokerHandError};

/// Parse a test deck: one hand per line.
///
/// Blank lines and lines starting with `#` are skipped. A line with the
/// wrong number of cards is reported with its 1-based line number.
///
/// # Examples
///
/// ```
/// use poker_hand_analyzer::analyzer::parse_hands;
///
/// let hands = parse_hands("# table one\n2D 2C 9H 9S 5D\n\nAD, KD, QD, JD, 10D\n").unwrap();
/// assert_eq!(2, hands.len());
/// ```
pub fn parse_hands(text: &str) -> Result<Vec<Hand>, PokerHandError> {
    text.lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line_no, line)| {
            Hand::new_from_str(line).map_err(|e| match e {
                PokerHandError::InvalidHandSize { count } => PokerHandError::InvalidHandSizeOnLine {
                    line: line_no,
                    count,
                },
                other => other,
            })
        })
        .collect()
}

/// Read and parse a test deck file.
#[instrument(level = "debug")]
pub fn read_hands_file(path: &Path) -> Result<Vec<Hand>, PokerHandError> {
    let text = std::fs::read_to_string(path)?;
    let hands = parse_hands(&text)?;
    debug!(num_hands = hands.len(), "Read hands");
    Ok(hands)
}
