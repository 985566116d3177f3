use thiserror::Error;

/// Everything that can go wrong while building hands or decks.
///
/// Evaluation and comparison never fail; once a `Hand` exists it is
/// always five cards.
#[derive(Error, Debug)]
pub enum PokerHandError {
    #[error("A hand must hold exactly 5 cards, got {count}")]
    InvalidHandSize { count: usize },

    #[error("Line {line}: a hand must hold exactly 5 cards, got {count}")]
    InvalidHandSizeOnLine { line: usize, count: usize },

    #[error("Invalid card token: {0:?}")]
    InvalidCardToken(String),

    #[error("Unknown hand category: {0:?}")]
    UnknownCategory(String),

    #[error("Can't deal {requested} cards, only {remaining} remain in the deck")]
    NotEnoughCards { requested: usize, remaining: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "serde")]
    #[error("Failed to serialize JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}
