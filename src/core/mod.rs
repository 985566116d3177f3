/// Card, suit and value.
mod card;
/// Export `Card`, `Suit`, and `Value`
pub use self::card::{Card, Suit, Value};

/// Errors for everything in this crate.
mod error;
pub use self::error::PokerHandError;

/// Five card hands.
mod hand;
pub use self::hand::{Hand, HAND_SIZE};

/// A deck to shuffle and deal from.
mod deck;
pub use self::deck::{Deck, DEFAULT_NUM_HANDS};

/// Hand categories and the evaluator.
mod rank;
pub use self::rank::{Evaluation, HandCategory, Rankable, TieBreak};

/// Comparing and ordering hands.
mod showdown;
pub use self::showdown::{compare, rank_descending, sort_descending};
