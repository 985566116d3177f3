//! Five card poker hand analyzer.
//!
//! Hands are put into a category (Pair, Flush, ...) and ordered by a fixed
//! strength table. Ties are broken by the suit of the first card for flush
//! type hands and by dealt order values for high card hands.
//!
//! The evaluator is deliberately narrow. The only straight it knows is
//! Ace-2-3-4-5, which it calls a straight flush regardless of suits, and it
//! never produces Full House, Four of a Kind or Royal Straight Flush.
//!
//! ```
//! use poker_hand_analyzer::core::{sort_descending, Hand, HandCategory, Rankable};
//!
//! let hands = vec![
//!     Hand::new_from_str("2D 2C 9H 9S 5D").unwrap(),
//!     Hand::new_from_str("AD KD QD JD 10D").unwrap(),
//! ];
//! let sorted = sort_descending(&hands);
//! assert_eq!(HandCategory::Flush, sorted[0].category());
//! ```

/// Cards, hands, the evaluator and ordering. Everything here is pure.
pub mod core;

/// Reading test decks and building reports.
pub mod analyzer;
