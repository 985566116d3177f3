use std::fmt;
use std::str::FromStr;

use super::{Card, PokerHandError};

/// Number of cards in every hand.
pub const HAND_SIZE: usize = 5;

/// Five cards kept in the order they were dealt (or read).
///
/// The dealt order matters: high card ties are decided position by
/// position, and flush ties look at the first card's suit.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
}

impl Hand {
    /// Create a hand from exactly five cards.
    pub const fn new(cards: [Card; HAND_SIZE]) -> Self {
        Self { cards }
    }

    /// Build a hand from a single line of card tokens.
    ///
    /// Tokens may be separated by whitespace, commas, or both.
    ///
    /// # Examples
    ///
    /// ```
    /// use poker_hand_analyzer::core::{Hand, Suit, Value};
    ///
    /// let hand = Hand::new_from_str("AD, 10D, 3C, 7H, KS").unwrap();
    /// assert_eq!(Value::Ten, hand.cards()[1].value);
    /// assert_eq!(Suit::Diamond, hand.first().suit);
    /// ```
    pub fn new_from_str(line: &str) -> Result<Self, PokerHandError> {
        let cards = line
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(str::parse::<Card>)
            .collect::<Result<Vec<_>, _>>()?;
        Self::try_from(cards.as_slice())
    }

    /// The cards in dealt order.
    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    /// The first card dealt. Its suit decides flush ties.
    pub fn first(&self) -> Card {
        self.cards[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }
}

impl TryFrom<&[Card]> for Hand {
    type Error = PokerHandError;

    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        let cards: [Card; HAND_SIZE] = cards
            .try_into()
            .map_err(|_| PokerHandError::InvalidHandSize { count: cards.len() })?;
        Ok(Self::new(cards))
    }
}

impl TryFrom<Vec<Card>> for Hand {
    type Error = PokerHandError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Self::try_from(cards.as_slice())
    }
}

impl From<[Card; HAND_SIZE]> for Hand {
    fn from(cards: [Card; HAND_SIZE]) -> Self {
        Self::new(cards)
    }
}

impl FromStr for Hand {
    type Err = PokerHandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new_from_str(s)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
