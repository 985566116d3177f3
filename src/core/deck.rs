use std::fmt;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use super::{Card, Hand, PokerHandError, Suit, Value, HAND_SIZE};

/// Default number of hands dealt at a table.
pub const DEFAULT_NUM_HANDS: usize = 6;

/// An ordered pile of cards. The top of the deck is the end of the vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// How many cards are left.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The remaining cards, bottom first.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Shuffle the remaining cards in place.
    ///
    /// # Examples
    ///
    /// ```
    /// use poker_hand_analyzer::core::Deck;
    /// use rand::{SeedableRng, rngs::StdRng};
    ///
    /// let mut a = Deck::default();
    /// let mut b = Deck::default();
    /// a.shuffle(&mut StdRng::seed_from_u64(42));
    /// b.shuffle(&mut StdRng::seed_from_u64(42));
    /// assert_eq!(a, b);
    /// ```
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Take the top card.
    pub fn deal_card(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Deal `num_hands` five card hands round robin: every hand gets one
    /// card per pass, five passes.
    ///
    /// Fails without touching the deck when there aren't enough cards.
    pub fn deal(&mut self, num_hands: usize) -> Result<Vec<Hand>, PokerHandError> {
        let remaining = self.cards.len();
        let requested = num_hands.saturating_mul(HAND_SIZE);
        if requested > remaining {
            return Err(PokerHandError::NotEnoughCards {
                requested,
                remaining,
            });
        }

        let mut piles: Vec<Vec<Card>> = vec![Vec::with_capacity(HAND_SIZE); num_hands];
        for _ in 0..HAND_SIZE {
            for pile in piles.iter_mut() {
                // Length was checked above.
                if let Some(card) = self.cards.pop() {
                    pile.push(card);
                }
            }
        }
        debug!(num_hands, remaining = self.cards.len(), "Dealt hands");

        piles.into_iter().map(Hand::try_from).collect()
    }
}

/// A fresh, unshuffled 52 card deck. Suits run Diamond, Club, Heart,
/// Spade and within each suit Ace through King.
impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .into_iter()
            .flat_map(|s| Value::values().into_iter().map(move |v| Card::new(v, s)))
            .collect();
        Self { cards }
    }
}

impl fmt::Display for Deck {
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
