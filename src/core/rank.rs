use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use tracing::trace;

use super::{Card, Hand, PokerHandError, Value, HAND_SIZE};

/// All the hand categories, weakest first.
///
/// `FullHouse`, `FourOfAKind` and `RoyalStraightFlush` are part of the
/// strength table and can be parsed or compared, but the evaluator never
/// produces them. See [`Rankable::category`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone, Hash, Copy)]
pub enum HandCategory {
    /// No matches
    HighCard,
    /// One Card matches another.
    Pair,
    /// Two different pair of matching cards.
    TwoPair,
    /// Three of the same value.
    ThreeOfAKind,
    /// Never produced.
    Straight,
    /// Five cards of the same suit
    Flush,
    /// Never produced.
    FullHouse,
    /// Never produced.
    FourOfAKind,
    /// Ace, two, three, four, five. The suits are not checked.
    StraightFlush,
    /// Never produced.
    RoyalStraightFlush,
}

/// How two hands of the same category are separated.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TieBreak {
    /// Compare the suit of the first dealt card. The LOWER suit wins, so
    /// Diamond beats Club beats Heart beats Spade.
    LeadSuit,
    /// Compare values position by position in dealt order, higher wins.
    DealtOrder,
    /// No rule. Hands of the category are always equal to each other.
    NoTieBreak,
}

const CATEGORIES: [HandCategory; 10] = [
    HandCategory::HighCard,
    HandCategory::Pair,
    HandCategory::TwoPair,
    HandCategory::ThreeOfAKind,
    HandCategory::Straight,
    HandCategory::Flush,
    HandCategory::FullHouse,
    HandCategory::FourOfAKind,
    HandCategory::StraightFlush,
    HandCategory::RoyalStraightFlush,
];

impl HandCategory {
    /// Every category, weakest first.
    pub const fn categories() -> [Self; 10] {
        CATEGORIES
    }

    /// The strength table. This is the only place category strength is
    /// defined; ordering of `HandCategory` goes through it.
    pub const fn strength(self) -> u8 {
        match self {
            Self::RoyalStraightFlush => 10,
            Self::StraightFlush => 9,
            Self::FourOfAKind => 8,
            Self::FullHouse => 7,
            Self::Flush => 6,
            Self::Straight => 5,
            Self::ThreeOfAKind => 4,
            Self::TwoPair => 3,
            Self::Pair => 2,
            Self::HighCard => 1,
        }
    }

    pub const fn tie_break(self) -> TieBreak {
        match self {
            Self::Flush | Self::StraightFlush | Self::RoyalStraightFlush => TieBreak::LeadSuit,
            Self::HighCard => TieBreak::DealtOrder,
            // No kicker rules exist for the made hands below.
            Self::Pair
            | Self::TwoPair
            | Self::ThreeOfAKind
            | Self::Straight
            | Self::FullHouse
            | Self::FourOfAKind => TieBreak::NoTieBreak,
        }
    }

    /// Human readable label, e.g. `"Three of a Kind"`.
    pub const fn label(self) -> &'static str {
        match self {
            Self::HighCard => "High Card",
            Self::Pair => "Pair",
            Self::TwoPair => "Two Pair",
            Self::ThreeOfAKind => "Three of a Kind",
            Self::Straight => "Straight",
            Self::Flush => "Flush",
            Self::FullHouse => "Full House",
            Self::StraightFlush => "Straight Flush",
            Self::FourOfAKind => "Four of a Kind",
            Self::RoyalStraightFlush => "Royal Straight Flush",
        }
    }
}

impl Ord for HandCategory {
    fn cmp(&self, other: &Self) -> Ordering {
        self.strength().cmp(&other.strength())
    }
}

impl PartialOrd for HandCategory {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for HandCategory {
    type Err = PokerHandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CATEGORIES
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PokerHandError::UnknownCategory(s.to_string()))
    }
}

/// The only sequence recognised as a straight.
const WHEEL: [Value; 5] = [Value::Ace, Value::Two, Value::Three, Value::Four, Value::Five];
/// Ace, ten, jack, queen, king.
const ROYAL: [Value; 5] = [Value::Ace, Value::Ten, Value::Jack, Value::Queen, Value::King];

/// Anything holding exactly five cards can be put into a category.
pub trait Rankable {
    /// The five cards, in dealt order.
    fn cards(&self) -> impl Iterator<Item = Card>;

    /// Classify the five cards.
    ///
    /// The checks happen in this order:
    ///
    /// 1. The wheel. If every one of Ace, 2, 3, 4, 5 appears exactly once
    ///    the hand is a `StraightFlush`, whatever the suits are. No other
    ///    run of values counts as a straight.
    /// 2. Two values appearing twice is `TwoPair`, one value appearing
    ///    three times is `ThreeOfAKind`, one value appearing twice is
    ///    `Pair`. A full house hits the three of a kind check first.
    /// 3. All five suits equal is a `Flush`, otherwise `HighCard`. That
    ///    includes four of a kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use poker_hand_analyzer::core::{Hand, HandCategory, Rankable};
    ///
    /// let hand = Hand::new_from_str("AD AC KD QC 2H").unwrap();
    /// assert_eq!(HandCategory::Pair, hand.category());
    ///
    /// let wheel = Hand::new_from_str("AS 2D 3C 4H 5S").unwrap();
    /// assert_eq!(HandCategory::StraightFlush, wheel.category());
    /// ```
    fn category(&self) -> HandCategory {
        let mut value_to_count: [u8; 13] = [0; 13];
        let mut suit_set: u8 = 0;

        for c in self.cards() {
            value_to_count[c.value.index()] += 1;
            suit_set |= 1 << c.suit as u8;
        }

        if WHEEL.iter().all(|v| value_to_count[v.index()] == 1) {
            // Five cards can't hold the wheel and ten through king at the
            // same time, so the royal check never passes.
            if ROYAL.iter().all(|v| value_to_count[v.index()] != 0) {
                return HandCategory::RoyalStraightFlush;
            }
            return HandCategory::StraightFlush;
        }

        let pair_count = value_to_count.iter().filter(|&&c| c == 2).count();
        let three_count = value_to_count.iter().filter(|&&c| c == 3).count();

        if pair_count == 2 {
            HandCategory::TwoPair
        } else if three_count == 1 {
            HandCategory::ThreeOfAKind
        } else if pair_count == 1 {
            HandCategory::Pair
        } else if suit_set.count_ones() == 1 {
            HandCategory::Flush
        } else {
            HandCategory::HighCard
        }
    }
}

impl Rankable for Hand {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter()
    }
}

impl Rankable for [Card; HAND_SIZE] {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter().copied()
    }
}

/// A hand together with its category. This is everything the
/// comparison needs, so sorting evaluates each hand only once.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Evaluation {
    pub hand: Hand,
    pub category: HandCategory,
}

impl Evaluation {
    pub fn new(hand: Hand) -> Self {
        let category = hand.category();
        trace!(%hand, %category, "Evaluated hand");
        Self { hand, category }
    }

    /// Label for display, same as `category.label()`.
    pub fn label(&self) -> &'static str {
        self.category.label()
    }

    /// Compare by category strength, then by the category's tie break.
    /// `Greater` means `self` is the stronger hand.
    pub fn cmp_strength(&self, other: &Self) -> Ordering {
        self.category.cmp(&other.category).then_with(|| {
            match self.category.tie_break() {
                // Lower suit wins.
                TieBreak::LeadSuit => other.hand.first().suit.cmp(&self.hand.first().suit),
                TieBreak::DealtOrder => self
                    .hand
                    .iter()
                    .map(|c| c.value)
                    .cmp(other.hand.iter().map(|c| c.value)),
                TieBreak::NoTieBreak => Ordering::Equal,
            }
        })
    }
}

impl From<Hand> for Evaluation {
    fn from(hand: Hand) -> Self {
        Self::new(hand)
    }
}
