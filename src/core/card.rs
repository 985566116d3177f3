use std::fmt;
use std::str::FromStr;

use super::PokerHandError;

/// Card rank. Aces are always low in this model, there is no ace
/// high value.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[repr(u8)]
pub enum Value {
    Ace = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
}

/// All the values from lowest to highest.
const VALUES: [Value; 13] = [
    Value::Ace,
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
];

impl Value {
    /// Get all of the `Value`'s, lowest first.
    pub const fn values() -> [Self; 13] {
        VALUES
    }

    /// Zero based position of this value. Ace is 0, King is 12.
    pub const fn index(self) -> usize {
        self as usize - 1
    }

    /// Parse the rank part of a card token.
    ///
    /// Ten can be written either as `10` or `T`. Letters are case
    /// insensitive.
    ///
    /// # Examples
    ///
    /// ```
    /// use poker_hand_analyzer::core::Value;
    ///
    /// assert_eq!(Some(Value::Ten), Value::from_token("10"));
    /// assert_eq!(Some(Value::Ten), Value::from_token("t"));
    /// assert_eq!(None, Value::from_token("1"));
    /// ```
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_uppercase().as_str() {
            "A" => Some(Self::Ace),
            "2" => Some(Self::Two),
            "3" => Some(Self::Three),
            "4" => Some(Self::Four),
            "5" => Some(Self::Five),
            "6" => Some(Self::Six),
            "7" => Some(Self::Seven),
            "8" => Some(Self::Eight),
            "9" => Some(Self::Nine),
            "10" | "T" => Some(Self::Ten),
            "J" => Some(Self::Jack),
            "Q" => Some(Self::Queen),
            "K" => Some(Self::King),
            _ => None,
        }
    }

    /// Text used when printing a card.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
        }
    }
}

/// Card suit.
///
/// The order here (Diamond < Club < Heart < Spade) is only ever used to
/// break ties between flush type hands. It never affects the category
/// of a hand.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[repr(u8)]
pub enum Suit {
    Diamond = 0,
    Club = 1,
    Heart = 2,
    Spade = 3,
}

/// All of the `Suit`'s in deck order.
const SUITS: [Suit; 4] = [Suit::Diamond, Suit::Club, Suit::Heart, Suit::Spade];

impl Suit {
    /// Provide all the Suit's that there are.
    pub const fn suits() -> [Self; 4] {
        SUITS
    }

    /// Parse a suit letter. Case insensitive.
    ///
    /// # Examples
    ///
    /// ```
    /// use poker_hand_analyzer::core::Suit;
    ///
    /// assert_eq!(Some(Suit::Heart), Suit::from_char('h'));
    /// assert_eq!(None, Suit::from_char('x'));
    /// ```
    pub fn from_char(s: char) -> Option<Self> {
        match s.to_ascii_uppercase() {
            'D' => Some(Self::Diamond),
            'C' => Some(Self::Club),
            'H' => Some(Self::Heart),
            'S' => Some(Self::Spade),
            _ => None,
        }
    }

    /// The suit letter used when printing a card.
    pub const fn to_char(self) -> char {
        match self {
            Self::Diamond => 'D',
            Self::Club => 'C',
            Self::Heart => 'H',
            Self::Spade => 'S',
        }
    }
}

/// The main struct of this library.
/// This is a carrier for Suit and Value combined.
///
/// Cards are plain values. Nothing stops the same card from showing up in
/// two hands, or twice in one hand.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
pub struct Card {
    /// The face value of this card.
    pub value: Value,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    pub const fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value.as_str(), self.suit.to_char())
    }
}

/// Parse a card token such as `AS`, `10d` or `Tc`.
///
/// The last character is the suit, everything before it is the rank.
impl FromStr for Card {
    type Err = PokerHandError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let invalid = || PokerHandError::InvalidCardToken(token.to_string());

        let suit_char = token.chars().last().ok_or_else(invalid)?;
        let rank = &token[..token.len() - suit_char.len_utf8()];

        let value = Value::from_token(rank).ok_or_else(invalid)?;
        let suit = Suit::from_char(suit_char).ok_or_else(invalid)?;
        Ok(Card::new(value, suit))
    }
}
