//! Card types and deck constants.

use core::fmt;
use core::str::FromStr;

use crate::error::{InvalidCardError, InvalidRankError};

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    /// Spades (♠).
    Spades,
    /// Clubs (♣).
    Clubs,
    /// Hearts (❤).
    Hearts,
    /// Diamonds (♦).
    Diamonds,
}

impl Suit {
    /// Returns the symbol printed on the card face.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Spades => '♠',
            Self::Clubs => '♣',
            Self::Hearts => '❤',
            Self::Diamonds => '♦',
        }
    }

    /// Parses a suit symbol. `♥` is accepted as an alias for `❤`.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '♠' => Some(Self::Spades),
            '♣' => Some(Self::Clubs),
            '❤' | '♥' => Some(Self::Hearts),
            '♦' => Some(Self::Diamonds),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rank {
    /// Ace.
    Ace,
    /// 2.
    Two,
    /// 3.
    Three,
    /// 4.
    Four,
    /// 5.
    Five,
    /// 6.
    Six,
    /// 7.
    Seven,
    /// 8.
    Eight,
    /// 9.
    Nine,
    /// 10.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// Counting value of the rank.
    ///
    /// Aces count 1 at this level, face cards count 10, and numeric ranks
    /// count their pip value. Promoting an ace to 11 is a property of the
    /// hand, see [`Hand::score`](crate::Hand::score).
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Ace => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten | Self::Jack | Self::Queen | Self::King => 10,
        }
    }

    /// Returns the symbol printed on the card face.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
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

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Rank {
    type Err = InvalidRankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RANKS
            .iter()
            .copied()
            .find(|rank| rank.symbol() == s)
            .ok_or_else(|| InvalidRankError::new(s))
    }
}

/// Counting value of a rank given by its face symbol.
///
/// # Errors
///
/// Returns [`InvalidRankError`] if `rank` is not one of `A`, `2`..`10`, `J`,
/// `Q`, `K`.
///
/// # Example
///
/// ```
/// assert_eq!(border7::card::rank_value("A"), Ok(1));
/// assert_eq!(border7::card::rank_value("Q"), Ok(10));
/// assert!(border7::card::rank_value("11").is_err());
/// ```
pub fn rank_value(rank: &str) -> Result<u8, InvalidRankError> {
    rank.parse::<Rank>().map(Rank::value)
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Returns whether the card counts 10 (a ten or a face card).
    #[must_use]
    pub const fn is_ten_valued(&self) -> bool {
        self.rank.value() == 10
    }

    /// Returns whether the card is an ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        matches!(self.rank, Rank::Ace)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = InvalidCardError;

    /// Parses `"<rank><suit>"`, e.g. `"A♠"` or `"10❤"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let suit_symbol = chars.next_back().ok_or(InvalidCardError::Empty)?;
        let suit = Suit::from_symbol(suit_symbol).ok_or(InvalidCardError::Suit(suit_symbol))?;
        let rank = chars.as_str().parse::<Rank>()?;
        Ok(Self::new(suit, rank))
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// All suits, in deck construction order.
pub const SUITS: [Suit; 4] = [Suit::Spades, Suit::Clubs, Suit::Hearts, Suit::Diamonds];

/// All ranks, in deck construction order.
pub const RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];
