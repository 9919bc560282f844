//! Hands and hand scoring.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;

/// Highest total a hand can reach without busting.
pub const BLACKJACK: u16 = 21;

/// Extra value an ace adds when it is counted as 11 instead of 1.
const ACE_BONUS: u16 = 10;

/// Which side of the table a hand belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    /// The dealer's hand.
    Dealer,
    /// The player's hand.
    Player,
}

/// Displayable score of a hand.
///
/// A soft hand carries two values, "low | high", where the high value counts
/// one ace as 11. Every other hand carries a single value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Score {
    low: u16,
    high: Option<u16>,
}

impl Score {
    const fn single(value: u16) -> Self {
        Self {
            low: value,
            high: None,
        }
    }

    const fn soft(total: u16) -> Self {
        Self {
            low: total,
            high: Some(total + ACE_BONUS),
        }
    }

    /// The low (or only) value.
    #[must_use]
    pub const fn low(&self) -> u16 {
        self.low
    }

    /// The high value of a soft score.
    #[must_use]
    pub const fn high(&self) -> Option<u16> {
        self.high
    }

    /// The value used when comparing hands: the high value if soft, the only
    /// value otherwise.
    #[must_use]
    pub const fn best(&self) -> u16 {
        match self.high {
            Some(high) => high,
            None => self.low,
        }
    }

    /// Returns whether the score carries a low/high pair.
    #[must_use]
    pub const fn is_soft(&self) -> bool {
        self.high.is_some()
    }

    /// Number of values in the score (1 or 2).
    #[must_use]
    pub const fn len(&self) -> usize {
        if self.high.is_some() { 2 } else { 1 }
    }

    /// Always false; a score has at least one value.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// The values of the score, low first.
    #[must_use]
    pub fn to_vec(&self) -> Vec<u16> {
        match self.high {
            Some(high) => alloc::vec![self.low, high],
            None => alloc::vec![self.low],
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.high {
            Some(high) => write!(f, "{} | {high}", self.low),
            None => write!(f, "{}", self.low),
        }
    }
}

/// Hard total of `cards`: every ace counts 1.
#[must_use]
pub fn hard_total(cards: &[Card]) -> u16 {
    cards.iter().map(|card| u16::from(card.rank.value())).sum()
}

/// A dealer's or player's hand.
///
/// Card order only matters for display; the first two cards are the initial
/// deal. Scoring ignores order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hand {
    role: Role,
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new(role: Role) -> Self {
        Self {
            role,
            cards: Vec::new(),
        }
    }

    /// Creates a hand holding the given cards.
    #[must_use]
    pub const fn with_cards(role: Role, cards: Vec<Card>) -> Self {
        Self { role, cards }
    }

    /// Returns who the hand belongs to.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the first card dealt, shown face up for the dealer.
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Sum of card values with every ace counted as 1.
    #[must_use]
    pub fn total(&self) -> u16 {
        hard_total(&self.cards)
    }

    /// Returns whether any card is an ace.
    #[must_use]
    pub fn has_ace(&self) -> bool {
        self.cards.iter().any(Card::is_ace)
    }

    /// Returns whether the hand is exactly an ace and a ten-valued card.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        match self.cards.as_slice() {
            [a, b] => (a.is_ace() && b.is_ten_valued()) || (b.is_ace() && a.is_ten_valued()),
            _ => false,
        }
    }

    /// Returns whether one ace can count as 11 without reaching 21.
    ///
    /// A blackjack is never soft. At most one ace is ever promoted, no matter
    /// how many the hand holds.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        if self.is_blackjack() || !self.has_ace() {
            return false;
        }
        self.total() + ACE_BONUS < BLACKJACK
    }

    /// Returns whether the hard total exceeds 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.total() > BLACKJACK
    }

    /// Displayable score: `21` for a blackjack, `total | total + 10` for a
    /// soft hand, the hard total otherwise.
    #[must_use]
    pub fn score(&self) -> Score {
        if self.is_blackjack() {
            Score::single(BLACKJACK)
        } else if self.is_soft() {
            Score::soft(self.total())
        } else {
            Score::single(self.total())
        }
    }

    /// Value used to compare finished hands.
    #[must_use]
    pub fn last_score(&self) -> u16 {
        self.score().best()
    }

    /// Score of the up card alone, shown while the dealer's hole card is hidden.
    #[must_use]
    pub fn visible_score(&self) -> Score {
        self.cards.first().map_or(Score::single(0), |card| {
            Self::with_cards(self.role, alloc::vec![*card]).score()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    fn hand(cards: &[(Suit, Rank)]) -> Hand {
        Hand::with_cards(
            Role::Player,
            cards.iter().map(|&(s, r)| Card::new(s, r)).collect(),
        )
    }

    #[test]
    fn blackjack_in_either_order() {
        let ace_first = hand(&[(Suit::Spades, Rank::Ace), (Suit::Clubs, Rank::King)]);
        let ace_last = hand(&[(Suit::Hearts, Rank::Ten), (Suit::Diamonds, Rank::Ace)]);
        assert!(ace_first.is_blackjack());
        assert!(ace_last.is_blackjack());
        assert_eq!(ace_first.score().to_vec(), [21]);
        assert!(!ace_first.is_soft());
    }

    #[test]
    fn three_cards_totalling_21_are_not_blackjack() {
        let h = hand(&[
            (Suit::Spades, Rank::Ace),
            (Suit::Clubs, Rank::Five),
            (Suit::Hearts, Rank::Five),
        ]);
        assert!(!h.is_blackjack());
        assert_eq!(h.total(), 11);
        // 11 + 10 == 21 is not below 21, so the hand is hard.
        assert!(!h.is_soft());
        assert_eq!(h.score().to_vec(), [11]);
        assert_eq!(h.last_score(), 11);
    }

    #[test]
    fn soft_hand_scores_as_pair() {
        let h = hand(&[(Suit::Spades, Rank::Ace), (Suit::Clubs, Rank::Six)]);
        assert!(h.is_soft());
        let score = h.score();
        assert_eq!(score.to_vec(), [7, 17]);
        assert_eq!(score.to_string(), "7 | 17");
        assert_eq!(h.last_score(), 17);
    }

    #[test]
    fn only_one_ace_is_promoted() {
        let h = hand(&[
            (Suit::Spades, Rank::Ace),
            (Suit::Clubs, Rank::Ace),
            (Suit::Hearts, Rank::Ace),
        ]);
        assert_eq!(h.total(), 3);
        assert_eq!(h.score().to_vec(), [3, 13]);
    }

    #[test]
    fn hard_hand_and_bust() {
        let h = hand(&[
            (Suit::Spades, Rank::Ten),
            (Suit::Clubs, Rank::Five),
            (Suit::Hearts, Rank::Eight),
        ]);
        assert_eq!(h.total(), 23);
        assert!(h.is_bust());
        assert_eq!(h.score().to_string(), "23");
    }

    #[test]
    fn long_hand_total_is_not_capped() {
        let kings = [(Suit::Spades, Rank::King); 30];
        let h = hand(&kings);
        assert_eq!(h.total(), 300);
        assert_eq!(h.score().to_vec(), [300]);
        assert!(h.is_bust());
    }

    #[test]
    fn visible_score_uses_up_card_only() {
        let h = hand(&[(Suit::Spades, Rank::Ace), (Suit::Clubs, Rank::Nine)]);
        assert_eq!(h.visible_score().to_vec(), [1, 11]);
        assert_eq!(Hand::new(Role::Dealer).visible_score().to_vec(), [0]);
    }

    #[test]
    fn soft_pair_never_exceeds_21() {
        for first in crate::card::RANKS {
            for second in crate::card::RANKS {
                let h = hand(&[(Suit::Spades, first), (Suit::Clubs, second)]);
                let score = h.score();
                if let Some(high) = score.high() {
                    assert_eq!(high, score.low() + 10);
                    assert!(high <= 21);
                }
            }
        }
    }
}
