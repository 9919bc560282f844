//! The 52-card deck and random draws without replacement.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;

use crate::card::{Card, DECK_SIZE, RANKS, SUITS};
use crate::error::EmptyDeckError;
use crate::hand::Hand;

/// Cards remaining to be dealt.
///
/// A fresh deck holds every suit and rank combination exactly once, in
/// construction order. Randomness is applied when drawing, not when building.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full 52-card deck.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in SUITS {
            for rank in RANKS {
                cards.push(Card::new(suit, rank));
            }
        }
        Self { cards }
    }

    /// Creates a deck holding exactly the given cards.
    ///
    /// Useful for restoring a saved table or rigging a deck in tests.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Returns the remaining cards.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of remaining cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether `card` is still in the deck.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Removes a uniformly random card and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyDeckError`] if the deck has no cards left.
    pub fn draw_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Card, EmptyDeckError> {
        if self.cards.is_empty() {
            return Err(EmptyDeckError);
        }

        let index = rng.random_range(0..self.cards.len());
        let card = self.cards.remove(index);
        log::debug!("drew {card} ({} left)", self.cards.len());
        Ok(card)
    }

    /// Draws `n` cards one after another and appends them to `hand`.
    ///
    /// Every draw sees the deck already reduced by the previous ones. If the
    /// deck holds fewer than `n` cards nothing is drawn.
    ///
    /// Returns the drawn cards in draw order.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyDeckError`] if fewer than `n` cards remain.
    pub fn draw_into<R: Rng + ?Sized>(
        &mut self,
        hand: &mut Hand,
        n: usize,
        rng: &mut R,
    ) -> Result<Vec<Card>, EmptyDeckError> {
        if self.cards.len() < n {
            return Err(EmptyDeckError);
        }

        let mut drawn = Vec::with_capacity(n);
        for _ in 0..n {
            let card = self.draw_random(rng)?;
            hand.add_card(card);
            drawn.push(card);
        }
        Ok(drawn)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
