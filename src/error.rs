//! Error types for deck and game operations.

extern crate alloc;

use alloc::string::{String, ToString};

use thiserror::Error;

/// A draw was attempted on an empty deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot draw from an empty deck")]
pub struct EmptyDeckError;

/// The dealer had to keep drawing but the deck ran out.
///
/// The round cannot be resolved; start a new round with a fresh deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("deck exhausted while the dealer must draw (dealer total {dealer_total})")]
pub struct DeckExhaustedError {
    /// Hard total of the dealer's hand when the deck ran out.
    pub dealer_total: u16,
}

/// A rank symbol outside `A`, `2`..`10`, `J`, `Q`, `K`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid rank {rank:?}")]
pub struct InvalidRankError {
    /// The rejected rank text.
    pub rank: String,
}

impl InvalidRankError {
    pub(crate) fn new(rank: &str) -> Self {
        Self {
            rank: rank.to_string(),
        }
    }
}

/// Errors that can occur while parsing a card from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidCardError {
    /// The input was empty.
    #[error("empty card text")]
    Empty,
    /// The trailing character is not a suit symbol.
    #[error("invalid suit {0:?}")]
    Suit(char),
    /// The rank part is malformed.
    #[error(transparent)]
    Rank(#[from] InvalidRankError),
}

/// Errors that can occur during the initial deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Cards have already been dealt for this round.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// Not enough cards in the deck.
    #[error(transparent)]
    EmptyDeck(#[from] EmptyDeckError),
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Cards have not been dealt yet, or the player's turn has already ended.
    #[error("invalid game state for this action")]
    InvalidState,
    /// No cards left in the deck.
    #[error(transparent)]
    EmptyDeck(#[from] EmptyDeckError),
    /// The dealer could not finish drawing.
    #[error(transparent)]
    DeckExhausted(#[from] DeckExhaustedError),
}

/// Errors that can occur when asking for the round outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// The player's turn has not ended yet.
    #[error("the round is not over")]
    RoundNotOver,
    /// The deck ran out during dealer play and the round was abandoned.
    #[error("the round was aborted: deck exhausted")]
    Aborted,
}
