//! Table state for a single round.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;

use crate::card::Card;
use crate::dealer::play_dealer;
use crate::deck::Deck;
use crate::error::{ActionError, DealError, ShowdownError};
use crate::hand::{Hand, Role, Score};
use crate::judge::{Outcome, judge};

/// Cards dealt to each side at the start of a round.
pub const INITIAL_CARDS: usize = 2;

/// Where a round currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Full deck, nothing dealt yet.
    Ready,
    /// Initial cards are out; the player may hit or stand.
    PlayerTurn,
    /// The player's turn has ended and the outcome can be read.
    RoundOver,
    /// The deck ran out while the dealer had to draw. The round cannot be
    /// judged and no further action is accepted.
    Aborted,
}

/// Deck, both hands, and how far the round has progressed.
///
/// A state is owned by exactly one game session. Commands either apply fully
/// or leave the state untouched, so the deck and both hands always add up to
/// the cards the round started with.
///
/// # Example
///
/// ```
/// use border7::{GameState, Phase};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let mut state = GameState::new();
/// state.init(&mut rng).unwrap();
/// state.stand(&mut rng).unwrap();
///
/// assert_eq!(state.phase(), Phase::RoundOver);
/// let _outcome = state.outcome().unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    deck: Deck,
    dealer_hand: Hand,
    player_hand: Hand,
    turn_ended: bool,
    aborted: bool,
}

impl GameState {
    /// Creates a state with a full deck and empty hands.
    #[must_use]
    pub fn new() -> Self {
        Self {
            deck: Deck::new(),
            dealer_hand: Hand::new(Role::Dealer),
            player_hand: Hand::new(Role::Player),
            turn_ended: false,
            aborted: false,
        }
    }

    /// Rebuilds a state from its parts.
    ///
    /// The caller is responsible for the parts coming from one deck; no card
    /// should appear twice across `deck` and the hands.
    #[must_use]
    pub const fn from_parts(deck: Deck, dealer_hand: Hand, player_hand: Hand, turn_ended: bool) -> Self {
        Self {
            deck,
            dealer_hand,
            player_hand,
            turn_ended,
            aborted: false,
        }
    }

    /// Returns the remaining deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer_hand
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    /// Returns the hand for `role`.
    #[must_use]
    pub const fn hand(&self, role: Role) -> &Hand {
        match role {
            Role::Dealer => &self.dealer_hand,
            Role::Player => &self.player_hand,
        }
    }

    /// Returns whether the player's turn has ended.
    #[must_use]
    pub const fn turn_ended(&self) -> bool {
        self.turn_ended
    }

    /// Returns whether the round was abandoned because the deck ran out.
    #[must_use]
    pub const fn is_aborted(&self) -> bool {
        self.aborted
    }

    /// Returns the current phase of the round.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.aborted {
            Phase::Aborted
        } else if self.turn_ended {
            Phase::RoundOver
        } else if self.dealer_hand.is_empty() && self.player_hand.is_empty() {
            Phase::Ready
        } else {
            Phase::PlayerTurn
        }
    }

    /// Number of cards left in the deck.
    #[must_use]
    pub fn remaining_deck_size(&self) -> usize {
        self.deck.len()
    }

    /// Full score of the hand for `role`.
    #[must_use]
    pub fn display_score(&self, role: Role) -> Score {
        self.hand(role).score()
    }

    /// Deals two cards to the dealer, then two to the player.
    ///
    /// # Errors
    ///
    /// Returns an error if cards were already dealt or fewer than four cards
    /// remain.
    pub fn init<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), DealError> {
        if self.phase() != Phase::Ready {
            return Err(DealError::InvalidState);
        }

        let mut next = self.clone();
        next.deck
            .draw_into(&mut next.dealer_hand, INITIAL_CARDS, rng)?;
        next.deck
            .draw_into(&mut next.player_hand, INITIAL_CARDS, rng)?;
        *self = next;
        Ok(())
    }

    /// Player action: draw one card into the player's hand.
    ///
    /// # Errors
    ///
    /// Returns an error if nothing has been dealt, the turn has already
    /// ended, or the deck is empty.
    pub fn hit<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Card, ActionError> {
        if self.phase() != Phase::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        let card = self.deck.draw_random(rng)?;
        self.player_hand.add_card(card);
        Ok(card)
    }

    /// Player action: stand, then let the dealer draw to completion.
    ///
    /// Returns the cards the dealer drew.
    ///
    /// # Errors
    ///
    /// Returns an error if nothing has been dealt, the turn has already
    /// ended, or the deck runs out before the dealer may stand.
    ///
    /// If the deck runs out, the cards stay where they were before the call
    /// and the round moves to [`Phase::Aborted`].
    pub fn stand<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Vec<Card>, ActionError> {
        if self.phase() != Phase::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        let mut deck = self.deck.clone();
        let mut dealer_hand = self.dealer_hand.clone();
        let drawn = match play_dealer(&mut deck, &mut dealer_hand, rng) {
            Ok(drawn) => drawn,
            Err(err) => {
                self.aborted = true;
                return Err(err.into());
            }
        };

        self.deck = deck;
        self.dealer_hand = dealer_hand;
        self.turn_ended = true;
        Ok(drawn)
    }

    /// Ends the player's turn without dealer play.
    pub(crate) const fn end_turn(&mut self) {
        self.turn_ended = true;
    }

    /// Judges the finished round.
    ///
    /// # Errors
    ///
    /// Returns [`ShowdownError::Aborted`] for an abandoned round and
    /// [`ShowdownError::RoundNotOver`] until the player's turn has ended.
    pub fn outcome(&self) -> Result<Outcome, ShowdownError> {
        if self.aborted {
            return Err(ShowdownError::Aborted);
        }
        if !self.turn_ended {
            return Err(ShowdownError::RoundNotOver);
        }
        Ok(judge(&self.dealer_hand, &self.player_hand))
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
