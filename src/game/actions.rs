extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;

use crate::card::Card;
use crate::error::{ActionError, DealError};

use super::{Game, Phase};

impl<R: Rng> Game<R> {
    /// Deals the initial two cards to the dealer and the player.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has already been dealt or the deck is
    /// too short.
    pub fn deal(&mut self) -> Result<(), DealError> {
        self.state.init(&mut self.rng)?;
        if let Some(up) = self.state.dealer_hand().up_card() {
            log::info!(
                "dealt: dealer shows {up}, player has {}",
                self.state.player_hand().score()
            );
        }
        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// If the card busts the player and
    /// [`end_turn_on_bust`](crate::GameOptions::end_turn_on_bust) is set, the
    /// turn ends without the dealer drawing.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck is empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        let card = self.state.hit(&mut self.rng)?;

        if self.options.end_turn_on_bust && self.state.player_hand().is_bust() {
            self.state.end_turn();
            log::info!("player busts with {}", self.state.player_hand().total());
        }

        Ok(card)
    }

    /// Player action: Stand (dealer plays out their hand).
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck runs out
    /// while the dealer must draw. In the latter case the round is
    /// [`Phase::Aborted`]; call [`Game::next_round`] to start over.
    pub fn stand(&mut self) -> Result<Vec<Card>, ActionError> {
        let drawn = self.state.stand(&mut self.rng)?;
        debug_assert_eq!(self.state.phase(), Phase::RoundOver);

        if let Ok(outcome) = self.state.outcome() {
            log::info!(
                "round over: dealer {} vs player {}: {outcome:?}",
                self.state.dealer_hand().last_score(),
                self.state.player_hand().last_score()
            );
        }
        Ok(drawn)
    }
}
