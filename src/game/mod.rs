//! Game session: one table state plus its random source.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::error::ShowdownError;
use crate::hand::{Role, Score};
use crate::judge::Outcome;
use crate::options::GameOptions;
use crate::tally::Tally;

mod actions;
pub mod state;

pub use state::{GameState, INITIAL_CARDS, Phase};

/// A single-player session at the table.
///
/// The game owns the current [`GameState`], the random source used for every
/// draw, and the running [`Tally`]. Any [`Rng`] can be injected with
/// [`Game::with_rng`]; [`Game::new`] seeds a `ChaCha8Rng`.
///
/// # Example
///
/// ```
/// use border7::{Game, GameOptions, Phase};
///
/// let mut game = Game::new(GameOptions::default(), 42);
/// game.deal().unwrap();
/// game.stand().unwrap();
/// assert_eq!(game.phase(), Phase::RoundOver);
/// let outcome = game.outcome().unwrap();
/// println!("{outcome}");
/// ```
#[derive(Debug, Clone)]
pub struct Game<R = ChaCha8Rng> {
    /// Game options.
    pub options: GameOptions,
    state: GameState,
    tally: Tally,
    rng: R,
}

impl Game<ChaCha8Rng> {
    /// Creates a new game with the given seed.
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_rng(options, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> Game<R> {
    /// Creates a new game drawing from `rng`.
    #[must_use]
    pub fn with_rng(options: GameOptions, rng: R) -> Self {
        Self {
            options,
            state: GameState::new(),
            tally: Tally::default(),
            rng,
        }
    }

    /// Returns the current table state.
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// Replaces the table state, e.g. to restore a saved round.
    pub fn set_state(&mut self, state: GameState) {
        self.state = state;
    }

    /// Returns the current phase of the round.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Returns the session tally.
    #[must_use]
    pub const fn tally(&self) -> Tally {
        self.tally
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.state.remaining_deck_size()
    }

    /// Returns whether the dealer's hole card is currently hidden.
    #[must_use]
    pub fn is_hole_hidden(&self) -> bool {
        self.options.hide_hole_card && self.state.phase() == Phase::PlayerTurn
    }

    /// Returns the dealer cards the player may see.
    ///
    /// While the hole card is hidden only the up card is returned.
    #[must_use]
    pub fn visible_dealer_cards(&self) -> &[Card] {
        let cards = self.state.dealer_hand().cards();
        if self.is_hole_hidden() {
            &cards[..cards.len().min(1)]
        } else {
            cards
        }
    }

    /// Score to display for `role`.
    ///
    /// The dealer's score counts only the up card while the hole card is
    /// hidden.
    #[must_use]
    pub fn display_score(&self, role: Role) -> Score {
        match role {
            Role::Dealer if self.is_hole_hidden() => self.state.dealer_hand().visible_score(),
            _ => self.state.display_score(role),
        }
    }

    /// Judges the current round.
    ///
    /// # Errors
    ///
    /// Returns an error if the player's turn has not ended or the round was
    /// aborted.
    pub fn outcome(&self) -> Result<Outcome, ShowdownError> {
        self.state.outcome()
    }

    /// Starts a new round with a fresh deck.
    ///
    /// A finished round is recorded in the tally and its outcome returned.
    /// An unfinished round, or one aborted after the deck ran out, is
    /// discarded without being recorded.
    pub fn next_round(&mut self) -> Option<Outcome> {
        let outcome = self.state.outcome().ok();
        if let Some(outcome) = outcome {
            self.tally.record(outcome);
        }
        self.state = GameState::new();
        outcome
    }
}
