//! Fixed dealer drawing rule.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DeckExhaustedError;
use crate::hand::Hand;

/// Total the dealer must reach before standing.
pub const DEALER_STANDS_AT: u16 = 17;

/// Dealer policy state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealerState {
    /// The dealer is below the threshold and must take another card.
    Drawing,
    /// The dealer has reached the threshold and stops.
    Standing,
}

impl DealerState {
    /// Evaluates the rule against the dealer's current hand.
    ///
    /// Any ace in the hand adds 10 to the hard total before comparing with
    /// [`DEALER_STANDS_AT`].
    #[must_use]
    pub fn evaluate(hand: &Hand) -> Self {
        if must_draw(hand) {
            Self::Drawing
        } else {
            Self::Standing
        }
    }
}

/// Returns whether the dealer has to take another card.
#[must_use]
pub fn must_draw(hand: &Hand) -> bool {
    let bonus = if hand.has_ace() { 10 } else { 0 };
    hand.total() + bonus < DEALER_STANDS_AT
}

/// Draws for the dealer until the policy says stand.
///
/// Returns the cards drawn, in order.
///
/// # Errors
///
/// Returns [`DeckExhaustedError`] if the deck runs out while the dealer still
/// has to draw. Cards drawn before that point stay in `hand`.
pub fn play_dealer<R: Rng + ?Sized>(
    deck: &mut Deck,
    hand: &mut Hand,
    rng: &mut R,
) -> Result<Vec<Card>, DeckExhaustedError> {
    let mut drawn = Vec::new();

    while DealerState::evaluate(hand) == DealerState::Drawing {
        let card = deck.draw_random(rng).map_err(|_| {
            log::warn!("deck exhausted with dealer at {}", hand.total());
            DeckExhaustedError {
                dealer_total: hand.total(),
            }
        })?;
        hand.add_card(card);
        drawn.push(card);
    }

    log::debug!(
        "dealer stands on {} after drawing {} card(s)",
        hand.last_score(),
        drawn.len()
    );
    Ok(drawn)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::card::{Rank, Suit};
    use crate::hand::Role;

    fn dealer(cards: &[Rank]) -> Hand {
        Hand::with_cards(
            Role::Dealer,
            cards.iter().map(|&r| Card::new(Suit::Spades, r)).collect(),
        )
    }

    #[test]
    fn threshold_counts_any_ace_as_eleven() {
        assert_eq!(
            DealerState::evaluate(&dealer(&[Rank::Ten, Rank::Six])),
            DealerState::Drawing
        );
        assert_eq!(
            DealerState::evaluate(&dealer(&[Rank::Ten, Rank::Seven])),
            DealerState::Standing
        );
        // Soft 17 stands.
        assert_eq!(
            DealerState::evaluate(&dealer(&[Rank::Ace, Rank::Six])),
            DealerState::Standing
        );
        // The bonus applies even when the ace can no longer be 11.
        assert_eq!(
            DealerState::evaluate(&dealer(&[Rank::Ace, Rank::Five, Rank::Ten])),
            DealerState::Standing
        );
        assert_eq!(
            DealerState::evaluate(&dealer(&[Rank::Ace, Rank::Five])),
            DealerState::Drawing
        );
    }

    #[test]
    fn standing_dealer_draws_nothing() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut deck = Deck::new();
        let mut hand = dealer(&[Rank::King, Rank::Nine]);

        let drawn = play_dealer(&mut deck, &mut hand, &mut rng).unwrap();
        assert!(drawn.is_empty());
        assert_eq!(deck.len(), 52);
    }

    #[test]
    fn dealer_always_reaches_threshold() {
        for seed in 0..200 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut deck = Deck::new();
            let mut hand = Hand::new(Role::Dealer);
            deck.draw_into(&mut hand, 2, &mut rng).unwrap();

            play_dealer(&mut deck, &mut hand, &mut rng).unwrap();
            let bonus = if hand.has_ace() { 10 } else { 0 };
            assert!(hand.total() + bonus >= DEALER_STANDS_AT);
            assert_eq!(deck.len() + hand.len(), 52);
        }
    }

    #[test]
    fn empty_deck_surfaces_exhaustion() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut deck = Deck::from_cards(alloc::vec![Card::new(Suit::Hearts, Rank::Two)]);
        let mut hand = dealer(&[Rank::Four, Rank::Five]);

        let err = play_dealer(&mut deck, &mut hand, &mut rng).unwrap_err();
        assert_eq!(err, DeckExhaustedError { dealer_total: 11 });
        assert!(deck.is_empty());
        assert_eq!(hand.len(), 3);
    }
}
