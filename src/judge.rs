//! Round judgment.

use core::fmt;

use crate::hand::{BLACKJACK, Hand};

/// Result of a finished round, from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// Player wins (dealer busts or player has the higher score).
    Win,
    /// Player loses (dealer blackjack or dealer has the higher score).
    Lose,
    /// Both final scores are equal.
    Push,
    /// Player wins with a blackjack.
    Blackjack,
    /// Player busted; lost regardless of the dealer's hand.
    BustLose,
}

impl Outcome {
    /// Returns whether the player won, including by blackjack.
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::Win | Self::Blackjack)
    }

    /// Returns whether the player lost, including by busting.
    #[must_use]
    pub const fn is_loss(self) -> bool {
        matches!(self, Self::Lose | Self::BustLose)
    }

    /// Message shown to the player.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Win => "Win!",
            Self::Lose => "Lose!",
            Self::Push => "Push.",
            Self::Blackjack => "Blackjack!",
            Self::BustLose => "Bust! Lose!",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Compares finished hands and returns the player's outcome.
///
/// Checks run in a fixed order and the first match wins:
///
/// 1. player hard total over 21: [`Outcome::BustLose`], even if the dealer busted too
/// 2. equal comparison scores: [`Outcome::Push`]
/// 3. player blackjack: [`Outcome::Blackjack`]
/// 4. dealer blackjack: [`Outcome::Lose`]
/// 5. dealer over 21: [`Outcome::Win`]
/// 6. otherwise the higher comparison score wins
///
/// A player blackjack against a dealer's three-card 21 is therefore a push.
///
/// # Example
///
/// ```
/// use border7::{judge, Card, Hand, Outcome, Rank, Role, Suit};
///
/// let dealer = Hand::with_cards(
///     Role::Dealer,
///     vec![Card::new(Suit::Spades, Rank::Nine), Card::new(Suit::Clubs, Rank::Eight)],
/// );
/// let player = Hand::with_cards(
///     Role::Player,
///     vec![Card::new(Suit::Hearts, Rank::Ten), Card::new(Suit::Diamonds, Rank::Queen)],
/// );
/// assert_eq!(judge(&dealer, &player), Outcome::Win);
/// ```
#[must_use]
pub fn judge(dealer: &Hand, player: &Hand) -> Outcome {
    if player.is_bust() {
        return Outcome::BustLose;
    }

    let dealer_score = dealer.last_score();
    let player_score = player.last_score();

    if dealer_score == player_score {
        Outcome::Push
    } else if player.is_blackjack() {
        Outcome::Blackjack
    } else if dealer.is_blackjack() {
        Outcome::Lose
    } else if dealer_score > BLACKJACK || dealer_score < player_score {
        Outcome::Win
    } else {
        Outcome::Lose
    }
}
