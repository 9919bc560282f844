//! Running totals across rounds of one session.

use core::fmt;

use crate::judge::Outcome;

/// Win/lose counts for a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tally {
    /// Rounds won, blackjacks included.
    pub wins: u32,
    /// Rounds lost, busts included.
    pub losses: u32,
    /// Rounds pushed.
    pub pushes: u32,
    /// Rounds won with a blackjack.
    pub blackjacks: u32,
    /// Rounds lost by busting.
    pub busts: u32,
}

impl Tally {
    /// Records a finished round.
    pub const fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Blackjack => {
                self.wins += 1;
                self.blackjacks += 1;
            }
            Outcome::Lose => self.losses += 1,
            Outcome::BustLose => {
                self.losses += 1;
                self.busts += 1;
            }
            Outcome::Push => self.pushes += 1,
        }
    }

    /// Number of rounds recorded.
    #[must_use]
    pub const fn rounds(&self) -> u32 {
        self.wins + self.losses + self.pushes
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Win: {} Lose: {}", self.wins, self.losses)?;
        if self.pushes > 0 {
            write!(f, " Push: {}", self.pushes)?;
        }
        Ok(())
    }
}
