//! Rule and deck-state engine for a casual single-player blackjack table,
//! with optional `no_std` support.
//!
//! The crate provides the deck, hand scoring, the dealer's fixed drawing
//! rule, and round judgment. [`GameState`] is a plain value holding the deck
//! and both hands; [`Game`] wraps it together with an injected random source
//! and a session tally.
//!
//! # Example
//!
//! ```no_run
//! use border7::{Game, GameOptions, Role};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.deal().unwrap();
//! while game.display_score(Role::Player).best() < 17 {
//!     game.hit().unwrap();
//! }
//! # let _ = game.stand();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod dealer;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod judge;
pub mod options;
pub mod tally;

// Re-export main types
pub use card::{Card, DECK_SIZE, RANKS, Rank, SUITS, Suit};
pub use dealer::{DEALER_STANDS_AT, DealerState, play_dealer};
pub use deck::Deck;
pub use error::{
    ActionError, DealError, DeckExhaustedError, EmptyDeckError, InvalidCardError,
    InvalidRankError, ShowdownError,
};
pub use game::{Game, GameState, Phase};
pub use hand::{BLACKJACK, Hand, Role, Score};
pub use judge::{Outcome, judge};
pub use options::GameOptions;
pub use tally::Tally;

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct ReadmeDoctests;
