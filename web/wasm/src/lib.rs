use border7::{Card, Game, GameOptions, Outcome, Phase, Role, Score, Suit, Tally};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            game: Game::new(GameOptions::default(), seed as u64),
        }
    }

    pub fn reset(&mut self, seed: u32) {
        self.game = Game::new(self.game.options, seed as u64);
    }

    pub fn set_hide_hole_card(&mut self, hide: bool) {
        self.game.options = self.game.options.with_hide_hole_card(hide);
    }

    pub fn deal(&mut self) -> Result<(), JsValue> {
        self.game.deal().map_err(js_err)
    }

    pub fn hit(&mut self) -> Result<(), JsValue> {
        self.game.hit().map(|_| ()).map_err(js_err)
    }

    pub fn stand(&mut self) -> Result<(), JsValue> {
        self.game.stand().map(|_| ()).map_err(js_err)
    }

    pub fn outcome(&self) -> Result<String, JsValue> {
        self.game
            .outcome()
            .map(|outcome| outcome_to_str(outcome).to_string())
            .map_err(js_err)
    }

    pub fn next_round(&mut self) -> Option<String> {
        self.game
            .next_round()
            .map(|outcome| outcome_to_str(outcome).to_string())
    }

    pub fn remaining_deck_size(&self) -> u32 {
        self.game.cards_remaining() as u32
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let state = self.game.state();
        let hole_hidden = self.game.is_hole_hidden();

        let dealer_cards = state
            .dealer_hand()
            .cards()
            .iter()
            .enumerate()
            .map(|(index, card)| {
                if hole_hidden && index > 0 {
                    None
                } else {
                    Some(card_to_js(*card))
                }
            })
            .collect();

        let snapshot = Snapshot {
            phase: phase_to_str(self.game.phase()),
            dealer: JsHand {
                cards: dealer_cards,
                score: JsScore::from(self.game.display_score(Role::Dealer)),
            },
            player: JsHand {
                cards: state
                    .player_hand()
                    .cards()
                    .iter()
                    .map(|card| Some(card_to_js(*card)))
                    .collect(),
                score: JsScore::from(self.game.display_score(Role::Player)),
            },
            hole_hidden,
            outcome: self.game.outcome().ok().map(outcome_to_str),
            message: self.game.outcome().ok().map(Outcome::message),
            tally: JsTally::from(self.game.tally()),
            cards_remaining: self.game.cards_remaining() as u32,
        };

        to_js_value(&snapshot)
    }
}

#[derive(Serialize)]
struct Snapshot {
    phase: &'static str,
    dealer: JsHand,
    player: JsHand,
    hole_hidden: bool,
    outcome: Option<&'static str>,
    message: Option<&'static str>,
    tally: JsTally,
    cards_remaining: u32,
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    rank: &'static str,
    label: String,
}

#[derive(Serialize)]
struct JsHand {
    cards: Vec<Option<JsCard>>,
    score: JsScore,
}

#[derive(Serialize)]
struct JsScore {
    low: u16,
    high: Option<u16>,
    best: u16,
    text: String,
}

impl From<Score> for JsScore {
    fn from(score: Score) -> Self {
        Self {
            low: score.low(),
            high: score.high(),
            best: score.best(),
            text: score.to_string(),
        }
    }
}

#[derive(Serialize)]
struct JsTally {
    wins: u32,
    losses: u32,
    pushes: u32,
    blackjacks: u32,
    busts: u32,
}

impl From<Tally> for JsTally {
    fn from(tally: Tally) -> Self {
        Self {
            wins: tally.wins,
            losses: tally.losses,
            pushes: tally.pushes,
            blackjacks: tally.blackjacks,
            busts: tally.busts,
        }
    }
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        suit: suit_to_str(card.suit),
        rank: card.rank.symbol(),
        label: card.to_string(),
    }
}

fn suit_to_str(suit: Suit) -> &'static str {
    match suit {
        Suit::Spades => "Spades",
        Suit::Clubs => "Clubs",
        Suit::Hearts => "Hearts",
        Suit::Diamonds => "Diamonds",
    }
}

fn phase_to_str(phase: Phase) -> &'static str {
    match phase {
        Phase::Ready => "Ready",
        Phase::PlayerTurn => "PlayerTurn",
        Phase::RoundOver => "RoundOver",
        Phase::Aborted => "Aborted",
    }
}

fn outcome_to_str(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Win => "Win",
        Outcome::Lose => "Lose",
        Outcome::Push => "Push",
        Outcome::Blackjack => "Blackjack",
        Outcome::BustLose => "BustLose",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
