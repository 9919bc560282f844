//! CLI table example.
//!
//! Run with `RUST_LOG=debug` to see every draw.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use border7::{Card, Game, GameOptions, Phase, Role};

fn main() {
    env_logger::init();
    println!("Border 7 blackjack (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(GameOptions::default(), seed);

    loop {
        if let Err(err) = game.deal() {
            println!("Deal error: {err}");
            break;
        }

        while game.phase() == Phase::PlayerTurn {
            print_table(&game);

            let result = match prompt_line("[h]it [s]tand: ").as_str() {
                "h" | "hit" => game.hit().map(|card| println!("You draw {card}.")),
                "s" | "stand" => game.stand().map(|drawn| {
                    if !drawn.is_empty() {
                        println!("Dealer draws {}.", format_cards(&drawn));
                    }
                }),
                "q" | "quit" => return finish(&mut game),
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            if let Err(err) = result {
                println!("Action error: {err}");
                println!("This round cannot be finished. Starting over.");
                break;
            }
        }

        if game.phase() == Phase::RoundOver {
            print_table(&game);
            if let Ok(outcome) = game.outcome() {
                println!("{outcome}");
            }
        }

        game.next_round();
        println!("{}", game.tally());

        match prompt_line("Play again? (y/n): ").as_str() {
            "y" | "yes" | "" => {}
            _ => return finish(&mut game),
        }
    }
}

fn finish(game: &mut Game) {
    game.next_round();
    println!("Thank you for playing!");
    println!("{}", game.tally());
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn print_table(game: &Game) {
    println!("\nDeck: {} cards remaining", game.cards_remaining());

    let mut dealer = format_cards(game.visible_dealer_cards());
    if game.is_hole_hidden() {
        dealer.push_str(" ??");
    }
    println!(
        "Dealer: {dealer} (score {})",
        game.display_score(Role::Dealer)
    );
    println!(
        "You:    {} (score {})\n",
        format_cards(game.state().player_hand().cards()),
        game.display_score(Role::Player)
    );
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(no cards)".to_string();
    }
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
