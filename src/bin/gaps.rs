//! Text front end for Gaps.
//!
//! Prints the board, reads a card such as `10H` or `qs`, and plays it.
//! Stuck rounds are reset automatically until a move is possible again.

use clap::Parser;
use gaps::{Card, GameConfig, GameSession, MoveOutcome, RoundStatus};
use std::io::Write;

#[derive(Parser)]
#[command(author, version, about = "Play Gaps solitaire in the terminal", long_about = None)]
struct Args {
    /// Seed for the deal; random if omitted.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    let mut session = GameSession::new(GameConfig::new(seed))?;
    println!("seed {}", seed);

    loop {
        while session.status() == RoundStatus::Stuck {
            println!("No more moves!");
            println!("{}", session.board());
            let reset = session.next_round()?;
            println!(
                "Starting round {} with {} cards in place ({} reshuffled)",
                session.round(),
                session.cards_in_place(),
                reset.discarded
            );
        }
        if session.status() == RoundStatus::Won {
            break;
        }

        println!("{}", session.board());
        println!("You have {} cards in place", session.cards_in_place());
        print!("Enter card to move: ");
        std::io::stdout().flush()?;

        let ref mut input = String::new();
        if std::io::stdin().read_line(input)? == 0 {
            return Ok(());
        }
        match input.trim() {
            "quit" | "exit" => return Ok(()),
            text => match text.parse::<Card>() {
                Err(e) => eprintln!("{}", e),
                Ok(card) => match session.play(card) {
                    Err(e) => eprintln!("{}", e),
                    Ok(MoveOutcome::Moved { record, .. }) => println!("{}", record),
                    Ok(MoveOutcome::Blocked { lower: Some(lower) }) => {
                        println!("{} has to follow {} at {}", card, lower.card, lower.position)
                    }
                    Ok(MoveOutcome::Blocked { lower: None }) => {
                        println!("{} has nowhere to go", card)
                    }
                },
            },
        }
    }

    println!("{}", session.board());
    println!("You won in {} rounds with {} points!", session.round(), session.score());
    Ok(())
}
