//! Interactive game loop
//!
//! Text-based play mode: prompt, parse, score, repeat until the code is
//! broken or attempts run out. Every core error is reported and re-prompted,
//! never fatal.

use crate::game::{Game, GameConfig, GameError, Outcome};
use crate::output::{print_loss, print_palette, print_turn_feedback, print_win};
use std::io::{self, Write};

/// Run the interactive play mode
///
/// An out-of-bounds configuration is corrected interactively before the
/// first game starts.
///
/// # Errors
///
/// Returns an error if reading user input fails.
pub fn run_play(mut config: GameConfig) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Mastermind - Break the Code                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    // Fix an invalid configuration by re-prompting, not by terminating
    while let Err(err) = config.validate() {
        println!("❌ {err}\n");
        config.number_of_colors = prompt_number("Number of colors in the secret [4-10]")?;
        config.max_attempts = prompt_number("Maximum attempts [10-100]")?;
    }

    println!("I picked a secret sequence of {} distinct colors.", config.number_of_colors);
    println!("Guess it within {} attempts!\n", config.max_attempts);
    println!("Enter your guess as color names separated by spaces or commas.");
    println!("Commands: 'colors' to list the palette, 'quit' to exit\n");

    loop {
        let mut game = Game::new(config).map_err(|e| e.to_string())?;
        print_palette(game.palette());

        let finished = run_game(&mut game)?;
        if !finished {
            return Ok(());
        }

        match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
            "yes" | "y" => println!("\n🔄 New game started!\n"),
            _ => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

/// Play one game to completion
///
/// Returns `Ok(true)` when the game ended (win or loss), `Ok(false)` when
/// the player quit mid-game.
fn run_game(game: &mut Game) -> Result<bool, String> {
    loop {
        let prompt = format!(
            "Guess {}/{}",
            game.attempts_used() + 1,
            game.config().max_attempts
        );
        let input = get_user_input(&prompt)?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(false);
            }
            "colors" | "palette" => {
                print_palette(game.palette());
                continue;
            }
            _ => {}
        }

        let guess = match game.parse_guess(&input) {
            Ok(guess) => guess,
            Err(GameError::UnknownColor { tokens }) => {
                println!("❌ Unknown colors: {}", tokens.join(", "));
                print_palette(game.palette());
                continue;
            }
            Err(err) => {
                println!("❌ {err}\n");
                continue;
            }
        };

        let report = game.play_guess(&guess).map_err(|e| e.to_string())?;
        print_turn_feedback(
            report.score,
            game.config().number_of_colors,
            report.attempts_used,
            game.config().max_attempts,
        );

        match report.outcome {
            Outcome::Won => {
                print_win(report.attempts_used);
                return Ok(true);
            }
            Outcome::Lost(secret) => {
                print_loss(game.palette(), &secret);
                return Ok(true);
            }
            Outcome::InProgress => {}
        }
    }
}

/// Prompt until the player enters a number
fn prompt_number(prompt: &str) -> Result<usize, String> {
    loop {
        let input = get_user_input(prompt)?;
        match input.parse::<usize>() {
            Ok(value) => return Ok(value),
            Err(_) => println!("❌ Not a number: {input}\n"),
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
