//! Mastermind - CLI
//!
//! Single-player code-breaking game with localized color palettes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use mastermind::{
    commands::run_play,
    game::GameConfig,
    output::print_palette,
    palette::{Locale, Palette},
};

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Break the hidden color code: per-round feedback on well-placed and misplaced colors",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Locale for color names: en (default) or fr
    #[arg(short, long, global = true, default_value = "en")]
    locale: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive game (default)
    Play {
        /// Number of colors in the secret (4-10)
        #[arg(short = 'c', long = "colors", default_value_t = 4)]
        colors: usize,

        /// Maximum number of attempts (10-100)
        #[arg(short = 'a', long = "attempts", default_value_t = 10)]
        attempts: usize,
    },

    /// Print the color palette for the active locale
    Palette,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let locale = Locale::from_code(&cli.locale)
        .ok_or_else(|| anyhow::anyhow!("Unknown locale '{}' (valid: en, fr)", cli.locale))?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        colors: 4,
        attempts: 10,
    });

    match command {
        Commands::Play { colors, attempts } => {
            let config = GameConfig {
                number_of_colors: colors,
                max_attempts: attempts,
                locale,
            };
            run_play(config).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Palette => {
            print_palette(&Palette::new(locale));
            Ok(())
        }
    }
}
