use clap::{Parser, ValueEnum};
use log::{error, info};
use macroquad::prelude::*;
use parlor::config::{WINDOW_HEIGHT, WINDOW_WIDTH};
use parlor::error::CatalogError;
use parlor::logging;
use parlor::render::{ShapeTapScreen, WordGuessScreen};
use parlor::shape_tap::ShapeTapGame;
use parlor::word_guess::{PhraseCatalog, WordGuessGame};
use ::rand::SeedableRng;
use ::rand::rngs::StdRng;
use std::path::PathBuf;
use std::process;

#[derive(ValueEnum, Clone, Copy, Debug)]
enum GameKind {
    /// Tap the shape the instruction asks for
    ShapeTap,
    /// Reveal a hidden phrase with word and phrase guesses
    WordGuess,
}

// --- Command Line Arguments ---
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Which game to play
    #[arg(value_enum)]
    game: GameKind,

    /// Phrase file for word-guess, one phrase per line (default: built-in catalog)
    #[arg(long)]
    phrases: Option<PathBuf>,

    /// Seed for shuffles, instructions and phrase selection
    #[arg(long)]
    seed: Option<u64>,

    /// Debug filter to specify log topics (e.g., "tap,guess,ui")
    #[arg(long)]
    debug_filter: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Parlor".to_owned(),
        window_width: WINDOW_WIDTH,
        window_height: WINDOW_HEIGHT,
        window_resizable: true,
        ..Default::default()
    }
}

fn load_catalog(path: Option<&PathBuf>) -> Result<PhraseCatalog, CatalogError> {
    match path {
        Some(path) => {
            info!("Loading phrases from {}", path.display());
            PhraseCatalog::from_file(path)
        }
        None => PhraseCatalog::builtin(),
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let args = Args::parse();

    if let Err(e) = logging::init_logger(logging::parse_level(&args.log_level), args.debug_filter) {
        eprintln!("Warning: Failed to initialize logger: {}", e);
    }

    info!("Starting {:?}", args.game);

    match args.game {
        GameKind::ShapeTap => match args.seed {
            Some(seed) => {
                ShapeTapScreen::new(ShapeTapGame::with_rng(StdRng::seed_from_u64(seed)))
                    .run()
                    .await
            }
            None => ShapeTapScreen::new(ShapeTapGame::new()).run().await,
        },
        GameKind::WordGuess => {
            let catalog = match load_catalog(args.phrases.as_ref()) {
                Ok(catalog) => catalog,
                Err(e) => {
                    error!("{}", e);
                    process::exit(1);
                }
            };
            info!("{} phrases loaded.", catalog.len());
            match args.seed {
                Some(seed) => {
                    WordGuessScreen::new(WordGuessGame::with_rng(catalog, StdRng::seed_from_u64(seed)))
                        .run()
                        .await
                }
                None => WordGuessScreen::new(WordGuessGame::new(catalog)).run().await,
            }
        }
    }
}
