// Error types: shape-tap rejections, word-guess rejections, catalog loading

use std::path::PathBuf;
use thiserror::Error;

/// Reasons a tap is refused by the shape-tap controller
#[derive(Error, Debug, PartialEq, Eq, Copy, Clone)]
pub enum TapError {
    #[error("No current instruction set")]
    NoInstruction,
    #[error("Round is over")]
    RoundOver,
    #[error("Shape is not interactive")]
    TileDisabled,
    #[error("No shape in slot {0}")]
    InvalidSlot(usize),
}

/// Reasons a guess is refused. The messages are shown to the player as-is.
#[derive(Error, Debug, PartialEq, Eq, Copy, Clone)]
pub enum GuessError {
    #[error("Please enter a guess.")]
    EmptyGuess,
    #[error("Cannot guess. The game is over.")]
    GameOver,
    #[error("No word guesses left.")]
    NoWordGuessesLeft,
    #[error("No phrase guesses left.")]
    NoPhraseGuessesLeft,
}

/// Phrase catalog loading errors
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Phrase catalog is empty")]
    Empty,
    #[error("Built-in phrase catalog asset '{0}' is missing")]
    MissingAsset(&'static str),
    #[error("Failed to read phrase file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
