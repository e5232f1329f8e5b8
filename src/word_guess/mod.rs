// Word-guess game: phrase catalog, reveal mask, guess budgets and the round controller

pub mod catalog;
pub mod mask;
pub mod session;

pub use catalog::PhraseCatalog;
pub use mask::{RevealMask, RevealedLetters};
pub use session::{Feedback, GameOutcome, GuessBudget, RoundStatus, WordGuessGame, WordGuessState};

use crate::error::GuessError;

/// Operations and read-only state the presentation layer uses to drive the word-guess game.
pub trait WordGuessController {
    fn start_game(&mut self);
    fn submit_guess(&mut self, input: &str) -> Result<Feedback, GuessError>;
    fn state(&self) -> WordGuessState;
    /// Text for the message area: the latest feedback or rejection
    fn message(&self) -> &str;
}
