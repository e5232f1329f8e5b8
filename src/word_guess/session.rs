use super::WordGuessController;
use super::catalog::PhraseCatalog;
use super::mask::{RevealMask, RevealedLetters};
use crate::config::{MAX_PHRASE_GUESSES, MAX_WORD_GUESSES};
use crate::debug_guess;
use crate::error::GuessError;
use log::info;
use rand::rngs::ThreadRng;
use rand::{Rng, thread_rng};
use std::fmt;

pub const DEFAULT_LOSS_MESSAGE: &str = "Game Over. You didn't guess the phrase.";
const OUT_OF_PHRASE_GUESSES: &str = "Wrong phrase. No phrase guesses left.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    Playing,
    Won,
    Lost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    pub over: bool,
    pub won: bool,
}

/// Remaining attempts of each guess type. Counts saturate at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessBudget {
    pub word_guesses_left: u32,
    pub phrase_guesses_left: u32,
}

impl Default for GuessBudget {
    fn default() -> Self {
        GuessBudget {
            word_guesses_left: MAX_WORD_GUESSES,
            phrase_guesses_left: MAX_PHRASE_GUESSES,
        }
    }
}

impl GuessBudget {
    fn spend_word(&mut self) {
        self.word_guesses_left = self.word_guesses_left.saturating_sub(1);
    }

    fn spend_phrase(&mut self) {
        self.phrase_guesses_left = self.phrase_guesses_left.saturating_sub(1);
    }
}

impl fmt::Display for GuessBudget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Word Guesses: {}, Phrase Guesses: {}",
            self.word_guesses_left, self.phrase_guesses_left
        )
    }
}

/// Message produced by an accepted guess or a state transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Started,
    LettersRevealed,
    NoNewLetters,
    WordGuessesExhausted,
    WrongPhrase,
    Won,
    Lost(String),
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feedback::Started => f.write_str("New game started! Guess a word."),
            Feedback::LettersRevealed => f.write_str("Correct letters revealed!"),
            Feedback::NoNewLetters => f.write_str("No new letters revealed with that word."),
            Feedback::WordGuessesExhausted => {
                f.write_str("No word guesses left. Try guessing the phrase.")
            }
            Feedback::WrongPhrase => f.write_str("Incorrect phrase. Try again."),
            Feedback::Won => f.write_str("Congratulations! You guessed the phrase!"),
            Feedback::Lost(message) => f.write_str(message),
        }
    }
}

/// Read-only snapshot for display and inspection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordGuessState {
    pub current_phrase: String,
    pub hidden_phrase: String,
    pub word_guesses_left: u32,
    pub phrase_guesses_left: u32,
    pub game_over: bool,
    pub game_won: bool,
}

/// Round controller for the word-guess game
#[derive(Debug)]
pub struct WordGuessGame<R: Rng = ThreadRng> {
    catalog: PhraseCatalog,
    phrase: String,
    mask: RevealMask,
    revealed: RevealedLetters,
    budget: GuessBudget,
    status: RoundStatus,
    message: String,
    rng: R,
}

impl WordGuessGame<ThreadRng> {
    pub fn new(catalog: PhraseCatalog) -> Self {
        Self::with_rng(catalog, thread_rng())
    }
}

impl<R: Rng> WordGuessGame<R> {
    /// Creates a game and starts its first round
    pub fn with_rng(catalog: PhraseCatalog, rng: R) -> Self {
        let mut game = WordGuessGame {
            catalog,
            phrase: String::new(),
            mask: RevealMask::hidden(""),
            revealed: RevealedLetters::new(),
            budget: GuessBudget::default(),
            status: RoundStatus::Playing,
            message: String::new(),
            rng,
        };
        game.start_game();
        game
    }

    /// Picks a new phrase and resets the mask, revealed letters and both budgets
    pub fn start_game(&mut self) -> Feedback {
        self.phrase = self.catalog.choose(&mut self.rng).to_string();
        self.mask = RevealMask::hidden(&self.phrase);
        self.revealed.clear();
        self.budget = GuessBudget::default();
        self.status = RoundStatus::Playing;
        info!("New word-guess round, {} characters", self.phrase.len());
        debug_guess!("Phrase: {}", self.phrase);
        self.record(Feedback::Started)
    }

    /// Routes free-form input to the word or phrase path.
    /// Input containing a space, or any input once word guesses run out, is a phrase guess.
    pub fn submit_guess(&mut self, input: &str) -> Result<Feedback, GuessError> {
        let guess = input.trim();
        if guess.is_empty() {
            return self.reject(GuessError::EmptyGuess);
        }
        if self.budget.word_guesses_left == 0 || guess.contains(' ') {
            self.handle_phrase_guess(guess)
        } else {
            self.handle_word_guess(guess)
        }
    }

    /// Reveals every phrase character found in `word`, punctuation and digits included.
    /// Costs one word guess unless it wins.
    pub fn handle_word_guess(&mut self, word: &str) -> Result<Feedback, GuessError> {
        if self.status != RoundStatus::Playing {
            return self.reject(GuessError::GameOver);
        }
        if self.budget.word_guesses_left == 0 {
            return self.reject(GuessError::NoWordGuessesLeft);
        }
        let word = word.trim().to_uppercase();
        if word.is_empty() {
            return self.reject(GuessError::EmptyGuess);
        }

        let mut newly_revealed = 0;
        for letter in word.chars().filter(|c| !c.is_whitespace()) {
            if self.phrase.contains(letter) && self.revealed.insert(letter) {
                newly_revealed += 1;
            }
        }
        debug_guess!("Word '{}' revealed {} new letter(s)", word, newly_revealed);

        if newly_revealed > 0 {
            self.mask.reveal(&self.phrase, &self.revealed);
            if self.mask.is_complete(&self.phrase) {
                return Ok(self.win_game());
            }
        }

        self.budget.spend_word();
        let feedback = if self.budget.word_guesses_left == 0 {
            Feedback::WordGuessesExhausted
        } else if newly_revealed > 0 {
            Feedback::LettersRevealed
        } else {
            Feedback::NoNewLetters
        };
        Ok(self.record(feedback))
    }

    /// Compares `guess` against the whole phrase. A miss costs one phrase guess.
    pub fn handle_phrase_guess(&mut self, guess: &str) -> Result<Feedback, GuessError> {
        if self.status != RoundStatus::Playing {
            return self.reject(GuessError::GameOver);
        }
        if self.budget.phrase_guesses_left == 0 {
            return self.reject(GuessError::NoPhraseGuessesLeft);
        }
        let guess = guess.trim().to_uppercase();
        if guess.is_empty() {
            return self.reject(GuessError::EmptyGuess);
        }

        if guess == self.phrase {
            return Ok(self.win_game());
        }

        self.budget.spend_phrase();
        debug_guess!(
            "Wrong phrase '{}', {} phrase guess(es) left",
            guess,
            self.budget.phrase_guesses_left
        );
        if self.budget.phrase_guesses_left == 0 {
            Ok(self.lose_game(OUT_OF_PHRASE_GUESSES))
        } else {
            Ok(self.record(Feedback::WrongPhrase))
        }
    }

    /// Ends the round as a win and reveals the whole phrase
    pub fn win_game(&mut self) -> Feedback {
        self.status = RoundStatus::Won;
        self.mask.reveal_all(&self.phrase);
        info!("Phrase guessed: {}", self.phrase);
        self.record(Feedback::Won)
    }

    /// Ends the round as a loss. The phrase stays hidden.
    pub fn lose_game(&mut self, message: &str) -> Feedback {
        self.status = RoundStatus::Lost;
        info!("Round lost: {}", message);
        self.record(Feedback::Lost(message.to_string()))
    }

    pub fn state(&self) -> WordGuessState {
        WordGuessState {
            current_phrase: self.phrase.clone(),
            hidden_phrase: self.mask.joined(),
            word_guesses_left: self.budget.word_guesses_left,
            phrase_guesses_left: self.budget.phrase_guesses_left,
            game_over: self.status != RoundStatus::Playing,
            game_won: self.status == RoundStatus::Won,
        }
    }

    pub fn status(&self) -> RoundStatus {
        self.status
    }

    pub fn outcome(&self) -> GameOutcome {
        GameOutcome {
            over: self.status != RoundStatus::Playing,
            won: self.status == RoundStatus::Won,
        }
    }

    pub fn budget(&self) -> GuessBudget {
        self.budget
    }

    pub fn mask(&self) -> &RevealMask {
        &self.mask
    }

    pub fn revealed_letters(&self) -> &RevealedLetters {
        &self.revealed
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    fn record(&mut self, feedback: Feedback) -> Feedback {
        self.message = feedback.to_string();
        feedback
    }

    fn reject(&mut self, err: GuessError) -> Result<Feedback, GuessError> {
        debug_guess!("Guess rejected: {}", err);
        self.message = err.to_string();
        Err(err)
    }
}

impl<R: Rng> WordGuessController for WordGuessGame<R> {
    fn start_game(&mut self) {
        WordGuessGame::start_game(self);
    }

    fn submit_guess(&mut self, input: &str) -> Result<Feedback, GuessError> {
        WordGuessGame::submit_guess(self, input)
    }

    fn state(&self) -> WordGuessState {
        WordGuessGame::state(self)
    }

    fn message(&self) -> &str {
        WordGuessGame::message(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn game_with(phrase: &str) -> WordGuessGame<StdRng> {
        let catalog = PhraseCatalog::new([phrase]).unwrap();
        WordGuessGame::with_rng(catalog, StdRng::seed_from_u64(3))
    }

    #[test]
    fn test_start_game_resets_everything() {
        let game = game_with("PAC MAN");
        let state = game.state();
        assert_eq!(state.current_phrase, "PAC MAN");
        assert_eq!(state.hidden_phrase, "_ _ _   _ _ _");
        assert_eq!(state.word_guesses_left, 3);
        assert_eq!(state.phrase_guesses_left, 3);
        assert!(!state.game_over);
        assert!(!state.game_won);
        assert_eq!(game.message(), "New game started! Guess a word.");
    }

    #[test]
    fn test_pac_man_letter_guess() {
        let mut game = game_with("PAC MAN");
        assert_eq!(game.submit_guess("a"), Ok(Feedback::LettersRevealed));
        assert_eq!(game.mask().to_string(), "_A_ _A_");
        assert_eq!(game.mask().len(), "PAC MAN".len());
        assert_eq!(game.budget().word_guesses_left, 2);
        assert_eq!(game.budget().phrase_guesses_left, 3);
    }

    #[test]
    fn test_word_reveals_many_letters() {
        let mut game = game_with("SUPER MARIO BROS");
        assert_eq!(game.submit_guess("ROSE"), Ok(Feedback::LettersRevealed));
        assert_eq!(game.mask().to_string(), "S__ER __R_O _ROS");
        let revealed: Vec<char> = game.revealed_letters().iter().copied().collect();
        assert_eq!(revealed, vec!['E', 'O', 'R', 'S']);
    }

    #[test]
    fn test_miss_still_costs_a_word_guess() {
        let mut game = game_with("PAC MAN");
        assert_eq!(game.submit_guess("xyz"), Ok(Feedback::NoNewLetters));
        assert_eq!(game.budget().word_guesses_left, 2);
        // Repeating already revealed letters reveals nothing new
        game.submit_guess("PA").unwrap();
        assert_eq!(game.submit_guess("AP"), Ok(Feedback::WordGuessesExhausted));
        assert_eq!(game.budget().word_guesses_left, 0);
        assert_eq!(game.status(), RoundStatus::Playing);
    }

    #[test]
    fn test_word_guess_can_win() {
        let mut game = game_with("PAC MAN");
        assert_eq!(game.submit_guess("PACMAN"), Ok(Feedback::Won));
        assert_eq!(game.status(), RoundStatus::Won);
        // Winning does not spend the guess
        assert_eq!(game.budget().word_guesses_left, 3);
        assert_eq!(game.state().hidden_phrase, "P A C   M A N");
    }

    #[test]
    fn test_exact_phrase_wins() {
        let mut game = game_with("SUPER MARIO BROS");
        game.submit_guess("zzz").unwrap();
        assert_eq!(game.submit_guess("super mario bros"), Ok(Feedback::Won));
        let state = game.state();
        assert!(state.game_over);
        assert!(state.game_won);
        assert!(game.mask().is_complete("SUPER MARIO BROS"));
        assert_eq!(game.outcome(), GameOutcome { over: true, won: true });
        assert_eq!(game.message(), "Congratulations! You guessed the phrase!");
    }

    #[test]
    fn test_three_wrong_phrases_lose() {
        let mut game = game_with("PAC MAN");
        assert_eq!(game.submit_guess("SUPER MARIO"), Ok(Feedback::WrongPhrase));
        assert_eq!(game.submit_guess("DONKEY KONG"), Ok(Feedback::WrongPhrase));
        assert_eq!(
            game.submit_guess("TETRIS ATTACK"),
            Ok(Feedback::Lost("Wrong phrase. No phrase guesses left.".to_string()))
        );
        assert_eq!(game.status(), RoundStatus::Lost);
        assert_eq!(game.outcome(), GameOutcome { over: true, won: false });
        assert_eq!(game.budget().phrase_guesses_left, 0);
        // The phrase stays hidden on a loss
        assert_eq!(game.mask().to_string(), "___ ___");
    }

    #[test]
    fn test_phrase_with_space_routes_to_phrase_path() {
        let mut game = game_with("PAC MAN");
        game.submit_guess("SUPER MARIO").unwrap();
        assert_eq!(game.budget().word_guesses_left, 3);
        assert_eq!(game.budget().phrase_guesses_left, 2);
    }

    #[test]
    fn test_no_word_guesses_forces_phrase_path() {
        let mut game = game_with("PAC MAN");
        for word in ["X", "Y", "Z"] {
            game.submit_guess(word).unwrap();
        }
        assert_eq!(game.budget().word_guesses_left, 0);
        assert_eq!(game.status(), RoundStatus::Playing);

        // A single word now counts as a phrase guess
        assert_eq!(game.submit_guess("PACMAN"), Ok(Feedback::WrongPhrase));
        assert_eq!(game.budget().phrase_guesses_left, 2);
        assert_eq!(game.submit_guess("pac man"), Ok(Feedback::Won));
    }

    #[test]
    fn test_empty_input_is_free() {
        let mut game = game_with("PAC MAN");
        assert_eq!(game.submit_guess(""), Err(GuessError::EmptyGuess));
        assert_eq!(game.submit_guess("   \t"), Err(GuessError::EmptyGuess));
        assert_eq!(game.budget(), GuessBudget::default());
        assert_eq!(game.message(), "Please enter a guess.");
    }

    #[test]
    fn test_guesses_rejected_after_game_over() {
        let mut game = game_with("PAC MAN");
        game.submit_guess("PAC MAN").unwrap();
        assert_eq!(game.submit_guess("A"), Err(GuessError::GameOver));
        assert_eq!(game.handle_phrase_guess("PAC MAN"), Err(GuessError::GameOver));
        assert_eq!(game.handle_word_guess("A"), Err(GuessError::GameOver));
        assert_eq!(game.budget(), GuessBudget::default());
    }

    #[test]
    fn test_direct_word_guess_without_budget() {
        let mut game = game_with("PAC MAN");
        for word in ["X", "Y", "Z"] {
            game.handle_word_guess(word).unwrap();
        }
        assert_eq!(game.handle_word_guess("A"), Err(GuessError::NoWordGuessesLeft));
        assert_eq!(game.budget().word_guesses_left, 0);
    }

    #[test]
    fn test_start_game_after_loss() {
        let mut game = game_with("PAC MAN");
        game.lose_game(DEFAULT_LOSS_MESSAGE);
        assert_eq!(game.message(), DEFAULT_LOSS_MESSAGE);
        assert_eq!(game.submit_guess("A"), Err(GuessError::GameOver));

        assert_eq!(game.start_game(), Feedback::Started);
        assert_eq!(game.status(), RoundStatus::Playing);
        assert!(game.revealed_letters().is_empty());
        assert_eq!(game.submit_guess("A"), Ok(Feedback::LettersRevealed));
    }

    #[test]
    fn test_phrase_budget_floors_at_zero() {
        let mut game = game_with("PAC MAN");
        for guess in ["ONE TWO", "THREE FOUR", "FIVE SIX"] {
            game.submit_guess(guess).unwrap();
        }
        assert_eq!(game.status(), RoundStatus::Lost);
        assert_eq!(game.budget().phrase_guesses_left, 0);

        assert_eq!(game.handle_phrase_guess("SEVEN EIGHT"), Err(GuessError::GameOver));
        assert_eq!(game.handle_phrase_guess("PAC MAN"), Err(GuessError::GameOver));
        assert_eq!(game.budget().phrase_guesses_left, 0);
        assert_eq!(game.status(), RoundStatus::Lost);
    }

    #[test]
    fn test_spend_saturates_at_zero() {
        let mut budget = GuessBudget {
            word_guesses_left: 0,
            phrase_guesses_left: 0,
        };
        budget.spend_word();
        budget.spend_phrase();
        assert_eq!(budget.word_guesses_left, 0);
        assert_eq!(budget.phrase_guesses_left, 0);
    }

    #[test]
    fn test_punctuation_in_phrase_can_be_revealed() {
        let mut game = game_with("PAC-MAN");
        assert_eq!(game.state().hidden_phrase, "_ _ _ _ _ _ _");
        assert_eq!(game.submit_guess("-"), Ok(Feedback::LettersRevealed));
        assert_eq!(game.state().hidden_phrase, "_ _ _ - _ _ _");
        assert_eq!(game.submit_guess("PACMAN"), Ok(Feedback::Won));
        assert_eq!(game.budget().word_guesses_left, 2);
    }

    #[test]
    fn test_digits_complete_the_mask() {
        let mut game = game_with("FINAL FANTASY 7");
        assert_eq!(game.submit_guess("FINALTY7S"), Ok(Feedback::Won));
        assert_eq!(game.state().hidden_phrase, "F I N A L   F A N T A S Y   7");
    }

    #[test]
    fn test_budget_display() {
        let mut game = game_with("PAC MAN");
        game.submit_guess("Q").unwrap();
        game.submit_guess("WRONG GUESS").unwrap();
        assert_eq!(game.budget().to_string(), "Word Guesses: 2, Phrase Guesses: 2");
    }

    #[test]
    fn test_controller_trait_surface() {
        let mut game = game_with("PAC MAN");
        let controller: &mut dyn WordGuessController = &mut game;
        controller.submit_guess("M").unwrap();
        assert_eq!(controller.state().hidden_phrase, "_ _ _   M _ _");
        assert_eq!(controller.message(), "Correct letters revealed!");
        controller.start_game();
        assert_eq!(controller.state().word_guesses_left, 3);
    }
}
