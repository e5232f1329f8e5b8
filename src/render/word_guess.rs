use super::{background_color, draw_centered_text, window_should_close};
use crate::config::*;
use crate::debug_ui;
use crate::word_guess::{GuessBudget, WordGuessController};
use log::info;
use macroquad::prelude::*;

const PLAYING_HINT: &str = "Type a word to reveal letters, or a phrase with spaces. Enter to guess.";
const GAME_OVER_HINT: &str = "Press N for a new game.";

/// Draws the phrase, guesses-left and message regions plus a one-line text input
pub struct WordGuessScreen<C: WordGuessController> {
    controller: C,
    input: String,
}

impl<C: WordGuessController> WordGuessScreen<C> {
    pub fn new(controller: C) -> Self {
        WordGuessScreen {
            controller,
            input: String::new(),
        }
    }

    /// Runs until the window closes or Escape is pressed
    pub async fn run(&mut self) {
        info!("Starting word-guess loop...");
        while !window_should_close() {
            self.handle_input();
            self.draw();
            next_frame().await;
        }
        info!("Exiting word-guess.");
    }

    fn handle_input(&mut self) {
        if self.controller.state().game_over {
            // Typed characters only matter for the new-game key
            while let Some(c) = get_char_pressed() {
                if c.eq_ignore_ascii_case(&'n') {
                    self.input.clear();
                    self.controller.start_game();
                }
            }
            return;
        }

        while let Some(c) = get_char_pressed() {
            if !c.is_control() && self.input.chars().count() < MAX_INPUT_LEN {
                self.input.push(c);
            }
        }
        if is_key_pressed(KeyCode::Backspace) {
            self.input.pop();
        }
        if is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::KpEnter) {
            let guess = std::mem::take(&mut self.input);
            match self.controller.submit_guess(&guess) {
                Ok(feedback) => debug_ui!("Guess '{}': {}", guess, feedback),
                Err(e) => debug_ui!("Guess '{}' rejected: {}", guess, e),
            }
        }
    }

    fn draw(&self) {
        clear_background(background_color());
        let state = self.controller.state();
        let (w, h) = (screen_width(), screen_height());
        let cx = w / 2.0;

        draw_centered_text("GUESS THE PHRASE", cx, h * 0.12, STATUS_FONT_SIZE, GRAY);

        let phrase_color = match (state.game_over, state.game_won) {
            (true, true) => GREEN,
            (true, false) => RED,
            _ => WHITE,
        };
        draw_centered_text(&state.hidden_phrase, cx, h * 0.3, PHRASE_FONT_SIZE, phrase_color);

        let budget = GuessBudget {
            word_guesses_left: state.word_guesses_left,
            phrase_guesses_left: state.phrase_guesses_left,
        };
        draw_centered_text(&budget.to_string(), cx, h * 0.45, STATUS_FONT_SIZE, LIGHTGRAY);
        draw_centered_text(self.controller.message(), cx, h * 0.55, MESSAGE_FONT_SIZE, YELLOW);

        if state.game_over {
            draw_centered_text(GAME_OVER_HINT, cx, h * 0.75, STATUS_FONT_SIZE, LIGHTGRAY);
            return;
        }

        // Input box with a blinking caret
        let box_width = w * 0.7;
        let box_height = INPUT_FONT_SIZE as f32 * 1.6;
        let box_x = cx - box_width / 2.0;
        let box_y = h * 0.68 - box_height / 2.0;
        draw_rectangle(box_x, box_y, box_width, box_height, Color::from_rgba(51, 51, 51, 255));
        draw_rectangle_lines(box_x, box_y, box_width, box_height, 2.0, GRAY);
        let caret = if (get_time() * 2.0) as i64 % 2 == 0 { "_" } else { "" };
        let text = format!("{}{}", self.input.to_uppercase(), caret);
        let dims = measure_text(&text, None, INPUT_FONT_SIZE, 1.0);
        draw_text(
            &text,
            box_x + 12.0,
            box_y + (box_height - dims.height) / 2.0 + dims.offset_y,
            INPUT_FONT_SIZE as f32,
            WHITE,
        );

        draw_centered_text(PLAYING_HINT, cx, h * 0.8, MESSAGE_FONT_SIZE - 6, GRAY);
    }
}
