use super::ShapeTapController;
use super::instruction::Instruction;
use super::layout::ShapeLayout;
use super::shape::Shape;
use crate::debug_tap;
use crate::error::TapError;
use log::{error, info};
use rand::rngs::ThreadRng;
use rand::{Rng, thread_rng};

/// Everything the screen needs to draw the current round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    pub score: u32,
    pub layout: ShapeLayout,
    pub instruction: Option<Instruction>,
    pub is_over: bool,
}

/// Result of an accepted tap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    Correct { score: u32 },
    Missed { final_score: u32 },
}

/// Round controller for the shape-tap game. Owns its RNG so seeded games are reproducible.
#[derive(Debug)]
pub struct ShapeTapGame<R: Rng = ThreadRng> {
    round: RoundState,
    rng: R,
}

impl ShapeTapGame<ThreadRng> {
    /// Creates an idle game. Call `start_round` before accepting taps.
    pub fn new() -> Self {
        Self::with_rng(thread_rng())
    }
}

impl Default for ShapeTapGame<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> ShapeTapGame<R> {
    pub fn with_rng(mut rng: R) -> Self {
        let layout = ShapeLayout::shuffled(&mut rng);
        ShapeTapGame {
            round: RoundState {
                score: 0,
                layout,
                instruction: None,
                is_over: false,
            },
            rng,
        }
    }

    pub fn round(&self) -> &RoundState {
        &self.round
    }

    /// Resets the score, lays out fresh shapes and issues a new instruction
    pub fn start_round(&mut self) {
        self.round.score = 0;
        self.round.is_over = false;
        self.next_board();
        info!("Round started: {}", self.instruction_label());
    }

    /// Replaces the current instruction with a random one and returns it
    pub fn generate_instruction(&mut self) -> Instruction {
        let instruction = Instruction::random(&mut self.rng);
        self.round.instruction = Some(instruction);
        debug_tap!("Current instruction: {:?}", instruction);
        instruction
    }

    /// Judges a tap on `shape` against the current instruction
    pub fn handle_tap(&mut self, shape: Shape) -> Result<TapOutcome, TapError> {
        if self.round.is_over {
            debug_tap!("Ignoring tap on {} after game over", shape.name());
            return Err(TapError::RoundOver);
        }
        let Some(instruction) = self.round.instruction else {
            error!("No current instruction set, ignoring tap on {}", shape.name());
            return Err(TapError::NoInstruction);
        };

        if instruction.is_satisfied_by(shape) {
            self.round.score += 1;
            info!("Correct tap! Score: {}", self.round.score);
            self.next_board();
            Ok(TapOutcome::Correct {
                score: self.round.score,
            })
        } else {
            info!(
                "Incorrect tap on {} under '{}'. Final score: {}",
                shape.name(),
                instruction,
                self.round.score
            );
            self.game_over();
            Ok(TapOutcome::Missed {
                final_score: self.round.score,
            })
        }
    }

    /// Taps whatever shape sits in `slot`, honoring disabled tiles
    pub fn tap_slot(&mut self, slot: usize) -> Result<TapOutcome, TapError> {
        let tile = *self
            .round
            .layout
            .tile(slot)
            .ok_or(TapError::InvalidSlot(slot))?;
        if !tile.interactive {
            return Err(TapError::TileDisabled);
        }
        self.handle_tap(tile.shape)
    }

    /// Clears the game-over state and starts over from zero
    pub fn try_again(&mut self) {
        info!("Try again");
        self.start_round();
    }

    fn next_board(&mut self) {
        self.round.layout = ShapeLayout::shuffled(&mut self.rng);
        debug_tap!("Layout: {:?}", self.round.layout.shapes());
        self.generate_instruction();
    }

    fn game_over(&mut self) {
        self.round.is_over = true;
        self.round.layout.disable();
    }

    fn instruction_label(&self) -> String {
        self.round
            .instruction
            .map(|i| i.label())
            .unwrap_or_default()
    }
}

impl<R: Rng> ShapeTapController for ShapeTapGame<R> {
    fn start_round(&mut self) {
        ShapeTapGame::start_round(self)
    }

    fn tap_slot(&mut self, slot: usize) -> Result<TapOutcome, TapError> {
        ShapeTapGame::tap_slot(self, slot)
    }

    fn try_again(&mut self) {
        ShapeTapGame::try_again(self)
    }

    fn round(&self) -> &RoundState {
        ShapeTapGame::round(self)
    }
}
