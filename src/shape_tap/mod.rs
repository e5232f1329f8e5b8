// Shape-tap game: shapes, instructions, grid layout and the round controller

pub mod instruction;
pub mod layout;
pub mod round;
pub mod shape;

pub use instruction::{Instruction, Polarity};
pub use layout::{GridGeometry, ShapeLayout, ShapeTile};
pub use round::{RoundState, ShapeTapGame, TapOutcome};
pub use shape::Shape;

use crate::error::TapError;

/// Operations the presentation layer drives the shape-tap game through.
pub trait ShapeTapController {
    fn start_round(&mut self);
    fn tap_slot(&mut self, slot: usize) -> Result<TapOutcome, TapError>;
    fn try_again(&mut self);
    fn round(&self) -> &RoundState;
}
