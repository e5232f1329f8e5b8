use super::shape::Shape;
use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Positive, // Tap the target
    Negative, // Tap anything but the target
}

/// The directive shown to the player for the current round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub target: Shape,
    pub polarity: Polarity,
}

impl Instruction {
    pub fn new(target: Shape, polarity: Polarity) -> Self {
        Instruction { target, polarity }
    }

    /// Picks a uniformly random target shape and polarity
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let target = *Shape::ALL.choose(rng).unwrap_or(&Shape::Square);
        let polarity = if rng.gen_bool(0.5) {
            Polarity::Positive
        } else {
            Polarity::Negative
        };
        Instruction { target, polarity }
    }

    /// Whether tapping `shape` obeys this instruction
    pub fn is_satisfied_by(&self, shape: Shape) -> bool {
        match self.polarity {
            Polarity::Positive => shape == self.target,
            Polarity::Negative => shape != self.target,
        }
    }

    /// Human-readable label, e.g. "TAP STAR" or "TAP NOT STAR"
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.polarity {
            Polarity::Positive => write!(f, "TAP {}", self.target),
            Polarity::Negative => write!(f, "TAP NOT {}", self.target),
        }
    }
}
