//! Two small single-player games: shape-tap and word-guess.
//!
//! The game logic lives in [`shape_tap`] and [`word_guess`] as owned controller
//! objects; [`render`] is the macroquad presentation that drives them.

pub mod assets;
pub mod config;
pub mod error;
pub mod logging;
pub mod render;
pub mod shape_tap;
pub mod word_guess;
