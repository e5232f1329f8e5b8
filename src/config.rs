//! Configuration constants for both games.

// Window
pub const WINDOW_WIDTH: i32 = 800;
pub const WINDOW_HEIGHT: i32 = 800;
pub const BACKGROUND_RGB: (u8, u8, u8) = (0x22, 0x22, 0x22);

// Shape-tap grid
pub const SHAPE_SIZE_RATIO: f32 = 0.2; // Shape size as a fraction of min(width, height)
pub const GRID_PADDING: f32 = 20.0; // Pixels between grid cells
pub const GRID_DROP_RATIO: f32 = 0.1; // Grid is pushed down by this fraction of the height
pub const STAR_INNER_RATIO: f32 = 0.5; // Inner radius of the star relative to its outer radius
pub const STAR_POINTS: usize = 5;

// Shape-tap text
pub const INSTRUCTION_Y: f32 = 50.0;
pub const INSTRUCTION_FONT_SIZE: u16 = 32;
pub const SCORE_FONT_SIZE: u16 = 24;
pub const GAME_OVER_FONT_SIZE: u16 = 48;
pub const FINAL_SCORE_FONT_SIZE: u16 = 32;
pub const BUTTON_FONT_SIZE: u16 = 32;
pub const OVERLAY_ALPHA: f32 = 0.7;

// Word-guess rules
pub const MAX_WORD_GUESSES: u32 = 3;
pub const MAX_PHRASE_GUESSES: u32 = 3;
pub const HIDDEN_LETTER: char = '_';
pub const MAX_INPUT_LEN: usize = 40; // Longest guess the text input accepts

// Word-guess text
pub const PHRASE_FONT_SIZE: u16 = 40;
pub const STATUS_FONT_SIZE: u16 = 24;
pub const MESSAGE_FONT_SIZE: u16 = 24;
pub const INPUT_FONT_SIZE: u16 = 28;
