// Macroquad presentation for both games. Screens drive the games only through their controller traits.

pub mod shape_tap;
pub mod shapes;
pub mod word_guess;

pub use shape_tap::ShapeTapScreen;
pub use word_guess::WordGuessScreen;

use crate::config::BACKGROUND_RGB;
use macroquad::prelude::*;

pub fn background_color() -> Color {
    let (r, g, b) = BACKGROUND_RGB;
    Color::from_rgba(r, g, b, 255)
}

fn faded_color(mut color: Color, alpha: f32) -> Color {
    color.a *= alpha;
    color
}

fn brighten_color(color: Color, amount: f32) -> Color {
    Color::new(
        (color.r + amount).min(1.0),
        (color.g + amount).min(1.0),
        (color.b + amount).min(1.0),
        color.a,
    )
}

/// Draws `text` centred on (`cx`, `cy`) and returns its bounding box
fn draw_centered_text(text: &str, cx: f32, cy: f32, font_size: u16, color: Color) -> Rect {
    let dims = measure_text(text, None, font_size, 1.0);
    let x = cx - dims.width / 2.0;
    let top = cy - dims.height / 2.0;
    draw_text(text, x, top + dims.offset_y, font_size as f32, color);
    Rect::new(x, top, dims.width, dims.height)
}

fn pointer_pressed() -> Option<Vec2> {
    // Touches arrive as simulated mouse presses
    if is_mouse_button_pressed(MouseButton::Left) {
        Some(mouse_position().into())
    } else {
        None
    }
}

pub fn window_should_close() -> bool {
    is_key_down(KeyCode::Escape) || is_quit_requested()
}
