use super::shapes::{star_points, triangle_points};
use super::{
    background_color, brighten_color, draw_centered_text, faded_color, pointer_pressed,
    window_should_close,
};
use crate::config::*;
use crate::debug_ui;
use crate::shape_tap::{GridGeometry, Shape, ShapeTapController, TapOutcome};
use log::info;
use macroquad::prelude::*;

const BUTTON_LABEL: &str = "Try Again";
const BUTTON_PADDING: Vec2 = Vec2::new(20.0, 10.0);
const BUTTON_GREEN: Color = Color::new(0.0, 1.0, 0.0, 1.0);
const BUTTON_BACKGROUND: Color = Color::new(0.2, 0.2, 0.2, 1.0);

/// Draws the shape-tap board and feeds pointer input to the controller
pub struct ShapeTapScreen<C: ShapeTapController> {
    controller: C,
}

impl<C: ShapeTapController> ShapeTapScreen<C> {
    pub fn new(controller: C) -> Self {
        ShapeTapScreen { controller }
    }

    /// Runs until the window closes or Escape is pressed
    pub async fn run(&mut self) {
        info!("Starting shape-tap loop...");
        self.controller.start_round();
        while !window_should_close() {
            let geometry = GridGeometry::new(screen_width(), screen_height());
            self.handle_input(&geometry);
            self.draw(&geometry);
            next_frame().await;
        }
        info!("Exiting shape-tap. Final score: {}", self.controller.round().score);
    }

    fn handle_input(&mut self, geometry: &GridGeometry) {
        let Some(point) = pointer_pressed() else {
            return;
        };

        if self.controller.round().is_over {
            if Self::button_bounds().contains(point) {
                self.controller.try_again();
            }
            return;
        }

        let Some(slot) = geometry.slot_at(point) else {
            return;
        };
        match self.controller.tap_slot(slot) {
            Ok(TapOutcome::Correct { score }) => debug_ui!("Slot {} correct, score {}", slot, score),
            Ok(TapOutcome::Missed { final_score }) => {
                debug_ui!("Slot {} missed, final score {}", slot, final_score)
            }
            Err(e) => debug_ui!("Tap on slot {} ignored: {}", slot, e),
        }
    }

    fn draw(&self, geometry: &GridGeometry) {
        clear_background(background_color());
        let round = self.controller.round();

        for (slot, tile) in round.layout.tiles().iter().enumerate() {
            Self::draw_shape(tile.shape, geometry.slot_center(slot), geometry.shape_size, WHITE);
        }

        if round.is_over {
            self.draw_game_over(round.score);
            return;
        }

        if let Some(instruction) = round.instruction {
            draw_centered_text(
                &instruction.label(),
                screen_width() / 2.0,
                INSTRUCTION_Y,
                INSTRUCTION_FONT_SIZE,
                WHITE,
            );
        }
        let score_text = format!("Score: {}", round.score);
        let dims = measure_text(&score_text, None, SCORE_FONT_SIZE, 1.0);
        draw_text(&score_text, 20.0, 20.0 + dims.offset_y, SCORE_FONT_SIZE as f32, WHITE);
    }

    fn draw_shape(shape: Shape, center: Vec2, size: f32, color: Color) {
        let half = size / 2.0;
        match shape {
            Shape::Square => draw_rectangle(center.x - half, center.y - half, size, size, color),
            Shape::Triangle => {
                let [a, b, c] = triangle_points(center, size);
                draw_triangle(a, b, c, color);
            }
            Shape::Star => {
                // Fan of triangles from the centre through consecutive outline points
                let points = star_points(center, half);
                for i in 0..points.len() {
                    let next = points[(i + 1) % points.len()];
                    draw_triangle(center, points[i], next, color);
                }
            }
            Shape::Circle => draw_circle(center.x, center.y, half, color),
        }
    }

    fn draw_game_over(&self, score: u32) {
        let (w, h) = (screen_width(), screen_height());
        draw_rectangle(0.0, 0.0, w, h, faded_color(BLACK, OVERLAY_ALPHA));

        draw_centered_text("GAME OVER", w / 2.0, h / 2.0 - 100.0, GAME_OVER_FONT_SIZE, RED);
        draw_centered_text(
            &format!("You got {} correct!", score),
            w / 2.0,
            h / 2.0 - 30.0,
            FINAL_SCORE_FONT_SIZE,
            WHITE,
        );

        let bounds = Self::button_bounds();
        let hovered = bounds.contains(mouse_position().into());
        let label_color = if hovered {
            brighten_color(BUTTON_GREEN, 0.53)
        } else {
            BUTTON_GREEN
        };
        draw_rectangle(bounds.x, bounds.y, bounds.w, bounds.h, BUTTON_BACKGROUND);
        draw_centered_text(BUTTON_LABEL, w / 2.0, h / 2.0 + 50.0, BUTTON_FONT_SIZE, label_color);
    }

    fn button_bounds() -> Rect {
        let dims = measure_text(BUTTON_LABEL, None, BUTTON_FONT_SIZE, 1.0);
        let width = dims.width + BUTTON_PADDING.x * 2.0;
        let height = dims.height + BUTTON_PADDING.y * 2.0;
        Rect::new(
            screen_width() / 2.0 - width / 2.0,
            screen_height() / 2.0 + 50.0 - height / 2.0,
            width,
            height,
        )
    }
}
