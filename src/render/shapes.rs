// Outline geometry for the shapes that are not macroquad primitives

use crate::config::{STAR_INNER_RATIO, STAR_POINTS};
use macroquad::math::{Vec2, vec2};
use std::f32::consts::{FRAC_PI_2, PI};

/// Equilateral triangle with side `size`, point up, centred on `center`
pub fn triangle_points(center: Vec2, size: f32) -> [Vec2; 3] {
    let height = size * 3f32.sqrt() / 2.0;
    [
        center + vec2(0.0, -height / 2.0),
        center + vec2(size / 2.0, height / 2.0),
        center + vec2(-size / 2.0, height / 2.0),
    ]
}

/// Alternating outer and inner vertices of a star, first point straight up
pub fn star_points(center: Vec2, outer_radius: f32) -> Vec<Vec2> {
    let inner_radius = outer_radius * STAR_INNER_RATIO;
    let step = PI / STAR_POINTS as f32;
    (0..STAR_POINTS * 2)
        .map(|i| {
            let angle = -FRAC_PI_2 + i as f32 * step;
            let radius = if i % 2 == 0 { outer_radius } else { inner_radius };
            center + vec2(angle.cos(), angle.sin()) * radius
        })
        .collect()
}
