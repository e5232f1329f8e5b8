use super::shape::Shape;
use crate::config::{GRID_DROP_RATIO, GRID_PADDING, SHAPE_SIZE_RATIO};
use macroquad::math::{Rect, Vec2, vec2};
use rand::Rng;
use rand::seq::SliceRandom;

pub const GRID_SLOTS: usize = 4;
const GRID_COLUMNS: usize = 2;

/// One shape on the board. Non-interactive tiles ignore pointer input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeTile {
    pub shape: Shape,
    pub interactive: bool,
}

/// The four shapes of a round in row-major slot order (0 1 / 2 3)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeLayout {
    tiles: [ShapeTile; GRID_SLOTS],
}

impl ShapeLayout {
    /// Lays out every shape exactly once in a random order
    pub fn shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut shapes = Shape::ALL;
        shapes.shuffle(rng);
        Self::from_shapes(shapes)
    }

    pub fn from_shapes(shapes: [Shape; GRID_SLOTS]) -> Self {
        ShapeLayout {
            tiles: shapes.map(|shape| ShapeTile {
                shape,
                interactive: true,
            }),
        }
    }

    pub fn tiles(&self) -> &[ShapeTile; GRID_SLOTS] {
        &self.tiles
    }

    pub fn tile(&self, slot: usize) -> Option<&ShapeTile> {
        self.tiles.get(slot)
    }

    pub fn shapes(&self) -> [Shape; GRID_SLOTS] {
        self.tiles.map(|t| t.shape)
    }

    /// Turns off pointer input for every tile
    pub fn disable(&mut self) {
        for tile in self.tiles.iter_mut() {
            tile.interactive = false;
        }
    }

    pub fn is_fully_interactive(&self) -> bool {
        self.tiles.iter().all(|t| t.interactive)
    }
}

/// Screen-space geometry of the 2x2 shape grid for a given surface size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
    pub shape_size: f32,
    pub padding: f32,
    origin: Vec2, // Center of slot 0
}

impl GridGeometry {
    pub fn new(width: f32, height: f32) -> Self {
        let shape_size = width.min(height) * SHAPE_SIZE_RATIO;
        let padding = GRID_PADDING;
        let grid_width = 2.0 * shape_size + padding;
        let grid_height = 2.0 * shape_size + padding;
        let origin = vec2(
            (width - grid_width) / 2.0 + shape_size / 2.0,
            (height - grid_height) / 2.0 + shape_size / 2.0 + height * GRID_DROP_RATIO,
        );
        GridGeometry {
            shape_size,
            padding,
            origin,
        }
    }

    pub fn slot_center(&self, slot: usize) -> Vec2 {
        let row = (slot / GRID_COLUMNS) as f32;
        let col = (slot % GRID_COLUMNS) as f32;
        let step = self.shape_size + self.padding;
        self.origin + vec2(col * step, row * step)
    }

    /// The square hit area of a slot. Every shape uses its bounding square.
    pub fn slot_bounds(&self, slot: usize) -> Rect {
        let center = self.slot_center(slot);
        let half = self.shape_size / 2.0;
        Rect::new(center.x - half, center.y - half, self.shape_size, self.shape_size)
    }

    /// Finds the slot under a screen point, if any
    pub fn slot_at(&self, point: Vec2) -> Option<usize> {
        (0..GRID_SLOTS).find(|&slot| self.slot_bounds(slot).contains(point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_shuffled_layout_uses_each_shape_once() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let layout = ShapeLayout::shuffled(&mut rng);
            let shapes: HashSet<Shape> = layout.shapes().into_iter().collect();
            assert_eq!(shapes.len(), GRID_SLOTS);
            assert!(layout.is_fully_interactive());
        }
    }

    #[test]
    fn test_disable_turns_off_every_tile() {
        let mut layout = ShapeLayout::from_shapes(Shape::ALL);
        layout.disable();
        assert!(layout.tiles().iter().all(|t| !t.interactive));
        assert!(!layout.is_fully_interactive());
    }

    #[test]
    fn test_geometry_square_surface() {
        let geometry = GridGeometry::new(800.0, 800.0);
        assert_approx_eq!(geometry.shape_size, 160.0, 1e-3);

        // grid = 2 * 160 + 20 = 340, centered then dropped by 80
        let first = geometry.slot_center(0);
        assert_approx_eq!(first.x, 310.0, 1e-3);
        assert_approx_eq!(first.y, 390.0, 1e-3);

        let last = geometry.slot_center(3);
        assert_approx_eq!(last.x, 490.0, 1e-3);
        assert_approx_eq!(last.y, 570.0, 1e-3);
    }

    #[test]
    fn test_geometry_uses_shorter_side() {
        let geometry = GridGeometry::new(1000.0, 500.0);
        assert_approx_eq!(geometry.shape_size, 100.0, 1e-3);
        let bounds = geometry.slot_bounds(1);
        assert_approx_eq!(bounds.w, 100.0, 1e-3);
        assert_approx_eq!(bounds.h, 100.0, 1e-3);
    }

    #[test]
    fn test_slot_at() {
        let geometry = GridGeometry::new(800.0, 800.0);
        for slot in 0..GRID_SLOTS {
            assert_eq!(geometry.slot_at(geometry.slot_center(slot)), Some(slot));
        }
        // The padding between cells and the area above the grid hit nothing
        assert_eq!(geometry.slot_at(vec2(400.0, 390.0)), None);
        assert_eq!(geometry.slot_at(vec2(400.0, 50.0)), None);
    }
}
