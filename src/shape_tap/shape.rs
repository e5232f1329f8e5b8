use std::fmt;

/// The four shapes shown on screen each round. Pure display tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Square,
    Triangle,
    Star,
    Circle,
}

impl Shape {
    pub const ALL: [Shape; 4] = [Shape::Square, Shape::Triangle, Shape::Star, Shape::Circle];

    /// Lowercase identifier, as used in logs
    pub fn name(self) -> &'static str {
        match self {
            Shape::Square => "square",
            Shape::Triangle => "triangle",
            Shape::Star => "star",
            Shape::Circle => "circle",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name().to_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_shapes_are_distinct() {
        let set: HashSet<Shape> = Shape::ALL.iter().copied().collect();
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn test_display_is_uppercase() {
        assert_eq!(Shape::Triangle.to_string(), "TRIANGLE");
        assert_eq!(Shape::Circle.name(), "circle");
    }
}
