//! Minimal 2D geometry for pointer tracking.

/// A point in logical pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Component-wise delta `self - other`.
    pub fn delta(self, other: Point) -> Point {
        Point {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(self, other: Point) -> f32 {
        let d = self.delta(other);
        (d.x * d.x + d.y * d.y).sqrt()
    }
}
