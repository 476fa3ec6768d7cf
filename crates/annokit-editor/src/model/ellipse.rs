use serde::{Deserialize, Serialize};

use super::Point;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EllipseShape {
    pub center: Point,
    pub rx: f64,
    pub ry: f64,
}

impl EllipseShape {
    pub fn new(center: Point, rx: f64, ry: f64) -> Self {
        Self { center, rx, ry }
    }

    /// Ellipse inscribed in the box spanned by two opposite corners.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            center: Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0),
            rx: (b.x - a.x).abs() / 2.0,
            ry: (b.y - a.y).abs() / 2.0,
        }
    }

    /// Bounding box corners: top-left, top-right, bottom-right, bottom-left.
    pub fn bounding_corners(&self) -> [Point; 4] {
        let (cx, cy) = (self.center.x, self.center.y);
        [
            Point::new(cx - self.rx, cy - self.ry),
            Point::new(cx + self.rx, cy - self.ry),
            Point::new(cx + self.rx, cy + self.ry),
            Point::new(cx - self.rx, cy + self.ry),
        ]
    }

    pub fn area(&self) -> f64 {
        std::f64::consts::PI * self.rx.abs() * self.ry.abs()
    }
}
