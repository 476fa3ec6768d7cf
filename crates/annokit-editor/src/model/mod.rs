use serde::{Deserialize, Serialize};
use std::fmt;

mod ellipse;
mod line;
mod rectangle;

pub use ellipse::EllipseShape;
pub use line::{LineKind, LineShape};
pub use rectangle::RectShape;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Annotation kinds that carry no editable anchors (text, markers...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtherShape {
    pub kind: String,
}

impl OtherShape {
    pub fn new(kind: impl Into<String>) -> Self {
        Self { kind: kind.into() }
    }
}

/// An annotation shape, tagged by variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Line(LineShape),
    Rectangle(RectShape),
    Ellipse(EllipseShape),
    Other(OtherShape),
}

impl Shape {
    /// Name of the group that holds a shape of this variant, e.g. `ruler-group`.
    pub fn group_name(&self) -> String {
        match self {
            Shape::Line(line) => line.kind.group_name(),
            Shape::Rectangle(_) => "rectangle-group".to_string(),
            Shape::Ellipse(_) => "ellipse-group".to_string(),
            Shape::Other(other) => format!("{}-group", other.kind),
        }
    }

    /// Human readable name used in command names.
    pub fn display_name(&self) -> String {
        match self {
            Shape::Line(line) => line.kind.display_name(),
            Shape::Rectangle(_) => "rectangle".to_string(),
            Shape::Ellipse(_) => "ellipse".to_string(),
            Shape::Other(_) => "shape".to_string(),
        }
    }

    pub fn as_line(&self) -> Option<&LineShape> {
        match self {
            Shape::Line(line) => Some(line),
            _ => None,
        }
    }

    pub fn as_line_mut(&mut self) -> Option<&mut LineShape> {
        match self {
            Shape::Line(line) => Some(line),
            _ => None,
        }
    }

    pub fn as_rectangle(&self) -> Option<&RectShape> {
        match self {
            Shape::Rectangle(rect) => Some(rect),
            _ => None,
        }
    }

    pub fn as_rectangle_mut(&mut self) -> Option<&mut RectShape> {
        match self {
            Shape::Rectangle(rect) => Some(rect),
            _ => None,
        }
    }

    pub fn as_ellipse(&self) -> Option<&EllipseShape> {
        match self {
            Shape::Ellipse(ellipse) => Some(ellipse),
            _ => None,
        }
    }

    pub fn as_ellipse_mut(&mut self) -> Option<&mut EllipseShape> {
        match self {
            Shape::Ellipse(ellipse) => Some(ellipse),
            _ => None,
        }
    }
}

impl From<LineShape> for Shape {
    fn from(line: LineShape) -> Self {
        Shape::Line(line)
    }
}

impl From<RectShape> for Shape {
    fn from(rect: RectShape) -> Self {
        Shape::Rectangle(rect)
    }
}

impl From<EllipseShape> for Shape {
    fn from(ellipse: EllipseShape) -> Self {
        Shape::Ellipse(ellipse)
    }
}

impl From<OtherShape> for Shape {
    fn from(other: OtherShape) -> Self {
        Shape::Other(other)
    }
}

/// Measurement text shown next to a shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Label {
    pub text: String,
    pub position: Point,
}

impl Label {
    pub fn new(text: impl Into<String>, position: Point) -> Self {
        Self {
            text: text.into(),
            position,
        }
    }
}
