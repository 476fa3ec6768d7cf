use serde::{Deserialize, Serialize};

use super::Point;

/// Sub-kind of a line-family annotation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineKind {
    /// Plain line with an arrow head; lives in a `line-group`.
    Arrow,
    Ruler,
    Protractor,
    Roi,
    FreeHand,
    /// Line drawn by a tool this crate does not know.
    Other(String),
}

impl LineKind {
    pub fn group_name(&self) -> String {
        match self {
            LineKind::Arrow => "line-group".to_string(),
            LineKind::Ruler => "ruler-group".to_string(),
            LineKind::Protractor => "protractor-group".to_string(),
            LineKind::Roi => "roi-group".to_string(),
            LineKind::FreeHand => "freeHand-group".to_string(),
            LineKind::Other(name) => format!("{}-group", name),
        }
    }

    /// Parse a group name back to a kind; unknown names map to `Other`.
    pub fn from_group_name(name: &str) -> Self {
        match name {
            "line-group" => LineKind::Arrow,
            "ruler-group" => LineKind::Ruler,
            "protractor-group" => LineKind::Protractor,
            "roi-group" => LineKind::Roi,
            "freeHand-group" => LineKind::FreeHand,
            other => LineKind::Other(other.trim_end_matches("-group").to_string()),
        }
    }

    pub fn display_name(&self) -> String {
        match self {
            LineKind::Arrow => "line".to_string(),
            LineKind::Ruler => "ruler".to_string(),
            LineKind::Protractor => "protractor".to_string(),
            LineKind::Roi => "roi".to_string(),
            LineKind::FreeHand => "freeHand".to_string(),
            LineKind::Other(name) => name.clone(),
        }
    }
}

/// Polyline stored as a flat `[x0, y0, x1, y1, ...]` array relative to `offset`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineShape {
    pub kind: LineKind,
    pub points: Vec<f64>,
    pub offset: Point,
}

impl LineShape {
    pub fn new(kind: LineKind, points: Vec<f64>) -> Self {
        Self {
            kind,
            points,
            offset: Point::default(),
        }
    }

    /// Build from absolute points.
    pub fn from_points(kind: LineKind, points: &[Point]) -> Self {
        Self::new(kind, points.iter().flat_map(|p| [p.x, p.y]).collect())
    }

    pub fn with_offset(mut self, offset: Point) -> Self {
        self.offset = offset;
        self
    }

    pub fn point_count(&self) -> usize {
        self.points.len() / 2
    }

    /// Absolute position of each point, paired with its raw array index.
    pub fn absolute_points(&self) -> impl Iterator<Item = (usize, Point)> + '_ {
        self.points
            .chunks_exact(2)
            .enumerate()
            .map(move |(n, xy)| (n * 2, Point::new(xy[0] + self.offset.x, xy[1] + self.offset.y)))
    }

    /// Move the point at raw array `index` to an absolute position.
    ///
    /// Returns false when the index does not address a point.
    pub fn set_point_at(&mut self, index: usize, position: Point) -> bool {
        if index % 2 != 0 || index + 1 >= self.points.len() {
            return false;
        }
        self.points[index] = position.x - self.offset.x;
        self.points[index + 1] = position.y - self.offset.y;
        true
    }

    /// Polyline length in pixels.
    pub fn length(&self) -> f64 {
        let points: Vec<Point> = self.absolute_points().map(|(_, p)| p).collect();
        points.windows(2).map(|w| w[0].distance_to(&w[1])).sum()
    }
}
