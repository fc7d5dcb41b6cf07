//! Bounding box structure for defining regions

use std::fmt;
use super::point::Point;

/// An axis-aligned bounding box given by its min and max corners
///
/// The box is a plain value: copying it (or building a new one from another
/// box's corners) never shares state with the source, so expanding the copy
/// leaves the original untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Lower-left corner
    pub min: Point,
    /// Upper-right corner
    pub max: Point,
}

impl BoundingBox {
    /// Create a new bounding box from its corners
    ///
    /// The corners are taken as given; callers pass an ordered pair or the
    /// same point twice as a seed for [`BoundingBox::expand`].
    pub fn new(min: Point, max: Point) -> Self {
        BoundingBox { min, max }
    }

    /// Create a degenerate bounding box covering a single point
    pub fn from_point(point: Point) -> Self {
        BoundingBox::new(point, point)
    }

    /// Create a bounding box from raw corner values
    pub fn from_coords(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        BoundingBox::new(Point::new(min_x, min_y), Point::new(max_x, max_y))
    }

    /// Parse a bounding box from a string (format: "minx,miny,maxx,maxy")
    pub fn from_string(bbox_str: &str) -> Result<Self, String> {
        let parts: Vec<&str> = bbox_str.split(',').collect();
        if parts.len() != 4 {
            return Err("Bounding box must have 4 comma-separated values".to_string());
        }

        let min_x = parts[0].trim().parse::<f64>()
            .map_err(|_| "Invalid min_x value".to_string())?;
        let min_y = parts[1].trim().parse::<f64>()
            .map_err(|_| "Invalid min_y value".to_string())?;
        let max_x = parts[2].trim().parse::<f64>()
            .map_err(|_| "Invalid max_x value".to_string())?;
        let max_y = parts[3].trim().parse::<f64>()
            .map_err(|_| "Invalid max_y value".to_string())?;

        Ok(BoundingBox::from_coords(min_x, min_y, max_x, max_y))
    }

    /// Widen the box so that it includes `point`
    pub fn expand(&mut self, point: Point) {
        self.min.x = point.x.min(self.min.x);
        self.min.y = point.y.min(self.min.y);
        self.max.x = point.x.max(self.max.x);
        self.max.y = point.y.max(self.max.y);
    }

    /// Get the width of the bounding box
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Get the height of the bounding box
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Get the center point of the bounding box
    pub fn center(&self) -> Point {
        Point::new(
            self.min.x + self.width() / 2.0,
            self.min.y + self.height() / 2.0,
        )
    }

    /// Check if this bounding box contains a point (edges included)
    pub fn contains(&self, point: &Point) -> bool {
        point.x >= self.min.x && point.x <= self.max.x &&
            point.y >= self.min.y && point.y <= self.max.y
    }

    /// Check if this bounding box fully contains another one
    pub fn contains_bbox(&self, other: &BoundingBox) -> bool {
        self.contains(&other.min) && self.contains(&other.max)
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "min: {} max: {}", self.min, self.max)
    }
}
