use serde::{Deserialize, Serialize};

/// Represents a point in canvas or cartesian coordinates.
///
/// Canvas points have their origin at the top-left corner with y growing
/// downward. Cartesian points are relative to a center reference with y
/// growing upward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn add(&self, other: &Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }

    pub fn subtract(&self, other: &Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Converts a canvas point into cartesian space centered on `center`
    pub fn to_cartesian(&self, center: &Point) -> Point {
        let offset = self.subtract(center);
        Point::new(offset.x, -offset.y)
    }

    /// Converts a cartesian point relative to `center` back onto the canvas
    pub fn to_canvas(&self, center: &Point) -> Point {
        Point::new(self.x, -self.y).add(center)
    }

    /// Interprets the point as cartesian and returns its polar form
    pub fn to_polar(&self) -> PolarPoint {
        PolarPoint::new(self.y.atan2(self.x), self.x.hypot(self.y))
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Polar coordinates; `theta` in radians
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarPoint {
    pub theta: f64,
    pub radius: f64,
}

impl PolarPoint {
    pub fn new(theta: f64, radius: f64) -> Self {
        Self { theta, radius }
    }

    pub fn to_cartesian(&self) -> Point {
        Point::new(self.radius * self.theta.cos(), self.radius * self.theta.sin())
    }
}

impl Default for PolarPoint {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}
