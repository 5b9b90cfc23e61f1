//! Canvas, cartesian and polar conversions over animated values
//!
//! Canvas space has its origin at the top-left corner with y growing
//! downward. Cartesian space is centered on a reference point with y growing
//! upward.

use super::math::atan2;
use super::node::AnimatedValue;
use super::ops::{add, cos, multiply, sin, sqrt, sub};
use crate::core::geo::{Point, PolarPoint};

/// A point whose coordinates are animated values
#[derive(Debug, Clone, Default)]
pub struct AnimatedPoint {
    pub x: AnimatedValue,
    pub y: AnimatedValue,
}

impl AnimatedPoint {
    pub fn new(x: impl Into<AnimatedValue>, y: impl Into<AnimatedValue>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }

    /// Snapshot of the current coordinates
    pub fn current(&self) -> Point {
        Point::new(self.x.value(), self.y.value())
    }
}

impl From<Point> for AnimatedPoint {
    fn from(point: Point) -> Self {
        Self::new(point.x, point.y)
    }
}

impl From<(f64, f64)> for AnimatedPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<&AnimatedPoint> for AnimatedPoint {
    fn from(point: &AnimatedPoint) -> Self {
        point.clone()
    }
}

/// Polar coordinates as animated values; `theta` in radians
#[derive(Debug, Clone, Default)]
pub struct AnimatedPolar {
    pub theta: AnimatedValue,
    pub radius: AnimatedValue,
}

impl AnimatedPolar {
    pub fn new(theta: impl Into<AnimatedValue>, radius: impl Into<AnimatedValue>) -> Self {
        Self {
            theta: theta.into(),
            radius: radius.into(),
        }
    }

    pub fn current(&self) -> PolarPoint {
        PolarPoint::new(self.theta.value(), self.radius.value())
    }
}

impl From<PolarPoint> for AnimatedPolar {
    fn from(polar: PolarPoint) -> Self {
        Self::new(polar.theta, polar.radius)
    }
}

impl From<&AnimatedPolar> for AnimatedPolar {
    fn from(polar: &AnimatedPolar) -> Self {
        polar.clone()
    }
}

/// Converts a canvas point into cartesian space centered on `center`.
///
/// `x = p.x - center.x`, `y = -(p.y - center.y)`.
pub fn canvas_to_cartesian(
    point: impl Into<AnimatedPoint>,
    center: impl Into<AnimatedPoint>,
) -> AnimatedPoint {
    let point = point.into();
    let center = center.into();
    AnimatedPoint {
        x: sub(&point.x, &center.x),
        y: sub(&center.y, &point.y),
    }
}

/// Inverse of [`canvas_to_cartesian`]
pub fn cartesian_to_canvas(
    point: impl Into<AnimatedPoint>,
    center: impl Into<AnimatedPoint>,
) -> AnimatedPoint {
    let point = point.into();
    let center = center.into();
    AnimatedPoint {
        x: add(&point.x, &center.x),
        y: sub(&center.y, &point.y),
    }
}

pub fn cartesian_to_polar(point: impl Into<AnimatedPoint>) -> AnimatedPolar {
    let AnimatedPoint { x, y }: AnimatedPoint = point.into();
    AnimatedPolar {
        theta: atan2(&y, &x),
        radius: sqrt(add(multiply(&x, &x), multiply(&y, &y))),
    }
}

pub fn polar_to_cartesian(polar: impl Into<AnimatedPolar>) -> AnimatedPoint {
    let AnimatedPolar { theta, radius }: AnimatedPolar = polar.into();
    AnimatedPoint {
        x: multiply(&radius, cos(&theta)),
        y: multiply(&radius, sin(&theta)),
    }
}

pub fn canvas_to_polar(
    point: impl Into<AnimatedPoint>,
    center: impl Into<AnimatedPoint>,
) -> AnimatedPolar {
    cartesian_to_polar(canvas_to_cartesian(point, center))
}

pub fn polar_to_canvas(
    polar: impl Into<AnimatedPolar>,
    center: impl Into<AnimatedPoint>,
) -> AnimatedPoint {
    cartesian_to_canvas(polar_to_cartesian(polar), center)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_self_reference_is_origin() {
        let point = canvas_to_cartesian((500.0, 200.0), (500.0, 200.0));
        assert_eq!(point.x.value(), 0.0);
        assert_eq!(point.y.value(), 0.0);
    }

    #[test]
    fn test_y_axis_is_inverted() {
        let point = canvas_to_cartesian((0.0, 0.0), (500.0, 200.0));
        assert_eq!(point.current(), Point::new(-500.0, 200.0));

        let point = canvas_to_cartesian((750.0, 600.0), (500.0, 200.0));
        assert_eq!(point.current(), Point::new(250.0, -400.0));
    }

    #[test]
    fn test_matches_plain_conversion() {
        let center = Point::new(187.5, 333.0);
        for p in [Point::new(0.0, 0.0), Point::new(-20.0, 1e4), Point::new(0.125, 7.0)] {
            let animated = canvas_to_cartesian(p, center).current();
            assert_eq!(animated, p.to_cartesian(&center));
            assert_eq!(cartesian_to_canvas(animated, center).current(), p);
        }
    }

    #[test]
    fn test_reads_live_nodes() {
        let point = AnimatedPoint::new(10.0, 10.0);
        let center = AnimatedPoint::new(0.0, 0.0);
        let first = canvas_to_cartesian(&point, &center);

        point.x.set_value(30.0);
        let second = canvas_to_cartesian(&point, &center);

        assert_eq!(first.x.value(), 10.0);
        assert_eq!(second.x.value(), 30.0);
    }

    #[test]
    fn test_polar_round_trip() {
        let center = Point::new(200.0, 200.0);
        let canvas = Point::new(200.0, 100.0);

        let polar = canvas_to_polar(canvas, center);
        assert_abs_diff_eq!(polar.theta.value(), PI / 2.0);
        assert_abs_diff_eq!(polar.radius.value(), 100.0);

        let back = polar_to_canvas(&polar, center).current();
        assert!(back.distance_to(&canvas) < 1e-9);
    }

    #[test]
    fn test_polar_to_cartesian() {
        let point = polar_to_cartesian(PolarPoint::new(PI, 2.0)).current();
        assert_abs_diff_eq!(point.x, -2.0);
        assert_abs_diff_eq!(point.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_non_finite_propagates() {
        let point = canvas_to_cartesian((f64::NAN, f64::INFINITY), (0.0, 0.0));
        assert!(point.x.value().is_nan());
        assert_eq!(point.y.value(), f64::NEG_INFINITY);
    }
}
