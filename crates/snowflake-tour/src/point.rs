//! Point primitives for the tour.
//!
//! Points are plain `nalgebra` 2D points; arithmetic comes from nalgebra
//! (`Point - Point` gives a vector, `Point + Vector` gives a point). This
//! module adds the few free functions the subdivision needs.

use nalgebra::Point2;

/// A 2D point with `f64` coordinates.
pub type Point = Point2<f64>;

/// Value returned by [`average`] when given no points.
pub const AVERAGE_FALLBACK: Point = Point::new(0.0, 0.0);

/// Euclidean distance between two points.
///
/// NaN and negative coordinates are not checked.
#[inline]
pub fn distance(p: &Point, q: &Point) -> f64 {
    nalgebra::distance(p, q)
}

/// Midpoint of the segment `pq`.
#[inline]
pub fn midpoint(p: &Point, q: &Point) -> Point {
    nalgebra::center(p, q)
}

/// Componentwise mean of the given points.
///
/// Returns [`AVERAGE_FALLBACK`] for an empty slice instead of dividing by zero.
pub fn average(points: &[Point]) -> Point {
    if points.is_empty() {
        return AVERAGE_FALLBACK;
    }

    let sum = points.iter().fold(Point::origin().coords, |acc, p| acc + p.coords);
    Point::from(sum / points.len() as f64)
}

/// Centroid of the triangle `abc`. Defined for degenerate triangles too.
#[inline]
pub fn centroid(a: &Point, b: &Point, c: &Point) -> Point {
    Point::from((a.coords + b.coords + c.coords) / 3.0)
}

/// Length of the open path visiting `points` in order.
pub fn tour_length(points: &[Point]) -> f64 {
    // `sum` of no floats is -0.0.
    points
        .windows(2)
        .map(|w| distance(&w[0], &w[1]))
        .fold(0.0, |acc, d| acc + d)
}
