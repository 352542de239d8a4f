//! The bounding region and the root triangle of the subdivision.

use crate::{Explorer, Point, TourResult, Triangle, Zone, explode};

/// The rectangular search area `[0, width] x [0, height]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingRegion {
    width: f64,
    height: f64,
}

impl BoundingRegion {
    /// Creates a region of the given size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Creates a square region.
    pub fn square(side: f64) -> Self {
        Self::new(side, side)
    }

    /// Extent along x.
    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Extent along y.
    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns `true` if `p` lies inside the region or on its edge.
    pub fn contains(&self, p: &Point) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }

    /// Returns the root triangle covering the region.
    ///
    /// With `s = max(width, height)` the triangle is `A = (0, 2s)`,
    /// `B = (0, 0)`, `C = (2s, 0)`: isosceles with its right angle at `B`.
    /// The first split cuts it along the diagonal of the square `[0, s]^2`
    /// into two right triangles that together cover the region. Every
    /// descendant keeps the right angle at `B`, so the nearest-centroid rule
    /// assigns each point to the child that actually contains it.
    pub fn triangle(&self) -> Triangle {
        let side = self.width.max(self.height);
        Triangle::new(
            Point::new(0.0, 2.0 * side),
            Point::new(0.0, 0.0),
            Point::new(2.0 * side, 0.0),
        )
    }

    /// Builds the root zone owning all of `points`.
    pub fn root_zone(&self, points: Vec<Point>) -> Zone {
        Zone::new(self.triangle(), points)
    }

    /// Orders `points` into a tour, with no depth limit.
    pub fn tour(&self, points: Vec<Point>) -> Vec<Point> {
        explode(self.root_zone(points))
    }

    /// Orders `points` into a tour using the given explorer.
    pub fn tour_with(&self, explorer: &Explorer, points: Vec<Point>) -> TourResult<Vec<Point>> {
        explorer.explode(self.root_zone(points))
    }
}
