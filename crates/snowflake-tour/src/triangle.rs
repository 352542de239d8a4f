//! Triangle representation for the snowflake subdivision.

use crate::point::{self, Point};

/// A triangle in the plane, defined by three ordered vertices `(A, B, C)`.
///
/// Vertex order is significant: it decides how a split lays out the two
/// children (see [`Split`](crate::Split)).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    vertices: [Point; 3],
}

impl Triangle {
    /// Creates a new triangle from three points.
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }

    /// Returns the three vertices of the triangle.
    #[inline]
    pub fn vertices(&self) -> &[Point; 3] {
        &self.vertices
    }

    /// Vertex `A`, the first endpoint of the split edge `AC`.
    #[inline]
    pub fn a(&self) -> Point {
        self.vertices[0]
    }

    /// Vertex `B`, opposite the split edge.
    #[inline]
    pub fn b(&self) -> Point {
        self.vertices[1]
    }

    /// Vertex `C`, the second endpoint of the split edge `AC`.
    #[inline]
    pub fn c(&self) -> Point {
        self.vertices[2]
    }

    /// Computes the centroid (center of mass) of the triangle.
    pub fn centroid(&self) -> Point {
        let [a, b, c] = &self.vertices;
        point::centroid(a, b, c)
    }

    /// Signed area; positive for counter-clockwise winding.
    pub fn signed_area(&self) -> f64 {
        let [a, b, c] = &self.vertices;
        let ab = b - a;
        let ac = c - a;
        0.5 * ab.perp(&ac)
    }

    /// Unsigned area of the triangle.
    #[inline]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Returns `true` if `p` lies inside the triangle or on its boundary.
    ///
    /// Works for either winding. Degenerate triangles contain nothing.
    pub fn contains(&self, p: &Point) -> bool {
        if self.signed_area() == 0.0 {
            return false;
        }

        let [a, b, c] = &self.vertices;
        let d1 = (b - a).perp(&(p - a));
        let d2 = (c - b).perp(&(p - b));
        let d3 = (a - c).perp(&(p - c));

        let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
        let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
        !(has_neg && has_pos)
    }
}

impl From<[Point; 3]> for Triangle {
    fn from(vertices: [Point; 3]) -> Self {
        Self { vertices }
    }
}
