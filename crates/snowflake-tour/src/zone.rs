//! Zones: triangles together with the points currently assigned to them.

use crate::{Point, Triangle};

/// The points a [`Zone`] owns.
///
/// Only three shapes matter to the traversal: nothing to do, one point to
/// emit, or several points that still need splitting.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Occupancy {
    /// No points; the zone is dropped.
    #[default]
    Empty,
    /// Exactly one point; the zone is a leaf of the subdivision.
    Leaf(Point),
    /// Two or more points.
    Unresolved(Vec<Point>),
}

impl Occupancy {
    /// Collapses a point collection into the matching variant.
    pub fn from_points(mut points: Vec<Point>) -> Self {
        if points.len() > 1 {
            return Occupancy::Unresolved(points);
        }
        let Some(point) = points.pop() else {
            return Occupancy::Empty;
        };
        Occupancy::Leaf(point)
    }

    /// Re-collapses an occupancy built by hand, so an `Unresolved` holding
    /// fewer than two points becomes `Empty` or `Leaf`.
    pub fn normalized(self) -> Self {
        match self {
            Occupancy::Unresolved(points) => Self::from_points(points),
            other => other,
        }
    }

    /// Returns the number of points held.
    pub fn len(&self) -> usize {
        match self {
            Occupancy::Empty => 0,
            Occupancy::Leaf(_) => 1,
            Occupancy::Unresolved(points) => points.len(),
        }
    }

    /// Returns `true` for the `Empty` variant.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Occupancy::Empty)
    }

    /// Returns the held points as a slice.
    pub fn as_slice(&self) -> &[Point] {
        match self {
            Occupancy::Empty => &[],
            Occupancy::Leaf(point) => std::slice::from_ref(point),
            Occupancy::Unresolved(points) => points.as_slice(),
        }
    }

    /// Consumes the occupancy and returns its points.
    pub fn into_points(self) -> Vec<Point> {
        match self {
            Occupancy::Empty => Vec::new(),
            Occupancy::Leaf(point) => vec![point],
            Occupancy::Unresolved(points) => points,
        }
    }
}

impl From<Vec<Point>> for Occupancy {
    fn from(points: Vec<Point>) -> Self {
        Self::from_points(points)
    }
}

/// A triangle and the points assigned to it during partitioning.
///
/// Zones hold no links to parents or children. Splitting consumes a zone and
/// hands its points to exactly one of two fresh children.
#[derive(Debug, Clone, PartialEq)]
pub struct Zone {
    triangle: Triangle,
    occupancy: Occupancy,
}

impl Zone {
    /// Creates a zone, collapsing a single point into a leaf.
    pub fn new(triangle: Triangle, points: Vec<Point>) -> Self {
        Self::with_occupancy(triangle, Occupancy::from_points(points))
    }

    /// Creates a zone from an occupancy, normalizing it first so the leaf
    /// invariant holds whatever variant the caller built.
    pub fn with_occupancy(triangle: Triangle, occupancy: Occupancy) -> Self {
        Self {
            triangle,
            occupancy: occupancy.normalized(),
        }
    }

    /// The zone's triangle.
    #[inline]
    pub fn triangle(&self) -> &Triangle {
        &self.triangle
    }

    /// The points the zone owns.
    #[inline]
    pub fn occupancy(&self) -> &Occupancy {
        &self.occupancy
    }

    /// Returns the number of points owned by this zone.
    #[inline]
    pub fn point_count(&self) -> usize {
        self.occupancy.len()
    }

    /// A zone is a leaf iff it holds exactly one point.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self.occupancy, Occupancy::Leaf(_))
    }

    /// Returns `true` if the zone owns no points and will be dropped.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.occupancy.is_empty()
    }

    /// Breaks the zone into its triangle and occupancy.
    pub fn into_parts(self) -> (Triangle, Occupancy) {
        (self.triangle, self.occupancy)
    }
}
