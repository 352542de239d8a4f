//! Leaf sinks for the explorer.
//!
//! Each time the traversal reaches a zone holding a single point, it reports
//! that point and the triangle it ended up in. The order of those reports is
//! the tour. Sinks decide what to keep: just the points, the triangles for
//! drawing, or anything a closure wants to do with them.

use crate::{Point, Triangle};

/// Receives the leaves of the subdivision in tour order.
pub trait ZoneVisitor {
    /// Called once for each single-point zone, in tour order. `triangle` is
    /// the zone's final triangle and `point` its only point.
    fn visit(&mut self, triangle: &Triangle, point: Point);
}

/// Keeps the tour points and drops the triangles.
#[derive(Debug, Default)]
pub struct CollectingVisitor {
    collected: Vec<Point>,
}

impl CollectingVisitor {
    /// Starts with an empty tour.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with an empty tour sized for `capacity` stops.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            collected: Vec::with_capacity(capacity),
        }
    }

    /// The tour collected so far.
    pub fn points(&self) -> &[Point] {
        &self.collected
    }

    /// Finishes collection and hands back the tour.
    pub fn into_points(self) -> Vec<Point> {
        self.collected
    }
}

impl ZoneVisitor for CollectingVisitor {
    fn visit(&mut self, _triangle: &Triangle, point: Point) {
        self.collected.push(point);
    }
}

/// Adapts a closure into a [`ZoneVisitor`].
pub struct FnVisitor<F>
where
    F: FnMut(&Triangle, Point),
{
    func: F,
}

impl<F> FnVisitor<F>
where
    F: FnMut(&Triangle, Point),
{
    /// Wraps `func`, which is called with each leaf's triangle and point.
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

impl<F> ZoneVisitor for FnVisitor<F>
where
    F: FnMut(&Triangle, Point),
{
    fn visit(&mut self, triangle: &Triangle, point: Point) {
        (self.func)(triangle, point);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf_at(x: f64, y: f64) -> (Triangle, Point) {
        let tri = Triangle::new(
            Point::new(x - 1.0, y),
            Point::new(x, y - 1.0),
            Point::new(x + 1.0, y),
        );
        (tri, Point::new(x, y - 0.5))
    }

    #[test]
    fn collected_tour_follows_visit_order() {
        let mut visitor = CollectingVisitor::with_capacity(3);
        assert!(visitor.points().is_empty());

        let leaves = [leaf_at(5.0, 5.0), leaf_at(1.0, 1.0), leaf_at(3.0, 8.0)];
        for (tri, p) in &leaves {
            visitor.visit(tri, *p);
        }

        let expected: Vec<Point> = leaves.iter().map(|(_, p)| *p).collect();
        assert_eq!(visitor.points(), expected.as_slice());
        assert_eq!(visitor.into_points(), expected);
    }

    #[test]
    fn closure_sees_triangle_and_point() {
        let mut seen = Vec::new();
        let (tri, p) = leaf_at(2.0, 2.0);
        {
            let mut visitor = FnVisitor::new(|t: &Triangle, q: Point| {
                seen.push((t.contains(&q), t.area()));
            });
            visitor.visit(&tri, p);
        }
        assert_eq!(seen, vec![(true, 1.0)]);
    }
}
