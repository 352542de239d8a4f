//! The splitting rule of the snowflake subdivision.

use tracing::trace;

use crate::point::{self, Point};
use crate::{Occupancy, Triangle, Zone};

/// Trait for geometry that can be split in two by the snowflake rule.
pub trait Split: Sized {
    /// Splits `self` into two children.
    ///
    /// Given vertices `(A, B, C)` and `M = midpoint(A, C)`, the children are
    /// `(B, M, A)` and `(C, M, B)`. Splitting never fails and always yields
    /// exactly two children.
    fn split(self) -> (Self, Self);
}

impl Split for Triangle {
    fn split(self) -> (Triangle, Triangle) {
        let [a, b, c] = *self.vertices();
        let m = point::midpoint(&a, &c);
        (Triangle::new(b, m, a), Triangle::new(c, m, b))
    }
}

impl Split for Zone {
    /// Splits the triangle and hands each point to the child with the nearer
    /// centroid.
    ///
    /// A point goes to the first child only if it is strictly closer to that
    /// child's centroid; ties go to the second child. Children with one point
    /// become leaves, children with none stay empty.
    fn split(self) -> (Zone, Zone) {
        let (triangle, occupancy) = self.into_parts();
        let (first_tri, second_tri) = triangle.split();
        let (first_points, second_points) =
            partition_by_centroid(occupancy, &first_tri.centroid(), &second_tri.centroid());

        trace!(
            first = first_points.len(),
            second = second_points.len(),
            "split zone"
        );

        (
            Zone::new(first_tri, first_points),
            Zone::new(second_tri, second_points),
        )
    }
}

/// Splits a zone into two children. See [`Split`].
#[inline]
pub fn split(zone: Zone) -> (Zone, Zone) {
    zone.split()
}

/// Partitions points between two centroids, ties going to `second`.
fn partition_by_centroid(
    occupancy: Occupancy,
    first: &Point,
    second: &Point,
) -> (Vec<Point>, Vec<Point>) {
    let points = occupancy.into_points();
    let mut first_points = Vec::with_capacity(points.len());
    let mut second_points = Vec::with_capacity(points.len());

    for p in points {
        if point::distance(&p, first) < point::distance(&p, second) {
            first_points.push(p);
        } else {
            second_points.push(p);
        }
    }

    (first_points, second_points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn make_triangle(a: [f64; 2], b: [f64; 2], c: [f64; 2]) -> Triangle {
        Triangle::new(
            Point::new(a[0], a[1]),
            Point::new(b[0], b[1]),
            Point::new(c[0], c[1]),
        )
    }

    #[test]
    fn split_remaps_vertices() {
        let tri = make_triangle([0.0, 0.0], [10.0, 0.0], [0.0, 10.0]);
        let (first, second) = tri.split();

        assert_eq!(first, make_triangle([10.0, 0.0], [0.0, 5.0], [0.0, 0.0]));
        assert_eq!(second, make_triangle([0.0, 10.0], [0.0, 5.0], [10.0, 0.0]));
    }

    #[test]
    fn split_children_share_the_median() {
        let tri = make_triangle([1.0, 2.0], [7.0, -3.0], [4.0, 9.0]);
        let (first, second) = tri.split();

        // Both children have the median from M to B as an edge.
        assert_eq!(first.b(), second.b());
        assert_eq!(first.a(), second.c());
        assert_eq!(first.a(), tri.b());
    }

    #[test]
    fn split_halves_the_area() {
        let tri = make_triangle([0.0, 0.0], [10.0, 0.0], [0.0, 10.0]);
        let (first, second) = tri.split();

        assert_relative_eq!(first.area(), 25.0);
        assert_relative_eq!(second.area(), 25.0);
    }

    #[test]
    fn child_centroids_match_vertex_averages() {
        let tri = make_triangle([0.0, 0.0], [10.0, 0.0], [0.0, 10.0]);
        let [a, b, c] = *tri.vertices();
        let m = point::midpoint(&a, &c);

        let zone = Zone::new(tri, vec![Point::new(1.0, 1.0), Point::new(2.0, 7.0)]);
        let (first, second) = split(zone);

        assert_relative_eq!(first.triangle().centroid(), point::average(&[b, m, a]));
        assert_relative_eq!(second.triangle().centroid(), point::average(&[c, m, b]));
    }

    #[test]
    fn points_go_to_nearest_centroid() {
        // Children centroids are (20/3, 10/3) and (20/3, 10).
        let tri = make_triangle([0.0, 0.0], [20.0, 0.0], [0.0, 20.0]);
        let p1 = Point::new(1.0, 1.0);
        let p2 = Point::new(9.0, 9.0);

        let (first, second) = Zone::new(tri, vec![p1, p2]).split();

        assert_eq!(first.occupancy(), &Occupancy::Leaf(p1));
        assert_eq!(second.occupancy(), &Occupancy::Leaf(p2));
    }

    #[test]
    fn ties_go_to_second_child() {
        // Children centroids are (10/3, 10) and (10, 10/3); the line y = x is
        // equidistant from both.
        let tri = make_triangle([0.0, 20.0], [0.0, 0.0], [20.0, 0.0]);
        let (first, second) = tri.split();
        let p = Point::new(4.0, 4.0);
        assert_relative_eq!(
            point::distance(&p, &first.centroid()),
            point::distance(&p, &second.centroid())
        );

        let (first, second) = Zone::new(tri, vec![p]).split();
        assert!(first.is_empty());
        assert_eq!(second.occupancy(), &Occupancy::Leaf(p));
    }

    #[test]
    fn all_points_in_one_child_leaves_other_empty() {
        let tri = make_triangle([0.0, 0.0], [20.0, 0.0], [0.0, 20.0]);
        let points = vec![Point::new(1.0, 1.0), Point::new(2.0, 1.0), Point::new(1.0, 2.0)];

        let (first, second) = Zone::new(tri, points.clone()).split();

        assert_eq!(first.occupancy(), &Occupancy::Unresolved(points));
        assert!(second.is_empty());
    }

    #[test]
    fn split_conserves_points() {
        let tri = make_triangle([0.0, 0.0], [20.0, 0.0], [0.0, 20.0]);
        let points: Vec<Point> = (0..10)
            .map(|i| Point::new(i as f64, 9.0 - i as f64))
            .collect();

        let (first, second) = Zone::new(tri, points.clone()).split();
        assert_eq!(first.point_count() + second.point_count(), points.len());
        for p in &points {
            let owners = [&first, &second]
                .iter()
                .filter(|z| z.occupancy().as_slice().contains(p))
                .count();
            assert_eq!(owners, 1);
        }
    }

    #[test]
    fn empty_zone_splits_into_two_empty_zones() {
        let tri = make_triangle([0.0, 0.0], [20.0, 0.0], [0.0, 20.0]);
        let (first, second) = Zone::new(tri, vec![]).split();
        assert!(first.is_empty());
        assert!(second.is_empty());
    }
}
