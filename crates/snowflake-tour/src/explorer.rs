//! Depth-first exploration of the snowflake subdivision.
//!
//! The subdivision tree is never stored. The explorer keeps a worklist of
//! zones: empty zones are dropped, leaves are handed to a visitor, and any
//! zone with two or more points is replaced by its two children. Children are
//! always processed before the siblings queued after them, so leaves come out
//! in the fractal's left-to-right spatial order.
//!
//! # Termination
//!
//! Every split hands each point to exactly one child, so exploration ends as
//! long as splits keep separating points. Coincident points are never
//! separated: they land in the same child at every level and the unbounded
//! traversal does not return. [`Explorer::with_max_depth`] turns that case
//! into a [`TourError::DepthExceeded`].

use tracing::{debug, warn};

use crate::visitor::{CollectingVisitor, ZoneVisitor};
use crate::{Occupancy, Point, Split, TourError, TourResult, Zone};

/// Counters gathered during one exploration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExploreStats {
    /// Number of zones split.
    pub splits: usize,
    /// Number of empty zones dropped.
    pub dropped: usize,
    /// Number of leaves emitted.
    pub leaves: usize,
    /// Deepest level reached; the root is at depth 0.
    pub max_depth_reached: usize,
}

/// Drives the recursive splitting of a root zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct Explorer {
    max_depth: Option<usize>,
}

impl Explorer {
    /// Creates an explorer with no depth limit.
    pub fn new() -> Self {
        Self { max_depth: None }
    }

    /// Creates an explorer that refuses to split zones at `max_depth` or
    /// deeper.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth: Some(max_depth),
        }
    }

    /// Returns the configured depth limit, if any.
    #[inline]
    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Explores `zone`, handing every leaf to `visitor` in tour order.
    ///
    /// Leaves already visited before a depth error stay visited.
    #[tracing::instrument(skip_all, fields(points = zone.point_count(), max_depth = ?self.max_depth))]
    pub fn explore<V: ZoneVisitor>(&self, zone: Zone, visitor: &mut V) -> TourResult<ExploreStats> {
        let mut stats = ExploreStats::default();
        let mut worklist = vec![(zone, 0usize)];

        while let Some((zone, depth)) = worklist.pop() {
            stats.max_depth_reached = stats.max_depth_reached.max(depth);

            let (triangle, occupancy) = zone.into_parts();
            match occupancy {
                Occupancy::Empty => stats.dropped += 1,
                Occupancy::Leaf(point) => {
                    visitor.visit(&triangle, point);
                    stats.leaves += 1;
                }
                Occupancy::Unresolved(points) => {
                    if let Some(max_depth) = self.max_depth {
                        if depth >= max_depth {
                            warn!(
                                depth,
                                points = points.len(),
                                "depth limit reached, points may be coincident"
                            );
                            return Err(TourError::DepthExceeded {
                                max_depth,
                                points: points.len(),
                            });
                        }
                    }

                    let (first, second) = Zone::new(triangle, points).split();
                    stats.splits += 1;

                    // Stack: push the second child first so the first is
                    // explored next.
                    worklist.push((second, depth + 1));
                    worklist.push((first, depth + 1));
                }
            }
        }

        debug!(
            leaves = stats.leaves,
            splits = stats.splits,
            dropped = stats.dropped,
            depth = stats.max_depth_reached,
            "exploration finished"
        );

        Ok(stats)
    }

    /// Explores `zone` and returns its points in tour order.
    pub fn explode(&self, zone: Zone) -> TourResult<Vec<Point>> {
        let mut visitor = CollectingVisitor::with_capacity(zone.point_count());
        self.explore(zone, &mut visitor)?;
        Ok(visitor.into_points())
    }
}

/// Flattens `zone` into its points in tour order, with no depth limit.
///
/// Does not return if `zone` holds two or more coincident points; use
/// [`Explorer::with_max_depth`] when the input may contain duplicates.
pub fn explode(zone: Zone) -> Vec<Point> {
    Explorer::new()
        .explode(zone)
        .unwrap_or_else(|_| unreachable!("exploration without a depth limit cannot fail"))
}
