//! Random point generation over the search region.

use std::collections::HashSet;

use rand::Rng;
use snowflake_tour::{BoundingRegion, Point};
use tracing::{debug, warn};

/// Draws a point count in `[0, max_points)`. Returns 0 when `max_points` is 0.
pub fn sample_count<R: Rng>(rng: &mut R, max_points: usize) -> usize {
    if max_points == 0 {
        return 0;
    }
    rng.random_range(0..max_points)
}

/// Draws up to `count` distinct points uniformly over `region`, with
/// coordinates rounded to `precision` decimal places.
///
/// Rounding can make two samples coincide, and the subdivision never
/// separates coincident points, so repeats are redrawn. If the grid implied
/// by `precision` has fewer than `count` cells, every cell is returned at most
/// once and the result is shorter. Grid cells at the far edge can be nearly
/// unreachable, so sampling also stops once the redraw budget is spent. A
/// region without area yields no points.
pub fn sample_points<R: Rng>(
    rng: &mut R,
    count: usize,
    region: &BoundingRegion,
    precision: u32,
) -> Vec<Point> {
    if !(region.width() > 0.0 && region.height() > 0.0) {
        return Vec::new();
    }

    let scale = 10f64.powi(precision as i32);
    let cells = axis_cells(region.width(), scale) * axis_cells(region.height(), scale);
    let target = if (count as f64) > cells {
        cells as usize
    } else {
        count
    };

    let mut seen = HashSet::with_capacity(target);
    let mut points = Vec::with_capacity(target);
    let mut redraws = 0usize;
    let budget = redraw_budget(target);

    while points.len() < target {
        if redraws >= budget {
            warn!(
                sampled = points.len(),
                requested = target,
                redraws,
                "redraw budget spent, returning fewer points"
            );
            break;
        }

        let x = round_to(rng.random_range(0.0..region.width()), scale);
        let y = round_to(rng.random_range(0.0..region.height()), scale);

        if seen.insert((x.to_bits(), y.to_bits())) {
            points.push(Point::new(x, y));
        } else {
            redraws += 1;
        }
    }

    debug!(count = points.len(), redraws, precision, "sampled points");
    points
}

/// Redraws allowed before giving up on `target` distinct points.
///
/// Filling every cell of an n-cell grid takes about `n ln n` draws.
fn redraw_budget(target: usize) -> usize {
    target.saturating_mul(64).max(10_000)
}

/// Number of distinct rounded values a draw from `[0, extent)` can take.
fn axis_cells(extent: f64, scale: f64) -> f64 {
    (extent * scale - 0.5).ceil().max(0.0) + 1.0
}

fn round_to(value: f64, scale: f64) -> f64 {
    (value * scale).round() / scale
}
