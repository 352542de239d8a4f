//! Plain-text rendering of a tour.

use std::fmt::Write;

use snowflake_tour::{Point, tour_length};

/// Renders one line per point, `index: (x, y)`, followed by the tour length.
///
/// Coordinates are printed with `precision` decimal places.
pub fn render_text(points: &[Point], precision: usize) -> String {
    let width = points.len().saturating_sub(1).to_string().len();
    let mut out = String::new();

    for (i, p) in points.iter().enumerate() {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{i:>width$}: ({:.precision$}, {:.precision$})", p.x, p.y);
    }
    let _ = writeln!(
        out,
        "{} points, length {:.precision$}",
        points.len(),
        tour_length(points)
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tour() {
        assert_eq!(render_text(&[], 2), "0 points, length 0.00\n");
    }

    #[test]
    fn lines_are_indexed_and_aligned() {
        let points: Vec<Point> = (0..11).map(|i| Point::new(i as f64, 0.0)).collect();
        let text = render_text(&points, 1);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 12);
        assert_eq!(lines[0], " 0: (0.0, 0.0)");
        assert_eq!(lines[10], "10: (10.0, 0.0)");
        assert_eq!(lines[11], "11 points, length 10.0");
    }

    #[test]
    fn length_uses_euclidean_distance() {
        let text = render_text(&[Point::new(0.0, 0.0), Point::new(3.0, 4.0)], 2);
        assert!(text.ends_with("2 points, length 5.00\n"));
    }
}
