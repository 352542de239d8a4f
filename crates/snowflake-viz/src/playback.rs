//! Step-through playback of a tour for interactive visualization.

use macroquad::prelude::*;
use snowflake_tour::{ExploreStats, Point, Triangle, tour_length};

use crate::draw::{ScreenMapping, draw_leaf, draw_path};

/// Interactive cursor over a finished tour.
///
/// Shows the first `shown` stops of the tour together with their leaf
/// triangles.
pub struct TourPlayback {
    shown: usize,
}

impl Default for TourPlayback {
    fn default() -> Self {
        Self::new()
    }
}

impl TourPlayback {
    /// Creates a playback showing nothing yet.
    pub fn new() -> Self {
        Self { shown: 0 }
    }

    /// Returns how many stops are shown.
    pub fn shown(&self) -> usize {
        self.shown
    }

    /// Shows one more stop. Returns true if anything changed.
    pub fn step_forward(&mut self, total: usize) -> bool {
        if self.shown < total {
            self.shown += 1;
            return true;
        }
        false
    }

    /// Hides the last shown stop. Returns true if anything changed.
    pub fn step_back(&mut self) -> bool {
        if self.shown > 0 {
            self.shown -= 1;
            return true;
        }
        false
    }

    /// Shows the whole tour.
    pub fn show_all(&mut self, total: usize) {
        self.shown = total;
    }

    /// Hides every stop.
    pub fn reset(&mut self) {
        self.shown = 0;
    }

    /// Handles keyboard input for playback.
    /// Returns true if playback state changed.
    pub fn update(&mut self, total: usize) -> bool {
        let mut changed = false;

        if is_key_pressed(KeyCode::N) || is_key_down(KeyCode::Space) {
            changed = self.step_forward(total);
        }
        if is_key_pressed(KeyCode::P) {
            changed = self.step_back();
        }
        if is_key_pressed(KeyCode::A) && self.shown != total {
            self.show_all(total);
            changed = true;
        }
        if is_key_pressed(KeyCode::R) && self.shown != 0 {
            self.reset();
            changed = true;
        }

        changed
    }

    /// Draws the visible part of the tour.
    pub fn render(&self, leaves: &[Triangle], tour: &[Point], mapping: &ScreenMapping) {
        let shown = self.shown.min(tour.len()).min(leaves.len());
        for leaf in &leaves[..shown] {
            draw_leaf(leaf, mapping);
        }
        draw_path(&tour[..shown], mapping, ORANGE);
    }

    /// Draws the playback UI overlay.
    pub fn draw_ui(&self, tour: &[Point], stats: &ExploreStats, y_offset: f32) {
        let shown = self.shown.min(tour.len());

        draw_text(
            &format!("Stops: {} / {}", shown, tour.len()),
            10.0,
            y_offset,
            18.0,
            WHITE,
        );
        draw_text(
            &format!("Length so far: {:.2}", tour_length(&tour[..shown])),
            10.0,
            y_offset + 20.0,
            18.0,
            YELLOW,
        );
        draw_text(
            &format!(
                "Splits: {} | Dropped: {} | Depth: {}",
                stats.splits, stats.dropped, stats.max_depth_reached
            ),
            10.0,
            y_offset + 40.0,
            18.0,
            GREEN,
        );
        draw_text(
            "[N]ext (Space to run) | [P]revious | [A]ll | [R]eset",
            10.0,
            y_offset + 60.0,
            16.0,
            DARKGRAY,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_stay_in_bounds() {
        let mut playback = TourPlayback::new();
        assert!(!playback.step_back());

        assert!(playback.step_forward(2));
        assert!(playback.step_forward(2));
        assert!(!playback.step_forward(2));
        assert_eq!(playback.shown(), 2);

        assert!(playback.step_back());
        assert_eq!(playback.shown(), 1);
    }

    #[test]
    fn show_all_and_reset() {
        let mut playback = TourPlayback::default();
        playback.show_all(7);
        assert_eq!(playback.shown(), 7);
        playback.reset();
        assert_eq!(playback.shown(), 0);
    }
}
