//! Drawing helpers for the tour window.

use std::hash::{Hash, Hasher};

use macroquad::prelude::*;
use snowflake_tour::{BoundingRegion, Point, Triangle};

/// Generates a deterministic color from a triangle's vertices using hashing.
/// Leaves keep their color from frame to frame.
pub fn triangle_color(triangle: &Triangle) -> Color {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    for v in triangle.vertices() {
        v.x.to_bits().hash(&mut hasher);
        v.y.to_bits().hash(&mut hasher);
    }
    let hash = hasher.finish();

    let r = ((hash >> 16) & 0xFF) as u8;
    let g = ((hash >> 8) & 0xFF) as u8;
    let b = (hash & 0xFF) as u8;

    // Keep fills dim so the path stays readable on top.
    Color::from_rgba(r.max(40) / 2, g.max(40) / 2, b.max(40) / 2, 255)
}

/// Maps region coordinates to screen pixels, y pointing up.
#[derive(Debug, Clone, Copy)]
pub struct ScreenMapping {
    scale: f32,
    origin: Vec2,
}

impl ScreenMapping {
    /// Fits `region` into a `width` x `height` screen area with `margin` pixels
    /// on every side.
    pub fn fit(region: &BoundingRegion, width: f32, height: f32, margin: f32) -> Self {
        let usable_w = (width - 2.0 * margin).max(1.0);
        let usable_h = (height - 2.0 * margin).max(1.0);
        let scale = (usable_w / region.width() as f32).min(usable_h / region.height() as f32);
        Self {
            scale,
            origin: vec2(margin, height - margin),
        }
    }

    /// Converts a region point to screen coordinates.
    pub fn to_screen(&self, p: &Point) -> Vec2 {
        vec2(
            self.origin.x + p.x as f32 * self.scale,
            self.origin.y - p.y as f32 * self.scale,
        )
    }
}

/// Draws a filled leaf triangle.
pub fn draw_leaf(triangle: &Triangle, mapping: &ScreenMapping) {
    let [a, b, c] = (*triangle.vertices()).map(|v| mapping.to_screen(&v));
    draw_triangle(a, b, c, triangle_color(triangle));
    draw_triangle_lines(a, b, c, 1.0, Color::from_rgba(0, 0, 0, 120));
}

/// Draws the outline of the search region.
pub fn draw_region(region: &BoundingRegion, mapping: &ScreenMapping) {
    let top_left = mapping.to_screen(&Point::new(0.0, region.height()));
    let bottom_right = mapping.to_screen(&Point::new(region.width(), 0.0));
    let size = bottom_right - top_left;
    draw_rectangle_lines(top_left.x, top_left.y, size.x, size.y, 2.0, GRAY);
}

/// Draws the open path through `points` and a dot at each stop.
pub fn draw_path(points: &[Point], mapping: &ScreenMapping, color: Color) {
    for pair in points.windows(2) {
        let from = mapping.to_screen(&pair[0]);
        let to = mapping.to_screen(&pair[1]);
        draw_line(from.x, from.y, to.x, to.y, 2.0, color);
    }
    for p in points {
        let s = mapping.to_screen(p);
        draw_circle(s.x, s.y, 3.0, WHITE);
    }
}
