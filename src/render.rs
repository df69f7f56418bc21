//! Rendering and stats seams
//!
//! The core only needs three drawing calls and two text outputs. Frontends
//! implement these against a canvas, a terminal, or a test recorder.

use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};
use crate::sim::{Color, GameSession};

/// A 2-D surface in play-field units (200x500)
pub trait RenderSurface {
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn set_fill_color(&mut self, color: Color);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
}

/// Health and score readouts
pub trait StatsDisplay {
    fn show(&mut self, health: i32, score: u64);
}

/// Draw one frame: background, then every entity
pub fn draw_frame(session: &GameSession, surface: &mut impl RenderSurface) {
    surface.clear_rect(0.0, 0.0, FIELD_WIDTH, FIELD_HEIGHT);
    surface.set_fill_color(session.background_color());
    surface.fill_rect(0.0, 0.0, FIELD_WIDTH, FIELD_HEIGHT);

    for (_, rect) in session.entities() {
        surface.set_fill_color(rect.color());
        surface.fill_rect(rect.left(), rect.top(), rect.width(), rect.height());
    }
}

/// Push current stats to the display
pub fn update_stats(session: &GameSession, stats: &mut impl StatsDisplay) {
    stats.show(session.health, session.score);
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub enum DrawCall {
        Clear(f32, f32, f32, f32),
        Color(Color),
        Fill(f32, f32, f32, f32),
    }

    /// Records every call for assertions
    #[derive(Debug, Default)]
    pub struct Recorder {
        pub calls: Vec<DrawCall>,
        pub stats: Vec<(i32, u64)>,
    }

    impl RenderSurface for Recorder {
        fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
            self.calls.push(DrawCall::Clear(x, y, w, h));
        }

        fn set_fill_color(&mut self, color: Color) {
            self.calls.push(DrawCall::Color(color));
        }

        fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
            self.calls.push(DrawCall::Fill(x, y, w, h));
        }
    }

    impl StatsDisplay for Recorder {
        fn show(&mut self, health: i32, score: u64) {
            self.stats.push((health, score));
        }
    }
}
