//! Canvas dimensions and the ground plane

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current drawing-surface size. Always at least `MIN_CANVAS_WIDTH` x `MIN_CANVAS_HEIGHT`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    width: f32,
    height: f32,
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(1200.0, 400.0)
    }
}

impl Layout {
    /// Build a layout, clamping degenerate or non-finite sizes up to the minimum
    pub fn new(width: f32, height: f32) -> Self {
        let width = if width.is_finite() { width.max(MIN_CANVAS_WIDTH) } else { MIN_CANVAS_WIDTH };
        let height = if height.is_finite() {
            height.max(MIN_CANVAS_HEIGHT)
        } else {
            MIN_CANVAS_HEIGHT
        };
        Self { width, height }
    }

    /// Responsive sizing: fill most of the viewport, keep the 3:1 aspect ratio
    pub fn from_viewport(viewport_width: f32) -> Self {
        let width = (viewport_width * VIEWPORT_FILL).min(MAX_CANVAS_WIDTH);
        Self::new(width, (width / ASPECT_RATIO).floor())
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Y coordinate of the ground line (screen space, y grows downward)
    pub fn ground_y(&self) -> f32 {
        self.height - GROUND_MARGIN
    }
}
